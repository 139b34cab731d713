use std::collections::HashMap;
use std::io::Write;

/// Uppercase k-mer -> occurrence count.
///
/// Only ever grows during a tally; drained once by [`KmerTable::write_tsv`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerTable {
    k: usize,
    counts: HashMap<Vec<u8>, u64>,
}

impl KmerTable {
    pub fn new(k: usize) -> Self {
        Self { k, counts: HashMap::new() }
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Count one window; the key is uppercased before insertion.
    #[inline]
    pub fn add(&mut self, window: &[u8]) {
        let key = window.to_ascii_uppercase();
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, kmer: &[u8]) -> u64 {
        self.counts.get(&kmer.to_ascii_uppercase()).copied().unwrap_or(0)
    }

    /// Number of distinct k-mers.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_slice(), v))
    }

    /// Entries in ascending byte order of the k-mer.
    pub fn sorted(&self) -> Vec<(&[u8], u64)> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable_by(|a, b| a.0.cmp(b.0));
        v
    }

    /// `<kmer>\t<count>\r\n` per distinct k-mer, sorted by k-mer.
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (kmer, count) in self.sorted() {
            out.write_all(kmer)?;
            write!(out, "\t{}\r\n", count)?;
        }
        Ok(())
    }
}
