/// One record of a `>`-delimited sequence collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

/// Splits an in-memory collection on the `>` marker.
///
/// Within a chunk the first empty line is dropped, the next line is the id and
/// every further line is appended to the sequence as-is. `\r` before a `\n` is
/// discarded. Chunks that end up with no lines are skipped.
pub struct FastaReader<'a> {
    chunks: std::slice::Split<'a, u8, fn(&u8) -> bool>,
}

fn is_marker(b: &u8) -> bool {
    *b == b'>'
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl<'a> FastaReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { chunks: data.split(is_marker as fn(&u8) -> bool) }
    }

    pub fn next_record(&mut self) -> Option<FastaRecord> {
        for chunk in self.chunks.by_ref() {
            if chunk.is_empty() {
                continue;
            }
            if let Some(rec) = parse_chunk(chunk) {
                return Some(rec);
            }
        }
        None
    }
}

impl Iterator for FastaReader<'_> {
    type Item = FastaRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

fn parse_chunk(chunk: &[u8]) -> Option<FastaRecord> {
    let mut lines: Vec<&[u8]> = chunk.split(|&b| b == b'\n').map(strip_cr).collect();
    if let Some(i) = lines.iter().position(|l| l.is_empty()) {
        lines.remove(i);
    }
    let (header, rest) = lines.split_first()?;

    let mut seq = Vec::with_capacity(rest.iter().map(|l| l.len()).sum());
    for line in rest {
        seq.extend_from_slice(line);
    }
    Some(FastaRecord { id: String::from_utf8_lossy(header).into_owned(), seq })
}
