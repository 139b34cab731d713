//! 滑动窗口 k-mer 计数。
//!
//! 窗口从 0 开始，条件为 `start + k < len`：
//! 恰好落在序列末尾的最后一个完整窗口不计入。
//! 下游结果依赖这一计数方式，不要“修正”它。

mod table;

pub use table::KmerTable;

use std::path::Path;

use log::info;

use crate::error::{KmerTssError, Result};
use crate::io::{self, fasta::FastaReader};

/// Options of the `count-kmers` command.
#[derive(Debug, Clone)]
pub struct KmerOpt {
    pub k: usize,
    pub out: String,
}

impl Default for KmerOpt {
    fn default() -> Self {
        Self { k: 1, out: "kmers.txt".to_string() }
    }
}

fn check_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(KmerTssError::InvalidParameter {
            parameter: "k".to_string(),
            reason: "k-mer length must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Slide a width-`k` window over one sequence and add every window to `table`.
pub fn tally_sequence(table: &mut KmerTable, seq: &[u8]) {
    let k = table.k();
    let mut i = 0usize;
    while i + k < seq.len() {
        table.add(&seq[i..i + k]);
        i += 1;
    }
}

/// Tally every record of an in-memory `>`-delimited collection.
pub fn tally_fasta(data: &[u8], k: usize) -> Result<KmerTable> {
    check_k(k)?;
    let records: Vec<_> = FastaReader::new(data).collect();
    let n = records.len();
    let mut table = KmerTable::new(k);
    for (i, rec) in records.iter().enumerate() {
        info!("Processing {} of {}", i + 1, n);
        tally_sequence(&mut table, &rec.seq);
    }
    Ok(table)
}

/// Read `input`, count its k-mers and write the table to `opt.out`.
pub fn count_kmers<P: AsRef<Path>>(input: P, opt: &KmerOpt) -> Result<KmerTable> {
    check_k(opt.k)?;
    info!("Reading file...");
    let data = io::read_all(input)?;
    let table = tally_fasta(&data, opt.k)?;

    info!("Writing results...");
    let mut buf = Vec::with_capacity(table.len() * (opt.k + 8));
    table.write_tsv(&mut buf)?;
    io::write_all(&opt.out, &buf)?;
    info!(
        "{} distinct {}-mers ({} total) written to {}",
        table.len(),
        opt.k,
        table.total(),
        opt.out
    );
    Ok(table)
}
