//! 区间注释：为 BED 类区间追加到最近 TSS 的距离。
//!
//! 流程：参考文件 -> [`PositionIndex`]（全部排序完成）-> 逐行取区间中点 ->
//! [`nearest_distance`] -> 追加一列写出。参考中没有的染色体直接丢弃该行。

pub mod annotate;
pub mod index;
pub mod search;

pub use annotate::{annotate_intervals, Annotated, DISTANCE_COLUMN};
pub use index::PositionIndex;
pub use search::{midpoint, nearest_distance};

use log::info;

use crate::error::{KmerTssError, Result};
use crate::io;

/// Options of the `nearest-tss` command.
#[derive(Debug, Clone)]
pub struct TssOpt {
    pub reference: String,
    pub delimiter: char,
    pub threads: usize,
}

impl Default for TssOpt {
    fn default() -> Self {
        Self {
            reference: "hg19.tss.loci.gz".to_string(),
            delimiter: '\t',
            threads: 1,
        }
    }
}

/// Build the index from `opt.reference`, annotate `input` and write `output`.
///
/// Output is only written once every line has been annotated.
pub fn nearest_tss(input: &str, output: &str, opt: &TssOpt) -> Result<Annotated> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opt.threads.max(1))
        .build()
        .map_err(|e| KmerTssError::InvalidParameter {
            parameter: "threads".to_string(),
            reason: e.to_string(),
        })?;

    info!("Reading reference positions from {}", opt.reference);
    let reference = io::read_to_string(&opt.reference)?;
    let index = pool.install(|| PositionIndex::parse(&reference, opt.delimiter))?;
    drop(reference);
    info!(
        "Indexed {} positions on {} chromosomes",
        index.num_positions(),
        index.num_chroms()
    );

    info!("Reading intervals from {}", input);
    let text = io::read_to_string(input)?;
    let res = pool.install(|| annotate_intervals(&text, opt.delimiter, &index))?;

    io::write_all(output, res.text.as_bytes())?;
    info!(
        "{} intervals annotated, {} dropped (chromosome not in reference), written to {}",
        res.annotated, res.dropped, output
    );
    Ok(res)
}
