//! # kmer-tss
//!
//! 两个互不相关的批处理小工具：
//!
//! - **k-mer 计数**：把 `>` 分隔的序列集合拆成记录，
//!   滑动定长窗口统计大写 k-mer 出现次数
//! - **最近 TSS 距离**：按染色体建立升序位置表，
//!   为每个区间中点二分查找最近参考点
//!
//! ## 快速示例
//!
//! ```rust
//! use kmer_tss::kmer;
//! use kmer_tss::tss::{nearest_distance, PositionIndex};
//!
//! let table = kmer::tally_fasta(b">r1\nACGTacg\n", 2).unwrap();
//! assert_eq!(table.get(b"AC"), 2);
//!
//! let idx = PositionIndex::parse("chr1\t30\nchr1\t10\nchr1\t20\n", '\t').unwrap();
//! let tss = idx.get("chr1").unwrap();
//! assert_eq!(nearest_distance(tss, 25), Some(5));
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — 整文件读写（`.gz` 后缀自动压缩/解压）与序列记录拆分
//! - [`kmer`] — k-mer 表与滑动窗口计数
//! - [`tss`] — 位置索引、最近距离二分查找、区间注释
//! - [`logging`] — 日志初始化
//! - [`error`] — 错误类型

pub mod error;
pub mod io;
pub mod kmer;
pub mod logging;
pub mod tss;

pub use error::{KmerTssError, Result};
