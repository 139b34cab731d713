use std::collections::HashMap;

use rayon::prelude::*;

use crate::error::{KmerTssError, Result};

/// 染色体 -> 升序位置列表（保留重复位置）。
///
/// 构建时先追加、最后统一排序；构建完成后只读。
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    chroms: HashMap<String, Vec<i64>>,
}

impl PositionIndex {
    /// Parse a two-column `chrom<delim>position` text.
    ///
    /// Any line without exactly two fields, or with a non-integer position,
    /// fails the whole build.
    pub fn parse(text: &str, delim: char) -> Result<Self> {
        let mut chroms: HashMap<String, Vec<i64>> = HashMap::new();
        let text = text.trim();
        if !text.is_empty() {
            for (i, line) in text.split('\n').enumerate() {
                let (chrom, pos) = parse_line(line, delim, i + 1)?;
                chroms.entry(chrom.to_string()).or_default().push(pos);
            }
        }
        // input order is not guaranteed
        chroms.par_iter_mut().for_each(|(_, v)| v.sort_unstable());
        Ok(Self { chroms })
    }

    /// Sorted positions of `chrom`, never empty when present.
    pub fn get(&self, chrom: &str) -> Option<&[i64]> {
        self.chroms.get(chrom).map(Vec::as_slice)
    }

    pub fn num_chroms(&self) -> usize {
        self.chroms.len()
    }

    /// Total positions, duplicates included.
    pub fn num_positions(&self) -> usize {
        self.chroms.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chroms.is_empty()
    }
}

fn parse_line(line: &str, delim: char, lineno: usize) -> Result<(&str, i64)> {
    let fields: Vec<&str> = line.split(delim).collect();
    if fields.len() != 2 {
        return Err(KmerTssError::ReferenceParse {
            line: lineno,
            reason: format!("expected 2 fields, found {} in {:?}", fields.len(), line),
        });
    }
    let pos = fields[1].trim().parse::<i64>().map_err(|_| KmerTssError::ReferenceParse {
        line: lineno,
        reason: format!("position {:?} is not an integer", fields[1].trim()),
    })?;
    Ok((fields[0], pos))
}
