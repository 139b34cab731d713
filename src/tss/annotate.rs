use rayon::prelude::*;

use crate::error::{KmerTssError, Result};
use crate::tss::index::PositionIndex;
use crate::tss::search::{midpoint, nearest_distance};

/// Column name appended to a detected header line.
pub const DISTANCE_COLUMN: &str = "tss.distance";

/// Outcome of annotating one interval text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotated {
    /// Output text, `\n`-terminated lines.
    pub text: String,
    pub header: bool,
    pub annotated: usize,
    /// Intervals whose chromosome has no reference positions.
    pub dropped: usize,
}

#[inline]
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A first line whose 2nd and 3rd fields are not both digit runs is a header.
pub fn is_header(line: &str, delim: char) -> bool {
    let mut fields = line.split(delim).skip(1);
    let start = fields.next().unwrap_or("");
    let end = fields.next().unwrap_or("");
    !(is_digits(start) && is_digits(end))
}

/// Annotate one interval line. `Ok(None)` means the chromosome is unknown.
pub fn annotate_line(
    line: &str,
    lineno: usize,
    delim: char,
    index: &PositionIndex,
) -> Result<Option<String>> {
    let mut fields = line.split(delim);
    let (chrom, start, end) = match (fields.next(), fields.next(), fields.next()) {
        (Some(c), Some(s), Some(e)) => (c, s, e),
        _ => {
            return Err(KmerTssError::IntervalParse {
                line: lineno,
                reason: format!("fewer than 3 fields in {:?}", line),
            })
        }
    };
    let start = parse_coord(start, "start", lineno)?;
    let end = parse_coord(end, "end", lineno)?;

    let Some(positions) = index.get(chrom) else {
        return Ok(None);
    };
    let Some(dist) = nearest_distance(positions, midpoint(start, end)) else {
        return Ok(None);
    };
    Ok(Some(format!("{}{}{}", line, delim, dist)))
}

fn parse_coord(field: &str, what: &str, lineno: usize) -> Result<i64> {
    field.trim().parse::<i64>().map_err(|_| KmerTssError::IntervalParse {
        line: lineno,
        reason: format!("{} {:?} is not an integer", what, field),
    })
}

/// Annotate a whole interval text.
///
/// Lines are processed on the current rayon pool; output keeps input order.
/// Any malformed line aborts the run and no text is returned.
pub fn annotate_intervals(text: &str, delim: char, index: &PositionIndex) -> Result<Annotated> {
    if text.is_empty() {
        return Ok(Annotated::default());
    }
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let mut out = Annotated::default();
    let mut first_data = 0usize;
    if let Some(first) = lines.first() {
        if is_header(first, delim) {
            out.text.push_str(first);
            out.text.push(delim);
            out.text.push_str(DISTANCE_COLUMN);
            out.text.push('\n');
            out.header = true;
            first_data = 1;
        }
    }
    // 第一个空行（通常来自末尾换行）直接丢弃，其余空行按格式错误处理
    if let Some(i) = lines[first_data..].iter().position(|l| l.is_empty()) {
        lines.remove(first_data + i);
    }

    let results: Vec<Option<String>> = lines[first_data..]
        .par_iter()
        .enumerate()
        .map(|(i, line)| annotate_line(line, first_data + i + 1, delim, index))
        .collect::<Result<_>>()?;

    for r in results {
        match r {
            Some(l) => {
                out.text.push_str(&l);
                out.text.push('\n');
                out.annotated += 1;
            }
            None => out.dropped += 1,
        }
    }
    Ok(out)
}
