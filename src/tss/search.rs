/// 最近参考点距离：在升序数组上做二分查找。
///
/// - 查询点在首元素之前 / 末元素之后：直接返回到端点的距离；
/// - 否则在 `[lo, hi)` 上收缩窗口：剩 2 个元素时取两者最小，
///   剩 1 个时返回其距离，中点命中返回 0；
/// - 中点值 < `pos` 时窗口变为中点之后（不含中点），
///   中点值 > `pos` 时变为中点及之前（含中点）。
///
/// 不含中点的一侧会丢掉可能最近的前驱，
/// 因此把最后一次被丢弃的中点记为候选，在出口处一并比较。
/// 空数组返回 `None`。
pub fn nearest_distance(positions: &[i64], pos: i64) -> Option<u64> {
    let first = *positions.first()?;
    let last = *positions.last()?;
    if pos < first {
        return Some(first.abs_diff(pos));
    }
    if pos > last {
        return Some(pos.abs_diff(last));
    }

    let mut lo = 0usize;
    let mut hi = positions.len();
    // 被排除的最大前驱（总是 < pos）
    let mut below: Option<i64> = None;
    loop {
        let window = &positions[lo..hi];
        let best = match window.len() {
            2 => Some(window[0].abs_diff(pos).min(window[1].abs_diff(pos))),
            1 => Some(window[0].abs_diff(pos)),
            _ => None,
        };
        if let Some(d) = best {
            return Some(below.map_or(d, |b| d.min(pos.abs_diff(b))));
        }

        let mid = lo + (hi - lo) / 2;
        let v = positions[mid];
        if v == pos {
            return Some(0);
        } else if v < pos {
            below = Some(v);
            lo = mid + 1;
        } else {
            hi = mid + 1;
        }
    }
}

/// Floor midpoint of `[start, end)`. The sum is taken in `i128`, so any pair
/// of `i64` coordinates works.
#[inline]
pub fn midpoint(start: i64, end: i64) -> i64 {
    (i128::from(start) + i128::from(end)).div_euclid(2) as i64
}
