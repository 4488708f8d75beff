//! Decile ranking of the daily score cross-section.

/// Minimum number of scored assets required before deciles are assigned.
/// With fewer, the boundary buckets are not meaningful (bucket 9 would sit
/// empty) and the day produces no candidates.
pub const MIN_RANKED_ASSETS: usize = 10;

/// Assign each score a decile bucket 0 (lowest) through 9 (highest).
///
/// Returns one entry per input, in input order. All entries are `None` when
/// fewer than [`MIN_RANKED_ASSETS`] scores are supplied.
///
/// The asset at ascending rank `r` of `n` lands in bucket
/// `floor((r + 1/2) * 10 / n)`: bucket sizes differ by at most one, and the
/// oversized buckets fall in the interior rather than at the extremes, so
/// bucket 0 and bucket 9 hold exactly the lowest and highest ~n/10 scores.
/// Tie-break is stable — equal scores keep their input order, so the
/// earlier input receives the lower rank.
pub fn assign_deciles(scores: &[f64]) -> Vec<Option<u8>> {
    let n = scores.len();
    if n < MIN_RANKED_ASSETS {
        return vec![None; n];
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        scores[a]
            .partial_cmp(&scores[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut deciles = vec![None; n];
    for (rank, &idx) in order.iter().enumerate() {
        deciles[idx] = Some(((rank * 20 + 10) / (2 * n)) as u8);
    }
    deciles
}
