use crate::domain::course::model::Course;

use super::random::RandomSource;

/// Slice size for the single pick made per recommendation slot.
pub const SLOT_TOP_K: usize = 3;
/// Slice size and sample size of the catalog-wide fallback.
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_SAMPLE_SIZE: usize = 2;

/// The `k` best entries of an already ranked list.
pub fn top_slice(ranked: &[Course], k: usize) -> &[Course] {
    &ranked[..ranked.len().min(k)]
}

/// One course drawn uniformly from the top `k` of `ranked`.
pub fn pick_one_of_top<'a>(
    ranked: &'a [Course],
    k: usize,
    random: &dyn RandomSource,
) -> Option<&'a Course> {
    let top = top_slice(ranked, k);
    if top.is_empty() {
        return None;
    }
    top.get(random.pick(top.len()))
}

/// Up to `amount` distinct courses drawn from the top `k` of `ranked`,
/// in draw order.
pub fn sample_top<'a>(
    ranked: &'a [Course],
    k: usize,
    amount: usize,
    random: &dyn RandomSource,
) -> Vec<&'a Course> {
    let top = top_slice(ranked, k);
    let amount = amount.min(top.len());
    if amount == 0 {
        return Vec::new();
    }
    random
        .sample(top.len(), amount)
        .into_iter()
        .filter_map(|i| top.get(i))
        .collect()
}
