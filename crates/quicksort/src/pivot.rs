use rand::Rng;

use crate::PivotRule;
use crate::engine::SortRun;

/// Picks the pivot value for `[lo, hi]` according to `rule`.
///
/// Only `Median` mutates the buffer; its reordering swaps go through the
/// counted swap primitive like every other swap.
pub(crate) fn pivot_value(run: &mut SortRun<'_>, rule: PivotRule, lo: usize, hi: usize) -> i64 {
    debug_assert!(lo < hi && hi < run.data.len());

    match rule {
        PivotRule::Low => run.data[lo],
        PivotRule::Mid => run.data[lo + (hi - lo) / 2],
        PivotRule::Median => median_of_three(run, lo, hi),
        PivotRule::High => run.data[hi - 1],
        PivotRule::Random => {
            let at = run.rng.random_range(lo..=hi);
            run.data[at]
        }
    }
}

/// Reorders `{lo, mid, hi}` with at most three guarded swaps so that the
/// minimum sample sits at `lo` and the median sample at `hi`, then reads the
/// pivot at `hi`. The pivot is therefore never the minimum of the three,
/// which keeps splits balanced on sorted and reverse-sorted ranges.
fn median_of_three(run: &mut SortRun<'_>, lo: usize, hi: usize) -> i64 {
    let mid = lo + (hi - lo) / 2;

    if run.data[mid] < run.data[lo] {
        run.swap(lo, mid);
    }
    if run.data[hi] < run.data[lo] {
        run.swap(lo, hi);
    }
    if run.data[mid] < run.data[hi] {
        run.swap(mid, hi);
    }

    run.data[hi]
}
