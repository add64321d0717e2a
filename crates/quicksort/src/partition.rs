use crate::engine::SortRun;

/// Two-way Hoare partition of `[lo, hi]` around `pivot`.
///
/// - Cursors converge from both ends; the scan conditions are strict, so
///   pivot-equal elements stop either cursor and get exchanged. That is what
///   keeps duplicate-heavy ranges from collapsing onto one side.
/// - Returns `split` with `[lo, split]` <= pivot and `[split + 1, hi]` >=
///   pivot, `lo <= split < hi`.
///
/// Requires `lo < hi` and the pivot value present in `[lo, hi]`.
pub(crate) fn hoare(run: &mut SortRun<'_>, lo: usize, hi: usize, pivot: i64) -> usize {
    debug_assert!(lo < hi && hi < run.data.len());

    let mut i = lo;
    let mut j = hi;

    loop {
        while run.data[i] < pivot {
            i += 1;
        }
        while run.data[j] > pivot {
            j -= 1;
        }
        if i >= j {
            break;
        }
        run.swap(i, j);
        i += 1;
        j -= 1;
    }

    // j lands on hi only when the pivot is the range maximum sitting at hi;
    // cap the split so the right sub-range is never empty.
    j.min(hi - 1)
}

/// Three-way Dutch National Flag partition of `[lo, hi]` around `pivot`.
///
/// Returns `(i, j)` with `[lo, i - 1]` < pivot, `[i, j - 1]` == pivot and
/// `[j, hi]` > pivot. The equal band is non-empty whenever the pivot value is
/// present in the range, so excluding it from recursion always makes
/// progress.
pub(crate) fn dnf(run: &mut SortRun<'_>, lo: usize, hi: usize, pivot: i64) -> (usize, usize) {
    debug_assert!(lo < hi && hi < run.data.len());

    let mut i = lo;
    let mut j = lo;
    let mut n = hi;

    while j <= n {
        if run.data[j] < pivot {
            run.swap(i, j);
            i += 1;
            j += 1;
        } else if run.data[j] > pivot {
            run.swap(j, n);
            n -= 1;
        } else {
            j += 1;
        }
    }

    (i, j)
}
