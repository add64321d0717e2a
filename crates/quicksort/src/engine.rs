use rand::rngs::StdRng;

use crate::metrics::SortMetrics;
use crate::{PartitionScheme, PivotRule, partition, pivot};

/// State threaded through one sort call: the buffer borrow, the counters,
/// the run-owned random source and an optional metrics sink. Strategies
/// receive this explicitly instead of capturing shared mutable context.
pub(crate) struct SortRun<'a> {
    pub(crate) data: &'a mut [i64],
    pub(crate) rng: StdRng,
    pub(crate) swaps: u64,
    partitions: u64,
    metrics: Option<&'a mut SortMetrics>,
}

impl<'a> SortRun<'a> {
    pub(crate) fn new(
        data: &'a mut [i64],
        rng: StdRng,
        metrics: Option<&'a mut SortMetrics>,
    ) -> Self {
        Self {
            data,
            rng,
            swaps: 0,
            partitions: 0,
            metrics,
        }
    }

    pub(crate) fn sort(&mut self, rule: PivotRule, scheme: PartitionScheme) {
        if let Some(metrics) = self.metrics.as_deref_mut() {
            metrics.start();
        }

        if self.data.len() > 1 {
            self.sort_range(rule, scheme, 0, self.data.len() - 1);
        }

        let (partitions, swaps) = (self.partitions, self.swaps);
        if let Some(metrics) = self.metrics.as_deref_mut() {
            metrics.finish(partitions, swaps);
        }
    }

    fn sort_range(&mut self, rule: PivotRule, scheme: PartitionScheme, lo: usize, hi: usize) {
        if lo >= hi {
            return;
        }

        match scheme {
            PartitionScheme::Hoare => {
                let split = self.hoare_step(rule, lo, hi);
                self.sort_range(rule, scheme, lo, split);
                self.sort_range(rule, scheme, split + 1, hi);
            }
            PartitionScheme::Dnf => {
                let (lt, gt) = self.dnf_step(rule, lo, hi);
                if lt > lo {
                    self.sort_range(rule, scheme, lo, lt - 1);
                }
                self.sort_range(rule, scheme, gt, hi);
            }
        }
    }

    fn hoare_step(&mut self, rule: PivotRule, lo: usize, hi: usize) -> usize {
        self.partitions += 1;
        let swaps_before = self.swaps;

        let pv = pivot::pivot_value(self, rule, lo, hi);
        let split = partition::hoare(self, lo, hi, pv);

        if self.metrics.is_some() {
            let swaps_here = self.swaps - swaps_before;
            let line = format!(
                "{:?} : [ {lo} - {hi} ] : {pv} : {split} : {swaps_here}",
                self.data
            );
            self.push_step(line);
        }

        split
    }

    fn dnf_step(&mut self, rule: PivotRule, lo: usize, hi: usize) -> (usize, usize) {
        self.partitions += 1;
        let swaps_before = self.swaps;

        let pv = pivot::pivot_value(self, rule, lo, hi);
        let (lt, gt) = partition::dnf(self, lo, hi, pv);

        if self.metrics.is_some() {
            let swaps_here = self.swaps - swaps_before;
            let line = format!(
                "{:?} : [ {lo} - {hi} ] : {pv} : [ {lt} - {gt} ] : {swaps_here}",
                self.data
            );
            self.push_step(line);
        }

        (lt, gt)
    }

    /// Single exchange point: every swap in the engine funnels through here
    /// so the counter stays authoritative. `i == j` is a no-op and does not
    /// count.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.data.swap(i, j);
            self.swaps += 1;
        }
    }

    fn push_step(&mut self, line: String) {
        if let Some(metrics) = self.metrics.as_deref_mut() {
            metrics.push_step(line);
        }
    }
}
