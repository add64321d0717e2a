mod engine;
mod error;
mod generator;
mod metrics;
mod partition;
mod pivot;

use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use error::SortError;
pub use generator::{ALL_ARRAY_CASES, ArrayCase, generate_case};
pub use metrics::SortMetrics;

/// How the pivot value is chosen from the active `[lo, hi]` range.
///
/// `Median` partially reorders the three sampled elements in place before
/// reading the pivot; the other rules only read. `Random` draws from the
/// run-owned random source.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotRule {
    Low,
    Mid,
    Median,
    High,
    Random,
}

/// How the active range is rearranged around the pivot value.
///
/// `Hoare` is the two-way crossing-cursor scan; `Dnf` is the three-way Dutch
/// National Flag pass whose pivot-equal band is excluded from recursion,
/// which keeps duplicate-dominated input linear.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PartitionScheme {
    Hoare,
    Dnf,
}

pub const ALL_PIVOT_RULES: [PivotRule; 5] = [
    PivotRule::Low,
    PivotRule::Mid,
    PivotRule::Median,
    PivotRule::High,
    PivotRule::Random,
];

pub const ALL_PARTITION_SCHEMES: [PartitionScheme; 2] =
    [PartitionScheme::Hoare, PartitionScheme::Dnf];

impl PivotRule {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::Median => "median",
            Self::High => "high",
            Self::Random => "random",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, SortError> {
        match label {
            "low" => Ok(Self::Low),
            "mid" => Ok(Self::Mid),
            "median" => Ok(Self::Median),
            "high" => Ok(Self::High),
            "random" => Ok(Self::Random),
            _ => Err(SortError::UnknownPivotRule(label.to_owned())),
        }
    }
}

impl PartitionScheme {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hoare => "hoare",
            Self::Dnf => "dnf",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, SortError> {
        match label {
            "hoare" => Ok(Self::Hoare),
            "dnf" => Ok(Self::Dnf),
            _ => Err(SortError::UnknownPartitionScheme(label.to_owned())),
        }
    }
}

impl FromStr for PivotRule {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl FromStr for PartitionScheme {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Sorts in place with the default strategies: `Median` pivot, `Dnf`
/// partition.
pub fn sort_i64(data: &mut [i64]) {
    sort_i64_with(PivotRule::Median, PartitionScheme::Dnf, data);
}

/// Sorts in place with explicit strategies and an OS-seeded random source.
pub fn sort_i64_with(rule: PivotRule, scheme: PartitionScheme, data: &mut [i64]) {
    let mut run = engine::SortRun::new(data, StdRng::from_os_rng(), None);
    run.sort(rule, scheme);
}

/// Sorts in place with a fixed seed for the random source, so `Random`
/// pivot runs are reproducible.
pub fn sort_i64_seeded(rule: PivotRule, scheme: PartitionScheme, seed: u64, data: &mut [i64]) {
    let mut run = engine::SortRun::new(data, StdRng::seed_from_u64(seed), None);
    run.sort(rule, scheme);
}

/// Instrumented sort: `metrics` is reset at the start of the call and holds
/// the duration, counters and step trace afterwards.
pub fn sort_i64_with_metrics(
    rule: PivotRule,
    scheme: PartitionScheme,
    seed: u64,
    data: &mut [i64],
    metrics: &mut SortMetrics,
) {
    let mut run = engine::SortRun::new(data, StdRng::seed_from_u64(seed), Some(metrics));
    run.sort(rule, scheme);
}
