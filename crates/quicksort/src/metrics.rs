use std::fmt;
use std::time::{Duration, Instant};

/// Per-sort instrumentation sink.
///
/// - Created fresh for one sort call and read back afterwards.
/// - `partitions` and `swaps` are the engine's authoritative counters.
/// - `steps` is an append-only trace, one formatted line per partition call:
///   `<buffer> : [ <lo> - <hi> ] : <pivot> : <boundary> : <swaps-this-call>`
///   where `<boundary>` is a single split index for the two-way scheme and
///   `[ i - j ]` for the three-way scheme.
#[derive(Debug, Default)]
pub struct SortMetrics {
    started_at: Option<Instant>,
    duration: Duration,
    partitions: u64,
    swaps: u64,
    steps: Vec<String>,
}

impl SortMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn start(&mut self) {
        self.duration = Duration::ZERO;
        self.partitions = 0;
        self.swaps = 0;
        self.steps.clear();
        self.started_at = Some(Instant::now());
    }

    pub(crate) fn finish(&mut self, partitions: u64, swaps: u64) {
        self.duration = self
            .started_at
            .take()
            .map(|started| started.elapsed())
            .unwrap_or_default();
        self.partitions = partitions;
        self.swaps = swaps;
    }

    pub(crate) fn push_step(&mut self, line: String) {
        self.steps.push(line);
    }

    /// Wall time between engine start and finish.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn partitions(&self) -> u64 {
        self.partitions
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}

impl fmt::Display for SortMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "duration [ns]: {}", self.duration.as_nanos())?;
        writeln!(f, "partitions: {}", self.partitions)?;
        writeln!(f, "swaps: {}", self.swaps)?;
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SortMetrics;

    #[test]
    fn start_resets_previous_run() {
        let mut metrics = SortMetrics::new();
        metrics.start();
        metrics.push_step("[1] : [ 0 - 0 ] : 1 : 0 : 0".to_owned());
        metrics.finish(3, 7);
        assert_eq!(metrics.partitions(), 3);
        assert_eq!(metrics.swaps(), 7);
        assert_eq!(metrics.steps().len(), 1);

        metrics.start();
        assert_eq!(metrics.partitions(), 0);
        assert_eq!(metrics.swaps(), 0);
        assert!(metrics.steps().is_empty());
    }

    #[test]
    fn display_lists_counters_then_steps() {
        let mut metrics = SortMetrics::new();
        metrics.start();
        metrics.push_step("line-a".to_owned());
        metrics.push_step("line-b".to_owned());
        metrics.finish(2, 1);

        let rendered = metrics.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("duration [ns]: "));
        assert_eq!(lines[1], "partitions: 2");
        assert_eq!(lines[2], "swaps: 1");
        assert_eq!(&lines[3..], &["line-a", "line-b"]);
    }
}
