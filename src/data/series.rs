//! Benchmark Series Module
//! Typed timing series and the units they are measured in.

use std::fmt;

/// Number of input sizes each benchmark was run against.
pub const SIZE_POINTS: usize = 5;

/// Unit a timing series is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Milliseconds,
    Microseconds,
}

impl TimeUnit {
    /// Y-axis label spelling used by the measurement reports.
    pub fn axis_label(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "time(ms)",
            TimeUnit::Microseconds => "time(us)",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Milliseconds => write!(f, "ms"),
            TimeUnit::Microseconds => write!(f, "us"),
        }
    }
}

/// One measured timing series: a label plus one value per tested input size.
#[derive(Debug, Clone)]
pub struct BenchSeries {
    pub label: String,
    pub unit: TimeUnit,
    pub timings: Vec<f64>,
}

impl BenchSeries {
    pub fn new(label: impl Into<String>, unit: TimeUnit, timings: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            unit,
            timings,
        }
    }
}
