//! Measured Timings Module
//! Hardcoded wall-clock results from the AVL and red-black tree benchmark runs.

use crate::charts::ChartSpec;

use super::{BenchSeries, TimeUnit, SIZE_POINTS};

/// Tree sizes used for the insertion runs.
pub const INSERT_SIZE_LABELS: [&str; SIZE_POINTS] =
    ["10,000", "40,000", "70,000", "100,000", "130,000"];

/// Element counts used for the search runs, one tenth of the tree size.
pub const SEARCH_SIZE_LABELS: [&str; SIZE_POINTS] =
    ["1,000", "4,000", "7,000", "10,000", "13,000"];

const AVL_BASELINE_INSERT_MS: [f64; SIZE_POINTS] = [3.8721, 17.934, 32.461, 48.502, 64.176];
const AVL_INSERT_MS: [f64; SIZE_POINTS] = [1.9749, 8.7007, 16.736, 23.526, 34.149];
const RB_BASELINE_INSERT_MS: [f64; SIZE_POINTS] = [11.638, 61.780, 121.39, 181.46, 244.64];
const RB_INSERT_MS: [f64; SIZE_POINTS] = [2.2894, 10.589, 19.381, 29.538, 37.954];

const AVL_BASELINE_SEARCH_US: [f64; SIZE_POINTS] = [52.882, 290.25, 678.79, 835.45, 1156.7];
const AVL_SEARCH_US: [f64; SIZE_POINTS] = [62.971, 300.81, 533.49, 783.13, 1023.7];
const RB_BASELINE_SEARCH_US: [f64; SIZE_POINTS] = [40.127, 244.32, 468.19, 688.72, 912.02];
const RB_SEARCH_US: [f64; SIZE_POINTS] = [37.654, 182.85, 339.36, 515.37, 671.71];

/// Insertion timings across the five tree sizes, in milliseconds.
pub fn insertion_chart() -> ChartSpec {
    ChartSpec {
        x_desc: "input size".to_string(),
        unit: TimeUnit::Milliseconds,
        tick_labels: INSERT_SIZE_LABELS.iter().map(|s| s.to_string()).collect(),
        series: vec![
            BenchSeries::new(
                "AVL baseline insertion",
                TimeUnit::Milliseconds,
                AVL_BASELINE_INSERT_MS.to_vec(),
            ),
            BenchSeries::new("AVL insertion", TimeUnit::Milliseconds, AVL_INSERT_MS.to_vec()),
            BenchSeries::new(
                "RB baseline insertion",
                TimeUnit::Milliseconds,
                RB_BASELINE_INSERT_MS.to_vec(),
            ),
            BenchSeries::new("RB insertion", TimeUnit::Milliseconds, RB_INSERT_MS.to_vec()),
        ],
    }
}

/// Search timings across the five element counts, in microseconds.
pub fn search_chart() -> ChartSpec {
    ChartSpec {
        x_desc: "input size".to_string(),
        unit: TimeUnit::Microseconds,
        tick_labels: SEARCH_SIZE_LABELS.iter().map(|s| s.to_string()).collect(),
        series: vec![
            BenchSeries::new(
                "AVL baseline search",
                TimeUnit::Microseconds,
                AVL_BASELINE_SEARCH_US.to_vec(),
            ),
            BenchSeries::new("AVL search", TimeUnit::Microseconds, AVL_SEARCH_US.to_vec()),
            BenchSeries::new(
                "RB baseline search",
                TimeUnit::Microseconds,
                RB_BASELINE_SEARCH_US.to_vec(),
            ),
            BenchSeries::new("RB search", TimeUnit::Microseconds, RB_SEARCH_US.to_vec()),
        ],
    }
}
