//! Static Chart Renderer
//! Draws benchmark timing line charts and writes them out as PNG files.

use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::data::{BenchSeries, TimeUnit};

/// Output image dimensions.
pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 600;

/// Color palette for plotted series
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(52, 152, 219),  // Blue
    RGBColor(231, 76, 60),   // Red
    RGBColor(46, 204, 113),  // Green
    RGBColor(155, 89, 182),  // Purple
    RGBColor(243, 156, 18),  // Orange
    RGBColor(26, 188, 156),  // Teal
    RGBColor(233, 30, 99),   // Pink
    RGBColor(0, 188, 212),   // Cyan
    RGBColor(255, 87, 34),   // Deep Orange
    RGBColor(96, 125, 139),  // Blue Grey
];

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("series '{label}' has {actual} points, expected {expected}")]
    SeriesLength {
        label: String,
        expected: usize,
        actual: usize,
    },
    #[error("series '{label}' is measured in {series_unit}, chart axis is {chart_unit}")]
    UnitMismatch {
        label: String,
        series_unit: TimeUnit,
        chart_unit: TimeUnit,
    },
    #[error("chart has no series to plot")]
    NoSeries,
    #[error("chart has no x-axis tick labels")]
    NoTicks,
    #[error("failed to draw chart: {0}")]
    Backend(String),
}

/// Everything needed to draw one timing chart.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub x_desc: String,
    pub unit: TimeUnit,
    pub tick_labels: Vec<String>,
    pub series: Vec<BenchSeries>,
}

impl ChartSpec {
    /// Every series must line up with the x-axis ticks and share the chart unit.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.series.is_empty() {
            return Err(RenderError::NoSeries);
        }
        if self.tick_labels.is_empty() {
            return Err(RenderError::NoTicks);
        }
        let expected = self.tick_labels.len();
        for series in &self.series {
            if series.timings.len() != expected {
                return Err(RenderError::SeriesLength {
                    label: series.label.clone(),
                    expected,
                    actual: series.timings.len(),
                });
            }
            if series.unit != self.unit {
                return Err(RenderError::UnitMismatch {
                    label: series.label.clone(),
                    series_unit: series.unit,
                    chart_unit: self.unit,
                });
            }
        }
        Ok(())
    }

    fn y_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for series in &self.series {
            for &v in &series.timings {
                if !v.is_nan() {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }
        if min.is_infinite() {
            return (0.0, 1.0);
        }
        let pad = ((max - min) * 0.05).max(0.5);
        ((min - pad).max(0.0), max + pad)
    }
}

/// Renders a [`ChartSpec`] as a static PNG line chart.
pub struct LineChartRenderer;

impl LineChartRenderer {
    /// Draw the chart described by `spec` and write it to `path`.
    ///
    /// Validation runs before the backend opens the file, so an invalid
    /// spec leaves the filesystem untouched. An existing file at `path`
    /// is overwritten.
    pub fn render(spec: &ChartSpec, path: &Path) -> Result<(), RenderError> {
        spec.validate()?;

        let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| RenderError::Backend(e.to_string()))?;

        let (y_min, y_max) = spec.y_range();
        let x_max = (spec.tick_labels.len() - 1) as f64;

        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..x_max, y_min..y_max)
            .map_err(|e| RenderError::Backend(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc(spec.x_desc.as_str())
            .y_desc(spec.unit.axis_label())
            .x_labels(spec.tick_labels.len())
            .x_label_formatter(&|x: &f64| {
                // Ticks sit on the ordinal series positions.
                let idx = x.round();
                if (x - idx).abs() < 1e-6 {
                    spec.tick_labels
                        .get(idx as usize)
                        .cloned()
                        .unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .draw()
            .map_err(|e| RenderError::Backend(e.to_string()))?;

        for (i, series) in spec.series.iter().enumerate() {
            let style = PALETTE[i % PALETTE.len()].stroke_width(2);
            let points = series
                .timings
                .iter()
                .enumerate()
                .map(|(x, &y)| (x as f64, y));

            chart
                .draw_series(LineSeries::new(points, style))
                .map_err(|e| RenderError::Backend(e.to_string()))?
                .label(series.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], style));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| RenderError::Backend(e.to_string()))?;

        root.present()
            .map_err(|e| RenderError::Backend(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BenchSeries, TimeUnit};

    fn spec_with(series: Vec<BenchSeries>) -> ChartSpec {
        ChartSpec {
            x_desc: "input size".to_string(),
            unit: TimeUnit::Milliseconds,
            tick_labels: ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect(),
            series,
        }
    }

    #[test]
    fn five_point_series_validates() {
        let spec = spec_with(vec![BenchSeries::new(
            "sample",
            TimeUnit::Milliseconds,
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        )]);
        spec.validate().unwrap();
    }

    #[test]
    fn empty_chart_is_rejected() {
        let spec = spec_with(Vec::new());
        assert!(matches!(spec.validate(), Err(RenderError::NoSeries)));
    }

    #[test]
    fn chart_without_ticks_is_rejected() {
        let mut spec = spec_with(vec![BenchSeries::new(
            "sample",
            TimeUnit::Milliseconds,
            Vec::new(),
        )]);
        spec.tick_labels.clear();
        assert!(matches!(spec.validate(), Err(RenderError::NoTicks)));
    }

    #[test]
    fn short_series_is_rejected() {
        let spec = spec_with(vec![BenchSeries::new(
            "short",
            TimeUnit::Milliseconds,
            vec![1.0, 2.0, 3.0, 4.0],
        )]);
        let err = spec.validate().unwrap_err();
        assert!(matches!(
            err,
            RenderError::SeriesLength {
                expected: 5,
                actual: 4,
                ..
            }
        ));
    }

    #[test]
    fn unit_mismatch_is_rejected() {
        let spec = spec_with(vec![
            BenchSeries::new("ms", TimeUnit::Milliseconds, vec![1.0; 5]),
            BenchSeries::new("us", TimeUnit::Microseconds, vec![1.0; 5]),
        ]);
        let err = spec.validate().unwrap_err();
        assert!(matches!(err, RenderError::UnitMismatch { .. }));
    }

    #[test]
    fn y_range_pads_around_data() {
        let spec = spec_with(vec![BenchSeries::new(
            "sample",
            TimeUnit::Milliseconds,
            vec![10.0, 20.0, 30.0, 40.0, 50.0],
        )]);
        let (lo, hi) = spec.y_range();
        assert!(lo < 10.0 && lo >= 0.0);
        assert!(hi > 50.0);
    }

    #[test]
    fn y_range_never_goes_negative() {
        let spec = spec_with(vec![BenchSeries::new(
            "tiny",
            TimeUnit::Milliseconds,
            vec![0.1, 0.2, 0.3, 0.4, 0.5],
        )]);
        let (lo, _) = spec.y_range();
        assert!(lo >= 0.0);
    }
}
