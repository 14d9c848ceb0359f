//! Charts module - Chart rendering

mod renderer;

pub use renderer::{ChartSpec, LineChartRenderer, RenderError, CHART_HEIGHT, CHART_WIDTH};
