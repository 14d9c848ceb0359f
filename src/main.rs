//! Bench Graph - Tree Benchmark Chart Generator
//!
//! Renders the measured AVL and red-black tree timings as two PNG line
//! charts in the current working directory.

use std::path::Path;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bench_graph::charts::LineChartRenderer;
use bench_graph::data;

const INSERTION_CHART_FILE: &str = "insertion.png";
const SEARCH_CHART_FILE: &str = "search.png";

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder().with_max_level(Level::INFO).init();

    LineChartRenderer::render(&data::insertion_chart(), Path::new(INSERTION_CHART_FILE))
        .with_context(|| format!("failed to render {INSERTION_CHART_FILE}"))?;
    info!("wrote {INSERTION_CHART_FILE}");

    LineChartRenderer::render(&data::search_chart(), Path::new(SEARCH_CHART_FILE))
        .with_context(|| format!("failed to render {SEARCH_CHART_FILE}"))?;
    info!("wrote {SEARCH_CHART_FILE}");

    Ok(())
}
