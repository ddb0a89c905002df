//! Operation: explain how the edges of a report arrived at their versions.

use std::path::Path;

use console::style;
use depsight_core::config::{GlobalConfig, VersionScheme};
use depsight_insight::graph::OriginGraph;
use depsight_util::errors::DepsightError;

/// Options for `depsight insight`.
#[derive(Debug, Default)]
pub struct InsightOptions {
    /// Only show edges requesting or resolving to this dependency.
    pub dependency: Option<String>,
    /// Maximum depth of the origin chain below each edge.
    pub depth: Option<usize>,
    /// Overrides the configured version scheme.
    pub scheme: Option<VersionScheme>,
}

/// Render the insight tree, or `None` when the filter matched nothing.
pub fn insight_output(
    report_path: &Path,
    opts: &InsightOptions,
    config: &GlobalConfig,
) -> Result<Option<String>, DepsightError> {
    let comparator = crate::comparator(opts.scheme, config);

    // The origin chain needs every edge, not just the filtered ones.
    let all = crate::load_sorted(report_path, comparator.as_ref(), None)?;
    let shown: Vec<_> = match opts.dependency.as_deref() {
        Some(key) => all.iter().filter(|e| e.matches_key(key)).cloned().collect(),
        None => all.clone(),
    };
    if shown.is_empty() {
        return Ok(None);
    }

    let graph = OriginGraph::from_edges(&all);
    let depth = opts.depth.or(config.insight.depth);
    Ok(Some(graph.render_insight(&shown, depth, comparator.as_ref())))
}

/// Print the dependency insight for the report at `report_path`.
pub fn insight(report_path: &Path, opts: &InsightOptions) -> miette::Result<()> {
    let config = GlobalConfig::load()?;
    match insight_output(report_path, opts, &config)? {
        Some(output) => print!("{output}"),
        None => match &opts.dependency {
            Some(key) => println!("{}", style(format!("No edges match '{key}'.")).yellow()),
            None => println!("{}", style("No edges in report.").yellow()),
        },
    }
    Ok(())
}
