//! Operation: print the edges of a report in presentation order.

use std::path::Path;

use depsight_core::config::{GlobalConfig, OutputFormat, VersionScheme};
use depsight_core::report::EdgeReport;
use depsight_insight::graph;
use depsight_util::errors::DepsightError;

/// Options for `depsight sort`.
#[derive(Debug, Default)]
pub struct SortOptions {
    /// Overrides the configured version scheme.
    pub scheme: Option<VersionScheme>,
    /// Overrides the configured output format.
    pub format: Option<OutputFormat>,
}

/// Sort the report and render it in the requested format.
pub fn sort_output(
    report_path: &Path,
    opts: &SortOptions,
    config: &GlobalConfig,
) -> Result<String, DepsightError> {
    let comparator = crate::comparator(opts.scheme, config);
    let sorted = crate::load_sorted(report_path, comparator.as_ref(), None)?;
    match opts.format.unwrap_or(config.output.format) {
        OutputFormat::Text => Ok(graph::render_list(&sorted)),
        OutputFormat::Json => {
            let mut json = EdgeReport::new(sorted)
                .to_json_pretty()
                .map_err(|e| DepsightError::Generic {
                    message: format!("Failed to serialize sorted edges: {e}"),
                })?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Print the sorted edges of the report at `report_path`.
pub fn sort(report_path: &Path, opts: &SortOptions) -> miette::Result<()> {
    let config = GlobalConfig::load()?;
    let output = sort_output(report_path, opts, &config)?;
    print!("{output}");
    Ok(())
}
