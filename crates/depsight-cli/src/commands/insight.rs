//! Handler for `depsight insight`.

use std::path::Path;

use miette::Result;

use depsight_core::config::VersionScheme;
use depsight_ops::ops_insight::{self, InsightOptions};

pub fn exec(
    report: &Path,
    dependency: Option<String>,
    depth: Option<u32>,
    scheme: Option<&str>,
) -> Result<()> {
    let opts = InsightOptions {
        dependency,
        depth: depth.map(|d| d as usize),
        scheme: scheme.map(str::parse::<VersionScheme>).transpose()?,
    };
    ops_insight::insight(report, &opts)
}
