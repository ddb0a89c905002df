//! Handler for `depsight sort`.

use std::path::Path;

use miette::Result;

use depsight_core::config::{OutputFormat, VersionScheme};
use depsight_ops::ops_sort::{self, SortOptions};

pub fn exec(report: &Path, scheme: Option<&str>, format: Option<&str>) -> Result<()> {
    let opts = SortOptions {
        scheme: scheme.map(str::parse::<VersionScheme>).transpose()?,
        format: format.map(str::parse::<OutputFormat>).transpose()?,
    };
    ops_sort::sort(report, &opts)
}
