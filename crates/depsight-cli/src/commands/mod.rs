//! Command dispatch and handler modules.

mod insight;
mod sort;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    tracing::debug!("Dispatching {:?}", cli.command);
    match cli.command {
        Command::Sort {
            report,
            scheme,
            format,
        } => sort::exec(&report, scheme.as_deref(), format.as_deref()),
        Command::Insight {
            report,
            dependency,
            depth,
            scheme,
        } => insight::exec(&report, dependency, depth, scheme.as_deref()),
    }
}
