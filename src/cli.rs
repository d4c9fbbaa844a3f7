//! Clap adapter for submissions.
//!
//! Compiled only with the `clap` Cargo feature (on by default). [`SubmitArgs`]
//! is a clap derive type you can embed in your own parser to accept
//! `SECTION NAME=VALUE...` on the command line. The only bridge to the core is
//! [`SubmitArgs::into_submission()`]; from there the submission goes through
//! [`WebCfg::submit_all()`](crate::WebCfg::submit_all) like any form post.
//!
//! ```ignore
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     submit: SubmitArgs,
//! }
//! ```

use clap::Args;

use crate::types::{FormValues, Submission};

/// Clap-derived args for one section update.
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Section to update (e.g. "database").
    pub section: String,

    /// Field values as NAME=VALUE. Fields left out submit empty.
    #[arg(value_parser = parse_pair)]
    pub values: Vec<(String, String)>,
}

impl SubmitArgs {
    pub fn into_submission(self) -> Submission {
        Submission::new(self.section, FormValues::from(self.values))
    }
}

/// Split `NAME=VALUE` at the first `=`. The value may be empty.
fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing field name in '{s}'")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}
