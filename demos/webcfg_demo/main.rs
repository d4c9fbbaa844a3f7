//! # webcfg demo application
//!
//! A sample CLI that drives the webcfg engine without a web server. Every run
//! starts from the compiled defaults in [`config`], optionally applies one
//! submission, and prints the resulting page as JSON: the same document a
//! template would receive.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example webcfg_demo -- show
//! cargo run --example webcfg_demo -- submit database host=db.internal port=5433
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                 | How to exercise it                                                          |
//! |-------------------------|-----------------------------------------------------------------------------|
//! | Page schema             | `cargo run --example webcfg_demo -- show`                                   |
//! | Section update          | `cargo run --example webcfg_demo -- submit features EnableFeatureB=on`      |
//! | Unticked checkboxes     | `cargo run --example webcfg_demo -- submit features` (both flags go false)  |
//! | Parse error             | `cargo run --example webcfg_demo -- submit advanced Retries=-1`             |
//! | Custom codec            | `cargo run --example webcfg_demo -- submit advanced timeout=90s`            |
//! | Update hook             | `cargo run --example webcfg_demo -- submit database host=db port=5433`      |
//! | Form body               | `cargo run --example webcfg_demo -- post database 'host=db&port=1'`         |
//! | Options file            | `cargo run --example webcfg_demo -- --options webcfg.toml show`             |
//! | Options env var         | `WEBCFG_TITLE=Staging cargo run --example webcfg_demo -- show`              |
//! | Options template        | `cargo run --example webcfg_demo -- template`                               |
//! | Debug events            | `cargo run --example webcfg_demo -- --verbose submit features`              |

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;

use webcfg::{Options, SubmitArgs, WebCfg, WebcfgError};

use config::AppConfig;

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// webcfg demo: render and update a sample settings object.
#[derive(Parser, Debug)]
#[command(name = "webcfg-demo")]
struct Cli {
    /// Load page options from this TOML file.
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Print debug events to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the page as JSON.
    Show,
    /// Apply NAME=VALUE pairs to one section, then print the page.
    Submit(SubmitArgs),
    /// Apply a urlencoded form body to one section, then print the page.
    Post {
        /// Section to update.
        section: String,
        /// Body such as `host=db&port=5433`.
        body: String,
    },
    /// Print a commented options template.
    Template,
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn print_page(engine: &mut WebCfg<AppConfig>) {
    let page = engine.render();
    match page.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error: cannot serialize page: {e}"),
    }
}

fn run(cli: Cli) -> Result<(), WebcfgError> {
    if let Commands::Template = cli.command {
        print!("{}", Options::template());
        return Ok(());
    }

    let options = Options::load(cli.options.as_deref())?;
    let mut engine = WebCfg::builder(AppConfig::default())
        .options(options)
        .build()?;

    match cli.command {
        Commands::Show | Commands::Template => {}
        Commands::Submit(args) => {
            let submission = args.into_submission();
            // The outcome is queued as a notification and shows in the page.
            let _ = engine.submit_all(&submission);
        }
        Commands::Post { section, body } => {
            let values = webcfg::form::parse_urlencoded(&body);
            let _ = engine.submit(&section, &values);
        }
    }

    print_page(&mut engine);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
