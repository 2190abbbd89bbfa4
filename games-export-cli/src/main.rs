//! games-export CLI
//!
//! Exports every game entry under `games/` to a single flat CSV table,
//! `games_export.csv`, next to it at the project root.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use games_catalog::{ExportPaths, run_export};

#[derive(Parser)]
#[command(name = "games-export", version)]
#[command(about = "Export the YAML games catalog to a flat CSV table", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_logging();

    let paths = ExportPaths::from_root(&project_root());
    match run_export(&paths) {
        Ok(summary) => {
            if !summary.skipped.is_empty() {
                log::warn!(
                    "{} of the YAML files could not be read and were left out",
                    summary.skipped.len()
                );
            }
            log::info!(
                "{}",
                format!(
                    "Export complete! CSV file saved to: {}",
                    summary.output_file.display()
                )
                .if_supports_color(Stdout, |t| t.bold()),
            );
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

/// Project root: the workspace directory holding this crate.
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Plain-message logging to stdout, `info` unless `RUST_LOG` says otherwise.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stdout)
        .init();
}
