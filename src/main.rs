mod cli;

use scenesplit::{
    config::{self, RunConfig},
    pipeline::{self, FfmpegTools, FileReport},
};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use scenesplit_common::format_position;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "scenesplit=trace,scenesplit_av=trace,scenesplit_common=debug".to_string()
        } else {
            "scenesplit=info,scenesplit_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = config::load_config_or_default(cli.config.as_deref())?;
    let run = RunConfig::new(
        cli.source,
        &cli.destination,
        cli.tolerate_dates,
        cli.dry_run,
        settings,
    )?;

    let tools = FfmpegTools::discover(&run.settings);
    pipeline::run_all(&run, &tools, &tools, &tools, |report| {
        print_report(report, run.dry_run)
    })?;

    Ok(())
}

fn print_report(report: &FileReport, dry_run: bool) {
    println!("File: {}", report.source.display());

    if report.scenes.is_empty() {
        println!("  No scenes kept");
        return;
    }

    for produced in &report.scenes {
        let verb = if dry_run { "Would create" } else { "Created" };
        println!(
            "  {} {} [{} - {}]",
            verb,
            produced.name.path.display(),
            format_position(produced.scene.start),
            format_position(produced.scene.end)
        );
    }

    if dry_run {
        println!("[DRY RUN] {} scene(s) planned", report.scenes.len());
    }
}
