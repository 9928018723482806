mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nmapwrap::{export_txt, export_xlsx, render_pretty, ExportConfig, NmapRun, RunContext};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose > 0)?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let base = match &cli.config {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::load_or_default()?,
    };
    let config = cli.export_config(base);

    let run = match &cli.parse {
        Some(path) => NmapRun::from_file(path)
            .with_context(|| format!("failed to decode {}", path.display()))?,
        None => {
            if cli.targets.is_empty() && cli.nmap_args.is_empty() {
                eprintln!("{}", "Error: No target specified.".red());
                eprintln!("Example: nmapwrap --sV 192.168.1.1");
                eprintln!("Run 'nmapwrap --help' for more information.");
                std::process::exit(1);
            }
            match scan(&cli, config.clone()).await? {
                Some(run) => run,
                None => return Ok(()),
            }
        }
    };

    print!("{}", render_pretty(&run, &config));

    if cli.xlsx {
        let path = export_xlsx(&run, &config)?;
        println!("{} {}", "xlsx report:".truecolor(0, 212, 255).bold(), path.display());
    }
    if cli.txt {
        let path = export_txt(&run, &config)?;
        println!("{} {}", "txt report:".truecolor(0, 212, 255).bold(), path.display());
    }

    Ok(())
}

/// Run nmap under Ctrl-C cancellation and the optional deadline.
///
/// Returns `None` when nmap produced no scan document; its raw output has
/// already been printed.
async fn scan(cli: &Cli, config: ExportConfig) -> Result<Option<NmapRun>> {
    let nmap = cli.build_invocation(config)?;

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, stopping nmap");
            ctrl_c.cancel();
        }
    });

    let mut ctx = RunContext::new().with_cancel(token);
    if let Some(seconds) = cli.timeout {
        ctx = ctx.with_timeout(Duration::from_secs(seconds));
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("⟦{spinner:.bright_magenta}⟧ [{elapsed_precise}] {msg}")?);
    pb.set_message(format!("nmap {}", nmap.args().join(" ")));
    pb.enable_steady_tick(Duration::from_millis(120));

    let start_time = chrono::Local::now();
    let outcome = nmap.run_with_context(ctx).await;
    pb.finish_and_clear();

    let elapsed = chrono::Local::now() - start_time;
    let outcome = match outcome {
        Err(e) if e.is_timeout() => {
            bail!("scan stopped after {}s: {}", elapsed.num_seconds(), e)
        }
        other => other?,
    };
    info!(
        started = %start_time.format("%Y-%m-%d %H:%M:%S"),
        elapsed_ms = elapsed.num_milliseconds(),
        status = %outcome.status,
        "nmap finished"
    );

    if let Some(warning) = &outcome.warning {
        eprintln!("{} {}", "warning:".truecolor(255, 140, 0).bold(), warning.trim_end());
    }
    if let Some(e) = &outcome.persist_error {
        eprintln!("{} {}", "warning:".truecolor(255, 140, 0).bold(), e);
    }
    if let Some(path) = &outcome.saved_to {
        println!("{} {}", "raw output:".truecolor(0, 212, 255).bold(), path.display());
    }

    if outcome.xml.is_none() {
        print!("{}", outcome.result);
    }
    Ok(outcome.xml)
}

fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "nmapwrap=info" } else { "nmapwrap=warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
