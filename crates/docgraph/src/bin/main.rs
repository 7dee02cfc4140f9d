//! docgraph CLI

use anyhow::Context;
use clap::{Parser, Subcommand};
use docgraph::{ScanSession, render};
use docgraph_core::ScanOptions;
use docgraph_repair::add_orphans_to_index;
use serde_json::json;
use std::path::PathBuf;

/// Documentation graph analyzer - scan, score, and repair markdown trees
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root of the documentation tree to analyze
    #[arg(short, long, default_value = ".", global = true)]
    path: PathBuf,

    /// Emit machine-readable JSON instead of the human report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan the tree and report structural statistics
    Scan {
        /// Show per-document detail (orphan titles, largest documents)
        #[arg(short, long)]
        verbose: bool,

        /// List every broken link explicitly
        #[arg(long)]
        check_links: bool,

        /// Repair broken links and generate a missing root index
        #[arg(long)]
        fix: bool,
    },
    /// Compute the 0-100 health score and letter grade
    Health {
        /// Print only the numeric score
        #[arg(long)]
        score: bool,

        /// Run repairs only when the score falls below the critical
        /// threshold
        #[arg(long)]
        fix_critical: bool,

        /// Always run repairs
        #[arg(long)]
        fix: bool,
    },
    /// List orphaned documents
    Orphans {
        /// Suggest plausible parent documents for each orphan
        #[arg(long)]
        suggest_links: bool,

        /// Append orphans to the root index so they gain a link
        #[arg(long)]
        add_to_index: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let options = ScanOptions::builder(&args.path)
        .build()
        .with_context(|| format!("cannot scan {}", args.path.display()))?;

    if !args.json {
        println!("📂 Scanning {}...", args.path.display());
    }

    let mut session = ScanSession::run(options).context("scan failed")?;

    match args.command {
        Command::Scan {
            verbose,
            check_links,
            fix,
        } => {
            let fixed = if fix { Some(session.fix()?) } else { None };

            if args.json {
                let out = json!({
                    "stats": session.stats(),
                    "orphans": session.report().orphans,
                    "broken_links": session.report().broken_links,
                    "fix": fixed,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }

            render::print_scan_results(&session.stats());
            if verbose {
                render::print_detailed(&session);
            }
            if check_links {
                render::print_link_validation(session.report());
            }
            if let Some(summary) = &fixed {
                render::print_fix_summary(summary);
            }
        }

        Command::Health {
            score,
            fix_critical,
            fix,
        } => {
            let metrics = session.health();
            let critical = metrics.score < session.options().critical_threshold;
            let run_fix = fix || (fix_critical && critical);

            let fixed = if run_fix { Some(session.fix()?) } else { None };
            // Re-score after repairs so the report reflects the new tree
            let metrics = if fixed.is_some() {
                session.health()
            } else {
                metrics
            };

            if args.json {
                let out = json!({
                    "health": metrics,
                    "fix": fixed,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }

            if score {
                println!("{}", metrics.score);
                return Ok(());
            }

            render::print_health(&metrics);
            if let Some(summary) = &fixed {
                render::print_fix_summary(summary);
            } else if fix_critical && !critical {
                println!("\n✅ Score above critical threshold, no fixes applied");
            }
        }

        Command::Orphans {
            suggest_links,
            add_to_index,
        } => {
            if args.json {
                let out = json!({
                    "orphans": session.report().orphans,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }

            render::print_orphans(&session, suggest_links);

            if add_to_index {
                let changed = add_orphans_to_index(
                    session.store(),
                    session.options(),
                    &session.report().orphans,
                )
                .context("failed to update index")?;
                if changed {
                    println!("📝 Added orphans to the root index");
                } else {
                    println!("📝 Index already references every orphan");
                }
            }
        }
    }

    Ok(())
}
