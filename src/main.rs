//! wgcna-decisions CLI - gate decision logging and resume snapshots.

use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wgcna_decisions::{
    DecisionEntry, DecisionLogError, ExportOptions, Result, append_entry, export_snapshot,
};

#[derive(Parser, Debug)]
#[command(name = "wgcna-decisions")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Output as JSON")]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Append a human-approved checkpoint decision to the log")]
    Record {
        #[arg(long, help = "Pipeline stage name")]
        stage: String,

        #[arg(long, help = "Option approved by the human reviewer")]
        approved_option: String,

        #[arg(long, help = "Short reason for why the approved option was selected")]
        rationale: String,

        #[arg(
            long = "option",
            help = "An option that was presented. Repeat for multiple options."
        )]
        options: Vec<String>,

        #[arg(
            long = "deferred-risk",
            help = "A risk deferred or accepted. Repeat for multiple risks."
        )]
        deferred_risks: Vec<String>,

        #[arg(long, help = "ISO timestamp override (default: now in local time)")]
        timestamp: Option<String>,

        #[arg(
            long,
            default_value = "wgcna_decision_log.md",
            help = "Path to decision log markdown file"
        )]
        log_path: PathBuf,
    },

    #[command(about = "Export a markdown snapshot for reliable session resumption")]
    Export {
        #[arg(
            long,
            default_value = ".",
            help = "Run workspace directory containing outputs"
        )]
        workspace_dir: PathBuf,

        #[arg(
            long,
            default_value = "wgcna_decision_log.md",
            help = "Decision log path, relative to workspace unless absolute"
        )]
        decision_log: String,

        #[arg(
            long,
            default_value = "wgcna_resume_snapshot.md",
            help = "Output markdown path, relative to workspace unless absolute"
        )]
        output_path: String,

        #[arg(long = "artifact", help = "Extra artifact path to include (repeatable)")]
        artifacts: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Record {
            stage,
            approved_option,
            rationale,
            options,
            deferred_risks,
            timestamp,
            log_path,
        } => {
            require_non_empty("stage", &stage)?;
            require_non_empty("approved-option", &approved_option)?;
            require_non_empty("rationale", &rationale)?;

            let mut entry = DecisionEntry::new(stage, approved_option, rationale)
                .with_options(options)
                .with_deferred_risks(deferred_risks);
            if let Some(timestamp) = timestamp {
                entry = entry.with_timestamp(timestamp);
            }

            append_entry(&log_path, &entry)?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({ "log_path": log_path }))?
                );
            } else {
                println!("Appended decision entry to {}", log_path.display());
            }
        }
        Commands::Export {
            workspace_dir,
            decision_log,
            output_path,
            artifacts,
        } => {
            let opts = ExportOptions {
                workspace_dir,
                decision_log,
                output_path,
                artifacts,
            };
            let written = export_snapshot(&opts)?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({ "output_path": written }))?
                );
            } else {
                println!("Wrote resume snapshot to {}", written.display());
            }
        }
    }

    Ok(())
}

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DecisionLogError::EmptyField(field));
    }
    Ok(())
}
