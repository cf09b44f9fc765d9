//! Resume snapshot export: artifact probing and markdown rendering.
//!
//! The snapshot is derived state. It is rebuilt on every export from the
//! decision log and the filesystem, never edited in place.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::Result;
use crate::parser::parse_decisions;
use crate::types::{ParsedDecision, local_timestamp};

/// Pipeline-stage output files probed for existence on every export, in
/// addition to any caller-supplied extras.
pub const DEFAULT_ARTIFACTS: [&str; 8] = [
    "wgcna_decision_log.md",
    "stage7_run_report.md",
    "stage2_normalization_metrics.csv",
    "stage3_pickSoftThreshold_fitIndices.csv",
    "stage4_module_sizes_coarse.csv",
    "stage5_module_trait_long.csv",
    "stage6_hub_candidates_strict.csv",
    "stage6_hub_candidates_strict_capped_top50.csv",
];

/// The snapshot shows only the most recent decisions; the full history stays
/// in the log.
pub const LATEST_DECISIONS_LIMIT: usize = 12;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub workspace_dir: PathBuf,
    pub decision_log: String,
    pub output_path: String,
    pub artifacts: Vec<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            workspace_dir: PathBuf::from("."),
            decision_log: "wgcna_decision_log.md".to_string(),
            output_path: "wgcna_resume_snapshot.md".to_string(),
            artifacts: Vec::new(),
        }
    }
}

/// Resolves `path_like` against the workspace unless it is already absolute,
/// then normalizes `.` and `..` segments lexically so rendered paths carry no
/// relative components.
pub fn resolve_path(workspace: &Path, path_like: &str) -> PathBuf {
    let path = Path::new(path_like);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` pops a normal component, is a no-op at the root, and is
            // kept verbatim when there is nothing left to pop on a relative
            // path.
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir.as_os_str()),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Probes the default artifact list plus `extras` and keeps, in order, only
/// the paths that exist on disk.
pub fn existing_artifacts(workspace: &Path, extras: &[String]) -> Vec<PathBuf> {
    DEFAULT_ARTIFACTS
        .iter()
        .copied()
        .chain(extras.iter().map(String::as_str))
        .map(|candidate| resolve_path(workspace, candidate))
        .filter(|path| path.exists())
        .collect()
}

/// Renders the snapshot document. Pure text construction: all I/O (reading
/// the log, probing artifacts, writing the output) belongs to the caller.
pub fn render_snapshot(
    workspace: &Path,
    output_path: &Path,
    decision_log_path: &Path,
    decisions: &[ParsedDecision],
    artifacts: &[PathBuf],
    generated: &str,
) -> String {
    let mut lines: Vec<String> = vec![
        "# WGCNA Resume Snapshot".to_string(),
        String::new(),
        format!("Generated: {generated}"),
        format!("Workspace: `{}`", workspace.display()),
        format!("Decision log: `{}`", decision_log_path.display()),
        String::new(),
        "## Latest Decisions".to_string(),
    ];

    if decisions.is_empty() {
        lines.push("- No parsed decisions found.".to_string());
    } else {
        let start = decisions.len().saturating_sub(LATEST_DECISIONS_LIMIT);
        for decision in &decisions[start..] {
            lines.push(format!("- `{}` -> {}", decision.stage, decision.approved));
        }
    }

    lines.push(String::new());
    lines.push("## Available Artifacts".to_string());
    if artifacts.is_empty() {
        lines.push("- No known artifacts found.".to_string());
    } else {
        for path in artifacts {
            let shown = path.strip_prefix(workspace).unwrap_or(path);
            lines.push(format!("- `{}`", shown.display()));
        }
    }

    lines.extend([
        String::new(),
        "## Resume Prompt".to_string(),
        "Use this prompt in a new Codex session:".to_string(),
        String::new(),
        "```text".to_string(),
        format!(
            "Use `{}` and `{}` as context and continue from the latest completed stage.",
            output_path.display(),
            decision_log_path.display()
        ),
        "```".to_string(),
        String::new(),
    ]);

    lines.join("\n")
}

/// Parses the log, probes artifacts, renders the snapshot, and writes it to
/// the resolved output path, which is returned.
pub fn export_snapshot(opts: &ExportOptions) -> Result<PathBuf> {
    fs::create_dir_all(&opts.workspace_dir)?;
    let workspace = opts.workspace_dir.canonicalize()?;

    let decision_log_path = resolve_path(&workspace, &opts.decision_log);
    let output_path = resolve_path(&workspace, &opts.output_path);

    let decisions = parse_decisions(&decision_log_path)?;
    let artifacts = existing_artifacts(&workspace, &opts.artifacts);

    let snapshot = render_snapshot(
        &workspace,
        &output_path,
        &decision_log_path,
        &decisions,
        &artifacts,
        &local_timestamp(),
    );
    fs::write(&output_path, snapshot)?;

    tracing::info!(
        path = %output_path.display(),
        decisions = decisions.len(),
        artifacts = artifacts.len(),
        "wrote resume snapshot"
    );
    Ok(output_path)
}
