//! Append-only markdown log writer for gate decisions.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::DecisionEntry;

/// Written once, when the log file is first created.
pub const LOG_HEADER: &str = "# WGCNA Decision Log\n\n";

/// Appends one serialized decision entry to the log at `log_path`, creating
/// the file with its title header if it does not exist yet.
///
/// A single blank line separates consecutive entries; the first entry in a
/// freshly created log follows the header directly. Appends never rewrite
/// earlier content, so two calls with identical arguments produce two entries.
pub fn append_entry(log_path: &Path, entry: &DecisionEntry) -> Result<()> {
    let existed = log_path.exists();
    if !existed {
        fs::write(log_path, LOG_HEADER)?;
    }

    let mut file = OpenOptions::new().append(true).open(log_path)?;
    if existed && file.metadata()?.len() > 0 {
        file.write_all(b"\n")?;
    }
    file.write_all(render_entry(entry).as_bytes())?;

    tracing::debug!(
        path = %log_path.display(),
        stage = %entry.stage,
        "appended decision entry"
    );
    Ok(())
}

/// Serializes one entry as a markdown block. The heading joins timestamp and
/// stage with a literal `" - "`, which the parser splits on to recover the
/// stage.
pub fn render_entry(entry: &DecisionEntry) -> String {
    let options_block = non_empty_or(bulletize(&entry.options_presented), "- [not provided]");
    let risks_block = non_empty_or(bulletize(&entry.deferred_risks), "- None noted");

    let lines = [
        format!("## {} - {}", entry.timestamp, entry.stage),
        String::new(),
        "### Options presented".to_string(),
        options_block,
        String::new(),
        "### Approved option".to_string(),
        format!("- {}", entry.approved_option.trim()),
        String::new(),
        "### Rationale".to_string(),
        entry.rationale.trim().to_string(),
        String::new(),
        "### Deferred risks".to_string(),
        risks_block,
        String::new(),
    ];
    lines.join("\n")
}

/// One `- ` bullet per item, trimmed; items that are blank after trimming are
/// dropped rather than written as empty bullets.
fn bulletize(values: &[String]) -> String {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| format!("- {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty_or(block: String, fallback: &str) -> String {
    if block.is_empty() {
        fallback.to_string()
    } else {
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DecisionEntry;
    use pretty_assertions::assert_eq;

    fn gate_a() -> DecisionEntry {
        DecisionEntry::new("Gate A", "keep defaults", "No outliers detected.")
            .with_timestamp("2024-05-01T10:00:00")
    }

    #[test]
    fn renders_placeholders_for_empty_lists() {
        let rendered = render_entry(&gate_a());
        let expected = "\
## 2024-05-01T10:00:00 - Gate A

### Options presented
- [not provided]

### Approved option
- keep defaults

### Rationale
No outliers detected.

### Deferred risks
- None noted
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn blank_list_items_are_dropped() {
        let entry = gate_a().with_options(["  ", "Option A", ""]);
        let rendered = render_entry(&entry);
        assert!(rendered.contains("### Options presented\n- Option A\n\n### Approved option"));
    }

    #[test]
    fn first_entry_follows_header_without_extra_blank_line() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("wgcna_decision_log.md");

        append_entry(&log, &gate_a()).unwrap();

        let content = std::fs::read_to_string(&log).unwrap();
        assert!(content.starts_with("# WGCNA Decision Log\n\n## 2024-05-01T10:00:00 - Gate A\n"));
    }

    #[test]
    fn one_blank_line_separates_consecutive_entries() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("wgcna_decision_log.md");

        let first = gate_a();
        let second = DecisionEntry::new("Gate B", "power=6", "Best scale-free fit.")
            .with_timestamp("2024-05-01T11:00:00");
        append_entry(&log, &first).unwrap();
        append_entry(&log, &second).unwrap();

        let content = std::fs::read_to_string(&log).unwrap();
        let expected = format!(
            "{LOG_HEADER}{}\n{}",
            render_entry(&first),
            render_entry(&second)
        );
        assert_eq!(content, expected);
    }

    #[test]
    fn fails_when_parent_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("missing").join("log.md");
        assert!(append_entry(&log, &gate_a()).is_err());
    }
}
