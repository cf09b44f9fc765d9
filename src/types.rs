use chrono::Local;
use serde::{Deserialize, Serialize};

/// One human-approved checkpoint decision, as recorded at a pipeline gate.
///
/// Entries are immutable once appended: the log is append-only and ordered by
/// append position, not by timestamp (timestamps are caller-supplied and not
/// guaranteed monotonic).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionEntry {
    pub timestamp: String,
    pub stage: String,
    pub options_presented: Vec<String>,
    pub approved_option: String,
    pub rationale: String,
    pub deferred_risks: Vec<String>,
}

impl DecisionEntry {
    pub fn new(
        stage: impl Into<String>,
        approved_option: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: local_timestamp(),
            stage: stage.into(),
            options_presented: Vec::new(),
            approved_option: approved_option.into(),
            rationale: rationale.into(),
            deferred_risks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options_presented = options.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_deferred_risks<I, S>(mut self, risks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deferred_risks = risks.into_iter().map(Into::into).collect();
        self
    }
}

/// A decision record recovered from the log. Only the fields needed for
/// resumption are reconstructed; rationale, presented options, and deferred
/// risks stay in the log as audit detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDecision {
    pub heading: String,
    pub stage: String,
    pub approved: String,
}

/// Current local time, truncated to whole seconds, in sortable ISO form.
pub fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_fill_optional_fields() {
        let entry = DecisionEntry::new("Gate A", "keep defaults", "No outliers detected.")
            .with_timestamp("2024-05-01T10:00:00")
            .with_options(["keep defaults", "drop sample S12"])
            .with_deferred_risks(["S12 may still be borderline"]);

        assert_eq!(entry.timestamp, "2024-05-01T10:00:00");
        assert_eq!(entry.options_presented.len(), 2);
        assert_eq!(entry.deferred_risks.len(), 1);
    }

    #[test]
    fn timestamp_has_no_subsecond_part() {
        let ts = local_timestamp();
        assert!(!ts.contains('.'));
        assert_eq!(ts.len(), "2024-05-01T10:00:00".len());
    }
}
