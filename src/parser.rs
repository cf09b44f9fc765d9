//! Recovers decision records from the append-only log.
//!
//! The log is a semi-structured, human-readable format, so recovery is a
//! single left-to-right line scan with a small amount of explicit state and
//! no lookahead. Every transition has a safe fallback: a log that is empty,
//! partially written, or missing sections parses without error.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::types::ParsedDecision;

/// Substituted when an entry has no recoverable approved-option bullet.
pub const NOT_RECORDED: &str = "[not recorded]";

const HEADING_MARKER: &str = "## ";
const APPROVED_TITLE: &str = "### Approved option";
const STAGE_SEPARATOR: &str = " - ";
const BULLET_MARKER: &str = "- ";

/// Parses the log at `log_path` into decision records, in append order.
///
/// A missing file yields an empty sequence; any other read failure
/// propagates.
pub fn parse_decisions(log_path: &Path) -> Result<Vec<ParsedDecision>> {
    let text = match fs::read_to_string(log_path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(parse_log_text(&text))
}

/// Line-oriented scan over the log text.
///
/// State carried between lines: the heading of the entry currently open, its
/// stage, the approved-option text accumulated so far, and whether the next
/// bulleted line should be captured as the approved option.
pub fn parse_log_text(text: &str) -> Vec<ParsedDecision> {
    let mut decisions = Vec::new();
    let mut current_heading = String::new();
    let mut current_stage = String::new();
    let mut approved = String::new();
    let mut capture_approved = false;

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(HEADING_MARKER) {
            if !current_heading.is_empty() {
                decisions.push(finish(&current_heading, &current_stage, &approved));
            }
            current_heading = rest.trim().to_string();
            // Stage is everything after the FIRST " - "; a heading with no
            // separator is treated as stage-only.
            current_stage = match current_heading.split_once(STAGE_SEPARATOR) {
                Some((_, stage)) => stage.to_string(),
                None => current_heading.clone(),
            };
            approved.clear();
            capture_approved = false;
            continue;
        }

        let trimmed = line.trim();
        if trimmed == APPROVED_TITLE {
            capture_approved = true;
            continue;
        }

        if capture_approved && let Some(rest) = trimmed.strip_prefix(BULLET_MARKER) {
            approved = rest.trim().to_string();
            capture_approved = false;
        }
    }

    if !current_heading.is_empty() {
        decisions.push(finish(&current_heading, &current_stage, &approved));
    }

    decisions
}

fn finish(heading: &str, stage: &str, approved: &str) -> ParsedDecision {
    ParsedDecision {
        heading: heading.to_string(),
        stage: stage.to_string(),
        approved: if approved.is_empty() {
            NOT_RECORDED.to_string()
        } else {
            approved.to_string()
        },
    }
}
