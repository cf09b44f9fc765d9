//! # wgcna-decisions
//!
//! Append-only decision logging for human-in-the-loop WGCNA pipeline runs.
//!
//! A long-running pipeline pauses at named gates; a human approves one of the
//! presented options; the choice and its rationale are appended to a markdown
//! log. A later session regenerates a compact resume snapshot from that log
//! plus the pipeline's on-disk artifacts.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use wgcna_decisions::{DecisionEntry, append_entry, parse_decisions};
//!
//! # fn main() -> wgcna_decisions::Result<()> {
//! let entry = DecisionEntry::new(
//!     "Gate C: Power and Network Type",
//!     "signed-hybrid, power=5",
//!     "Better fit/connectivity tradeoff.",
//! )
//! .with_options(["signed-hybrid, power=5", "signed, power=11"]);
//!
//! let log = Path::new("wgcna_decision_log.md");
//! append_entry(log, &entry)?;
//!
//! for decision in parse_decisions(log)? {
//!     println!("{} -> {}", decision.stage, decision.approved);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod parser;
pub mod recorder;
pub mod snapshot;
pub mod types;

pub use error::{DecisionLogError, Result};
pub use parser::{NOT_RECORDED, parse_decisions};
pub use recorder::append_entry;
pub use snapshot::{DEFAULT_ARTIFACTS, ExportOptions, export_snapshot};
pub use types::{DecisionEntry, ParsedDecision};
