//! End-to-end flow: record gate decisions, then export a resume snapshot.

use wgcna_decisions::{DecisionEntry, ExportOptions, append_entry, export_snapshot};

#[test]
fn recorded_decisions_appear_in_the_snapshot_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("wgcna_decision_log.md");

    let gate_a = DecisionEntry::new(
        "Gate A",
        "signed-hybrid, power=5",
        "Better fit/connectivity tradeoff.",
    )
    .with_timestamp("2024-05-01T10:00:00")
    .with_options(["signed-hybrid, power=5", "signed, power=11"])
    .with_deferred_risks(["May differ from strict signed-network conventions."]);
    let gate_b = DecisionEntry::new("Gate B", "keep defaults", "No outliers detected.")
        .with_timestamp("2024-05-01T11:00:00");
    append_entry(&log, &gate_a).unwrap();
    append_entry(&log, &gate_b).unwrap();

    let opts = ExportOptions {
        workspace_dir: dir.path().to_path_buf(),
        ..ExportOptions::default()
    };
    let written = export_snapshot(&opts).unwrap();
    let snapshot = std::fs::read_to_string(&written).unwrap();

    let first = snapshot
        .find("- `Gate A` -> signed-hybrid, power=5")
        .expect("Gate A decision missing from snapshot");
    let second = snapshot
        .find("- `Gate B` -> keep defaults")
        .expect("Gate B decision missing from snapshot");
    assert!(first < second);

    // The decision log is itself a default artifact and exists by now.
    assert!(snapshot.contains("## Available Artifacts"));
    assert!(snapshot.contains("- `wgcna_decision_log.md`"));
}

#[test]
fn snapshot_truncates_to_the_last_twelve_decisions() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("wgcna_decision_log.md");

    for i in 1..=15 {
        let entry = DecisionEntry::new(format!("Gate {i}"), "keep defaults", "Routine approval.")
            .with_timestamp("2024-05-01T10:00:00");
        append_entry(&log, &entry).unwrap();
    }

    let opts = ExportOptions {
        workspace_dir: dir.path().to_path_buf(),
        ..ExportOptions::default()
    };
    let written = export_snapshot(&opts).unwrap();
    let snapshot = std::fs::read_to_string(&written).unwrap();

    assert!(!snapshot.contains("- `Gate 3` ->"));
    assert!(snapshot.contains("- `Gate 4` ->"));
    assert!(snapshot.contains("- `Gate 15` ->"));
    assert_eq!(snapshot.matches("-> keep defaults").count(), 12);
}
