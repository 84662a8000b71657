//! End-to-end editor workflow: type splits, fill derived columns, save, reload.

use anyhow::{Context, Result};
use runsplit::{
    AttemptsPolicy, Column, EditorConfig, Run, RunEditor, Segment, SplitsError, build_run,
    format_time, parse_time, trim_decimals,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn typed_editor() -> Result<RunEditor> {
    let mut editor = RunEditor::new();
    editor.set_title("Celeste Any%");
    editor.set_goal("sub 30:00");
    editor.set_attempts_text("41");

    let rows = [
        ("Forsaken City", "2:05.31"),
        ("Old Site", ""),
        ("Celestial Resort", "11:40.08"),
        ("Golden Ridge", "16:02.5"),
    ];

    for (index, (name, split)) in rows.iter().enumerate() {
        if index > 0 {
            editor.add_row();
        }
        editor.set_cell(index, Column::Name, *name).context("naming row")?;
        editor.set_cell(index, Column::Split, *split).context("typing split")?;
    }

    Ok(editor)
}

#[test]
fn fill_then_save_produces_derived_segments() -> Result<()> {
    init_tracing();

    let mut editor = typed_editor()?;
    let derived = editor.fill_segment_times();

    assert_eq!(derived.len(), 4);
    assert!(derived[1].is_none(), "blank split is missing");
    assert!(derived[2].is_none(), "successor of a missing split is missing");
    assert_eq!(editor.cell(0, Column::Segment)?, Some("2:05.31"));
    assert_eq!(editor.cell(1, Column::BestSegment)?, Some(""));
    assert_eq!(editor.cell(3, Column::Segment)?, Some("4:22.42"));
    assert_eq!(editor.cell(3, Column::BestSegment)?, Some("4:22.42"));

    let run = editor.save()?;

    assert_eq!(run.title, "Celeste Any%");
    assert_eq!(run.goal, "sub 30:00");
    assert_eq!(run.attempts_count, 41);
    assert_eq!(run.len(), 4);

    // A missing split becomes zero once saved
    assert_eq!(run.segments[1].split_time, 0.0);
    assert_eq!(run.segments[1].segment_time, 0.0);
    assert_eq!(format_time(run.segments[3].split_time), "16:02.50");

    Ok(())
}

#[test]
fn saved_run_reloads_into_identical_rows() -> Result<()> {
    init_tracing();

    let mut editor = typed_editor()?;
    editor.fill_segment_times();
    let run = editor.save()?;

    let reloaded = RunEditor::from_run(&run);
    assert_eq!(reloaded.save()?, run);
    let split_text = reloaded.cell(2, Column::Split)?.context("reloaded split cell")?;
    assert_eq!(parse_time(split_text), run.segments[2].split_time);
    assert_eq!(format_time(parse_time(split_text)), "11:40.08");

    Ok(())
}

#[test]
fn attempts_policy_is_explicit() -> Result<()> {
    init_tracing();

    let mut editor = typed_editor()?;
    editor.set_attempts_text("forty-one");

    match editor.save() {
        Err(SplitsError::InvalidAttemptsCount { text, .. }) => assert_eq!(text, "forty-one"),
        other => panic!("expected InvalidAttemptsCount, got {other:?}"),
    }

    let config = EditorConfig { attempts_policy: AttemptsPolicy::ClampToZero, ..EditorConfig::default() };
    assert_eq!(editor.save_with(&config)?.attempts_count, 0);

    Ok(())
}

#[test]
fn imported_comma_times_are_trimmed_before_parsing() {
    let imported = ["1:23,45", "12:03,50", "9,99"];
    let parsed: Vec<f64> = imported.iter().map(|text| parse_time(&trim_decimals(text, 2))).collect();

    // Without a colon there is nothing to trim and the comma field is unreadable
    assert_eq!(parsed, vec![83.0, 723.0, 0.0]);
}

#[test]
fn build_run_matches_documented_defaults() -> Result<()> {
    let rows = vec![runsplit::SegmentRow::default()];
    let run: Run = build_run("", "", " ", &rows)?;

    assert_eq!(run.attempts_count, 0);
    assert_eq!(run.segments, vec![Segment::new("-", 0.0, 0.0, 0.0)]);

    Ok(())
}
