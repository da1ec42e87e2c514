use docsum::{
    SummaryBuilder,
    extract_sample,
    output_file_name,
    summarize_folder,
    truncate_sample,
};
use std::fs;
use tempfile::tempdir;
#[test]
fn test_extract_sample_from_code_cell() {
    let raw = r##"{"cells": [{"cell_type": "markdown", "source": ["# Intro"]}, {"cell_type": "code", "source": ["import os\n", "print(1)"]}]}"##;
    assert_eq!(extract_sample(raw), Some("import os\nprint(1)".to_string()));
}
#[test]
fn test_extract_sample_source_as_string() {
    let raw = r#"{"cells": [{"cell_type": "code", "source": "print(2)"}]}"#;
    assert_eq!(extract_sample(raw), Some("print(2)".to_string()));
}
#[test]
fn test_extract_sample_skips_blank_code_cells() {
    let raw = r#"{"cells": [{"cell_type": "code", "source": ["   \n"]}, {"cell_type": "code", "source": ["x = 1"]}]}"#;
    assert_eq!(extract_sample(raw), Some("x = 1".to_string()));
}
#[test]
fn test_extract_sample_fenced_fallback() {
    let raw = "not json at all\n```python\nx = 41\n```\ntrailing";
    assert_eq!(extract_sample(raw), Some("x = 41".to_string()));
}
#[test]
fn test_extract_sample_nothing_found() {
    let raw = "plain prose, no fences, no json";
    assert_eq!(extract_sample(raw), None);
}
#[test]
fn test_truncate_sample_bounds() {
    let long = "A".repeat(600);
    let truncated = truncate_sample(&long);
    assert_eq!(truncated.len(), 503);
    assert!(truncated.starts_with(&"A".repeat(500)));
    assert!(truncated.ends_with("..."));
    let exact = "B".repeat(500);
    assert_eq!(truncate_sample(&exact), exact);
}
#[test]
fn test_truncate_sample_counts_characters_not_bytes() {
    let long = "é".repeat(600);
    let truncated = truncate_sample(&long);
    assert_eq!(truncated.chars().count(), 503);
    assert!(truncated.ends_with("..."));
}
#[test]
fn test_output_file_name_prefix() {
    assert_eq!(output_file_name("01_Text_generation"), "SUMMARY-01.md");
    assert_eq!(output_file_name("NoUnderscore"), "SUMMARY-NoUnderscore.md");
    // Colliding prefixes map to the same file.
    assert_eq!(output_file_name("05_Agents"), output_file_name("05_Other"));
}
#[test]
fn test_fallback_executive_summary_without_readme() {
    let repo = tempdir().unwrap();
    fs::create_dir(repo.path().join("10_Demo_stuff")).unwrap();
    let options = SummaryBuilder::new(repo.path()).build();
    let summary = summarize_folder(&options, "10_Demo_stuff").unwrap().unwrap();
    assert!(
        summary
            .document
            .contains("This module focuses on 10 Demo stuff capabilities.")
    );
}
#[test]
fn test_readme_first_paragraph_only() {
    let repo = tempdir().unwrap();
    let folder = repo.path().join("03_Model_customization");
    fs::create_dir(&folder).unwrap();
    fs::write(
        folder.join("README.md"),
        "Fine-tuning walkthrough.\n\nSecond paragraph is not included.\n",
    )
    .unwrap();
    let options = SummaryBuilder::new(repo.path()).build();
    let summary = summarize_folder(&options, "03_Model_customization")
        .unwrap()
        .unwrap();
    assert!(summary.document.contains("Fine-tuning walkthrough."));
    assert!(!summary.document.contains("Second paragraph is not included."));
}
#[test]
fn test_purpose_label_from_filename() {
    let repo = tempdir().unwrap();
    let folder = repo.path().join("05_Agents");
    fs::create_dir(&folder).unwrap();
    fs::write(
        folder.join("agents_demo_RUN.ipynb"),
        r#"{"cells": []}"#,
    )
    .unwrap();
    let options = SummaryBuilder::new(repo.path()).build();
    let summary = summarize_folder(&options, "05_Agents").unwrap().unwrap();
    assert!(
        summary
            .document
            .contains("- **agents_demo_RUN.ipynb**: Agents demo run")
    );
}
#[test]
fn test_no_samples_no_section() {
    let repo = tempdir().unwrap();
    let folder = repo.path().join("09_Notes");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("notes.md"), "just markdown").unwrap();
    let options = SummaryBuilder::new(repo.path()).build();
    let summary = summarize_folder(&options, "09_Notes").unwrap().unwrap();
    assert!(!summary.document.contains("Key Code Samples"));
    assert!(!summary.document.contains("### Notebooks"));
    assert!(!summary.document.contains("### Scripts"));
}
#[test]
fn test_binary_script_reported_unreadable() {
    let repo = tempdir().unwrap();
    let folder = repo.path().join("05_Agents");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("frozen.py"), [0u8, 159, 146, 150, 0]).unwrap();
    let options = SummaryBuilder::new(repo.path()).build();
    let summary = summarize_folder(&options, "05_Agents").unwrap().unwrap();
    assert_eq!(summary.unreadable.len(), 1);
    assert!(summary.unreadable[0].ends_with("frozen.py"));
    assert!(!summary.document.contains("Key Code Samples"));
}
#[test]
fn test_degenerate_diagram_for_unknown_keyword() {
    let repo = tempdir().unwrap();
    fs::create_dir(repo.path().join("99_Unmatched")).unwrap();
    let options = SummaryBuilder::new(repo.path()).build();
    let summary = summarize_folder(&options, "99_Unmatched").unwrap().unwrap();
    assert!(
        summary
            .document
            .contains("A[Client Application] --> B[Foundation Model Service]")
    );
    assert!(!summary.document.contains("C1["));
}
