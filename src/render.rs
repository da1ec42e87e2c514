//! Markdown template assembly for folder summaries.
//!
//! Rendering is deterministic string building: which sections appear depends
//! only on which buckets are non-empty, never on sample content. The whole
//! document is accumulated in memory and returned as one string.

use crate::diagram::DiagramMap;
use crate::types::{CodeSample, FileBuckets};
use std::path::Path;

/// At most this many code samples are embedded per summary.
const MAX_SAMPLES: usize = 3;

/// Assembles the summary document for one folder.
pub fn render_summary(
    folder_name: &str,
    readme: Option<&str>,
    buckets: &FileBuckets,
    samples: &[CodeSample],
    diagram: &DiagramMap,
) -> String {
    let spaced = folder_name.replace('_', " ");
    let mut out = String::with_capacity(2048);
    out.push_str(&format!("# {} Module Analysis\n\n", folder_name));

    out.push_str("## Executive Summary\n\n");
    match readme.filter(|content| !content.is_empty()) {
        Some(content) => {
            out.push_str(first_paragraph(content));
            out.push_str("\n\n");
        }
        None => {
            out.push_str(&format!(
                "This module focuses on {} capabilities.\n\n",
                spaced
            ));
        }
    }

    out.push_str("## Implementation Details Breakdown\n\n");
    if !buckets.notebooks.is_empty() {
        out.push_str("### Notebooks\n\n");
        for path in &buckets.notebooks {
            out.push_str(&format!(
                "- **{}**: {}\n",
                file_name(path),
                purpose_label(path)
            ));
        }
        out.push('\n');
    }
    if !buckets.scripts.is_empty() {
        out.push_str("### Scripts\n\n");
        for path in &buckets.scripts {
            out.push_str(&format!(
                "- **{}**: {}\n",
                file_name(path),
                purpose_label(path)
            ));
        }
        out.push('\n');
    }

    if !samples.is_empty() {
        out.push_str("### Key Code Samples\n\n");
        for sample in samples.iter().take(MAX_SAMPLES) {
            out.push_str(&format!(
                "#### From {}\n\n```python\n{}\n```\n\n",
                sample.file_name, sample.code
            ));
        }
    }

    out.push_str("## Technical Architecture Overview\n\n");
    out.push_str(&diagram.render(folder_name));
    out.push('\n');

    out.push_str("## Key Takeaways and Lessons Learned\n\n");
    out.push_str(&format!(
        "1. **Module Focus**: This module demonstrates {} capabilities.\n\n",
        spaced
    ));
    out.push_str(
        "2. **Integration Patterns**: The examples show how to integrate the \
         platform services into applications.\n\n",
    );
    out.push_str(
        "3. **Best Practices**: The code demonstrates recommended patterns for \
         working with the platform APIs.\n\n",
    );

    out.push_str("## Recommendations and Next Steps\n\n");
    out.push_str(
        "1. **Explore Further**: Experiment with different parameters and \
         configurations to understand their impact.\n\n",
    );
    out.push_str(
        "2. **Combine Capabilities**: Consider how the capabilities demonstrated \
         in this module can be combined with other platform features.\n\n",
    );
    out.push_str(
        "3. **Production Considerations**: When moving to production, consider \
         aspects like error handling, monitoring, and scaling.\n\n",
    );

    out
}

// First blank-line-delimited paragraph, or the first line when the content
// has no blank line.
fn first_paragraph(content: &str) -> &str {
    match content.split_once("\n\n") {
        Some((first, _)) => first,
        None => content.lines().next().unwrap_or(content),
    }
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// Heuristic purpose label: basename without extension, underscores as
// spaces, first letter upper and the rest lower.
fn purpose_label(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    capitalize(&stem.replace('_', " "))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
