//! # Docsum
//!
//! `docsum` walks a set of documentation/example folders, inspects the
//! notebook and script files inside each, and renders one templated markdown
//! summary document per folder: a README excerpt, a file listing with guessed
//! purposes, up to three truncated code samples, a keyword-selected
//! architecture diagram, and fixed closing sections.
//!
//! Extraction is best effort. A notebook that is not valid JSON, has no code
//! cells, or cannot be read simply contributes no sample; files whose content
//! could not be read at all are reported separately in
//! [`FolderSummary::unreadable`].
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use docsum::{SummaryBuilder, run};
//!
//! let options = SummaryBuilder::new("path/to/repo")
//!     .folders(vec!["05_Agents".into()])
//!     .build();
//!
//! let report = run(&options).expect("Failed to generate summaries");
//!
//! println!(
//!     "{}/{} summaries generated",
//!     report.succeeded(),
//!     report.attempted()
//! );
//! ```

mod diagram;
mod engine;
mod error;
mod notebook;
mod options;
mod render;
mod types;

pub use diagram::{DiagramBranch, DiagramMap};
pub use engine::{output_file_name, run, summarize_folder, write_summary};
pub use error::SummaryError;
pub use notebook::{SAMPLE_CHAR_LIMIT, extract_sample, truncate_sample};
pub use options::{DEFAULT_FOLDERS, SummaryBuilder, SummaryOptions};
pub use render::render_summary;
pub use types::{CodeSample, FileBuckets, FolderStatus, FolderSummary, RunReport};
