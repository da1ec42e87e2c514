use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Files found under one folder, partitioned by extension.
///
/// Buckets are sorted by path so that a rendered summary is byte-identical
/// across runs on an unchanged folder.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FileBuckets {
    pub notebooks: Vec<PathBuf>,
    pub scripts: Vec<PathBuf>,
    pub markdown: Vec<PathBuf>,
    pub other: Vec<PathBuf>,
}

impl FileBuckets {
    pub(crate) fn sort(&mut self) {
        self.notebooks.sort();
        self.scripts.sort();
        self.markdown.sort();
        self.other.sort();
    }
}

/// A truncated code excerpt taken from a notebook cell or script file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    /// Basename of the file the sample came from.
    pub file_name: String,
    /// The excerpt, already truncated to the sample limit.
    pub code: String,
}

/// The result of summarizing one folder.
#[derive(Debug, Serialize, Deserialize)]
pub struct FolderSummary {
    /// The folder name as supplied to the run.
    pub folder_name: String,
    /// The fully rendered markdown document.
    pub document: String,
    /// Files whose content could not be read (I/O failure, binary content,
    /// or over the size limit). Distinguished from files that simply had no
    /// extractable code.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unreadable: Vec<PathBuf>,
}

/// Outcome of one folder within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderStatus {
    /// A summary was written to this path.
    Written(PathBuf),
    /// The folder does not exist under the repository root; skipped.
    Missing,
    /// The folder existed but summarizing or writing failed.
    Failed(String),
}

/// Per-folder statuses for a whole run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub statuses: Vec<(String, FolderStatus)>,
}

impl RunReport {
    /// Number of folders attempted.
    pub fn attempted(&self) -> usize {
        self.statuses.len()
    }

    /// Number of folders that produced a summary file.
    pub fn succeeded(&self) -> usize {
        self.statuses
            .iter()
            .filter(|(_, status)| matches!(status, FolderStatus::Written(_)))
            .count()
    }
}
