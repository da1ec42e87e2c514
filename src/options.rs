use crate::diagram::DiagramMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Folder names summarized when a run supplies none of its own.
pub const DEFAULT_FOLDERS: [&str; 7] = [
    "01_Text_generation",
    "02_Knowledge_Bases_and_RAG",
    "03_Model_customization",
    "04_Image_and_Multimodal",
    "05_Agents",
    "06_OpenSource_examples",
    "07_Cross_Region_Inference",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Root directory the folder names are resolved against.
    pub repo_root: PathBuf,
    /// Directory summary files are written to; created if absent.
    pub output_dir: PathBuf,
    /// Folders to summarize; empty selects [`DEFAULT_FOLDERS`].
    pub folders: Vec<String>,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub ignore_patterns: Vec<String>,
    /// Files larger than this yield no code sample.
    pub file_size_limit: Option<u64>,
    pub diagram_map: DiagramMap,
}
impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from("."),
            output_dir: PathBuf::from("summaries"),
            folders: Vec::new(),
            respect_gitignore: false,
            max_depth: None,
            include_hidden: true,
            follow_links: false,
            ignore_patterns: Vec::new(),
            file_size_limit: Some(1024 * 1024),
            diagram_map: DiagramMap::default(),
        }
    }
}
impl SummaryOptions {
    /// The effective folder list for a run.
    pub fn folder_list(&self) -> Vec<String> {
        if self.folders.is_empty() {
            DEFAULT_FOLDERS.iter().map(|s| s.to_string()).collect()
        } else {
            self.folders.clone()
        }
    }
}
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    options: SummaryOptions,
}
impl SummaryBuilder {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        let repo_root: PathBuf = repo_root.into();
        let output_dir = repo_root.join("summaries");
        Self {
            options: SummaryOptions {
                repo_root,
                output_dir,
                ..Default::default()
            },
        }
    }
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.output_dir = dir.into();
        self
    }
    pub fn folders(mut self, folders: Vec<String>) -> Self {
        self.options.folders = folders;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn file_size_limit(mut self, limit: Option<u64>) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn diagram_map(mut self, map: DiagramMap) -> Self {
        self.options.diagram_map = map;
        self
    }
    pub fn build(self) -> SummaryOptions {
        self.options
    }
}
