use crate::error::SummaryError;
use crate::notebook;
use crate::options::SummaryOptions;
use crate::render;
use crate::types::{CodeSample, FileBuckets, FolderStatus, FolderSummary, RunReport};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, options: &SummaryOptions) -> Result<Self, SummaryError> {
        let mut builder = WalkBuilder::new(root);
        builder
            .git_ignore(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .ignore(false);
        if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    SummaryError::Pattern(format!("invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| SummaryError::Pattern(format!("failed to build glob set: {}", e)))?;
            builder.filter_entry(move |entry| !matcher.is_match(entry.path()));
        }
        Ok(Self {
            inner: builder.build(),
        })
    }
    // Traversal errors are skipped; the walk yields whatever was reachable.
    fn collect_files(self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for result in self.inner {
            match result {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() {
                        files.push(path.to_path_buf());
                    }
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("walk error: {}", _e);
                }
            }
        }
        files
    }
}
fn partition_files(paths: Vec<PathBuf>) -> FileBuckets {
    let mut buckets = FileBuckets::default();
    for path in paths {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ipynb") => buckets.notebooks.push(path),
            Some("py") => buckets.scripts.push(path),
            Some("md") => buckets.markdown.push(path),
            _ => buckets.other.push(path),
        }
    }
    buckets.sort();
    buckets
}
fn read_text(path: &Path, size_limit: Option<u64>) -> Result<String, SummaryError> {
    if let Some(limit) = size_limit {
        let metadata = fs::metadata(path).map_err(|e| SummaryError::io(path, e))?;
        if metadata.len() > limit {
            #[cfg(feature = "logging")]
            tracing::debug!(
                "File too large ({} > {}), skipping content",
                metadata.len(),
                limit
            );
            return Err(SummaryError::TooLarge(path.to_path_buf()));
        }
    }
    let file = File::open(path).map_err(|e| SummaryError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut first_chunk = Vec::with_capacity(4096);
    let _ = reader
        .by_ref()
        .take(4096)
        .read_to_end(&mut first_chunk)
        .map_err(|e| SummaryError::io(path, e))?;
    if content_inspector::inspect(&first_chunk).is_binary() {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return Err(SummaryError::NotText(path.to_path_buf()));
    }
    let mut content = String::from_utf8_lossy(&first_chunk).into_owned();
    reader
        .read_to_string(&mut content)
        .map_err(|e| SummaryError::io(path, e))?;
    Ok(content)
}
fn collect_samples(
    buckets: &FileBuckets,
    options: &SummaryOptions,
    unreadable: &mut Vec<PathBuf>,
) -> Vec<CodeSample> {
    let mut samples = Vec::new();
    for path in &buckets.notebooks {
        match read_text(path, options.file_size_limit) {
            Ok(raw) => {
                if let Some(code) = notebook::extract_sample(&raw) {
                    samples.push(CodeSample {
                        file_name: render::file_name(path),
                        code: notebook::truncate_sample(&code),
                    });
                }
            }
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("unreadable notebook {}: {}", path.display(), _e);
                unreadable.push(path.clone());
            }
        }
    }
    for path in &buckets.scripts {
        match read_text(path, options.file_size_limit) {
            Ok(raw) => {
                if !raw.is_empty() {
                    samples.push(CodeSample {
                        file_name: render::file_name(path),
                        code: notebook::truncate_sample(&raw),
                    });
                }
            }
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("unreadable script {}: {}", path.display(), _e);
                unreadable.push(path.clone());
            }
        }
    }
    samples
}

/// Derives the output filename for a folder name.
///
/// Only the prefix before the first underscore survives, so folders sharing
/// a prefix write to the same file. Preserved observed behavior.
pub fn output_file_name(folder_name: &str) -> String {
    let prefix = folder_name.split('_').next().unwrap_or(folder_name);
    format!("SUMMARY-{}.md", prefix)
}

/// Summarizes one folder under the repository root.
///
/// Returns `Ok(None)` when the folder does not exist; the caller decides how
/// to report the skip. Files that could not be read are listed in
/// [`FolderSummary::unreadable`] rather than failing the folder.
pub fn summarize_folder(
    options: &SummaryOptions,
    folder_name: &str,
) -> Result<Option<FolderSummary>, SummaryError> {
    let folder_path = options.repo_root.join(folder_name);
    if !folder_path.exists() {
        return Ok(None);
    }
    #[cfg(feature = "logging")]
    tracing::debug!("analyzing folder: {}", folder_path.display());
    let mut unreadable = Vec::new();
    let readme_path = folder_path.join("README.md");
    let readme = if readme_path.exists() {
        match read_text(&readme_path, options.file_size_limit) {
            Ok(content) => Some(content),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("unreadable README {}: {}", readme_path.display(), _e);
                unreadable.push(readme_path);
                None
            }
        }
    } else {
        None
    };
    let walker = Walker::new(&folder_path, options)?;
    let buckets = partition_files(walker.collect_files());
    let samples = collect_samples(&buckets, options, &mut unreadable);
    let document = render::render_summary(
        folder_name,
        readme.as_deref(),
        &buckets,
        &samples,
        &options.diagram_map,
    );
    Ok(Some(FolderSummary {
        folder_name: folder_name.to_string(),
        document,
        unreadable,
    }))
}

/// Writes a summary to `<output_dir>/SUMMARY-<prefix>.md`, overwriting any
/// existing file at that path.
pub fn write_summary(
    options: &SummaryOptions,
    summary: &FolderSummary,
) -> Result<PathBuf, SummaryError> {
    let path = options
        .output_dir
        .join(output_file_name(&summary.folder_name));
    fs::write(&path, &summary.document).map_err(|e| SummaryError::io(&path, e))?;
    Ok(path)
}

/// Runs the whole pipeline: creates the output directory, then summarizes
/// and writes every folder in the effective list, sequentially.
///
/// A missing or failed folder never stops the run; each folder's outcome is
/// recorded in the returned [`RunReport`]. Only an uncreatable output
/// directory is fatal.
pub fn run(options: &SummaryOptions) -> Result<RunReport, SummaryError> {
    fs::create_dir_all(&options.output_dir)
        .map_err(|e| SummaryError::io(&options.output_dir, e))?;
    let mut report = RunReport::default();
    for folder in options.folder_list() {
        let status = match summarize_folder(options, &folder) {
            Ok(Some(summary)) => match write_summary(options, &summary) {
                Ok(path) => FolderStatus::Written(path),
                Err(e) => FolderStatus::Failed(e.to_string()),
            },
            Ok(None) => FolderStatus::Missing,
            Err(e) => FolderStatus::Failed(e.to_string()),
        };
        report.statuses.push((folder, status));
    }
    Ok(report)
}
