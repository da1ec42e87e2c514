//! Command-line interface for docsum.
//!
//! This binary drives the docsum library, summarizing each requested folder
//! in sequence and printing per-folder progress, diagnostics for anything
//! that could not be read, and a final success tally.

use clap::{Parser, ValueEnum};
use docsum::{FolderStatus, RunReport, SummaryBuilder, SummaryOptions};
use std::fs;
use std::path::PathBuf;
use std::process::exit;

/// docsum, a folder summary generator
#[derive(Parser)]
#[command(name = "docsum", version, about, long_about = None)]
struct Cli {
    /// Folder names to summarize (default: the built-in folder list)
    folders: Vec<String>,

    /// Repository root the folder names are resolved against
    #[arg(long, default_value = ".")]
    repo_root: PathBuf,

    /// Output directory (default: <repo-root>/summaries)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Respect .gitignore files during the walk
    #[arg(long)]
    gitignore: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Max walk depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// File size limit in bytes (larger files yield no code sample)
    #[arg(long, default_value_t = 1024 * 1024)]
    file_size_limit: u64,

    /// Format of the final report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

impl Cli {
    fn into_options(self) -> (SummaryOptions, ReportFormat) {
        let mut builder = SummaryBuilder::new(self.repo_root)
            .folders(self.folders)
            .respect_gitignore(self.gitignore)
            .include_hidden(!self.no_hidden)
            .follow_links(self.follow_links)
            .ignore_patterns(self.ignore_patterns)
            .file_size_limit(Some(self.file_size_limit));

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };
        if let Some(dir) = self.output_dir {
            builder = builder.output_dir(dir);
        }

        (builder.build(), self.format)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format) = cli.into_options();

    if let Err(e) = fs::create_dir_all(&options.output_dir) {
        eprintln!(
            "Error: cannot create output directory {}: {}",
            options.output_dir.display(),
            e
        );
        exit(1);
    }

    let folders = options.folder_list();
    println!("Generating summaries for {} folders...", folders.len());

    let mut report = RunReport::default();
    for folder in &folders {
        println!("Analyzing folder: {}", folder);
        let status = process_folder(&options, folder);
        report.statuses.push((folder.clone(), status));
    }

    output_report(&report, format);
}

fn process_folder(options: &SummaryOptions, folder: &str) -> FolderStatus {
    match docsum::summarize_folder(options, folder) {
        Ok(Some(summary)) => {
            for path in &summary.unreadable {
                eprintln!("Warning: could not read {}", path.display());
            }
            match docsum::write_summary(options, &summary) {
                Ok(path) => {
                    println!("Summary generated: {}", path.display());
                    FolderStatus::Written(path)
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    FolderStatus::Failed(e.to_string())
                }
            }
        }
        Ok(None) => {
            println!("Folder {} does not exist.", folder);
            FolderStatus::Missing
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            FolderStatus::Failed(e.to_string())
        }
    }
}

fn output_report(report: &RunReport, format: ReportFormat) {
    match format {
        ReportFormat::Text => {
            println!(
                "Summary generation complete. {}/{} summaries generated.",
                report.succeeded(),
                report.attempted()
            );
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(report).unwrap_or_else(|e| {
                eprintln!("JSON serialization error: {}", e);
                exit(1);
            });
            println!("{}", json);
        }
    }
}
