//! demodel CLI - GXT model migration tool
//!
//! Rewrites Java model classes written against the legacy GXT BaseModel
//! accessor API into plain Java field access:
//! - base_import: Remove com.extjs.gxt.ui.client.data.BaseModel(Data) import lines
//! - superclass: Drop 'extends BaseModel(Data)' from class declarations
//! - set_call: Convert set("field", value) calls to this.field = value
//! - get_call: Convert return get("field") to return field

mod output;
mod process;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use demodel_rules::RuleRegistry;
use output::{MatchInfo, OutputFormat, Reporter};
use process::{process_file, write_file, ProcessResult};

#[derive(Parser)]
#[command(name = "demodel")]
#[command(version = "0.1.0")]
#[command(about = "Migrate GXT BaseModel classes to plain Java field access")]
#[command(author = "demodel contributors")]
struct Cli {
    /// Files or directories to process
    #[arg(required_unless_present = "list_rules")]
    paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(long, short = 'r')]
    recursive: bool,

    /// Show changes without applying them
    #[arg(long)]
    check: bool,

    /// Alias for --check
    #[arg(long, short = 'n', hide = true)]
    dry_run: bool,

    /// Show verbose output
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Rules to run (can be specified multiple times)
    #[arg(long, value_name = "RULE")]
    rule: Vec<String>,

    /// Output format: text, json, diff
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    format: String,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// List available rules and exit
    #[arg(long)]
    list_rules: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let registry = RuleRegistry::new();

    if cli.list_rules {
        println!("{}", "Available rules:".bold());
        for (name, description) in registry.list_rules() {
            println!("  {} - {}", name.green(), description);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let output_format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::from_str(&cli.format).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid output format '{}'. Valid options: text, json, diff",
                cli.format
            )
        })?
    };

    // Validate rule names from the CLI
    let all_rules = registry.all_names();
    for rule in &cli.rule {
        if !all_rules.contains(&rule.as_str()) {
            eprintln!(
                "{}: Unknown rule '{}'. Use --list-rules to see available rules.",
                "Error".red(),
                rule
            );
            return Ok(ExitCode::from(1));
        }
    }

    let enabled_rules: HashSet<String> = if cli.rule.is_empty() {
        all_rules.iter().map(|name| name.to_string()).collect()
    } else {
        cli.rule.iter().cloned().collect()
    };

    let check_mode = cli.check || cli.dry_run;

    if cli.verbose && output_format == OutputFormat::Text {
        println!(
            "{}: {}",
            "Mode".bold(),
            if check_mode { "check" } else { "apply" }
        );
        let mut names: Vec<&str> = enabled_rules.iter().map(String::as_str).collect();
        names.sort_unstable();
        println!("{}: {}", "Rules".bold(), names.join(", "));
        println!();
    }

    let mut reporter = Reporter::new(output_format, cli.verbose);

    // Collect candidate files. Every entry is guarded with an explicit
    // is-file/is-directory check before dispatch; a nonexistent path is a
    // reported failure, not a silent skip.
    let mut file_paths: Vec<PathBuf> = Vec::new();

    for path in &cli.paths {
        if path.is_file() {
            file_paths.push(path.clone());
        } else if path.is_dir() {
            collect_java_files(path, cli.recursive, &mut file_paths, &mut reporter);
        } else {
            reporter.report_error(path, "Path does not exist");
        }
    }

    // Sort for deterministic output
    file_paths.sort();

    // Each file is read, transformed, and (conditionally) written before the
    // next one is considered; a failure on one file never stops the rest.
    for path in &file_paths {
        let result = process_file_to_result(path, &enabled_rules);
        report_result(path, result, check_mode, &mut reporter);
    }

    // Determine exit code
    let summary = reporter.summary();
    let exit_code = if summary.errors > 0 {
        ExitCode::from(1)
    } else if check_mode && summary.files_with_changes > 0 {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    };

    reporter.finish(check_mode);

    Ok(exit_code)
}

/// Expand a directory into its eligible files: one level deep by default,
/// the whole subtree when recursive.
fn collect_java_files(
    dir: &Path,
    recursive: bool,
    file_paths: &mut Vec<PathBuf>,
    reporter: &mut Reporter,
) {
    let mut walker = walkdir::WalkDir::new(dir);
    if !recursive {
        walker = walker.max_depth(1);
    }

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "java")
                {
                    file_paths.push(entry.path().to_path_buf());
                }
            }
            Err(e) => {
                let at = e.path().unwrap_or(dir).to_path_buf();
                reporter.report_error(&at, &format!("Traversal failed: {}", e));
            }
        }
    }
}

/// Result of processing a single file
enum FileResult {
    /// File name does not carry the .java suffix
    Ineligible,
    /// File had no matches
    NoChanges,
    /// File has rewrites to report/apply
    Rewritten {
        matches: Vec<MatchInfo>,
        old_source: String,
        new_source: String,
    },
    /// Error occurred
    Error(String),
}

/// Process a file and return a result (no write performed here)
fn process_file_to_result(path: &PathBuf, enabled_rules: &HashSet<String>) -> FileResult {
    match process_file(path, enabled_rules) {
        Ok(None) => FileResult::Ineligible,
        Ok(Some(ProcessResult {
            matches,
            old_source,
            new_source: Some(new_source),
        })) => FileResult::Rewritten {
            matches,
            old_source,
            new_source,
        },
        Ok(Some(_)) => FileResult::NoChanges,
        Err(e) => FileResult::Error(format!("{:#}", e)),
    }
}

/// Report a file result, persisting the rewrite unless in check mode
fn report_result(path: &PathBuf, result: FileResult, check_mode: bool, reporter: &mut Reporter) {
    match result {
        FileResult::Ineligible => {
            reporter.report_ineligible(path);
        }
        FileResult::NoChanges => {
            reporter.report_skipped(path);
        }
        FileResult::Rewritten {
            matches,
            old_source,
            new_source,
        } => {
            if check_mode {
                reporter.report_check(path, matches, &old_source, &new_source);
            } else {
                match write_file(path, &new_source) {
                    Ok(()) => reporter.report_rewritten(path, matches),
                    Err(e) => reporter.report_error(path, &format!("{:#}", e)),
                }
            }
        }
        FileResult::Error(msg) => {
            reporter.report_error(path, &msg);
        }
    }
}
