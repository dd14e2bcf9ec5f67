use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use env_logger::Env;
use serde_json::to_string_pretty;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use relicense::cli::Cli;
use relicense::models::{ExtraData, Header, Output, REPORT_FORMAT_VERSION};
use relicense::utils::file::compile_exclude_patterns;
use relicense::{Config, GitHistory, ScanResult, find_targets, relicense_targets};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let start_time = Utc::now();

    let root = env::current_dir().context("determine current directory")?;
    let exclude_patterns = compile_exclude_patterns(&cli.exclude);
    let config = Config::default();
    let history = GitHistory::new(&root);

    let scan_result = find_targets(&root, cli.max_depth, &exclude_patterns, &config, &history)?;
    print_targets(&scan_result);

    if cli.modify {
        let rewritten = relicense_targets(&scan_result, &config)?;
        println!("Relicensed {} files", rewritten.len());
    }

    if let Some(output_file) = &cli.output_file {
        let end_time = Utc::now();
        let output = create_output(start_time, end_time, &root, cli.modify, scan_result);
        write_output(output_file, &output)?;
        println!("JSON output written to {}", output_file);
    }
    Ok(())
}

fn print_targets(scan_result: &ScanResult) {
    println!(
        "Found {} files to relicense ({} rejected, {} skipped)",
        scan_result.targets.len(),
        scan_result.rejected.len(),
        scan_result.skipped.len()
    );
    for path in scan_result.target_paths() {
        println!("{}", path.display());
    }
}

fn create_output(
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    root: &Path,
    modified: bool,
    scan_result: ScanResult,
) -> Output {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    let extra_data = ExtraData {
        files_count: scan_result.files_count,
        candidates_count: scan_result.candidates_count(),
        targets_count: scan_result.targets.len(),
        excluded_count: scan_result.excluded_count,
    };

    let errors: Vec<String> = scan_result
        .skipped
        .iter()
        .map(|skipped| format!("{}: {}", skipped.path.display(), skipped.reason))
        .collect();

    Output {
        headers: vec![Header {
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            root: root.to_string_lossy().to_string(),
            modified,
            extra_data,
            errors,
            output_format_version: REPORT_FORMAT_VERSION.to_string(),
        }],
        targets: scan_result.targets,
        rejected: scan_result.rejected,
        skipped: scan_result.skipped,
    }
}

fn write_output(output_file: &str, output: &Output) -> Result<()> {
    let json_output = to_string_pretty(output).context("serialize report")?;
    let mut file =
        File::create(output_file).with_context(|| format!("create report file {}", output_file))?;
    file.write_all(json_output.as_bytes())
        .with_context(|| format!("write report file {}", output_file))?;
    Ok(())
}
