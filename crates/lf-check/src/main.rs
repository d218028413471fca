//! `lf-check`: inspect level files from the command line.
//!
//! ```text
//! lf-check [--config editor.json] [--ops] level.json...
//! ```
//!
//! Prints element counts per level, lists cells holding unknown values and
//! placements the editor would reject, and with `--ops` dumps the frame's
//! draw operations as JSON. Exits non-zero if any level fails to load or
//! is not clean.

mod report;

use lf_core::{EditorConfig, ElementCatalog, LevelData, PreviewState};
use lf_render::{RenderTheme, render};
use report::{LevelReport, check_level};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "usage: lf-check [--config FILE] [--ops] LEVEL...";

struct Options {
    config: Option<PathBuf>,
    dump_ops: bool,
    levels: Vec<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        config: None,
        dump_ops: false,
        levels: Vec::new(),
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a file")?;
                options.config = Some(PathBuf::from(path));
            }
            "--ops" => options.dump_ops = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
            path => options.levels.push(PathBuf::from(path)),
        }
    }
    if options.levels.is_empty() {
        return Err(USAGE.to_string());
    }
    Ok(options)
}

fn load_config(path: &Path) -> Result<EditorConfig, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    EditorConfig::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
}

fn print_report(path: &Path, report: &LevelReport) {
    let counts: Vec<String> = report
        .counts
        .iter()
        .map(|(name, n)| format!("{name}×{n}"))
        .collect();
    let mark = if report.is_clean() { "✓" } else { "✗" };
    let contents = if report.grid.is_blank() {
        "empty".to_string()
    } else {
        counts.join(" ")
    };
    println!(
        "{mark} {} ({}×{}) {contents}",
        path.display(),
        report.rows,
        report.cols,
    );
    for (cell, value) in &report.unknown {
        println!("    ({}, {}) unknown value {value}", cell.row, cell.col);
    }
    for conflict in &report.conflicts {
        println!("    {conflict}");
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let config = match options.config.as_deref().map(load_config).transpose() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("CONFIG ERROR {msg}");
            return ExitCode::from(2);
        }
    };
    let expected = config.as_ref().map(|c| (c.rows, c.cols));
    let cell_size = config.map_or(EditorConfig::default().cell_size, |c| c.cell_size);

    let catalog = ElementCatalog::standard();
    let theme = RenderTheme::light();
    let mut failed = 0;

    for path in &options.levels {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("SKIP {}: {e}", path.display());
                failed += 1;
                continue;
            }
        };
        let report = match LevelData::from_json(&text)
            .and_then(|level| check_level(&level, &catalog, expected))
        {
            Ok(report) => report,
            Err(e) => {
                eprintln!("LOAD ERROR {}: {e}", path.display());
                failed += 1;
                continue;
            }
        };

        print_report(path, &report);
        if !report.is_clean() {
            failed += 1;
        }

        if options.dump_ops {
            let ops = render(
                &report.grid,
                &catalog,
                cell_size,
                &PreviewState::default(),
                &theme,
            );
            match serde_json::to_string_pretty(&ops) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("ERROR serializing ops for {}: {e}", path.display()),
            }
        }
    }

    println!("\nChecked: {}, Failed: {failed}", options.levels.len());
    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags_and_paths() {
        let options = parse_args(&args(&["--ops", "a.json", "--config", "c.json", "b.json"])).unwrap();
        assert!(options.dump_ops);
        assert_eq!(options.config, Some(PathBuf::from("c.json")));
        assert_eq!(
            options.levels,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
    }

    #[test]
    fn requires_a_level() {
        assert!(parse_args(&args(&["--ops"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--fast", "a.json"])).is_err());
    }
}
