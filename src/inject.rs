//! Post-build step that adds the console-capture script to generated HTML.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Present in any page that already loads the script.
pub const SCRIPT_MARKER: &str = "dashboard-console-capture.js";

pub const SCRIPT_TAG: &str = r#"<script src="/dashboard-console-capture.js"></script>"#;

/// Outcome of one run over an output directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InjectReport {
    pub injected: Vec<PathBuf>,
    /// Already carrying the script, or without a `</head>`.
    pub skipped: usize,
    pub failed: usize,
    pub missing_dir: bool,
}

/// Insert the script tag before the first `</head>`.
///
/// Returns `None` when the page already loads the script or has no head.
pub fn inject_script(html: &str) -> Option<String> {
    if html.contains(SCRIPT_MARKER) || !html.contains("</head>") {
        return None;
    }
    Some(html.replacen("</head>", &format!("{SCRIPT_TAG}</head>"), 1))
}

/// Walk `dir` recursively and patch every `.html` file in place.
///
/// Unreadable or unwritable pages are logged and counted, not fatal.
pub fn inject_dir(dir: &Path) -> io::Result<InjectReport> {
    let mut report = InjectReport::default();
    if !dir.is_dir() {
        report.missing_dir = true;
        return Ok(report);
    }
    walk(dir, &mut report)?;
    Ok(report)
}

fn walk(dir: &Path, report: &mut InjectReport) -> io::Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            walk(&path, report)?;
        } else if path.extension().is_some_and(|ext| ext == "html") {
            match inject_file(&path) {
                Ok(true) => report.injected.push(path),
                Ok(false) => report.skipped += 1,
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "Failed to inject script");
                    report.failed += 1;
                }
            }
        }
    }
    Ok(())
}

fn inject_file(path: &Path) -> io::Result<bool> {
    let content = fs::read_to_string(path)?;
    match inject_script(&content) {
        Some(patched) => {
            fs::write(path, patched)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
