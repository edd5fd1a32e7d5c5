//! Adds the console-capture script tag to every generated HTML page.
//!
//! Usage: `cargo run --bin inject-console-capture -- [DIR]`
//!
//! The directory defaults to `STATIC_OUTPUT_DIR`, then `dist`.

use std::path::PathBuf;

use foodie::inject;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let dir: PathBuf = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("STATIC_OUTPUT_DIR").ok())
        .unwrap_or_else(|| "dist".to_string())
        .into();

    println!("Injecting console capture script into HTML files...");

    let report = inject::inject_dir(&dir)?;
    if report.missing_dir {
        println!("Build directory {} not found. Script injection skipped.", dir.display());
        return Ok(());
    }

    for path in &report.injected {
        println!("[done] Injected console capture script into {}", path.display());
    }
    println!(
        "Console capture script injection complete! ({} injected, {} skipped, {} failed)",
        report.injected.len(),
        report.skipped,
        report.failed
    );

    Ok(())
}
