//! Custom cargo commands for hirescore.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (with and without rayon)
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts, tests, clippy, wasm, constants)
  test      Run all Rust tests, with and without the parallel feature
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("hirescore Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract call sites...");
    check_contracts_wired()?;
    println!("✓ Every contract is called from the pipeline\n");

    println!("[2/5] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Checking the wasm build...");
    run_cargo(&["check", "--quiet", "--lib", "--no-default-features", "--features", "wasm"])?;
    println!("✓ wasm bindings compile\n");

    println!("[5/5] Verifying scoring constants against data/scorer.json...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, once on the rayon path and once without it
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no CARGO_MANIFEST_DIR and no current dir")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Each `pub fn check_*` in contracts.rs must be called somewhere else in src/.
fn check_contracts_wired() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");
    let contracts = fs::read_to_string(src_dir.join("contracts.rs"))
        .context("Failed to read contracts.rs")?;

    let names: Vec<&str> = contracts
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("pub fn check_"))
        .filter_map(|rest| rest.split('(').next())
        .collect();

    if names.is_empty() {
        bail!("No contract functions found in contracts.rs");
    }

    for name in names {
        let needle = format!("check_{}", name);
        let output = Command::new("grep")
            .args(["-rl", &needle, "--include=*.rs", "--exclude=contracts.rs", "."])
            .current_dir(&src_dir)
            .output()
            .context("Failed to run grep")?;
        if output.stdout.is_empty() {
            bail!("Contract {} is defined but never called", needle);
        }
    }

    Ok(())
}

fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let core_rs = fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;
    let scorer_json = fs::read_to_string(root.join("data/scorer.json"))
        .context("Failed to read data/scorer.json")?;
    check_alignment(&core_rs, &scorer_json)
}

/// Every default constant in core.rs must equal its key in the JSON config.
fn check_alignment(core_rs: &str, scorer_json: &str) -> Result<()> {
    let scorer: serde_json::Value =
        serde_json::from_str(scorer_json).context("data/scorer.json is not valid JSON")?;

    let pairs = [
        ("DEFAULT_KEYWORD_WEIGHT", "keywordWeight"),
        ("DEFAULT_SEMANTIC_WEIGHT", "semanticWeight"),
        ("SEMANTIC_SCALE", "semanticScale"),
        ("LOCATION_BONUS", "locationBonus"),
    ];

    for (rust_name, json_key) in pairs {
        let Some(rust_value) = extract_const(core_rs, rust_name) else {
            bail!("const {} not found in src/scoring/core.rs", rust_name);
        };
        let Some(json_value) = scorer.get(json_key).and_then(serde_json::Value::as_f64) else {
            bail!("numeric key {:?} not found in data/scorer.json", json_key);
        };
        if rust_value != json_value {
            bail!(
                "Rust {}={} != data/scorer.json {}={}",
                rust_name, rust_value, json_key, json_value
            );
        }
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<f64> {
    // Look for "pub const NAME: f64 = 1.5;"
    let prefix = format!("pub const {}: f64 =", name);
    content
        .lines()
        .find_map(|line| line.trim().strip_prefix(prefix.as_str()))
        .and_then(|rest| rest.trim().trim_end_matches(';').trim().parse().ok())
}
