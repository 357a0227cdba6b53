//! Workspace tooling. Run as `cargo run -p xtask -- <command>`.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

mod arch;
mod metadata;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn arch_check() -> anyhow::Result<()> {
    let root = workspace_root();
    let output = Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .current_dir(&root)
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata = metadata::Metadata::parse(&output.stdout)?;
    let mut violations = arch::check_manifests(&metadata);

    for rule in arch::SOURCE_RULES {
        let dir = root.join(rule.dir);
        for file in rust_files(&dir)? {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let shown = file.strip_prefix(&root).unwrap_or(&file).display().to_string();
            violations.extend(rule.check(&shown, &source));
        }
    }

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("{violation}");
    }
    anyhow::bail!("arch-check found {} violation(s)", violations.len())
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
