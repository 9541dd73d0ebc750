//! Report files with a `<stem>.provenance.json` sidecar recording what produced them.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Which subcommand ran and with what arguments.
pub struct Invocation {
    pub command: &'static str,
    pub params: Value,
}

/// Write `report` as pretty JSON to `out`, then its sidecar. Returns the sidecar path.
pub fn write_report<T: Serialize>(out: &Path, report: &T, inv: &Invocation) -> Result<PathBuf> {
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let sidecar = sidecar_path(out);
    let doc = json!({
        "code_rev": code_rev(),
        "library_version": planimetry::VERSION,
        "command": inv.command,
        "params": inv.params,
        "outputs": [out.to_string_lossy()],
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::debug!(path = %sidecar.display(), "sidecar_written");
    Ok(sidecar)
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("creating output dir {}", parent.display())),
        _ => Ok(()),
    }
}

fn sidecar_path(out: &Path) -> PathBuf {
    let mut name = out
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".provenance.json");
    out.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
