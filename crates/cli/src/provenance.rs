//! Provenance record written next to an exported model.
//!
//! `<stem>.provenance.json` holds the build that produced the model, the
//! request it was generated from and a short summary of the result, which is
//! enough to regenerate the file and to spot a stale one.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::model::ModelDoc;

/// Library version plus the source revision, when a git checkout is around.
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub code_rev: Option<String>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: hybrid::VERSION,
            code_rev: git_describe(),
        }
    }
}

/// Counts that identify a generated model at a glance.
#[derive(Debug, Serialize, PartialEq)]
pub struct ModelSummary {
    pub system_id: String,
    pub modes: usize,
    pub transitions: usize,
    pub forbidden: usize,
    pub init_points: usize,
}

impl ModelSummary {
    pub fn of(doc: &ModelDoc) -> Self {
        Self {
            system_id: doc.system_id.clone(),
            modes: doc.modes.len(),
            transitions: doc.transitions.len(),
            forbidden: doc.modes.iter().filter(|m| m.forbidden).count(),
            init_points: doc.init.points.len(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Provenance<'a, R> {
    #[serde(flatten)]
    build: BuildInfo,
    command: &'a str,
    request: &'a R,
    model: ModelSummary,
    output: &'a Path,
}

/// Write the sidecar for `artifact` and return its path.
pub fn write_sidecar<R: Serialize>(
    artifact: &Path,
    command: &str,
    request: &R,
    doc: &ModelDoc,
) -> Result<PathBuf> {
    let record = Provenance {
        build: BuildInfo::current(),
        command,
        request,
        model: ModelSummary::of(doc),
        output: artifact,
    };
    let path = sidecar_path(artifact);
    let body = serde_json::to_vec_pretty(&record)?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `models/nav.json` → `models/nav.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

fn git_describe() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=12"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}
