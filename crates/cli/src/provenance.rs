use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters recorded next to an output file.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Provenance block shared by sidecars and `cli report`.
pub fn describe(command: &str, params: Value, outputs: &[String]) -> Value {
    json!({
        "earclip_version": earclip::VERSION,
        "code_rev": current_git_rev(),
        "command": command,
        "params": params,
        "outputs": outputs,
    })
}

/// Record how `artifact` was produced in `<stem>.provenance.json` beside it.
///
/// The callsite is the caller of this function.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let callsite = Location::caller();
    let artifact = artifact.as_ref();
    let sidecar = provenance_path(artifact);
    ensure_parent_dir(&sidecar)?;

    let mut doc = describe(
        payload.command,
        payload.params,
        &[artifact.to_string_lossy().into_owned()],
    );
    doc["callsite"] = json!({ "file": callsite.file(), "line": callsite.line() });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// Create the directory `path` will be written into, if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display())),
        _ => Ok(()),
    }
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact.file_stem().unwrap_or(OsStr::new("artifact"));
    artifact.with_file_name(format!("{}.provenance.json", stem.to_string_lossy()))
}

/// Commit of the running code: `GIT_COMMIT` at build time, then at run time,
/// then `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .filter(|rev| !rev.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_artifact() {
        assert_eq!(
            provenance_path(Path::new("/tmp/output/tris.json")),
            Path::new("/tmp/output/tris.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("mesh")),
            Path::new("mesh.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_command_params_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("tris.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("triangulate", json!({"vertices": 4}));
        let sidecar = write_sidecar(&artifact, payload).unwrap();
        assert_eq!(sidecar, dir.path().join("tris.provenance.json"));

        let parsed: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "triangulate");
        assert_eq!(parsed["params"]["vertices"], 4);
        assert_eq!(parsed["earclip_version"], earclip::VERSION);
        assert_eq!(parsed["callsite"]["file"], file!());
    }

    #[test]
    fn parent_dirs_are_created_on_demand() {
        let dir = tempdir().unwrap();
        let deep = dir.path().join("a").join("b").join("tris.json");
        ensure_parent_dir(&deep).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
        ensure_parent_dir(Path::new("bare.json")).unwrap();
    }
}
