//! External collaborators: source-tree clone and remote dictionary fetch.
//!
//! Nothing here touches the core pipeline; these are the I/O steps that
//! materialize its inputs. Failures are batch-fatal and carry enough context
//! to diagnose the environment. There is no retry logic; rerunning the tool
//! is the retry.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::dictionary::RawDictEntry;

/// Upstream repository holding the per-glyph SVG sources.
pub const ASSETS_REPO_URL: &str = "https://github.com/googlefonts/noto-emoji";

/// Remote JSON dictionary mapping ids to codepoints and shortnames.
pub const DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/Ranks/emojione/master/emoji.json";

/// Decides whether an artifact at `path` should be (re)generated.
///
/// An existing artifact is reused unless `update` is set, in which case it
/// is removed first. A missing artifact is always generated.
pub fn should_refresh(path: &Path, update: bool) -> io::Result<bool> {
    let exists = path.exists();
    if exists && update {
        if path.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
    }
    Ok(!exists || update)
}

/// Materializes the SVG source tree by cloning the upstream repository.
///
/// No-op when the tree is already present and `update` is not set. A failed
/// clone is an error: everything downstream depends on it.
pub fn clone_assets(dest: &Path, update: bool) -> Result<()> {
    let refresh = should_refresh(dest, update)
        .with_context(|| format!("failed to inspect `{}`", dest.display()))?;
    if !refresh {
        info!(dest = %dest.display(), "reusing existing emoji sources");
        return Ok(());
    }

    let git = which::which("git").context("`git` not found on PATH")?;
    info!(url = ASSETS_REPO_URL, dest = %dest.display(), "cloning emoji sources");
    let status = Command::new(git)
        .arg("clone")
        .arg(ASSETS_REPO_URL)
        .arg(dest)
        .status()
        .context("failed to run `git clone`")?;
    if !status.success() {
        bail!("`git clone {ASSETS_REPO_URL}` exited with {status}");
    }
    Ok(())
}

/// Fetches and parses the remote shortname dictionary.
pub fn fetch_dictionary(url: &str) -> Result<HashMap<String, RawDictEntry>> {
    info!(url, "fetching emoji dictionary");
    let entries = ureq::get(url)
        .call()
        .with_context(|| format!("failed to fetch `{url}`"))?
        .into_json()
        .with_context(|| format!("failed to parse dictionary JSON from `{url}`"))?;
    Ok(entries)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_is_refreshed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.html");
        assert!(should_refresh(&path, false).unwrap());
        assert!(should_refresh(&path, true).unwrap());
    }

    #[test]
    fn existing_artifact_is_reused_without_update() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.html");
        fs::write(&path, "generated").unwrap();

        assert!(!should_refresh(&path, false).unwrap());
        assert!(path.exists(), "reused artifact must not be touched");
    }

    #[test]
    fn update_removes_existing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.html");
        fs::write(&path, "generated").unwrap();

        assert!(should_refresh(&path, true).unwrap());
        assert!(!path.exists(), "stale artifact must be removed");
    }

    #[test]
    fn update_removes_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let tree = dir.path().join("assets");
        fs::create_dir(&tree).unwrap();
        fs::write(tree.join("file.svg"), "<svg/>").unwrap();

        assert!(should_refresh(&tree, true).unwrap());
        assert!(!tree.exists());
    }
}
