//! Launching the IDE against a file or folder.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::util::process::{find_executable, ProcessBuilder};

/// Install root scanned for IDE installations on Windows.
const WINDOWS_INSTALL_ROOT: &str = "C:\\Program Files\\JetBrains";

/// Launcher binary relative to a Windows installation directory.
const WINDOWS_LAUNCHER: &str = "bin/idea64.exe";

/// Executable name used when PATH resolution is the only option.
const FALLBACK_EXECUTABLE: &str = "idea";

/// Launch the IDE, detached, pointed at a file or folder.
///
/// Fire and forget: the child process is not waited on and its exit status
/// is never observed. A spawn failure propagates to the caller.
pub fn launch(target: &Path) -> Result<()> {
    let executable = resolve_executable(std::env::consts::OS, Path::new(WINDOWS_INSTALL_ROOT));
    info!(
        "launching {} \"{}\"",
        executable.display(),
        target.display()
    );
    ProcessBuilder::new(&executable).arg(target).spawn_detached()?;
    Ok(())
}

/// Resolve the IDE executable for the given OS family.
///
/// On Windows the install root is scanned for the newest-looking version
/// directory; everywhere else (and when the scan comes up empty) the short
/// name is resolved through PATH, or handed to the OS as-is so the lookup
/// happens at spawn time.
pub fn resolve_executable(os: &str, install_root: &Path) -> PathBuf {
    if os.to_lowercase().contains("win") {
        if let Some(path) = find_windows_executable(install_root) {
            return path;
        }
    }
    find_executable(FALLBACK_EXECUTABLE).unwrap_or_else(|| PathBuf::from(FALLBACK_EXECUTABLE))
}

/// Scan an install root for version directories and resolve the launcher
/// binary inside the lexicographically greatest one.
///
/// Installation directories carry the version in their name, so the
/// greatest name is the most recent install, e.g. `IntelliJ IDEA 2024.1`
/// over `IntelliJ IDEA 2023.3`.
pub fn find_windows_executable(install_root: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(install_root).ok()?;
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs.pop().map(|dir| dir.join(WINDOWS_LAUNCHER))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn picks_greatest_version_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("IntelliJ IDEA 2023.3")).unwrap();
        fs::create_dir(tmp.path().join("IntelliJ IDEA 2024.1")).unwrap();
        fs::write(tmp.path().join("uninstall.txt"), "not a directory").unwrap();

        let found = find_windows_executable(tmp.path()).unwrap();

        assert_eq!(
            found,
            tmp.path().join("IntelliJ IDEA 2024.1").join(WINDOWS_LAUNCHER)
        );
    }

    #[test]
    fn empty_install_root_yields_none() {
        let tmp = TempDir::new().unwrap();
        assert!(find_windows_executable(tmp.path()).is_none());

        let missing = tmp.path().join("does-not-exist");
        assert!(find_windows_executable(&missing).is_none());
    }

    #[test]
    fn non_windows_resolves_through_path() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("IntelliJ IDEA 2024.1")).unwrap();

        let resolved = resolve_executable("linux", tmp.path());

        // The install root is ignored off Windows; only the short name is
        // ever resolved.
        assert_eq!(resolved.file_name().unwrap(), "idea");
    }

    #[test]
    fn windows_prefers_install_scan() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("IntelliJ IDEA 2024.1")).unwrap();

        let resolved = resolve_executable("windows", tmp.path());

        assert!(resolved.ends_with(Path::new("IntelliJ IDEA 2024.1").join(WINDOWS_LAUNCHER)));
    }
}
