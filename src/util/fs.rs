//! Filesystem utilities.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Remove every entry inside a directory, leaving the directory itself.
///
/// Symlinked entries are removed as entries; their targets are never
/// followed.
pub fn clear_dir(path: &Path) -> Result<()> {
    for entry in fs::read_dir(path)
        .with_context(|| format!("failed to read directory: {}", path.display()))?
    {
        let entry = entry?;
        let entry_path = entry.path();
        let ty = entry.file_type()?;
        if ty.is_dir() {
            fs::remove_dir_all(&entry_path).with_context(|| {
                format!("failed to remove directory: {}", entry_path.display())
            })?;
        } else {
            fs::remove_file(&entry_path)
                .with_context(|| format!("failed to remove file: {}", entry_path.display()))?;
        }
    }
    Ok(())
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

/// Create a symlink (platform-aware).
#[cfg(unix)]
pub fn symlink(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

#[cfg(windows)]
pub fn symlink(src: &Path, dst: &Path) -> io::Result<()> {
    if src.is_dir() {
        std::os::windows::fs::symlink_dir(src, dst)
    } else {
        std::os::windows::fs::symlink_file(src, dst)
    }
}

/// Render a path with forward slashes regardless of the host separator.
pub fn forward_slashes(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// `file://` URL for a local path.
pub fn file_url(path: &Path) -> String {
    format!("file://{}", forward_slashes(path))
}

/// Archive-root URL (`jar://<path>!/`) for a jar artifact.
pub fn jar_url(path: &Path) -> String {
    format!("jar://{}!/", forward_slashes(path))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_clear_dir_keeps_the_directory() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("file.txt"), "content").unwrap();
        fs::write(tmp.path().join("top.txt"), "content").unwrap();

        clear_dir(tmp.path()).unwrap();

        assert!(tmp.path().exists());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_clear_dir_removes_dangling_symlinks() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing-target");
        symlink(&missing, &tmp.path().join("link")).unwrap();

        clear_dir(tmp.path()).unwrap();

        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_string_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".idea/libraries/widget.xml");

        write_string(&path, "<component />").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<component />");
    }

    #[test]
    fn test_url_rendering() {
        let jar = PathBuf::from("/libs/widget-1.2.jar");
        assert_eq!(jar_url(&jar), "jar:///libs/widget-1.2.jar!/");
        assert_eq!(file_url(Path::new("/projects/demo")), "file:///projects/demo");
    }

    #[cfg(windows)]
    #[test]
    fn test_forward_slashes_on_windows_paths() {
        let path = PathBuf::from(r"C:\Users\demo\project");
        assert_eq!(forward_slashes(&path), "C:/Users/demo/project");
    }
}
