//! Static asset mirroring.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::walk::walk;
use crate::{GenerateError, Result};

/// Replace `dest` with a copy of `src`. Returns the number of files copied.
pub fn mirror_dir(src: &Path, dest: &Path) -> Result<usize> {
    if dest.exists() {
        debug!(dest = %dest.display(), "removing previous output");
        fs::remove_dir_all(dest).map_err(|source| GenerateError::Write {
            path: dest.to_path_buf(),
            source,
        })?;
    }
    create_dir(dest)?;
    copy_recursive(src, dest)
}

fn copy_recursive(src: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in walk(src) {
        let entry = entry?;
        let path = entry.path();
        let relative = path.strip_prefix(src).unwrap_or(path);
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&target)?;
        } else if entry.file_type().is_file() {
            info!(from = %path.display(), to = %target.display(), "copying");
            fs::copy(path, &target).map_err(|source| GenerateError::Copy {
                from: path.to_path_buf(),
                to: target.clone(),
                source,
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_copies_tree() {
        let root = tempfile::tempdir().unwrap();
        let src = root.path().join("static");
        fs::create_dir_all(src.join("css")).unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("index.css"), "a").unwrap();
        fs::write(src.join("css/site.css"), "b").unwrap();

        let dest = root.path().join("public");
        assert_eq!(mirror_dir(&src, &dest).unwrap(), 2);

        assert_eq!(fs::read_to_string(dest.join("index.css")).unwrap(), "a");
        assert_eq!(fs::read_to_string(dest.join("css/site.css")).unwrap(), "b");
        assert!(dest.join("empty").is_dir());
    }

    #[test]
    fn test_mirror_removes_stale_output() {
        let root = tempfile::tempdir().unwrap();
        let src = root.path().join("static");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("fresh.txt"), "new").unwrap();

        let dest = root.path().join("public");
        fs::create_dir_all(dest.join("old")).unwrap();
        fs::write(dest.join("old/stale.txt"), "old").unwrap();

        mirror_dir(&src, &dest).unwrap();

        assert!(dest.join("fresh.txt").exists());
        assert!(!dest.join("old").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_mirror_skips_symlink_loop() {
        let root = tempfile::tempdir().unwrap();
        let src = root.path().join("static");
        fs::create_dir_all(src.join("css")).unwrap();
        fs::write(src.join("css/site.css"), "b").unwrap();
        std::os::unix::fs::symlink(&src, src.join("css/loop")).unwrap();

        let dest = root.path().join("public");
        assert_eq!(mirror_dir(&src, &dest).unwrap(), 1);

        assert_eq!(fs::read_to_string(dest.join("css/site.css")).unwrap(), "b");
        assert!(!dest.join("css/loop").exists());
    }

    #[test]
    fn test_mirror_missing_source() {
        let root = tempfile::tempdir().unwrap();
        let err = mirror_dir(&root.path().join("nope"), &root.path().join("public")).unwrap_err();
        assert!(matches!(err, GenerateError::Read { .. }));
    }
}
