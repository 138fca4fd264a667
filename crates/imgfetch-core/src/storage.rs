//! Writing fetched images to disk.
//!
//! The body goes to `<target>.part` first and is renamed over the target only
//! once fully written, so an interrupted write never replaces a good file with
//! a truncated one.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `eggs.jpg` → `eggs.jpg.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Replace `final_path` with `data`. On error the previous content of
/// `final_path`, if any, is left in place and the temp file is removed.
pub fn write_replace(final_path: &Path, data: &[u8]) -> io::Result<()> {
    let tp = temp_path(final_path);
    let result = write_then_rename(&tp, final_path, data);
    if result.is_err() {
        let _ = std::fs::remove_file(&tp);
    }
    result
}

fn write_then_rename(temp: &Path, final_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);
    std::fs::rename(temp, final_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("eggs.jpg"));
        assert_eq!(p.to_string_lossy(), "eggs.jpg.part");
        let p2 = temp_path(Path::new("/srv/images/eggs-2.jpg"));
        assert_eq!(p2.to_string_lossy(), "/srv/images/eggs-2.jpg.part");
    }

    #[test]
    fn write_replace_creates_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("rice.jpg");

        write_replace(&target, b"first").unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"first");

        write_replace(&target, b"second, longer body").unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"second, longer body");
        assert!(!temp_path(&target).exists());
    }

    #[test]
    fn write_replace_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no-such-dir").join("rice.jpg");
        assert!(write_replace(&target, b"data").is_err());
        assert!(!target.exists());
    }
}
