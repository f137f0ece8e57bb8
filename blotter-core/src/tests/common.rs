use std::fs;
use std::path::{Path, PathBuf};

/// Writes `content` to `root/relative`, creating parent directories, and
/// returns the full path.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(&path, content).expect("write fixture");
    path
}
