use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::document::filter::is_json_file;

/// Create `dir` (and missing parents) unless it already exists.
///
/// Returns true when the directory had to be created.
pub fn ensure_output_dir(dir: &Path) -> Result<bool, std::io::Error> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    Ok(true)
}

/// Find JSON files in a directory. If recursive is true, use walkdir; otherwise list files.
///
/// The result is sorted so runs are reproducible across platforms.
pub fn find_json_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut json_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            let path = entry.path();
            if is_json_file(path) {
                json_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if is_json_file(&path) {
                json_files.push(path);
            }
        }
    }

    json_files.sort();
    Ok(json_files)
}
