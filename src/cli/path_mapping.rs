use std::path::{Path, PathBuf};

/// Map an input JSON file to its output path.
/// This preserves the input directory structure relative to `input_dir`.
pub fn map_input_to_output(input_dir: &Path, input_file: &Path, output_dir: &Path) -> PathBuf {
    let relative = input_file
        .strip_prefix(input_dir)
        .ok()
        .map(Path::to_path_buf)
        .or_else(|| input_file.file_name().map(PathBuf::from))
        .unwrap_or_else(|| input_file.to_path_buf());
    output_dir.join(relative)
}
