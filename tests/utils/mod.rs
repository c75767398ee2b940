use std::fs::{remove_dir_all, write};
use std::path::PathBuf;
use tempfile::TempDir;

/// restaurant reviews used to fit vectorizers across the integration tests
pub const SAMPLE_CORPUS: [&str; 10] = [
    "This is a great restaurant with amazing food",
    "The service was terrible and the food was bland",
    "I loved the atmosphere but the staff was rude",
    "Fantastic place with friendly servers and tasty dishes",
    "Horrible experience, never coming back",
    "The menu is creative and the desserts are delicious",
    "Slow service but the food quality was decent",
    "Best restaurant in town with excellent customer care",
    "Disappointing meal and overpriced drinks",
    "Wonderful ambiance and attentive staff",
];

/// integration test helper: creates a temp directory, and writes `lines` to
/// a file named `filename` in the temp directory
pub fn setup_tmp_directory(
    lines: &[String],
    filename: &str,
) -> Result<(TempDir, PathBuf), Box<dyn std::error::Error>> {
    let tmp_dir = TempDir::new()?;
    let file = tmp_dir.path().join(filename);
    write(&file, lines.join("\n"))?;
    Ok((tmp_dir, file))
}

/// integration test helper: removes a temporary directory, presumably created with
/// [setup_tmp_directory](fn.setup_tmp_directory.html)
pub fn teardown_tmp_directory(directory: TempDir) {
    remove_dir_all(directory).unwrap();
}
