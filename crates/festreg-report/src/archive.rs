//! CSV bundling for single-attachment delivery.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{ReportError, Result};

/// Bundle every `.csv` file in `dir` into one ZIP archive.
///
/// Files are added in sorted filename order so the archive is byte-stable
/// across reruns. Returns the bundled paths.
pub fn bundle_csv_files(dir: &Path, zip_path: &Path) -> Result<Vec<PathBuf>> {
    let mut csv_files: Vec<PathBuf> = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|source| ReportError::io(dir, source))?;
    for entry in entries {
        let entry = entry.map_err(|source| ReportError::io(dir, source))?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            csv_files.push(path);
        }
    }
    csv_files.sort();

    let file = File::create(zip_path).map_err(|source| ReportError::io(zip_path, source))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for path in &csv_files {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ReportError::Archive(format!("unusable filename: {}", path.display())))?;
        zip.start_file(name, options)?;
        let mut source = File::open(path).map_err(|source| ReportError::io(path, source))?;
        io::copy(&mut source, &mut zip).map_err(|source| ReportError::io(path, source))?;
    }
    zip.finish()?;
    info!(
        path = %zip_path.display(),
        files = csv_files.len(),
        "wrote archive"
    );
    Ok(csv_files)
}
