//! File loading for permission exports.

use std::path::Path;

use tracing::{debug, info};

use crate::errors::ExportError;
use crate::models::PermissionExport;

use super::parser::parse_export;

/// Load and parse a permission export file.
///
/// Fails only at the file level: a missing path yields
/// [`ExportError::FileNotFound`], and a file that cannot be read (or is not
/// valid UTF-8) yields [`ExportError::IoError`]. No partial export is ever
/// returned on failure.
pub fn load_export<P: AsRef<Path>>(path: P) -> Result<PermissionExport, ExportError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading permission export");

    if !path.exists() {
        return Err(ExportError::FileNotFound(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path)?;
    let export = parse_export(&contents);

    debug!(
        companies = export.companies.len(),
        "permission export loaded"
    );
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"User = alice\nCompany: Acme\nproc1 <All>\n")
            .unwrap();

        let export = load_export(&path).unwrap();
        assert_eq!(export.username.as_deref(), Some("alice"));
        assert_eq!(export.company_count(), 1);
    }

    #[test]
    fn test_load_nonexistent() {
        let result = load_export("/nonexistent/export.txt");
        assert!(matches!(result, Err(ExportError::FileNotFound(_))));
    }

    #[test]
    fn test_load_non_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let result = load_export(&path);
        assert!(matches!(result, Err(ExportError::IoError(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        let export = load_export(&path).unwrap();
        assert!(export.username.is_none());
        assert_eq!(export.company_count(), 0);
    }
}
