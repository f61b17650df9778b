use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Ensures the output path is safe to write to.
pub fn get_output_path<P: AsRef<Path>>(output: P, force: bool) -> Result<PathBuf> {
    let output = output.as_ref();
    if output.exists() && !force {
        return Err(Error::OutputExistsError { output: output.display().to_string() });
    }
    Ok(output.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Writes `entries` as deflated files of a new zip archive at `dest_path`.
pub fn write_zip<P: AsRef<Path>>(entries: &[(String, String)], dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    let file = std::fs::File::create(dest_path)?;
    let mut zip = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, content) in entries {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(content.as_bytes())?;
    }
    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn refuses_existing_output_without_force() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            get_output_path(dir.path(), false),
            Err(Error::OutputExistsError { .. })
        ));
        assert_eq!(get_output_path(dir.path(), true).unwrap(), dir.path());
    }

    #[test]
    fn write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deeper/file.txt");
        write_file("hello", &target).unwrap();
        assert_eq!(std::fs::read_to_string(target).unwrap(), "hello");
    }

    #[test]
    fn write_zip_stores_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("bundle.zip");
        let entries = vec![
            ("a.txt".to_string(), "first".to_string()),
            ("b.txt".to_string(), "second".to_string()),
        ];
        write_zip(&entries, &target).unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&target).unwrap()).unwrap();
        assert_eq!(archive.len(), 2);
        let mut content = String::new();
        archive.by_name("b.txt").unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "second");
    }
}
