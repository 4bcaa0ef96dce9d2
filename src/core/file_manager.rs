use std::fs;
use std::path::{Path, PathBuf};

use crate::core::image_format::ImageFormat;

pub struct FileManager;

impl FileManager {
    pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
        let mut image_paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && ImageFormat::is_supported(p))
            .collect();

        image_paths.sort();
        log::debug!("{} images in {}", image_paths.len(), dir.display());
        Ok(image_paths)
    }

    /// Expands command line paths into carousel sources, keeping argument order.
    /// Directories contribute their sorted images; unsupported files are skipped.
    pub fn collect_sources(paths: &[PathBuf]) -> Result<Vec<String>, std::io::Error> {
        let mut sources = Vec::new();
        for path in paths {
            if path.is_dir() {
                sources.extend(Self::scan_directory(path)?.iter().map(|p| Self::source_of(p)));
            } else if ImageFormat::is_supported(path) {
                sources.push(Self::source_of(path));
            } else {
                log::warn!("skipping unsupported file {}", path.display());
            }
        }
        Ok(sources)
    }

    pub fn source_of(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    pub fn display_name(source: &str) -> String {
        Path::new(source)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn scan_keeps_sorted_supported_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "c.png");
        touch(dir.path(), "a.JPG");
        touch(dir.path(), "readme.txt");
        touch(dir.path(), "b.webp");
        fs::create_dir_all(dir.path().join("nested.png")).unwrap();

        let found = FileManager::scan_directory(dir.path()).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.JPG", "b.webp", "c.png"]);
    }

    #[test]
    fn scan_of_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(FileManager::scan_directory(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn collect_sources_expands_directories_in_argument_order() {
        let dir = TempDir::new().unwrap();
        let loose = touch(dir.path(), "z.png");
        let skipped = touch(dir.path(), "notes.md");
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        touch(&sub, "b.gif");
        touch(&sub, "a.bmp");

        let sources = FileManager::collect_sources(&[loose.clone(), skipped, sub.clone()]).unwrap();
        assert_eq!(
            sources,
            [
                FileManager::source_of(&loose),
                FileManager::source_of(&sub.join("a.bmp")),
                FileManager::source_of(&sub.join("b.gif")),
            ]
        );
    }

    #[test]
    fn display_name_is_file_name() {
        assert_eq!(FileManager::display_name("/tmp/fotos/gato.png"), "gato.png");
        assert_eq!(FileManager::display_name(""), "");
    }
}
