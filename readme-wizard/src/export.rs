//! Writing generated READMEs to disk

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used when the project name has no usable characters
pub const FALLBACK_FILE_NAME: &str = "readme.md";

/// Errors that can occur while writing output files
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create directory {path}: {source}", path = .path.display())]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}", path = .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lowercase ASCII words of `text` joined by `-`
///
/// Anything that is not an ASCII letter or digit separates words.
pub fn slugify(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Suggested file name for a downloaded README
pub fn download_file_name(project_name: &str) -> String {
    let slug = slugify(project_name);
    if slug.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        format!("{}.md", slug)
    }
}

/// Write generated Markdown to `path`
pub fn write_markdown(path: &Path, markdown: &str) -> Result<(), ExportError> {
    write_file(path, markdown)
}

/// Write a rendered HTML page to `path`
pub fn write_html(path: &Path, html: &str) -> Result<(), ExportError> {
    write_file(path, html)
}

fn write_file(path: &Path, content: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDirError {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source| ExportError::WriteError {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs::File::create(path).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;

    log::info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("MyApp"), "myapp.md");
        assert_eq!(download_file_name("  Rocket Launcher 2.0! "), "rocket-launcher-2-0.md");
        assert_eq!(download_file_name("snake_case-name"), "snake-case-name.md");
    }

    #[test]
    fn test_download_file_name_fallback() {
        assert_eq!(download_file_name(""), "readme.md");
        assert_eq!(download_file_name("🚀 ✨"), "readme.md");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("nested").join("README.md");

        // Act
        write_markdown(&path, "# Title\n").unwrap();

        // Assert
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Title\n");
    }

    #[test]
    fn test_write_html_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme.html");

        write_html(&path, "<p>old</p>").unwrap();
        write_html(&path, "<p>new</p>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>new</p>");
    }

    #[test]
    fn test_write_into_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let result = write_markdown(&blocker.join("README.md"), "text");

        assert!(matches!(result, Err(ExportError::CreateDirError { .. })));
    }
}
