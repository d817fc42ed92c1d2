//! Image files in, image files out

use crate::io::configuration::PREVIEW_FILE_NAME;
use crate::io::error::{ReassemblyError, Result};
use crate::model::strip::Strip;
use image::ImageFormat;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Source and sink of strips for an assembly run
pub trait ImageStore {
    /// Decode the image at `path` into a column-major strip
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError::ImageDecode`] if the file is missing,
    /// unreadable or not a supported image
    fn load(&self, path: &Path) -> Result<Strip>;

    /// Write `strip` to `path` as a PNG
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails
    fn save(&self, strip: &Strip, path: &Path) -> Result<()>;

    /// Present `strip` for inspection
    ///
    /// # Errors
    ///
    /// Returns an error if the preview cannot be produced
    fn show(&self, strip: &Strip) -> Result<()>;

    /// Regular files in `directory`, sorted by path
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError::DirectoryNotFound`] if `directory` is not a
    /// directory, or a file system error if it cannot be read
    fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>>;

    /// Load every file of `directory` in listing order
    ///
    /// # Errors
    ///
    /// Returns the first listing or decoding error
    fn load_directory(&self, directory: &Path) -> Result<Vec<Strip>> {
        self.list_files(directory)?
            .iter()
            .map(|path| self.load(path))
            .collect()
    }
}

/// [`ImageStore`] backed by the local file system
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    preview_path: PathBuf,
}

impl Default for FileSystemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemStore {
    /// Store whose previews go to the system temporary directory
    pub fn new() -> Self {
        Self::with_preview_path(std::env::temp_dir().join(PREVIEW_FILE_NAME))
    }

    /// Store whose previews go to `preview_path`
    pub fn with_preview_path(preview_path: impl Into<PathBuf>) -> Self {
        Self {
            preview_path: preview_path.into(),
        }
    }

    /// Where [`ImageStore::show`] writes its preview
    pub fn preview_path(&self) -> &Path {
        &self.preview_path
    }
}

impl ImageStore for FileSystemStore {
    fn load(&self, path: &Path) -> Result<Strip> {
        let image = image::open(path).map_err(|e| ReassemblyError::ImageDecode {
            path: path.to_path_buf(),
            source: e,
        })?;
        Strip::from_rgba_image(&image.to_rgba8())
    }

    fn save(&self, strip: &Strip, path: &Path) -> Result<()> {
        // Encode fully before touching the file system so a failed encode
        // never leaves a partial file behind
        let mut encoded = Cursor::new(Vec::new());
        strip
            .to_rgba_image()
            .write_to(&mut encoded, ImageFormat::Png)
            .map_err(|e| ReassemblyError::ImageExport {
                path: path.to_path_buf(),
                source: e,
            })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ReassemblyError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        std::fs::write(path, encoded.into_inner()).map_err(|e| ReassemblyError::FileSystem {
            path: path.to_path_buf(),
            operation: "write image",
            source: e,
        })
    }

    fn show(&self, strip: &Strip) -> Result<()> {
        self.save(strip, &self.preview_path)
    }

    fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        if !directory.is_dir() {
            return Err(ReassemblyError::DirectoryNotFound {
                path: directory.to_path_buf(),
            });
        }

        let read_error = |e: std::io::Error| ReassemblyError::FileSystem {
            path: directory.to_path_buf(),
            operation: "read directory",
            source: e,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(directory).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
