//! Profile image selection
//!
//! The browse input may hand over several candidates; only the most recent
//! one is kept.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default upload limit (~5MB)
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Why a candidate image was not accepted
#[derive(Debug, Error)]
pub enum ImageRejected {
    #[error("Enter a path to an image file")]
    EmptyPath,

    #[error("Could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("Only PNG, JPG, GIF or WEBP images are accepted")]
    UnsupportedType,

    #[error("Image is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
}

/// Map a file name to the image MIME type it is uploaded with
pub fn image_mime_type(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name).extension()?.to_str()?;
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// An image accepted for upload, contents already read
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    /// Read an image from disk, enforcing the type and size limits
    pub fn load(path: &Path, max_bytes: u64) -> Result<Self, ImageRejected> {
        if path.as_os_str().is_empty() {
            return Err(ImageRejected::EmptyPath);
        }

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ImageRejected::NotAFile(path.to_path_buf()))?
            .to_string();
        // Check type and size before reading the contents
        image_mime_type(&file_name).ok_or(ImageRejected::UnsupportedType)?;

        let unreadable = |source: io::Error| ImageRejected::Unreadable {
            path: path.to_path_buf(),
            source,
        };
        let metadata = fs::metadata(path).map_err(unreadable)?;
        if !metadata.is_file() {
            return Err(ImageRejected::NotAFile(path.to_path_buf()));
        }
        if metadata.len() > max_bytes {
            return Err(ImageRejected::TooLarge {
                size: metadata.len(),
                limit: max_bytes,
            });
        }

        let bytes = fs::read(path).map_err(unreadable)?;
        Self::from_bytes(file_name, bytes, max_bytes)
    }

    /// Accept in-memory contents under the same limits
    pub fn from_bytes(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        max_bytes: u64,
    ) -> Result<Self, ImageRejected> {
        let file_name = file_name.into();
        let mime_type = image_mime_type(&file_name).ok_or(ImageRejected::UnsupportedType)?;
        let size = bytes.len() as u64;
        if size > max_bytes {
            return Err(ImageRejected::TooLarge {
                size,
                limit: max_bytes,
            });
        }
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Current image selection; never holds more than one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSelection {
    files: Vec<SelectedImage>,
}

impl ImageSelection {
    /// Add a file, replacing whatever was selected before
    pub fn add(&mut self, image: SelectedImage) {
        self.files.push(image);
        self.truncate_to_latest();
    }

    /// Add several candidates at once; the last one wins
    pub fn extend(&mut self, images: impl IntoIterator<Item = SelectedImage>) {
        self.files.extend(images);
        self.truncate_to_latest();
    }

    fn truncate_to_latest(&mut self) {
        let stale = self.files.len().saturating_sub(1);
        self.files.drain(..stale);
    }

    pub fn latest(&self) -> Option<&SelectedImage> {
        self.files.last()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn png(name: &str) -> SelectedImage {
        SelectedImage::from_bytes(name, vec![0x89, b'P', b'N', b'G'], DEFAULT_MAX_IMAGE_BYTES)
            .unwrap()
    }

    mod mime_types {
        use super::*;

        #[test]
        fn test_known_extensions() {
            assert_eq!(image_mime_type("a.png"), Some("image/png"));
            assert_eq!(image_mime_type("a.JPG"), Some("image/jpeg"));
            assert_eq!(image_mime_type("a.jpeg"), Some("image/jpeg"));
            assert_eq!(image_mime_type("a.gif"), Some("image/gif"));
            assert_eq!(image_mime_type("a.webp"), Some("image/webp"));
        }

        #[test]
        fn test_unknown_extensions() {
            assert_eq!(image_mime_type("a.pdf"), None);
            assert_eq!(image_mime_type("README"), None);
            assert_eq!(image_mime_type(".png"), None);
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn test_new_selection_is_empty() {
            let selection = ImageSelection::default();
            assert!(selection.is_empty());
            assert!(selection.latest().is_none());
        }

        #[test]
        fn test_second_file_replaces_first() {
            let mut selection = ImageSelection::default();
            selection.add(png("a.png"));
            selection.add(png("b.png"));
            assert_eq!(selection.len(), 1);
            assert_eq!(selection.latest().unwrap().file_name, "b.png");
        }

        #[test]
        fn test_extend_keeps_only_last_candidate() {
            let mut selection = ImageSelection::default();
            selection.add(png("a.png"));
            selection.extend([png("b.png"), png("c.png")]);
            assert_eq!(selection.len(), 1);
            assert_eq!(selection.latest().unwrap().file_name, "c.png");
        }

        #[test]
        fn test_extend_with_nothing_keeps_current() {
            let mut selection = ImageSelection::default();
            selection.add(png("a.png"));
            selection.extend(Vec::new());
            assert_eq!(selection.latest().unwrap().file_name, "a.png");
        }

        #[test]
        fn test_clear() {
            let mut selection = ImageSelection::default();
            selection.add(png("a.png"));
            selection.clear();
            assert!(selection.is_empty());
        }
    }

    mod loading {
        use super::*;

        #[test]
        fn test_from_bytes_rejects_unsupported_type() {
            let result = SelectedImage::from_bytes("notes.txt", vec![1, 2, 3], 10);
            assert!(matches!(result, Err(ImageRejected::UnsupportedType)));
        }

        #[test]
        fn test_from_bytes_rejects_oversize() {
            let result = SelectedImage::from_bytes("big.png", vec![0; 11], 10);
            assert!(matches!(
                result,
                Err(ImageRejected::TooLarge { size: 11, limit: 10 })
            ));
        }

        #[test]
        fn test_load_reads_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("avatar.jpg");
            let mut file = fs::File::create(&path).unwrap();
            file.write_all(b"jpegdata").unwrap();

            let image = SelectedImage::load(&path, DEFAULT_MAX_IMAGE_BYTES).unwrap();
            assert_eq!(image.file_name, "avatar.jpg");
            assert_eq!(image.mime_type, "image/jpeg");
            assert_eq!(image.bytes, b"jpegdata".to_vec());
            assert_eq!(image.size(), 8);
        }

        #[test]
        fn test_load_rejects_oversize_without_reading() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("big.png");
            fs::write(&path, vec![0u8; 64]).unwrap();

            let result = SelectedImage::load(&path, 32);
            assert!(matches!(
                result,
                Err(ImageRejected::TooLarge { size: 64, limit: 32 })
            ));
        }

        #[test]
        fn test_load_missing_file() {
            let dir = tempfile::tempdir().unwrap();
            let result = SelectedImage::load(&dir.path().join("nope.png"), 1024);
            assert!(matches!(result, Err(ImageRejected::Unreadable { .. })));
        }

        #[test]
        fn test_load_directory_is_not_a_file() {
            let dir = tempfile::tempdir().unwrap();
            let sub = dir.path().join("folder.png");
            fs::create_dir(&sub).unwrap();
            let result = SelectedImage::load(&sub, 1024);
            assert!(matches!(result, Err(ImageRejected::NotAFile(_))));
        }

        #[test]
        fn test_load_empty_path() {
            let result = SelectedImage::load(Path::new(""), 1024);
            assert!(matches!(result, Err(ImageRejected::EmptyPath)));
        }
    }
}
