//! Photo selection and encoding.
//!
//! A post's photo is stored inline as a data URI, so choosing a photo means
//! reading the whole file and base64-encoding it. The read is the only
//! asynchronous step in post creation: [`PhotoReader::read`] returns a future
//! and the caller awaits it before the post is created.
//!
//! # Example
//!
//! ```no_run
//! use wandernotes::photo::{FilePhotoReader, PhotoReader, PhotoSelection};
//!
//! # async fn run() -> wandernotes::Result<()> {
//! let selection = PhotoSelection::File("/tmp/tea.jpg".into());
//! let photo = FilePhotoReader.read(&selection).await?;
//! assert!(photo.as_data_uri().unwrap_or_default().starts_with("data:image/jpeg;base64,"));
//! # Ok(())
//! # }
//! ```

use crate::domain::error::{Result, WandernotesError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures_util::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};

/// MIME type used when the extension is unknown.
const FALLBACK_MIME: &str = "application/octet-stream";

/// What the user picked in the photo input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhotoSelection {
    /// No file chosen; the post gets the placeholder.
    #[default]
    NotSelected,
    /// A file on disk.
    File(PathBuf),
}

impl From<Option<PathBuf>> for PhotoSelection {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::NotSelected, Self::File)
    }
}

/// Result of reading a [`PhotoSelection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedPhoto {
    NotSelected,
    /// A complete `data:<mime>;base64,<payload>` URI.
    DataUri(String),
}

impl EncodedPhoto {
    /// The data URI, if a photo was selected.
    #[must_use]
    pub fn as_data_uri(&self) -> Option<&str> {
        match self {
            Self::NotSelected => None,
            Self::DataUri(uri) => Some(uri),
        }
    }

    /// The value stored in [`Post::photo`](crate::domain::Post::photo): the
    /// data URI, or an empty string.
    #[must_use]
    pub fn into_stored(self) -> String {
        match self {
            Self::NotSelected => String::new(),
            Self::DataUri(uri) => uri,
        }
    }
}

/// Asynchronous source of encoded photos.
pub trait PhotoReader {
    /// Reads and encodes the selection.
    ///
    /// Resolves immediately to [`EncodedPhoto::NotSelected`] when nothing was
    /// chosen.
    ///
    /// # Errors
    ///
    /// Returns [`WandernotesError::Photo`] if the file cannot be read.
    fn read<'a>(&'a self, selection: &'a PhotoSelection) -> BoxFuture<'a, Result<EncodedPhoto>>;
}

/// Reads photos from the local filesystem with `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePhotoReader;

impl PhotoReader for FilePhotoReader {
    fn read<'a>(&'a self, selection: &'a PhotoSelection) -> BoxFuture<'a, Result<EncodedPhoto>> {
        async move {
            let path = match selection {
                PhotoSelection::NotSelected => return Ok(EncodedPhoto::NotSelected),
                PhotoSelection::File(path) => path,
            };

            tracing::debug!(path = ?path, "reading photo");
            let bytes = tokio::fs::read(path).await.map_err(|e| {
                WandernotesError::Photo(format!("failed to read {}: {e}", path.display()))
            })?;

            tracing::debug!(bytes = bytes.len(), "photo read");
            Ok(EncodedPhoto::DataUri(encode_data_uri(mime_for(path), &bytes)))
        }
        .boxed()
    }
}

/// Guesses an image MIME type from the file extension.
///
/// # Example
///
/// ```rust
/// use wandernotes::photo::mime_for;
/// use std::path::Path;
///
/// assert_eq!(mime_for(Path::new("tea.JPG")), "image/jpeg");
/// assert_eq!(mime_for(Path::new("notes")), "application/octet-stream");
/// ```
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("heic") => "image/heic",
        _ => FALLBACK_MIME,
    }
}

/// Builds a base64 data URI.
#[must_use]
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Reads the selection for the form's preview image.
///
/// # Errors
///
/// Propagates read failures from `reader`.
pub async fn preview<R: PhotoReader + ?Sized>(
    reader: &R,
    selection: &PhotoSelection,
) -> Result<Option<String>> {
    let photo = reader.read(selection).await?;
    Ok(photo.as_data_uri().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_selected_resolves_without_io() {
        let photo = FilePhotoReader.read(&PhotoSelection::NotSelected).await.unwrap();
        assert_eq!(photo, EncodedPhoto::NotSelected);
        assert_eq!(photo.into_stored(), "");
    }

    #[tokio::test]
    async fn file_is_encoded_as_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let photo = FilePhotoReader.read(&PhotoSelection::File(path)).await.unwrap();

        assert_eq!(photo.as_data_uri(), Some("data:image/png;base64,iVBORw=="));
    }

    #[tokio::test]
    async fn missing_file_is_a_photo_error() {
        let dir = tempfile::tempdir().unwrap();
        let selection = PhotoSelection::File(dir.path().join("gone.jpg"));

        let err = FilePhotoReader.read(&selection).await.unwrap_err();
        assert!(matches!(err, WandernotesError::Photo(_)));
    }

    #[tokio::test]
    async fn preview_matches_stored_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.gif");
        std::fs::write(&path, b"GIF89a").unwrap();
        let selection = PhotoSelection::File(path);

        let shown = preview(&FilePhotoReader, &selection).await.unwrap();
        let stored = FilePhotoReader.read(&selection).await.unwrap().into_stored();
        assert_eq!(shown.as_deref(), Some(stored.as_str()));
        assert_eq!(preview(&FilePhotoReader, &PhotoSelection::NotSelected).await.unwrap(), None);
    }
}
