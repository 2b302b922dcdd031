//! Errors produced while embedding an asset.

use core::{error, fmt};
use std::{
    io,
    path::{Path, PathBuf},
};

use image::ImageError;

/// The coarse classification of an [`EmbedError`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file is neither a PNG image nor a TrueType font.
    UnsupportedExtension,
    /// The image could not be decoded or re-encoded.
    ImageDecode,
    /// A file could not be read, written or created.
    Io,
}

/// Various errors that can occur while embedding an asset.
#[derive(Debug)]
pub enum EmbedError {
    /// The file is neither a PNG image nor a TrueType font.
    UnsupportedExtension {
        /// The location of the rejected file.
        path: PathBuf,
    },
    /// The image could not be decoded or re-encoded.
    Image {
        /// The location of the image being processed.
        path: PathBuf,
        /// The error reported by the image codec.
        error: ImageError,
    },
    /// A file could not be read, written or created.
    Io {
        /// The location of the file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        error: io::Error,
    },
}

impl EmbedError {
    /// Creates an [`EmbedError`] from an [`ImageError`] produced while handling `path`.
    ///
    /// I/O failures inside the codec are reported as [`EmbedError::Io`].
    pub fn image(path: &Path, error: ImageError) -> Self {
        match error {
            ImageError::IoError(error) => Self::io(path, error),
            error => Self::Image {
                path: path.to_path_buf(),
                error,
            },
        }
    }

    /// Creates an [`EmbedError::Io`] for an error produced while accessing `path`.
    pub fn io(path: &Path, error: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            error,
        }
    }

    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedExtension { .. } => ErrorKind::UnsupportedExtension,
            Self::Image { .. } => ErrorKind::ImageDecode,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Returns the path of the file that caused the error.
    pub fn path(&self) -> &Path {
        match self {
            Self::UnsupportedExtension { path }
            | Self::Image { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedExtension { path } => {
                write!(f, "unsupported asset type: \"{}\"", path.display())
            }
            Self::Image { path, error } => {
                write!(f, "error processing image \"{}\": {error}", path.display())
            }
            Self::Io { path, error } => {
                write!(f, "error accessing \"{}\": {error}", path.display())
            }
        }
    }
}

impl error::Error for EmbedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::UnsupportedExtension { .. } => None,
            Self::Image { error, .. } => Some(error),
            Self::Io { error, .. } => Some(error),
        }
    }
}

#[cfg(test)]
mod test {
    use core::error::Error;
    use std::{io, path::Path};

    use image::{
        ImageError,
        error::{DecodingError, ImageFormatHint},
    };

    use super::{EmbedError, ErrorKind};

    #[test]
    fn codec_io_errors_are_io() {
        let error = ImageError::IoError(io::Error::from(io::ErrorKind::NotFound));
        let error = EmbedError::image(Path::new("logo.png"), error);

        assert_eq!(error.kind(), ErrorKind::Io);
        assert_eq!(error.path(), Path::new("logo.png"));
    }

    #[test]
    fn decoding_errors_are_image_errors() {
        let error = ImageError::Decoding(DecodingError::new(
            ImageFormatHint::Exact(image::ImageFormat::Png),
            "bad crc",
        ));
        let error = EmbedError::image(Path::new("logo.png"), error);

        assert_eq!(error.kind(), ErrorKind::ImageDecode);
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("error processing image \"logo.png\""));
    }

    #[test]
    fn unsupported_has_no_source() {
        let error = EmbedError::UnsupportedExtension {
            path: "notes.txt".into(),
        };

        assert_eq!(error.kind(), ErrorKind::UnsupportedExtension);
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "unsupported asset type: \"notes.txt\"");
    }
}
