//! Writing of C header files.

use std::{
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use c_array::{ArrayDecl, derive_identifier};
use tempfile::Builder;

use crate::{asset::SourceAsset, error::EmbedError};

/// The name and location of a header file to emit.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct EmitTarget {
    /// The name of the declared array, always a valid C identifier.
    identifier: String,
    /// The location of the header file.
    output_path: PathBuf,
}

impl EmitTarget {
    /// Creates a new [`EmitTarget`] whose identifier is derived from `name` and which is written
    /// to `output_path`.
    pub fn new(name: &str, output_path: impl Into<PathBuf>) -> Self {
        Self {
            identifier: derive_identifier(name),
            output_path: output_path.into(),
        }
    }

    /// Returns the default [`EmitTarget`] for `asset`: the identifier is derived from the name of
    /// the embedded payload and the header is placed next to the asset as `<identifier>.h`.
    ///
    /// Returns `None` if `asset` cannot be embedded.
    pub fn for_asset(asset: &SourceAsset) -> Option<Self> {
        let identifier = derive_identifier(&asset.payload_name()?);
        let output_path = asset.path().with_file_name(format!("{identifier}.h"));

        Some(Self {
            identifier,
            output_path,
        })
    }

    /// Replaces the location the header is written to.
    #[must_use]
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Returns the name of the declared array.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the location of the header file.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// A header file written by [`emit`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct HeaderArtifact {
    /// The name of the declared array.
    identifier: String,
    /// The location of the header file.
    path: PathBuf,
    /// The number of bytes in the declared array.
    byte_count: usize,
}

impl HeaderArtifact {
    /// Returns the name of the declared array.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the location of the header file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of bytes in the declared array.
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }
}

/// Writes `bytes` as a C array declaration to the header described by `target`, replacing any
/// existing file.
///
/// The header only appears at its final location once it has been written completely.
///
/// # Errors
///
/// Returns [`EmbedError::Io`] if the header cannot be created or written.
pub fn emit(target: &EmitTarget, bytes: &[u8]) -> Result<HeaderArtifact, EmbedError> {
    let path = target.output_path();
    let decl = ArrayDecl::new(target.identifier(), bytes)
        .map_err(|error| EmbedError::io(path, io::Error::new(io::ErrorKind::InvalidInput, error)))?;

    // Written to a sibling first so a failed write never leaves a truncated header behind.
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = Builder::new()
        .prefix(".header-")
        .suffix(".h.tmp")
        .tempfile_in(dir)
        .map_err(|error| EmbedError::io(dir, error))?;
    decl.dump(BufWriter::new(&mut file))
        .map_err(|error| EmbedError::io(path, error))?;
    file.persist(path)
        .map_err(|error| EmbedError::io(path, error.error))?;
    log::debug!(
        "wrote {} bytes as `{}` to \"{}\"",
        bytes.len(),
        target.identifier(),
        path.display()
    );

    Ok(HeaderArtifact {
        identifier: target.identifier.clone(),
        path: path.to_path_buf(),
        byte_count: bytes.len(),
    })
}
