//! Tool for embedding PNG images and TrueType fonts into C sources as
//! `static const unsigned char` arrays.
//!
//! PNG images are re-encoded as uncompressed bitmaps before being embedded; fonts are embedded
//! verbatim.

use std::path::{Path, PathBuf};

use crate::{
    asset::SourceAsset,
    codec::{ImageCodec, ImageCrateCodec},
    convert::payload,
    emit::{EmitTarget, HeaderArtifact, emit},
    error::EmbedError,
};

pub mod asset;
pub mod cli;
pub mod codec;
pub mod convert;
pub mod emit;
pub mod error;

/// Embeds the asset at `source` into a header file placed next to it, using the `image` crate
/// for re-encoding.
///
/// # Errors
///
/// See [`Embedder::embed`].
pub fn embed(source: &Path) -> Result<HeaderArtifact, EmbedError> {
    Embedder::new(ImageCrateCodec).embed(source)
}

/// Converts assets into header files.
#[derive(Clone, Debug, Default)]
pub struct Embedder<C> {
    /// The codec used to re-encode PNG images.
    codec: C,
    /// Overrides the default location of the emitted header.
    output_path: Option<PathBuf>,
}

impl<C: ImageCodec> Embedder<C> {
    /// Creates a new [`Embedder`] that re-encodes images with `codec`.
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            output_path: None,
        }
    }

    /// Writes the header to `output_path` instead of next to the asset.
    #[must_use]
    pub fn output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Embeds the asset at `source`.
    ///
    /// # Errors
    ///
    /// - [`EmbedError::UnsupportedExtension`]: Returned if `source` is neither a `.png` nor a
    ///   `.ttf` file.
    /// - [`EmbedError::Image`]: Returned if the PNG image cannot be decoded or re-encoded.
    /// - [`EmbedError::Io`]: Returned if a file cannot be read or written.
    pub fn embed(&self, source: &Path) -> Result<HeaderArtifact, EmbedError> {
        let asset = SourceAsset::new(source);
        log::debug!(
            "embedding \"{}\" as {}",
            asset.path().display(),
            asset.kind().as_str()
        );

        let Some(mut target) = EmitTarget::for_asset(&asset) else {
            return Err(EmbedError::UnsupportedExtension {
                path: asset.path().to_path_buf(),
            });
        };
        if let Some(output_path) = &self.output_path {
            target = target.with_output_path(output_path);
        }

        let bytes = payload(&self.codec, &asset)?;
        emit(&target, &bytes)
    }
}
