//! Extraction of the bytes to embed from an asset.

use std::{fs, path::Path};

use tempfile::{Builder, TempPath};

use crate::{
    asset::{AssetKind, SourceAsset},
    codec::ImageCodec,
    error::EmbedError,
};

/// Reserves a uniquely named bitmap file next to `asset` for the duration of a conversion.
///
/// The file is removed when the returned [`TempPath`] is dropped. Files the user already has next
/// to the asset, such as a `<stem>.bmp`, are never touched.
///
/// # Errors
///
/// Returns [`EmbedError::Io`] if the file cannot be created.
pub fn intermediate_bitmap(asset: &SourceAsset) -> Result<TempPath, EmbedError> {
    let dir = match asset.path().parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let stem = asset
        .path()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file = Builder::new()
        .prefix(&format!(".{stem}-"))
        .suffix(".bmp")
        .tempfile_in(dir)
        .map_err(|error| EmbedError::io(dir, error))?;

    Ok(file.into_temp_path())
}

/// Re-encodes the PNG `asset` as a bitmap using `codec` and returns the bitmap's bytes.
///
/// The bitmap is written to a scratch file next to the asset, which is removed again before this
/// function returns or unwinds.
///
/// # Errors
///
/// - [`EmbedError::UnsupportedExtension`]: Returned if `asset` is not a PNG.
/// - [`EmbedError::Image`]: Returned if the image cannot be decoded or re-encoded.
/// - [`EmbedError::Io`]: Returned if the image or the bitmap cannot be read or written.
pub fn convert_image<C: ImageCodec>(codec: &C, asset: &SourceAsset) -> Result<Vec<u8>, EmbedError> {
    if asset.kind() != AssetKind::Png {
        return Err(EmbedError::UnsupportedExtension {
            path: asset.path().to_path_buf(),
        });
    }

    let image = codec
        .open(asset.path())
        .map_err(|error| EmbedError::image(asset.path(), error))?;

    let bitmap = intermediate_bitmap(asset)?;
    codec
        .save_bitmap(&image, &bitmap)
        .map_err(|error| EmbedError::image(&bitmap, error))?;
    log::debug!(
        "converted \"{}\" to \"{}\"",
        asset.path().display(),
        bitmap.display()
    );

    let bytes = read_raw(&bitmap)?;
    if let Err(error) = bitmap.close() {
        log::warn!("failed to remove intermediate bitmap: {error}");
    }

    Ok(bytes)
}

/// Reads the entire file at `path`.
///
/// # Errors
///
/// Returns [`EmbedError::Io`] if the file does not exist or cannot be read.
pub fn read_raw(path: &Path) -> Result<Vec<u8>, EmbedError> {
    let bytes = fs::read(path).map_err(|error| EmbedError::io(path, error))?;
    log::debug!("read {} bytes from \"{}\"", bytes.len(), path.display());

    Ok(bytes)
}

/// Returns the bytes to embed for `asset`.
///
/// # Errors
///
/// See [`convert_image`] and [`read_raw`].
pub fn payload<C: ImageCodec>(codec: &C, asset: &SourceAsset) -> Result<Vec<u8>, EmbedError> {
    match asset.kind() {
        AssetKind::Png => convert_image(codec, asset),
        AssetKind::Ttf => read_raw(asset.path()),
        AssetKind::Unsupported => Err(EmbedError::UnsupportedExtension {
            path: asset.path().to_path_buf(),
        }),
    }
}
