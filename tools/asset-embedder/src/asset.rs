//! Classification of asset files.

use std::path::{Path, PathBuf};

/// The suffix of a PNG image.
const PNG_SUFFIX: &str = ".png";
/// The suffix of a TrueType font.
const TTF_SUFFIX: &str = ".ttf";
/// The suffix of the bitmap a PNG image is re-encoded into.
const BMP_SUFFIX: &str = ".bmp";

/// The kinds of asset that can be embedded.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum AssetKind {
    /// A PNG image, embedded as an uncompressed bitmap.
    Png,
    /// A TrueType font, embedded as-is.
    Ttf,
    /// Any other file.
    Unsupported,
}

impl AssetKind {
    /// Returns the textual representation of the [`AssetKind`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Ttf => "ttf",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Determines the [`AssetKind`] of `path` from its file name suffix.
///
/// The match is exact and case-sensitive: `logo.png` is [`AssetKind::Png`] while `logo.PNG` is
/// [`AssetKind::Unsupported`].
pub fn classify(path: &Path) -> AssetKind {
    let Some(name) = path.file_name() else {
        return AssetKind::Unsupported;
    };

    let name = name.to_string_lossy();
    if name.ends_with(PNG_SUFFIX) {
        AssetKind::Png
    } else if name.ends_with(TTF_SUFFIX) {
        AssetKind::Ttf
    } else {
        AssetKind::Unsupported
    }
}

/// An asset file together with its [`AssetKind`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct SourceAsset {
    /// The location of the asset.
    path: PathBuf,
    /// The kind of the asset.
    kind: AssetKind,
}

impl SourceAsset {
    /// Creates a new [`SourceAsset`] located at `path`, classifying it with [`classify`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = classify(&path);

        Self { path, kind }
    }

    /// Returns the location of the asset.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the [`AssetKind`] of the asset.
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Returns the nominal location of the bitmap a PNG asset is re-encoded into: the source with
    /// its `.png` suffix swapped for `.bmp`.
    ///
    /// This only names the embedded payload. The conversion itself writes to a scratch file so
    /// that an existing file at this location is left alone.
    ///
    /// Returns `None` if the asset is not a [`AssetKind::Png`].
    pub fn bitmap_path(&self) -> Option<PathBuf> {
        if self.kind != AssetKind::Png {
            return None;
        }

        let name = self.path.file_name()?.to_string_lossy();
        let stem = name.strip_suffix(PNG_SUFFIX)?;
        Some(self.path.with_file_name(format!("{stem}{BMP_SUFFIX}")))
    }

    /// Returns the name of the file whose bytes end up embedded.
    ///
    /// For a PNG this is the nominal bitmap from [`SourceAsset::bitmap_path`], for a TTF the font
    /// itself.
    pub fn payload_name(&self) -> Option<String> {
        match self.kind {
            AssetKind::Png => self
                .bitmap_path()?
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            AssetKind::Ttf => self
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            AssetKind::Unsupported => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::path::{Path, PathBuf};

    use super::{AssetKind, SourceAsset, classify};

    #[test]
    fn supported_suffixes() {
        assert_eq!(classify(Path::new("logo.png")), AssetKind::Png);
        assert_eq!(classify(Path::new(".png")), AssetKind::Png);
        assert_eq!(classify(Path::new("assets/font.ttf")), AssetKind::Ttf);
        assert_eq!(classify(Path::new("archive.tar.png")), AssetKind::Png);
    }

    #[test]
    fn unsupported_suffixes() {
        assert_eq!(classify(Path::new("notes.txt")), AssetKind::Unsupported);
        assert_eq!(classify(Path::new("font.otf")), AssetKind::Unsupported);
        assert_eq!(classify(Path::new("png")), AssetKind::Unsupported);
        assert_eq!(classify(Path::new("logo.png.txt")), AssetKind::Unsupported);
        assert_eq!(classify(Path::new("/")), AssetKind::Unsupported);
    }

    #[test]
    fn suffix_is_case_sensitive() {
        assert_eq!(classify(Path::new("logo.PNG")), AssetKind::Unsupported);
        assert_eq!(classify(Path::new("font.Ttf")), AssetKind::Unsupported);
    }

    #[test]
    fn bitmap_path_replaces_suffix() {
        let asset = SourceAsset::new("resources/RedO.png");
        assert_eq!(asset.bitmap_path(), Some(PathBuf::from("resources/RedO.bmp")));
        assert_eq!(asset.payload_name().as_deref(), Some("RedO.bmp"));

        let asset = SourceAsset::new("resources/.png");
        assert_eq!(asset.bitmap_path(), Some(PathBuf::from("resources/.bmp")));
    }

    #[test]
    fn font_payload_is_the_font() {
        let asset = SourceAsset::new("resources/RobotoMono-Regular.ttf");
        assert_eq!(asset.kind(), AssetKind::Ttf);
        assert_eq!(asset.bitmap_path(), None);
        assert_eq!(
            asset.payload_name().as_deref(),
            Some("RobotoMono-Regular.ttf")
        );
    }

    #[test]
    fn unsupported_has_no_payload() {
        let asset = SourceAsset::new("notes.txt");
        assert_eq!(asset.kind(), AssetKind::Unsupported);
        assert_eq!(asset.payload_name(), None);
    }
}
