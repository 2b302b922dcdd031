//! Interface to the image codec used to re-encode PNG assets as bitmaps.

use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat, ImageReader, ImageResult};

/// Decodes images and re-encodes them as uncompressed bitmaps.
pub trait ImageCodec {
    /// A decoded image.
    type Image;

    /// Opens and decodes the image located at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a decodable image.
    fn open(&self, path: &Path) -> ImageResult<Self::Image>;

    /// Encodes `image` as a BMP file at `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or the file cannot be written.
    fn save_bitmap(&self, image: &Self::Image, path: &Path) -> ImageResult<()>;
}

/// [`ImageCodec`] backed by the `image` crate.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    type Image = DynamicImage;

    fn open(&self, path: &Path) -> ImageResult<DynamicImage> {
        ImageReader::open(path)?.with_guessed_format()?.decode()
    }

    fn save_bitmap(&self, image: &DynamicImage, path: &Path) -> ImageResult<()> {
        match image.color() {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => {
                image.save_with_format(path, ImageFormat::Bmp)
            }
            // The BMP encoder only stores 8-bit channels.
            color => {
                log::debug!("narrowing {color:?} image to rgba8 before encoding");
                DynamicImage::ImageRgba8(image.to_rgba8()).save_with_format(path, ImageFormat::Bmp)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use image::{
        ColorType, ImageBuffer, ImageFormat, ImageError, Rgb, Rgba, RgbaImage, load_from_memory,
    };
    use tempfile::TempDir;

    use super::{ImageCodec, ImageCrateCodec};

    #[test]
    fn reencodes_rgba_png() {
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("RedX.png");
        let bmp = dir.path().join("RedX.bmp");
        RgbaImage::from_pixel(4, 3, Rgba([255, 0, 0, 255]))
            .save_with_format(&png, ImageFormat::Png)
            .unwrap();

        let image = ImageCrateCodec.open(&png).unwrap();
        ImageCrateCodec.save_bitmap(&image, &bmp).unwrap();

        let bytes = std::fs::read(&bmp).unwrap();
        assert_eq!(&bytes[..2], b"BM");

        let decoded = load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
        assert_eq!(decoded.to_rgba8().get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn sixteen_bit_png_is_narrowed() {
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("deep.png");
        let bmp = dir.path().join("deep.bmp");
        ImageBuffer::<Rgb<u16>, Vec<u16>>::from_pixel(2, 2, Rgb([u16::MAX, 0, 0]))
            .save_with_format(&png, ImageFormat::Png)
            .unwrap();

        let image = ImageCrateCodec.open(&png).unwrap();
        assert_eq!(image.color(), ColorType::Rgb16);
        ImageCrateCodec.save_bitmap(&image, &bmp).unwrap();

        let decoded = load_from_memory(&std::fs::read(&bmp).unwrap()).unwrap();
        assert_eq!(decoded.to_rgba8().get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn garbage_is_not_decodable() {
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("broken.png");
        std::fs::write(&png, b"definitely not a png").unwrap();

        assert!(ImageCrateCodec.open(&png).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();

        let error = ImageCrateCodec.open(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(error, ImageError::IoError(_)));
    }
}
