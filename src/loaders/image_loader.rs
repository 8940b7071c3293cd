use std::path::Path;

use crate::log;
use crate::models::{Extent2D, Image};

/// Image asset loader
#[derive(Default)]
pub struct ImageLoader;

impl ImageLoader {
    /// Reads an image file, reports and skips files that could not be decoded
    pub fn read_file(path: &Path) -> Option<Image> {
        let name = path
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Could not read image file {:?}: {}", path, e);
                return None;
            }
        };

        let format = match image::ImageFormat::from_path(path) {
            Ok(format) => format,
            Err(e) => {
                log::error!("Unsupported image format {:?}: {}", path, e);
                return None;
            }
        };

        Self::read_buffer(name, &data, format)
    }

    /// Decodes image bytes into an RGBA8 [`Image`]
    pub fn read_buffer(
        name: impl Into<String>,
        data: &[u8],
        format: image::ImageFormat,
    ) -> Option<Image> {
        match image::load_from_memory_with_format(data, format) {
            Ok(img) => {
                let img = img.into_rgba8();
                let (width, height) = img.dimensions();
                let resolution = Extent2D { width, height };
                Some(Image::new(name.into(), resolution, img.into_vec()))
            }
            Err(e) => {
                log::error!("Could not read image from buffer: {:?}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_is_decoded_to_rgba() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("chalk.png");
        image::RgbImage::from_pixel(2, 3, image::Rgb([10, 20, 30]))
            .save(&path)
            .expect("png written");

        let image = ImageLoader::read_file(&path).expect("decoded");
        assert_eq!(image.resolution(), &Extent2D { width: 2, height: 3 });
        assert_eq!(&image.data()[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn missing_file_gives_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(ImageLoader::read_file(&dir.path().join("absent.png")).is_none());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(ImageLoader::read_buffer("noise", b"not a png", image::ImageFormat::Png).is_none());
    }
}
