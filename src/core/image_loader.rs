use std::path::Path;

use egui::ColorImage;
use thiserror::Error;

use crate::config::config::MAX_DECODE_SIZE;
use crate::core::image_format::ImageFormat;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("format error: {0}")]
    Format(String),
    #[error("unsupported format")]
    UnsupportedFormat,
}

/// Decodes raster image files into egui images.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageLoader;

impl ImageLoader {
    pub fn load_image(&self, source: &str) -> Result<ColorImage, LoadError> {
        use image::ImageReader;

        let path = Path::new(source);
        if !ImageFormat::is_supported(path) {
            return Err(LoadError::UnsupportedFormat);
        }

        let reader = ImageReader::open(path)?
            .with_guessed_format()
            .map_err(|e| LoadError::Format(e.to_string()))?;

        let img = reader
            .decode()
            .map_err(|e| LoadError::Decode(e.to_string()))?;

        // Shrink large photos; the carousel never draws them bigger.
        let (max_w, max_h) = MAX_DECODE_SIZE;
        let img = if img.width() > max_w || img.height() > max_h {
            img.resize(max_w, max_h, image::imageops::FilterType::Triangle)
        } else {
            img
        };

        let rgba_img = img.to_rgba8();
        let size = [rgba_img.width() as usize, rgba_img.height() as usize];
        Ok(ColorImage::from_rgba_unmultiplied(size, rgba_img.as_raw()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn source(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn decodes_png_to_color_image() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "small.png");
        image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let loaded = ImageLoader.load_image(&path).unwrap();
        assert_eq!(loaded.size, [4, 3]);
        assert_eq!(loaded.pixels[0], egui::Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn oversized_images_are_shrunk() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "wide.png");
        image::RgbaImage::new(3840, 100).save(&path).unwrap();

        let loaded = ImageLoader.load_image(&path).unwrap();
        assert_eq!(loaded.size[0], 1920);
        assert!(loaded.size[1] <= 1080);
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let result = ImageLoader.load_image("notes.txt");
        assert!(matches!(result, Err(LoadError::UnsupportedFormat)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = ImageLoader.load_image(&source(&dir, "not-here.png"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "garbage.png");
        std::fs::write(&path, b"not an image at all").unwrap();

        let result = ImageLoader.load_image(&path);
        assert!(matches!(result, Err(LoadError::Decode(_)) | Err(LoadError::Format(_))));
    }
}
