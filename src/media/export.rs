// SPDX-License-Identifier: MPL-2.0
//! "Save current view" export.
//!
//! A [`ViewSnapshot`] is rasterized into a viewport-sized RGBA buffer by
//! sampling the displayed image at every output pixel center, then encoded
//! with the `image` crate. Areas outside the image stay transparent.

use crate::error::{Error, Result};
use crate::ui::viewer::ViewSnapshot;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use iced::Point;
use std::path::{Path, PathBuf};

/// Supported export formats for view capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// PNG format (lossless, keeps transparency).
    #[default]
    Png,
    /// JPEG format (lossy, no alpha channel).
    Jpeg,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            _ => None,
        }
    }

    /// Detects format from file path extension.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Appends the default format's extension when `path` has none, so the file
/// on disk says what it holds.
#[must_use]
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        return path;
    }
    path.with_extension(ExportFormat::default().extension())
}

/// Renders exactly what the viewer shows into an RGBA buffer the size of the
/// viewport (rounded to whole pixels, at least 1×1).
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn rasterize(snapshot: &ViewSnapshot) -> RgbaImage {
    let width = snapshot.viewport.width.round().max(1.0) as u32;
    let height = snapshot.viewport.height.round().max(1.0) as u32;
    let image = &snapshot.image;

    RgbaImage::from_fn(width, height, |x, y| {
        let screen = Point::new(x as f32 + 0.5, y as f32 + 0.5);
        let world = snapshot.transform.to_world(screen);
        let source = snapshot.rotation.unapply(world);

        if source.x < 0.0 || source.y < 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        image
            .pixel(source.x.floor() as u32, source.y.floor() as u32)
            .map_or(Rgba([0, 0, 0, 0]), Rgba)
    })
}

/// Rasterizes `snapshot` and writes it to `path`.
///
/// The format follows the path's extension and defaults to PNG.
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written to disk.
pub fn save_view<P: AsRef<Path>>(snapshot: &ViewSnapshot, path: P) -> Result<ExportFormat> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path).unwrap_or_default();
    let rendered = rasterize(snapshot);

    // JPEG has no alpha channel
    if format == ExportFormat::Jpeg {
        image_rs::DynamicImage::ImageRgba8(rendered)
            .to_rgb8()
            .save_with_format(path, format.image_format())
            .map_err(Error::from)?;
    } else {
        rendered
            .save_with_format(path, format.image_format())
            .map_err(Error::from)?;
    }

    log::info!("Saved view to {}", path.display());
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;
    use crate::ui::state::{RotationAngle, ViewTransform};
    use iced::{Size, Vector};
    use std::path::PathBuf;
    use tempfile::tempdir;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn two_pixel_image() -> ImageData {
        let mut pixels = Vec::new();
        pixels.extend_from_slice(&RED);
        pixels.extend_from_slice(&BLUE);
        ImageData::from_rgba(2, 1, pixels).unwrap()
    }

    fn snapshot(transform: ViewTransform, rotation: RotationAngle, viewport: Size) -> ViewSnapshot {
        ViewSnapshot {
            transform,
            image: two_pixel_image(),
            rotation,
            viewport,
        }
    }

    #[test]
    fn export_format_from_extension() {
        assert_eq!(ExportFormat::from_extension("PNG"), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_extension("jpeg"), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_extension("bmp"), None);
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("/tmp/view.JPG")),
            Some(ExportFormat::Jpeg)
        );
        assert_eq!(ExportFormat::from_path(&PathBuf::from("/tmp/view")), None);
    }

    #[test]
    fn bare_save_path_gets_png_extension() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/view")),
            PathBuf::from("/tmp/view.png")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/view.jpg")),
            PathBuf::from("/tmp/view.jpg")
        );
        assert_eq!(ExportFormat::Jpeg.extension(), "jpg");
    }

    #[test]
    fn identity_snapshot_reproduces_pixels() {
        let rendered = rasterize(&snapshot(
            ViewTransform::IDENTITY,
            RotationAngle::ZERO,
            Size::new(2.0, 1.0),
        ));
        assert_eq!(rendered.dimensions(), (2, 1));
        assert_eq!(rendered.get_pixel(0, 0).0, RED);
        assert_eq!(rendered.get_pixel(1, 0).0, BLUE);
    }

    #[test]
    fn area_outside_image_is_transparent() {
        let transform = ViewTransform {
            scale: 1.0,
            translation: Vector::new(1.0, 0.0),
        };
        let rendered = rasterize(&snapshot(transform, RotationAngle::ZERO, Size::new(4.0, 1.0)));
        assert_eq!(rendered.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(rendered.get_pixel(1, 0).0, RED);
        assert_eq!(rendered.get_pixel(2, 0).0, BLUE);
        assert_eq!(rendered.get_pixel(3, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn scaled_snapshot_repeats_pixels() {
        let transform = ViewTransform {
            scale: 2.0,
            translation: Vector::new(0.0, 0.0),
        };
        let rendered = rasterize(&snapshot(transform, RotationAngle::ZERO, Size::new(4.0, 2.0)));
        assert_eq!(rendered.get_pixel(1, 1).0, RED);
        assert_eq!(rendered.get_pixel(2, 0).0, BLUE);
    }

    #[test]
    fn clockwise_quarter_turn_stands_row_upright() {
        // Footprint of the rotated 2x1 image is (-1, 0) 1x2; shift it into view.
        let transform = ViewTransform {
            scale: 1.0,
            translation: Vector::new(1.0, 0.0),
        };
        let rendered = rasterize(&snapshot(transform, RotationAngle::new(90), Size::new(1.0, 2.0)));
        assert_eq!(rendered.get_pixel(0, 0).0, RED);
        assert_eq!(rendered.get_pixel(0, 1).0, BLUE);
    }

    #[test]
    fn save_view_writes_png_by_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("view");

        let format = save_view(
            &snapshot(ViewTransform::IDENTITY, RotationAngle::ZERO, Size::new(2.0, 1.0)),
            &path,
        )
        .expect("save should succeed");
        assert_eq!(format, ExportFormat::Png);

        let reloaded = image_rs::ImageReader::open(&path)
            .expect("open")
            .with_guessed_format()
            .expect("guess format")
            .decode()
            .expect("decode")
            .to_rgba8();
        assert_eq!(reloaded.get_pixel(1, 0).0, BLUE);
    }

    #[test]
    fn save_view_writes_jpeg_without_alpha() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("view.jpg");

        let format = save_view(
            &snapshot(ViewTransform::IDENTITY, RotationAngle::ZERO, Size::new(8.0, 8.0)),
            &path,
        )
        .expect("save should succeed");
        assert_eq!(format, ExportFormat::Jpeg);

        let reloaded = image_rs::open(&path).expect("reload");
        assert_eq!(reloaded.color(), image_rs::ColorType::Rgb8);
    }

    #[test]
    fn save_view_into_missing_directory_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing").join("view.png");

        let result = save_view(
            &snapshot(ViewTransform::IDENTITY, RotationAngle::ZERO, Size::new(2.0, 1.0)),
            &path,
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
