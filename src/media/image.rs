// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding (PNG, JPEG and the other raster formats the
//! `image` crate is built with).

use crate::error::{Result, ViewportError};
use iced::widget::image;
use iced_core::Bytes;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// Decoded RGBA8 pixel buffer plus the render handle iced draws from.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// RGBA bytes shared with `handle`, sampled by view export.
    rgba_bytes: Bytes,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidImage`] if either dimension is zero or
    /// the buffer length is not `width * height * 4`.
    pub fn from_rgba(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> std::result::Result<Self, ViewportError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        if width == 0 || height == 0 || expected != Some(pixels.len()) {
            return Err(ViewportError::InvalidImage);
        }

        let rgba_bytes = Bytes::from(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.clone());
        Ok(Self {
            handle,
            width,
            height,
            rgba_bytes,
        })
    }

    /// Image size as floating-point world units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> iced::Size {
        iced::Size::new(self.width as f32, self.height as f32)
    }

    /// Returns true if the buffer still matches its declared dimensions.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.rgba_bytes.len() == self.width as usize * self.height as usize * 4
    }

    /// Returns the RGBA value at `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba_bytes
            .get(offset..offset + 4)
            .and_then(|px| px.try_into().ok())
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`](crate::error::Error::Io))
/// - The image format is invalid or unsupported ([`Error::Decode`](crate::error::Error::Decode))
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let img_bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels)?)
}
