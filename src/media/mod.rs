// SPDX-License-Identifier: MPL-2.0
//! Image decoding, file name filtering and view export.

pub mod export;
pub mod filter;
pub mod image;

pub use export::{rasterize, save_view, with_default_extension, ExportFormat};
pub use filter::{FilterChoice, NameFilter, NameFilters};
pub use image::{load_image, ImageData};

/// Extensions offered by the save dialog, in dialog order.
pub const SAVE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_extensions_map_to_export_formats() {
        for ext in SAVE_EXTENSIONS {
            assert!(ExportFormat::from_extension(ext).is_some());
        }
    }
}
