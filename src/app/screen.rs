// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Folder tree, image list and viewer side by side.
    #[default]
    Browser,
    /// The displayed image alone, window in full-screen mode.
    FullScreen,
}
