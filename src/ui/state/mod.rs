// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain value types used by the viewer controller, kept free of widget code
//! so they can be tested in isolation.

pub mod rotation;
pub mod selection;
pub mod transform;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use rotation::{RotationAngle, RotationDirection};
pub use selection::Selection;
pub use transform::ViewTransform;
pub use viewport::ViewportState;
pub use zoom::ZoomFactor;
