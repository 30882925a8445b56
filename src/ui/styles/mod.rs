// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the browser panes, the menu bar and the viewer.

pub mod button;
pub mod container;
