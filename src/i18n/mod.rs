// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system; the `.ftl` files under
//! `assets/i18n/` are embedded at compile time.

pub mod fluent;
