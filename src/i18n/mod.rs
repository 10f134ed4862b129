// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Component strings (tooltips, gallery labels, config warnings) are looked up
//! with the Fluent localization system. Translation files are embedded in the
//! binary from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, then system settings
//! - Language-only fallback (`fr-CA` uses `fr`)
//! - Runtime language switching
//! - Missing keys render as `MISSING: key`

pub mod fluent;
