// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss duration, polling interval and visible cap
//! - **Sidebar**: Panel width bounds

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss duration for a published toast (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Longest auto-dismiss duration accepted from the config file (10 minutes).
pub const MAX_TOAST_DURATION_MS: u64 = 600_000;

/// Default interval between timer ticks while a toast timer is armed (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Smallest visible-toast cap accepted when a cap is configured.
pub const MIN_MAX_VISIBLE: usize = 1;

// ==========================================================================
// Sidebar Defaults
// ==========================================================================

/// Default side panel width (in logical pixels).
pub const DEFAULT_SIDEBAR_WIDTH: f32 = 320.0;

/// Minimum side panel width.
pub const MIN_SIDEBAR_WIDTH: f32 = 200.0;

/// Maximum side panel width.
pub const MAX_SIDEBAR_WIDTH: f32 = 640.0;

const _: () = {
    assert!(MIN_TICK_INTERVAL_MS <= DEFAULT_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(MIN_SIDEBAR_WIDTH <= DEFAULT_SIDEBAR_WIDTH);
    assert!(DEFAULT_SIDEBAR_WIDTH <= MAX_SIDEBAR_WIDTH);
};
