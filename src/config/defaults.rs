// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Default interval between auto-dismiss sweeps (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum allowed sweep interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Maximum allowed sweep interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;
