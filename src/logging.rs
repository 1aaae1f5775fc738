//! Logging abstraction layer for reinhardt-use-form
//!
//! This module provides logging macros that work seamlessly across WASM and native targets.
//! All macros are no-ops in release builds for zero production overhead.
//!
//! ## Macro Overview
//!
//! | Macro | Debug Assertions | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------------------|------|----------|
//! | `debug_log!` | Required | `debug-hooks` | `console.debug` | `eprintln!` |
//! | `info_log!` | Required | None | `console.info` | `eprintln!` |
//! | `warn_log!` | Required | None | `console.warn` | `eprintln!` |
//! | `error_log!` | Required | None | `console.error` | `eprintln!` |
//!
//! The hook itself logs through this layer: unbound-handle operations leave
//! `debug_log!` breadcrumbs, and extraction anomalies (skipped file entries,
//! FormData failures) are reported with `warn_log!`.
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_use_form::{debug_log, info_log, warn_log, error_log};
//!
//! // Only logged when both `debug-hooks` feature and `debug_assertions` are enabled
//! debug_log!("Form handle state: bound={}", handle.form_ref().is_bound());
//!
//! // Logged when `debug_assertions` are enabled
//! info_log!("Form element bound");
//! warn_log!("Skipped {} non-string entries", skipped);
//! error_log!("Failed to cast mounted element: {}", error);
//! ```

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
///
/// This macro is for hook-internal breadcrumbs, such as operations invoked
/// while no form element is bound. It compiles to a no-op when conditions
/// are not met.
///
/// # Arguments
///
/// Takes format arguments similar to `format!` or `println!`.
///
/// # Example
///
/// ```ignore
/// debug_log!("reset ignored: no form element bound");
/// ```
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		eprintln!("[DEBUG] {}", format!($($arg)*));
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message (requires `debug_assertions`)
///
/// This macro is for general informational logging during development.
/// It compiles to a no-op in release builds.
///
/// # Arguments
///
/// Takes format arguments similar to `format!` or `println!`.
///
/// # Example
///
/// ```ignore
/// info_log!("Form submitted with {} fields", record.len());
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		eprintln!("[INFO] {}", format!($($arg)*));
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`)
///
/// This macro is for warning messages during development.
/// It compiles to a no-op in release builds.
///
/// # Arguments
///
/// Takes format arguments similar to `format!` or `println!`.
///
/// # Example
///
/// ```ignore
/// warn_log!("Skipping non-string entry for field '{}'", name);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		eprintln!("[WARN] {}", format!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message (requires `debug_assertions`)
///
/// This macro is for error messages during development.
/// It compiles to a no-op in release builds.
///
/// # Arguments
///
/// Takes format arguments similar to `format!` or `println!`.
///
/// # Example
///
/// ```ignore
/// error_log!("Element binding failed: {:?}", error);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		eprintln!("[ERROR] {}", format!($($arg)*));
	}};
}

/// No-op error_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}
