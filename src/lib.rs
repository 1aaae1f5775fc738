//! Reinhardt UseForm - React-style form hook for WASM frontends
//!
//! A standalone, framework-agnostic `use_form` hook for wasm-bindgen
//! frontends: bind a live `<form>` element, handle its submit events without
//! page reloads, and read its fields as a typed record.
//!
//! ## Features
//!
//! - **One-call setup**: `use_form(on_submit)` is the entire configuration;
//!   fields, values, and defaults live in the DOM element itself
//! - **Shape-preserving records**: single-occurrence field names stay
//!   scalars, repeated names (checkbox groups, `<select multiple>`) become
//!   ordered lists; neither shape is ever silently converted to the other
//! - **Lifecycle-safe handle**: every operation is a silent no-op while no
//!   element is bound, so handles created before mount or outliving unmount
//!   never throw
//! - **Low-level Only**: built on wasm-bindgen, web-sys, and js-sys (no
//!   high-level framework dependencies)
//! - **Testable off-browser**: non-WASM builds swap the DOM for an
//!   in-memory form stand-in with the same surface
//!
//! ## Architecture
//!
//! ```text
//!             use_form(on_submit)
//!                     │
//!                     ▼
//!               FormHandle ──────────── submit_handler() ──> host event wiring
//!              ┌─────┴──────┐
//!              ▼            ▼
//!           FormRef    SubmitHandler
//!              │
//!   host binds/unbinds
//!              ▼
//!         FormElement ──> entries ──> FormRecord { Scalar | Multi }
//! ```
//!
//! - [`hook`]: the `use_form` hook and [`FormHandle`]
//! - [`record`](mod@record): [`FormRecord`] / [`FormValue`] and the
//!   entries-to-record conversion
//! - [`form_ref`]: the nullable element slot the host binds on mount
//! - [`dom`]: the platform seam over the actual form element
//! - [`callback`]: cloneable callback wrappers
//! - [`logging`]: console/stderr logging macros
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_use_form::{use_form, FormElement};
//!
//! let handle = use_form(|record| {
//!     if let Some(email) = record.get_str("email") {
//!         info_log!("signing up {}", email);
//!     }
//! });
//!
//! // Host framework, when the <form> mounts:
//! handle.form_ref().bind(FormElement::try_from(mounted_element)?);
//!
//! // Host framework, wiring the submit event:
//! let on_submit = handle.submit_handler();
//!
//! // Anywhere else in the component:
//! handle.set_value("plan", "starter");
//! if let Some(snapshot) = handle.get_form_data() {
//!     info_log!("current fields: {}", snapshot.to_json_value());
//! }
//! ```

#![warn(missing_docs)]

// Core modules
pub mod callback;
pub mod dom;
pub mod form_ref;
pub mod hook;
pub mod logging;
pub mod record;

// Public surface
pub use callback::Callback;
pub use dom::{BindError, FormElement};
pub use form_ref::FormRef;
pub use hook::{FormHandle, SubmitHandler, use_form};
pub use record::{FormRecord, FormValue};

// Event stand-in for non-WASM targets (tests, SSR)
#[cfg(not(target_arch = "wasm32"))]
pub use dom::DummyEvent;
