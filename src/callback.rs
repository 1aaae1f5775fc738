//! Cloneable callback wrappers for submit handling.
//!
//! This module provides [`Callback`], a type-safe, cheaply cloneable function
//! wrapper used for the submit callback handed to [`use_form`](crate::use_form)
//! and for the attachable submit handler a [`FormHandle`](crate::FormHandle)
//! exposes to the host framework.
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_use_form::Callback;
//!
//! // Submit callback receiving the converted record
//! let on_submit = Callback::new(|record: FormRecord| {
//!     info_log!("submitted {} fields", record.len());
//! });
//! ```

use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
type EventArg = web_sys::Event;

#[cfg(not(target_arch = "wasm32"))]
type EventArg = crate::dom::DummyEvent;

/// A type-safe, cloneable callback wrapper.
///
/// `Callback` wraps a function in an `Arc`, making it cheaply cloneable while
/// providing a stable reference that won't change between renders. Cloning a
/// [`FormHandle`](crate::FormHandle) clones its submit callback this way, so
/// every clone invokes the same underlying function.
///
/// ## Type Parameters
///
/// - `Args`: The argument type the callback receives (defaults to Event)
/// - `Ret`: The return type of the callback (defaults to `()`)
///
/// ## Example
///
/// ```ignore
/// use reinhardt_use_form::Callback;
///
/// // Simple submit handler
/// let on_submit = Callback::new(|record| {
///     info_log!("got record: {:?}", record);
/// });
///
/// // Handler with captured state
/// let submissions = Rc::new(RefCell::new(Vec::new()));
/// let on_submit = Callback::new({
///     let submissions = submissions.clone();
///     move |record| submissions.borrow_mut().push(record)
/// });
/// ```
// Callback struct with conditional Send + Sync bounds for non-WASM targets
#[cfg(target_arch = "wasm32")]
pub struct Callback<Args = EventArg, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + 'static>,
}

/// A type-safe, cloneable callback wrapper (server-side version).
///
/// See the WASM version for full documentation.
/// This version requires `Send + Sync` bounds for thread-safe server-side usage.
#[cfg(not(target_arch = "wasm32"))]
pub struct Callback<Args = EventArg, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

// WASM implementation without Send + Sync bounds
#[cfg(target_arch = "wasm32")]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	///
	/// # Arguments
	///
	/// * `f` - The function or closure to wrap
	///
	/// # Example
	///
	/// ```ignore
	/// let on_submit = Callback::new(|record| {
	///     // Handle the submitted record
	/// });
	/// ```
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	///
	/// # Arguments
	///
	/// * `args` - The arguments to pass to the callback
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

// Non-WASM implementation with Send + Sync bounds
#[cfg(not(target_arch = "wasm32"))]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	///
	/// # Arguments
	///
	/// * `f` - The function or closure to wrap
	///
	/// # Example
	///
	/// ```ignore
	/// let on_submit = Callback::new(|record| {
	///     // Handle the submitted record
	/// });
	/// ```
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	///
	/// # Arguments
	///
	/// * `args` - The arguments to pass to the callback
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}
