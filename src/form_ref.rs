//! Host-bindable reference slot for the form element.
//!
//! [`FormRef`] is the piece the host framework touches: it starts empty,
//! receives a [`FormElement`](crate::FormElement) when the corresponding UI
//! element mounts, and is cleared when it unmounts. Every handle operation
//! reads the slot at call time, so binding and unbinding may happen at any
//! point between calls without invalidating the handle.
//!
//! The slot holds a cheap element handle, never ownership of the element
//! itself: dropping a `FormRef`, bound or not, has no effect on the DOM.

use crate::dom::FormElement;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::{Arc, RwLock};

/// A nullable, cloneable reference to the bound form element.
///
/// Clones share one slot: binding through any clone is visible to all of
/// them, which is what lets a cloned [`FormHandle`](crate::FormHandle)
/// observe the element its original was bound to.
///
/// The two states of the slot drive every handle operation:
///
/// - **unbound** (`current()` is `None`): operations are silent no-ops
/// - **bound** (`current()` is `Some`): operations act on the element
///
/// # Example
///
/// ```ignore
/// use reinhardt_use_form::use_form;
///
/// let handle = use_form(|record| { /* ... */ });
/// let form_ref = handle.form_ref();
///
/// // Host framework, on mount:
/// form_ref.bind(FormElement::try_from(mounted_element)?);
///
/// // Host framework, on unmount:
/// form_ref.unbind();
/// ```
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct FormRef {
	slot: Rc<RefCell<Option<FormElement>>>,
}

/// A nullable, cloneable reference to the bound form element (server-side version).
///
/// See the WASM version for full documentation.
/// This version is `Send + Sync` for thread-safe server-side usage.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct FormRef {
	slot: Arc<RwLock<Option<FormElement>>>,
}

#[cfg(target_arch = "wasm32")]
impl FormRef {
	/// Creates an unbound reference.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds a form element, replacing any element bound before.
	///
	/// Called by the host when the form mounts. Accepts anything convertible
	/// into a [`FormElement`], so a `web_sys::HtmlFormElement` can be passed
	/// directly.
	pub fn bind(&self, element: impl Into<FormElement>) {
		*self.slot.borrow_mut() = Some(element.into());
	}

	/// Clears the binding. Called by the host when the form unmounts.
	pub fn unbind(&self) {
		*self.slot.borrow_mut() = None;
	}

	/// Returns a handle to the currently bound element, or `None`.
	pub fn current(&self) -> Option<FormElement> {
		self.slot.borrow().clone()
	}

	/// Returns `true` while a form element is bound.
	pub fn is_bound(&self) -> bool {
		self.slot.borrow().is_some()
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl FormRef {
	/// Creates an unbound reference.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds a form element, replacing any element bound before.
	///
	/// Called by the host when the form mounts.
	pub fn bind(&self, element: impl Into<FormElement>) {
		let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
		*slot = Some(element.into());
	}

	/// Clears the binding. Called by the host when the form unmounts.
	pub fn unbind(&self) {
		let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
		*slot = None;
	}

	/// Returns a handle to the currently bound element, or `None`.
	pub fn current(&self) -> Option<FormElement> {
		self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
	}

	/// Returns `true` while a form element is bound.
	pub fn is_bound(&self) -> bool {
		self.slot.read().unwrap_or_else(|e| e.into_inner()).is_some()
	}
}
