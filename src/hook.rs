//! The `use_form` hook and the handle it returns.
//!
//! `use_form` takes exactly one piece of configuration, the submit callback,
//! and returns a [`FormHandle`]. The handle stays valid for the whole life
//! of the component that created it; whether its operations do anything is
//! decided per call by the state of its [`FormRef`]:
//!
//! ```text
//! use_form(on_submit) ──> FormHandle ──┬─ form_ref()       host binds/unbinds the element
//!                                      ├─ handle_submit()  suppress default, extract, invoke
//!                                      ├─ submit_handler() attachable Callback form of the above
//!                                      ├─ reset()          native form reset
//!                                      ├─ get_form_data()  fresh FormRecord snapshot
//!                                      └─ set_value()      write one field value
//! ```
//!
//! While no element is bound, every operation is a silent no-op that returns
//! the absent value where it returns anything. There is no error surface:
//! submitting an unmounted form does nothing, by contract.

use crate::callback::Callback;
use crate::form_ref::FormRef;
use crate::record::FormRecord;

#[cfg(target_arch = "wasm32")]
type EventArg = web_sys::Event;

#[cfg(not(target_arch = "wasm32"))]
type EventArg = crate::dom::DummyEvent;

/// The submit callback a form handle invokes with the converted record.
///
/// Supplied once at construction, held for the lifetime of the handle, and
/// invoked synchronously, exactly once per handled submit.
pub type SubmitHandler = Callback<FormRecord>;

/// Cloneable handle over one form's submit/read/write/reset operations.
///
/// Created by [`use_form`]. Clones share the same [`FormRef`] and the same
/// submit callback, so a handle can be passed freely to child components
/// and event wiring.
///
/// All operations check the ref at call time: a handle created before the
/// form mounts, or outliving its unmount, is safe to call and simply does
/// nothing.
///
/// # Example
///
/// ```ignore
/// use reinhardt_use_form::use_form;
///
/// let handle = use_form(|record| {
///     info_log!("submitted: {:?}", record.to_json_value());
/// });
///
/// // Host wiring: bind the mounted <form>, attach the submit handler
/// handle.form_ref().bind(form_element);
/// let on_submit = handle.submit_handler();
/// ```
#[derive(Debug, Clone)]
pub struct FormHandle {
	form_ref: FormRef,
	on_submit: SubmitHandler,
}

impl FormHandle {
	/// Creates a handle with an unbound [`FormRef`].
	///
	/// # Arguments
	///
	/// * `on_submit` - Callback invoked with the converted [`FormRecord`]
	///   each time a submit is handled
	pub fn new(on_submit: SubmitHandler) -> Self {
		Self {
			form_ref: FormRef::new(),
			on_submit,
		}
	}

	/// Returns the bindable reference the host attaches to the form element.
	///
	/// The returned ref shares its slot with this handle (and all clones of
	/// it); it is intended to be bound to exactly one form element at a
	/// time. Rebinding replaces the previous element.
	pub fn form_ref(&self) -> FormRef {
		self.form_ref.clone()
	}

	/// Handles a submit event of the bound form.
	///
	/// When a form element is bound: suppresses the event's default action
	/// (the browser's own navigate-and-reload submission) first, then
	/// extracts the form's current entries, converts them into a
	/// [`FormRecord`], and invokes the submit callback with it, exactly
	/// once, synchronously.
	///
	/// When no element is bound the event is left untouched and the
	/// callback is not invoked.
	pub fn handle_submit(&self, event: EventArg) {
		let form = match self.form_ref.current() {
			Some(form) => form,
			None => {
				crate::debug_log!("handle_submit ignored: no form element bound");
				return;
			}
		};

		// Suppress the native submission before reading any field data
		event.prevent_default();

		let record = FormRecord::from_entries(form.entries());
		self.on_submit.call(record);
	}

	/// Returns [`FormHandle::handle_submit`] as an attachable [`Callback`].
	///
	/// The callback owns a clone of this handle, so it can be handed to the
	/// host framework's event wiring and stays valid across binds and
	/// unbinds of the underlying element.
	pub fn submit_handler(&self) -> Callback<EventArg> {
		let handle = self.clone();
		Callback::new(move |event: EventArg| handle.handle_submit(event))
	}

	/// Resets the bound form to its initial values.
	///
	/// Delegates to the element's native reset behavior. Silent no-op while
	/// no element is bound.
	pub fn reset(&self) {
		match self.form_ref.current() {
			Some(form) => form.reset(),
			None => crate::debug_log!("reset ignored: no form element bound"),
		}
	}

	/// Reads the bound form's current state as a [`FormRecord`].
	///
	/// Extracts and converts fresh on every call; the result is a snapshot,
	/// never a cached record.
	///
	/// # Returns
	///
	/// `Some(record)` while a form element is bound, `None` otherwise.
	pub fn get_form_data(&self) -> Option<FormRecord> {
		match self.form_ref.current() {
			Some(form) => Some(FormRecord::from_entries(form.entries())),
			None => {
				crate::debug_log!("get_form_data: no form element bound");
				None
			}
		}
	}

	/// Writes a single value into the named field of the bound form.
	///
	/// Always writes one scalar, regardless of how many values the field
	/// currently holds. Silent no-op while unbound, when no control carries
	/// the name, or when the named control cannot hold a value.
	///
	/// # Arguments
	///
	/// * `name` - Field name to write
	/// * `value` - New value
	pub fn set_value(&self, name: &str, value: impl Into<String>) {
		match self.form_ref.current() {
			Some(form) => form.set_value(name, &value.into()),
			None => crate::debug_log!("set_value ignored: no form element bound"),
		}
	}
}

/// Creates a form handle around a submit callback.
///
/// This is the React-like equivalent of `useForm`. The callback is the only
/// configuration the hook recognizes; everything else about the form
/// (fields, values, defaults) lives in the DOM element the host later binds
/// through [`FormHandle::form_ref`].
///
/// # Arguments
///
/// * `on_submit` - Invoked with the converted [`FormRecord`] each time a
///   submit is handled on the bound form
///
/// # Returns
///
/// A [`FormHandle`] whose ref starts unbound.
///
/// # Example
///
/// ```ignore
/// use reinhardt_use_form::use_form;
///
/// let handle = use_form(|record| {
///     if let Some(email) = record.get_str("email") {
///         info_log!("submitted email: {}", email);
///     }
/// });
/// ```
///
/// # Note
///
/// The handle is cheap to clone and safe to call before the form mounts or
/// after it unmounts; operations in those windows are silent no-ops.
#[cfg(target_arch = "wasm32")]
pub fn use_form<F>(on_submit: F) -> FormHandle
where
	F: Fn(FormRecord) + 'static,
{
	FormHandle::new(Callback::new(on_submit))
}

/// Creates a form handle around a submit callback (server-side version).
///
/// See the WASM version for full documentation.
/// Requires `Send + Sync` bounds for thread-safe server-side usage.
#[cfg(not(target_arch = "wasm32"))]
pub fn use_form<F>(on_submit: F) -> FormHandle
where
	F: Fn(FormRecord) + Send + Sync + 'static,
{
	FormHandle::new(Callback::new(on_submit))
}
