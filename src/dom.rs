//! Platform seam between the form handle and the actual form element.
//!
//! [`FormElement`] is the one type the rest of the crate talks to when it
//! needs entry extraction, a native reset, or a value write. On
//! `wasm32` it wraps a live `web_sys::HtmlFormElement`; on native targets it
//! is an in-memory stand-in so handle behavior is testable without a
//! browser, the same split every DOM-touching type in this family of crates
//! uses.
//!
//! ## Architecture
//!
//! ```text
//! FormHandle ──> FormRef ──> FormElement ──┬─ wasm32: web_sys::HtmlFormElement
//!                                          └─ native: in-memory control list
//! ```
//!
//! The native stand-in models exactly the behavior the handle relies on:
//! document-ordered `(name, value)` entries with duplicates for repeated
//! names, reset-to-defaults, and first-matching-control value writes that
//! ignore non-value-bearing controls.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(not(target_arch = "wasm32"))]
use std::sync::{Arc, RwLock};

/// Error raised when a mounted element cannot serve as a form.
///
/// Produced by the `TryFrom<web_sys::Element>` conversion hosts use to turn
/// the element they mounted into a [`FormElement`]. Everything past that
/// conversion is non-failing by contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
	/// The mounted element exists but is not a `<form>` element.
	#[error("mounted element <{tag}> is not a form element")]
	NotAFormElement {
		/// Lowercased tag name of the offending element.
		tag: String,
	},
}

/// Handle to a live `<form>` element.
///
/// Cheap to clone: clones refer to the same underlying DOM node. Obtained
/// from a `web_sys::HtmlFormElement` via `From`, or from an untyped
/// `web_sys::Element` via `TryFrom` (which fails with
/// [`BindError::NotAFormElement`] for anything that is not a form).
///
/// # Example
///
/// ```ignore
/// use reinhardt_use_form::FormElement;
///
/// let element = document.get_element_by_id("signup").unwrap();
/// let form = FormElement::try_from(element)?;
/// handle.form_ref().bind(form);
/// ```
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct FormElement {
	raw: web_sys::HtmlFormElement,
}

#[cfg(target_arch = "wasm32")]
impl FormElement {
	/// Extracts the current `(name, value)` entries of the form.
	///
	/// Entries come back in document order, one per value, with duplicates
	/// for repeated names (checkbox groups, `<select multiple>`), exactly as
	/// `FormData` reports them. Non-string entries (file inputs) are skipped
	/// with a warning: the record contract is a string mapping.
	///
	/// Extraction is non-failing: if `FormData` cannot be built or iterated,
	/// the result is an empty list.
	pub fn entries(&self) -> Vec<(String, String)> {
		let mut entries = Vec::new();

		let data = match web_sys::FormData::new_with_form(&self.raw) {
			Ok(data) => data,
			Err(err) => {
				crate::warn_log!("FormData construction failed: {:?}", err);
				return entries;
			}
		};

		let iterator = match js_sys::try_iter(&data) {
			Ok(Some(iterator)) => iterator,
			_ => {
				crate::warn_log!("FormData is not iterable; extracting no entries");
				return entries;
			}
		};

		for item in iterator {
			let pair = match item {
				Ok(pair) => js_sys::Array::from(&pair),
				Err(_) => continue,
			};
			let name = match pair.get(0).as_string() {
				Some(name) => name,
				None => continue,
			};
			match pair.get(1).as_string() {
				Some(value) => entries.push((name, value)),
				None => {
					// File and other non-string FormData values
					crate::warn_log!("Skipping non-string entry for field '{}'", name);
				}
			}
		}

		entries
	}

	/// Resets the form to its initial values via the native `reset()`.
	pub fn reset(&self) {
		self.raw.reset();
	}

	/// Writes a single value into the first control registered under `name`.
	///
	/// Looks the control up through the form's `elements` collection and
	/// writes through whichever settable type it turns out to be: text-like
	/// inputs, textareas, selects, or a same-named radio group. A missing
	/// name or a non-value-bearing control (fieldset, output, object) is a
	/// silent no-op.
	pub fn set_value(&self, name: &str, value: &str) {
		let control = match self.raw.elements().named_item(name) {
			Some(control) => control,
			None => {
				crate::debug_log!("set_value: no control named '{}'", name);
				return;
			}
		};

		if let Some(input) = control.dyn_ref::<web_sys::HtmlInputElement>() {
			input.set_value(value);
		} else if let Some(textarea) = control.dyn_ref::<web_sys::HtmlTextAreaElement>() {
			textarea.set_value(value);
		} else if let Some(select) = control.dyn_ref::<web_sys::HtmlSelectElement>() {
			select.set_value(value);
		} else if let Some(radios) = control.dyn_ref::<web_sys::RadioNodeList>() {
			radios.set_value(value);
		} else {
			crate::debug_log!("set_value: control '{}' does not carry a value", name);
		}
	}

	/// Returns the wrapped `web_sys::HtmlFormElement`.
	pub fn as_raw(&self) -> &web_sys::HtmlFormElement {
		&self.raw
	}
}

#[cfg(target_arch = "wasm32")]
impl From<web_sys::HtmlFormElement> for FormElement {
	fn from(raw: web_sys::HtmlFormElement) -> Self {
		Self { raw }
	}
}

#[cfg(target_arch = "wasm32")]
impl TryFrom<web_sys::Element> for FormElement {
	type Error = BindError;

	fn try_from(element: web_sys::Element) -> Result<Self, Self::Error> {
		let tag = element.tag_name().to_ascii_lowercase();
		element
			.dyn_into::<web_sys::HtmlFormElement>()
			.map(Self::from)
			.map_err(|_| BindError::NotAFormElement { tag })
	}
}

/// One named control of the in-memory form stand-in.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
struct FieldControl {
	name: String,
	values: Vec<String>,
	defaults: Vec<String>,
	settable: bool,
}

/// Handle to a form element (non-WASM version for testing).
///
/// See the WASM version for full documentation. This stand-in holds an
/// in-memory control list instead of a DOM node; clones share the same
/// list, mirroring how cloned DOM handles refer to the same node. Controls
/// are declared up front with the `with_*` constructors and behave like
/// their DOM counterparts for entry extraction, reset, and value writes.
///
/// # Example
///
/// ```ignore
/// let form = FormElement::new()
///     .with_field("email", "a@example.com")
///     .with_multi_field("tags", ["rust", "wasm"]);
///
/// assert_eq!(form.entries().len(), 3);
/// ```
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct FormElement {
	controls: Arc<RwLock<Vec<FieldControl>>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FormElement {
	/// Creates a stand-in form with no controls.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a single-valued, settable control. The given value doubles as
	/// the control's default for `reset`.
	pub fn with_field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.push_control(name.into(), vec![value.into()], true);
		self
	}

	/// Adds a control holding several values under one name, like a
	/// `<select multiple>` or a checked checkbox group.
	pub fn with_multi_field<I, V>(self, name: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<String>,
	{
		let values: Vec<String> = values.into_iter().map(Into::into).collect();
		self.push_control(name.into(), values, true);
		self
	}

	/// Adds a named control that neither produces entries nor accepts value
	/// writes, like a `<fieldset name="...">`.
	pub fn with_unsettable_field(self, name: impl Into<String>) -> Self {
		self.push_control(name.into(), Vec::new(), false);
		self
	}

	fn push_control(&self, name: String, values: Vec<String>, settable: bool) {
		let mut controls = self.controls.write().unwrap_or_else(|e| e.into_inner());
		controls.push(FieldControl {
			name,
			defaults: values.clone(),
			values,
			settable,
		});
	}

	/// Extracts the current `(name, value)` entries in declaration order.
	pub fn entries(&self) -> Vec<(String, String)> {
		let controls = self.controls.read().unwrap_or_else(|e| e.into_inner());
		controls
			.iter()
			.flat_map(|control| {
				control
					.values
					.iter()
					.map(|value| (control.name.clone(), value.clone()))
			})
			.collect()
	}

	/// Restores every control to its default values.
	pub fn reset(&self) {
		let mut controls = self.controls.write().unwrap_or_else(|e| e.into_inner());
		for control in controls.iter_mut() {
			control.values = control.defaults.clone();
		}
	}

	/// Writes a single value into the first control named `name`, if that
	/// control is settable. Missing or non-settable controls are a silent
	/// no-op, matching the DOM behavior of the WASM version.
	pub fn set_value(&self, name: &str, value: &str) {
		let mut controls = self.controls.write().unwrap_or_else(|e| e.into_inner());
		let control = match controls.iter_mut().find(|control| control.name == name) {
			Some(control) => control,
			None => {
				crate::debug_log!("set_value: no control named '{}'", name);
				return;
			}
		};

		if control.settable {
			control.values = vec![value.to_string()];
		} else {
			crate::debug_log!("set_value: control '{}' does not carry a value", name);
		}
	}
}

/// Event stand-in for non-WASM targets.
///
/// Plays the role `web_sys::Event` plays on `wasm32`: it records whether
/// `prevent_default` was called so native tests can assert that submit
/// handling suppressed (or, while unbound, did not touch) the default
/// action. Clones share the flag, mirroring cloned JS event handles.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct DummyEvent {
	prevented: Arc<AtomicBool>,
}

#[cfg(not(target_arch = "wasm32"))]
impl DummyEvent {
	/// Creates an event whose default action has not been prevented.
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks the default action as prevented.
	pub fn prevent_default(&self) {
		self.prevented.store(true, Ordering::SeqCst);
	}

	/// Returns `true` if `prevent_default` was called on this event or any
	/// clone of it.
	pub fn default_prevented(&self) -> bool {
		self.prevented.load(Ordering::SeqCst)
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;

	#[test]
	fn test_entries_follow_declaration_order() {
		let form = FormElement::new()
			.with_field("email", "a@example.com")
			.with_multi_field("tags", ["rust", "wasm"])
			.with_field("password", "p1");

		assert_eq!(
			form.entries(),
			vec![
				("email".to_string(), "a@example.com".to_string()),
				("tags".to_string(), "rust".to_string()),
				("tags".to_string(), "wasm".to_string()),
				("password".to_string(), "p1".to_string()),
			]
		);
	}

	#[test]
	fn test_unsettable_control_produces_no_entries() {
		let form = FormElement::new()
			.with_unsettable_field("group")
			.with_field("email", "a@example.com");

		assert_eq!(
			form.entries(),
			vec![("email".to_string(), "a@example.com".to_string())]
		);
	}

	#[test]
	fn test_set_value_overwrites_first_matching_control() {
		let form = FormElement::new()
			.with_field("email", "old@example.com")
			.with_field("email", "shadowed@example.com");

		form.set_value("email", "new@example.com");

		assert_eq!(
			form.entries(),
			vec![
				("email".to_string(), "new@example.com".to_string()),
				("email".to_string(), "shadowed@example.com".to_string()),
			]
		);
	}

	#[test]
	fn test_set_value_on_missing_name_is_noop() {
		let form = FormElement::new().with_field("email", "a@example.com");
		let before = form.entries();

		form.set_value("nonexistent", "x");

		assert_eq!(form.entries(), before);
	}

	#[test]
	fn test_set_value_on_unsettable_control_is_noop() {
		let form = FormElement::new()
			.with_unsettable_field("group")
			.with_field("email", "a@example.com");
		let before = form.entries();

		form.set_value("group", "x");

		assert_eq!(form.entries(), before);
	}

	#[test]
	fn test_set_value_collapses_multi_to_single_scalar() {
		let form = FormElement::new().with_multi_field("tags", ["rust", "wasm"]);

		form.set_value("tags", "forms");

		assert_eq!(
			form.entries(),
			vec![("tags".to_string(), "forms".to_string())]
		);
	}

	#[test]
	fn test_reset_restores_defaults() {
		let form = FormElement::new()
			.with_field("email", "a@example.com")
			.with_multi_field("tags", ["rust", "wasm"]);

		form.set_value("email", "edited@example.com");
		form.set_value("tags", "edited");
		form.reset();

		assert_eq!(
			form.entries(),
			vec![
				("email".to_string(), "a@example.com".to_string()),
				("tags".to_string(), "rust".to_string()),
				("tags".to_string(), "wasm".to_string()),
			]
		);
	}

	#[test]
	fn test_clones_share_the_same_controls() {
		let form = FormElement::new().with_field("email", "a@example.com");
		let clone = form.clone();

		clone.set_value("email", "new@example.com");

		assert_eq!(form.entries(), clone.entries());
		assert_eq!(
			form.entries(),
			vec![("email".to_string(), "new@example.com".to_string())]
		);
	}

	#[test]
	fn test_dummy_event_tracks_prevention_across_clones() {
		let event = DummyEvent::new();
		assert!(!event.default_prevented());

		let clone = event.clone();
		clone.prevent_default();

		assert!(event.default_prevented());
		assert!(clone.default_prevented());
	}
}
