//! Browser-backed tests for form binding, extraction, and submit handling.
//!
//! Exercises the handle against real DOM elements: FormData-based entry
//! extraction in document order, value writes through the named-control
//! lookup, native reset, and default-action suppression on real submit
//! events.
//!
//! Run with: wasm-pack test --chrome --headless

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use reinhardt_use_form::{BindError, FormElement, FormRecord, use_form};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window()
		.expect("no window")
		.document()
		.expect("no document")
}

/// Creates a `<form>` with one text input per `(name, value)` pair and
/// mounts it on the body.
fn mount_form(fields: &[(&str, &str)]) -> web_sys::HtmlFormElement {
	let document = document();
	let form: web_sys::HtmlFormElement = document
		.create_element("form")
		.expect("create form")
		.dyn_into()
		.expect("cast form");

	for (name, value) in fields {
		let input = create_input(name);
		input.set_default_value(value);
		form.append_child(&input).expect("append input");
	}

	document
		.body()
		.expect("no body")
		.append_child(&form)
		.expect("mount form");
	form
}

fn create_input(name: &str) -> web_sys::HtmlInputElement {
	let input: web_sys::HtmlInputElement = document()
		.create_element("input")
		.expect("create input")
		.dyn_into()
		.expect("cast input");
	input.set_name(name);
	input
}

fn create_checked_checkbox(name: &str, value: &str) -> web_sys::HtmlInputElement {
	let checkbox = create_input(name);
	checkbox.set_type("checkbox");
	checkbox.set_value(value);
	checkbox.set_checked(true);
	checkbox
}

/// Creates a cancelable submit event, like the one a real form dispatches.
fn submit_event() -> web_sys::Event {
	let init = web_sys::EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	web_sys::Event::new_with_event_init_dict("submit", &init).expect("create submit event")
}

fn recording_handle() -> (reinhardt_use_form::FormHandle, Rc<RefCell<Vec<FormRecord>>>) {
	let submitted = Rc::new(RefCell::new(Vec::new()));
	let handle = use_form({
		let submitted = Rc::clone(&submitted);
		move |record| submitted.borrow_mut().push(record)
	});
	(handle, submitted)
}

#[wasm_bindgen_test]
fn test_get_form_data_reads_text_inputs_as_scalars() {
	let form = mount_form(&[("email", "a@x.com"), ("password", "p1")]);
	let (handle, _) = recording_handle();
	handle.form_ref().bind(form);

	let record = handle.get_form_data().expect("bound form");
	assert_eq!(record.len(), 2);
	assert_eq!(record.get_str("email"), Some("a@x.com"));
	assert_eq!(record.get_str("password"), Some("p1"));
}

#[wasm_bindgen_test]
fn test_checkbox_group_extracts_as_ordered_multi() {
	let form = mount_form(&[("email", "a@x.com")]);
	form.append_child(&create_checked_checkbox("tags", "x"))
		.expect("append checkbox");
	form.append_child(&create_checked_checkbox("tags", "y"))
		.expect("append checkbox");

	let (handle, _) = recording_handle();
	handle.form_ref().bind(form);

	let record = handle.get_form_data().expect("bound form");
	let tags = record.get("tags").expect("tags present");
	assert!(tags.is_multi());
	assert_eq!(tags.to_vec(), vec!["x".to_string(), "y".to_string()]);
}

#[wasm_bindgen_test]
fn test_multi_select_extracts_every_selected_option() {
	let document = document();
	let form = mount_form(&[]);

	let select: web_sys::HtmlSelectElement = document
		.create_element("select")
		.expect("create select")
		.dyn_into()
		.expect("cast select");
	select.set_name("colors");
	select.set_multiple(true);
	for color in ["red", "green", "blue"] {
		let option: web_sys::HtmlOptionElement = document
			.create_element("option")
			.expect("create option")
			.dyn_into()
			.expect("cast option");
		option.set_value(color);
		option.set_selected(color != "green");
		select.append_child(&option).expect("append option");
	}
	form.append_child(&select).expect("append select");

	let (handle, _) = recording_handle();
	handle.form_ref().bind(form);

	let record = handle.get_form_data().expect("bound form");
	assert_eq!(
		record.get("colors").expect("colors present").to_vec(),
		vec!["red".to_string(), "blue".to_string()]
	);
}

#[wasm_bindgen_test]
fn test_textarea_value_is_extracted() {
	let form = mount_form(&[]);
	let textarea: web_sys::HtmlTextAreaElement = document()
		.create_element("textarea")
		.expect("create textarea")
		.dyn_into()
		.expect("cast textarea");
	textarea.set_name("comment");
	textarea.set_value("hello\nworld");
	form.append_child(&textarea).expect("append textarea");

	let (handle, _) = recording_handle();
	handle.form_ref().bind(form);

	assert_eq!(
		handle.get_form_data().expect("bound form").get_str("comment"),
		Some("hello\nworld")
	);
}

#[wasm_bindgen_test]
fn test_handle_submit_prevents_default_and_delivers_record() {
	let form = mount_form(&[("name", "bob")]);
	let (handle, submitted) = recording_handle();
	handle.form_ref().bind(form);

	let event = submit_event();
	handle.handle_submit(event.clone());

	assert!(event.default_prevented());
	let submitted = submitted.borrow();
	assert_eq!(submitted.len(), 1);
	assert_eq!(submitted[0].get_str("name"), Some("bob"));
}

#[wasm_bindgen_test]
fn test_unbound_submit_leaves_event_untouched() {
	let (handle, submitted) = recording_handle();

	let event = submit_event();
	handle.handle_submit(event.clone());

	assert!(!event.default_prevented());
	assert!(submitted.borrow().is_empty());
}

#[wasm_bindgen_test]
fn test_submit_handler_callback_on_real_event() {
	let form = mount_form(&[("n", "1")]);
	let (handle, submitted) = recording_handle();
	handle.form_ref().bind(form);

	let on_submit = handle.submit_handler();
	let event = submit_event();
	on_submit.call(event.clone());

	assert!(event.default_prevented());
	assert_eq!(submitted.borrow().len(), 1);
}

#[wasm_bindgen_test]
fn test_set_value_writes_through_to_the_input() {
	let form = mount_form(&[]);
	let input = create_input("email");
	input.set_default_value("old@x.com");
	form.append_child(&input).expect("append input");

	let (handle, _) = recording_handle();
	handle.form_ref().bind(form);

	handle.set_value("email", "new@x.com");

	assert_eq!(input.value(), "new@x.com");
	assert_eq!(
		handle.get_form_data().expect("bound form").get_str("email"),
		Some("new@x.com")
	);
}

#[wasm_bindgen_test]
fn test_set_value_on_missing_name_changes_nothing() {
	let form = mount_form(&[("email", "a@x.com")]);
	let (handle, _) = recording_handle();
	handle.form_ref().bind(form);
	let before = handle.get_form_data();

	handle.set_value("nonexistent", "x");

	assert_eq!(handle.get_form_data(), before);
}

#[wasm_bindgen_test]
fn test_reset_restores_default_values() {
	let form = mount_form(&[("email", "a@x.com")]);
	let (handle, _) = recording_handle();
	handle.form_ref().bind(form);

	handle.set_value("email", "edited@x.com");
	handle.reset();

	assert_eq!(
		handle.get_form_data().expect("bound form").get_str("email"),
		Some("a@x.com")
	);
}

#[wasm_bindgen_test]
fn test_non_form_element_is_rejected() {
	let div = document().create_element("div").expect("create div");

	match FormElement::try_from(div) {
		Err(BindError::NotAFormElement { tag }) => assert_eq!(tag, "div"),
		Ok(_) => panic!("div must not convert into a form element"),
	}
}

#[wasm_bindgen_test]
fn test_binding_a_raw_form_element_via_try_from() {
	let form = mount_form(&[("n", "1")]);
	let element: web_sys::Element = form.unchecked_into();

	let (handle, _) = recording_handle();
	handle
		.form_ref()
		.bind(FormElement::try_from(element).expect("form element converts"));

	assert!(handle.form_ref().is_bound());
	assert_eq!(handle.get_form_data().expect("bound form").get_str("n"), Some("1"));
}
