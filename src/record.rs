//! Field records extracted from a form.
//!
//! A submitted form is a flat sequence of `(name, value)` entries in which
//! the same name may appear any number of times (checkbox groups,
//! `<select multiple>`). This module converts that sequence into a
//! [`FormRecord`]: one key per distinct field name, where the value shape
//! records how many times the name occurred.
//!
//! ## Conversion rules
//!
//! - A name that occurred exactly once maps to [`FormValue::Scalar`] with
//!   that single value. It is never wrapped in a one-element list.
//! - A name that occurred k >= 2 times maps to [`FormValue::Multi`] holding
//!   all k values in occurrence order. Values are never collapsed to the
//!   last occurrence.
//! - An empty entry sequence produces an empty record.
//!
//! The shape distinction is load-bearing: consumers branch on it, so the
//! serde representation is untagged and serializes exactly the way a JS
//! host runtime would shape the data (`"v"` vs `["v1", "v2"]`).
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_use_form::{FormRecord, FormValue};
//!
//! let record = FormRecord::from_entries([
//!     ("email", "a@example.com"),
//!     ("tags", "rust"),
//!     ("tags", "wasm"),
//! ]);
//!
//! assert_eq!(record.get_str("email"), Some("a@example.com"));
//! assert_eq!(
//!     record.get("tags"),
//!     Some(&FormValue::Multi(vec!["rust".into(), "wasm".into()]))
//! );
//! ```

use std::collections::HashMap;
use std::collections::hash_map::{self, Entry};

use serde::{Deserialize, Serialize};

/// The value recorded under one field name.
///
/// The variant encodes occurrence count, not content: a lone checkbox that
/// happened to be checked once is a `Scalar`, while two checked boxes of the
/// same group are a `Multi` even if their values are equal.
///
/// Serialization is untagged, so a `Scalar` becomes a bare JSON string and a
/// `Multi` becomes a JSON array of strings.
///
/// # Example
///
/// ```ignore
/// match record.get("tags") {
///     Some(FormValue::Scalar(tag)) => apply_tag(tag),
///     Some(FormValue::Multi(tags)) => tags.iter().for_each(apply_tag),
///     None => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
	/// The field name occurred exactly once in the entry sequence.
	Scalar(String),
	/// The field name occurred more than once; all values in occurrence order.
	Multi(Vec<String>),
}

impl FormValue {
	/// Returns the value as a string slice if it is a `Scalar`.
	///
	/// Returns `None` for `Multi` values so callers cannot silently ignore
	/// multiplicity. Use [`FormValue::first`] or [`FormValue::to_vec`] when
	/// either shape is acceptable.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			FormValue::Scalar(value) => Some(value),
			FormValue::Multi(_) => None,
		}
	}

	/// Returns the first recorded value, regardless of shape.
	///
	/// `None` only for a `Multi` deserialized from an empty JSON array;
	/// conversion never produces one.
	pub fn first(&self) -> Option<&str> {
		match self {
			FormValue::Scalar(value) => Some(value),
			FormValue::Multi(values) => values.first().map(String::as_str),
		}
	}

	/// Returns all recorded values as an owned vector.
	pub fn to_vec(&self) -> Vec<String> {
		match self {
			FormValue::Scalar(value) => vec![value.clone()],
			FormValue::Multi(values) => values.clone(),
		}
	}

	/// Returns `true` if the field name occurred more than once.
	pub fn is_multi(&self) -> bool {
		matches!(self, FormValue::Multi(_))
	}

	/// Number of recorded values (1 for `Scalar`).
	pub fn len(&self) -> usize {
		match self {
			FormValue::Scalar(_) => 1,
			FormValue::Multi(values) => values.len(),
		}
	}

	/// Returns `true` if no values are recorded.
	///
	/// A `Scalar` is never empty, even when it holds an empty string.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Appends another occurrence, promoting `Scalar` to `Multi`.
	fn push(&mut self, value: String) {
		match self {
			FormValue::Scalar(first) => {
				*self = FormValue::Multi(vec![std::mem::take(first), value]);
			}
			FormValue::Multi(values) => values.push(value),
		}
	}
}

/// A record of submitted field values, keyed by field name.
///
/// Built with [`FormRecord::from_entries`] from the flat entry sequence a
/// form produces. Exactly one key exists per distinct input name; the value
/// shape distinguishes single from repeated occurrence (see [`FormValue`]).
///
/// Serialization is transparent: the record serializes as the plain JSON
/// object `{"email": "a@example.com", "tags": ["rust", "wasm"]}`.
///
/// # Example
///
/// ```ignore
/// let record = FormRecord::from_entries([
///     ("email", "a@example.com"),
///     ("password", "p1"),
/// ]);
///
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get_str("email"), Some("a@example.com"));
/// assert!(record.get("remember_me").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
	fields: HashMap<String, FormValue>,
}

impl FormRecord {
	/// Creates an empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Converts a flat entry sequence into a record.
	///
	/// The first occurrence of a name inserts a [`FormValue::Scalar`]; each
	/// further occurrence promotes it to (or extends) a [`FormValue::Multi`],
	/// preserving occurrence order. The conversion is total: it accepts any
	/// entry sequence, including an empty one, and never fails.
	///
	/// # Arguments
	///
	/// * `entries` - `(name, value)` pairs in document order
	///
	/// # Example
	///
	/// ```ignore
	/// let record = FormRecord::from_entries([
	///     ("tags", "rust"),
	///     ("tags", "wasm"),
	/// ]);
	/// assert!(record.get("tags").is_some_and(FormValue::is_multi));
	/// ```
	pub fn from_entries<I, K, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut fields: HashMap<String, FormValue> = HashMap::new();
		for (name, value) in entries {
			match fields.entry(name.into()) {
				Entry::Occupied(mut occupied) => occupied.get_mut().push(value.into()),
				Entry::Vacant(vacant) => {
					vacant.insert(FormValue::Scalar(value.into()));
				}
			}
		}
		Self { fields }
	}

	/// Returns the value recorded under `name`, if the field was present.
	pub fn get(&self, name: &str) -> Option<&FormValue> {
		self.fields.get(name)
	}

	/// Returns the value under `name` as a string slice, for `Scalar` fields only.
	///
	/// Multi-valued fields return `None`; match on [`FormRecord::get`] to
	/// handle both shapes.
	pub fn get_str(&self, name: &str) -> Option<&str> {
		self.fields.get(name).and_then(FormValue::as_str)
	}

	/// Returns `true` if the record holds a value under `name`.
	pub fn contains_field(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// Number of distinct field names in the record.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns `true` if no fields were recorded.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Iterates over the distinct field names, in arbitrary order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Iterates over `(name, value)` pairs, in arbitrary order.
	pub fn iter(&self) -> hash_map::Iter<'_, String, FormValue> {
		self.fields.iter()
	}

	/// Builds the JSON object view of the record.
	///
	/// Scalars become JSON strings and multi values become JSON string
	/// arrays, matching the untagged serde representation.
	///
	/// # Returns
	///
	/// A `serde_json::Value::Object` mapping field names to values.
	pub fn to_json_value(&self) -> serde_json::Value {
		let mut data = serde_json::Map::new();
		for (name, value) in &self.fields {
			let json = match value {
				FormValue::Scalar(scalar) => serde_json::Value::String(scalar.clone()),
				FormValue::Multi(values) => serde_json::Value::Array(
					values
						.iter()
						.cloned()
						.map(serde_json::Value::String)
						.collect(),
				),
			};
			data.insert(name.clone(), json);
		}
		serde_json::Value::Object(data)
	}
}

impl<K, V> FromIterator<(K, V)> for FormRecord
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self::from_entries(iter)
	}
}

impl<'a> IntoIterator for &'a FormRecord {
	type Item = (&'a String, &'a FormValue);
	type IntoIter = hash_map::Iter<'a, String, FormValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
