use std::marker::PhantomData;

use log::trace;
use serde_json::{Map, Value};

use crate::{CodingKey, CodingPath, Decodable, DecodingError, PathSegment};

/// Source of one value being decoded, and where it sits in the input.
pub struct Decoder<'de> {
	value: &'de Value,
	path: CodingPath,
}

impl<'de> Decoder<'de> {
	/// Create decoder for root value.
	pub fn new(value: &'de Value) -> Self {
		Self {
			value,
			path: CodingPath::root(),
		}
	}

	/// Create decoder for a value nested within this decoder's value.
	pub fn nested(&self, segment: impl Into<PathSegment>, value: &'de Value) -> Decoder<'de> {
		Decoder {
			value,
			path: self.path.appending(segment),
		}
	}

	#[inline]
	pub fn value(&self) -> &'de Value {
		self.value
	}

	#[inline]
	pub fn coding_path(&self) -> &CodingPath {
		&self.path
	}

	/// Get keyed container for decoding the fields of a value.
	/// Fails if value is not an object.
	pub fn container<K: CodingKey>(&self) -> Result<KeyedDecodingContainer<'de, K>, DecodingError> {
		match self.value {
			Value::Object(object) => Ok(KeyedDecodingContainer {
				object,
				path: self.path.clone(),
				keys: PhantomData,
			}),
			_ => Err(self.type_mismatch("object")),
		}
	}

	/// Decode this decoder's value as `T`.
	#[inline]
	pub fn decode<T: Decodable>(&self) -> Result<T, DecodingError> {
		T::init_from(self)
	}

	/// Error for value not being of `expected` type.
	pub fn type_mismatch(&self, expected: &'static str) -> DecodingError {
		DecodingError::TypeMismatch {
			expected,
			found: kind_of(self.value),
			path: self.path.clone(),
		}
	}

	/// Error for value being of the right type, but invalid.
	pub fn data_corrupted(&self, message: impl Into<String>) -> DecodingError {
		DecodingError::DataCorrupted {
			message: message.into(),
			path: self.path.clone(),
		}
	}
}

/// Fields of an object, addressed by coding key `K`.
pub struct KeyedDecodingContainer<'de, K: CodingKey> {
	object: &'de Map<String, Value>,
	path: CodingPath,
	keys: PhantomData<fn(K)>,
}

impl<'de, K: CodingKey> KeyedDecodingContainer<'de, K> {
	#[inline]
	pub fn coding_path(&self) -> &CodingPath {
		&self.path
	}

	/// Whether input contains `key`. Keys with a `null` value count as present.
	#[inline]
	pub fn contains(&self, key: K) -> bool {
		self.object.contains_key(key.string_value())
	}

	/// Decode a required field.
	pub fn decode<T: Decodable>(&self, key: K) -> Result<T, DecodingError> {
		let key = key.string_value();
		match self.object.get(key) {
			Some(value) => T::init_from(&self.nested(key, value)),
			None => Err(DecodingError::KeyNotFound {
				key,
				path: self.path.clone(),
			}),
		}
	}

	/// Decode an optional field.
	///
	/// Returns `None` if key is absent or its value is `null`.
	/// A value present with the wrong type is still an error.
	pub fn decode_if_present<T: Decodable>(&self, key: K) -> Result<Option<T>, DecodingError> {
		let key = key.string_value();
		match self.object.get(key) {
			None | Some(Value::Null) => {
				trace!("No value for `{}` at {}", key, self.path);
				Ok(None)
			}
			Some(value) => T::init_from(&self.nested(key, value)).map(Some),
		}
	}

	fn nested(&self, key: &str, value: &'de Value) -> Decoder<'de> {
		Decoder {
			value,
			path: self.path.appending(key),
		}
	}
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
