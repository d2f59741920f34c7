use std::marker::PhantomData;

use log::warn;
use serde_json::{Map, Value};

use crate::{CodingKey, CodingPath, Encodable, EncodingError, PathSegment};

/// Destination for one encoded value.
///
/// A value is either written whole with `encode_value`, or field by field
/// through a keyed container. An encoder nothing is written to produces an
/// empty object.
pub struct Encoder {
	object: Map<String, Value>,
	single: Option<Value>,
	path: CodingPath,
}

impl Encoder {
	/// Create encoder for root value.
	pub fn new() -> Self {
		Self::at(CodingPath::root())
	}

	fn at(path: CodingPath) -> Self {
		Self {
			object: Map::new(),
			single: None,
			path,
		}
	}

	/// Create encoder for a value nested within this encoder's value.
	pub fn nested(&self, segment: impl Into<PathSegment>) -> Encoder {
		Self::at(self.path.appending(segment))
	}

	#[inline]
	pub fn coding_path(&self) -> &CodingPath {
		&self.path
	}

	/// Get keyed container for encoding the fields of a value.
	pub fn container<K: CodingKey>(&mut self) -> KeyedEncodingContainer<'_, K> {
		if self.single.take().is_some() {
			warn!("Keyed container requested after value written at {}", self.path);
		}
		KeyedEncodingContainer {
			object: &mut self.object,
			path: &self.path,
			keys: PhantomData,
		}
	}

	/// Write whole value.
	pub fn encode_value(&mut self, value: Value) {
		if !self.object.is_empty() {
			warn!("Value written over keyed container at {}", self.path);
			self.object.clear();
		}
		self.single = Some(value);
	}

	/// Error for a value which has no encoded representation.
	pub fn invalid_value(&self, value: impl ToString) -> EncodingError {
		EncodingError::InvalidValue {
			value: value.to_string(),
			path: self.path.clone(),
		}
	}

	/// Consume encoder and get encoded value.
	pub fn into_value(self) -> Value {
		match self.single {
			Some(value) => value,
			None => Value::Object(self.object),
		}
	}
}

impl Default for Encoder {
	fn default() -> Self {
		Self::new()
	}
}

/// Fields of an object being encoded, addressed by coding key `K`.
pub struct KeyedEncodingContainer<'a, K: CodingKey> {
	object: &'a mut Map<String, Value>,
	path: &'a CodingPath,
	keys: PhantomData<fn(K)>,
}

impl<'a, K: CodingKey> KeyedEncodingContainer<'a, K> {
	#[inline]
	pub fn coding_path(&self) -> &CodingPath {
		self.path
	}

	/// Encode `value` under `key`. Replaces any value already stored under `key`.
	pub fn encode<T: Encodable + ?Sized>(&mut self, value: &T, key: K) -> Result<(), EncodingError> {
		let key = key.string_value();
		let mut encoder = Encoder::at(self.path.appending(key));
		value.encode_to(&mut encoder)?;
		self.object.insert(key.to_string(), encoder.into_value());
		Ok(())
	}

	/// Encode `value` under `key` only if it is `Some`.
	pub fn encode_if_present<T: Encodable>(
		&mut self,
		value: &Option<T>,
		key: K,
	) -> Result<(), EncodingError> {
		match value {
			Some(value) => self.encode(value, key),
			None => Ok(()),
		}
	}
}
