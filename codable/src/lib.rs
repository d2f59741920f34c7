//! Keyed decoding and encoding for types deriving `Decodable` / `Encodable`.
//!
//! ```
//! use codable::{Decodable, Encodable};
//!
//! #[derive(Decodable, Encodable, Debug, PartialEq)]
//! struct User {
//! 	id: String,
//! 	#[coding_key("user_tag")]
//! 	#[coding_default]
//! 	tag: String,
//! }
//!
//! let user: User = codable::from_str(r#"{"id": "u1"}"#).unwrap();
//! assert_eq!(user, User { id: "u1".into(), tag: String::new() });
//!
//! let json = codable::to_string(&User { id: "u2".into(), tag: "admin".into() }).unwrap();
//! assert_eq!(json, r#"{"id":"u2","user_tag":"admin"}"#);
//! ```

use serde_json::Value;

#[cfg(feature = "derive")]
pub use codable_derive::{Codable, Decodable, Encodable};

mod coding_key;
pub use coding_key::{CodingKey, CodingPath, PathSegment};

mod decoder;
pub use decoder::{Decoder, KeyedDecodingContainer};

mod encoder;
pub use encoder::{Encoder, KeyedEncodingContainer};

mod error;
pub use error::{DecodingError, EncodingError};

mod impls;

/// Type which can be constructed from encoded data.
pub trait Decodable: Sized {
	fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError>;
}

/// Type which can be written to encoded data.
pub trait Encodable {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError>;
}

/// Decode `T` from a JSON value.
pub fn from_value<T: Decodable>(value: &Value) -> Result<T, DecodingError> {
	T::init_from(&Decoder::new(value))
}

/// Decode `T` from a JSON string.
pub fn from_str<T: Decodable>(json: &str) -> Result<T, DecodingError> {
	let value: Value = serde_json::from_str(json)?;
	from_value(&value)
}

/// Encode `value` as a JSON value.
pub fn to_value<T: Encodable + ?Sized>(value: &T) -> Result<Value, EncodingError> {
	let mut encoder = Encoder::new();
	value.encode_to(&mut encoder)?;
	Ok(encoder.into_value())
}

/// Encode `value` as a JSON string.
pub fn to_string<T: Encodable + ?Sized>(value: &T) -> Result<String, EncodingError> {
	let value = to_value(value)?;
	Ok(serde_json::to_string(&value)?)
}
