use serde_json::Value;

use crate::{Decodable, Decoder, DecodingError, Encodable, Encoder, EncodingError};

impl<T: Decodable> Decodable for Box<T> {
	fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
		T::init_from(decoder).map(Box::new)
	}
}

impl<T: Encodable + ?Sized> Encodable for Box<T> {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		(**self).encode_to(encoder)
	}
}

impl<T: Decodable> Decodable for Vec<T> {
	fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
		let values = match decoder.value() {
			Value::Array(values) => values,
			_ => return Err(decoder.type_mismatch("array")),
		};
		values
			.iter()
			.enumerate()
			.map(|(index, value)| T::init_from(&decoder.nested(index, value)))
			.collect()
	}
}

impl<T: Encodable> Encodable for Vec<T> {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		self.as_slice().encode_to(encoder)
	}
}

impl<T: Encodable> Encodable for [T] {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		let values = self
			.iter()
			.enumerate()
			.map(|(index, value)| {
				let mut element = encoder.nested(index);
				value.encode_to(&mut element)?;
				Ok::<_, EncodingError>(element.into_value())
			})
			.collect::<Result<Vec<_>, _>>()?;
		encoder.encode_value(Value::Array(values));
		Ok(())
	}
}

impl<T: Encodable + ?Sized> Encodable for &T {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		(**self).encode_to(encoder)
	}
}
