use serde_json::Value;

use crate::{Decodable, Decoder, DecodingError, Encodable, Encoder, EncodingError};

/// `null` decodes as `None`.
impl<T: Decodable> Decodable for Option<T> {
	fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
		match decoder.value() {
			Value::Null => Ok(None),
			_ => T::init_from(decoder).map(Some),
		}
	}
}

/// `None` encodes as `null`.
impl<T: Encodable> Encodable for Option<T> {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		match self {
			Some(value) => value.encode_to(encoder),
			None => {
				encoder.encode_value(Value::Null);
				Ok(())
			}
		}
	}
}

impl Decodable for Value {
	fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
		Ok(decoder.value().clone())
	}
}

impl Encodable for Value {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		encoder.encode_value(self.clone());
		Ok(())
	}
}
