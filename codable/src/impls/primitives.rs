use serde_json::{Number, Value};

use crate::{Decodable, Decoder, DecodingError, Encodable, Encoder, EncodingError};

impl Decodable for bool {
	fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
		decoder.value().as_bool().ok_or_else(|| decoder.type_mismatch("bool"))
	}
}

impl Encodable for bool {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		encoder.encode_value(Value::Bool(*self));
		Ok(())
	}
}

macro_rules! impl_unsigned {
	($($ty:ty),*) => {
		$(
			impl Decodable for $ty {
				fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
					let number = match decoder.value() {
						Value::Number(number) => number,
						_ => return Err(decoder.type_mismatch(stringify!($ty))),
					};
					number
						.as_u64()
						.and_then(|n| <$ty>::try_from(n).ok())
						.ok_or_else(|| {
							decoder.data_corrupted(format!("{} does not fit in {}", number, stringify!($ty)))
						})
				}
			}

			impl Encodable for $ty {
				fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
					let n = u64::try_from(*self).map_err(|_| encoder.invalid_value(self))?;
					encoder.encode_value(Value::Number(n.into()));
					Ok(())
				}
			}
		)*
	};
}

impl_unsigned!(u8, u16, u32, u64, usize);

macro_rules! impl_signed {
	($($ty:ty),*) => {
		$(
			impl Decodable for $ty {
				fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
					let number = match decoder.value() {
						Value::Number(number) => number,
						_ => return Err(decoder.type_mismatch(stringify!($ty))),
					};
					number
						.as_i64()
						.and_then(|n| <$ty>::try_from(n).ok())
						.ok_or_else(|| {
							decoder.data_corrupted(format!("{} does not fit in {}", number, stringify!($ty)))
						})
				}
			}

			impl Encodable for $ty {
				fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
					let n = i64::try_from(*self).map_err(|_| encoder.invalid_value(self))?;
					encoder.encode_value(Value::Number(n.into()));
					Ok(())
				}
			}
		)*
	};
}

impl_signed!(i8, i16, i32, i64, isize);

macro_rules! impl_float {
	($($ty:ty),*) => {
		$(
			impl Decodable for $ty {
				fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
					let n = decoder
						.value()
						.as_f64()
						.ok_or_else(|| decoder.type_mismatch(stringify!($ty)))?;
					let value = n as $ty;
					if !value.is_finite() {
						return Err(decoder.data_corrupted(format!("{} does not fit in {}", n, stringify!($ty))));
					}
					Ok(value)
				}
			}

			impl Encodable for $ty {
				fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
					// NaN and infinities have no JSON representation
					let number = Number::from_f64(f64::from(*self)).ok_or_else(|| encoder.invalid_value(self))?;
					encoder.encode_value(Value::Number(number));
					Ok(())
				}
			}
		)*
	};
}

impl_float!(f32, f64);

impl Decodable for char {
	fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
		let s = decoder.value().as_str().ok_or_else(|| decoder.type_mismatch("char"))?;
		let mut chars = s.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Ok(c),
			_ => Err(decoder.data_corrupted(format!("Expected a single character, found {:?}", s))),
		}
	}
}

impl Encodable for char {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		encoder.encode_value(Value::String(self.to_string()));
		Ok(())
	}
}

impl Decodable for String {
	fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
		match decoder.value() {
			Value::String(s) => Ok(s.clone()),
			_ => Err(decoder.type_mismatch("string")),
		}
	}
}

impl Encodable for String {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		self.as_str().encode_to(encoder)
	}
}

impl Encodable for str {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		encoder.encode_value(Value::String(self.to_string()));
		Ok(())
	}
}
