use std::{
	collections::{BTreeMap, HashMap},
	hash::BuildHasher,
};

use serde_json::{Map, Value};

use crate::{Decodable, Decoder, DecodingError, Encodable, Encoder, EncodingError};

fn decode_entries<T, C>(decoder: &Decoder<'_>) -> Result<C, DecodingError>
where
	T: Decodable,
	C: FromIterator<(String, T)>,
{
	let object = match decoder.value() {
		Value::Object(object) => object,
		_ => return Err(decoder.type_mismatch("object")),
	};
	object
		.iter()
		.map(|(key, value)| {
			let value = T::init_from(&decoder.nested(key.as_str(), value))?;
			Ok::<_, DecodingError>((key.clone(), value))
		})
		.collect()
}

fn encode_entries<'a, T, I>(entries: I, encoder: &mut Encoder) -> Result<(), EncodingError>
where
	T: Encodable + 'a,
	I: Iterator<Item = (&'a String, &'a T)>,
{
	let mut object = Map::new();
	for (key, value) in entries {
		let mut entry = encoder.nested(key.as_str());
		value.encode_to(&mut entry)?;
		object.insert(key.clone(), entry.into_value());
	}
	encoder.encode_value(Value::Object(object));
	Ok(())
}

impl<T: Decodable> Decodable for BTreeMap<String, T> {
	fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
		decode_entries(decoder)
	}
}

impl<T: Encodable> Encodable for BTreeMap<String, T> {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		encode_entries(self.iter(), encoder)
	}
}

impl<T: Decodable, S: BuildHasher + Default> Decodable for HashMap<String, T, S> {
	fn init_from(decoder: &Decoder<'_>) -> Result<Self, DecodingError> {
		decode_entries(decoder)
	}
}

impl<T: Encodable, S> Encodable for HashMap<String, T, S> {
	fn encode_to(&self, encoder: &mut Encoder) -> Result<(), EncodingError> {
		encode_entries(self.iter(), encoder)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::{BTreeMap, HashMap};

	use serde_json::json;

	use crate::{from_value, to_value};

	#[test]
	fn maps_round_trip() {
		let input = json!({ "a": 1, "b": 2 });

		let map: BTreeMap<String, u32> = from_value(&input).unwrap();
		assert_eq!(map.len(), 2);
		assert_eq!(to_value(&map).unwrap(), input);

		let map: HashMap<String, u32> = from_value(&input).unwrap();
		assert_eq!(map["b"], 2);
		assert_eq!(to_value(&map).unwrap(), input);
	}

	#[test]
	fn map_errors_carry_entry_path() {
		let err = from_value::<BTreeMap<String, u32>>(&json!({ "a": 1, "b": "x" })).unwrap_err();
		assert_eq!(err.coding_path().unwrap().to_string(), "$.b");
	}
}
