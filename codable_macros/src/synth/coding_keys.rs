use super::access_modifiers;
use crate::{
	classify::AccessLevel,
	field::FieldDescriptor,
	syntax::{EnumCase, EnumDecl, Expr},
};

/// Name of the synthesized key enumeration.
pub const CODING_KEYS: &str = "CodingKeys";

/// Build `enum CodingKeys: String, CodingKey` with one case per field.
///
/// A case only gets a raw value if its field has a custom key.
/// Returns `None` if there are no fields, as an enum without cases is never emitted.
pub fn build_coding_keys(
	fields: &[FieldDescriptor],
	access_level: Option<AccessLevel>,
) -> Option<EnumDecl> {
	if fields.is_empty() {
		return None;
	}

	let cases = fields
		.iter()
		.map(|field| EnumCase {
			name: field.case_name().to_string(),
			raw_value: field.external_key.as_ref().map(|key| Expr::string(key.as_str())),
		})
		.collect();

	Some(EnumDecl {
		modifiers: access_modifiers(access_level),
		name: CODING_KEYS.to_string(),
		inherited: vec!["String".to_string(), "CodingKey".to_string()],
		cases,
	})
}
