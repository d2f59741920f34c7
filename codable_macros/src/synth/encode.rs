use super::{access_modifiers, CODING_KEYS};
use crate::{
	context::DeclarationContext,
	field::FieldDescriptor,
	syntax::{FunctionDecl, Parameter, Stmt},
};

/// Build body of `encode(to:)`.
///
/// Every field is encoded unconditionally. Initial values only affect decoding.
pub fn build_encode_body(fields: &[FieldDescriptor]) -> Vec<Stmt> {
	if fields.is_empty() {
		return Vec::new();
	}

	let mut body = Vec::with_capacity(fields.len() + 1);
	body.push(Stmt::EncodingContainer {
		keys: CODING_KEYS.to_string(),
	});
	body.extend(fields.iter().map(|field| Stmt::Encode {
		field: field.name.clone(),
		key: field.case_name().to_string(),
	}));
	body
}

/// Build `func encode(to encoder: any Encoder) throws`.
///
/// Not marked `override` or `required` on classes, whether sealed or not.
pub fn build_encode_function(context: &DeclarationContext) -> FunctionDecl {
	FunctionDecl {
		modifiers: access_modifiers(context.access_level),
		name: "encode".to_string(),
		parameters: vec![Parameter::labeled("to", "encoder", "any Encoder")],
		throws: true,
		body: build_encode_body(&context.fields),
	}
}
