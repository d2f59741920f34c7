use super::{access_modifiers, CODING_KEYS};
use crate::{
	classify::Classification,
	context::DeclarationContext,
	field::FieldDescriptor,
	syntax::{InitializerDecl, Modifier, Parameter, Stmt},
};

/// Build body of `init(from:)`.
///
/// A keyed container is only acquired when there is something to decode.
/// Fields with an initial value fall back to it when their key is absent.
pub fn build_decode_body(fields: &[FieldDescriptor]) -> Vec<Stmt> {
	if fields.is_empty() {
		return Vec::new();
	}

	let mut body = Vec::with_capacity(fields.len() + 1);
	body.push(Stmt::DecodingContainer {
		keys: CODING_KEYS.to_string(),
	});
	body.extend(fields.iter().map(|field| {
		let field_name = field.name.clone();
		let ty = field.declared_type.clone();
		let key = field.case_name().to_string();
		match &field.default_value {
			Some(default) => Stmt::DecodeIfPresent {
				field: field_name,
				ty,
				key,
				default: default.clone(),
			},
			None => Stmt::Decode {
				field: field_name,
				ty,
				key,
			},
		}
	}));
	body
}

/// Build `init(from decoder: any Decoder) throws`.
///
/// On a class which can be subclassed the initializer is `required`.
pub fn build_decode_initializer(context: &DeclarationContext) -> InitializerDecl {
	let mut modifiers = access_modifiers(context.access_level);
	if let Classification::ReferenceType { sealed: false } = context.classification {
		modifiers.push(Modifier::Required);
	}

	InitializerDecl {
		modifiers,
		parameters: vec![Parameter::labeled("from", "decoder", "any Decoder")],
		throws: true,
		body: build_decode_body(&context.fields),
	}
}
