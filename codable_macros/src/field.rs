use log::trace;

use crate::{
	directive::Directive,
	syntax::{Attribute, Expr, Member, Modifier, Pattern, VariableDecl},
};

/// A stored field taking part in decoding and encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
	pub name: String,
	/// Type as written. Used verbatim in generated code.
	pub declared_type: String,
	/// Initial value. When present, the field decodes with a fallback to it.
	pub default_value: Option<Expr>,
	/// Raw value of the field's coding key, from `@CodingKey("...")`.
	pub external_key: Option<String>,
}

impl FieldDescriptor {
	/// Name of the key enumeration case for this field.
	#[inline]
	pub fn case_name(&self) -> &str {
		&self.name
	}

	/// Key the field is stored under in encoded data.
	pub fn key(&self) -> &str {
		self.external_key.as_deref().unwrap_or(&self.name)
	}
}

/// Collect stored fields from a declaration's direct members, in declaration order.
///
/// Members which are not simple stored properties are skipped. They are left
/// for the author to manage.
pub fn extract(members: &[Member]) -> Vec<FieldDescriptor> {
	members
		.iter()
		.filter_map(|member| match member {
			Member::Variable(decl) => field_from_variable(decl),
			_ => None,
		})
		.collect()
}

/// Build a `FieldDescriptor` from a variable declaration if it is a stored
/// instance property: one binding, an identifier pattern, a type annotation,
/// and no accessor block.
pub fn field_from_variable(decl: &VariableDecl) -> Option<FieldDescriptor> {
	if decl.has_modifier(Modifier::Static) || decl.has_modifier(Modifier::Class) {
		trace!("Skipping type-level property");
		return None;
	}

	let binding = match decl.bindings.as_slice() {
		[binding] => binding,
		_ => {
			trace!("Skipping declaration with {} bindings", decl.bindings.len());
			return None;
		}
	};
	let name = match &binding.pattern {
		Pattern::Identifier(name) => name,
		_ => {
			trace!("Skipping binding without identifier pattern");
			return None;
		}
	};
	if binding.accessor.is_some() {
		trace!("Skipping computed property `{}`", name);
		return None;
	}
	let declared_type = match &binding.type_annotation {
		Some(ty) => ty,
		None => {
			trace!("Skipping property `{}` without type annotation", name);
			return None;
		}
	};

	Some(FieldDescriptor {
		name: name.clone(),
		declared_type: declared_type.clone(),
		default_value: binding.initializer.clone(),
		external_key: coding_key(&decl.attributes).map(str::to_string),
	})
}

/// Get key from the first well-formed `@CodingKey("...")` attribute.
pub fn coding_key(attributes: &[Attribute]) -> Option<&str> {
	attributes
		.iter()
		.filter(|attribute| Directive::from_name(&attribute.name) == Some(Directive::CodingKey))
		.find_map(|attribute| match attribute.arguments.as_slice() {
			[argument] => argument.as_string_literal(),
			_ => None,
		})
}
