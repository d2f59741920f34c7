use crate::{
	classify::Classification,
	context::DeclarationContext,
	directive::Capability,
	synth::{build_coding_keys, build_decode_initializer, build_encode_function},
	syntax::{ExtensionDecl, Member},
};

/// Output of one macro expansion, for the host to splice in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expansion {
	/// Members to add to the primary declaration body.
	pub members: Vec<Member>,
	/// Satellite blocks to add alongside the declaration.
	pub extensions: Vec<ExtensionDecl>,
}

impl Expansion {
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty() && self.extensions.is_empty()
	}
}

/// Assemble the pieces one capability contributes to `context`'s declaration.
///
/// | Piece            | Struct    | Class     | Final class |
/// |------------------|-----------|-----------|-------------|
/// | `CodingKeys`     | extension | extension | extension   |
/// | `init(from:)`    | extension | body, `required` | body |
/// | `encode(to:)`    | extension | body      | body        |
///
/// The satellite block declaring the conformance is always emitted.
/// When both capabilities are requested, `CodingKeys` goes in the
/// `Decodable` block only.
pub fn place(context: &DeclarationContext, capability: Capability) -> Expansion {
	let mut expansion = Expansion::default();
	let mut extension = ExtensionDecl::new(context.name.as_str(), capability.conformance());

	if owns_coding_keys(context, capability) {
		if let Some(keys) = build_coding_keys(&context.fields, context.access_level) {
			extension.members.push(keys.into());
		}
	}

	let routine: Member = match capability {
		Capability::Decode => build_decode_initializer(context).into(),
		Capability::Encode => build_encode_function(context).into(),
	};
	match context.classification {
		Classification::ValueType => extension.members.push(routine),
		Classification::ReferenceType { .. } => expansion.members.push(routine),
	}

	expansion.extensions.push(extension);
	expansion
}

fn owns_coding_keys(context: &DeclarationContext, capability: Capability) -> bool {
	match capability {
		Capability::Decode => true,
		Capability::Encode => !context.capabilities.decode,
	}
}
