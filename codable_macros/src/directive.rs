use std::fmt;

use crate::{
	error::ExpansionError,
	syntax::{Attribute, DeclGroup},
};

/// Directives this crate recognizes, by attribute name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
	Decodable,
	Encodable,
	/// Combined form of `Decodable` + `Encodable`. Deprecated.
	Codable,
	/// Per-field external key.
	CodingKey,
}

impl Directive {
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"Decodable" => Some(Self::Decodable),
			"Encodable" => Some(Self::Encodable),
			"Codable" => Some(Self::Codable),
			"CodingKey" => Some(Self::CodingKey),
			_ => None,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::Decodable => "Decodable",
			Self::Encodable => "Encodable",
			Self::Codable => "Codable",
			Self::CodingKey => "CodingKey",
		}
	}

	pub fn attribute(self) -> Attribute {
		Attribute::new(self.name())
	}
}

impl fmt::Display for Directive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A capability a declaration can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
	Decode,
	Encode,
}

impl Capability {
	pub fn directive(self) -> Directive {
		match self {
			Self::Decode => Directive::Decodable,
			Self::Encode => Directive::Encodable,
		}
	}

	/// Name of the protocol the satellite block conforms to.
	pub fn conformance(self) -> &'static str {
		self.directive().name()
	}
}

/// Set of requested capabilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
	pub decode: bool,
	pub encode: bool,
}

impl Capabilities {
	#[inline]
	pub fn contains(self, capability: Capability) -> bool {
		match capability {
			Capability::Decode => self.decode,
			Capability::Encode => self.encode,
		}
	}

	#[inline]
	pub fn is_empty(self) -> bool {
		!self.decode && !self.encode
	}
}

/// Resolve the capabilities requested by the directives on `decl`.
///
/// `Decodable` and `Encodable` may be applied together. The combined
/// `Codable` directive is rejected whenever it is present.
pub fn resolve(decl: &DeclGroup) -> Result<Capabilities, ExpansionError> {
	let mut capabilities = Capabilities::default();
	for attribute in &decl.attributes {
		match Directive::from_name(&attribute.name) {
			Some(Directive::Decodable) => capabilities.decode = true,
			Some(Directive::Encodable) => capabilities.encode = true,
			Some(Directive::Codable) => return Err(combined_directive(attribute, decl)),
			Some(Directive::CodingKey) | None => {}
		}
	}
	Ok(capabilities)
}

/// Error for use of the combined directive `node` on `decl`.
///
/// The suggested replacement adds whichever of the separated directives
/// `decl` does not carry yet.
pub fn combined_directive(node: &Attribute, decl: &DeclGroup) -> ExpansionError {
	let replacement = [Directive::Decodable, Directive::Encodable]
		.into_iter()
		.filter(|directive| !decl.attribute_names().any(|name| name == directive.name()))
		.map(Directive::attribute)
		.collect();

	ExpansionError::IllegalDirectiveCombination {
		combined: node.clone(),
		replacement,
	}
}
