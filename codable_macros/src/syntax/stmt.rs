use std::fmt;

use super::Expr;

/// A statement in a code block.
///
/// Statements the synthesizers emit are typed, so callers can inspect the
/// generated bodies. Anything else is carried as verbatim source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
	/// `let container = try decoder.container(keyedBy: <keys>.self)`
	DecodingContainer { keys: String },
	/// `var container = encoder.container(keyedBy: <keys>.self)`
	EncodingContainer { keys: String },
	/// `self.<field> = try container.decode(<ty>.self, forKey: .<key>)`
	Decode {
		field: String,
		ty: String,
		key: String,
	},
	/// `self.<field> = try container.decodeIfPresent(<ty>.self, forKey: .<key>) ?? <default>`
	DecodeIfPresent {
		field: String,
		ty: String,
		key: String,
		default: Expr,
	},
	/// `try container.encode(self.<field>, forKey: .<key>)`
	Encode { field: String, key: String },
	Source(String),
}

impl Stmt {
	pub fn source(source: impl Into<String>) -> Self {
		Self::Source(source.into())
	}
}

impl fmt::Display for Stmt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DecodingContainer { keys } => {
				write!(f, "let container = try decoder.container(keyedBy: {keys}.self)")
			}
			Self::EncodingContainer { keys } => {
				write!(f, "var container = encoder.container(keyedBy: {keys}.self)")
			}
			Self::Decode { field, ty, key } => {
				write!(
					f,
					"self.{field} = try container.decode({ty}.self, forKey: .{key})"
				)
			}
			Self::DecodeIfPresent {
				field,
				ty,
				key,
				default,
			} => {
				write!(
					f,
					"self.{field} = try container.decodeIfPresent({ty}.self, forKey: .{key}) ?? {default}"
				)
			}
			Self::Encode { field, key } => {
				write!(f, "try container.encode(self.{field}, forKey: .{key})")
			}
			Self::Source(source) => f.write_str(source),
		}
	}
}
