use crate::{
	diagnostic::{Change, Diagnostic, FixIt, MessageId},
	directive::Directive,
	syntax::{Attribute, DeclKind},
};

/// Reasons an expansion produces no declarations.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ExpansionError {
	#[error("@{directive} only supports struct or class at this time")]
	UnsupportedDeclarationKind { directive: Directive, kind: DeclKind },
	#[error("@Codable is currently unavailable change to @Decodable and @Encodable")]
	IllegalDirectiveCombination {
		combined: Attribute,
		replacement: Vec<Attribute>,
	},
	#[error("@CodingKey requires a single string literal argument")]
	InvalidCodingKey,
	#[error("@CodingKey can only be applied to a stored property with a single binding")]
	CodingKeyOnUnsupportedMember,
}

impl ExpansionError {
	pub fn message_id(&self) -> MessageId {
		match self {
			Self::UnsupportedDeclarationKind { .. } => MessageId::new("unsupportedType"),
			Self::IllegalDirectiveCombination { .. } => {
				MessageId::new("unsupportedMacrosCombination")
			}
			Self::InvalidCodingKey => MessageId::new("invalidCodingKey"),
			Self::CodingKeyOnUnsupportedMember => MessageId::new("unsupportedCodingKeyAttachment"),
		}
	}

	/// Convert to a diagnostic anchored to `node`.
	pub fn into_diagnostic(self, node: &Attribute) -> Diagnostic {
		let diagnostic = Diagnostic::error(node, self.message_id(), self.to_string());
		match self {
			Self::IllegalDirectiveCombination {
				combined,
				replacement,
			} => diagnostic.with_fix_it(FixIt {
				message: "Change @Codable to @Decodable and @Encodable".to_string(),
				changes: vec![Change::ReplaceAttribute {
					old: combined,
					new: replacement,
				}],
			}),
			_ => diagnostic,
		}
	}
}
