//! The named macros and the traits the host invokes them through.

use log::debug;

use crate::{
	context::DeclarationContext,
	diagnostic::MacroExpansionContext,
	directive::Capability,
	error::ExpansionError,
	placement::{place, Expansion},
	syntax::{Attribute, DeclGroup, Member},
};

mod codable;
pub use codable::CodableMacro;
mod coding_key;
pub use coding_key::CodingKeyMacro;
mod decodable;
pub use decodable::DecodableMacro;
mod encodable;
pub use encodable::EncodableMacro;

/// A macro attached to a type declaration.
pub trait AttachedMacro: Send + Sync {
	/// Attribute name the macro is invoked by.
	fn name(&self) -> &'static str;

	/// Expand the macro invoked by `node` on `declaration`.
	fn expand(
		&self,
		node: &Attribute,
		declaration: &DeclGroup,
		context: &mut dyn MacroExpansionContext,
	) -> Expansion;
}

/// A macro attached to a member, producing declarations next to it.
pub trait PeerMacro: Send + Sync {
	/// Attribute name the macro is invoked by.
	fn name(&self) -> &'static str;

	/// Expand the macro invoked by `node` on `member`.
	fn expand(
		&self,
		node: &Attribute,
		member: &Member,
		context: &mut dyn MacroExpansionContext,
	) -> Vec<Member>;
}

/// Shared expansion of `Decodable` and `Encodable`.
fn expand_capability(
	capability: Capability,
	node: &Attribute,
	declaration: &DeclGroup,
	context: &mut dyn MacroExpansionContext,
) -> Expansion {
	match DeclarationContext::analyze(declaration, capability.directive()) {
		Ok(decl_context) => place(&decl_context, capability),
		// Reported once, by the combined directive's own expansion
		Err(ExpansionError::IllegalDirectiveCombination { .. }) => {
			debug!("@{} on `{}` skipped", capability.directive(), declaration.name);
			Expansion::default()
		}
		Err(err) => {
			context.diagnose(err.into_diagnostic(node));
			Expansion::default()
		}
	}
}
