//! Code generation engine for the `Decodable` and `Encodable` macros.
//!
//! Given a struct or class declaration annotated with `@Decodable` and / or
//! `@Encodable`, synthesizes:
//!
//! * `enum CodingKeys: String, CodingKey`, one case per stored property.
//! * `init(from decoder: any Decoder) throws`.
//! * `func encode(to encoder: any Encoder) throws`.
//!
//! ```
//! use codable_macros::{
//! 	expand_declaration,
//! 	syntax::{Attribute, DeclGroup, DeclKind, Expr, Modifier, VariableDecl},
//! 	MacroRegistry,
//! };
//!
//! let user = DeclGroup::new(DeclKind::Struct, "User")
//! 	.attribute(Attribute::new("Decodable"))
//! 	.modifier(Modifier::Public)
//! 	.member(VariableDecl::constant("id", "String"))
//! 	.member(
//! 		VariableDecl::variable("username", "String")
//! 			.attribute(Attribute::new("CodingKey").with_argument(Expr::string("user_tag"))),
//! 	);
//!
//! let expanded = expand_declaration(&user, &MacroRegistry::standard());
//! assert!(expanded.diagnostics.is_empty());
//! assert!(expanded.to_string().contains(r#"case username = "user_tag""#));
//! ```

pub mod syntax;

mod classify;
pub use classify::{classify, AccessLevel, Classification};

mod context;
pub use context::DeclarationContext;

mod diagnostic;
pub use diagnostic::{
	Change, Diagnostic, FixIt, MacroExpansionContext, MessageId, Severity, DOMAIN,
};

mod directive;
pub use directive::{combined_directive, resolve, Capabilities, Capability, Directive};

mod error;
pub use error::ExpansionError;

mod expand;
pub use expand::{expand_declaration, ExpandedSource};

mod field;
pub use field::{coding_key, extract, field_from_variable, FieldDescriptor};

pub mod macros;

mod placement;
pub use placement::{place, Expansion};

mod registry;
pub use registry::MacroRegistry;

pub mod synth;
