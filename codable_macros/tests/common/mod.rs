#![allow(dead_code)]

use codable_macros::{
	expand_declaration,
	syntax::{Attribute, DeclGroup, DeclKind, Expr, InitializerDecl, Modifier, VariableDecl},
	ExpandedSource, MacroRegistry,
};

pub fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

pub fn attribute(name: &str) -> Attribute {
	Attribute::new(name)
}

pub fn coding_key(key: &str) -> Attribute {
	Attribute::new("CodingKey").with_argument(Expr::string(key))
}

/// `<modifiers> <kind> User` with given directives attached and no members.
pub fn declaration(kind: DeclKind, directives: &[&str], modifiers: &[Modifier]) -> DeclGroup {
	let decl = directives
		.iter()
		.fold(DeclGroup::new(kind, "User"), |decl, name| {
			decl.attribute(attribute(name))
		});
	modifiers
		.iter()
		.fold(decl, |decl, modifier| decl.modifier(*modifier))
}

/// Declaration with fields `let id: String` and `var username: String`.
pub fn user(kind: DeclKind, directives: &[&str], modifiers: &[Modifier]) -> DeclGroup {
	declaration(kind, directives, modifiers)
		.member(VariableDecl::constant("id", "String"))
		.member(VariableDecl::variable("username", "String"))
}

/// Declaration with fields `let id: String` and
/// `@CodingKey("user_name") var username: String`.
pub fn user_with_coding_key(
	kind: DeclKind,
	directives: &[&str],
	modifiers: &[Modifier],
) -> DeclGroup {
	declaration(kind, directives, modifiers)
		.member(VariableDecl::constant("id", "String"))
		.member(VariableDecl::variable("username", "String").attribute(coding_key("user_name")))
}

/// `public init() {}`
pub fn public_init() -> InitializerDecl {
	InitializerDecl::new(vec![]).modifier(Modifier::Public)
}

pub fn expand(decl: &DeclGroup) -> ExpandedSource {
	init_logger();
	expand_declaration(decl, &MacroRegistry::standard())
}

/// Expand `decl` and compare rendered output with `expected`.
/// Expansion must not produce any diagnostics.
pub fn assert_expansion(decl: &DeclGroup, expected: &str) {
	let expanded = expand(decl);
	assert!(
		expanded.diagnostics.is_empty(),
		"Unexpected diagnostics: {:?}",
		expanded.diagnostics
	);
	assert_eq!(expanded.to_string(), expected);
}
