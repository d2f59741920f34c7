use codable_macros::syntax::{
	AccessorBlock, BindingSpecifier, DeclKind, Expr, Member, Modifier, PatternBinding, Stmt,
	VariableDecl,
};

mod common;
use common::{assert_expansion, coding_key, declaration, expand};

#[test]
fn custom_key_with_defaulted_field() {
	let decl = declaration(DeclKind::Struct, &["Decodable", "Encodable"], &[Modifier::Public])
		.member(VariableDecl::constant("id", "String"))
		.member(VariableDecl::constant("name", "String"))
		.member(
			VariableDecl::variable("tag", "String")
				.attribute(coding_key("user_tag"))
				.with_default(Expr::string("")),
		);
	let expected = r#"public struct User {
    let id: String

    let name: String

    var tag: String = ""
}

extension User: Decodable {
    public enum CodingKeys: String, CodingKey {
        case id
        case name
        case tag = "user_tag"
    }

    public init(from decoder: any Decoder) throws {
        let container = try decoder.container(keyedBy: CodingKeys.self)
        self.id = try container.decode(String.self, forKey: .id)
        self.name = try container.decode(String.self, forKey: .name)
        self.tag = try container.decodeIfPresent(String.self, forKey: .tag) ?? ""
    }
}

extension User: Encodable {
    public func encode(to encoder: any Encoder) throws {
        var container = encoder.container(keyedBy: CodingKeys.self)
        try container.encode(self.id, forKey: .id)
        try container.encode(self.name, forKey: .name)
        try container.encode(self.tag, forKey: .tag)
    }
}"#;
	assert_expansion(&decl, expected);
}

#[test]
fn field_order_is_declaration_order() {
	let names = ["zeta", "alpha", "mu", "beta"];
	let decl = names.iter().fold(
		declaration(DeclKind::Struct, &["Encodable"], &[]),
		|decl, name| decl.member(VariableDecl::variable(*name, "Int")),
	);
	let expanded = expand(&decl);

	let function = match expanded.extensions[0].members.as_slice() {
		[Member::Enum(keys), Member::Function(function)] => {
			let cases = keys.cases.iter().map(|case| case.name.as_str()).collect::<Vec<_>>();
			assert_eq!(cases, names);
			function
		}
		members => panic!("Unexpected members: {:?}", members),
	};
	let encoded = function
		.body
		.iter()
		.filter_map(|stmt| match stmt {
			Stmt::Encode { field, .. } => Some(field.as_str()),
			_ => None,
		})
		.collect::<Vec<_>>();
	assert_eq!(encoded, names);
}

#[test]
fn only_stored_instance_properties_are_fields() {
	let decl = declaration(DeclKind::Class, &["Decodable"], &[Modifier::Final])
		.member(VariableDecl::constant("shared", "User").modifier(Modifier::Static))
		.member(VariableDecl::variable("count", "Int").modifier(Modifier::Class))
		.member(
			VariableDecl::variable("upper", "String")
				.with_accessor(AccessorBlock("id.uppercased()".into())),
		)
		.member(VariableDecl::new(
			BindingSpecifier::Var,
			vec![PatternBinding::typed("x", "Int"), PatternBinding::typed("y", "Int")],
		))
		.member(VariableDecl::constant("id", "String"));
	let expected = r#"final class User {
    static let shared: User

    class var count: Int

    var upper: String { id.uppercased() }

    var x: Int, y: Int

    let id: String

    init(from decoder: any Decoder) throws {
        let container = try decoder.container(keyedBy: CodingKeys.self)
        self.id = try container.decode(String.self, forKey: .id)
    }
}

extension User: Decodable {
    enum CodingKeys: String, CodingKey {
        case id
    }
}"#;
	assert_expansion(&decl, expected);
}

#[test]
fn access_level_is_propagated() {
	let cases: [(&[Modifier], &str); 6] = [
		(&[Modifier::Public], "public "),
		(&[Modifier::Open], "public "),
		(&[Modifier::FilePrivate], "fileprivate "),
		(&[Modifier::Private], "private "),
		(&[Modifier::Internal], ""),
		(&[Modifier::Package], ""),
	];
	for (modifiers, prefix) in cases {
		let decl = declaration(DeclKind::Struct, &["Decodable", "Encodable"], modifiers)
			.member(VariableDecl::constant("id", "String"));
		let expanded = expand(&decl);
		assert!(expanded.diagnostics.is_empty());

		let rendered = expanded.to_string();
		for header in [
			"enum CodingKeys: String, CodingKey {",
			"init(from decoder: any Decoder) throws {",
			"func encode(to encoder: any Encoder) throws {",
		] {
			let line = format!("\n    {}{}\n", prefix, header);
			assert!(rendered.contains(&line), "Missing `{}` in:\n{}", line, rendered);
		}
	}
}

#[test]
fn class_access_level_and_required() {
	let decl = declaration(DeclKind::Class, &["Decodable"], &[Modifier::FilePrivate])
		.member(VariableDecl::constant("id", "String"));
	let expanded = expand(&decl);
	let rendered = expanded.to_string();
	assert!(rendered.contains("\n    fileprivate required init(from decoder: any Decoder) throws {\n"));
	assert!(rendered.contains("\n    fileprivate enum CodingKeys: String, CodingKey {\n"));
}

#[test]
fn expansion_is_deterministic() {
	let decl = declaration(DeclKind::Class, &["Decodable", "Encodable"], &[Modifier::Public])
		.member(VariableDecl::constant("id", "String"))
		.member(VariableDecl::variable("score", "Double").with_default(Expr::source(".pi")));
	assert_eq!(expand(&decl), expand(&decl));
}
