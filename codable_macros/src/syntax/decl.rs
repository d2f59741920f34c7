use std::fmt;

use super::Stmt;

/// An attribute attached to a declaration or member, e.g. `@CodingKey("user_tag")`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
	pub name: String,
	pub arguments: Vec<Expr>,
}

impl Attribute {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			arguments: Vec::new(),
		}
	}

	pub fn with_argument(mut self, argument: Expr) -> Self {
		self.arguments.push(argument);
		self
	}
}

/// An expression as written in source.
///
/// String literals are kept apart from other expressions because directives
/// read their content. Everything else is carried verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
	StringLiteral(String),
	Source(String),
}

impl Expr {
	pub fn string(content: impl Into<String>) -> Self {
		Self::StringLiteral(content.into())
	}

	pub fn source(source: impl Into<String>) -> Self {
		Self::Source(source.into())
	}

	/// Get content of a string literal, or `None` for any other expression.
	pub fn as_string_literal(&self) -> Option<&str> {
		match self {
			Self::StringLiteral(content) => Some(content),
			Self::Source(_) => None,
		}
	}
}

impl fmt::Display for Expr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::StringLiteral(content) => {
				f.write_str("\"")?;
				for c in content.chars() {
					match c {
						'"' => f.write_str("\\\"")?,
						'\\' => f.write_str("\\\\")?,
						'\n' => f.write_str("\\n")?,
						'\t' => f.write_str("\\t")?,
						'\r' => f.write_str("\\r")?,
						'\0' => f.write_str("\\0")?,
						c if c.is_control() => write!(f, "\\u{{{:x}}}", u32::from(c))?,
						c => write!(f, "{}", c)?,
					}
				}
				f.write_str("\"")
			}
			Self::Source(source) => f.write_str(source),
		}
	}
}

/// Declaration modifier keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
	Open,
	Public,
	Package,
	Internal,
	FilePrivate,
	Private,
	Final,
	Required,
	Override,
	Static,
	Class,
	Lazy,
	Mutating,
}

impl Modifier {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Open => "open",
			Self::Public => "public",
			Self::Package => "package",
			Self::Internal => "internal",
			Self::FilePrivate => "fileprivate",
			Self::Private => "private",
			Self::Final => "final",
			Self::Required => "required",
			Self::Override => "override",
			Self::Static => "static",
			Self::Class => "class",
			Self::Lazy => "lazy",
			Self::Mutating => "mutating",
		}
	}
}

/// Syntactic category of a declaration group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclKind {
	Struct,
	Class,
	Enum,
	Protocol,
	Actor,
	Extension,
}

impl DeclKind {
	pub fn keyword(self) -> &'static str {
		match self {
			Self::Struct => "struct",
			Self::Class => "class",
			Self::Enum => "enum",
			Self::Protocol => "protocol",
			Self::Actor => "actor",
			Self::Extension => "extension",
		}
	}
}

/// A type declaration with a member block, the node attached macros are applied to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclGroup {
	pub attributes: Vec<Attribute>,
	pub modifiers: Vec<Modifier>,
	pub kind: DeclKind,
	pub name: String,
	pub inherited: Vec<String>,
	pub members: Vec<Member>,
}

impl DeclGroup {
	pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
		Self {
			attributes: Vec::new(),
			modifiers: Vec::new(),
			kind,
			name: name.into(),
			inherited: Vec::new(),
			members: Vec::new(),
		}
	}

	pub fn attribute(mut self, attribute: Attribute) -> Self {
		self.attributes.push(attribute);
		self
	}

	pub fn modifier(mut self, modifier: Modifier) -> Self {
		self.modifiers.push(modifier);
		self
	}

	pub fn inherits(mut self, name: impl Into<String>) -> Self {
		self.inherited.push(name.into());
		self
	}

	pub fn member(mut self, member: impl Into<Member>) -> Self {
		self.members.push(member.into());
		self
	}

	#[inline]
	pub fn has_modifier(&self, modifier: Modifier) -> bool {
		self.modifiers.contains(&modifier)
	}

	/// Names of attached attributes, in source order.
	pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
		self.attributes.iter().map(|attribute| attribute.name.as_str())
	}
}

/// A member of a declaration's member block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Member {
	Variable(VariableDecl),
	Initializer(InitializerDecl),
	Function(FunctionDecl),
	Enum(EnumDecl),
	Type(DeclGroup),
}

impl From<VariableDecl> for Member {
	fn from(decl: VariableDecl) -> Self {
		Self::Variable(decl)
	}
}

impl From<InitializerDecl> for Member {
	fn from(decl: InitializerDecl) -> Self {
		Self::Initializer(decl)
	}
}

impl From<FunctionDecl> for Member {
	fn from(decl: FunctionDecl) -> Self {
		Self::Function(decl)
	}
}

impl From<EnumDecl> for Member {
	fn from(decl: EnumDecl) -> Self {
		Self::Enum(decl)
	}
}

impl From<DeclGroup> for Member {
	fn from(decl: DeclGroup) -> Self {
		Self::Type(decl)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingSpecifier {
	Let,
	Var,
}

impl BindingSpecifier {
	pub fn keyword(self) -> &'static str {
		match self {
			Self::Let => "let",
			Self::Var => "var",
		}
	}
}

/// `let` / `var` declaration. May bind more than one pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDecl {
	pub attributes: Vec<Attribute>,
	pub modifiers: Vec<Modifier>,
	pub specifier: BindingSpecifier,
	pub bindings: Vec<PatternBinding>,
}

impl VariableDecl {
	pub fn new(specifier: BindingSpecifier, bindings: Vec<PatternBinding>) -> Self {
		Self {
			attributes: Vec::new(),
			modifiers: Vec::new(),
			specifier,
			bindings,
		}
	}

	/// `let <name>: <ty>`
	pub fn constant(name: impl Into<String>, ty: impl Into<String>) -> Self {
		Self::new(
			BindingSpecifier::Let,
			vec![PatternBinding::typed(name, ty)],
		)
	}

	/// `var <name>: <ty>`
	pub fn variable(name: impl Into<String>, ty: impl Into<String>) -> Self {
		Self::new(
			BindingSpecifier::Var,
			vec![PatternBinding::typed(name, ty)],
		)
	}

	pub fn attribute(mut self, attribute: Attribute) -> Self {
		self.attributes.push(attribute);
		self
	}

	pub fn modifier(mut self, modifier: Modifier) -> Self {
		self.modifiers.push(modifier);
		self
	}

	/// Set initializer expression of the first binding.
	pub fn with_default(mut self, value: Expr) -> Self {
		if let Some(binding) = self.bindings.first_mut() {
			binding.initializer = Some(value);
		}
		self
	}

	/// Set accessor block of the first binding.
	pub fn with_accessor(mut self, accessor: AccessorBlock) -> Self {
		if let Some(binding) = self.bindings.first_mut() {
			binding.accessor = Some(accessor);
		}
		self
	}

	#[inline]
	pub fn has_modifier(&self, modifier: Modifier) -> bool {
		self.modifiers.contains(&modifier)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternBinding {
	pub pattern: Pattern,
	pub type_annotation: Option<String>,
	pub initializer: Option<Expr>,
	pub accessor: Option<AccessorBlock>,
}

impl PatternBinding {
	pub fn new(pattern: Pattern) -> Self {
		Self {
			pattern,
			type_annotation: None,
			initializer: None,
			accessor: None,
		}
	}

	pub fn typed(name: impl Into<String>, ty: impl Into<String>) -> Self {
		Self {
			type_annotation: Some(ty.into()),
			..Self::new(Pattern::Identifier(name.into()))
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
	Identifier(String),
	Tuple(Vec<String>),
	Wildcard,
}

/// Accessor block of a computed or observed property, kept as source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessorBlock(pub String);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
	pub first_name: String,
	pub second_name: Option<String>,
	pub ty: String,
}

impl Parameter {
	pub fn new(first_name: impl Into<String>, ty: impl Into<String>) -> Self {
		Self {
			first_name: first_name.into(),
			second_name: None,
			ty: ty.into(),
		}
	}

	pub fn labeled(
		first_name: impl Into<String>,
		second_name: impl Into<String>,
		ty: impl Into<String>,
	) -> Self {
		Self {
			second_name: Some(second_name.into()),
			..Self::new(first_name, ty)
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializerDecl {
	pub modifiers: Vec<Modifier>,
	pub parameters: Vec<Parameter>,
	pub throws: bool,
	pub body: Vec<Stmt>,
}

impl InitializerDecl {
	pub fn new(parameters: Vec<Parameter>) -> Self {
		Self {
			modifiers: Vec::new(),
			parameters,
			throws: false,
			body: Vec::new(),
		}
	}

	pub fn modifier(mut self, modifier: Modifier) -> Self {
		self.modifiers.push(modifier);
		self
	}

	pub fn statement(mut self, stmt: Stmt) -> Self {
		self.body.push(stmt);
		self
	}

	#[inline]
	pub fn has_modifier(&self, modifier: Modifier) -> bool {
		self.modifiers.contains(&modifier)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDecl {
	pub modifiers: Vec<Modifier>,
	pub name: String,
	pub parameters: Vec<Parameter>,
	pub throws: bool,
	pub body: Vec<Stmt>,
}

impl FunctionDecl {
	pub fn new(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
		Self {
			modifiers: Vec::new(),
			name: name.into(),
			parameters,
			throws: false,
			body: Vec::new(),
		}
	}

	pub fn modifier(mut self, modifier: Modifier) -> Self {
		self.modifiers.push(modifier);
		self
	}

	#[inline]
	pub fn has_modifier(&self, modifier: Modifier) -> bool {
		self.modifiers.contains(&modifier)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDecl {
	pub modifiers: Vec<Modifier>,
	pub name: String,
	pub inherited: Vec<String>,
	pub cases: Vec<EnumCase>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumCase {
	pub name: String,
	pub raw_value: Option<Expr>,
}

/// Satellite block attaching conformances and members outside the primary body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionDecl {
	pub extended_type: String,
	pub inherited: Vec<String>,
	pub members: Vec<Member>,
}

impl ExtensionDecl {
	pub fn new(extended_type: impl Into<String>, conformance: impl Into<String>) -> Self {
		Self {
			extended_type: extended_type.into(),
			inherited: vec![conformance.into()],
			members: Vec::new(),
		}
	}
}
