//! Syntax tree of the host language.
//!
//! Declarations are consumed from the host as-is, and synthesized members are
//! built from the same node types so the host can splice them in.

mod decl;
pub use decl::{
	AccessorBlock, Attribute, BindingSpecifier, DeclGroup, DeclKind, EnumCase, EnumDecl, Expr,
	ExtensionDecl, FunctionDecl, InitializerDecl, Member, Modifier, Parameter, Pattern,
	PatternBinding, VariableDecl,
};

mod stmt;
pub use stmt::Stmt;

mod printer;
pub use printer::{PrintOptions, Printer};
