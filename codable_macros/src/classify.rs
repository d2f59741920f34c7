use crate::{
	directive::Directive,
	error::ExpansionError,
	syntax::{DeclGroup, DeclKind, Modifier},
};

/// Kind of an annotated declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
	/// Struct. No subclassing.
	ValueType,
	/// Class. `sealed` if marked `final`.
	ReferenceType { sealed: bool },
}

impl Classification {
	#[inline]
	pub fn is_sealed(self) -> bool {
		matches!(self, Self::ReferenceType { sealed: true })
	}
}

/// Classify `decl` for expansion of `directive`.
pub fn classify(decl: &DeclGroup, directive: Directive) -> Result<Classification, ExpansionError> {
	match decl.kind {
		DeclKind::Struct => Ok(Classification::ValueType),
		DeclKind::Class => Ok(Classification::ReferenceType {
			sealed: decl.has_modifier(Modifier::Final),
		}),
		kind => Err(ExpansionError::UnsupportedDeclarationKind { directive, kind }),
	}
}

/// Access level propagated to synthesized members.
///
/// `internal` (explicit or implied) and `package` map to no modifier at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessLevel {
	Public,
	FilePrivate,
	Private,
}

impl AccessLevel {
	/// Reduce the access modifiers of a declaration. First match wins.
	pub fn from_modifiers(modifiers: &[Modifier]) -> Option<Self> {
		modifiers.iter().find_map(|modifier| match modifier {
			Modifier::Open | Modifier::Public => Some(Self::Public),
			Modifier::FilePrivate => Some(Self::FilePrivate),
			Modifier::Private => Some(Self::Private),
			_ => None,
		})
	}

	pub fn modifier(self) -> Modifier {
		match self {
			Self::Public => Modifier::Public,
			Self::FilePrivate => Modifier::FilePrivate,
			Self::Private => Modifier::Private,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classifies_structs_and_classes() {
		let decl = DeclGroup::new(DeclKind::Struct, "User");
		assert_eq!(classify(&decl, Directive::Decodable), Ok(Classification::ValueType));

		let decl = DeclGroup::new(DeclKind::Class, "User").modifier(Modifier::Public);
		assert_eq!(
			classify(&decl, Directive::Decodable),
			Ok(Classification::ReferenceType { sealed: false })
		);

		let decl = decl.modifier(Modifier::Final);
		let classification = classify(&decl, Directive::Decodable).unwrap();
		assert!(classification.is_sealed());
	}

	#[test]
	fn rejects_other_kinds() {
		for kind in [DeclKind::Enum, DeclKind::Protocol, DeclKind::Actor, DeclKind::Extension] {
			let decl = DeclGroup::new(kind, "User");
			assert_eq!(
				classify(&decl, Directive::Encodable),
				Err(ExpansionError::UnsupportedDeclarationKind {
					directive: Directive::Encodable,
					kind
				})
			);
		}
	}

	#[test]
	fn reduces_access_modifiers() {
		assert_eq!(
			AccessLevel::from_modifiers(&[Modifier::Final, Modifier::Open]),
			Some(AccessLevel::Public)
		);
		assert_eq!(
			AccessLevel::from_modifiers(&[Modifier::FilePrivate]),
			Some(AccessLevel::FilePrivate)
		);
		assert_eq!(AccessLevel::from_modifiers(&[Modifier::Private]), Some(AccessLevel::Private));
		assert_eq!(AccessLevel::from_modifiers(&[Modifier::Internal]), None);
		assert_eq!(AccessLevel::from_modifiers(&[Modifier::Package]), None);
		assert_eq!(AccessLevel::from_modifiers(&[]), None);
	}
}
