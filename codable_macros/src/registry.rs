use std::collections::BTreeMap;

use crate::macros::{
	AttachedMacro, CodableMacro, CodingKeyMacro, DecodableMacro, EncodableMacro, PeerMacro,
};

enum Handler {
	Attached(Box<dyn AttachedMacro>),
	Peer(Box<dyn PeerMacro>),
}

/// Macro implementations, by the attribute name they are invoked with.
#[derive(Default)]
pub struct MacroRegistry {
	handlers: BTreeMap<&'static str, Handler>,
}

impl MacroRegistry {
	/// Create empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create registry with `Decodable`, `Encodable`, `Codable` and `CodingKey`.
	pub fn standard() -> Self {
		let mut registry = Self::new();
		registry
			.register_attached(DecodableMacro)
			.register_attached(EncodableMacro)
			.register_attached(CodableMacro)
			.register_peer(CodingKeyMacro);
		registry
	}

	/// Register an attached macro under its name.
	/// Replaces any macro already registered with that name.
	pub fn register_attached<M: AttachedMacro + 'static>(&mut self, handler: M) -> &mut Self {
		self.handlers.insert(handler.name(), Handler::Attached(Box::new(handler)));
		self
	}

	/// Register a peer macro under its name.
	/// Replaces any macro already registered with that name.
	pub fn register_peer<M: PeerMacro + 'static>(&mut self, handler: M) -> &mut Self {
		self.handlers.insert(handler.name(), Handler::Peer(Box::new(handler)));
		self
	}

	pub fn attached(&self, name: &str) -> Option<&dyn AttachedMacro> {
		match self.handlers.get(name) {
			Some(Handler::Attached(handler)) => Some(handler.as_ref()),
			_ => None,
		}
	}

	pub fn peer(&self, name: &str) -> Option<&dyn PeerMacro> {
		match self.handlers.get(name) {
			Some(Handler::Peer(handler)) => Some(handler.as_ref()),
			_ => None,
		}
	}

	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.handlers.contains_key(name)
	}

	/// Registered names, in alphabetical order.
	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.handlers.keys().copied()
	}
}
