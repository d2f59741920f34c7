//! Synthesis of the key enumeration, decoding initializer and encode method.

use crate::{classify::AccessLevel, syntax::Modifier};

mod coding_keys;
pub use coding_keys::{build_coding_keys, CODING_KEYS};

mod decode;
pub use decode::{build_decode_body, build_decode_initializer};

mod encode;
pub use encode::{build_encode_body, build_encode_function};

fn access_modifiers(access_level: Option<AccessLevel>) -> Vec<Modifier> {
	access_level.map(AccessLevel::modifier).into_iter().collect()
}
