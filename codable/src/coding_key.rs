use std::fmt;

/// Key identifying a field in keyed containers.
///
/// Implemented by the `__CodingKeys` enum `#[derive(Decodable)]` and
/// `#[derive(Encodable)]` generate, one variant per field.
pub trait CodingKey {
	/// Key the field is stored under in encoded data.
	fn string_value(&self) -> &'static str;
}

/// One step from the root of encoded data to a nested value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
	Key(String),
	Index(usize),
}

impl From<&str> for PathSegment {
	fn from(key: &str) -> Self {
		Self::Key(key.to_string())
	}
}

impl From<usize> for PathSegment {
	fn from(index: usize) -> Self {
		Self::Index(index)
	}
}

/// Location of a value within encoded data.
///
/// Displayed as `$` for the root, then `.key` for object members and
/// `[index]` for array elements e.g. `$.users[2].name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodingPath(Vec<PathSegment>);

impl CodingPath {
	#[inline]
	pub fn root() -> Self {
		Self::default()
	}

	/// Get new path with `segment` added to end of this one.
	pub fn appending(&self, segment: impl Into<PathSegment>) -> Self {
		let mut segments = Vec::with_capacity(self.0.len() + 1);
		segments.extend_from_slice(&self.0);
		segments.push(segment.into());
		Self(segments)
	}

	#[inline]
	pub fn segments(&self) -> &[PathSegment] {
		&self.0
	}

	#[inline]
	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for CodingPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("$")?;
		for segment in &self.0 {
			match segment {
				PathSegment::Key(key) => write!(f, ".{}", key)?,
				PathSegment::Index(index) => write!(f, "[{}]", index)?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn displays_path() {
		let path = CodingPath::root();
		assert!(path.is_root());
		assert_eq!(path.to_string(), "$");

		let path = path.appending("users").appending(2).appending("name");
		assert_eq!(path.to_string(), "$.users[2].name");
		assert_eq!(path.segments().len(), 3);
	}
}
