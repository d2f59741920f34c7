use crate::CodingPath;

/// Failure decoding a value.
///
/// Any failure aborts the whole decode. No partially decoded value is returned.
#[derive(thiserror::Error, Debug)]
pub enum DecodingError {
	#[error("No value associated with key `{key}` at {path}")]
	KeyNotFound { key: &'static str, path: CodingPath },
	#[error("Expected {expected} but found {found} at {path}")]
	TypeMismatch {
		expected: &'static str,
		found: &'static str,
		path: CodingPath,
	},
	#[error("Data corrupted at {path}: {message}")]
	DataCorrupted { message: String, path: CodingPath },
	#[error("Invalid JSON: {0}")]
	Json(#[from] serde_json::Error),
}

impl DecodingError {
	/// Path of the value decoding failed at.
	/// `None` if input could not be parsed at all.
	pub fn coding_path(&self) -> Option<&CodingPath> {
		match self {
			Self::KeyNotFound { path, .. }
			| Self::TypeMismatch { path, .. }
			| Self::DataCorrupted { path, .. } => Some(path),
			Self::Json(_) => None,
		}
	}
}

/// Failure encoding a value.
#[derive(thiserror::Error, Debug)]
pub enum EncodingError {
	#[error("Cannot encode {value} at {path}")]
	InvalidValue { value: String, path: CodingPath },
	#[error("JSON output failed: {0}")]
	Json(#[from] serde_json::Error),
}

impl EncodingError {
	pub fn coding_path(&self) -> Option<&CodingPath> {
		match self {
			Self::InvalidValue { path, .. } => Some(path),
			Self::Json(_) => None,
		}
	}
}
