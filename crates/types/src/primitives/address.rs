//! EVM address newtype with boundary validation

use serde::Deserialize;
use thiserror::Error;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Pattern enforced on every address crossing the HTTP boundary.
pub const ADDRESS_HEX_PATTERN: &str = "^0x[a-fA-F0-9]{40}$";

/// Errors raised when constructing an [`Address`]
#[derive(Error, Debug, PartialEq)]
pub enum AddressError {
	#[error("invalid address: {value}")]
	Invalid { value: String },
}

/// A 20-byte hex address, mixed- or lowercase
///
/// Adapters may assume addresses are well-formed: validation happens
/// once, at construction. Equality is case-insensitive.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Address(String);

impl Address {
	/// Create a new address, validating the `0x`-prefixed hex format
	pub fn new(value: impl Into<String>) -> Result<Self, AddressError> {
		let value = value.into();
		if !is_valid(&value) {
			return Err(AddressError::Invalid { value });
		}
		Ok(Self(value))
	}

	/// Get the raw string value, original casing preserved
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Lowercase form, used for case-insensitive comparisons and keys
	pub fn to_lowercase(&self) -> String {
		self.0.to_lowercase()
	}
}

fn is_valid(value: &str) -> bool {
	let hex = match value.strip_prefix("0x") {
		Some(hex) => hex,
		None => return false,
	};
	hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

impl PartialEq for Address {
	fn eq(&self, other: &Self) -> bool {
		self.0.eq_ignore_ascii_case(&other.0)
	}
}

impl Eq for Address {}

impl std::fmt::Display for Address {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl TryFrom<&str> for Address {
	type Error = AddressError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl serde::Serialize for Address {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> serde::Deserialize<'de> for Address {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		Self::new(value).map_err(serde::de::Error::custom)
	}
}
