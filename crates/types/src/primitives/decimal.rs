//! Arbitrary-precision decimal amounts represented as strings
//!
//! Token amounts and prices are never handled as floating-point values.
//! The wire representation stays a base-10 string; arithmetic and
//! comparison go through `bigdecimal`.

use std::cmp::Ordering;
use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::Deserialize;
use thiserror::Error;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Pattern accepted for wei-denominated amounts at the HTTP boundary.
pub const WEI_PATTERN: &str = "^\\d+$";

/// Errors raised when constructing a [`Decimal`]
#[derive(Error, Debug, PartialEq)]
pub enum DecimalError {
	#[error("decimal value cannot be empty")]
	Empty,

	#[error("invalid decimal value: {value}")]
	Invalid { value: String },
}

/// Decimal value represented as a string to preserve precision
///
/// Accepts signed and fractional base-10 forms (`-12`, `3.5`, `1000000`).
/// Equality and ordering compare the numeric value, so `1.0 == 1`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Decimal(String);

impl Decimal {
	/// Create a new decimal from a string, validating the format
	pub fn new(value: impl Into<String>) -> Result<Self, DecimalError> {
		let value = value.into();
		validate(&value)?;
		Ok(Self(value))
	}

	/// Get the raw string value
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Parse into a `BigDecimal` for arithmetic
	///
	/// Infallible after construction: the string was validated.
	pub fn value(&self) -> BigDecimal {
		BigDecimal::from_str(&self.0).unwrap_or_else(|_| BigDecimal::zero())
	}

	/// Build a decimal from a `BigDecimal`, normalizing trailing zeros
	pub fn from_bigdecimal(value: &BigDecimal) -> Self {
		let normalized = value.normalized();
		// A negative scale would render in scientific notation; rescale
		// so the string stays plain base-10.
		let normalized = if normalized.fractional_digit_count() < 0 {
			normalized.with_scale(0)
		} else {
			normalized
		};
		Self(normalized.to_string())
	}

	/// Whether the value is numerically zero
	pub fn is_zero(&self) -> bool {
		self.value().is_zero()
	}

	/// Whether the string is an unsigned integer (a valid wei amount)
	pub fn is_wei(&self) -> bool {
		!self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_digit())
	}

	/// Convert a wei-denominated amount into token units
	pub fn from_wei(wei: &Decimal, decimals: u8) -> Self {
		// Multiplying by 10^-decimals is exact; division is not.
		let scaled = wei.value() * BigDecimal::new(BigInt::from(1), i64::from(decimals));
		Self::from_bigdecimal(&scaled)
	}

	/// Convert a token-unit amount into wei, truncating sub-wei dust
	pub fn to_wei(&self, decimals: u8) -> Self {
		let scaled = self.value() * BigDecimal::new(BigInt::from(1), -i64::from(decimals));
		Self(scaled.with_scale_round(0, RoundingMode::Down).to_string())
	}
}

fn validate(value: &str) -> Result<(), DecimalError> {
	if value.is_empty() {
		return Err(DecimalError::Empty);
	}

	let digits = value.strip_prefix('-').unwrap_or(value);
	let (integer, fraction) = match digits.split_once('.') {
		Some((i, f)) => (i, Some(f)),
		None => (digits, None),
	};

	let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
	if !all_digits(integer) || !fraction.map_or(true, all_digits) {
		return Err(DecimalError::Invalid {
			value: value.to_string(),
		});
	}

	Ok(())
}

impl PartialEq for Decimal {
	fn eq(&self, other: &Self) -> bool {
		self.value() == other.value()
	}
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Decimal {
	fn cmp(&self, other: &Self) -> Ordering {
		self.value().cmp(&other.value())
	}
}

impl std::fmt::Display for Decimal {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl TryFrom<&str> for Decimal {
	type Error = DecimalError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<u64> for Decimal {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

impl serde::Serialize for Decimal {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> serde::Deserialize<'de> for Decimal {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		Self::new(value).map_err(serde::de::Error::custom)
	}
}
