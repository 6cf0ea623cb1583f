//! Shared value types used by every provider adapter

pub mod address;
pub mod decimal;

pub use address::{Address, AddressError, ADDRESS_HEX_PATTERN};
pub use decimal::{Decimal, DecimalError, WEI_PATTERN};
