//! Validated email address types.
//!
//! Addresses arriving from rule configuration are plain strings; everything
//! past the validation boundary works with [`Address`], which is guaranteed
//! to hold a single well-formed `local@domain` mailbox.

use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while validating an address string.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The input could not be parsed as an address at all.
    #[error("Unparseable address {0:?}: {1}")]
    Syntax(String, String),

    /// The input parsed, but not to exactly one mailbox (empty input,
    /// a group, or an address list).
    #[error("Expected a single address, got {0:?}")]
    NotSingle(String),

    /// The mailbox is missing a local part or a domain.
    #[error("Address {0:?} is missing a local part or domain")]
    Incomplete(String),
}

/// A single validated email address.
///
/// Stored in normalized `local@domain` form (display names stripped).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse and validate a single mailbox.
    ///
    /// Accepts both bare addresses (`user@example.com`) and display-name
    /// forms (`"User" <user@example.com>`); the latter are normalized to
    /// the bare address.
    ///
    /// # Errors
    /// Returns an [`AddressError`] if the input is not exactly one
    /// well-formed mailbox.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let parsed = mailparse::addrparse(input)
            .map_err(|e| AddressError::Syntax(input.to_string(), e.to_string()))?;

        let single = parsed
            .extract_single_info()
            .ok_or_else(|| AddressError::NotSingle(input.to_string()))?;

        match single.addr.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(single.addr))
            }
            _ => Err(AddressError::Incomplete(input.to_string())),
        }
    }

    /// The normalized `local@domain` form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

/// An ordered list of validated addresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressList(pub Vec<Address>);

impl AddressList {
    /// Parse every entry, failing on the first invalid one.
    ///
    /// # Errors
    /// Returns the [`AddressError`] of the first entry that fails to parse.
    pub fn parse<I, S>(inputs: I) -> Result<Self, AddressError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|input| Address::parse(input.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Display for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, addr) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            Display::fmt(addr, f)?;
        }
        Ok(())
    }
}

impl From<Vec<Address>> for AddressList {
    fn from(value: Vec<Address>) -> Self {
        Self(value)
    }
}

impl Deref for AddressList {
    type Target = Vec<Address>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AddressList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
