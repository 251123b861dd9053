// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dotted-quad IPv4 addresses.
//!
//! An [`Address`] is parsed with [`str::parse`] and formatted with
//! [`ToString`]. Parsing accepts exactly four dot-separated decimal octets;
//! leading zeros are accepted and dropped on formatting, so
//! `"010.0.0.1".parse::<Address>()?.to_string()` is `"10.0.0.1"`.

use crate::error::Error;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A 32-bit IPv4 address, most significant octet first.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Address(u32);

impl Address {
    /// The address `0.0.0.0`.
    pub const UNSPECIFIED: Self = Self(0);

    /// The address `255.255.255.255`.
    pub const BROADCAST: Self = Self(u32::MAX);

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self(u32::from_be_bytes([a, b, c, d]))
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b, c, d) =
            s.split('.').collect_tuple().ok_or_else(|| {
                Error::InvalidAddressFormat(format!(
                    "{s:?} is not four dot-separated octets"
                ))
            })?;

        Ok(Self::new(
            parse_octet(s, a)?,
            parse_octet(s, b)?,
            parse_octet(s, c)?,
            parse_octet(s, d)?,
        ))
    }
}

fn parse_octet(addr: &str, octet: &str) -> Result<u8, Error> {
    // u8::from_str would also take a leading '+'
    if octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidAddressFormat(format!(
            "{addr:?}: octet {octet:?} is not a decimal number"
        )));
    }
    octet.parse().map_err(|_| {
        Error::InvalidAddressFormat(format!(
            "{addr:?}: octet {octet} is out of range"
        ))
    })
}

impl TryFrom<String> for Address {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.to_string()
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Address> for u32 {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl From<[u8; 4]> for Address {
    fn from(value: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(value))
    }
}

impl From<Address> for [u8; 4] {
    fn from(value: Address) -> Self {
        value.octets()
    }
}

impl From<Ipv4Addr> for Address {
    fn from(value: Ipv4Addr) -> Self {
        Self(value.into())
    }
}

impl From<Address> for Ipv4Addr {
    fn from(value: Address) -> Self {
        Ipv4Addr::from(value.0)
    }
}
