// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::address::Address;
use crate::error::Error;
use crate::prefix::{apply, check_length, mask_bits, netmask_length};
use std::fmt::{self, Formatter};

/// An IPv4 network: an address and a prefix length in `0..=32`.
///
/// Host bits of `value` are kept as given. Matching always masks both sides
/// before comparing, so `10.1.2.3/8` and `10.0.0.0/8` contain exactly the
/// same addresses.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Prefix4 {
    value: Address,
    length: u8,
}

impl Prefix4 {
    pub fn new(value: Address, length: u8) -> Result<Self, Error> {
        Ok(Self {
            value,
            length: check_length(length)?,
        })
    }

    /// Create a prefix from a network address and a dotted-quad netmask,
    /// e.g. `10.0.0.0` and `255.255.0.0`.
    pub fn with_netmask(
        value: Address,
        netmask: Address,
    ) -> Result<Self, Error> {
        Ok(Self {
            value,
            length: netmask_length(netmask)?,
        })
    }

    pub fn value(&self) -> Address {
        self.value
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn mask(&self) -> Address {
        Address::from_bits(mask_bits(self.length))
    }

    /// The network address with host bits cleared.
    pub fn network(&self) -> Address {
        apply(self.value, self.mask())
    }

    pub fn host_bits_are_unset(&self) -> bool {
        self.network() == self.value
    }

    /// Check whether `addr` falls inside this network.
    pub fn contains(&self, addr: Address) -> bool {
        let m = self.mask();
        apply(addr, m) == apply(self.value, m)
    }

    /// Check if this prefix is contained within another prefix.
    /// Returns true if this prefix is equal to or more specific than the other.
    pub fn within(&self, other: &Prefix4) -> bool {
        // A less specific prefix cannot be within a more specific one
        self.length >= other.length && other.contains(self.value)
    }
}

impl fmt::Display for Prefix4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value, self.length)
    }
}

/// A candidate route: a network prefix and whatever the caller wants to get
/// back when the route is selected. The metadata is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteEntry<M> {
    pub prefix: Prefix4,
    pub metadata: M,
}

impl<M> RouteEntry<M> {
    pub fn new(
        network: Address,
        length: u8,
        metadata: M,
    ) -> Result<Self, Error> {
        Ok(Self {
            prefix: Prefix4::new(network, length)?,
            metadata,
        })
    }

    pub fn with_netmask(
        network: Address,
        netmask: Address,
        metadata: M,
    ) -> Result<Self, Error> {
        Ok(Self {
            prefix: Prefix4::with_netmask(network, netmask)?,
            metadata,
        })
    }

    pub fn network(&self) -> Address {
        self.prefix.value()
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix.length()
    }

    /// Check whether this route's network contains `destination`.
    pub fn matches(&self, destination: Address) -> bool {
        self.prefix.contains(destination)
    }
}
