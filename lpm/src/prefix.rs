// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Prefix mask arithmetic.
//!
//! Membership of an address in a network is decided by [`within_network`]:
//! both addresses are masked to the prefix length and compared for exact
//! equality. [`common_prefix_length`] is a diagnostic metric only and is
//! never used to decide membership.

use crate::address::Address;
use crate::error::Error;
use crate::types::Prefix4;

/// The longest valid IPv4 prefix length.
pub const MAX_PREFIX_LENGTH: u8 = 32;

pub(crate) const fn mask_bits(length: u8) -> u32 {
    match length {
        0 => 0,
        _ => (!0u32) << (MAX_PREFIX_LENGTH - length),
    }
}

pub(crate) fn check_length(length: u8) -> Result<u8, Error> {
    if length > MAX_PREFIX_LENGTH {
        return Err(Error::InvalidMaskLength(length));
    }
    Ok(length)
}

/// The mask with the top `length` bits set, e.g. `mask(20)` is
/// `255.255.240.0`.
pub fn mask(length: u8) -> Result<Address, Error> {
    Ok(Address::from_bits(mask_bits(check_length(length)?)))
}

/// Bitwise AND of `addr` and `mask`.
pub fn apply(addr: Address, mask: Address) -> Address {
    Address::from_bits(addr.to_bits() & mask.to_bits())
}

/// Whether `addr` falls inside `network/length`. Bits of `network` past
/// `length` are ignored.
pub fn within_network(
    addr: Address,
    network: Address,
    length: u8,
) -> Result<bool, Error> {
    Ok(Prefix4::new(network, length)?.contains(addr))
}

/// The number of leading bits `a` and `b` share, counting from the most
/// significant bit up to the first difference.
pub fn common_prefix_length(a: Address, b: Address) -> u32 {
    (a.to_bits() ^ b.to_bits()).leading_zeros()
}

/// The prefix length expressed by a dotted-quad netmask such as
/// `255.255.254.0`. The set bits must be contiguous from the most
/// significant bit.
pub fn netmask_length(netmask: Address) -> Result<u8, Error> {
    let ones = netmask.to_bits().leading_ones() as u8;
    if mask_bits(ones) != netmask.to_bits() {
        return Err(Error::InvalidNetmask(netmask));
    }
    Ok(ones)
}
