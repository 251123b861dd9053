// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Longest-prefix-match route selection for IPv4.
//!
//! Given a destination address and a set of candidate routes, the crate
//! picks the most specific route whose network contains the destination.
//! Candidate routes are kept per source identifier in a [`RouteTable`],
//! which may be shared between threads through a [`Fib`] handle.

pub mod address;
pub mod bestpath;
pub mod config;
pub mod error;
pub mod fib;
pub mod log;
pub mod prefix;
pub mod table;
pub mod types;

pub use address::Address;
pub use bestpath::bestpath;
pub use config::RouteConfig;
pub use error::Error;
pub use fib::Fib;
pub use table::RouteTable;
pub use types::*;

#[cfg(test)]
mod proptest;

pub const COMPONENT_LPM: &str = "lpm";
pub const MOD_FIB: &str = "fib";
pub const MOD_CONFIG: &str = "config";
