// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::address::Address;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),

    #[error("invalid mask length {0}, must be between 0 and 32")]
    InvalidMaskLength(u8),

    #[error("netmask {0} does not have contiguous leading ones")]
    InvalidNetmask(Address),

    #[error("unknown source {0}")]
    UnknownSource(String),

    #[error("no route found for {0}")]
    NoRouteFound(Address),

    #[error("io error {0}")]
    Io(#[from] std::io::Error),

    #[error("config error {0}")]
    Config(#[from] serde_json::Error),
}
