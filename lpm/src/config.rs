// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Route table configuration.
//!
//! A configuration document lists the candidate routes of every source:
//!
//! ```json
//! {
//!     "routes": [
//!         {
//!             "source": "172.168.0.2",
//!             "network": "172.169.0.0",
//!             "prefix_length": 16,
//!             "metadata": "eth1"
//!         }
//!     ]
//! }
//! ```
//!
//! Routes are inserted in document order, which is also the order used to
//! break ties between equally specific routes of the same source.

use crate::address::Address;
use crate::error::Error;
use crate::log::config_log;
use crate::table::RouteTable;
use crate::types::RouteEntry;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use slog::Logger;
use std::fmt::Display;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig<K, M> {
    pub routes: Vec<ConfiguredRoute<K, M>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredRoute<K, M> {
    pub source: K,
    pub network: Address,
    pub prefix_length: u8,
    pub metadata: M,
}

impl<K, M> RouteConfig<K, M>
where
    K: DeserializeOwned,
    M: DeserializeOwned,
{
    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl<K, M> RouteConfig<K, M>
where
    K: Ord + Display,
{
    /// Build a route table from this configuration. Fails on the first
    /// route with an invalid prefix length.
    pub fn into_table(self, log: &Logger) -> Result<RouteTable<K, M>, Error> {
        let mut table = RouteTable::new();
        for (i, r) in self.routes.into_iter().enumerate() {
            let entry = match RouteEntry::new(
                r.network,
                r.prefix_length,
                r.metadata,
            ) {
                Ok(entry) => entry,
                Err(e) => {
                    config_log!(log, error, "invalid route {}: {}", i, e;
                        "source" => r.source.to_string(),
                        "network" => r.network.to_string()
                    );
                    return Err(e);
                }
            };
            if !entry.prefix.host_bits_are_unset() {
                config_log!(log, debug, "route {} has host bits set", i;
                    "source" => r.source.to_string(),
                    "prefix" => entry.prefix.to_string(),
                    "network" => entry.prefix.network().to_string()
                );
            }
            table.insert(r.source, entry);
        }
        config_log!(log, info, "built route table";
            "sources" => table.len(),
            "routes" => table.route_count()
        );
        Ok(table)
    }
}
