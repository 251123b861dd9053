// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The forwarding information base (fib).
//!
//! A [`Fib`] is a cloneable handle to a shared [`RouteTable`]. Lookups run
//! against an immutable snapshot of the table, taken under a short read
//! lock. Every update builds a new table and swaps it in under the write
//! lock, so a lookup never sees a partially updated candidate list. Readers
//! holding an older snapshot keep seeing it until they drop it.

use crate::address::Address;
use crate::config::RouteConfig;
use crate::error::Error;
use crate::log::fib_log;
use crate::table::RouteTable;
use crate::types::RouteEntry;
use lpm_common::{read_lock, write_lock};
use slog::Logger;
use std::borrow::Borrow;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub struct Fib<K, M> {
    /// The current table. Swapped wholesale on every update.
    table: Arc<RwLock<Arc<RouteTable<K, M>>>>,

    /// Bumped every time a new table is swapped in.
    generation: Arc<AtomicU64>,

    log: Logger,
}

impl<K, M> Fib<K, M>
where
    K: Ord + Clone + Display,
    M: Clone,
{
    pub fn new(log: Logger) -> Self {
        Self::with_table(RouteTable::new(), log)
    }

    pub fn with_table(table: RouteTable<K, M>, log: Logger) -> Self {
        Self {
            table: Arc::new(RwLock::new(Arc::new(table))),
            generation: Arc::new(AtomicU64::new(0)),
            log,
        }
    }

    /// The current table. The snapshot is not affected by later updates.
    pub fn snapshot(&self) -> Arc<RouteTable<K, M>> {
        read_lock!(self.table).clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Install `table` in place of the current table, returning the
    /// previous one.
    pub fn swap(&self, table: RouteTable<K, M>) -> Arc<RouteTable<K, M>> {
        let (sources, routes) = (table.len(), table.route_count());
        let (previous, generation) = {
            let mut current = write_lock!(self.table);
            let previous = std::mem::replace(&mut *current, Arc::new(table));
            (previous, self.bump_generation())
        };
        fib_log!(self, info, "swapped route table";
            "generation" => generation,
            "sources" => sources,
            "routes" => routes
        );
        previous
    }

    /// Build a table from `config` and swap it in.
    pub fn load(&self, config: RouteConfig<K, M>) -> Result<(), Error> {
        let table = config.into_table(&self.log)?;
        self.swap(table);
        Ok(())
    }

    /// Append `entry` to the candidate routes of `source`.
    pub fn insert(&self, source: K, entry: RouteEntry<M>) {
        let prefix = entry.prefix;
        let name = source.to_string();
        let ((), generation) =
            self.update(|table| table.insert(source, entry));
        fib_log!(self, info, "inserted route";
            "generation" => generation,
            "source" => name,
            "prefix" => prefix.to_string()
        );
    }

    /// Replace all candidate routes of `source`.
    pub fn replace_source(
        &self,
        source: K,
        entries: Vec<RouteEntry<M>>,
    ) -> Option<Vec<RouteEntry<M>>> {
        let name = source.to_string();
        let count = entries.len();
        let (previous, generation) =
            self.update(|table| table.replace(source, entries));
        fib_log!(self, info, "replaced source routes";
            "generation" => generation,
            "source" => name,
            "routes" => count
        );
        previous
    }

    pub fn remove_source<Q>(&self, source: &Q) -> Option<Vec<RouteEntry<M>>>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        let (previous, generation) = {
            let mut current = write_lock!(self.table);
            // leave the table and its generation alone if there is nothing
            // to remove
            current.routes(source)?;
            let previous = Arc::make_mut(&mut *current).remove(source);
            (previous, self.bump_generation())
        };
        fib_log!(self, info, "removed source";
            "generation" => generation,
            "source" => source.to_string()
        );
        previous
    }

    /// Select the best route from `source` toward `destination` using the
    /// current table.
    pub fn lookup<Q>(
        &self,
        source: &Q,
        destination: Address,
    ) -> Result<RouteEntry<M>, Error>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        let table = self.snapshot();
        match table.lookup(source, destination) {
            Ok(route) => {
                fib_log!(self, trace, "lookup";
                    "source" => source.to_string(),
                    "destination" => destination.to_string(),
                    "prefix" => route.prefix.to_string()
                );
                Ok(route.clone())
            }
            Err(e) => {
                fib_log!(self, debug, "lookup failed: {}", e;
                    "source" => source.to_string(),
                    "destination" => destination.to_string()
                );
                Err(e)
            }
        }
    }

    /// Apply `f` to a copy of the current table and swap the result in,
    /// returning the result of `f` and the new generation. The write lock is
    /// held throughout so concurrent updates serialize.
    fn update<R>(
        &self,
        f: impl FnOnce(&mut RouteTable<K, M>) -> R,
    ) -> (R, u64) {
        let mut current = write_lock!(self.table);
        let result = f(Arc::make_mut(&mut *current));
        (result, self.bump_generation())
    }

    /// Must be called with the table write lock held.
    fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}
