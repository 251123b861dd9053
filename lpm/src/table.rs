// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Candidate routes keyed by source.
//!
//! A [`RouteTable`] is a plain store. It keeps, for every source identifier,
//! the candidate routes in the order they were inserted, and hands them to
//! [`bestpath`] on lookup. Insertion order is significant: it is the
//! tie-break order between equally specific routes.

use crate::address::Address;
use crate::bestpath::{bestpath, candidates};
use crate::error::Error;
use crate::types::RouteEntry;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<K, M> {
    routes: BTreeMap<K, Vec<RouteEntry<M>>>,
}

impl<K, M> Default for RouteTable<K, M> {
    fn default() -> Self {
        Self {
            routes: BTreeMap::new(),
        }
    }
}

impl<K: Ord, M> RouteTable<K, M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` to the candidate routes of `source`. Duplicates are
    /// kept.
    pub fn insert(&mut self, source: K, entry: RouteEntry<M>) {
        self.routes.entry(source).or_default().push(entry);
    }

    /// Replace all candidate routes of `source`, returning the previous
    /// ones.
    pub fn replace(
        &mut self,
        source: K,
        entries: Vec<RouteEntry<M>>,
    ) -> Option<Vec<RouteEntry<M>>> {
        self.routes.insert(source, entries)
    }

    pub fn remove<Q>(&mut self, source: &Q) -> Option<Vec<RouteEntry<M>>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.routes.remove(source)
    }

    pub fn routes<Q>(&self, source: &Q) -> Option<&[RouteEntry<M>]>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.routes.get(source).map(Vec::as_slice)
    }

    pub fn sources(&self) -> impl Iterator<Item = &K> {
        self.routes.keys()
    }

    /// The number of sources in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The number of routes across all sources.
    pub fn route_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    /// Select the best route from `source` toward `destination`.
    pub fn lookup<Q>(
        &self,
        source: &Q,
        destination: Address,
    ) -> Result<&RouteEntry<M>, Error>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        bestpath(destination, self.source_routes(source)?)
    }

    /// All routes from `source` that contain `destination`, in insertion
    /// order.
    pub fn candidates<Q>(
        &self,
        source: &Q,
        destination: Address,
    ) -> Result<Vec<&RouteEntry<M>>, Error>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        Ok(candidates(destination, self.source_routes(source)?).collect())
    }

    fn source_routes<Q>(&self, source: &Q) -> Result<&[RouteEntry<M>], Error>
    where
        K: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        match self.routes.get(source) {
            Some(routes) if !routes.is_empty() => Ok(routes.as_slice()),
            _ => Err(Error::UnknownSource(source.to_string())),
        }
    }
}
