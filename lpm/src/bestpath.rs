// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::address::Address;
use crate::error::Error;
use crate::types::RouteEntry;

/// The routes in `routes` whose network contains `destination`, in
/// their original order.
pub fn candidates<M>(
    destination: Address,
    routes: &[RouteEntry<M>],
) -> impl Iterator<Item = &RouteEntry<M>> {
    routes.iter().filter(move |r| r.matches(destination))
}

/// The bestpath algorithm chooses the single best route toward `destination`
/// from `routes`, which may hold any number of candidates.
///
/// - filter the candidates to those whose network contains the destination;
///   if none remain the lookup fails with [`Error::NoRouteFound`].
/// - pick the route with the longest prefix length.
/// - if several routes share the longest prefix length, pick the one that
///   comes first in `routes`.
pub fn bestpath<M>(
    destination: Address,
    routes: &[RouteEntry<M>],
) -> Result<&RouteEntry<M>, Error> {
    // A later route only displaces the current best if it is strictly more
    // specific, so the earliest of equally specific routes is kept.
    candidates(destination, routes)
        .reduce(|best, r| {
            if r.prefix_length() > best.prefix_length() {
                r
            } else {
                best
            }
        })
        .ok_or(Error::NoRouteFound(destination))
}
