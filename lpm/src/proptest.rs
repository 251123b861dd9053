// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property-based tests for address parsing, prefix arithmetic and route
//! selection using proptest.

#[cfg(test)]
mod proptest {
    use crate::address::Address;
    use crate::bestpath::bestpath;
    use crate::prefix::{common_prefix_length, mask, within_network};
    use crate::types::RouteEntry;
    use proptest::prelude::*;

    fn address_strategy() -> impl Strategy<Value = Address> {
        any::<u32>().prop_map(Address::from_bits)
    }

    fn length_strategy() -> impl Strategy<Value = u8> {
        0u8..=32u8
    }

    // Dotted-quad text with each octet zero-padded to a random width.
    fn padded_text_strategy() -> impl Strategy<Value = (String, Address)> {
        (any::<[u8; 4]>(), prop::array::uniform4(1usize..=3)).prop_map(
            |(octets, widths)| {
                let text = octets
                    .iter()
                    .zip(widths)
                    .map(|(o, w)| format!("{o:0w$}"))
                    .collect::<Vec<_>>()
                    .join(".");
                (text, Address::from(octets))
            },
        )
    }

    // Routes covering `destination` with every length in `lengths`, each
    // tagged with its own length.
    fn covering_routes(
        destination: Address,
        lengths: &[u8],
    ) -> Vec<RouteEntry<u8>> {
        lengths
            .iter()
            .map(|&l| RouteEntry::new(destination, l, l).unwrap())
            .collect()
    }

    proptest! {
        /// Property: formatting a parsed address gives the normalized text
        #[test]
        fn prop_parse_format_round_trip((text, addr) in padded_text_strategy()) {
            let parsed: Address = text.parse().unwrap();
            prop_assert_eq!(parsed, addr);
            let [a, b, c, d] = addr.octets();
            prop_assert_eq!(parsed.to_string(), format!("{a}.{b}.{c}.{d}"));
        }

        /// Property: formatted addresses parse back to themselves
        #[test]
        fn prop_format_parse_round_trip(addr in address_strategy()) {
            prop_assert_eq!(addr.to_string().parse::<Address>().unwrap(), addr);
        }

        /// Property: mask(len) is len ones followed by 32 - len zeros
        #[test]
        fn prop_mask_shape(length in length_strategy()) {
            let m = mask(length).unwrap().to_bits();
            prop_assert_eq!(m.leading_ones(), u32::from(length));
            prop_assert_eq!(m.trailing_zeros(), 32 - u32::from(length));
        }

        /// Property: lengths past 32 are rejected
        #[test]
        fn prop_mask_rejects_long(length in 33u8..=u8::MAX) {
            prop_assert!(mask(length).is_err());
        }

        /// Property: an address is within its own network at any length
        #[test]
        fn prop_within_self(addr in address_strategy(), length in length_strategy()) {
            prop_assert!(within_network(addr, addr, length).unwrap());
        }

        /// Property: every address is within any /0
        #[test]
        fn prop_default_contains_all(addr in address_strategy(), network in address_strategy()) {
            prop_assert!(within_network(addr, network, 0).unwrap());
        }

        /// Property: membership is exactly agreement on the leading bits
        #[test]
        fn prop_within_iff_common_prefix(
            addr in address_strategy(),
            network in address_strategy(),
            length in length_strategy()
        ) {
            prop_assert_eq!(
                within_network(addr, network, length).unwrap(),
                common_prefix_length(addr, network) >= u32::from(length)
            );
        }

        /// Property: the longest covering route wins regardless of order
        #[test]
        fn prop_longest_wins(
            destination in address_strategy(),
            lengths in prop::collection::btree_set(length_strategy(), 1..8)
                .prop_map(|s| s.into_iter().collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let routes = covering_routes(destination, &lengths);
            let longest = lengths.iter().max().copied().unwrap();
            let best = bestpath(destination, &routes).unwrap();
            prop_assert_eq!(best.metadata, longest);
        }

        /// Property: the selected route contains the destination and no
        /// covering route is longer; the earliest of equal lengths wins
        #[test]
        fn prop_bestpath_is_first_longest_match(
            destination in address_strategy(),
            routes in prop::collection::vec(
                (address_strategy(), length_strategy()),
                1..16,
            )
        ) {
            let routes: Vec<RouteEntry<usize>> = routes
                .into_iter()
                .enumerate()
                .map(|(i, (n, l))| RouteEntry::new(n, l, i).unwrap())
                .collect();
            let expected = routes
                .iter()
                .filter(|r| r.matches(destination))
                .map(|r| r.prefix_length())
                .max();

            match (bestpath(destination, &routes), expected) {
                (Ok(best), Some(longest)) => {
                    prop_assert!(best.matches(destination));
                    prop_assert_eq!(best.prefix_length(), longest);
                    let earliest = routes[..best.metadata].iter().all(|r| {
                        !r.matches(destination) || r.prefix_length() < longest
                    });
                    prop_assert!(earliest);
                }
                (Err(_), None) => {}
                (result, expected) => prop_assert!(
                    false,
                    "got {result:?}, expected length {expected:?}"
                ),
            }
        }

        /// Property: swapping two equally specific matches swaps the result
        #[test]
        fn prop_tie_break_follows_order(
            destination in address_strategy(),
            length in length_strategy(),
            other_host_bits in any::<u32>()
        ) {
            let host_mask = !mask(length).unwrap().to_bits();
            let other = Address::from_bits(
                destination.to_bits() ^ (other_host_bits & host_mask),
            );
            let a = RouteEntry::new(destination, length, "a").unwrap();
            let b = RouteEntry::new(other, length, "b").unwrap();

            let forward = [a.clone(), b.clone()];
            let reverse = [b, a];
            prop_assert_eq!(bestpath(destination, &forward).unwrap().metadata, "a");
            prop_assert_eq!(bestpath(destination, &reverse).unwrap().metadata, "b");
        }
    }
}
