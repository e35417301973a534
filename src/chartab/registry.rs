//! Static registry of the supported point groups.
//!
//! The tables here are raw reference data. They are constructed once at
//! start-up and are immutable for the lifetime of the process.

use std::f64::consts::SQRT_2;

use indexmap::IndexMap;
use lazy_static::lazy_static;

use crate::chartab::CharacterTable;

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;

/// Constructs a registry entry, panicking on malformed literal data since that
/// indicates a programming error rather than a user error.
fn table(name: &str, mults: &[f64], rows: &[(&str, Vec<f64>)]) -> CharacterTable {
    CharacterTable::new(name, mults, rows)
        .unwrap_or_else(|err| panic!("Unable to construct the {name} character table: {err}"))
}

lazy_static! {
    /// The character tables of all supported point groups, keyed by their
    /// Schoenflies symbols.
    pub static ref REGISTRY: IndexMap<&'static str, CharacterTable> = {
        let sqrt3 = 3f64.sqrt();
        let mut registry = IndexMap::new();

        registry.insert(
            "Cs",
            table(
                "Cs",
                &[1.0, 1.0],
                &[
                    ("A'", vec![1.0, 1.0]),
                    ("A''", vec![1.0, -1.0]),
                ],
            ),
        );

        registry.insert(
            "C2v",
            table(
                "C2v",
                &[1.0, 1.0, 1.0, 1.0],
                &[
                    ("A1", vec![1.0, 1.0, 1.0, 1.0]),
                    ("A2", vec![1.0, 1.0, -1.0, -1.0]),
                    ("B1", vec![1.0, -1.0, 1.0, -1.0]),
                    ("B2", vec![1.0, -1.0, -1.0, 1.0]),
                ],
            ),
        );

        registry.insert(
            "C3v",
            table(
                "C3v",
                &[1.0, 2.0, 3.0],
                &[
                    ("A1", vec![1.0, 1.0, 1.0]),
                    ("A2", vec![1.0, 1.0, -1.0]),
                    ("E", vec![2.0, -1.0, 0.0]),
                ],
            ),
        );

        registry.insert(
            "C4v",
            table(
                "C4v",
                &[1.0, 2.0, 1.0, 2.0, 2.0],
                &[
                    ("A1", vec![1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2", vec![1.0, 1.0, 1.0, -1.0, -1.0]),
                    ("B1", vec![1.0, -1.0, 1.0, 1.0, -1.0]),
                    ("B2", vec![1.0, -1.0, 1.0, -1.0, 1.0]),
                    ("E", vec![2.0, 0.0, -2.0, 0.0, 0.0]),
                ],
            ),
        );

        registry.insert(
            "C6v",
            table(
                "C6v",
                &[1.0, 2.0, 2.0, 1.0, 3.0, 3.0],
                &[
                    ("A1", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2", vec![1.0, 1.0, 1.0, 1.0, -1.0, -1.0]),
                    ("B1", vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0]),
                    ("B2", vec![1.0, -1.0, 1.0, -1.0, -1.0, 1.0]),
                    ("E1", vec![2.0, 1.0, -1.0, -2.0, 0.0, 0.0]),
                    ("E2", vec![2.0, -1.0, -1.0, 2.0, 0.0, 0.0]),
                ],
            ),
        );

        registry.insert(
            "C2h",
            table(
                "C2h",
                &[1.0, 1.0, 1.0, 1.0],
                &[
                    ("Ag", vec![1.0, 1.0, 1.0, 1.0]),
                    ("Bg", vec![1.0, -1.0, 1.0, -1.0]),
                    ("Au", vec![1.0, 1.0, -1.0, -1.0]),
                    ("Bu", vec![1.0, -1.0, -1.0, 1.0]),
                ],
            ),
        );

        registry.insert(
            "D2h",
            table(
                "D2h",
                &[1.0; 8],
                &[
                    ("Ag", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("B1g", vec![1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0]),
                    ("B2g", vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0]),
                    ("B3g", vec![1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0]),
                    ("Au", vec![1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0]),
                    ("B1u", vec![1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0]),
                    ("B2u", vec![1.0, -1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0]),
                    ("B3u", vec![1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0]),
                ],
            ),
        );

        registry.insert(
            "D3h",
            table(
                "D3h",
                &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0],
                &[
                    ("A'1", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A'2", vec![1.0, 1.0, -1.0, 1.0, 1.0, -1.0]),
                    ("E'", vec![2.0, -1.0, 0.0, 2.0, -1.0, 0.0]),
                    ("A''1", vec![1.0, 1.0, 1.0, -1.0, -1.0, -1.0]),
                    ("A''2", vec![1.0, 1.0, -1.0, -1.0, -1.0, 1.0]),
                    ("E''", vec![2.0, -1.0, 0.0, -2.0, 1.0, 0.0]),
                ],
            ),
        );

        registry.insert(
            "D4h",
            table(
                "D4h",
                &[1.0, 2.0, 1.0, 2.0, 2.0, 1.0, 2.0, 1.0, 2.0, 2.0],
                &[
                    ("A1g", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2g", vec![1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0, -1.0, -1.0]),
                    ("B1g", vec![1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0]),
                    ("B2g", vec![1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0, 1.0]),
                    ("Eg", vec![2.0, 0.0, -2.0, 0.0, 0.0, 2.0, 0.0, -2.0, 0.0, 0.0]),
                    ("A1u", vec![1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0]),
                    ("A2u", vec![1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0]),
                    ("B1u", vec![1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, -1.0, -1.0, 1.0]),
                    ("B2u", vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0]),
                    ("Eu", vec![2.0, 0.0, -2.0, 0.0, 0.0, -2.0, 0.0, 2.0, 0.0, 0.0]),
                ],
            ),
        );

        registry.insert(
            "D6h",
            table(
                "D6h",
                &[1.0, 2.0, 2.0, 1.0, 3.0, 3.0, 1.0, 2.0, 2.0, 1.0, 3.0, 3.0],
                &[
                    ("A1g", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2g", vec![1.0, 1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0]),
                    ("B1g", vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0]),
                    ("B2g", vec![1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0]),
                    ("E1g", vec![2.0, 1.0, -1.0, -2.0, 0.0, 0.0, 2.0, 1.0, -1.0, -2.0, 0.0, 0.0]),
                    ("E2g", vec![2.0, -1.0, -1.0, 2.0, 0.0, 0.0, 2.0, -1.0, -1.0, 2.0, 0.0, 0.0]),
                    ("A1u", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0]),
                    ("A2u", vec![1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0]),
                    ("B1u", vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0]),
                    ("B2u", vec![1.0, -1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0]),
                    ("E1u", vec![2.0, 1.0, -1.0, -2.0, 0.0, 0.0, -2.0, -1.0, 1.0, 2.0, 0.0, 0.0]),
                    ("E2u", vec![2.0, -1.0, -1.0, 2.0, 0.0, 0.0, -2.0, 1.0, 1.0, -2.0, 0.0, 0.0]),
                ],
            ),
        );

        registry.insert(
            "D2d",
            table(
                "D2d",
                &[1.0, 2.0, 1.0, 2.0, 2.0],
                &[
                    ("A1", vec![1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2", vec![1.0, 1.0, 1.0, -1.0, -1.0]),
                    ("B1", vec![1.0, -1.0, 1.0, 1.0, -1.0]),
                    ("B2", vec![1.0, -1.0, 1.0, -1.0, 1.0]),
                    ("E", vec![2.0, 0.0, -2.0, 0.0, 0.0]),
                ],
            ),
        );

        registry.insert(
            "D3d",
            table(
                "D3d",
                &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0],
                &[
                    ("A1g", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2g", vec![1.0, 1.0, -1.0, 1.0, 1.0, -1.0]),
                    ("Eg", vec![2.0, -1.0, 0.0, 2.0, -1.0, 0.0]),
                    ("A1u", vec![1.0, 1.0, 1.0, -1.0, -1.0, -1.0]),
                    ("A2u", vec![1.0, 1.0, -1.0, -1.0, -1.0, 1.0]),
                    ("Eu", vec![2.0, -1.0, 0.0, -2.0, 1.0, 0.0]),
                ],
            ),
        );

        registry.insert(
            "D4d",
            table(
                "D4d",
                &[1.0, 2.0, 2.0, 2.0, 1.0, 4.0, 4.0],
                &[
                    ("A1", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2", vec![1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0]),
                    ("B1", vec![1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0]),
                    ("B2", vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0]),
                    ("E1", vec![2.0, SQRT_2, 0.0, -SQRT_2, -2.0, 0.0, 0.0]),
                    ("E2", vec![2.0, 0.0, -2.0, 0.0, 2.0, 0.0, 0.0]),
                    ("E3", vec![2.0, -SQRT_2, 0.0, SQRT_2, -2.0, 0.0, 0.0]),
                ],
            ),
        );

        registry.insert(
            "D6d",
            table(
                "D6d",
                &[1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0, 6.0, 6.0],
                &[
                    ("A1", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0]),
                    ("B1", vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0]),
                    ("B2", vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0]),
                    ("E1", vec![2.0, sqrt3, 1.0, 0.0, -1.0, -sqrt3, -2.0, 0.0, 0.0]),
                    ("E2", vec![2.0, 1.0, -1.0, -2.0, -1.0, 1.0, 2.0, 0.0, 0.0]),
                    ("E3", vec![2.0, 0.0, -2.0, 0.0, 2.0, 0.0, -2.0, 0.0, 0.0]),
                    ("E4", vec![2.0, -1.0, -1.0, 2.0, -1.0, -1.0, 2.0, 0.0, 0.0]),
                    ("E5", vec![2.0, -sqrt3, 1.0, 0.0, -1.0, sqrt3, -2.0, 0.0, 0.0]),
                ],
            ),
        );

        registry.insert(
            "Td",
            table(
                "Td",
                &[1.0, 8.0, 3.0, 6.0, 6.0],
                &[
                    ("A1", vec![1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2", vec![1.0, 1.0, 1.0, -1.0, -1.0]),
                    ("E", vec![2.0, -1.0, 2.0, 0.0, 0.0]),
                    ("T1", vec![3.0, 0.0, -1.0, 1.0, -1.0]),
                    ("T2", vec![3.0, 0.0, -1.0, -1.0, 1.0]),
                ],
            ),
        );

        registry.insert(
            "O",
            table(
                "O",
                &[1.0, 8.0, 6.0, 6.0, 3.0],
                &[
                    ("A1", vec![1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2", vec![1.0, 1.0, -1.0, -1.0, 1.0]),
                    ("E", vec![2.0, -1.0, 0.0, 0.0, 2.0]),
                    ("T1", vec![3.0, 0.0, -1.0, 1.0, -1.0]),
                    ("T2", vec![3.0, 0.0, 1.0, -1.0, -1.0]),
                ],
            ),
        );

        registry.insert(
            "Oh",
            table(
                "Oh",
                &[1.0, 8.0, 6.0, 6.0, 3.0, 1.0, 6.0, 8.0, 3.0, 6.0],
                &[
                    ("A1g", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
                    ("A2g", vec![1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0, -1.0]),
                    ("Eg", vec![2.0, -1.0, 0.0, 0.0, 2.0, 2.0, 0.0, -1.0, 2.0, 0.0]),
                    ("T1g", vec![3.0, 0.0, -1.0, 1.0, -1.0, 3.0, 1.0, 0.0, -1.0, -1.0]),
                    ("T2g", vec![3.0, 0.0, 1.0, -1.0, -1.0, 3.0, -1.0, 0.0, -1.0, 1.0]),
                    ("A1u", vec![1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0]),
                    ("A2u", vec![1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0]),
                    ("Eu", vec![2.0, -1.0, 0.0, 0.0, 2.0, -2.0, 0.0, 1.0, -2.0, 0.0]),
                    ("T1u", vec![3.0, 0.0, -1.0, 1.0, -1.0, -3.0, -1.0, 0.0, 1.0, 1.0]),
                    ("T2u", vec![3.0, 0.0, 1.0, -1.0, -1.0, -3.0, 1.0, 0.0, 1.0, -1.0]),
                ],
            ),
        );

        registry
    };
}

/// Looks up the character table of a named point group.
pub fn get(name: &str) -> Option<&'static CharacterTable> {
    REGISTRY.get(name)
}

/// The Schoenflies symbols of all supported point groups, in registry order.
pub fn supported_groups() -> Vec<String> {
    REGISTRY.keys().map(|name| (*name).to_string()).collect()
}
