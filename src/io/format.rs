//! Nice `molsym` output formatting.

use itertools::Itertools;

use crate::pointgroup::{MatchedRepresentation, ReductionTable};

/// Logs an error to the `molsym-output` logger.
macro_rules! molsym_error {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::error!($fmt, $($($arg)*)?);
        log::error!(target: "molsym-output", $fmt, $($($arg)*)?);
    }
}

/// Logs a warning to the `molsym-output` logger.
macro_rules! molsym_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "molsym-output", $fmt, $($($arg)*)?); }
}

/// Logs a main output line to the `molsym-output` logger.
macro_rules! molsym_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "molsym-output", $fmt, $($($arg)*)?); }
}

pub(crate) use {molsym_error, molsym_output, molsym_warn};

/// Renders the nonzero constituents of a reduction as a symbolic sum,
/// *e.g.* `2A1 + 2B1`.
///
/// Terms appear in the table's definition order; counts of exactly one are
/// omitted. A table with no nonzero appearances renders as an empty string.
pub fn format_constituents(table: &ReductionTable) -> String {
    table
        .irreps()
        .iter()
        .zip(table.appearances().iter())
        .filter(|(_, &count)| count != 0)
        .map(|(name, &count)| {
            if count == 1 {
                name.clone()
            } else {
                format!("{count}{name}")
            }
        })
        .join(" + ")
}

/// Prints a worked reduction as `<lhs> = <symbolic sum>` on the
/// `molsym-output` logger.
///
/// # Returns
///
/// The number-of-appearances column of the table.
pub fn print_reduction(table: &ReductionTable, left_hand_side: &str) -> Vec<i64> {
    molsym_output!("{} = {}", left_hand_side, format_constituents(table));
    table.appearances().to_vec()
}

/// Prints a matching outcome on the `molsym-output` logger: the matched
/// irreducible-representation label for an exact match, or the symbolic sum
/// of constituents for a reducible representation.
pub fn print_matched(matched: &MatchedRepresentation, left_hand_side: &str) {
    match matched {
        MatchedRepresentation::Irreducible(representation) => {
            molsym_output!(
                "{} = {}",
                left_hand_side,
                representation.label().unwrap_or("result")
            );
        }
        MatchedRepresentation::Reducible(table) => {
            print_reduction(table, left_hand_side);
        }
    }
}
