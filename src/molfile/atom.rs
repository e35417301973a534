//! Atoms and element look-ups for parsed structures.

use std::collections::HashMap;

use nalgebra::Point3;
use periodic_table;

/// A struct storing a look-up of element symbols to give atomic numbers
/// and atomic masses.
pub struct ElementMap<'a> {
    /// A [`HashMap`] from a symbol string to a tuple of atomic number and
    /// atomic mass.
    map: HashMap<&'a str, (u32, f64)>,
}

impl Default for ElementMap<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementMap<'static> {
    /// Creates a new [`ElementMap`] for all elements in the periodic table.
    #[must_use]
    pub fn new() -> ElementMap<'static> {
        let mut map = HashMap::new();
        let elements = periodic_table::periodic_table();
        for element in elements {
            let mass = parse_atomic_mass(element.atomic_mass);
            map.insert(element.symbol, (element.atomic_number, mass));
        }
        ElementMap { map }
    }
}

impl<'a> ElementMap<'a> {
    /// Looks up the atomic number and atomic mass of an element symbol.
    pub fn get(&self, symbol: &str) -> Option<(u32, f64)> {
        self.map.get(symbol).copied()
    }
}

/// An auxiliary function that parses the atomic mass string in the format of
/// [`periodic_table`] to a single float value.
///
/// # Arguments
///
/// * `mass_str` - A string of mass value that is either `x.y(z)` where the
///     uncertain digit `z` is enclosed in parentheses, or `[x]` where `x`
///     is the mass number in place of precise experimental values.
///
/// # Returns
///
/// The numeric mass value.
fn parse_atomic_mass(mass_str: &str) -> f64 {
    let mass = mass_str.replace(['(', ')', '[', ']'], "");
    mass.parse::<f64>()
        .unwrap_or_else(|_| panic!("Unable to parse atomic mass string {mass}."))
}

/// A struct representing an atom in a parsed structure.
#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    /// The atomic symbol of the atom, as read from the structure file.
    pub atomic_symbol: String,

    /// The atomic number of the atom, when the symbol is a known element.
    pub atomic_number: Option<u32>,

    /// The weighted-average atomic mass for all naturally occurring isotopes,
    /// when the symbol is a known element.
    pub atomic_mass: Option<f64>,

    /// The position of the atom in Ångström.
    pub coordinates: Point3<f64>,
}

impl Atom {
    /// Parses an atoms-block line of a molfile to construct an [`Atom`].
    ///
    /// # Arguments
    ///
    /// * `line` - A line containing three Cartesian coordinates followed by an
    ///     atomic symbol.
    /// * `emap` - A hash map between atomic symbols and atomic numbers and
    ///     masses.
    ///
    /// # Returns
    ///
    /// The parsed [`Atom`] struct if the line has the correct format,
    /// otherwise [`None`].
    #[must_use]
    pub fn from_mol_line(line: &str, emap: &ElementMap) -> Option<Atom> {
        let split: Vec<&str> = line.split_whitespace().collect();
        if split.len() < 4 {
            return None;
        }
        let coordinates = Point3::new(
            split[0].parse::<f64>().ok()?,
            split[1].parse::<f64>().ok()?,
            split[2].parse::<f64>().ok()?,
        );
        let atomic_symbol = split[3];
        let (atomic_number, atomic_mass) = match emap.get(atomic_symbol) {
            Some((number, mass)) => (Some(number), Some(mass)),
            None => (None, None),
        };
        Some(Atom {
            atomic_symbol: atomic_symbol.to_string(),
            atomic_number,
            atomic_mass,
            coordinates,
        })
    }
}
