//! Character tables of chemically important point groups.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

pub mod registry;

#[cfg(test)]
#[path = "chartab_tests.rs"]
mod chartab_tests;

/// A structure to manage the character table of a point group.
///
/// Each table consists of one multiplicity row giving the number of symmetry
/// operations in each symmetry-operation class, followed by one row of
/// characters per irreducible representation. Trailing basis-function columns
/// are stored separately and take no part in any arithmetic. A table is
/// immutable once constructed: all fields are private and only read-only
/// accessors are provided.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterTable {
    /// The Schoenflies symbol of the point group described by this table.
    name: String,

    /// The number of symmetry operations in each symmetry-operation class.
    class_multiplicities: Array1<f64>,

    /// A map from irreducible-representation names to the corresponding row
    /// indices in [`Self::characters`], in definition order.
    irreps: IndexMap<String, usize>,

    /// The characters of the irreducible representations, one row per
    /// irreducible representation and one column per symmetry-operation class.
    characters: Array2<f64>,

    /// Optional basis-function annotations, one list of text cells per
    /// irreducible representation.
    basis_functions: Vec<Vec<String>>,
}

impl CharacterTable {
    /// Constructs a character table from a multiplicity row and named
    /// character rows.
    ///
    /// # Arguments
    ///
    /// * `name` - The Schoenflies symbol of the point group.
    /// * `class_multiplicities` - The multiplicity of each symmetry-operation
    ///   class.
    /// * `irrep_rows` - Pairs of irreducible-representation names and their
    ///   character rows, in definition order.
    ///
    /// # Errors
    ///
    /// Returns a [`CharacterTableError`] if the data violate any table
    /// invariant.
    pub fn new(
        name: &str,
        class_multiplicities: &[f64],
        irrep_rows: &[(&str, Vec<f64>)],
    ) -> Result<Self, CharacterTableError> {
        let basis_functions = vec![Vec::new(); irrep_rows.len()];
        Self::with_basis_functions(name, class_multiplicities, irrep_rows, basis_functions)
    }

    /// Constructs a character table carrying basis-function annotations.
    ///
    /// # Arguments
    ///
    /// * `name` - The Schoenflies symbol of the point group.
    /// * `class_multiplicities` - The multiplicity of each symmetry-operation
    ///   class.
    /// * `irrep_rows` - Pairs of irreducible-representation names and their
    ///   character rows, in definition order.
    /// * `basis_functions` - One list of text cells per irreducible
    ///   representation.
    ///
    /// # Errors
    ///
    /// Returns a [`CharacterTableError`] if the data violate any table
    /// invariant.
    pub fn with_basis_functions(
        name: &str,
        class_multiplicities: &[f64],
        irrep_rows: &[(&str, Vec<f64>)],
        basis_functions: Vec<Vec<String>>,
    ) -> Result<Self, CharacterTableError> {
        if name.is_empty() {
            return Err(CharacterTableError(
                "empty point-group name".to_string(),
            ));
        }
        let n_classes = class_multiplicities.len();
        if n_classes == 0 {
            return Err(CharacterTableError(format!(
                "the {name} table has no symmetry-operation classes"
            )));
        }
        if class_multiplicities.iter().any(|m| !m.is_finite() || *m <= 0.0) {
            return Err(CharacterTableError(format!(
                "the {name} table has a non-positive or non-numeric class multiplicity"
            )));
        }
        if irrep_rows.is_empty() {
            return Err(CharacterTableError(format!(
                "the {name} table has no irreducible representations"
            )));
        }
        let mut irreps = IndexMap::<String, usize>::new();
        for (i, (irrep_name, row)) in irrep_rows.iter().enumerate() {
            if irrep_name.is_empty() {
                return Err(CharacterTableError(format!(
                    "row {i} of the {name} table has an empty irreducible-representation name"
                )));
            }
            if irreps.insert((*irrep_name).to_string(), i).is_some() {
                return Err(CharacterTableError(format!(
                    "duplicated irreducible representation `{irrep_name}` in the {name} table"
                )));
            }
            if row.len() != n_classes {
                return Err(CharacterTableError(format!(
                    "row `{irrep_name}` of the {name} table has {} characters, expected {n_classes}",
                    row.len()
                )));
            }
            if row.iter().any(|chi| !chi.is_finite()) {
                return Err(CharacterTableError(format!(
                    "row `{irrep_name}` of the {name} table contains a non-numeric character"
                )));
            }
        }
        if basis_functions.len() != irrep_rows.len() {
            return Err(CharacterTableError(format!(
                "the {name} table has {} basis-function rows for {} irreducible representations",
                basis_functions.len(),
                irrep_rows.len()
            )));
        }
        let data: Vec<f64> = irrep_rows
            .iter()
            .flat_map(|(_, row)| row.iter().copied())
            .collect();
        let characters = Array2::from_shape_vec((irrep_rows.len(), n_classes), data)
            .map_err(|err| CharacterTableError(err.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            class_multiplicities: Array1::from(class_multiplicities.to_vec()),
            irreps,
            characters,
            basis_functions,
        })
    }

    /// The Schoenflies symbol of the point group described by this table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of symmetry-operation classes in this table.
    pub fn n_classes(&self) -> usize {
        self.class_multiplicities.len()
    }

    /// The number of irreducible representations in this table.
    pub fn n_irreps(&self) -> usize {
        self.irreps.len()
    }

    /// The multiplicity row of this table.
    pub fn class_multiplicities(&self) -> ArrayView1<f64> {
        self.class_multiplicities.view()
    }

    /// The characters of all irreducible representations.
    pub fn characters(&self) -> ArrayView2<f64> {
        self.characters.view()
    }

    /// The irreducible-representation names of this table, in definition
    /// order.
    pub fn irrep_names(&self) -> Vec<&str> {
        self.irreps.keys().map(String::as_str).collect()
    }

    /// Retrieves the character row of a named irreducible representation.
    pub fn irrep_row(&self, name: &str) -> Option<ArrayView1<f64>> {
        self.irreps.get(name).map(|&i| self.characters.row(i))
    }

    /// The basis-function annotations, one list of text cells per irreducible
    /// representation.
    pub fn basis_functions(&self) -> &[Vec<String>] {
        &self.basis_functions
    }

    /// The order of the group, *i.e.* the total number of symmetry operations.
    pub fn order(&self) -> f64 {
        self.class_multiplicities.sum()
    }

    /// Returns the numeric-only working view of this table, with the
    /// multiplicity row at index `0` followed by one row per irreducible
    /// representation.
    pub fn working_table(&self) -> WorkingTable {
        WorkingTable {
            class_multiplicities: self.class_multiplicities.view(),
            characters: self.characters.view(),
        }
    }
}

impl fmt::Display for CharacterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6}", self.name)?;
        for m in self.class_multiplicities.iter() {
            write!(f, "{m:>8.0}")?;
        }
        writeln!(f)?;
        for (irrep_name, &i) in self.irreps.iter() {
            write!(f, "{irrep_name:<6}")?;
            for chi in self.characters.row(i).iter() {
                write!(f, "{chi:>8.3}")?;
            }
            let basis = self.basis_functions[i].join("; ");
            if basis.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "    {basis}")?;
            }
        }
        Ok(())
    }
}

/// A read-only numeric view of a character table, excluding all descriptive
/// columns. Row `0` is the multiplicity row; subsequent rows hold the
/// characters of the irreducible representations in definition order.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkingTable<'a> {
    class_multiplicities: ArrayView1<'a, f64>,
    characters: ArrayView2<'a, f64>,
}

impl<'a> WorkingTable<'a> {
    /// The number of rows in this view, counting the multiplicity row.
    pub fn row_count(&self) -> usize {
        self.characters.nrows() + 1
    }

    /// The number of symmetry-operation classes in this view.
    pub fn n_columns(&self) -> usize {
        self.class_multiplicities.len()
    }

    /// Retrieves a row of this view. Row `0` is the multiplicity row.
    pub fn row(&self, index: usize) -> Option<ArrayView1<'a, f64>> {
        if index == 0 {
            Some(self.class_multiplicities.clone())
        } else if index <= self.characters.nrows() {
            Some(self.characters.clone().index_axis_move(Axis(0), index - 1))
        } else {
            None
        }
    }
}

/// An error indicating a violation of the character-table invariants at
/// construction.
#[derive(Debug, Clone)]
pub struct CharacterTableError(pub String);

impl fmt::Display for CharacterTableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Character table error: {}.", self.0)
    }
}

impl Error for CharacterTableError {}
