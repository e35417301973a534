//! Point groups and representation-theory calculations over their character
//! tables.

use std::error::Error;
use std::fmt;
use std::path::Path;

use anyhow;
use derive_builder::Builder;
use indexmap::IndexMap;
use itertools::Itertools;
use ndarray::{Array1, Array2, ArrayView1, Zip};
use num_traits::ToPrimitive;

use crate::chartab::{registry, CharacterTable, WorkingTable};
use crate::io::format::{print_matched, print_reduction};
use crate::io::{load_table, TableSource};

#[cfg(test)]
#[path = "pointgroup_tests.rs"]
mod pointgroup_tests;

/// The symbol joining irreducible-representation names in convolution labels.
pub const CONVOLUTION_SYMBOL: &str = " × ";

/// The default threshold for approximate character comparisons.
const DEFAULT_THRESHOLD: f64 = 1e-7;

// =======
// Structs
// =======

// ----------
// PointGroup
// ----------

/// A structure to manage a point group and perform reduction, convolution,
/// and matching calculations over its character table.
///
/// A point group is immutable after construction: it owns one full character
/// table and exposes only read-only views of it.
#[derive(Builder, Clone, Debug)]
pub struct PointGroup {
    /// The full character table of this point group, including any
    /// basis-function columns.
    table: CharacterTable,

    /// A threshold for approximate character comparisons. Characters of
    /// degenerate irreducible representations can be irrational, so matching
    /// uses tolerance comparisons rather than bitwise float equality.
    #[builder(default = "DEFAULT_THRESHOLD")]
    threshold: f64,
}

impl PointGroup {
    /// Returns a builder to construct a new point group.
    pub fn builder() -> PointGroupBuilder {
        PointGroupBuilder::default()
    }

    /// Constructs a point group from an already-built character table.
    pub fn from_table(table: CharacterTable) -> Self {
        Self::builder()
            .table(table)
            .build()
            .expect("Unable to construct a `PointGroup`.")
    }

    /// Constructs a point group by looking up a Schoenflies symbol in the
    /// static registry.
    ///
    /// # Errors
    ///
    /// Returns [`PointGroupError::UnsupportedGroup`] enumerating the supported
    /// symbols if `name` is not registered.
    pub fn from_name(name: &str) -> Result<Self, PointGroupError> {
        registry::get(name)
            .cloned()
            .map(Self::from_table)
            .ok_or_else(|| PointGroupError::UnsupportedGroup {
                requested: name.to_string(),
                supported: registry::supported_groups(),
            })
    }

    /// Constructs a point group from an external semicolon-delimited table
    /// resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be located or if its content
    /// is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        Self::from_source(TableSource::Path(path.as_ref().to_path_buf()))
    }

    /// Constructs a point group from any supported table source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be resolved into a valid
    /// character table.
    pub fn from_source(source: TableSource) -> Result<Self, anyhow::Error> {
        Ok(Self::from_table(load_table(source)?))
    }

    /// The full character table of this point group.
    pub fn character_table(&self) -> &CharacterTable {
        &self.table
    }

    /// The numeric-only working view of the character table.
    pub fn working_table(&self) -> WorkingTable {
        self.table.working_table()
    }

    /// The threshold for approximate character comparisons.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Reduces a reducible representation into its irreducible constituents
    /// using the reduction formula, showing all working.
    ///
    /// For every irreducible representation, the elementwise product of its
    /// character row, the multiplicity row, and the supplied representation is
    /// formed; the row sum divided by the group order gives the number of
    /// times that irreducible representation appears.
    ///
    /// # Arguments
    ///
    /// * `representation` - The reducible representation, one character per
    ///   symmetry-operation class.
    ///
    /// # Errors
    ///
    /// Returns [`PointGroupError::LengthMismatch`] if the representation does
    /// not have one element per class, or
    /// [`PointGroupError::NonNumericElement`] if any element is not a finite
    /// number. No partial result is produced in either case.
    pub fn reduction(&self, representation: &Representation) -> Result<ReductionTable, PointGroupError> {
        let n_classes = self.table.n_classes();
        if representation.len() != n_classes {
            return Err(PointGroupError::LengthMismatch {
                expected: n_classes,
                actual: representation.len(),
            });
        }
        if let Some(index) = representation
            .characters()
            .iter()
            .position(|value| !value.is_finite())
        {
            return Err(PointGroupError::NonNumericElement { index });
        }

        let order = self.table.order();
        let mults = self.table.class_multiplicities();
        let gamma = representation.characters();
        let mut products = Array2::<f64>::zeros((self.table.n_irreps(), n_classes));
        let mut appearances = Vec::with_capacity(self.table.n_irreps());
        for (r, irrep_name) in self.table.irrep_names().iter().enumerate() {
            let chi = self
                .table
                .irrep_row(irrep_name)
                .expect("Irreducible representation listed but not retrievable.");
            let mut product_row = products.row_mut(r);
            Zip::from(&mut product_row)
                .and(chi)
                .and(mults)
                .and(gamma)
                .for_each(|product, &c, &m, &g| *product = c * m * g);
            let count = (product_row.sum() / order).round();
            let count = count
                .to_i64()
                .ok_or_else(|| PointGroupError::UnrepresentableCount {
                    irrep: (*irrep_name).to_string(),
                    value: count,
                })?;
            appearances.push(count);
        }

        Ok(ReductionTable {
            irreps: self
                .table
                .irrep_names()
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            products,
            appearances,
        })
    }

    /// Applies the reduction formula and prints the constituent irreducible
    /// representations as a symbolic sum.
    ///
    /// # Arguments
    ///
    /// * `representation` - The reducible representation to be reduced.
    ///
    /// # Returns
    ///
    /// The number of appearances of each irreducible representation, keyed by
    /// name in definition order.
    pub fn constituents(
        &self,
        representation: &Representation,
    ) -> Result<IndexMap<String, i64>, PointGroupError> {
        let result = self.reduction(representation)?;
        print_reduction(&result, "result");
        Ok(result.appearance_counts())
    }

    /// Convolves two or more irreducible representations of this point group,
    /// *i.e.* multiplies their character rows elementwise per
    /// symmetry-operation class.
    ///
    /// The label of the returned representation joins all argument names with
    /// the multiplication symbol.
    ///
    /// # Arguments
    ///
    /// * `names` - The names of the irreducible representations to be
    ///   convolved; at least two are required.
    ///
    /// # Errors
    ///
    /// Returns [`PointGroupError::MissingArguments`] if fewer than two names
    /// are given, or [`PointGroupError::UnknownIrrep`] enumerating the valid
    /// names if any name is absent from the character table.
    pub fn convolution(&self, names: &[&str]) -> Result<Representation, PointGroupError> {
        if names.len() < 2 {
            return Err(PointGroupError::MissingArguments { given: names.len() });
        }
        let mut product = Array1::<f64>::ones(self.table.n_classes());
        for &name in names {
            let row = self
                .table
                .irrep_row(name)
                .ok_or_else(|| PointGroupError::UnknownIrrep {
                    requested: name.to_string(),
                    valid: self
                        .table
                        .irrep_names()
                        .iter()
                        .map(|valid_name| (*valid_name).to_string())
                        .collect(),
                })?;
            product *= &row;
        }
        let label = names.iter().join(CONVOLUTION_SYMBOL);
        Ok(Representation::labelled(&label, product))
    }

    /// Matches a representation against the character table and determines
    /// whether it is irreducible.
    ///
    /// If the representation equals a character row (within the comparison
    /// threshold), that row is returned unchanged with its own label;
    /// otherwise the representation is reduced.
    ///
    /// # Arguments
    ///
    /// * `representation` - The representation to be matched; it must have
    ///   one element per symmetry-operation class.
    ///
    /// # Errors
    ///
    /// Returns [`PointGroupError::LengthMismatch`] if the representation
    /// cannot be compared against the table rows.
    pub fn match_representation(
        &self,
        representation: &Representation,
    ) -> Result<MatchedRepresentation, PointGroupError> {
        let n_classes = self.table.n_classes();
        if representation.len() != n_classes {
            return Err(PointGroupError::LengthMismatch {
                expected: n_classes,
                actual: representation.len(),
            });
        }
        for irrep_name in self.table.irrep_names() {
            let row = self
                .table
                .irrep_row(irrep_name)
                .expect("Irreducible representation listed but not retrievable.");
            let matches = row
                .iter()
                .zip(representation.characters().iter())
                .all(|(&chi, &gamma)| {
                    approx::relative_eq!(
                        chi,
                        gamma,
                        epsilon = self.threshold,
                        max_relative = self.threshold
                    )
                });
            if matches {
                return Ok(MatchedRepresentation::Irreducible(Representation::labelled(
                    irrep_name,
                    row.to_owned(),
                )));
            }
        }
        Ok(MatchedRepresentation::Reducible(
            self.reduction(representation)?,
        ))
    }

    /// Matches a representation against the character table and prints the
    /// outcome, using the representation's own label as the left-hand side
    /// when available.
    ///
    /// # Returns
    ///
    /// The raw matching outcome.
    pub fn show_matched_representation(
        &self,
        representation: &Representation,
    ) -> Result<MatchedRepresentation, PointGroupError> {
        let matched = self.match_representation(representation)?;
        print_matched(&matched, representation.label().unwrap_or("result"));
        Ok(matched)
    }

    /// Convolves two or more irreducible representations, matches the product
    /// against the character table, and prints the outcome with the argument
    /// names as the left-hand side.
    ///
    /// # Returns
    ///
    /// The raw matching outcome for the convolution product.
    pub fn convolution_results(
        &self,
        names: &[&str],
    ) -> Result<MatchedRepresentation, PointGroupError> {
        let product = self.convolution(names)?;
        let matched = self.match_representation(&product)?;
        print_matched(&matched, &names.iter().join(CONVOLUTION_SYMBOL));
        Ok(matched)
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table)
    }
}

// --------------
// Representation
// --------------

/// A transient, optionally labelled representation: one character per
/// symmetry-operation class.
#[derive(Clone, Debug, PartialEq)]
pub struct Representation {
    label: Option<String>,
    characters: Array1<f64>,
}

impl Representation {
    /// Constructs an unlabelled representation.
    pub fn new(characters: Array1<f64>) -> Self {
        Self {
            label: None,
            characters,
        }
    }

    /// Constructs a labelled representation.
    pub fn labelled(label: &str, characters: Array1<f64>) -> Self {
        Self {
            label: Some(label.to_string()),
            characters,
        }
    }

    /// The label of this representation, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The characters of this representation.
    pub fn characters(&self) -> ArrayView1<f64> {
        self.characters.view()
    }

    /// The number of symmetry-operation classes covered by this
    /// representation.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether this representation covers no classes at all.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl From<Vec<f64>> for Representation {
    fn from(characters: Vec<f64>) -> Self {
        Self::new(Array1::from(characters))
    }
}

impl From<&[f64]> for Representation {
    fn from(characters: &[f64]) -> Self {
        Self::new(Array1::from(characters.to_vec()))
    }
}

// --------------
// ReductionTable
// --------------

/// The worked result of applying the reduction formula: one row of per-class
/// products per irreducible representation, plus the trailing number of
/// appearances. Recomputed on each call, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ReductionTable {
    irreps: Vec<String>,
    products: Array2<f64>,
    appearances: Vec<i64>,
}

impl ReductionTable {
    /// The irreducible-representation names, in definition order.
    pub fn irreps(&self) -> &[String] {
        &self.irreps
    }

    /// The elementwise products of each character row with the multiplicity
    /// row and the reduced representation.
    pub fn products(&self) -> &Array2<f64> {
        &self.products
    }

    /// The number of appearances of each irreducible representation, in
    /// definition order.
    pub fn appearances(&self) -> &[i64] {
        &self.appearances
    }

    /// The number of appearances keyed by irreducible-representation name.
    pub fn appearance_counts(&self) -> IndexMap<String, i64> {
        self.irreps
            .iter()
            .cloned()
            .zip(self.appearances.iter().copied())
            .collect()
    }
}

impl fmt::Display for ReductionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, irrep_name) in self.irreps.iter().enumerate() {
            write!(f, "{irrep_name:<6}")?;
            for product in self.products.row(r).iter() {
                write!(f, "{product:>10.3}")?;
            }
            writeln!(f, " | {}", self.appearances[r])?;
        }
        Ok(())
    }
}

// -----------------------
// MatchedRepresentation
// -----------------------

/// The outcome of matching a representation against a character table.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchedRepresentation {
    /// The representation equals one of the table's character rows, returned
    /// unchanged with its own label.
    Irreducible(Representation),

    /// The representation is reducible; the worked reduction is returned.
    Reducible(ReductionTable),
}

// ======
// Errors
// ======

/// Errors arising from point-group construction or calculations. All of these
/// are recoverable conditions to be reported to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum PointGroupError {
    /// The requested point group is not in the static registry.
    UnsupportedGroup {
        requested: String,
        supported: Vec<String>,
    },

    /// The supplied representation does not have one element per
    /// symmetry-operation class.
    LengthMismatch { expected: usize, actual: usize },

    /// The supplied representation contains a non-finite element.
    NonNumericElement { index: usize },

    /// A convolution was requested with fewer than two irreducible
    /// representations.
    MissingArguments { given: usize },

    /// A named irreducible representation does not exist in the character
    /// table.
    UnknownIrrep {
        requested: String,
        valid: Vec<String>,
    },

    /// A number of appearances could not be represented as an integer.
    UnrepresentableCount { irrep: String, value: f64 },
}

impl fmt::Display for PointGroupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PointGroupError::UnsupportedGroup {
                requested,
                supported,
            } => write!(
                f,
                "The requested point group `{requested}` is not supported. \
                 The point groups that can be used are the following: {}.",
                supported.iter().join(", ")
            ),
            PointGroupError::LengthMismatch { expected, actual } => write!(
                f,
                "The representation must have the same number of elements as a row \
                 of the character table: expected {expected}, got {actual}."
            ),
            PointGroupError::NonNumericElement { index } => write!(
                f,
                "The representation contains elements of unsupported types: \
                 element {index} is not a finite number."
            ),
            PointGroupError::MissingArguments { given } => write!(
                f,
                "A convolution requires at least two irreducible representations, \
                 but only {given} were given."
            ),
            PointGroupError::UnknownIrrep { requested, valid } => write!(
                f,
                "The irreducible representation `{requested}` does not exist in this \
                 character table. A convolution can be performed using any two or \
                 more of: {}.",
                valid.iter().join(", ")
            ),
            PointGroupError::UnrepresentableCount { irrep, value } => write!(
                f,
                "The number of appearances of `{irrep}` ({value}) is not \
                 representable as an integer."
            ),
        }
    }
}

impl Error for PointGroupError {}
