//! A fixed-column molfile (V2000) parser.
//!
//! The parser extracts the counts block, the atoms block, and the bonds block
//! of a molfile. Malformed counts are estimated from the surrounding blocks
//! where possible, with a non-fatal advisory; parsing only stops when
//! estimation itself is impossible.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{self, Context};
use phf::phf_map;

use crate::io::format::{molsym_error, molsym_warn};

pub mod atom;

pub use atom::{Atom, ElementMap};


/// The line index of the counts block in a molfile.
const COUNTS_LINE: usize = 3;

/// The line index at which the atoms block begins.
const ATOMS_BLOCK_START: usize = 4;

/// Names of the bond types of the molfile format.
static BOND_KINDS: phf::Map<u8, &'static str> = phf_map! {
    1u8 => "single",
    2u8 => "double",
    3u8 => "triple",
    4u8 => "aromatic",
};

/// Names of the bond stereochemistry codes of the molfile format.
static BOND_STEREO: phf::Map<u8, &'static str> = phf_map! {
    0u8 => "not stereo",
    1u8 => "up",
    4u8 => "either",
    6u8 => "down",
};

/// A struct representing a bond between two atoms of a parsed structure.
#[derive(Clone, Debug, PartialEq)]
pub struct Bond {
    /// The one-based indices of the two atoms participating in this bond.
    pub atoms: (usize, usize),

    /// A label identifying the bonded atoms by their symbols, *e.g.* `O-H`.
    pub label: String,

    /// The bond type code.
    pub kind: u8,

    /// The bond stereochemistry code.
    pub stereo: u8,
}

impl Bond {
    /// The name of this bond's type, when the code is a standard one.
    pub fn kind_name(&self) -> Option<&'static str> {
        BOND_KINDS.get(&self.kind).copied()
    }

    /// The name of this bond's stereochemistry, when the code is a standard
    /// one.
    pub fn stereo_name(&self) -> Option<&'static str> {
        BOND_STEREO.get(&self.stereo).copied()
    }
}

/// A parsed molfile: counts, atom table, and bond table.
#[derive(Debug, Clone, PartialEq)]
pub struct MolFile {
    natoms: usize,
    nbonds: usize,
    chiral: Option<bool>,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl MolFile {
    /// Reads and parses a molfile.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to read the molfile `{}`", path.display()))?;
        let lines: Vec<&str> = contents.lines().collect();
        Self::from_lines(&lines)
            .with_context(|| format!("Unable to parse the molfile `{}`", path.display()))
    }

    /// Parses the lines of a molfile.
    ///
    /// # Arguments
    ///
    /// * `lines` - The lines of the molfile, including the three header lines
    ///   preceding the counts block.
    ///
    /// # Errors
    ///
    /// Returns a [`MolParseError`] if a block is malformed beyond what count
    /// estimation can recover.
    pub fn from_lines(lines: &[&str]) -> Result<Self, MolParseError> {
        if lines.len() <= COUNTS_LINE {
            return Err(MolParseError::TooShort { lines: lines.len() });
        }
        let counts = counts_fields(lines[COUNTS_LINE]);

        let natoms = match counts.first().copied().flatten() {
            Some(natoms) => natoms,
            None => {
                molsym_warn!(
                    "The counts block is corrupted; the number of atoms will be \
                     estimated from the atoms block."
                );
                estimate_atom_count(lines)?
            }
        };
        let nbonds = match counts.get(1).copied().flatten() {
            Some(nbonds) => nbonds,
            None => {
                molsym_warn!(
                    "The counts block is corrupted; the number of bonds will be \
                     estimated from the bonds block."
                );
                estimate_bond_count(lines, natoms)?
            }
        };
        let chiral = match counts.get(3).copied().flatten() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => {
                molsym_warn!(
                    "The chirality flag is corrupted: the fourth value in the counts \
                     block must be either 0 (achiral) or 1 (chiral)."
                );
                None
            }
        };

        let atoms_block_end = ATOMS_BLOCK_START + natoms;
        if lines.len() < atoms_block_end + nbonds {
            return Err(MolParseError::TooShort { lines: lines.len() });
        }

        let emap = ElementMap::new();
        let mut atoms = Vec::with_capacity(natoms);
        for (i, line) in lines[ATOMS_BLOCK_START..atoms_block_end].iter().enumerate() {
            let atom = Atom::from_mol_line(line, &emap)
                .ok_or(MolParseError::AtomLine { line: i + 1 })?;
            atoms.push(atom);
        }

        let mut bonds = Vec::with_capacity(nbonds);
        for (i, line) in lines[atoms_block_end..atoms_block_end + nbonds]
            .iter()
            .enumerate()
        {
            bonds.push(parse_bond_line(line, &atoms, i + 1)?);
        }

        Ok(Self {
            natoms,
            nbonds,
            chiral,
            atoms,
            bonds,
        })
    }

    /// The number of atoms in the structure.
    pub fn atom_count(&self) -> usize {
        self.natoms
    }

    /// The number of bonds in the structure.
    pub fn bond_count(&self) -> usize {
        self.nbonds
    }

    /// The chirality flag of the structure, or [`None`] if it was corrupted.
    pub fn chirality_flag(&self) -> Option<bool> {
        self.chiral
    }

    /// The atoms of the structure, in file order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The bonds of the structure, in file order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }
}

impl fmt::Display for MolFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Atoms: {}", self.natoms)?;
        writeln!(f, "Bonds: {}", self.nbonds)?;
        match self.chiral {
            Some(true) => writeln!(f, "Chiral: yes")?,
            Some(false) => writeln!(f, "Chiral: no")?,
            None => writeln!(f, "Chiral: unknown")?,
        }
        for atom in &self.atoms {
            writeln!(
                f,
                "{:<4}{:>12.4}{:>12.4}{:>12.4}",
                atom.atomic_symbol,
                atom.coordinates.x,
                atom.coordinates.y,
                atom.coordinates.z
            )?;
        }
        for bond in &self.bonds {
            writeln!(
                f,
                "{:<8}{} ({})",
                bond.label,
                bond.kind_name().unwrap_or("unknown"),
                bond.stereo_name().unwrap_or("unknown")
            )?;
        }
        Ok(())
    }
}

/// Splits the counts-block line into its fixed three-character fields,
/// retaining [`None`] for any field that fails to parse.
fn counts_fields(line: &str) -> Vec<Option<usize>> {
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .collect::<String>()
                .trim()
                .parse::<usize>()
                .ok()
        })
        .collect()
}

/// Estimates the number of atoms from the atoms block, assuming atom lines
/// carry decimal coordinates while bond lines carry only integers.
///
/// # Errors
///
/// Returns [`MolParseError::AtomCountEstimation`] if every line past the
/// counts block contains a decimal point.
fn estimate_atom_count(lines: &[&str]) -> Result<usize, MolParseError> {
    for (i, line) in lines[ATOMS_BLOCK_START..].iter().enumerate() {
        if !line.contains('.') {
            molsym_warn!(
                "The number of atoms was estimated from the number of rows in the \
                 atoms block. This may not be accurate, so please check and if \
                 necessary correct it."
            );
            return Ok(i);
        }
    }
    molsym_error!("The number of atoms could not be estimated from the atoms block.");
    Err(MolParseError::AtomCountEstimation)
}

/// Estimates the number of bonds from the bonds block, assuming the block is
/// followed by a properties line starting with `M`.
///
/// # Errors
///
/// Returns [`MolParseError::BondCountEstimation`] if no such line exists.
fn estimate_bond_count(lines: &[&str], natoms: usize) -> Result<usize, MolParseError> {
    let bonds_block_start = ATOMS_BLOCK_START + natoms;
    if bonds_block_start > lines.len() {
        molsym_error!("The number of bonds could not be estimated from the bonds block.");
        return Err(MolParseError::BondCountEstimation);
    }
    for (i, line) in lines[bonds_block_start..].iter().enumerate() {
        if line.starts_with('M') {
            molsym_warn!(
                "The number of bonds was estimated from the number of rows in the \
                 bonds block. This may not be accurate, so please check and if \
                 necessary correct it."
            );
            return Ok(i);
        }
    }
    molsym_error!("The number of bonds could not be estimated from the bonds block.");
    Err(MolParseError::BondCountEstimation)
}

/// Parses a bonds-block line into a [`Bond`], labelling it with the symbols
/// of the participating atoms.
fn parse_bond_line(line: &str, atoms: &[Atom], line_number: usize) -> Result<Bond, MolParseError> {
    let fields = line
        .split_whitespace()
        .map(|field| field.parse::<usize>().ok())
        .collect::<Option<Vec<usize>>>()
        .ok_or(MolParseError::BondLine { line: line_number })?;
    if fields.len() < 4 {
        return Err(MolParseError::BondLine { line: line_number });
    }
    let (first, second) = (fields[0], fields[1]);
    if first == 0 || second == 0 || first > atoms.len() || second > atoms.len() {
        return Err(MolParseError::BondLine { line: line_number });
    }
    let label = format!(
        "{}-{}",
        atoms[first - 1].atomic_symbol,
        atoms[second - 1].atomic_symbol
    );
    Ok(Bond {
        atoms: (first, second),
        label,
        kind: fields[2] as u8,
        stereo: fields[3] as u8,
    })
}

/// Errors arising from molfile parsing. All of these are recoverable
/// conditions to be reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MolParseError {
    /// The data end before the expected blocks do.
    TooShort { lines: usize },

    /// The coordinates part of the atoms block contains non-numeric values.
    /// The line number is one-based within the atoms block.
    AtomLine { line: usize },

    /// A bonds-block line contains non-numeric values or refers to an atom
    /// that does not exist. The line number is one-based within the bonds
    /// block.
    BondLine { line: usize },

    /// The number of atoms could not be estimated from the atoms block.
    AtomCountEstimation,

    /// The number of bonds could not be estimated from the bonds block.
    BondCountEstimation,
}

impl fmt::Display for MolParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MolParseError::TooShort { lines } => write!(
                f,
                "The molfile data end after {lines} line(s), before the expected \
                 blocks do."
            ),
            MolParseError::AtomLine { line } => write!(
                f,
                "Line {line} of the atoms block contains non-numeric coordinate \
                 values; please ensure all the data follow the molfile standard."
            ),
            MolParseError::BondLine { line } => write!(
                f,
                "Line {line} of the bonds block contains non-numeric values or \
                 refers to a missing atom; please ensure all the data follow the \
                 molfile standard."
            ),
            MolParseError::AtomCountEstimation => write!(
                f,
                "The number of atoms could not be estimated because every line past \
                 the counts block contains a decimal point."
            ),
            MolParseError::BondCountEstimation => write!(
                f,
                "The number of bonds could not be estimated because the data contain \
                 no properties line starting with `M`."
            ),
        }
    }
}

impl Error for MolParseError {}
