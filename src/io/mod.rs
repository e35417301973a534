//! I/O for external character-table resources.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{self, format_err, Context};
use itertools::Itertools;

use crate::chartab::{registry, CharacterTable};
use crate::pointgroup::PointGroupError;

pub mod format;

#[cfg(test)]
#[path = "io_tests.rs"]
mod io_tests;

/// The conventional directory searched for character-table resources.
pub const TABLE_DIR: &str = "tables";

/// The extension of character-table resources.
pub const TABLE_EXT: &str = "csv";

/// An enumerated type for the possible sources of a character table.
pub enum TableSource {
    /// Variant for an already-built character table, used as-is.
    Table(CharacterTable),

    /// Variant for a Schoenflies symbol to be looked up in the static
    /// registry.
    Name(String),

    /// Variant for a path to an external semicolon-delimited table resource.
    Path(PathBuf),
}

/// Resolves a character table from any supported source.
///
/// # Errors
///
/// Returns an error if a name is not registered, a resource cannot be found
/// at any attempted location, or a resource's content is malformed.
pub fn load_table(source: TableSource) -> Result<CharacterTable, anyhow::Error> {
    match source {
        TableSource::Table(table) => Ok(table),
        TableSource::Name(name) => registry::get(&name).cloned().ok_or_else(|| {
            anyhow::Error::new(PointGroupError::UnsupportedGroup {
                requested: name.clone(),
                supported: registry::supported_groups(),
            })
        }),
        TableSource::Path(path) => {
            let resolved = resolve_table_path(&path)?;
            read_table_file(&resolved)
        }
    }
}

/// Resolves the location of an external table resource.
///
/// The conventional location `tables/<stem>.csv` is tried first; the supplied
/// path is then tried as a direct resource path.
///
/// # Errors
///
/// Returns an error listing every attempted location if none exists.
pub fn resolve_table_path(path: &Path) -> Result<PathBuf, anyhow::Error> {
    let mut tried: Vec<PathBuf> = Vec::new();
    let conventional = Path::new(TABLE_DIR).join(path).with_extension(TABLE_EXT);
    if conventional.is_file() {
        return Ok(conventional);
    }
    tried.push(conventional);
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    tried.push(path.to_path_buf());
    Err(format_err!(
        "No character-table resource found; tried: {}.",
        tried.iter().map(|p| format!("`{}`", p.display())).join(", ")
    ))
}

/// Reads and parses a semicolon-delimited character-table resource.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content violates the
/// table format.
pub fn read_table_file(path: &Path) -> Result<CharacterTable, anyhow::Error> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Unable to read the table resource `{}`", path.display()))?;
    let lines: Vec<&str> = contents.lines().collect();
    parse_table_records(&lines)
        .with_context(|| format!("Malformed table resource `{}`", path.display()))
}

/// Parses semicolon-delimited table records into a character table.
///
/// The first record holds the point-group name followed by the class
/// multiplicities; each subsequent record holds an irreducible-representation
/// name, its characters, and optional trailing basis-function text cells.
/// Within the numeric region every cell must parse as a real number.
///
/// # Errors
///
/// Returns an error describing the offending record and cell on any format
/// violation.
pub fn parse_table_records(lines: &[&str]) -> Result<CharacterTable, anyhow::Error> {
    let mut records = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.split(';').map(str::trim).collect::<Vec<&str>>());

    let header = records
        .next()
        .ok_or_else(|| format_err!("The table resource is empty"))?;
    let (name, mult_cells) = header
        .split_first()
        .ok_or_else(|| format_err!("The multiplicity record is empty"))?;
    if mult_cells.is_empty() {
        return Err(format_err!(
            "The multiplicity record of `{name}` has no symmetry-operation classes"
        ));
    }
    let class_multiplicities = mult_cells
        .iter()
        .map(|cell| {
            cell.parse::<f64>().map_err(|_| {
                format_err!("Non-numeric multiplicity `{cell}` in the record of `{name}`")
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    let n_classes = class_multiplicities.len();

    let mut irrep_rows: Vec<(String, Vec<f64>)> = Vec::new();
    let mut basis_functions: Vec<Vec<String>> = Vec::new();
    for record in records {
        let (irrep_name, cells) = record
            .split_first()
            .ok_or_else(|| format_err!("Empty irreducible-representation record"))?;
        if cells.len() < n_classes {
            return Err(format_err!(
                "The record of `{irrep_name}` has {} characters, expected {n_classes}",
                cells.len()
            ));
        }
        let characters = cells[..n_classes]
            .iter()
            .map(|cell| {
                cell.parse::<f64>().map_err(|_| {
                    format_err!(
                        "Non-numeric character `{cell}` in the record of `{irrep_name}`"
                    )
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        irrep_rows.push(((*irrep_name).to_string(), characters));
        basis_functions.push(
            cells[n_classes..]
                .iter()
                .filter(|cell| !cell.is_empty())
                .map(|cell| (*cell).to_string())
                .collect(),
        );
    }

    let borrowed_rows: Vec<(&str, Vec<f64>)> = irrep_rows
        .iter()
        .map(|(irrep_name, row)| (irrep_name.as_str(), row.clone()))
        .collect();
    CharacterTable::with_basis_functions(name, &class_multiplicities, &borrowed_rows, basis_functions)
        .map_err(anyhow::Error::new)
}
