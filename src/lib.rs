//! # molsym: point-group character tables for molecular symmetry analysis
//!
//! `molsym` provides two related but independent facilities:
//! - a character-table engine over a closed catalogue of chemically important
//!   point groups, performing representation-theory calculations (reduction,
//!   matching, convolution) with exact integer results, and
//! - a fixed-column molfile (V2000) parser extracting atom coordinates and
//!   bond connectivity, degrading gracefully on corrupted counts.
//!
//! The central object is [`pointgroup::PointGroup`], which wraps one immutable
//! [`chartab::CharacterTable`] and exposes the calculation operations over it.
//! Tables can come from the static registry ([`chartab::registry`]), from an
//! in-memory literal, or from an external semicolon-delimited resource
//! ([`io`]).

pub mod chartab;
pub mod io;
pub mod molfile;
pub mod pointgroup;
