//! # Core Module
//!
//! This module provides the fundamental, stateless building blocks of the
//! fold engine.
//!
//! ## Overview
//!
//! Everything here is pure data and pure functions: the move algebra over
//! axis-signed unit steps, integer lattice positions of arbitrary
//! dimensionality, per-residue records, and the contact bond table that
//! assigns weights to unordered residue-type pairs. None of it owns search
//! state; the stateful walk lives in [`crate::engine`].
//!
//! ## Architecture
//!
//! - **Lattice geometry** ([`lattice`]) - Moves, positions, and neighbour
//!   enumeration on Z^d
//! - **Chain models** ([`models`]) - Residue records and bond tables

pub mod lattice;
pub mod models;
