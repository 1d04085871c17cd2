//! # hpfold Core Library
//!
//! An exact conformation-search engine for the HP (hydrophobic–polar) lattice
//! protein model and its weighted generalisations. Given a sequence of residue
//! type symbols and a lattice dimensionality, the engine enumerates
//! self-avoiding walks on the integer lattice, scores each walk by its
//! non-consecutive weighted contacts, and returns a minimum-score fold.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless building blocks: the
//!   move algebra over axis-signed unit steps, integer lattice positions,
//!   residue records, and the contact bond table.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer owns the
//!   [`Conformation`](engine::conformation::Conformation), a partial
//!   self-avoiding walk with an incrementally maintained contact score, and
//!   the depth-first search drivers (plain and branch-and-bound) that explore
//!   it.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties `engine` and `core` together to run a complete fold search and
//!   returns the best conformation found as a serialisable
//!   [`Solution`](workflows::fold::Solution).

pub mod core;
pub mod engine;
pub mod workflows;
