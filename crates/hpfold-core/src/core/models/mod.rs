//! Chain data models: residue records and contact bond tables.
//!
//! These models carry no walk state of their own. A [`residue::Residue`]
//! remembers which moves enter and leave it while placed; the
//! [`bonds::BondTable`] assigns weights to unordered residue-type pairs and
//! is read-only after construction.

pub mod bonds;
pub mod residue;
