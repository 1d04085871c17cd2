//! Lattice geometry: axis-signed unit moves and integer positions.
//!
//! A fold is a self-avoiding walk on Z^d. The walk's alphabet is the set of
//! moves `±1..=±d`, where `|m| - 1` names the axis and the sign names the
//! direction; the reserved zero move marks "no move". Positions are plain
//! integer coordinate tuples and double as occupancy-map keys.

pub mod moves;
pub mod position;
