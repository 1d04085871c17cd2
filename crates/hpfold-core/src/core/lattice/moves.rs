use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-signed unit step on the integer lattice.
///
/// A non-null move is a signed integer `m` with `1 <= |m| <= d`: its axis is
/// `|m| - 1` and its direction is `sign(m)`. The zero value is reserved as
/// [`Move::NONE`], the "no move" marker carried by the first residue of a
/// chain. Moves serialise transparently as their raw integer, so a fold hash
/// is a plain sequence of signed integers on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(i32);

impl Move {
    /// The reserved "no move" value.
    pub const NONE: Move = Move(0);

    /// Wraps a raw signed integer without range-checking it.
    ///
    /// Whether the move fits a given lattice is a property of the
    /// conformation it is applied to; callers validate with [`Move::fits`].
    pub fn from_raw(raw: i32) -> Self {
        Move(raw)
    }

    /// The raw signed integer encoding of this move.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Returns `true` for the reserved null move.
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The zero-based axis this move steps along.
    ///
    /// Meaningless for the null move; callers check [`Move::is_none`] first.
    pub fn axis(self) -> usize {
        debug_assert!(!self.is_none());
        (self.0.unsigned_abs() as usize) - 1
    }

    /// The signed unit step along [`Move::axis`]: `+1` or `-1`.
    pub fn step(self) -> i32 {
        self.0.signum()
    }

    /// The move undoing this one. The null move is its own inverse.
    pub fn inverse(self) -> Self {
        Move(-self.0)
    }

    /// Whether this move is part of the `±1..=±dim` alphabet.
    pub fn fits(self, dim: usize) -> bool {
        !self.is_none() && self.0.unsigned_abs() as usize <= dim
    }

    /// Enumerates the full move alphabet for a `dim`-dimensional lattice in a
    /// stable order: `-dim, …, -1, 1, …, dim`.
    pub fn all(dim: usize) -> impl Iterator<Item = Move> {
        let d = dim as i32;
        (-d..=d).filter(|&raw| raw != 0).map(Move)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.0)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_and_step_decompose_signed_moves() {
        assert_eq!(Move::from_raw(1).axis(), 0);
        assert_eq!(Move::from_raw(1).step(), 1);
        assert_eq!(Move::from_raw(-1).axis(), 0);
        assert_eq!(Move::from_raw(-1).step(), -1);
        assert_eq!(Move::from_raw(3).axis(), 2);
        assert_eq!(Move::from_raw(-3).step(), -1);
    }

    #[test]
    fn inverse_negates_and_null_is_self_inverse() {
        assert_eq!(Move::from_raw(2).inverse(), Move::from_raw(-2));
        assert_eq!(Move::from_raw(-2).inverse(), Move::from_raw(2));
        assert_eq!(Move::NONE.inverse(), Move::NONE);
    }

    #[test]
    fn fits_rejects_null_and_out_of_range_moves() {
        assert!(Move::from_raw(1).fits(2));
        assert!(Move::from_raw(-2).fits(2));
        assert!(!Move::from_raw(3).fits(2));
        assert!(!Move::from_raw(-3).fits(2));
        assert!(!Move::NONE.fits(2));
    }

    #[test]
    fn alphabet_enumeration_is_stable_and_complete() {
        let raws: Vec<i32> = Move::all(2).map(Move::raw).collect();
        assert_eq!(raws, vec![-2, -1, 1, 2]);

        let raws: Vec<i32> = Move::all(3).map(Move::raw).collect();
        assert_eq!(raws, vec![-3, -2, -1, 1, 2, 3]);
    }

    #[test]
    fn fold_hash_serialises_as_plain_signed_integers() {
        let fold = vec![Move::from_raw(2), Move::from_raw(-1), Move::from_raw(2)];
        let encoded = serde_json::to_string(&fold).unwrap();
        assert_eq!(encoded, "[2,-1,2]");

        let decoded: Vec<Move> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, fold);
    }
}
