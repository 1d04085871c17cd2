use super::moves::Move;
use std::fmt;

/// A point on the integer lattice Z^d.
///
/// Positions key the conformation's occupancy map, so they hash and compare
/// by value. The coordinate vector length is the lattice dimensionality and
/// never changes after construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position(Vec<i32>);

impl Position {
    /// The origin `(0, …, 0)` of a `dim`-dimensional lattice.
    pub fn origin(dim: usize) -> Self {
        Position(vec![0; dim])
    }

    /// The lattice dimensionality this position lives in.
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// The raw coordinates.
    pub fn coords(&self) -> &[i32] {
        &self.0
    }

    /// Returns the position reached by applying `mv` to this one.
    ///
    /// The null move is the identity.
    pub fn apply(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.shift(mv);
        next
    }

    /// Applies `mv` in place.
    pub fn shift(&mut self, mv: Move) {
        if !mv.is_none() {
            self.0[mv.axis()] += mv.step();
        }
    }

    /// Enumerates all lattice neighbours of this position together with the
    /// move reaching each, in the stable order of [`Move::all`].
    pub fn neighbours(&self, dim: usize) -> impl Iterator<Item = (Move, Position)> + '_ {
        Move::all(dim).map(move |mv| (mv, self.apply(mv)))
    }
}

impl From<Vec<i32>> for Position {
    fn from(coords: Vec<i32>) -> Self {
        Position(coords)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", itertools::join(&self.0, ", "))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_shifts_exactly_one_coordinate() {
        let origin = Position::origin(3);

        let up = origin.apply(Move::from_raw(2));
        assert_eq!(up.coords(), &[0, 1, 0]);

        let down = up.apply(Move::from_raw(-2));
        assert_eq!(down, origin);

        let east = origin.apply(Move::from_raw(1));
        assert_eq!(east.coords(), &[1, 0, 0]);
    }

    #[test]
    fn null_move_is_the_identity() {
        let origin = Position::origin(2);
        assert_eq!(origin.apply(Move::NONE), origin);
    }

    #[test]
    fn neighbours_cover_the_full_alphabet() {
        let pos = Position::from(vec![1, -1]);
        let neighbours: Vec<(i32, Vec<i32>)> = pos
            .neighbours(2)
            .map(|(mv, p)| (mv.raw(), p.coords().to_vec()))
            .collect();

        assert_eq!(
            neighbours,
            vec![
                (-2, vec![1, -2]),
                (-1, vec![0, -1]),
                (1, vec![2, -1]),
                (2, vec![1, 0]),
            ]
        );
    }

    #[test]
    fn equal_coordinates_hash_to_the_same_occupancy_key() {
        use std::collections::HashMap;

        let mut occupancy = HashMap::new();
        occupancy.insert(Position::from(vec![2, 3]), 7usize);

        let probe = Position::origin(2)
            .apply(Move::from_raw(1))
            .apply(Move::from_raw(1))
            .apply(Move::from_raw(2))
            .apply(Move::from_raw(2))
            .apply(Move::from_raw(2));
        assert_eq!(occupancy.get(&probe), Some(&7));
    }
}
