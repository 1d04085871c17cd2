use crate::core::lattice::moves::Move;

/// One residue of the input sequence.
///
/// Records exist for the whole lifetime of a conformation, whether or not the
/// residue is currently placed on the lattice. The move fields are
/// [`Move::NONE`] while the residue is unplaced, while it is the chain head
/// (`next_move`), or for the chain anchor (`prev_move` of residue 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    symbol: char,
    index: usize,
    prev_move: Move,
    next_move: Move,
    weighted: bool,
}

impl Residue {
    pub(crate) fn new(symbol: char, index: usize, weighted: bool) -> Self {
        Self {
            symbol,
            index,
            prev_move: Move::NONE,
            next_move: Move::NONE,
            weighted,
        }
    }

    /// The residue's type symbol, e.g. `'H'` or `'P'`.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// The residue's zero-based position in the sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The move that placed this residue, [`Move::NONE`] for the chain anchor
    /// or while unplaced.
    pub fn prev_move(&self) -> Move {
        self.prev_move
    }

    /// The move leading to the next placed residue, [`Move::NONE`] while this
    /// residue is the chain head or unplaced.
    pub fn next_move(&self) -> Move {
        self.next_move
    }

    /// Whether this residue's type appears in the bond table with a non-zero
    /// weight, i.e. whether placing it can ever change the score.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub(crate) fn set_prev_move(&mut self, mv: Move) {
        self.prev_move = mv;
    }

    pub(crate) fn set_next_move(&mut self, mv: Move) {
        self.next_move = mv;
    }

    pub(crate) fn clear_moves(&mut self) {
        self.prev_move = Move::NONE;
        self.next_move = Move::NONE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_residue_starts_with_null_moves() {
        let residue = Residue::new('H', 3, true);
        assert_eq!(residue.symbol(), 'H');
        assert_eq!(residue.index(), 3);
        assert_eq!(residue.prev_move(), Move::NONE);
        assert_eq!(residue.next_move(), Move::NONE);
        assert!(residue.is_weighted());
    }

    #[test]
    fn clear_moves_resets_both_directions() {
        let mut residue = Residue::new('P', 0, false);
        residue.set_prev_move(Move::from_raw(2));
        residue.set_next_move(Move::from_raw(-1));

        residue.clear_moves();
        assert_eq!(residue.prev_move(), Move::NONE);
        assert_eq!(residue.next_move(), Move::NONE);
    }
}
