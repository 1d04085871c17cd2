use crate::core::lattice::moves::Move;
use crate::core::lattice::position::Position;
use crate::core::models::bonds::BondTable;
use crate::core::models::residue::Residue;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConformationError {
    #[error("lattice dimensionality must be at least 1, got {dim}")]
    BadConfig { dim: usize },

    #[error("move {mv} is not admissible at chain length {cur_len} on a {dim}-dimensional lattice")]
    IllegalMove { mv: Move, cur_len: usize, dim: usize },

    #[error("all {len} residues of the sequence are already placed")]
    ChainFull { len: usize },

    #[error("placing residue {index} with move {mv} lands on occupied site {position}")]
    Overlap {
        index: usize,
        mv: Move,
        position: Position,
    },

    #[error("cannot retract with move {got}: chain length is {cur_len}, last move was {last}")]
    UnderflowRemove {
        got: Move,
        last: Move,
        cur_len: usize,
    },

    #[error("fold step {index} does not extend a self-avoiding walk: {reason}")]
    BadFold { index: usize, reason: String },
}

/// A partial self-avoiding walk of a residue sequence on Z^d.
///
/// The conformation is the sole mutable state of a fold search. It owns the
/// occupancy map, the chain head, and the contact score, which is maintained
/// as a running total under [`place_amino`](Conformation::place_amino) /
/// [`remove_amino`](Conformation::remove_amino) mutations: each placement
/// scans the O(d) lattice neighbourhood of the new head once, so a driver
/// never pays for a full rescore.
///
/// Construction places nothing; a freshly built conformation is empty with
/// the head resting at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conformation {
    sequence: String,
    residues: Vec<Residue>,
    dim: usize,
    bonds: BondTable,
    occupancy: HashMap<Position, usize>,
    head: Position,
    cur_len: usize,
    last_move: Move,
    score: i32,
    changes: u64,
}

impl Conformation {
    /// Builds an empty conformation for `sequence` on a `dim`-dimensional
    /// lattice, scoring contacts with `bonds`.
    ///
    /// The sequence is scanned once to mark the residues whose type carries
    /// weight in the bond table; placing any other residue skips the contact
    /// scan entirely.
    pub fn new(
        sequence: impl Into<String>,
        dim: usize,
        bonds: BondTable,
    ) -> Result<Self, ConformationError> {
        let sequence = sequence.into();
        if dim < 1 {
            return Err(ConformationError::BadConfig { dim });
        }

        let residues = sequence
            .chars()
            .enumerate()
            .map(|(index, symbol)| Residue::new(symbol, index, bonds.involves(symbol)))
            .collect();

        Ok(Self {
            sequence,
            residues,
            dim,
            bonds,
            occupancy: HashMap::new(),
            head: Position::origin(dim),
            cur_len: 0,
            last_move: Move::NONE,
            score: 0,
            changes: 0,
        })
    }

    /// Convenience constructor using the canonical HP bond table.
    pub fn hp(sequence: impl Into<String>, dim: usize) -> Result<Self, ConformationError> {
        Self::new(sequence, dim, BondTable::hp())
    }

    /// The input sequence of residue type symbols.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The lattice dimensionality d.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of residues placed so far.
    pub fn cur_len(&self) -> usize {
        self.cur_len
    }

    /// Total number of residues in the sequence.
    pub fn sequence_len(&self) -> usize {
        self.residues.len()
    }

    /// The incoming move of the most recently placed residue, or
    /// [`Move::NONE`] when at most the anchor is placed.
    pub fn last_move(&self) -> Move {
        self.last_move
    }

    /// The position of the most recently placed residue, or the origin when
    /// the conformation is empty.
    pub fn last_pos(&self) -> &Position {
        &self.head
    }

    /// The running contact score of the placed prefix.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Number of tracked placements performed since the last full reset.
    pub fn changes(&self) -> u64 {
        self.changes
    }

    /// The bond table scoring this conformation.
    pub fn bond_values(&self) -> &BondTable {
        &self.bonds
    }

    /// The residue record at `index`, placed or not.
    pub fn residue(&self, index: usize) -> Option<&Residue> {
        self.residues.get(index)
    }

    /// The residue occupying `position`, or `None` for an empty site.
    pub fn get_amino(&self, position: &Position) -> Option<&Residue> {
        self.occupancy
            .get(position)
            .map(|&index| &self.residues[index])
    }

    /// Whether the residue at `index` can ever contribute to the score.
    pub fn is_weighted(&self, index: usize) -> bool {
        self.residues
            .get(index)
            .map_or(false, |residue| residue.is_weighted())
    }

    /// Whether applying `mv` to the head lands on an unoccupied site.
    ///
    /// Out-of-range moves are never valid. This is a pure query; drivers call
    /// it before every placement so that `place_amino` cannot overlap.
    pub fn is_valid(&self, mv: Move) -> bool {
        if mv.is_none() {
            return self.cur_len == 0;
        }
        if !mv.fits(self.dim) {
            return false;
        }
        !self.occupancy.contains_key(&self.head.apply(mv))
    }

    /// Places the next residue of the sequence.
    ///
    /// The first residue is anchored at the origin and must be placed with
    /// [`Move::NONE`]; every later residue takes a non-null move from the
    /// `±1..=±dim` alphabet, stepping the head to an unoccupied neighbour
    /// site. On success the running score absorbs the contact delta of the
    /// new head and, if `track` is set, the change counter is bumped.
    ///
    /// Nothing is mutated on failure.
    pub fn place_amino(&mut self, mv: Move, track: bool) -> Result<(), ConformationError> {
        let index = self.cur_len;
        if index == self.residues.len() {
            return Err(ConformationError::ChainFull {
                len: self.residues.len(),
            });
        }

        let position = if index == 0 {
            if !mv.is_none() {
                return Err(ConformationError::IllegalMove {
                    mv,
                    cur_len: index,
                    dim: self.dim,
                });
            }
            self.head.clone()
        } else {
            if !mv.fits(self.dim) {
                return Err(ConformationError::IllegalMove {
                    mv,
                    cur_len: index,
                    dim: self.dim,
                });
            }
            self.head.apply(mv)
        };

        if self.occupancy.contains_key(&position) {
            return Err(ConformationError::Overlap {
                index,
                mv,
                position,
            });
        }

        if index > 0 {
            self.residues[index - 1].set_next_move(mv);
        }
        self.residues[index].set_prev_move(mv);
        self.occupancy.insert(position.clone(), index);
        self.head = position;
        self.last_move = mv;
        self.cur_len += 1;

        if !mv.is_none() && self.residues[index].is_weighted() {
            self.apply_contact_delta(index, mv, 1);
        }
        if track {
            self.changes += 1;
        }
        Ok(())
    }

    /// Retracts the chain head.
    ///
    /// `mv` must equal [`last_move`](Conformation::last_move); passing it
    /// back explicitly keeps the driver's frame stack and the conformation in
    /// lockstep. The score contribution of the retracted residue is backed
    /// out with the inverted contact delta, and `last_move` is restored from
    /// the new head's record. The change counter is not modified.
    pub fn remove_amino(&mut self, mv: Move) -> Result<(), ConformationError> {
        if self.cur_len == 0 || mv != self.last_move {
            return Err(ConformationError::UnderflowRemove {
                got: mv,
                last: self.last_move,
                cur_len: self.cur_len,
            });
        }

        self.cur_len -= 1;
        let index = self.cur_len;

        if !mv.is_none() && self.residues[index].is_weighted() {
            self.apply_contact_delta(index, mv, -1);
        }

        self.occupancy.remove(&self.head);
        self.residues[index].set_prev_move(Move::NONE);

        if index == 0 {
            self.last_move = Move::NONE;
        } else {
            self.head.shift(mv.inverse());
            self.residues[index - 1].set_next_move(Move::NONE);
            self.last_move = self.residues[index - 1].prev_move();
        }
        Ok(())
    }

    /// Empties the walk, keeping the change counter.
    pub fn reset_conformation(&mut self) {
        self.occupancy.clear();
        self.head = Position::origin(self.dim);
        self.cur_len = 0;
        self.last_move = Move::NONE;
        self.score = 0;
        for residue in &mut self.residues {
            residue.clear_moves();
        }
    }

    /// Empties the walk and zeroes the change counter.
    pub fn reset(&mut self) {
        self.reset_conformation();
        self.changes = 0;
    }

    /// Serialises the current walk as its sequence of incoming moves,
    /// obtained by following outgoing-move records from the origin.
    ///
    /// The result has length `max(0, cur_len - 1)` and is the canonical
    /// interchange format of a fold.
    pub fn hash_fold(&self) -> Vec<Move> {
        let mut fold = Vec::with_capacity(self.cur_len.saturating_sub(1));
        let mut position = Position::origin(self.dim);

        let mut cursor = self.occupancy.get(&position);
        while let Some(&index) = cursor {
            let next = self.residues[index].next_move();
            if next.is_none() {
                break;
            }
            fold.push(next);
            position.shift(next);
            cursor = self.occupancy.get(&position);
        }
        fold
    }

    /// Replaces the current walk with the given fold.
    ///
    /// The conformation is reset first, the anchor is placed, and the moves
    /// are applied in order. Every move is range-checked against the lattice.
    /// Any rejection (overlap, out-of-range move, fold longer than the
    /// sequence) resets the conformation again and surfaces as
    /// [`ConformationError::BadFold`] with the failing step index, so a
    /// failed call always leaves the conformation empty.
    pub fn set_hash(&mut self, fold: &[Move], track: bool) -> Result<(), ConformationError> {
        self.reset_conformation();

        if self.residues.is_empty() {
            if fold.is_empty() {
                return Ok(());
            }
            return Err(ConformationError::BadFold {
                index: 0,
                reason: "the sequence is empty".to_string(),
            });
        }

        self.place_amino(Move::NONE, track)?;
        for (index, &mv) in fold.iter().enumerate() {
            if let Err(source) = self.place_amino(mv, track) {
                self.reset_conformation();
                return Err(ConformationError::BadFold {
                    index,
                    reason: source.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Adds (`sign = 1`) or backs out (`sign = -1`) the contact contribution
    /// of the residue at the head.
    ///
    /// Scans every lattice direction except the chain-reverse one, which
    /// points at the sequence-adjacent predecessor and is never scored.
    fn apply_contact_delta(&mut self, index: usize, incoming: Move, sign: i32) {
        let reverse = incoming.inverse();
        let symbol = self.residues[index].symbol();

        for mv in Move::all(self.dim) {
            if mv == reverse {
                continue;
            }
            let neighbour = self.head.apply(mv);
            if let Some(&other) = self.occupancy.get(&neighbour) {
                self.score += sign * self.bonds.weight(symbol, self.residues[other].symbol());
            }
        }
    }
}
