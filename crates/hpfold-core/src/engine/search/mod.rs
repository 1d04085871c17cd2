//! Depth-first conformation search.
//!
//! Both drivers share one loop: an explicit stack of
//! `(incoming move, remaining frontier)` frames advanced by a single step
//! function. A step either descends, popping frontier moves until one passes
//! [`Conformation::is_valid`], or backtracks by popping a frame and
//! retracting its move. The drivers differ only in the [`Pruner`] they plug
//! into the frontier computation: the plain driver never prunes, the
//! branch-and-bound driver consults a precomputed admissible bound.
//!
//! Symmetry breaking: residue 0 is anchored at the origin, residue 1 walks
//! the canonical first move, and the seeded straight-prefix frontiers hold
//! only positive deviations, which removes mirror images of the canonical
//! slice.

pub mod bnb;
pub mod depth_first;

pub use bnb::{depth_first_bnb, depth_first_bnb_with_control};
pub use depth_first::{depth_first, depth_first_with_control};

use super::conformation::Conformation;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::lattice::moves::Move;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-step branch cutoff consulted after every placement.
pub(crate) trait Pruner {
    /// Returns `true` when no completion of the current prefix can improve
    /// on `best_score`, so the subtree below it need not be explored.
    fn prune(&self, protein: &Conformation, best_score: i32) -> bool;
}

/// The plain driver's pruner: explore everything.
pub(crate) struct NoPruning;

impl Pruner for NoPruning {
    fn prune(&self, _protein: &Conformation, _best_score: i32) -> bool {
        false
    }
}

pub type CancelPredicate<'a> = Box<dyn Fn() -> bool + Send + Sync + 'a>;

/// Caller-supplied knobs for a driver invocation.
///
/// The cancellation predicate is polled once per search step, between stack
/// frames; when it first returns `true` the driver stops, finalises the best
/// fold found so far, and flags the summary as incomplete. Without a
/// predicate the poll is a single `Option` check.
#[derive(Default)]
pub struct SearchControl<'a> {
    cancel: Option<CancelPredicate<'a>>,
}

impl<'a> SearchControl<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancel(cancel: CancelPredicate<'a>) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|cancel| cancel())
    }
}

/// What a driver did and found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSummary {
    /// Score of the best complete walk found.
    pub best_score: i32,
    /// Total residue placements performed, seeding included.
    pub placements: u64,
    /// Branches cut off by the pruner.
    pub pruned: u64,
    /// How many times the best score strictly improved.
    pub improvements: u32,
    /// `false` when the search was cancelled before exhausting the tree.
    pub completed: bool,
}

impl SearchSummary {
    fn empty() -> Self {
        Self {
            best_score: 0,
            placements: 0,
            pruned: 0,
            improvements: 0,
            completed: true,
        }
    }
}

/// One suspended depth of the search: the move that entered it and the
/// alternatives not yet tried there.
struct Frame {
    incoming: Move,
    frontier: Vec<Move>,
}

/// The canonical direction for residue 1: the second axis, positive, or the
/// only axis on a one-dimensional lattice.
pub(crate) fn canonical_first_move(dim: usize) -> Move {
    Move::from_raw(dim.min(2) as i32)
}

/// The shared driver loop.
///
/// Resets `protein`, applies the symmetry-breaking preamble, seeds the stack
/// along a straight canonical prefix, then alternates descend/backtrack steps
/// until the stack empties or `control` cancels. The conformation is left
/// positioned at the best-scoring fold encountered.
pub(crate) fn explore<P: Pruner>(
    protein: &mut Conformation,
    pruner: &P,
    control: &SearchControl,
    reporter: &ProgressReporter,
) -> Result<SearchSummary, EngineError> {
    let n = protein.sequence_len();
    let dim = protein.dim();
    let mut summary = SearchSummary::empty();

    protein.reset_conformation();
    if n == 0 {
        return Ok(summary);
    }

    protein.place_amino(Move::NONE, true)?;
    summary.placements += 1;

    let first = canonical_first_move(dim);
    if n >= 2 {
        protein.place_amino(first, true)?;
        summary.placements += 1;
    }
    if n < 3 {
        summary.best_score = protein.score();
        return Ok(summary);
    }

    // Straight canonical prefix; its per-depth frontiers hold only positive
    // deviations, exhausting the symmetric slice.
    let seed_frontier: Vec<Move> = Move::all(dim)
        .filter(|&mv| mv.step() > 0 && mv != first)
        .collect();

    let mut stack: Vec<Frame> = Vec::with_capacity(n);
    for _ in 2..n {
        protein.place_amino(first, true)?;
        summary.placements += 1;
        stack.push(Frame {
            incoming: first,
            frontier: seed_frontier.clone(),
        });
    }

    // Any complete walk scores at most 0, so 1 loses every comparison.
    let mut best_score: i32 = 1;
    let mut best_fold: Vec<Move> = Vec::new();

    'search: loop {
        let mut remaining = if protein.cur_len() == n {
            if protein.score() < best_score {
                best_score = protein.score();
                best_fold = protein.hash_fold();
                summary.improvements += 1;
                debug!(score = best_score, "new best fold");
                reporter.report(Progress::Improved { score: best_score });
            }
            Vec::new()
        } else if pruner.prune(protein, best_score) {
            summary.pruned += 1;
            Vec::new()
        } else {
            // Never step straight back onto the predecessor.
            let banned = protein.last_move().inverse();
            Move::all(dim).filter(|&mv| mv != banned).collect()
        };

        if control.is_cancelled() {
            summary.completed = false;
            break 'search;
        }

        loop {
            while let Some(mv) = remaining.pop() {
                if protein.is_valid(mv) {
                    protein.place_amino(mv, true)?;
                    summary.placements += 1;
                    stack.push(Frame {
                        incoming: mv,
                        frontier: remaining,
                    });
                    continue 'search;
                }
            }
            match stack.pop() {
                Some(frame) => {
                    protein.remove_amino(frame.incoming)?;
                    remaining = frame.frontier;
                }
                None => break 'search,
            }
        }
    }

    protein.set_hash(&best_fold, false)?;
    summary.best_score = best_score;
    Ok(summary)
}
