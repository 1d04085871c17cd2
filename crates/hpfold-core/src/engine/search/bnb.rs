use super::{explore, Pruner, SearchControl, SearchSummary};
use crate::engine::conformation::Conformation;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use tracing::info;

/// Admissible lower bound on the score still reachable from a prefix.
///
/// `bound[k]` sums, over every residue pair `{i, j}` with `j >= k` and
/// `j - i >= 2`, the pair's bond weight clamped to at most 0. Every contact
/// formed after a prefix of length `k` involves a residue with index `>= k`,
/// so `score + bound[cur_len] <= score(any completion)` holds for every
/// reachable state, which is what makes pruning on
/// `score + bound[cur_len] >= best_score` safe. Positive
/// pair weights are clamped out: they loosen the bound but can never break
/// admissibility.
///
/// Built once per driver invocation in O(n²) and consulted in O(1).
pub(crate) struct RemainingBonds {
    bound: Vec<i32>,
}

impl RemainingBonds {
    pub(crate) fn build(protein: &Conformation) -> Self {
        let symbols: Vec<char> = protein.sequence().chars().collect();
        let n = symbols.len();
        let bonds = protein.bond_values();

        let mut bound = vec![0i32; n + 1];
        for k in (0..n).rev() {
            let pairs_ending_at_k: i32 = (0..k.saturating_sub(1))
                .map(|i| bonds.weight(symbols[i], symbols[k]).min(0))
                .sum();
            bound[k] = bound[k + 1] + pairs_ending_at_k;
        }
        Self { bound }
    }
}

impl Pruner for RemainingBonds {
    fn prune(&self, protein: &Conformation, best_score: i32) -> bool {
        protein.score() + self.bound[protein.cur_len()] >= best_score
    }
}

/// Finds a minimum-score conformation by depth-first branch-and-bound.
///
/// Explores the same canonical tree as
/// [`depth_first`](super::depth_first::depth_first) and returns the same
/// minimum, but cuts off every branch whose admissible bound proves it cannot
/// beat the best complete walk found so far.
pub fn depth_first_bnb(protein: &mut Conformation) -> Result<SearchSummary, EngineError> {
    depth_first_bnb_with_control(protein, &SearchControl::new(), &ProgressReporter::new())
}

/// [`depth_first_bnb`] with caller-supplied cancellation and progress
/// reporting.
pub fn depth_first_bnb_with_control(
    protein: &mut Conformation,
    control: &SearchControl,
    reporter: &ProgressReporter,
) -> Result<SearchSummary, EngineError> {
    info!(
        sequence = protein.sequence(),
        dim = protein.dim(),
        "starting branch-and-bound depth-first search"
    );
    let bound = RemainingBonds::build(protein);
    let summary = explore(protein, &bound, control, reporter)?;
    info!(
        score = summary.best_score,
        placements = summary.placements,
        pruned = summary.pruned,
        completed = summary.completed,
        "branch-and-bound search finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lattice::moves::Move;
    use crate::core::models::bonds::BondTable;
    use crate::engine::search::depth_first::depth_first;

    fn fold(raws: &[i32]) -> Vec<Move> {
        raws.iter().copied().map(Move::from_raw).collect()
    }

    #[test]
    fn bound_table_sums_suffix_pairs() {
        let protein = Conformation::hp("HHHH", 2).unwrap();
        let table = RemainingBonds::build(&protein);

        // Weighted pairs with j - i >= 2: {0,2}, {0,3}, {1,3}, each -1.
        assert_eq!(table.bound, vec![-3, -3, -3, -2, 0]);
    }

    #[test]
    fn bound_table_is_monotone_and_vanishes_at_the_end() {
        let protein = Conformation::hp("PHPHPHPPH", 2).unwrap();
        let table = RemainingBonds::build(&protein);

        assert_eq!(*table.bound.last().unwrap(), 0);
        for k in 0..table.bound.len() - 1 {
            assert!(table.bound[k] <= table.bound[k + 1]);
            assert!(table.bound[k] <= 0);
        }
    }

    #[test]
    fn bound_table_clamps_positive_weights_to_zero() {
        let mut bonds = BondTable::hp();
        bonds.insert('H', 'P', 7);
        let protein = Conformation::new("HPPH", 2, bonds).unwrap();
        let table = RemainingBonds::build(&protein);

        // Only the {0,3} H-H pair counts; the positive {0,2} and {1,3}
        // H-P pairs are clamped out.
        assert_eq!(table.bound, vec![-1, -1, -1, -1, 0]);
    }

    #[test]
    fn prune_compares_the_reachable_score_against_the_best() {
        let mut protein = Conformation::hp("HHHH", 2).unwrap();
        let table = RemainingBonds::build(&protein);

        // Prefix of two residues: score 0, bound[2] = -3.
        protein.set_hash(&fold(&[2]), false).unwrap();
        assert!(!table.prune(&protein, -2)); // -3 could still beat -2
        assert!(table.prune(&protein, -3)); // a tie cannot beat the best
        assert!(table.prune(&protein, -4));

        // Complete square: score -1, bound[4] = 0.
        protein.set_hash(&fold(&[2, 1, -2]), false).unwrap();
        assert!(table.prune(&protein, -1));
        assert!(!table.prune(&protein, 0));
    }

    #[test]
    fn finds_the_known_2d_minimum() {
        let mut protein = Conformation::hp("PHPHPHPPH", 2).unwrap();
        let summary = depth_first_bnb(&mut protein).unwrap();

        assert_eq!(summary.best_score, -3);
        assert_eq!(protein.score(), -3);
        assert!(summary.completed);
    }

    #[test]
    fn finds_the_known_3d_minimum() {
        let mut protein = Conformation::hp("HPPHPHPHPH", 3).unwrap();
        let summary = depth_first_bnb(&mut protein).unwrap();

        assert_eq!(summary.best_score, -4);
        assert_eq!(protein.score(), -4);
        assert_eq!(protein.cur_len(), 10);
    }

    #[test]
    fn never_explores_more_than_the_plain_driver() {
        for (sequence, dim) in [("PHPHPHPPH", 2), ("HHPHH", 2), ("HHHHHH", 2)] {
            let mut plain = Conformation::hp(sequence, dim).unwrap();
            let plain_summary = depth_first(&mut plain).unwrap();

            let mut bounded = Conformation::hp(sequence, dim).unwrap();
            let bounded_summary = depth_first_bnb(&mut bounded).unwrap();

            assert_eq!(bounded_summary.best_score, plain_summary.best_score);
            assert!(bounded_summary.placements <= plain_summary.placements);
        }
    }

    #[test]
    fn agrees_with_the_plain_driver_under_a_custom_bond_table() {
        let mut bonds = BondTable::new();
        bonds.insert('H', 'H', -2);
        bonds.insert('H', 'P', -1);

        let mut plain = Conformation::new("HPHPPH", 2, bonds.clone()).unwrap();
        let plain_summary = depth_first(&mut plain).unwrap();

        let mut bounded = Conformation::new("HPHPPH", 2, bonds).unwrap();
        let bounded_summary = depth_first_bnb(&mut bounded).unwrap();

        assert_eq!(bounded_summary.best_score, plain_summary.best_score);
    }
}
