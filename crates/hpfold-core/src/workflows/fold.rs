use crate::core::lattice::moves::Move;
use crate::engine::conformation::Conformation;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search::{
    depth_first_bnb_with_control, depth_first_with_control, SearchControl, SearchSummary,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Which driver the fold workflow runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Exhaustive depth-first enumeration.
    DepthFirst,
    /// Depth-first enumeration with admissible branch-and-bound pruning.
    #[default]
    DepthFirstBranchAndBound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldConfig {
    pub algorithm: Algorithm,
}

/// A completed fold search: the minimum score found, the fold hash realising
/// it, and the driver's work counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub score: i32,
    pub fold: Vec<Move>,
    pub summary: SearchSummary,
}

/// Runs a complete fold search over `protein`.
///
/// The conformation is left positioned at the best-scoring walk found, and
/// the same walk is returned inside the [`Solution`]. Cancellation is
/// available through [`run_with_control`].
#[instrument(skip_all, name = "fold_workflow")]
pub fn run(
    protein: &mut Conformation,
    config: &FoldConfig,
    reporter: &ProgressReporter,
) -> Result<Solution, EngineError> {
    run_with_control(protein, config, reporter, &SearchControl::new())
}

/// [`run`] with a caller-supplied [`SearchControl`].
pub fn run_with_control(
    protein: &mut Conformation,
    config: &FoldConfig,
    reporter: &ProgressReporter,
    control: &SearchControl,
) -> Result<Solution, EngineError> {
    reporter.report(Progress::SearchStart {
        residues: protein.sequence_len(),
        dim: protein.dim(),
    });
    info!(
        algorithm = ?config.algorithm,
        sequence = protein.sequence(),
        dim = protein.dim(),
        "starting fold workflow"
    );

    let summary = match config.algorithm {
        Algorithm::DepthFirst => depth_first_with_control(protein, control, reporter)?,
        Algorithm::DepthFirstBranchAndBound => {
            depth_first_bnb_with_control(protein, control, reporter)?
        }
    };

    reporter.report(Progress::SearchFinish {
        score: summary.best_score,
    });
    info!(score = summary.best_score, "fold workflow complete");

    Ok(Solution {
        score: summary.best_score,
        fold: protein.hash_fold(),
        summary,
    })
}
