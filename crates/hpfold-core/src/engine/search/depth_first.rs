use super::{explore, NoPruning, SearchControl, SearchSummary};
use crate::engine::conformation::Conformation;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use tracing::info;

/// Finds a minimum-score conformation by exhaustive depth-first enumeration.
///
/// Mutates `protein` in place and leaves it positioned at the best-scoring
/// complete walk; ties are resolved in favour of the first fold discovered.
/// The walk itself is available afterwards through
/// [`Conformation::hash_fold`].
pub fn depth_first(protein: &mut Conformation) -> Result<SearchSummary, EngineError> {
    depth_first_with_control(protein, &SearchControl::new(), &ProgressReporter::new())
}

/// [`depth_first`] with caller-supplied cancellation and progress reporting.
pub fn depth_first_with_control(
    protein: &mut Conformation,
    control: &SearchControl,
    reporter: &ProgressReporter,
) -> Result<SearchSummary, EngineError> {
    info!(
        sequence = protein.sequence(),
        dim = protein.dim(),
        "starting depth-first search"
    );
    let summary = explore(protein, &NoPruning, control, reporter)?;
    info!(
        score = summary.best_score,
        placements = summary.placements,
        completed = summary.completed,
        "depth-first search finished"
    );
    Ok(summary)
}
