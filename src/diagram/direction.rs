use serde::{Deserialize, Serialize};
use crate::models::LaidOutStop;
use super::classify::StopSequence;

/// Whether branches collect toward the trunk or fan out of it as the
/// sequence progresses. Applies to the whole sequence, never to one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BranchDirection {
    Inward,
    #[default]
    Outward,
}

impl BranchDirection {
    /// Modifier used by the renderer's diagram class
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inward => "inward",
            Self::Outward => "outward",
        }
    }
}

/// Decide the tree direction from where branch dead ends sit relative to
/// the first merge stop.
///
/// Without a merge stop there is nothing to orient and the result is
/// outward. Otherwise it is inward iff some branch terminus comes strictly
/// before the first merge stop. Later merge stops are not consulted.
#[must_use]
pub fn resolve_direction(stops: &[LaidOutStop]) -> BranchDirection {
    let merge_indices = stops.merge_indices();
    let Some(&first_merge) = merge_indices.first() else {
        return BranchDirection::Outward;
    };

    if stops
        .branch_terminus_indices()
        .iter()
        .any(|&terminus| terminus < first_merge)
    {
        BranchDirection::Inward
    } else {
        BranchDirection::Outward
    }
}
