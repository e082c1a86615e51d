//! Step-completion algebra for treatment instances.
//!
//! Steps are identified by their 1-based `order` within the owning
//! sub-treatment. A treatment instance spanning several appointments
//! accumulates completion events session by session, and the completion
//! predicate must always be evaluated against the **union** of every
//! session's completed steps — evaluating it against a single session's
//! selection reports a multi-visit treatment as unfinished forever (or,
//! worse, as finished when an earlier visit already covered the rest).
//! Centralising the union here keeps every caller on the safe path.
//!
//! A sub-treatment with no defined steps is complete the moment it is
//! recorded: there is nothing left to do.

use std::collections::BTreeSet;

/// 1-based position of a step within its sub-treatment.
pub type StepOrder = u32;

/// True when every defined step has been completed, or none are defined.
///
/// `total` is the full ordered step set from the catalog; `completed` is the
/// union of completed orders over *all* sessions of the instance (see
/// [`union_completed`]). Order plays no role in the predicate.
pub fn is_complete(total: &[StepOrder], completed: &BTreeSet<StepOrder>) -> bool {
    total.iter().all(|order| completed.contains(order))
}

/// Union of the historical completion set and the current session's
/// selection, deduplicated.
pub fn union_completed(history: &[StepOrder], session: &[StepOrder]) -> BTreeSet<StepOrder> {
    history.iter().chain(session.iter()).copied().collect()
}

/// Orders from `selected` that still need a completion event.
///
/// Deduplicates the selection and drops anything already recorded, so a
/// resume that re-submits an order marked in an earlier session writes
/// nothing for it. Returned in ascending order.
pub fn pending_orders(
    already_recorded: &BTreeSet<StepOrder>,
    selected: &[StepOrder],
) -> Vec<StepOrder> {
    let selected: BTreeSet<StepOrder> = selected.iter().copied().collect();
    selected.difference(already_recorded).copied().collect()
}

/// Orders still missing before the instance is complete, in catalog order.
pub fn missing_orders(total: &[StepOrder], completed: &BTreeSet<StepOrder>) -> Vec<StepOrder> {
    total
        .iter()
        .filter(|order| !completed.contains(order))
        .copied()
        .collect()
}
