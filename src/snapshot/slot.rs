//! Time-slot selection
//!
//! Snapshots for a date are stored under `HH-MM-SS` directories. The slot
//! shown to the operator is the first one taken at or after the reference
//! time, wrapping around to the earliest slot of the day once the reference
//! is later than every snapshot.

/// Pick the time slot to present for `reference` among the available `slots`.
///
/// Labels are fixed-width, so lexical order is chronological order. With no
/// slots at all the reference itself comes back; its directory will not
/// exist and callers treat that as an empty result.
pub(crate) fn resolve_time_slot<S: AsRef<str>>(slots: &[S], reference: &str) -> String {
    let mut candidates: Vec<&str> = slots.iter().map(AsRef::as_ref).collect();
    if candidates.contains(&reference) {
        return reference.to_string();
    }

    candidates.push(reference);
    candidates.sort_unstable();

    let next = candidates
        .iter()
        .position(|slot| *slot == reference)
        .and_then(|i| candidates.get(i + 1))
        .or_else(|| candidates.first())
        .copied()
        .unwrap_or(reference);
    next.to_string()
}
