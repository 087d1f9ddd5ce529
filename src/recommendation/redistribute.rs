// Constrained weight redistribution.
//
// A slider edit changes exactly one field. Base-score fields are
// independent and are simply clamped and set. Influence fields carry the
// sum-100 invariant: the delta of the edited field is spread across the
// other three in proportion to their current relative sizes, everything is
// rounded back to integers, and the rounding drift is handed to the first
// remaining field in canonical order.

use crate::recommendation::weights::{RecommendationWeights, WeightField, INFLUENCE_FIELDS};
use tracing::debug;

/// Apply one bounded edit to a weight vector.
///
/// `new_value` is clamped into the field's range before use; out-of-range
/// slider input is never rejected. The returned vector always satisfies the
/// invariant: four influence weights are integers in 0-100 summing to
/// exactly 100, and base fields are untouched except the one edited.
///
/// When the three remaining influence fields are all zero there is no
/// proportion to scale, so the remainder `100 - new_value` is split equally
/// among them instead.
pub fn redistribute(
    current: &RecommendationWeights,
    field: WeightField,
    new_value: u32,
) -> RecommendationWeights {
    let clamped = new_value.min(field.cap());
    let mut next = *current;

    if !field.is_influence() {
        next.set(field, clamped);
        return next;
    }

    let old_value = current.get(field);
    let delta = f64::from(clamped) - f64::from(old_value);
    let remaining: Vec<WeightField> = INFLUENCE_FIELDS
        .into_iter()
        .filter(|f| *f != field)
        .collect();
    let remaining_total: u32 = remaining.iter().map(|f| current.get(*f)).sum();

    next.set(field, clamped);

    if remaining_total > 0 {
        for k in &remaining {
            let ratio = f64::from(current.get(*k)) / f64::from(remaining_total);
            let adjusted = (f64::from(current.get(*k)) - delta * ratio).clamp(0.0, 100.0);
            next.set(*k, adjusted.round() as u32);
        }
    } else {
        let share = (100 - clamped) / 3;
        for k in &remaining {
            next.set(*k, share);
        }
    }

    // Integer rounding can leave the sum off by a point or two. Hand the
    // drift to the first remaining field; if that field cannot absorb it
    // inside 0-100, the leftover cascades to the next one.
    let mut drift = 100 - next.influence_sum() as i64;
    for k in &remaining {
        if drift == 0 {
            break;
        }
        let value = i64::from(next.get(*k));
        let corrected = (value + drift).clamp(0, 100);
        drift -= corrected - value;
        next.set(*k, corrected as u32);
    }

    debug!(
        field = ?field,
        old_value,
        new_value = clamped,
        "redistributed influence weights"
    );
    debug_assert_eq!(next.influence_sum(), 100);
    next
}
