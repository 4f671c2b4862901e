//! Parser of the `kind,low,high,scope` value shared by `EXAM1:` to `EXAM4:`.

use super::{ParseWarning, Result, parse_number};
use crate::tja::model::Criteria;

/// Number of the fields a criteria value needs. Extra fields are ignored.
const CRITERIA_FIELDS: usize = 4;

/// Parses `kind,low,high,scope` into [`Criteria`] without a slot.
///
/// # Errors
///
/// Returns a warning if there are fewer than four fields or a threshold is not a number.
pub fn parse_criteria(value: &str) -> Result<Criteria> {
    let fields: Vec<&str> = value.split(',').collect();
    let [kind, low, high, scope, ..] = fields.as_slice() else {
        return Err(ParseWarning::TooFewFields {
            expected: CRITERIA_FIELDS,
            found: fields.len(),
        });
    };
    Ok(Criteria {
        kind: kind.trim().to_lowercase(),
        threshold_low: parse_number(low)?,
        threshold_high: parse_number(high)?,
        scope: scope.trim().to_lowercase(),
        slot_id: None,
    })
}
