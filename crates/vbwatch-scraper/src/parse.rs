//! The mission-line parser.
//!
//! Fragments arrive as trimmed free text of the shape
//! `<amount> <powerLevelToken> [missionTypeWords...] in <area>`. The page
//! layout is uncontrolled, so anything that does not match is dropped
//! silently rather than surfaced as an error.

use vbwatch_core::MissionRecord;

/// Parses one mission fragment into a [`MissionRecord`].
///
/// Returns `None` when the fragment has no `" in "` separator or fewer
/// than two tokens before it. Malformed fragments are expected noise from
/// an evolving page layout, not errors.
///
/// The power-level token is split at the first non-digit character: the
/// digit prefix becomes `power_level` and the remainder (if any) is folded
/// into `mission_type` ahead of the remaining tokens. A token with no
/// leading digits yields an empty `power_level` and contributes its whole
/// text to `mission_type`.
#[must_use]
pub fn parse_fragment(fragment: &str) -> Option<MissionRecord> {
    let (head, area) = fragment.split_once(" in ")?;

    let tokens: Vec<&str> = head.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    let amount = tokens[0];
    let (power_level, type_prefix) = split_leading_digits(tokens[1]);

    let rest = tokens[2..].join(" ");
    let mission_type = if type_prefix.is_empty() {
        rest
    } else {
        format!("{type_prefix} {rest}")
    };

    Some(MissionRecord {
        area: area.trim().to_string(),
        power_level: power_level.to_string(),
        amount: amount.to_string(),
        mission_type: mission_type.trim().to_string(),
    })
}

/// Splits `token` at the end of its leading ASCII-digit run.
///
/// Returns `(digits, remainder)`; either side may be empty. Computing an
/// explicit split index avoids off-by-one mistakes at the digit boundary.
fn split_leading_digits(token: &str) -> (&str, &str) {
    let split = token
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(token.len());
    token.split_at(split)
}
