//! Rendering of mission lists for the two output sinks.
//!
//! Both renderers are pure string construction over the same ordered
//! mission slice: a markdown-style table for stdout reports, and a
//! MarkdownV2 list for Telegram. MarkdownV2 is strict about special
//! characters, so every interpolated field goes through
//! [`escape_markdown_v2`].

use std::fmt::Write as _;

use crate::types::MissionRecord;

/// Characters Telegram's MarkdownV2 mode requires to be backslash-escaped.
const MARKDOWN_V2_SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Prefixes every MarkdownV2-significant character in `text` with a backslash.
#[must_use]
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_V2_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Renders missions as a fixed four-column table with no escaping.
///
/// Empty input still gets the header, followed by a single sentinel row.
#[must_use]
pub fn plain_table(missions: &[MissionRecord]) -> String {
    let mut out = String::new();
    out.push_str("| Amount | Power Level | Mission Type | Area |\n");
    out.push_str("| ------ | ----------- | ------------ | ---- |\n");

    if missions.is_empty() {
        out.push_str("| - | - | no missions found | - |\n");
        return out;
    }

    for mission in missions {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            mission.amount, mission.power_level, mission.mission_type, mission.area
        );
    }
    out
}

/// Renders missions as a numbered MarkdownV2 list with a trailing total.
///
/// Amounts that fail to parse as integers contribute 0 to the total rather
/// than erroring; the page occasionally ships junk in that column.
#[must_use]
pub fn telegram_list(missions: &[MissionRecord]) -> String {
    if missions.is_empty() {
        return "*No V\\-Bucks missions found today*".to_string();
    }

    let mut out = String::from("*V\\-Bucks Missions Today*\n\n");
    for (i, mission) in missions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}\\. PL {} {} in {} \\- *{} V\\-Bucks*",
            i + 1,
            escape_markdown_v2(&mission.power_level),
            escape_markdown_v2(&mission.mission_type),
            escape_markdown_v2(&mission.area),
            escape_markdown_v2(&mission.amount),
        );
    }

    let total: u64 = missions
        .iter()
        .map(|m| m.amount.parse::<u64>().unwrap_or(0))
        .sum();
    let _ = write!(out, "\n*Total: {total} V\\-Bucks*");
    out
}
