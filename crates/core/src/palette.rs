//! Avatar color assignment.
//!
//! Colors are assigned by hashing names and ids into a fixed palette so the
//! same input always renders with the same color, with an extra rule that
//! keeps adjacent team avatars from blending into each other.

use crate::model::User;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// The fixed avatar palette (indigo, amber, emerald, red, blue).
pub const PALETTE: [&str; 5] = ["#6366f1", "#f59e0b", "#10b981", "#ef4444", "#3b82f6"];

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// Fold a string into a stable palette index.
///
/// Per character: `hash = char + ((hash << 5) - hash)` in wrapping 32-bit
/// arithmetic, then `|hash| % PALETTE.len()`. Deterministic for identical
/// input and always in `[0, PALETTE.len())`.
pub fn color_index(text: &str) -> usize {
    let mut hash: i32 = 0;
    for ch in text.chars() {
        hash = (ch as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash.unsigned_abs() as usize % PALETTE.len()
}

/// Assign a color to each team member by name, positionally.
///
/// When a member's hashed index collides with the immediately preceding
/// assignment it is bumped by one (wrapping), so no two adjacent avatars
/// share a color. Non-adjacent repeats are allowed.
pub fn team_colors(members: &[User]) -> Vec<&'static str> {
    team_color_indices(members)
        .into_iter()
        .map(|i| PALETTE[i])
        .collect()
}

/// Index form of [`team_colors`].
pub fn team_color_indices(members: &[User]) -> Vec<usize> {
    let mut prev: Option<usize> = None;
    members
        .iter()
        .map(|member| {
            let mut idx = color_index(&member.name);
            if Some(idx) == prev {
                idx = (idx + 1) % PALETTE.len();
            }
            prev = Some(idx);
            idx
        })
        .collect()
}

/// Color for a project's avatar glyph, derived from the digits of its id.
///
/// Strips non-digit characters and indexes the palette by modulus. Ids with
/// no parseable digits fall back to the first palette entry.
pub fn color_from_id(id: &str) -> &'static str {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    let value: u64 = digits.parse().unwrap_or(0);
    PALETTE[(value % PALETTE.len() as u64) as usize]
}
