//! Experience table helpers.
//!
//! Hosts report real levels, not experience, so a simulated level is converted
//! through the minimum experience for that level before rewards are added.

use std::sync::OnceLock;

pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 126;

static XP_FOR_LEVEL: OnceLock<[i64; MAX_LEVEL as usize + 1]> = OnceLock::new();

/// Index 0 is unused; `table[level]` is the minimum experience for `level`.
fn table() -> &'static [i64; MAX_LEVEL as usize + 1] {
    XP_FOR_LEVEL.get_or_init(|| {
        let mut xp = [0_i64; MAX_LEVEL as usize + 1];
        let mut points = 0_i64;
        for level in 2..=MAX_LEVEL {
            let l = f64::from(level - 1);
            points += (l + 300.0 * 2f64.powf(l / 7.0)).floor() as i64;
            xp[level as usize] = points / 4;
        }
        xp
    })
}

/// Minimum experience for a level. Levels outside `1..=126` are clamped.
pub fn xp_for_level(level: i32) -> i64 {
    table()[level.clamp(MIN_LEVEL, MAX_LEVEL) as usize]
}

/// Greatest level whose minimum experience does not exceed `xp`. Negative xp reads as 0.
pub fn level_for_xp(xp: i64) -> i32 {
    let xp = xp.max(0);
    let table = table();
    let mut lo = MIN_LEVEL;
    let mut hi = MAX_LEVEL;

    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if table[mid as usize] <= xp {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    lo
}

/// Level reached after adding `reward` experience on top of the minimum for `level`.
///
/// Never lowers the level.
pub fn level_after_reward(level: i32, reward: i64) -> i32 {
    let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
    if reward <= 0 {
        return level;
    }
    level_for_xp(xp_for_level(level).saturating_add(reward)).max(level)
}
