use std::collections::HashMap;
use std::sync::LazyLock;

use crate::constants::{
    COMPAT_MAX, COMPAT_MIN, DEFAULT_BASELINE, IDENTITY_SCORE, MASTER_PAIR_BASELINE,
};
use crate::reduce::is_master;

/// Hand-authored ordered pair scores. Not symmetric-complete: some pairs
/// exist in one direction only, so lookups go through [`pair_score`].
const PAIRS: [((u32, u32), u8); 27] = [
    ((1, 3), 90),
    ((1, 5), 85),
    ((1, 7), 80),
    ((1, 9), 75),
    ((2, 4), 95),
    ((2, 6), 90),
    ((2, 8), 75),
    ((2, 11), 85),
    ((3, 5), 85),
    ((3, 9), 90),
    ((4, 6), 90),
    ((4, 8), 85),
    ((5, 7), 80),
    ((5, 3), 85),
    ((5, 1), 85),
    ((6, 9), 95),
    ((6, 2), 90),
    ((6, 4), 90),
    ((7, 5), 80),
    ((7, 9), 75),
    ((8, 4), 85),
    ((8, 2), 75),
    ((8, 6), 85),
    ((9, 3), 90),
    ((9, 6), 95),
    ((9, 7), 75),
    ((9, 9), 100),
];

static PAIR_TABLE: LazyLock<HashMap<(u32, u32), u8>> =
    LazyLock::new(|| PAIRS.into_iter().collect());

/// Explicit table score for a pair: `(a, b)` first, then `(b, a)`.
pub fn pair_score(a: u32, b: u32) -> Option<u8> {
    PAIR_TABLE
        .get(&(a, b))
        .or_else(|| PAIR_TABLE.get(&(b, a)))
        .copied()
}

/// Whether `n` is inside the range the compatibility engine scores.
pub fn in_compat_range(n: u32) -> bool {
    (COMPAT_MIN..=COMPAT_MAX).contains(&n)
}

/// Compatibility percentage between two numbers in `1..=33`.
///
/// Precedence: identity (100), then the master-pair baseline is recorded,
/// then an explicit table entry wins outright, then the distance tiers,
/// then whatever baseline was recorded.
pub fn compatibility_score(a: u32, b: u32) -> Option<u8> {
    if !in_compat_range(a) || !in_compat_range(b) {
        return None;
    }

    if a == b {
        return Some(IDENTITY_SCORE);
    }

    let baseline = if is_master(a) && is_master(b) {
        MASTER_PAIR_BASELINE
    } else {
        DEFAULT_BASELINE
    };

    if let Some(score) = pair_score(a, b) {
        return Some(score);
    }

    let score = match a.abs_diff(b) {
        0..=2 => 80,
        3..=5 => 70,
        6..=10 => 60,
        _ => baseline,
    };
    Some(score)
}
