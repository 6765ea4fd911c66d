/// Master numbers: exempt from further digit reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Every value a reduction of a non-empty valid input can end in.
pub const CANONICAL_NUMBERS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

/// Inclusive lower bound accepted by the compatibility engine.
pub const COMPAT_MIN: u32 = 1;

/// Inclusive upper bound accepted by the compatibility engine.
/// Wider than the catalog key set on purpose: 10, 12..=21 and 23..=32 score too.
pub const COMPAT_MAX: u32 = 33;

/// Score for two identical numbers.
pub const IDENTITY_SCORE: u8 = 100;

/// Baseline when both sides are master numbers.
pub const MASTER_PAIR_BASELINE: u8 = 90;

/// Baseline for every other pair.
pub const DEFAULT_BASELINE: u8 = 50;

/// First code point of the precomposed Hangul syllable block (가).
pub const HANGUL_SYLLABLE_START: u32 = 0xAC00;

/// Last code point of the precomposed Hangul syllable block (힣).
pub const HANGUL_SYLLABLE_END: u32 = 0xD7A3;

/// Modulus of the Hangul syllable mapping; values land in 1..=19.
pub const HANGUL_MODULUS: u32 = 19;
