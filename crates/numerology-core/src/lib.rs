//! Numerology calculation engine.
//!
//! Reduces birth dates and names to canonical numbers (1–9 plus the master
//! numbers 11, 22 and 33), looks up their meanings, and scores pairs of
//! numbers for compatibility.
//!
//! Zero I/O: pure functions over immutable inputs and static tables. Invalid
//! input is signalled with `None` (or `0` for a name with no countable
//! letters), never with a panic or an error type.

pub mod compatibility;
pub mod constants;
pub mod expression;
pub mod insight;
pub mod life_path;
pub mod meaning;
pub mod number;
pub mod reduce;
pub mod report;

pub use compatibility::{compatibility_score, pair_score};
pub use constants::{CANONICAL_NUMBERS, MASTER_NUMBERS};
pub use expression::{expression_number, letter_sum, letter_value};
pub use insight::{FALLBACK_INSIGHT, Insight, has_insight, insight_for};
pub use life_path::{CalendarDate, life_path_number};
pub use meaning::{MeaningEntry, meaning_for};
pub use number::CanonicalNumber;
pub use reduce::{is_master, reduce};
pub use report::{Affinity, Caution, CompatibilityReport, SideProfile, Tier, compatibility_report};

/// Alias matching the name rendering layers call the reducer by.
pub fn reduce_to_canonical(n: u64) -> u32 {
    reduce(n)
}
