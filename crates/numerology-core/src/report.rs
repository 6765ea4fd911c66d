//! Structured breakdown of a compatibility score.
//!
//! Everything here is language-neutral: tiers, affinities and cautions are
//! enums, and per-side details are slices of the meaning catalog. Turning
//! them into sentences is the caller's job.

use serde::Serialize;

use crate::compatibility::compatibility_score;
use crate::meaning::meaning_for;
use crate::number::CanonicalNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    CosmicallyAligned,
    HighlyCompatible,
    GoodChemistry,
    Potential,
    Different,
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        match score {
            95.. => Tier::CosmicallyAligned,
            85..=94 => Tier::HighlyCompatible,
            75..=84 => Tier::GoodChemistry,
            60..=74 => Tier::Potential,
            _ => Tier::Different,
        }
    }
}

/// A trait group both numbers belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Affinity {
    Power,
    Stability,
    Creativity,
}

const AFFINITY_GROUPS: [(Affinity, &[u32]); 3] = [
    (Affinity::Power, &[1, 8, 11, 22]),
    (Affinity::Stability, &[2, 4, 6]),
    (Affinity::Creativity, &[3, 5, 9]),
];

/// A known friction point for an ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Caution {
    Dominance,
    CreativeVsPractical,
    FreedomVsControl,
}

// Ordered: (2, 1) does not trigger Dominance.
const CAUTION_PAIRS: [((u32, u32), Caution); 3] = [
    ((1, 2), Caution::Dominance),
    ((3, 4), Caution::CreativeVsPractical),
    ((5, 8), Caution::FreedomVsControl),
];

/// Headline traits of one side, taken from its catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideProfile {
    pub number: CanonicalNumber,
    pub name: &'static str,
    pub strengths: &'static [&'static str],
    pub weakness: Option<&'static str>,
}

impl SideProfile {
    pub fn for_number(number: u32) -> Option<Self> {
        let canonical = CanonicalNumber::new(number)?;
        let meaning = meaning_for(number)?;
        Some(Self {
            number: canonical,
            name: meaning.name,
            strengths: &meaning.strengths[..meaning.strengths.len().min(2)],
            weakness: meaning.weaknesses.first().copied(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    pub a: u32,
    pub b: u32,
    pub score: u8,
    pub tier: Tier,
    pub affinities: Vec<Affinity>,
    pub cautions: Vec<Caution>,
    /// `None` when `a` has no catalog entry (e.g. 10 or 17).
    pub profile_a: Option<SideProfile>,
    pub profile_b: Option<SideProfile>,
}

pub fn affinities(a: u32, b: u32) -> Vec<Affinity> {
    AFFINITY_GROUPS
        .iter()
        .filter(|(_, members)| members.contains(&a) && members.contains(&b))
        .map(|(affinity, _)| *affinity)
        .collect()
}

pub fn cautions(a: u32, b: u32) -> Vec<Caution> {
    CAUTION_PAIRS
        .iter()
        .filter(|(pair, _)| *pair == (a, b))
        .map(|(_, caution)| *caution)
        .collect()
}

/// Full report for a pair; `None` exactly when [`compatibility_score`] is.
pub fn compatibility_report(a: u32, b: u32) -> Option<CompatibilityReport> {
    let score = compatibility_score(a, b)?;
    Some(CompatibilityReport {
        a,
        b,
        score,
        tier: Tier::from_score(score),
        affinities: affinities(a, b),
        cautions: cautions(a, b),
        profile_a: SideProfile::for_number(a),
        profile_b: SideProfile::for_number(b),
    })
}
