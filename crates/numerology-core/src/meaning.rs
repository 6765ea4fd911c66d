//! Static meaning catalog for the twelve canonical numbers.
//!
//! Built once on first access and never mutated. The serialized field names
//! (`name`, `personality`, …, `isMaster`) are what rendering layers bind to.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::number::CanonicalNumber;

/// Descriptive attributes of one canonical number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeaningEntry {
    pub name: &'static str,
    pub personality: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub career: &'static [&'static str],
    pub love: &'static str,
    pub color: &'static str,
    /// Lucky days of the month, as display text.
    pub day: &'static str,
    /// Compatible numbers, as display text.
    pub compatible: &'static str,
    pub is_master: bool,
}

static CATALOG: LazyLock<HashMap<CanonicalNumber, MeaningEntry>> = LazyLock::new(|| {
    [
        (
            1,
            MeaningEntry {
                name: "Leader",
                personality: "Independent, ambitious, pioneering, determined, courageous",
                strengths: &["Leadership", "Ambition", "Courage", "Innovation", "Self-reliance"],
                weaknesses: &["Arrogance", "Impatience", "Stubbornness", "Domination", "Insensitivity"],
                career: &["Executive", "Entrepreneur", "Pioneer", "CEO", "Manager"],
                love: "Passionate and direct in love, seeks dominant role, needs independence",
                color: "Red",
                day: "1, 10, 19, 28",
                compatible: "3, 5, 7",
                is_master: false,
            },
        ),
        (
            2,
            MeaningEntry {
                name: "Peacemaker",
                personality: "Diplomatic, sensitive, intuitive, cooperative, harmonious",
                strengths: &["Diplomacy", "Intuition", "Sensitivity", "Cooperation", "Balance"],
                weaknesses: &["Passivity", "Indecision", "Overly sensitive", "Dependency", "Shyness"],
                career: &["Diplomat", "Counselor", "Teacher", "Artist", "Mediator"],
                love: "Romantic, sensitive, seeks stable partnerships, values harmony",
                color: "Green",
                day: "2, 11, 20, 29",
                compatible: "4, 6, 8",
                is_master: false,
            },
        ),
        (
            3,
            MeaningEntry {
                name: "Creator",
                personality: "Creative, expressive, joyful, optimistic, communicative",
                strengths: &["Creativity", "Communication", "Optimism", "Sociability", "Enthusiasm"],
                weaknesses: &["Superficiality", "Scattered energy", "Irresponsibility", "Mood swings", "Impatience"],
                career: &["Artist", "Writer", "Entertainer", "Designer", "Musician"],
                love: "Flirty, charming, enjoys romantic excitement, values expression",
                color: "Yellow",
                day: "3, 12, 21, 30",
                compatible: "1, 5, 9",
                is_master: false,
            },
        ),
        (
            4,
            MeaningEntry {
                name: "Builder",
                personality: "Practical, stable, hardworking, disciplined, dependable",
                strengths: &["Stability", "Discipline", "Practicality", "Reliability", "Hard work"],
                weaknesses: &["Rigidity", "Stubbornness", "Lack of flexibility", "Dullness", "Heaviness"],
                career: &["Engineer", "Builder", "Manager", "Accountant", "Craftsperson"],
                love: "Loyal, steady, seeks security, traditional in approach to relationships",
                color: "Blue",
                day: "4, 13, 22, 31",
                compatible: "2, 6, 8",
                is_master: false,
            },
        ),
        (
            5,
            MeaningEntry {
                name: "Explorer",
                personality: "Adventurous, versatile, freedom-loving, dynamic, curious",
                strengths: &["Adaptability", "Versatility", "Curiosity", "Freedom", "Dynamism"],
                weaknesses: &["Restlessness", "Impulsiveness", "Irresponsibility", "Inconsistency", "Addiction"],
                career: &["Salesman", "Travel Agent", "Journalist", "Entrepreneur", "Explorer"],
                love: "Enjoys variety, fears commitment, seeks excitement and freedom",
                color: "Orange",
                day: "5, 14, 23",
                compatible: "1, 3, 7",
                is_master: false,
            },
        ),
        (
            6,
            MeaningEntry {
                name: "Caretaker",
                personality: "Responsible, nurturing, compassionate, loving, idealistic",
                strengths: &["Responsibility", "Compassion", "Nurturing", "Idealism", "Loyalty"],
                weaknesses: &["Martyrdom", "Intrusiveness", "Stubbornness", "Judgment", "Self-pity"],
                career: &["Counselor", "Healer", "Teacher", "Caregiver", "Social worker"],
                love: "Devoted, caring, seeks meaningful relationships, values family",
                color: "Pink",
                day: "6, 15, 24",
                compatible: "2, 4, 9",
                is_master: false,
            },
        ),
        (
            7,
            MeaningEntry {
                name: "Seeker",
                personality: "Analytical, spiritual, mysterious, intellectual, introspective",
                strengths: &["Analysis", "Spirituality", "Intuition", "Wisdom", "Introspection"],
                weaknesses: &["Isolation", "Suspicion", "Secrecy", "Pessimism", "Aloofness"],
                career: &["Researcher", "Scientist", "Analyst", "Spiritual guide", "Philosopher"],
                love: "Seeks deep spiritual connection, aloof, takes time to trust",
                color: "Violet",
                day: "7, 16, 25",
                compatible: "1, 5, 9",
                is_master: false,
            },
        ),
        (
            8,
            MeaningEntry {
                name: "Powerhouse",
                personality: "Ambitious, authoritative, powerful, success-oriented, executive",
                strengths: &["Ambition", "Power", "Executive ability", "Authority", "Material success"],
                weaknesses: &["Materialism", "Greed", "Aggression", "Ruthlessness", "Control issues"],
                career: &["Executive", "Entrepreneur", "Manager", "Banker", "Politician"],
                love: "Seeks power balance, respects strength, ambitious in relationships",
                color: "Gray",
                day: "8, 17, 26",
                compatible: "2, 4, 6",
                is_master: false,
            },
        ),
        (
            9,
            MeaningEntry {
                name: "Humanitarian",
                personality: "Compassionate, generous, tolerant, idealistic, universal",
                strengths: &["Compassion", "Generosity", "Tolerance", "Idealism", "Wisdom"],
                weaknesses: &["Emotional extremes", "Sacrifice", "Idealism", "Disconnection", "Indifference"],
                career: &["Humanitarian", "Counselor", "Teacher", "Activist", "Healer"],
                love: "Seeks universal love, deep compassion, sometimes detached emotionally",
                color: "Gold",
                day: "9, 18, 27",
                compatible: "3, 6, 9",
                is_master: false,
            },
        ),
        (
            11,
            MeaningEntry {
                name: "Master Illuminator",
                personality: "Intuitive, insightful, inspirational, visionary, spiritual awakening",
                strengths: &["Intuition", "Insight", "Inspiration", "Spiritual awareness", "Teaching"],
                weaknesses: &["Indecision", "Anxiety", "Impracticality", "Nervous tension", "Unrealistic"],
                career: &["Visionary", "Counselor", "Mentor", "Spiritual leader", "Inventor"],
                love: "Seeks deep spiritual connection, idealistic, transformative relationships",
                color: "Silver",
                day: "11, 20, 29",
                compatible: "2, 11, 22, 33",
                is_master: true,
            },
        ),
        (
            22,
            MeaningEntry {
                name: "Master Builder",
                personality: "Visionary, practical, powerful, transformative, builder of legacy",
                strengths: &["Vision", "Practicality", "Power", "Discipline", "Legacy building"],
                weaknesses: &["Overwhelm", "Self-doubt", "Controlling", "Inflexibility", "Perfectionism"],
                career: &["Architect", "Leader", "CEO", "Master builder", "Visionary entrepreneur"],
                love: "Seeks lasting legacy, values partnership with shared vision",
                color: "Purple",
                day: "22",
                compatible: "4, 11, 22, 33",
                is_master: true,
            },
        ),
        (
            33,
            MeaningEntry {
                name: "Master Teacher",
                personality: "Evolved, compassionate, teacher of masses, enlightened, transformative",
                strengths: &["Compassion", "Teaching", "Healing", "Enlightenment", "Blessings"],
                weaknesses: &["Sacrifice", "Overwhelm", "Perfectionism", "Emotional sensitivity", "Unrealistic"],
                career: &["Great teacher", "Healer", "Spiritual guide", "Counselor", "Illuminated leader"],
                love: "Seeks to uplift others, unconditional love, world service orientation",
                color: "Magenta",
                day: "33",
                compatible: "6, 9, 11, 22, 33",
                is_master: true,
            },
        ),
    ]
    .into_iter()
    .filter_map(|(n, entry)| Some((CanonicalNumber::new(n)?, entry)))
    .collect()
});

/// Catalog entry for `number`, or `None` for anything outside {1..9, 11, 22, 33}.
pub fn meaning_for(number: u32) -> Option<&'static MeaningEntry> {
    CanonicalNumber::new(number).and_then(|n| CATALOG.get(&n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CANONICAL_NUMBERS;
    use crate::reduce::is_master;

    #[test]
    fn test_every_canonical_number_has_entry() {
        for n in CANONICAL_NUMBERS {
            assert!(meaning_for(n).is_some(), "missing entry for {n}");
        }
    }

    #[test]
    fn test_non_canonical_keys_are_none() {
        for n in [0, 10, 12, 13, 21, 23, 32, 34, 44, 99] {
            assert!(meaning_for(n).is_none(), "{n} should have no entry");
        }
    }

    #[test]
    fn test_master_flag_matches_key() {
        for n in CANONICAL_NUMBERS {
            assert_eq!(meaning_for(n).unwrap().is_master, is_master(n));
        }
    }

    #[test]
    fn test_catalog_keyed_by_canonical_number() {
        assert_eq!(CATALOG.len(), CANONICAL_NUMBERS.len());
        for n in CanonicalNumber::all() {
            assert_eq!(CATALOG[&n].is_master, n.is_master());
        }
    }

    #[test]
    fn test_lists_have_five_items() {
        for n in CANONICAL_NUMBERS {
            let m = meaning_for(n).unwrap();
            assert_eq!(m.strengths.len(), 5);
            assert_eq!(m.weaknesses.len(), 5);
            assert_eq!(m.career.len(), 5);
        }
    }

    #[test]
    fn test_repeated_lookup_identical() {
        let a = meaning_for(7).unwrap();
        let b = meaning_for(7).unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(meaning_for(11).unwrap()).unwrap();
        assert_eq!(json["name"], "Master Illuminator");
        assert_eq!(json["isMaster"], true);
        assert_eq!(json["day"], "11, 20, 29");
        assert_eq!(json["strengths"][0], "Intuition");
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "name",
            "personality",
            "strengths",
            "weaknesses",
            "career",
            "love",
            "color",
            "day",
            "compatible",
            "isMaster",
        ] {
            assert!(keys.contains(&key), "missing field {key}");
        }
        assert_eq!(keys.len(), 10);
    }
}
