//! Extended life-path reading: purpose, hidden potential, main challenge
//! and four success keys per canonical number.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::number::CanonicalNumber;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub purpose: &'static str,
    pub potential: &'static str,
    pub challenge: &'static str,
    pub success_keys: [&'static str; 4],
}

/// Returned for any number without a dedicated entry.
pub static FALLBACK_INSIGHT: Insight = Insight {
    purpose: "Your life path holds unique purpose and meaning.",
    potential: "You have unique hidden talents waiting to be discovered.",
    challenge: "You have unique challenges that lead to personal growth.",
    success_keys: [
        "Follow your passion",
        "Trust the process",
        "Help others",
        "Stay true to yourself",
    ],
};

static INSIGHTS: LazyLock<HashMap<CanonicalNumber, Insight>> = LazyLock::new(|| {
    [
        (
            1,
            Insight {
                purpose: "Your life purpose is to lead, innovate, and blaze new trails. You are meant to be a trailblazer who inspires others through courage and originality.",
                potential: "Your hidden potential includes exceptional leadership abilities, innovative thinking, and the power to manifest dreams into reality.",
                challenge: "Your main challenge is learning to collaborate and consider others' perspectives while maintaining your leadership vision.",
                success_keys: [
                    "Trust your instincts and bold vision",
                    "Build a strong team around you",
                    "Practice continuous innovation",
                    "Develop patience and humility",
                ],
            },
        ),
        (
            2,
            Insight {
                purpose: "Your life purpose is to bring harmony, heal relationships, and create balance. You are meant to be a bridge-builder and peacemaker.",
                potential: "Your hidden potential includes profound intuitive gifts, healing abilities, and the capacity to create deep, meaningful connections.",
                challenge: "Your main challenge is developing confidence and assertiveness without losing your diplomatic nature.",
                success_keys: [
                    "Honor your intuitive gifts",
                    "Practice active listening",
                    "Create balanced partnerships",
                    "Embrace your sensitivity as strength",
                ],
            },
        ),
        (
            3,
            Insight {
                purpose: "Your life purpose is to express yourself creatively and spread joy. You are meant to inspire others through your unique talents and optimism.",
                potential: "Your hidden potential includes artistic mastery, communication gifts, and the ability to uplift others through expression.",
                challenge: "Your main challenge is focusing your creative energy and avoiding scattered efforts or superficial engagement.",
                success_keys: [
                    "Express yourself authentically",
                    "Finish what you start",
                    "Connect with your community",
                    "Balance fun with responsibility",
                ],
            },
        ),
        (
            4,
            Insight {
                purpose: "Your life purpose is to build lasting foundations and create stability. You are meant to be a reliable pillar in your community.",
                potential: "Your hidden potential includes architectural genius, strategic planning, and the ability to create lasting structures of success.",
                challenge: "Your main challenge is learning flexibility and adaptability while maintaining your stability and discipline.",
                success_keys: [
                    "Create solid foundations first",
                    "Break large goals into steps",
                    "Value quality over quantity",
                    "Build lasting systems",
                ],
            },
        ),
        (
            5,
            Insight {
                purpose: "Your life purpose is to explore, adapt, and bring change. You are meant to be a catalyst for growth and transformation.",
                potential: "Your hidden potential includes adaptability that borders on genius, freedom-oriented innovation, and transformative energy.",
                challenge: "Your main challenge is channeling your restlessness into productive pursuits and avoiding self-destructive patterns.",
                success_keys: [
                    "Embrace calculated risks",
                    "Channel energy into passionate pursuits",
                    "Maintain some structure",
                    "Help others evolve",
                ],
            },
        ),
        (
            6,
            Insight {
                purpose: "Your life purpose is to nurture, care, and serve others. You are meant to be a healer and beacon of compassion.",
                potential: "Your hidden potential includes deep compassion, problem-solving for others, and the ability to create harmonious communities.",
                challenge: "Your main challenge is setting healthy boundaries and avoiding burnout from excessive caregiving.",
                success_keys: [
                    "Serve with wisdom not sacrifice",
                    "Create healthy boundaries",
                    "Build strong family bonds",
                    "Trust your nurturing gifts",
                ],
            },
        ),
        (
            7,
            Insight {
                purpose: "Your life purpose is to seek truth and wisdom. You are meant to be a spiritual guide and deep thinker.",
                potential: "Your hidden potential includes mystical insight, scientific breakthrough thinking, and spiritual enlightenment.",
                challenge: "Your main challenge is overcoming isolation and trusting others while maintaining your introspective nature.",
                success_keys: [
                    "Follow your spiritual path",
                    "Share your knowledge",
                    "Trust your analysis",
                    "Develop meaningful connections",
                ],
            },
        ),
        (
            8,
            Insight {
                purpose: "Your life purpose is to achieve material success and exercise authority. You are meant to build empires and create abundance.",
                potential: "Your hidden potential includes business acumen, executive magnetism, and the capacity to build enormous wealth and influence.",
                challenge: "Your main challenge is balancing material ambition with spiritual values and ethical considerations.",
                success_keys: [
                    "Balance profit with purpose",
                    "Use power for good",
                    "Create opportunities for others",
                    "Remember spiritual wealth matters",
                ],
            },
        ),
        (
            9,
            Insight {
                purpose: "Your life purpose is to embrace universal love and humanitarian ideals. You are meant to uplift humanity.",
                potential: "Your hidden potential includes humanitarian vision, universal compassion, and the ability to improve the world.",
                challenge: "Your main challenge is achieving closure and moving forward while maintaining your universal compassion.",
                success_keys: [
                    "Complete cycles with grace",
                    "Embrace forgiveness",
                    "Think globally",
                    "Inspire through compassion",
                ],
            },
        ),
        (
            11,
            Insight {
                purpose: "Your life purpose is to inspire and illuminate others through spiritual awakening. You are meant to be a visionary teacher.",
                potential: "Your hidden potential includes visionary insight, spiritual mastery, and the ability to inspire mass transformation.",
                challenge: "Your main challenge is managing anxiety and perfectionism while trusting your intuitive insights.",
                success_keys: [
                    "Trust your visions",
                    "Develop your intuition",
                    "Teach and inspire",
                    "Balance idealism with reality",
                ],
            },
        ),
        (
            22,
            Insight {
                purpose: "Your life purpose is to build a legacy and transform the world. You are the master builder of grand visions.",
                potential: "Your hidden potential includes the ability to manifest grand visions, create lasting legacies, and transform societies.",
                challenge: "Your main challenge is believing in yourself enough to pursue your grand vision without self-doubt.",
                success_keys: [
                    "Believe in your vision",
                    "Break dreams into phases",
                    "Lead with integrity",
                    "Build for the future",
                ],
            },
        ),
        (
            33,
            Insight {
                purpose: "Your life purpose is to be a teacher of compassion and enlightenment. You are meant to guide humanity toward higher consciousness.",
                potential: "Your hidden potential includes enlightened compassion, healing mastery, and the ability to awaken human consciousness.",
                challenge: "Your main challenge is protecting your own well-being while serving others with unconditional love.",
                success_keys: [
                    "Lead with unconditional love",
                    "Teach what you learn",
                    "Heal yourself first",
                    "Inspire by example",
                ],
            },
        ),
    ]
    .into_iter()
    .filter_map(|(n, entry)| Some((CanonicalNumber::new(n)?, entry)))
    .collect()
});

/// Insight for `number`; numbers without an entry get [`FALLBACK_INSIGHT`].
pub fn insight_for(number: u32) -> &'static Insight {
    CanonicalNumber::new(number)
        .and_then(|n| INSIGHTS.get(&n))
        .unwrap_or(&FALLBACK_INSIGHT)
}

/// Whether `number` has a dedicated insight entry.
pub fn has_insight(number: u32) -> bool {
    CanonicalNumber::new(number).is_some_and(|n| INSIGHTS.contains_key(&n))
}
