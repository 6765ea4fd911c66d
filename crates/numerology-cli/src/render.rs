//! Plain-text rendering of engine results for the terminal.

use std::fmt::Write;

use numerology_core::{Affinity, Caution, CompatibilityReport, Insight, MeaningEntry, Tier};

pub fn number_line(label: &str, number: u32, is_master: bool) -> String {
    if is_master {
        format!("{label}: {number} (master number)")
    } else {
        format!("{label}: {number}")
    }
}

pub fn meaning(m: &MeaningEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", m.name);
    let _ = writeln!(out, "  personality: {}", m.personality);
    let _ = writeln!(out, "  strengths:   {}", m.strengths.join(", "));
    let _ = writeln!(out, "  weaknesses:  {}", m.weaknesses.join(", "));
    let _ = writeln!(out, "  career:      {}", m.career.join(", "));
    let _ = writeln!(out, "  love:        {}", m.love);
    let _ = writeln!(out, "  color:       {}", m.color);
    let _ = writeln!(out, "  lucky days:  {}", m.day);
    let _ = write!(out, "  compatible:  {}", m.compatible);
    out
}

pub fn insight(i: &Insight) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "purpose:   {}", i.purpose);
    let _ = writeln!(out, "potential: {}", i.potential);
    let _ = writeln!(out, "challenge: {}", i.challenge);
    let _ = write!(out, "keys to success:");
    for (idx, key) in i.success_keys.iter().enumerate() {
        let _ = write!(out, "\n  {}. {key}", idx + 1);
    }
    out
}

fn tier_sentence(tier: Tier) -> &'static str {
    match tier {
        Tier::CosmicallyAligned => "are cosmically aligned! This is a match made in destiny.",
        Tier::HighlyCompatible => {
            "are highly compatible. Strong natural synergy exists between these numbers."
        }
        Tier::GoodChemistry => {
            "share good chemistry. With effort, this can be a harmonious pairing."
        }
        Tier::Potential => {
            "have potential but need to work on differences. Growth comes through understanding."
        }
        Tier::Different => "are different. Success requires significant compromise and effort.",
    }
}

fn affinity_sentence(affinity: Affinity) -> &'static str {
    match affinity {
        Affinity::Power => "Both are powerful and ambitious",
        Affinity::Stability => "Shared appreciation for stability",
        Affinity::Creativity => "Creative and free-spirited harmony",
    }
}

fn caution_sentence(caution: Caution) -> &'static str {
    match caution {
        Caution::Dominance => "One may dominate while other submits",
        Caution::CreativeVsPractical => "Creative one may find practical one boring",
        Caution::FreedomVsControl => "Freedom-seeker vs control-seeker tension",
    }
}

fn side_label(number: u32, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{name} ({number})"),
        None => number.to_string(),
    }
}

pub fn report(r: &CompatibilityReport) -> String {
    let label_a = side_label(r.a, r.profile_a.as_ref().map(|p| p.name));
    let label_b = side_label(r.b, r.profile_b.as_ref().map(|p| p.name));

    let mut out = String::new();
    let _ = writeln!(out, "compatibility: {}%", r.score);
    let _ = writeln!(out, "{label_a} and {label_b} {}", tier_sentence(r.tier));

    let mut strengths: Vec<String> = r
        .affinities
        .iter()
        .map(|a| affinity_sentence(*a).to_string())
        .collect();
    let mut cautions: Vec<String> = r
        .cautions
        .iter()
        .map(|c| caution_sentence(*c).to_string())
        .collect();
    for profile in [&r.profile_a, &r.profile_b].into_iter().flatten() {
        strengths.push(format!(
            "{}'s strengths: {}",
            profile.name,
            profile.strengths.join(", ")
        ));
        if let Some(weakness) = profile.weakness {
            cautions.push(format!("{}'s potential weakness: {weakness}", profile.name));
        }
    }

    if strengths.is_empty() {
        strengths.push("Unique strengths to explore together".to_string());
    }
    if cautions.is_empty() {
        cautions.push("Work through differences with communication".to_string());
    }

    let _ = write!(out, "strengths:");
    for s in &strengths {
        let _ = write!(out, "\n  - {s}");
    }
    let _ = write!(out, "\ncautions:");
    for c in &cautions {
        let _ = write!(out, "\n  - {c}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use numerology_core::{compatibility_report, insight_for, meaning_for};

    #[test]
    fn test_number_line() {
        assert_eq!(number_line("life path", 7, false), "life path: 7");
        assert_eq!(
            number_line("life path", 33, true),
            "life path: 33 (master number)"
        );
    }

    #[test]
    fn test_meaning_lists_all_fields() {
        let text = meaning(meaning_for(3).unwrap());
        assert!(text.starts_with("Creator\n"));
        assert!(text.contains("strengths:   Creativity, Communication"));
        assert!(text.contains("lucky days:  3, 12, 21, 30"));
    }

    #[test]
    fn test_insight_numbers_keys() {
        let text = insight(insight_for(1));
        assert!(text.contains("\n  1. Trust your instincts and bold vision"));
        assert!(text.contains("\n  4. Develop patience and humility"));
    }

    #[test]
    fn test_report_text() {
        let text = report(&compatibility_report(1, 2).unwrap());
        assert!(text.starts_with("compatibility: 80%\n"));
        assert!(text.contains("Leader (1) and Peacemaker (2) share good chemistry."));
        assert!(text.contains("One may dominate while other submits"));
        assert!(text.contains("Leader's potential weakness: Arrogance"));
    }

    #[test]
    fn test_report_without_catalog_names() {
        let text = report(&compatibility_report(10, 30).unwrap());
        assert!(text.contains("10 and 30 are different."));
        assert!(text.contains("  - Unique strengths to explore together"));
        assert!(text.contains("  - Work through differences with communication"));
    }
}
