//! Score tier classification for marker styling.
//!
//! The raw score is normalized to a 0–100 "difficulty percentage" by scaling
//! against a fixed constant. Tiers are an ordered rule list evaluated top to
//! bottom where the LAST matching rule wins, mirroring cumulative stylesheet
//! classes: the Normal and Hard predicates overlap above 30%, and Hard wins
//! only because it is applied after Normal. Do not fold these into disjoint
//! ranges.

/// Denominator for score normalization.
pub const SCORE_SCALE: f64 = 9999.0;

/// Commute difficulty tier of an unclustered property marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    Easy,
    Normal,
    Hard,
}

/// Raw score → 0–100 difficulty percentage.
pub fn normalized_percent(score: f64) -> f64 {
    score / SCORE_SCALE * 100.0
}

const TIER_RULES: [(fn(f64) -> bool, ScoreTier); 3] = [
    (|pct| pct <= 20.0, ScoreTier::Easy),
    (|pct| pct > 20.0, ScoreTier::Normal),
    (|pct| pct >= 30.0, ScoreTier::Hard),
];

/// Classify a raw score into its display tier.
pub fn classify_score(score: f64) -> ScoreTier {
    let pct = normalized_percent(score);
    let mut tier = ScoreTier::Easy;
    for (applies, candidate) in TIER_RULES {
        if applies(pct) {
            tier = candidate;
        }
    }
    tier
}
