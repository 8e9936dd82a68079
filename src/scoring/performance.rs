use serde::{Deserialize, Serialize};

use crate::scoring::features::{extract_text_signals, TextSignals};
use crate::{clamp_score, count_keywords, round_to, Platform};

const EMOTIONAL_WORDS: [&str; 7] = [
    "amazing",
    "love",
    "exciting",
    "incredible",
    "powerful",
    "transform",
    "discover",
];

const CTA_WORDS: [&str; 9] = [
    "click",
    "share",
    "comment",
    "follow",
    "subscribe",
    "learn",
    "discover",
    "get",
    "try",
];

const TIP_THRESHOLD: f64 = 60.0;

/// Per-metric scores, each in `[0, 100]`. Field order is the order metrics are
/// reported and checked for tips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScoreSet {
    pub readability: f64,
    pub emotional_appeal: f64,
    pub clarity: f64,
    pub call_to_action: f64,
    pub hashtag_optimization: f64,
    pub length_optimization: f64,
}

impl FeatureScoreSet {
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("readability", self.readability),
            ("emotional_appeal", self.emotional_appeal),
            ("clarity", self.clarity),
            ("call_to_action", self.call_to_action),
            ("hashtag_optimization", self.hashtag_optimization),
            ("length_optimization", self.length_optimization),
        ]
    }

    pub fn mean(&self) -> f64 {
        let entries = self.entries();
        entries.iter().map(|(_, score)| score).sum::<f64>() / entries.len() as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::APlus
        } else if score >= 80.0 {
            Grade::A
        } else if score >= 70.0 {
            Grade::B
        } else if score >= 60.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentScore {
    pub overall_score: f64,
    pub breakdown: FeatureScoreSet,
    pub grade: Grade,
    pub improvement_tips: Vec<String>,
}

pub fn score_content(text: &str, platform: Platform) -> ContentScore {
    let signals = extract_text_signals(text);
    let breakdown = FeatureScoreSet {
        readability: readability(&signals),
        emotional_appeal: emotional_appeal(&signals),
        clarity: clarity(&signals),
        call_to_action: cta_strength(&signals),
        hashtag_optimization: hashtag_score(signals.hashtags),
        length_optimization: length_score(signals.char_count, platform),
    };

    // Grade from the unrounded mean so 89.96 reports as 90.0 but grades A.
    let overall = breakdown.mean();

    ContentScore {
        overall_score: round_to(overall, 1),
        grade: Grade::from_score(overall),
        improvement_tips: improvement_tips(&breakdown),
        breakdown,
    }
}

pub fn readability(signals: &TextSignals) -> f64 {
    clamp_score(100.0 - (signals.avg_word_len() - 5.0) * 10.0)
}

pub fn emotional_appeal(signals: &TextSignals) -> f64 {
    let count = count_keywords(&signals.lowercase, &EMOTIONAL_WORDS);
    (50.0 + count as f64 * 15.0).min(100.0)
}

pub fn clarity(signals: &TextSignals) -> f64 {
    clamp_score(100.0 - (signals.avg_sentence_len() - 80.0).abs())
}

pub fn cta_strength(signals: &TextSignals) -> f64 {
    let count = count_keywords(&signals.lowercase, &CTA_WORDS);
    (40.0 + count as f64 * 20.0).min(100.0)
}

/// Scores the raw `#` count, not the number of distinct tags.
pub fn hashtag_score(hashtags: usize) -> f64 {
    match hashtags {
        0 => 30.0,
        1..=5 => 90.0,
        6..=10 => 70.0,
        _ => 40.0,
    }
}

pub fn length_score(char_count: usize, platform: Platform) -> f64 {
    let target = platform.target_length();
    let diff = (char_count as f64 - target).abs() / target;
    clamp_score(100.0 - diff * 100.0)
}

fn improvement_tips(scores: &FeatureScoreSet) -> Vec<String> {
    let tips: Vec<String> = scores
        .entries()
        .iter()
        .filter(|(_, score)| *score < TIP_THRESHOLD)
        .map(|(metric, score)| {
            format!(
                "Improve {} (currently {:.0}/100)",
                metric.replace('_', " "),
                score
            )
        })
        .collect();

    if tips.is_empty() {
        vec!["Your content is well-optimized!".to_string()]
    } else {
        tips
    }
}
