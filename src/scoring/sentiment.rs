use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::{count_keywords, round_to};

const POSITIVE_WORDS: [&str; 10] = [
    "love",
    "amazing",
    "great",
    "helpful",
    "awesome",
    "fantastic",
    "excellent",
    "best",
    "perfect",
    "thank",
];

const NEGATIVE_WORDS: [&str; 9] = [
    "bad",
    "worst",
    "hate",
    "terrible",
    "poor",
    "disappointed",
    "boring",
    "meh",
    "never",
];

const CONFIDENCE_RANGE: (f64, f64) = (0.7, 0.95);

/// Comments analysed when the caller supplies none.
pub const DEMO_COMMENTS: [&str; 8] = [
    "Love this content! So helpful 🙌",
    "This is exactly what I needed",
    "Not sure I agree with this take...",
    "Amazing work as always!",
    "Could be better, expected more",
    "Shared with my team!",
    "This changed my perspective",
    "Meh, nothing new here",
];

const KEY_THEMES: [&str; 3] = ["Product quality", "Customer service", "Value for money"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Precedence used when two classes share the highest count.
    pub const PRECEDENCE: [Sentiment; 3] =
        [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSentiment {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub overall_sentiment: Sentiment,
    pub sentiment_score: f64,
    pub distribution: SentimentDistribution,
    pub analyzed_comments: Vec<CommentSentiment>,
    pub key_themes: Vec<String>,
    pub action_items: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SentimentCounts {
    positive: usize,
    negative: usize,
    neutral: usize,
}

impl SentimentCounts {
    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    fn dominant(&self) -> Sentiment {
        let mut best = Sentiment::PRECEDENCE[0];
        for candidate in Sentiment::PRECEDENCE.iter().skip(1) {
            if self.get(*candidate) > self.get(best) {
                best = *candidate;
            }
        }
        best
    }
}

/// Classifies one comment by keyword counts. Returns the class and its
/// unrounded score.
pub fn classify_comment(comment: &str) -> (Sentiment, f64) {
    let lowercase = comment.to_lowercase();
    let positive = count_keywords(&lowercase, &POSITIVE_WORDS);
    let negative = count_keywords(&lowercase, &NEGATIVE_WORDS);

    if positive > negative {
        (Sentiment::Positive, (0.6 + positive as f64 * 0.1).min(1.0))
    } else if negative > positive {
        (Sentiment::Negative, (0.4 - negative as f64 * 0.1).max(0.0))
    } else {
        (Sentiment::Neutral, 0.5)
    }
}

pub fn analyze_sentiment<R>(comments: &[String], rng: &mut R) -> SentimentReport
where
    R: RandomSource + ?Sized,
{
    let comments: Vec<String> = if comments.is_empty() {
        DEMO_COMMENTS.iter().map(|comment| comment.to_string()).collect()
    } else {
        comments.to_vec()
    };

    let mut counts = SentimentCounts::default();
    let mut analyzed = Vec::with_capacity(comments.len());

    for comment in comments {
        let (sentiment, score) = classify_comment(&comment);
        counts.record(sentiment);
        analyzed.push(CommentSentiment {
            text: comment,
            sentiment,
            confidence: round_to(rng.float_in(CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1), 2),
            score: round_to(score, 2),
        });
    }

    let total = analyzed.len() as f64;
    let score_sum: f64 = analyzed.iter().map(|comment| comment.score).sum();
    let share = |count: usize| round_to(count as f64 / total * 100.0, 1);

    SentimentReport {
        overall_sentiment: counts.dominant(),
        sentiment_score: round_to(score_sum / total, 2),
        distribution: SentimentDistribution {
            positive: share(counts.positive),
            negative: share(counts.negative),
            neutral: share(counts.neutral),
        },
        analyzed_comments: analyzed,
        key_themes: KEY_THEMES.iter().map(|theme| theme.to_string()).collect(),
        action_items: action_items(&counts),
    }
}

fn action_items(counts: &SentimentCounts) -> Vec<String> {
    let mut actions = Vec::new();
    if counts.negative > counts.positive {
        actions.push("Address negative feedback promptly".to_string());
        actions.push("Review recent content strategy".to_string());
    }
    if counts.neutral > counts.positive {
        actions.push("Create more engaging, opinion-provoking content".to_string());
    }
    if actions.is_empty() {
        actions.push("Keep up the great engagement!".to_string());
    }
    actions
}
