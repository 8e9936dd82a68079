use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::scoring::features::{
    extract_text_signals, TextSignals, ENGAGEMENT_CTA_WORDS, RECOMMENDATION_CTA_WORDS,
};
use crate::{round_to, ContentType, Platform};

const BASE_SCORE: i64 = 50;
const FOLLOWER_RANGE: (i64, i64) = (1_000, 50_000);
const ENGAGEMENT_RATE_RANGE: (f64, f64) = (0.02, 0.08);
const CONFIDENCE_RANGE: (f64, f64) = (0.75, 0.95);
const VIRAL_FACTOR_RANGE: (f64, f64) = (0.3, 0.6);
const VIRAL_CAP: f64 = 0.95;

#[derive(Debug, Clone, Default)]
pub struct ContentInput {
    pub text: String,
    pub platform: Platform,
    pub content_type: ContentType,
    /// Accepted for scheduling callers; the heuristics do not read it.
    pub scheduled_time: Option<DateTime<Utc>>,
}

impl ContentInput {
    pub fn new(text: impl Into<String>, platform: Platform, content_type: ContentType) -> Self {
        Self {
            text: text.into(),
            platform,
            content_type,
            scheduled_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPrediction {
    pub engagement_score: u8,
    pub predicted_likes: u64,
    pub predicted_comments: u64,
    pub predicted_shares: u64,
    pub predicted_reach: u64,
    pub confidence: f64,
    pub recommendations: Vec<String>,
    pub best_time_to_post: String,
    pub viral_probability: f64,
}

/// Additive adjustments on top of the base score of 50, before the platform
/// multiplier is applied.
pub fn base_score(signals: &TextSignals) -> i64 {
    let mut score = BASE_SCORE;

    if (100..=280).contains(&signals.char_count) {
        score += 15;
    } else if signals.char_count < 50 {
        score -= 10;
    }

    if signals.has_hashtag() {
        score += 10;
    }
    if signals.has_emoji() {
        score += 8;
    }
    if signals.has_question() {
        score += 12;
    }
    if signals.has_cta(&ENGAGEMENT_CTA_WORDS) {
        score += 15;
    }

    score
}

pub fn engagement_score(input: &ContentInput) -> u8 {
    let signals = extract_text_signals(&input.text);
    final_score(&signals, input)
}

fn final_score(signals: &TextSignals, input: &ContentInput) -> u8 {
    let multiplier = input.platform.engagement_multiplier(input.content_type);
    // Applied to the unclamped base; halves round to even (58.5 -> 58).
    let scaled = (base_score(signals) as f64 * multiplier).round_ties_even();
    scaled.max(0.0).min(100.0) as u8
}

pub fn predict_engagement<R>(input: &ContentInput, rng: &mut R) -> EngagementPrediction
where
    R: RandomSource + ?Sized,
{
    let signals = extract_text_signals(&input.text);
    let score = final_score(&signals, input);
    let score_ratio = score as f64 / 100.0;

    let followers = rng.int_in(FOLLOWER_RANGE.0, FOLLOWER_RANGE.1) as f64;
    let engagement_rate =
        score_ratio * rng.float_in(ENGAGEMENT_RATE_RANGE.0, ENGAGEMENT_RATE_RANGE.1);
    let likes_basis = followers * engagement_rate;

    let confidence = round_to(rng.float_in(CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1), 2);
    let viral_probability = round_to(
        (score_ratio * rng.float_in(VIRAL_FACTOR_RANGE.0, VIRAL_FACTOR_RANGE.1)).min(VIRAL_CAP),
        2,
    );

    EngagementPrediction {
        engagement_score: score,
        predicted_likes: floor_count(likes_basis),
        predicted_comments: floor_count(likes_basis * 0.1),
        predicted_shares: floor_count(likes_basis * 0.05),
        predicted_reach: floor_count(followers * (score as f64 / 50.0)),
        confidence,
        recommendations: build_recommendations(&signals, input),
        best_time_to_post: input.platform.best_posting_time().to_string(),
        viral_probability,
    }
}

fn build_recommendations(signals: &TextSignals, input: &ContentInput) -> Vec<String> {
    let mut recommendations = Vec::new();
    if signals.char_count < 100 {
        recommendations.push("Add more detail to your content for better engagement".to_string());
    }
    if !signals.has_hashtag() {
        recommendations.push("Add 3-5 relevant hashtags to increase discoverability".to_string());
    }
    if !signals.has_question() {
        recommendations.push("Include a question to encourage comments".to_string());
    }
    if input.platform == Platform::Instagram && input.content_type == ContentType::Text {
        recommendations.push("Consider adding an image or video for Instagram".to_string());
    }
    if !signals.has_cta(&RECOMMENDATION_CTA_WORDS) {
        recommendations.push("Add a clear call-to-action".to_string());
    }

    if recommendations.is_empty() {
        recommendations
            .push("Your content looks optimized! Consider A/B testing variations".to_string());
    }

    recommendations
}

fn floor_count(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    value.floor() as u64
}
