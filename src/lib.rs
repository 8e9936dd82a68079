pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod random;
pub mod scoring;
pub mod server;
pub mod store;
pub mod telemetry;

use serde::{Deserialize, Serialize};

pub use random::RandomSource;
pub use scoring::{
    analyze_sentiment, predict_engagement, rewrite_caption, score_content, CaptionRewrite,
    CaptionVariant, ContentInput, ContentScore, EngagementPrediction, FeatureScoreSet, Grade,
    Sentiment, SentimentReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Twitter,
    Instagram,
    Facebook,
    Linkedin,
    Other,
}

impl Platform {
    /// Unknown names resolve to `Other`, which uses the generic targets.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "twitter" => Platform::Twitter,
            "instagram" => Platform::Instagram,
            "facebook" => Platform::Facebook,
            "linkedin" => Platform::Linkedin,
            _ => Platform::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Linkedin => "linkedin",
            Platform::Other => "other",
        }
    }

    pub fn target_length(self) -> f64 {
        match self {
            Platform::Twitter => 280.0,
            Platform::Instagram => 150.0,
            Platform::Facebook => 250.0,
            Platform::Linkedin | Platform::Other => 200.0,
        }
    }

    pub fn best_posting_time(self) -> &'static str {
        match self {
            Platform::Twitter => "9:00 AM or 12:00 PM",
            Platform::Instagram => "11:00 AM or 7:00 PM",
            Platform::Facebook => "1:00 PM or 4:00 PM",
            Platform::Linkedin => "7:00 AM or 5:00 PM",
            Platform::Other => "10:00 AM",
        }
    }

    pub fn engagement_multiplier(self, content_type: ContentType) -> f64 {
        let is_image = matches!(content_type, ContentType::Image);
        match self {
            Platform::Twitter | Platform::Other => 1.0,
            Platform::Facebook => 1.1,
            Platform::Instagram => {
                if is_image {
                    1.2
                } else {
                    0.9
                }
            }
            Platform::Linkedin => {
                if is_image {
                    0.9
                } else {
                    1.1
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Text,
    Image,
    Video,
    Other,
}

impl ContentType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "text" => ContentType::Text,
            "image" => ContentType::Image,
            "video" => ContentType::Video,
            _ => ContentType::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptionStyle {
    #[default]
    Engaging,
    Professional,
    Casual,
    Viral,
}

impl CaptionStyle {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "professional" => CaptionStyle::Professional,
            "casual" => CaptionStyle::Casual,
            "viral" => CaptionStyle::Viral,
            _ => CaptionStyle::Engaging,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CaptionStyle::Engaging => "engaging",
            CaptionStyle::Professional => "professional",
            CaptionStyle::Casual => "casual",
            CaptionStyle::Viral => "viral",
        }
    }
}

/// Number of keywords that occur anywhere in `lowercase`. Each keyword counts
/// at most once.
pub(crate) fn count_keywords(lowercase: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| lowercase.contains(*keyword))
        .count()
}

pub(crate) fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0).min(100.0)
}

/// Rounds to `digits` decimals. Exact halves go to the even neighbour, so
/// `round_to(6.25, 1)` is `6.2`.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round_ties_even() / factor
}

pub fn format_number(value: u64) -> String {
    let mut chars: Vec<char> = value.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
