use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

const CONTENT_IDEA_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct TrendingHashtag {
    pub tag: &'static str,
    pub volume: u64,
    pub growth: &'static str,
    pub sentiment: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendingTopic {
    pub topic: &'static str,
    pub relevance: u8,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    pub title: &'static str,
    pub source: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub hashtags: Vec<TrendingHashtag>,
    pub topics: Vec<TrendingTopic>,
    pub news: Vec<NewsItem>,
    pub last_updated: String,
    pub recommended_content_ideas: Vec<String>,
}

fn hashtag(
    tag: &'static str,
    volume: u64,
    growth: &'static str,
    sentiment: &'static str,
) -> TrendingHashtag {
    TrendingHashtag {
        tag,
        volume,
        growth,
        sentiment,
    }
}

fn topic(topic: &'static str, relevance: u8, category: &'static str) -> TrendingTopic {
    TrendingTopic {
        topic,
        relevance,
        category,
    }
}

fn news(title: &'static str, source: &'static str, impact: &'static str) -> NewsItem {
    NewsItem {
        title,
        source,
        impact,
    }
}

pub fn trending_hashtags() -> Vec<TrendingHashtag> {
    vec![
        hashtag("#AI", 1_250_000, "+45%", "positive"),
        hashtag("#TechNews", 890_000, "+23%", "neutral"),
        hashtag("#Sustainability", 750_000, "+67%", "positive"),
        hashtag("#RemoteWork", 620_000, "+12%", "mixed"),
        hashtag("#Innovation", 580_000, "+34%", "positive"),
        hashtag("#DigitalMarketing", 520_000, "+28%", "positive"),
        hashtag("#Startup", 480_000, "+19%", "positive"),
        hashtag("#Blockchain", 450_000, "-5%", "neutral"),
    ]
}

pub fn trending_topics() -> Vec<TrendingTopic> {
    vec![
        topic("Artificial Intelligence in Marketing", 95, "Technology"),
        topic("Social Media Algorithm Changes", 88, "Social Media"),
        topic("Video Content Strategy", 85, "Content"),
        topic("Influencer Partnerships", 82, "Marketing"),
        topic("Privacy Regulations", 78, "Legal"),
    ]
}

fn news_items() -> Vec<NewsItem> {
    vec![
        news(
            "New Instagram Feature Boosts Creator Earnings",
            "TechCrunch",
            "high",
        ),
        news(
            "Twitter Updates Character Limit Policy",
            "The Verge",
            "medium",
        ),
        news("Facebook Announces AI Content Tools", "Reuters", "high"),
        news("LinkedIn Launches Creator Mode Updates", "Forbes", "medium"),
    ]
}

pub fn content_ideas(topics: &[TrendingTopic]) -> Vec<String> {
    topics
        .iter()
        .take(CONTENT_IDEA_COUNT)
        .map(|topic| format!("Create a post about: {}", topic.topic))
        .collect()
}

pub fn detect_trends(now: DateTime<Utc>) -> TrendReport {
    let topics = trending_topics();
    let recommended_content_ideas = content_ideas(&topics);

    TrendReport {
        hashtags: trending_hashtags(),
        topics,
        news: news_items(),
        last_updated: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        recommended_content_ideas,
    }
}
