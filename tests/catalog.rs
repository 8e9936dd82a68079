mod common;

use chrono::{TimeZone, Utc};
use common::ScriptedRandom;
use social_pulse::catalog::{
    analyze_competitors, detect_trends, extract_insights, generate_multilingual, sample_posts,
    segment_audience, PostingRecord,
};

fn record(hour: u8, engagement: f64, content_type: &str) -> PostingRecord {
    PostingRecord {
        hour,
        engagement,
        content_type: content_type.to_string(),
    }
}

#[test]
fn trends_suggest_ideas_from_top_topics() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let report = detect_trends(now);

    assert_eq!(report.hashtags.len(), 8);
    assert_eq!(report.hashtags[0].tag, "#AI");
    assert_eq!(report.topics.len(), 5);
    assert_eq!(report.news.len(), 4);
    assert_eq!(report.last_updated, "2024-05-01T12:30:00Z");
    assert_eq!(
        report.recommended_content_ideas,
        vec![
            "Create a post about: Artificial Intelligence in Marketing".to_string(),
            "Create a post about: Social Media Algorithm Changes".to_string(),
            "Create a post about: Video Content Strategy".to_string(),
        ]
    );
}

#[test]
fn audience_total_comes_from_the_random_source() {
    let mut rng = ScriptedRandom::new().ints(&[42_000]);
    let report = segment_audience(&mut rng);

    assert_eq!(report.total_audience, 42_000);
    assert_eq!(report.segments.len(), 4);
    let share: u32 = report.segments.iter().map(|segment| segment.size as u32).sum();
    assert_eq!(share, 100);
    assert_eq!(report.recommendations.len(), 3);
}

#[test]
fn competitor_report_ignores_requested_handles() {
    let handles = vec!["@someone".to_string()];
    let report = analyze_competitors(Some(&handles));

    assert_eq!(report.competitors.len(), 3);
    assert_eq!(report.competitors[0].handle, "@competitor1");
    assert_eq!(report.your_position.rank, 2);
    assert_eq!(analyze_competitors(None).competitors.len(), 3);
}

#[test]
fn translations_default_to_every_supported_language() {
    let report = generate_multilingual("Hello world", None);

    assert_eq!(report.translations.len(), 5);
    assert_eq!(
        report.supported_languages,
        vec!["spanish", "french", "german", "portuguese", "japanese"]
    );
    assert_eq!(
        report.translations["spanish"].text,
        "🌟 Hello world... [Contenido traducido al español]"
    );

    let empty: Vec<String> = Vec::new();
    let report = generate_multilingual("Hello", Some(&empty));
    assert_eq!(report.translations.len(), 5);
}

#[test]
fn unknown_languages_are_skipped_and_keys_keep_their_case() {
    let languages = vec!["Spanish".to_string(), "klingon".to_string()];
    let report = generate_multilingual("Hello world", Some(&languages));

    assert_eq!(report.translations.len(), 1);
    assert!(report.translations.contains_key("Spanish"));
    assert!(!report.translations.contains_key("klingon"));
}

#[test]
fn translation_preview_is_truncated_to_fifty_characters() {
    let content = "é".repeat(80);
    let languages = vec!["german".to_string()];
    let report = generate_multilingual(&content, Some(&languages));

    let expected = format!("🌟 {}... [Ins Deutsche übersetzter Inhalt]", "é".repeat(50));
    assert_eq!(report.translations["german"].text, expected);
}

#[test]
fn sample_table_favours_evening_video() {
    let insights = extract_insights(&sample_posts()).unwrap();

    assert_eq!(insights.best_posting_hour, 18);
    assert_eq!(insights.best_content_type, "video");
}

#[test]
fn insight_ties_go_to_the_smallest_key() {
    let posts = vec![
        record(20, 100.0, "video"),
        record(8, 100.0, "image"),
        record(8, 100.0, "image"),
    ];
    let insights = extract_insights(&posts).unwrap();

    assert_eq!(insights.best_posting_hour, 8);
    assert_eq!(insights.best_content_type, "image");
}

#[test]
fn insights_use_mean_not_total() {
    let posts = vec![
        record(9, 50.0, "text"),
        record(9, 50.0, "text"),
        record(9, 50.0, "text"),
        record(14, 90.0, "image"),
    ];
    let insights = extract_insights(&posts).unwrap();

    assert_eq!(insights.best_posting_hour, 14);
    assert_eq!(insights.best_content_type, "image");
}

#[test]
fn empty_table_has_no_insights() {
    assert!(extract_insights(&[]).is_none());
}
