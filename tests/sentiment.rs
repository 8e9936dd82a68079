mod common;

use common::{approx_eq, ScriptedRandom};
use rand::{rngs::StdRng, SeedableRng};
use social_pulse::scoring::sentiment::{classify_comment, DEMO_COMMENTS};
use social_pulse::{analyze_sentiment, Sentiment};

fn comments(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn positive_keywords_raise_the_score() {
    let mut rng = ScriptedRandom::new().floats(&[0.9]);
    let report = analyze_sentiment(&comments(&["I love this, amazing!"]), &mut rng);

    let comment = &report.analyzed_comments[0];
    assert_eq!(comment.sentiment, Sentiment::Positive);
    assert!(approx_eq(comment.score, 0.8));
    assert!(approx_eq(comment.confidence, 0.9));
    assert_eq!(report.overall_sentiment, Sentiment::Positive);
    assert_eq!(
        report.action_items,
        vec!["Keep up the great engagement!".to_string()]
    );
}

#[test]
fn negative_keywords_lower_the_score() {
    let (sentiment, score) = classify_comment("This is terrible and boring");
    assert_eq!(sentiment, Sentiment::Negative);
    assert!(approx_eq(score, 0.2));
}

#[test]
fn keyword_counts_once_per_comment_and_ignores_case() {
    let (sentiment, score) = classify_comment("LOVE love Love");
    assert_eq!(sentiment, Sentiment::Positive);
    assert!(approx_eq(score, 0.7));
}

#[test]
fn balanced_or_empty_comments_are_neutral() {
    let neutral = (Sentiment::Neutral, 0.5);
    assert_eq!(classify_comment("love it, hate it"), neutral);
    assert_eq!(classify_comment("just a comment"), neutral);
}

#[test]
fn many_negative_keywords_bottom_out_at_zero() {
    let (sentiment, score) =
        classify_comment("bad, worst, terrible and boring, never again, poor");
    assert_eq!(sentiment, Sentiment::Negative);
    assert!(approx_eq(score, 0.0));
}

#[test]
fn empty_input_uses_demo_comments() {
    let mut rng = ScriptedRandom::new();
    let report = analyze_sentiment(&[], &mut rng);

    assert_eq!(report.analyzed_comments.len(), DEMO_COMMENTS.len());
    assert_eq!(report.overall_sentiment, Sentiment::Neutral);
    assert!(approx_eq(report.distribution.positive, 25.0));
    assert!(approx_eq(report.distribution.negative, 12.5));
    assert!(approx_eq(report.distribution.neutral, 62.5));
    assert!(approx_eq(report.sentiment_score, 0.54));
    assert_eq!(
        report.action_items,
        vec!["Create more engaging, opinion-provoking content".to_string()]
    );
    assert_eq!(
        report.key_themes,
        vec![
            "Product quality".to_string(),
            "Customer service".to_string(),
            "Value for money".to_string(),
        ]
    );
}

#[test]
fn ties_prefer_positive_then_negative() {
    let mut rng = ScriptedRandom::new();
    let report = analyze_sentiment(&comments(&["I love it", "I hate it"]), &mut rng);
    assert_eq!(report.overall_sentiment, Sentiment::Positive);

    let report = analyze_sentiment(&comments(&["meh", "ok then"]), &mut rng);
    assert_eq!(report.overall_sentiment, Sentiment::Negative);
}

#[test]
fn distribution_is_not_renormalised() {
    let mut rng = ScriptedRandom::new();
    let report = analyze_sentiment(&comments(&["great", "bad", "fine"]), &mut rng);

    let distribution = report.distribution;
    assert!(approx_eq(distribution.positive, 33.3));
    assert!(approx_eq(distribution.negative, 33.3));
    assert!(approx_eq(distribution.neutral, 33.3));
    let total = distribution.positive + distribution.negative + distribution.neutral;
    assert!(approx_eq(total, 99.9));
}

#[test]
fn distribution_halves_round_to_even() {
    let mut input = vec!["great".to_string()];
    input.extend(std::iter::repeat("ok".to_string()).take(15));

    let mut rng = ScriptedRandom::new();
    let report = analyze_sentiment(&input, &mut rng);

    // 1/16 = 6.25%, 15/16 = 93.75%
    assert!(approx_eq(report.distribution.positive, 6.2));
    assert!(approx_eq(report.distribution.neutral, 93.8));
    assert!(approx_eq(report.distribution.negative, 0.0));
    assert!(approx_eq(report.sentiment_score, 0.51));
}

#[test]
fn action_items_accumulate() {
    let mut rng = ScriptedRandom::new();
    let report = analyze_sentiment(&comments(&["bad", "the worst", "fine"]), &mut rng);

    assert_eq!(
        report.action_items,
        vec![
            "Address negative feedback promptly".to_string(),
            "Review recent content strategy".to_string(),
            "Create more engaging, opinion-provoking content".to_string(),
        ]
    );
}

#[test]
fn seeded_confidences_are_bounded_and_reproducible() {
    let input = comments(&["great stuff", "boring", "hmm"]);
    let first = analyze_sentiment(&input, &mut StdRng::seed_from_u64(11));
    let second = analyze_sentiment(&input, &mut StdRng::seed_from_u64(11));

    assert_eq!(first, second);
    for comment in &first.analyzed_comments {
        assert!((0.7..=0.95).contains(&comment.confidence));
    }
}
