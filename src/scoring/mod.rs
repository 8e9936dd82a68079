pub mod caption;
pub mod engagement;
pub mod features;
pub mod performance;
pub mod sentiment;

pub use caption::{rewrite_caption, CaptionRewrite, CaptionVariant};
pub use engagement::{predict_engagement, ContentInput, EngagementPrediction};
pub use features::{extract_text_signals, TextSignals};
pub use performance::{score_content, ContentScore, FeatureScoreSet, Grade};
pub use sentiment::{
    analyze_sentiment, CommentSentiment, Sentiment, SentimentDistribution, SentimentReport,
};
