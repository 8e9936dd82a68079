//! Fixed reference data served alongside the heuristics: trends, audience
//! segments, competitor summaries, translation templates and posting insights.

pub mod audience;
pub mod competitors;
pub mod insights;
pub mod multilingual;
pub mod trends;

pub use audience::{segment_audience, AudienceReport, AudienceSegment};
pub use competitors::{analyze_competitors, CompetitorProfile, CompetitorReport, MarketPosition};
pub use insights::{extract_insights, sample_posts, PostingInsights, PostingRecord};
pub use multilingual::{generate_multilingual, MultilingualReport, Translation};
pub use trends::{detect_trends, NewsItem, TrendReport, TrendingHashtag, TrendingTopic};
