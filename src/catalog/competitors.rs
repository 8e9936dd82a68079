use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CompetitorProfile {
    pub handle: &'static str,
    pub name: &'static str,
    pub followers: u64,
    pub engagement_rate: f64,
    pub posting_frequency: &'static str,
    pub top_content_types: [&'static str; 2],
    pub best_performing_hashtags: [&'static str; 2],
    pub avg_likes: u64,
    pub avg_comments: u64,
    pub growth_rate: &'static str,
    pub strengths: [&'static str; 2],
    pub weaknesses: [&'static str; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketPosition {
    pub rank: u8,
    pub compared_to_avg: &'static str,
    pub opportunities: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetitorReport {
    pub competitors: Vec<CompetitorProfile>,
    pub your_position: MarketPosition,
    pub content_gaps: Vec<&'static str>,
    pub recommended_strategies: Vec<&'static str>,
}

fn tracked_competitors() -> Vec<CompetitorProfile> {
    vec![
        CompetitorProfile {
            handle: "@competitor1",
            name: "Tech Innovators",
            followers: 125_000,
            engagement_rate: 4.2,
            posting_frequency: "3x daily",
            top_content_types: ["Videos", "Infographics"],
            best_performing_hashtags: ["#TechTips", "#Innovation"],
            avg_likes: 5_200,
            avg_comments: 180,
            growth_rate: "+8.5%",
            strengths: ["Consistent posting", "Strong visual brand"],
            weaknesses: ["Low story engagement", "Limited user interaction"],
        },
        CompetitorProfile {
            handle: "@competitor2",
            name: "Digital Masters",
            followers: 89_000,
            engagement_rate: 6.1,
            posting_frequency: "2x daily",
            top_content_types: ["Reels", "Stories"],
            best_performing_hashtags: ["#DigitalMarketing", "#GrowthHacks"],
            avg_likes: 4_100,
            avg_comments: 320,
            growth_rate: "+12.3%",
            strengths: ["High engagement", "Active community"],
            weaknesses: ["Inconsistent aesthetics", "Irregular posting times"],
        },
        CompetitorProfile {
            handle: "@competitor3",
            name: "Social Pros",
            followers: 156_000,
            engagement_rate: 3.8,
            posting_frequency: "1x daily",
            top_content_types: ["Carousels", "Text posts"],
            best_performing_hashtags: ["#SocialMedia", "#Marketing"],
            avg_likes: 5_900,
            avg_comments: 145,
            growth_rate: "+5.2%",
            strengths: ["Educational content", "Industry authority"],
            weaknesses: ["Low video content", "Slow response time"],
        },
    ]
}

/// Requested handles are accepted but the tracked set is always reported.
pub fn analyze_competitors(_handles: Option<&[String]>) -> CompetitorReport {
    CompetitorReport {
        competitors: tracked_competitors(),
        your_position: MarketPosition {
            rank: 2,
            compared_to_avg: "+15% engagement",
            opportunities: vec![
                "Increase video content production",
                "Post during competitor low-activity hours",
                "Target underserved hashtags",
            ],
        },
        content_gaps: vec!["Tutorial content", "Live Q&A sessions", "User testimonials"],
        recommended_strategies: vec![
            "Mirror successful hashtag combinations",
            "Adopt video-first approach like top performer",
            "Increase posting frequency to 2-3x daily",
        ],
    }
}
