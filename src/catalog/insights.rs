use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingRecord {
    pub hour: u8,
    pub engagement: f64,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingInsights {
    pub best_posting_hour: u8,
    pub best_content_type: String,
}

/// Historical sample the insights endpoint reports on.
pub fn sample_posts() -> Vec<PostingRecord> {
    vec![
        PostingRecord {
            hour: 9,
            engagement: 120.0,
            content_type: "image".to_string(),
        },
        PostingRecord {
            hour: 18,
            engagement: 300.0,
            content_type: "video".to_string(),
        },
        PostingRecord {
            hour: 18,
            engagement: 250.0,
            content_type: "text".to_string(),
        },
    ]
}

/// Best hour and content type by mean engagement. Ties go to the smallest
/// key. Returns `None` for an empty table.
pub fn extract_insights(posts: &[PostingRecord]) -> Option<PostingInsights> {
    let best_posting_hour = best_group(posts.iter().map(|post| (post.hour, post.engagement)))?;
    let best_content_type = best_group(
        posts
            .iter()
            .map(|post| (post.content_type.clone(), post.engagement)),
    )?;

    Some(PostingInsights {
        best_posting_hour,
        best_content_type,
    })
}

fn best_group<K, I>(rows: I) -> Option<K>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut groups: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for (key, value) in rows {
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    let mut best: Option<(K, f64)> = None;
    for (key, (sum, count)) in groups {
        let mean = sum / count as f64;
        let replace = match &best {
            Some((_, best_mean)) => mean > *best_mean,
            None => true,
        };
        if replace {
            best = Some((key, mean));
        }
    }

    best.map(|(key, _)| key)
}
