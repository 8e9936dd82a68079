use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::{CaptionStyle, Platform};

const IMPROVEMENTS: [&str; 3] = [
    "Added engagement hook",
    "Included call-to-action",
    "Optimized for algorithm visibility",
];

struct StyleTemplate {
    prefix: &'static str,
    suffix: &'static str,
    hooks: [&'static str; 3],
}

fn template(style: CaptionStyle) -> StyleTemplate {
    match style {
        CaptionStyle::Engaging => StyleTemplate {
            prefix: "✨ ",
            suffix: "\n\n👇 What do you think?",
            hooks: [
                "Here's why this matters:",
                "Most people don't know this:",
                "The secret is:",
            ],
        },
        CaptionStyle::Professional => StyleTemplate {
            prefix: "",
            suffix: "\n\n#professional #insights",
            hooks: ["Key insight:", "Important update:", "Industry perspective:"],
        },
        CaptionStyle::Casual => StyleTemplate {
            prefix: "Hey everyone! ",
            suffix: " 🙌",
            hooks: ["So basically,", "Real talk:", "Here's the thing:"],
        },
        CaptionStyle::Viral => StyleTemplate {
            prefix: "🔥 ",
            suffix: "\n\nRT if you agree! 🔄",
            hooks: ["THREAD:", "This will blow your mind:", "Stop scrolling!"],
        },
    }
}

/// Hook phrases available for a style, in selection order.
pub fn style_hooks(style: CaptionStyle) -> [&'static str; 3] {
    template(style).hooks
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionVariant {
    pub text: String,
    pub predicted_engagement: u8,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionRewrite {
    pub original: String,
    pub platform: Platform,
    pub recommended: String,
    pub variations: Vec<CaptionVariant>,
    pub improvements: Vec<String>,
}

pub fn rewrite_caption<R>(
    original: &str,
    style: CaptionStyle,
    platform: Platform,
    rng: &mut R,
) -> CaptionRewrite
where
    R: RandomSource + ?Sized,
{
    let template = template(style);
    let hook = template.hooks[rng.index(template.hooks.len())];

    let mut variations = vec![
        CaptionVariant {
            text: format!(
                "{}{} {}{}",
                template.prefix, hook, original, template.suffix
            ),
            predicted_engagement: draw_engagement(rng, 75, 95),
            style: style.label().to_string(),
        },
        CaptionVariant {
            text: format!("Did you know? {}\n\nDrop a 🔥 if this resonates!", original),
            predicted_engagement: draw_engagement(rng, 70, 90),
            style: "question".to_string(),
        },
        CaptionVariant {
            text: format!(
                "Here's something interesting:\n\n{}\n\nSave this for later! 📌",
                original
            ),
            predicted_engagement: draw_engagement(rng, 65, 85),
            style: "story".to_string(),
        },
    ];

    // `sort_by` is stable: equal scores keep generation order.
    variations.sort_by(|a, b| b.predicted_engagement.cmp(&a.predicted_engagement));

    let recommended = variations
        .first()
        .map(|variant| variant.text.clone())
        .unwrap_or_default();

    CaptionRewrite {
        original: original.to_string(),
        platform,
        recommended,
        variations,
        improvements: IMPROVEMENTS.iter().map(|item| item.to_string()).collect(),
    }
}

fn draw_engagement<R>(rng: &mut R, low: i64, high: i64) -> u8
where
    R: RandomSource + ?Sized,
{
    rng.int_in(low, high).clamp(0, 100) as u8
}
