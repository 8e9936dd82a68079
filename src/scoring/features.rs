use crate::count_keywords;

/// Keywords that count as an explicit call to action for engagement scoring.
pub const ENGAGEMENT_CTA_WORDS: [&str; 6] =
    ["click", "share", "comment", "follow", "link", "subscribe"];

/// Narrower list used when deciding whether to recommend adding a CTA.
pub const RECOMMENDATION_CTA_WORDS: [&str; 4] = ["click", "share", "comment", "follow"];

#[derive(Debug, Clone)]
pub struct TextSignals {
    pub char_count: usize,
    pub hashtags: usize,
    pub questions: usize,
    pub non_ascii: usize,
    pub word_count: usize,
    pub word_chars: usize,
    pub sentence_segments: usize,
    pub lowercase: String,
}

impl TextSignals {
    pub fn has_hashtag(&self) -> bool {
        self.hashtags > 0
    }

    pub fn has_question(&self) -> bool {
        self.questions > 0
    }

    pub fn has_emoji(&self) -> bool {
        self.non_ascii > 0
    }

    pub fn has_cta(&self, keywords: &[&str]) -> bool {
        count_keywords(&self.lowercase, keywords) > 0
    }

    pub fn avg_word_len(&self) -> f64 {
        self.word_chars as f64 / self.word_count.max(1) as f64
    }

    pub fn avg_sentence_len(&self) -> f64 {
        self.char_count as f64 / self.sentence_segments.max(1) as f64
    }
}

pub fn extract_text_signals(text: &str) -> TextSignals {
    let mut hashtags = 0usize;
    let mut questions = 0usize;
    let mut non_ascii = 0usize;
    let mut char_count = 0usize;

    for ch in text.chars() {
        char_count += 1;
        match ch {
            '#' => hashtags += 1,
            '?' => questions += 1,
            _ => {
                if ch as u32 > 0x7f {
                    non_ascii += 1;
                }
            }
        }
    }

    let mut word_count = 0usize;
    let mut word_chars = 0usize;
    for word in text.split_whitespace() {
        word_count += 1;
        word_chars += word.chars().count();
    }

    TextSignals {
        char_count,
        hashtags,
        questions,
        non_ascii,
        word_count,
        word_chars,
        sentence_segments: text.split('.').count(),
        lowercase: text.to_lowercase(),
    }
}
