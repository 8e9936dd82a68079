use serde::Serialize;
use std::collections::BTreeMap;

const PREVIEW_CHARS: usize = 50;
const DEFAULT_LANGUAGES: [&str; 5] = ["spanish", "french", "german", "portuguese", "japanese"];

struct LanguageTemplate {
    language: &'static str,
    marker: &'static str,
    hashtags: &'static [&'static str],
    cultural_notes: &'static str,
}

const TEMPLATES: [LanguageTemplate; 5] = [
    LanguageTemplate {
        language: "spanish",
        marker: "Contenido traducido al español",
        hashtags: &["#RedesSociales", "#Marketing", "#Contenido"],
        cultural_notes: "Consider using 'vosotros' for Spain, 'ustedes' for Latin America",
    },
    LanguageTemplate {
        language: "french",
        marker: "Contenu traduit en français",
        hashtags: &["#RéseauxSociaux", "#Marketing", "#Contenu"],
        cultural_notes: "Use formal 'vous' for professional content",
    },
    LanguageTemplate {
        language: "german",
        marker: "Ins Deutsche übersetzter Inhalt",
        hashtags: &["#SocialMedia", "#Marketing", "#Inhalt"],
        cultural_notes: "Germans prefer direct, factual communication",
    },
    LanguageTemplate {
        language: "portuguese",
        marker: "Conteúdo traduzido para português",
        hashtags: &["#RedesSociais", "#Marketing", "#Conteúdo"],
        cultural_notes: "Consider Brazilian vs European Portuguese differences",
    },
    LanguageTemplate {
        language: "japanese",
        marker: "日本語に翻訳されたコンテンツ",
        hashtags: &["#ソーシャルメディア", "#マーケティング"],
        cultural_notes: "Use polite/formal language (敬語) for business content",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Translation {
    pub text: String,
    pub localized_hashtags: Vec<&'static str>,
    pub cultural_notes: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MultilingualReport {
    pub original: String,
    pub original_language: &'static str,
    /// Keyed by the language name exactly as requested.
    pub translations: BTreeMap<String, Translation>,
    pub supported_languages: Vec<&'static str>,
    pub localization_tips: Vec<&'static str>,
}

fn translate(content: &str, template: &LanguageTemplate) -> Translation {
    let preview: String = content.chars().take(PREVIEW_CHARS).collect();
    Translation {
        text: format!("🌟 {}... [{}]", preview, template.marker),
        localized_hashtags: template.hashtags.to_vec(),
        cultural_notes: template.cultural_notes,
    }
}

/// Unknown languages are skipped. `None` or an empty list selects every
/// supported language.
pub fn generate_multilingual(content: &str, languages: Option<&[String]>) -> MultilingualReport {
    let requested: Vec<String> = match languages {
        Some(languages) if !languages.is_empty() => languages.to_vec(),
        _ => DEFAULT_LANGUAGES.iter().map(|lang| lang.to_string()).collect(),
    };

    let mut translations = BTreeMap::new();
    for language in requested {
        let key = language.trim().to_lowercase();
        if let Some(template) = TEMPLATES.iter().find(|template| template.language == key) {
            translations.insert(language, translate(content, template));
        }
    }

    MultilingualReport {
        original: content.to_string(),
        original_language: "english",
        translations,
        supported_languages: TEMPLATES.iter().map(|template| template.language).collect(),
        localization_tips: vec![
            "Adjust posting times for each region's timezone",
            "Use region-specific hashtags for better reach",
            "Consider cultural events and holidays",
        ],
    }
}
