use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::scoring::ContentInput;
use crate::{CaptionStyle, ContentType, Platform};

#[derive(Debug, Deserialize)]
pub struct EngagementRequest {
    pub content: String,
    pub platform: Option<String>,
    pub content_type: Option<String>,
    pub scheduled_time: Option<String>,
}

impl EngagementRequest {
    pub fn into_input(self) -> Result<ContentInput, AppError> {
        let scheduled_time = self
            .scheduled_time
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(ContentInput {
            text: self.content,
            platform: parse_platform(self.platform.as_deref()),
            content_type: self
                .content_type
                .as_deref()
                .map(ContentType::parse)
                .unwrap_or_default(),
            scheduled_time,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ContentScoreRequest {
    pub content: String,
    pub platform: Option<String>,
}

impl ContentScoreRequest {
    pub fn platform(&self) -> Platform {
        parse_platform(self.platform.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub comments: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompetitorRequest {
    #[serde(default)]
    pub handles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub content: String,
    pub style: Option<String>,
    pub platform: Option<String>,
}

impl RewriteRequest {
    pub fn style(&self) -> CaptionStyle {
        self.style
            .as_deref()
            .map(CaptionStyle::parse)
            .unwrap_or_default()
    }

    pub fn platform(&self) -> Platform {
        parse_platform(self.platform.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct MultilingualRequest {
    pub content: String,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StoredPostResponse {
    pub message: &'static str,
    pub data: Value,
}

fn parse_platform(value: Option<&str>) -> Platform {
    value.map(Platform::parse).unwrap_or_default()
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|err| {
            AppError::InvalidInput(format!("invalid scheduled_time '{}': {}", value, err))
        })
}
