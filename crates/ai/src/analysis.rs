//! Reshaping raw model replies into the shapes the site expects.
//!
//! The model is asked for JSON but nothing guarantees it complies, so every
//! field has a fallback and numeric fields are clamped.

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_RATING: f64 = 3.0;
pub const DEFAULT_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_SUMMARY: &str = "Analysis completed";
pub const DEFAULT_CONTENT: &str = "Content generation completed";
pub const DEFAULT_INSIGHTS: &str = "Business analysis completed";
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Used when the model returns no recommendation list.
pub const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Focus on customer satisfaction",
    "Invest in quality tools",
    "Build strong referral networks",
];

/// Sentiment rating of a piece of feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    /// Whole stars, 1 to 5.
    pub rating: u8,
    /// 0.0 to 1.0.
    pub confidence: f64,
    pub summary: String,
    /// Same value as `rating`; kept for clients that read this name.
    pub sentiment: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessAnalysis {
    pub insights: String,
    /// Relayed as the model returned them, usually strings.
    pub recommendations: Vec<Value>,
}

/// A number that is present and non-zero, as the model's "no answer" is
/// usually `0` or absent.
fn truthy_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| *n != 0.0 && n.is_finite())
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

impl TextAnalysis {
    pub fn from_reply(reply: &Value) -> Self {
        let rating = truthy_number(&reply["rating"])
            .unwrap_or(DEFAULT_RATING)
            .round()
            .clamp(1.0, 5.0) as u8;
        let confidence = truthy_number(&reply["confidence"])
            .unwrap_or(DEFAULT_CONFIDENCE)
            .clamp(0.0, 1.0);
        let summary = non_empty_str(&reply["summary"])
            .unwrap_or(DEFAULT_SUMMARY)
            .to_string();
        Self {
            rating,
            confidence,
            summary,
            sentiment: rating,
        }
    }
}

impl GeneratedContent {
    pub fn from_reply(content: Option<String>) -> Self {
        Self {
            content: content
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
        }
    }
}

impl BusinessAnalysis {
    pub fn from_reply(reply: &Value) -> Self {
        let insights = non_empty_str(&reply["insights"])
            .unwrap_or(DEFAULT_INSIGHTS)
            .to_string();
        let recommendations = match reply["recommendations"].as_array() {
            Some(items) => items.iter().take(MAX_RECOMMENDATIONS).cloned().collect(),
            None => FALLBACK_RECOMMENDATIONS
                .iter()
                .map(|s| Value::from(*s))
                .collect(),
        };
        Self {
            insights,
            recommendations,
        }
    }
}
