/// JSON brand-data export
///
/// A pure reshape of the project aggregate. Field names are part of the
/// external contract (`hex` not `hexCode`, `voice.tone` not `toneOfVoice`)
/// and must not drift.

use crate::brand::types::ProjectWithDetails;
use serde::Serialize;

/// The exported brand document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandExport {
    pub name: String,
    pub tagline: Option<String>,
    pub category: Option<String>,
    pub colors: Vec<ColorExport>,
    pub typography: Vec<TypographyExport>,
    pub voice: VoiceExport,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorExport {
    pub name: String,
    pub hex: String,
    pub usage: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyExport {
    #[serde(rename = "type")]
    pub kind: String,
    pub font_family: String,
    pub google_font_url: Option<String>,
    pub weights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceExport {
    pub tone: Option<String>,
    pub guidelines: Option<String>,
}

impl BrandExport {
    /// Reshape a loaded aggregate into the export document
    pub fn from_details(details: &ProjectWithDetails) -> Self {
        Self {
            name: details.project.name.clone(),
            tagline: details.project.tagline.clone(),
            category: details.project.category.clone(),
            colors: details
                .colors
                .iter()
                .map(|c| ColorExport {
                    name: c.name.clone(),
                    hex: c.hex_code.clone(),
                    usage: c.usage.clone(),
                })
                .collect(),
            typography: details
                .typography
                .iter()
                .map(|t| TypographyExport {
                    kind: t.kind.clone(),
                    font_family: t.font_family.clone(),
                    google_font_url: t.google_font_url.clone(),
                    weights: t.weights.clone(),
                })
                .collect(),
            voice: VoiceExport {
                tone: details.project.tone_of_voice.clone(),
                guidelines: details.project.usage_guidelines.clone(),
            },
        }
    }
}
