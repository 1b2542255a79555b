use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lighthouse report category identifiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum LighthouseCategoryName {
    Accessibility,
    BestPractices,
    Performance,
    Pwa,
    Seo,
}

impl LighthouseCategoryName {
    pub const ALL: [LighthouseCategoryName; 5] = [
        LighthouseCategoryName::Performance,
        LighthouseCategoryName::Accessibility,
        LighthouseCategoryName::BestPractices,
        LighthouseCategoryName::Seo,
        LighthouseCategoryName::Pwa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LighthouseCategoryName::Accessibility => "accessibility",
            LighthouseCategoryName::BestPractices => "best-practices",
            LighthouseCategoryName::Performance => "performance",
            LighthouseCategoryName::Pwa => "pwa",
            LighthouseCategoryName::Seo => "seo",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LighthouseEmulatedFormFactor {
    Desktop,
    Mobile,
}

impl LighthouseEmulatedFormFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LighthouseEmulatedFormFactor::Desktop => "desktop",
            LighthouseEmulatedFormFactor::Mobile => "mobile",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseCategory {
    pub id: LighthouseCategoryName,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub manual_description: String,
    /// 0.0 ..= 1.0; Lighthouse sends `null` when the category errored.
    pub score: Option<f64>,
}

impl LighthouseCategory {
    /// Score on the 0-100 scale shown in reports.
    pub fn score_percent(&self) -> Option<u32> {
        self.score.map(|s| (s * 100.0).round().clamp(0.0, 100.0) as u32)
    }
}

/// Categories keyed by name. PSI only returns what `onlyCategories` asked for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LighthouseCategories {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<LighthouseCategory>,
    #[serde(rename = "best-practices", default, skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<LighthouseCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<LighthouseCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwa: Option<LighthouseCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<LighthouseCategory>,
}

impl LighthouseCategories {
    pub fn get(&self, name: LighthouseCategoryName) -> Option<&LighthouseCategory> {
        match name {
            LighthouseCategoryName::Accessibility => self.accessibility.as_ref(),
            LighthouseCategoryName::BestPractices => self.best_practices.as_ref(),
            LighthouseCategoryName::Performance => self.performance.as_ref(),
            LighthouseCategoryName::Pwa => self.pwa.as_ref(),
            LighthouseCategoryName::Seo => self.seo.as_ref(),
        }
    }

    /// Present categories, in report order.
    pub fn iter(&self) -> impl Iterator<Item = &LighthouseCategory> + '_ {
        LighthouseCategoryName::ALL.into_iter().filter_map(move |n| self.get(n))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseEnvironment {
    pub network_user_agent: String,
    pub host_user_agent: String,
    pub benchmark_index: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseConfigSettings {
    pub emulated_form_factor: LighthouseEmulatedFormFactor,
    pub locale: String,
    #[serde(default)]
    pub only_categories: Vec<LighthouseCategoryName>,
    pub channel: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LighthouseTiming {
    /// Milliseconds
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PsiLighthouseResult {
    pub requested_url: String,
    pub final_url: String,
    pub lighthouse_version: String,
    pub user_agent: String,
    pub fetch_time: DateTime<Utc>,
    pub environment: LighthouseEnvironment,
    pub config_settings: LighthouseConfigSettings,
    pub categories: LighthouseCategories,
    pub timing: LighthouseTiming,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadingExperience {
    pub initial_url: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PsiVersion {
    pub major: u32,
    pub minor: u32,
}

/// PageSpeed Insights `runPagespeed` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PsiResult {
    pub captcha_result: String,
    pub kind: String,
    pub id: String,
    #[serde(alias = "loadingExperiente")]
    pub loading_experience: LoadingExperience,
    pub lighthouse_result: PsiLighthouseResult,
    #[serde(rename = "analysisUTCTimestamp")]
    pub analysis_utc_timestamp: DateTime<Utc>,
    pub version: PsiVersion,
}

impl PsiResult {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
