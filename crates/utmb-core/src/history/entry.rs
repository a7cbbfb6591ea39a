//! Saved build records and the draft used to create them.

use serde::{Deserialize, Serialize};

use crate::builder::ConstructedUrl;
use crate::request::{QueryParameter, UrlBuildRequest, UtmParams};

/// An immutable snapshot of one build, as persisted in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBuild {
    pub id: String,
    /// Unix milliseconds.
    pub created_at: i64,
    pub final_url: String,
    pub base_url: String,
    #[serde(default)]
    pub utm_params: UtmParams,
    #[serde(default)]
    pub custom_params: Vec<QueryParameter>,
}

impl SavedBuild {
    /// Request that reproduces this build, for editing it again.
    pub fn to_request(&self) -> UrlBuildRequest {
        UrlBuildRequest {
            base_url: self.base_url.clone(),
            utm: self.utm_params.clone(),
            custom_params: self.custom_params.clone(),
        }
    }
}

/// Everything of a [`SavedBuild`] except the id and timestamp, which the
/// repository assigns on `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBuild {
    pub final_url: String,
    pub base_url: String,
    pub utm_params: UtmParams,
    pub custom_params: Vec<QueryParameter>,
}

impl NewBuild {
    /// Captures a successful build. Only the UTM values and custom pairs that
    /// made it into `final_url` are recorded, trimmed.
    pub fn from_build(request: &UrlBuildRequest, built: &ConstructedUrl) -> Self {
        Self {
            final_url: built.final_url().to_string(),
            base_url: request.base_url.clone(),
            utm_params: request.utm.normalized(),
            custom_params: request
                .emitted_custom_params()
                .map(|(k, v)| QueryParameter::new(k, v))
                .collect(),
        }
    }

    pub(super) fn into_saved(self, id: String, created_at: i64) -> SavedBuild {
        SavedBuild {
            id,
            created_at,
            final_url: self.final_url,
            base_url: self.base_url,
            utm_params: self.utm_params,
            custom_params: self.custom_params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use crate::request::UtmField;

    #[test]
    fn from_build_keeps_only_emitted_values() {
        let req = UrlBuildRequest::new("https://example.com")
            .with_utm(UtmField::Source, " google ")
            .with_param("ref", "")
            .with_param(" lang ", "en");
        let built = build(&req).unwrap();
        let draft = NewBuild::from_build(&req, &built);
        assert_eq!(draft.final_url, "https://example.com/?utm_source=google&lang=en");
        assert_eq!(draft.base_url, "https://example.com");
        assert_eq!(draft.utm_params.source.as_deref(), Some("google"));
        assert_eq!(draft.custom_params, vec![QueryParameter::new("lang", "en")]);
    }

    #[test]
    fn saved_build_restores_an_equivalent_request() {
        let req = UrlBuildRequest::new("https://example.com/x")
            .with_utm(UtmField::Medium, "social")
            .with_param("a", "1");
        let built = build(&req).unwrap();
        let saved = NewBuild::from_build(&req, &built).into_saved("1".into(), 1);
        assert_eq!(build(&saved.to_request()).unwrap(), built);
    }

    #[test]
    fn persisted_shape_uses_camel_case_and_short_utm_names() {
        let mut utm_params = UtmParams::default();
        utm_params.set(UtmField::Source, "one");
        let saved = SavedBuild {
            id: "42".to_string(),
            created_at: 1_700_000_000_000,
            final_url: "https://example.com/?utm_source=one&k=v".to_string(),
            base_url: "https://example.com".to_string(),
            utm_params,
            custom_params: vec![QueryParameter::new("k", "v")],
        };
        let json: serde_json::Value = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["createdAt"], 1_700_000_000_000i64);
        assert_eq!(json["finalUrl"], "https://example.com/?utm_source=one&k=v");
        assert_eq!(json["baseUrl"], "https://example.com");
        assert_eq!(json["utmParams"]["source"], "one");
        assert!(json["utmParams"].get("medium").is_none());
        assert_eq!(json["customParams"][0]["key"], "k");
        assert_eq!(json["customParams"][0]["value"], "v");
    }
}
