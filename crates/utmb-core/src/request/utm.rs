//! The five campaign-tracking fields and their optional values.

use serde::{Deserialize, Serialize};

/// One of the five conventional UTM query fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtmField {
    Source,
    Medium,
    Campaign,
    Term,
    Content,
}

impl UtmField {
    /// Canonical emission order.
    pub const ALL: [UtmField; 5] = [
        UtmField::Source,
        UtmField::Medium,
        UtmField::Campaign,
        UtmField::Term,
        UtmField::Content,
    ];

    /// Key as it appears in the query string.
    pub fn query_key(self) -> &'static str {
        match self {
            UtmField::Source => "utm_source",
            UtmField::Medium => "utm_medium",
            UtmField::Campaign => "utm_campaign",
            UtmField::Term => "utm_term",
            UtmField::Content => "utm_content",
        }
    }

    /// Short name used in persisted history and CLI output.
    pub fn short_name(self) -> &'static str {
        match self {
            UtmField::Source => "source",
            UtmField::Medium => "medium",
            UtmField::Campaign => "campaign",
            UtmField::Term => "term",
            UtmField::Content => "content",
        }
    }

    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.query_key() == key)
    }
}

/// Optional values for the five UTM fields.
///
/// Setting a field to an empty or whitespace-only string clears it. Stored
/// values are kept verbatim; [`UtmParams::emitted`] yields the trimmed form
/// that actually ends up in a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl UtmParams {
    fn slot(&self, field: UtmField) -> &Option<String> {
        match field {
            UtmField::Source => &self.source,
            UtmField::Medium => &self.medium,
            UtmField::Campaign => &self.campaign,
            UtmField::Term => &self.term,
            UtmField::Content => &self.content,
        }
    }

    fn slot_mut(&mut self, field: UtmField) -> &mut Option<String> {
        match field {
            UtmField::Source => &mut self.source,
            UtmField::Medium => &mut self.medium,
            UtmField::Campaign => &mut self.campaign,
            UtmField::Term => &mut self.term,
            UtmField::Content => &mut self.content,
        }
    }

    /// Raw stored value, if any.
    pub fn get(&self, field: UtmField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: UtmField, value: &str) {
        *self.slot_mut(field) = if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    pub fn clear(&mut self, field: UtmField) {
        *self.slot_mut(field) = None;
    }

    /// Trimmed value if it would be emitted into a URL.
    pub fn emitted(&self, field: UtmField) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Emitted fields in canonical order.
    pub fn iter_emitted(&self) -> impl Iterator<Item = (UtmField, &str)> + '_ {
        UtmField::ALL
            .into_iter()
            .filter_map(move |f| self.emitted(f).map(|v| (f, v)))
    }

    /// Copy holding only the trimmed, emitted values.
    pub fn normalized(&self) -> UtmParams {
        let mut out = UtmParams::default();
        for (field, value) in self.iter_emitted() {
            out.set(field, value);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.iter_emitted().next().is_none()
    }
}
