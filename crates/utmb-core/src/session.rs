//! Live preview: a request plus its most recent build result.
//!
//! Every mutator ends in [`BuildSession::recompute`], which rebuilds the
//! preview from scratch. There is no dependency tracking and no partial
//! update; callers read [`BuildSession::preview`] after each change.

use crate::builder::{self, ConstructedUrl};
use crate::history::{HistoryRepository, NewBuild, SavedBuild};
use crate::request::{QueryParameter, UrlBuildRequest, UtmField};
use crate::validate::ValidationError;

#[derive(Debug, Clone)]
pub struct BuildSession {
    request: UrlBuildRequest,
    preview: Result<ConstructedUrl, ValidationError>,
}

impl Default for BuildSession {
    fn default() -> Self {
        Self::from_request(UrlBuildRequest::default())
    }
}

impl BuildSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_request(request: UrlBuildRequest) -> Self {
        let preview = builder::build(&request);
        Self { request, preview }
    }

    pub fn request(&self) -> &UrlBuildRequest {
        &self.request
    }

    pub fn preview(&self) -> Result<&ConstructedUrl, &ValidationError> {
        self.preview.as_ref()
    }

    pub fn set_base_url(&mut self, base_url: &str) {
        self.request.base_url = base_url.to_string();
        self.recompute();
    }

    pub fn set_utm(&mut self, field: UtmField, value: &str) {
        self.request.utm.set(field, value);
        self.recompute();
    }

    /// Appends a custom parameter (possibly blank) and returns its index.
    pub fn push_param(&mut self, key: &str, value: &str) -> usize {
        self.request
            .custom_params
            .push(QueryParameter::new(key, value));
        self.recompute();
        self.request.custom_params.len() - 1
    }

    /// Replaces the parameter at `index`. Returns false if out of range.
    pub fn set_param(&mut self, index: usize, key: &str, value: &str) -> bool {
        let Some(param) = self.request.custom_params.get_mut(index) else {
            return false;
        };
        *param = QueryParameter::new(key, value);
        self.recompute();
        true
    }

    /// Removes the parameter at `index`. Returns false if out of range.
    pub fn remove_param(&mut self, index: usize) -> bool {
        if index >= self.request.custom_params.len() {
            return false;
        }
        self.request.custom_params.remove(index);
        self.recompute();
        true
    }

    /// Loads a saved build back into the form.
    pub fn restore(&mut self, saved: &SavedBuild) {
        self.request = saved.to_request();
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.request = UrlBuildRequest::default();
        self.recompute();
    }

    /// Rebuilds the preview from the current request.
    pub fn recompute(&mut self) {
        self.preview = builder::build(&self.request);
    }

    /// Appends the current build to `history`. Fails, leaving history
    /// untouched, if the preview is not valid.
    pub fn save<'a>(
        &self,
        history: &'a mut HistoryRepository,
    ) -> Result<&'a SavedBuild, ValidationError> {
        let built = self.preview.as_ref().map_err(Clone::clone)?;
        Ok(history.add(NewBuild::from_build(&self.request, built)))
    }
}
