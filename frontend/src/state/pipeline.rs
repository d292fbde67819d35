//! Explicit pipeline context handed from one workflow step to the next.
//!
//! The context lives in a Leptos context signal (see [`crate::context`]).
//! Each step also mirrors what it needs into the route query string, so a
//! reload or a shared link lands on the same data.

use crate::services::with_query;
use crate::types::FileReference;

/// A workflow step and its route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Upload,
    Dissect,
    Analyse,
    PreProcess,
    Compare,
    Feedback,
}

impl Stage {
    /// Navigation order shown in the header.
    pub const ALL: [Stage; 6] = [
        Stage::Upload,
        Stage::Dissect,
        Stage::Analyse,
        Stage::PreProcess,
        Stage::Compare,
        Stage::Feedback,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Stage::Upload => "/",
            Stage::Dissect => "/dissect-test-cases",
            Stage::Analyse => "/analyse-transaction",
            Stage::PreProcess => "/preprocess-test-cases",
            Stage::Compare => "/compare-test-cases",
            Stage::Feedback => "/feedback",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Upload => "Upload",
            Stage::Dissect => "Dissected Test Cases",
            Stage::Analyse => "Analyse Transaction",
            Stage::PreProcess => "Pre-Processing",
            Stage::Compare => "Comparison",
            Stage::Feedback => "Feedback",
        }
    }
}

/// File references produced so far, one slot per step output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineContext {
    /// Raw test-case file as uploaded.
    pub file_url: Option<FileReference>,
    /// Dissected file reported by the dissect endpoint, or uploaded manually.
    pub dissected_file_url: Option<FileReference>,
    /// Metadata file supplying the baseline transaction names.
    pub metadata_url: Option<FileReference>,
    /// Transaction summary written by label processing.
    pub labelled_file_url: Option<FileReference>,
    /// Pre-processed test cases, input of the comparison.
    pub preprocessed_file_url: Option<FileReference>,
}

impl PipelineContext {
    /// A new upload supersedes everything derived from the previous one.
    pub fn start_over(&mut self, file_url: FileReference) {
        *self = Self {
            file_url: Some(file_url),
            metadata_url: self.metadata_url.take(),
            ..Self::default()
        };
    }

    /// Reference a step hands to the next one when the user continues.
    ///
    /// Dissect forwards the dissected file and falls back to the original
    /// upload; Analyse forwards the label-processed summary.
    pub fn continue_reference(&self, from: Stage) -> Option<&FileReference> {
        match from {
            Stage::Upload => self.file_url.as_ref(),
            Stage::Dissect => self.dissected_file_url.as_ref().or(self.file_url.as_ref()),
            Stage::Analyse => self.labelled_file_url.as_ref(),
            Stage::PreProcess => self.preprocessed_file_url.as_ref(),
            Stage::Compare | Stage::Feedback => None,
        }
    }

    /// Whether `stage` has the input it needs to render anything useful.
    pub fn is_reachable(&self, stage: Stage) -> bool {
        match stage {
            Stage::Dissect => self.file_url.is_some(),
            Stage::Compare => self.preprocessed_file_url.is_some(),
            _ => true,
        }
    }

    /// Query parameters `stage` is entered with.
    pub fn query(&self, stage: Stage) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &'static str, value: Option<&FileReference>| {
            if let Some(v) = value {
                pairs.push((key, v.as_str().to_string()));
            }
        };
        match stage {
            Stage::Dissect => push("file_url", self.continue_reference(Stage::Upload)),
            Stage::Analyse => {
                push("file_url", self.continue_reference(Stage::Dissect));
                push("metadata_url", self.metadata_url.as_ref());
            }
            Stage::PreProcess => {
                push("metadata_url", self.metadata_url.as_ref());
                push("processed_file_url", self.continue_reference(Stage::Analyse));
            }
            Stage::Compare => push("fileUrl", self.continue_reference(Stage::PreProcess)),
            Stage::Upload | Stage::Feedback => {}
        }
        pairs
    }

    /// Route path plus query for entering `stage`.
    pub fn href(&self, stage: Stage) -> String {
        with_query(stage.path(), &self.query(stage))
    }

    /// Adopt references present in the query `stage` was entered with.
    ///
    /// Query values win over what the context already holds; absent or
    /// empty parameters leave the context untouched.
    pub fn absorb_query<F>(&mut self, stage: Stage, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| get(key).and_then(FileReference::non_empty);
        match stage {
            Stage::Dissect => {
                if let Some(url) = read("file_url") {
                    if self.file_url.as_ref() != Some(&url) {
                        self.start_over(url);
                    }
                }
            }
            Stage::Analyse => {
                if let Some(url) = read("file_url") {
                    self.dissected_file_url = Some(url);
                }
                if let Some(url) = read("metadata_url") {
                    self.metadata_url = Some(url);
                }
            }
            Stage::PreProcess => {
                if let Some(url) = read("metadata_url") {
                    self.metadata_url = Some(url);
                }
                if let Some(url) = read("processed_file_url") {
                    self.labelled_file_url = Some(url);
                }
            }
            Stage::Compare => {
                if let Some(url) = read("fileUrl").or_else(|| read("file_url")) {
                    self.preprocessed_file_url = Some(url);
                }
            }
            Stage::Upload | Stage::Feedback => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn reference(url: &str) -> Option<FileReference> {
        Some(FileReference::new(url))
    }

    fn lookup(pairs: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&'static str, String> = pairs.into_iter().collect();
        move |key| map.get(key).cloned()
    }

    fn full_context() -> PipelineContext {
        PipelineContext {
            file_url: reference("/media/cases.csv"),
            dissected_file_url: reference("/media/Admin_with_gwt_conditions.csv"),
            metadata_url: reference("/media/meta data.xlsx"),
            labelled_file_url: reference("/media/transaction_summary.xlsx"),
            preprocessed_file_url: reference("/media/preprocessed_mapped.csv"),
        }
    }

    #[test]
    fn test_continue_from_dissect_prefers_dissected_file() {
        let mut context = full_context();
        assert_eq!(
            context.continue_reference(Stage::Dissect),
            reference("/media/Admin_with_gwt_conditions.csv").as_ref()
        );

        context.dissected_file_url = None;
        assert_eq!(context.continue_reference(Stage::Dissect), reference("/media/cases.csv").as_ref());
    }

    #[test]
    fn test_query_round_trip_per_stage() {
        let source = full_context();
        for stage in Stage::ALL {
            let mut target = PipelineContext {
                file_url: source.file_url.clone(),
                ..PipelineContext::default()
            };
            target.absorb_query(stage, lookup(source.query(stage)));
            match stage {
                Stage::Dissect => assert_eq!(target.file_url, source.file_url),
                Stage::Analyse => {
                    assert_eq!(target.dissected_file_url, source.dissected_file_url);
                    assert_eq!(target.metadata_url, source.metadata_url);
                }
                Stage::PreProcess => {
                    assert_eq!(target.labelled_file_url, source.labelled_file_url);
                    assert_eq!(target.metadata_url, source.metadata_url);
                }
                Stage::Compare => assert_eq!(target.preprocessed_file_url, source.preprocessed_file_url),
                Stage::Upload | Stage::Feedback => assert!(source.query(stage).is_empty()),
            }
        }
    }

    #[test]
    fn test_href_encodes_values() {
        let context = full_context();
        assert_eq!(
            context.href(Stage::Analyse),
            "/analyse-transaction?file_url=%2Fmedia%2FAdmin_with_gwt_conditions.csv&metadata_url=%2Fmedia%2Fmeta%20data.xlsx"
        );
        assert_eq!(context.href(Stage::Feedback), "/feedback");
    }

    #[test]
    fn test_compare_accepts_file_url_alias() {
        let mut context = PipelineContext::default();
        context.absorb_query(Stage::Compare, lookup(vec![("file_url", "/media/p.csv".to_string())]));
        assert_eq!(context.preprocessed_file_url, reference("/media/p.csv"));
        assert!(context.is_reachable(Stage::Compare));
    }

    #[test]
    fn test_new_upload_supersedes_derived_references() {
        let mut context = full_context();
        context.absorb_query(Stage::Dissect, lookup(vec![("file_url", "/media/other.csv".to_string())]));

        assert_eq!(context.file_url, reference("/media/other.csv"));
        assert_eq!(context.dissected_file_url, None);
        assert_eq!(context.labelled_file_url, None);
        assert_eq!(context.preprocessed_file_url, None);
        assert_eq!(context.metadata_url, reference("/media/meta data.xlsx"));
    }

    #[test]
    fn test_same_upload_keeps_derived_references() {
        let mut context = full_context();
        context.absorb_query(Stage::Dissect, lookup(vec![("file_url", "/media/cases.csv".to_string())]));
        assert_eq!(context, full_context());
    }

    #[test]
    fn test_empty_query_values_are_ignored() {
        let mut context = full_context();
        context.absorb_query(Stage::PreProcess, lookup(vec![("processed_file_url", String::new())]));
        assert_eq!(context, full_context());
    }
}
