use kube::api::DynamicObject;
use regex::Regex;
use std::sync::LazyLock;

// Matches rule expressions like Host(`example.com`) && PathPrefix(`/api`).
// Non-greedy, so the capture stops at the first closing backtick.
static BACKTICK_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new("`(.*?)`").expect("backtick pattern"));

/// The first backtick-delimited span in `text`, delimiters stripped.
/// An unpaired backtick yields `None`; `` `` `` yields an empty span.
pub fn first_backtick_span(text: &str) -> Option<&str> {
    BACKTICK_SPAN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|capture| capture.as_str())
}

/// Hostname candidates embedded in `record`, at most one per top-level field
/// of the opaque payload. Each field value is rendered to text as a whole and
/// only its first backtick span is taken. Candidates are not validated, a
/// malformed name simply fails resolution later.
pub fn host_candidates(record: &DynamicObject) -> Vec<String> {
    let Some(fields) = record.data.as_object() else {
        return Vec::new();
    };

    fields
        .values()
        .filter_map(|value| {
            let text = value.to_string();
            first_backtick_span(&text).map(str::to_owned)
        })
        .collect()
}
