//! Output formatting for purge results.

use serde::Serialize;

use pagepurge_core::purge::{PurgeError, PurgeRequest, PurgeResult};

use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct ResultView<'a> {
    request: &'a PurgeRequest,
    status: &'static str,
    purged: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a PurgeResult> for ResultView<'a> {
    fn from(result: &'a PurgeResult) -> Self {
        match &result.outcome {
            Ok(purged) => Self {
                request: &result.request,
                status: "purged",
                purged: *purged,
                error: None,
            },
            Err(err) => Self {
                request: &result.request,
                status: err.kind(),
                purged: 0,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Format purge results for output.
pub fn format_results(results: &[PurgeResult], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let views: Vec<ResultView<'_>> = results.iter().map(ResultView::from).collect();
            serde_json::to_string_pretty(&views).unwrap_or_default()
        }
        OutputFormat::Pretty => results
            .iter()
            .map(format_pretty)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn format_pretty(result: &PurgeResult) -> String {
    let key = result.request.key();
    match &result.outcome {
        Ok(purged) => format!("purged     {:>5}  {}", purged, key),
        Err(PurgeError::NotFound(_)) => format!("not found  {:>5}  {}", 0, key),
        Err(err) => format!("error      {:>5}  {} ({})", "-", key, err),
    }
}
