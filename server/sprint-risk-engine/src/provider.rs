//! Sprint data provider: normalize a tracker search payload into a snapshot.
//!
//! The payload is whatever the tracker's issue search returned for open
//! sprints (issues with their changelog expanded). Only the fields below are
//! read; everything else is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::error::EngineError;
use crate::types::{SprintSnapshot, WorkItem};

// ---------------------------------------------------------------------------
// Inbound types (tracker search response)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerSearch {
  #[serde(default)]
  pub sprint: Option<TrackerSprint>,
  #[serde(default)]
  pub issues: Vec<TrackerIssue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerSprint {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default, rename = "endDate")]
  pub end_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerIssue {
  pub key: String,
  pub fields: TrackerFields,
  #[serde(default)]
  pub changelog: Option<TrackerChangelog>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerFields {
  #[serde(default)]
  pub summary: String,
  pub status: TrackerStatus,
  /// Story point estimate; trackers send numbers, nulls, or nothing at all.
  #[serde(default, rename = "customfield_10016")]
  pub story_points: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerStatus {
  pub name: String,
  #[serde(default, rename = "statusCategory")]
  pub status_category: Option<TrackerStatusCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerStatusCategory {
  pub key: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerChangelog {
  #[serde(default)]
  pub histories: Vec<TrackerHistory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerHistory {
  #[serde(default)]
  pub items: Vec<TrackerChangeItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerChangeItem {
  pub field: String,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Build a snapshot from a tracker payload.
///
/// Fails with [`EngineError::NoActiveSprint`] when the payload has no issues.
pub fn normalize(
  raw: &TrackerSearch,
  now: DateTime<Utc>,
  config: &ProviderConfig,
) -> Result<SprintSnapshot, EngineError> {
  if raw.issues.is_empty() {
    warn!("tracker returned no issues in any open sprint");
    return Err(EngineError::NoActiveSprint);
  }

  let mut total_committed_points = 0.0;
  let mut completed_points = 0.0;

  let items: Vec<WorkItem> = raw
    .issues
    .iter()
    .map(|issue| {
      let story_points = story_points(issue, config);
      total_committed_points += story_points;
      if is_done(issue, config) {
        completed_points += story_points;
      }

      WorkItem {
        identifier: issue.key.clone(),
        title: issue.fields.summary.clone(),
        status: issue.fields.status.name.clone(),
        story_points,
        churn_count: churn_count(issue),
        is_blocked: issue.fields.status.name.to_lowercase().contains("block"),
      }
    })
    .collect();

  let sprint = raw.sprint.clone().unwrap_or_default();
  let sprint_label = sprint
    .name
    .filter(|n| !n.trim().is_empty())
    .unwrap_or_else(|| config.default_sprint_label.clone());
  let days_remaining = days_remaining(sprint.end_date.as_deref(), now, config.fallback_days_remaining);

  debug!(
    sprint = %sprint_label,
    items = items.len(),
    total_committed_points,
    completed_points,
    days_remaining,
    "normalized tracker payload"
  );

  Ok(SprintSnapshot {
    sprint_label,
    days_remaining,
    total_committed_points,
    completed_points,
    items,
  })
}

/// Number of status transitions recorded in the issue's changelog.
fn churn_count(issue: &TrackerIssue) -> u32 {
  issue
    .changelog
    .as_ref()
    .map(|log| {
      log
        .histories
        .iter()
        .flat_map(|h| h.items.iter())
        .filter(|item| item.field == "status")
        .count() as u32
    })
    .unwrap_or(0)
}

/// Estimate from the payload, or the configured default when missing,
/// non-numeric or negative. An explicit zero is kept.
fn story_points(issue: &TrackerIssue, config: &ProviderConfig) -> f64 {
  issue
    .fields
    .story_points
    .as_ref()
    .and_then(serde_json::Value::as_f64)
    .filter(|p| p.is_finite() && *p >= 0.0)
    .unwrap_or(config.default_story_points)
}

fn is_done(issue: &TrackerIssue, config: &ProviderConfig) -> bool {
  issue
    .fields
    .status
    .status_category
    .as_ref()
    .is_some_and(|c| c.key.eq_ignore_ascii_case(&config.done_category))
}

/// Whole days until the sprint ends, rounded up; never negative.
fn days_remaining(end_date: Option<&str>, now: DateTime<Utc>, fallback: u32) -> u32 {
  let Some(raw) = end_date else {
    return fallback;
  };
  let end = match DateTime::parse_from_rfc3339(raw) {
    Ok(t) => t.with_timezone(&Utc),
    Err(e) => {
      warn!(end_date = raw, error = %e, "unparseable sprint end date; using fallback");
      return fallback;
    }
  };
  let secs = (end - now).num_seconds().max(0);
  ((secs + 86_399) / 86_400) as u32
}
