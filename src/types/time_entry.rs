//! Time entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time entry do Toggl
///
/// Enquanto o timer está rodando `duration` é negativo (`-epoch` do início).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<DateTime<Utc>>,

    /// Duração em segundos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duronly: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_with: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}

impl TimeEntry {
    /// Indica se o timer desta entrada ainda está rodando
    pub fn is_running(&self) -> bool {
        self.duration.map(|d| d < 0).unwrap_or(false)
    }
}

/// Payload de criação/início de time entry
///
/// `created_with` é preenchido pelo cliente.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewTimeEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duronly: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl NewTimeEntry {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn workspace(mut self, wid: u64) -> Self {
        self.wid = Some(wid);
        self
    }

    pub fn project(mut self, pid: u64) -> Self {
        self.pid = Some(pid);
        self
    }

    pub fn task(mut self, tid: u64) -> Self {
        self.tid = Some(tid);
        self
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.billable = Some(billable);
        self
    }

    /// Entrada já concluída: início e duração em segundos
    pub fn finished(mut self, start: DateTime<Utc>, duration: i64) -> Self {
        self.start = Some(start);
        self.duration = Some(duration);
        self
    }

    pub fn stop(mut self, stop: DateTime<Utc>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Operação sobre as tags de várias time entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagAction {
    Add,
    Remove,
}

impl TagAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for TagAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_running_entry() {
        let entry: TimeEntry = serde_json::from_value(json!({
            "id": 436694100,
            "wid": 777,
            "description": "Meeting with possible clients",
            "start": "2013-03-05T07:58:58.000Z",
            "duration": -1362470338,
            "tags": ["billed"]
        }))
        .unwrap();

        assert!(entry.is_running());
        assert_eq!(entry.start, Some(Utc.with_ymd_and_hms(2013, 3, 5, 7, 58, 58).unwrap()));
        assert!(entry.stop.is_none());
        assert_eq!(entry.tags, vec!["billed".to_string()]);
    }

    #[test]
    fn test_null_tags_decode_as_empty() {
        let entry: TimeEntry = serde_json::from_value(json!({
            "id": 5,
            "tags": null,
            "duration": 10
        }))
        .unwrap();

        assert!(entry.tags.is_empty());
        assert!(!entry.is_running());
    }

    #[test]
    fn test_new_time_entry_payload() {
        let start = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let entry = NewTimeEntry::new("Review")
            .project(193)
            .finished(start, 1200)
            .tags(["billed"]);

        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            json!({
                "description": "Review",
                "pid": 193,
                "start": "2024-01-10T09:00:00Z",
                "duration": 1200,
                "tags": ["billed"]
            })
        );
    }

    #[test]
    fn test_tag_action_serialization() {
        assert_eq!(serde_json::to_value(TagAction::Add).unwrap(), json!("add"));
        assert_eq!(TagAction::Remove.to_string(), "remove");
    }
}
