use serde::Serialize;

/// One extracted event-like record. Transient output value only; a title is
/// always present, everything else is best-effort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub title: String,
    /// Normalized to YYYY-MM-DD; defaults to the current date when the page
    /// carried a time but no usable date.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// HH:MM, 24-hour
    #[serde(rename = "startTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "endTime", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let event = Event {
            title: "Spring Fair".into(),
            date: "2024-03-21".into(),
            description: None,
            location: None,
            start_time: Some("14:30".into()),
            end_time: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Spring Fair",
                "date": "2024-03-21",
                "startTime": "14:30",
            })
        );
    }
}
