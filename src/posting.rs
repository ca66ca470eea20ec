use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(deserialize_with = "deserialize_deadline")]
    pub deadline: DateTime<Utc>,
    #[serde(rename = "URL", default)]
    pub url: String,
}

impl JobPosting {
    pub fn deadline_label(&self) -> String {
        self.deadline.format("%Y-%m-%d").to_string()
    }
}

/// Accepts RFC 3339 timestamps, naive date-times (read as UTC) and bare dates
/// (midnight UTC).
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_deadline<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_deadline(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid deadline: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("2024-06-15", Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap())]
    #[case("2024-06-15T09:30:00Z", Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap())]
    #[case("2024-06-15T09:30:00.000Z", Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap())]
    #[case("2024-06-15T18:00:00+09:00", Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap())]
    #[case("2024-06-15T09:30:00", Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap())]
    fn test_parse_deadline(#[case] raw: &str, #[case] expected: DateTime<Utc>) {
        assert_eq!(parse_deadline(raw), Some(expected));
    }

    #[test]
    fn test_parse_deadline_rejects_garbage() {
        assert_eq!(parse_deadline("next tuesday"), None);
        assert_eq!(parse_deadline(""), None);
    }

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "_id": "665f1c2e",
            "title": "Backend Engineer",
            "company": "Acme",
            "deadline": "2024-07-01T00:00:00.000Z",
            "URL": "https://jobs.example.com/1",
            "userid": "kim",
            "__v": 0
        }"#;
        let posting: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(posting.id, "665f1c2e");
        assert_eq!(posting.company, "Acme");
        assert_eq!(posting.url, "https://jobs.example.com/1");
        assert_eq!(posting.deadline_label(), "2024-07-01");
    }

    #[test]
    fn test_deserialize_missing_url_defaults_to_empty() {
        let json = r#"{"_id":"1","title":"T","company":"C","deadline":"2024-07-01"}"#;
        let posting: JobPosting = serde_json::from_str(json).unwrap();
        assert!(posting.url.is_empty());
    }

    #[test]
    fn test_deserialize_invalid_deadline_fails() {
        let json = r#"{"_id":"1","title":"T","company":"C","deadline":"soon"}"#;
        assert!(serde_json::from_str::<JobPosting>(json).is_err());
    }
}
