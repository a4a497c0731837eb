use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};

/// One batch of statuses for a single course session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSubmission {
    pub course: String,
    pub session_date: NaiveDate,
    pub records: Vec<AttendanceEntry>,
}

/// Status is stored verbatim; any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttendanceEntry {
    #[serde(deserialize_with = "student_id_from_number_or_string")]
    pub student_id: i64,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct RecordedResponse {
    pub ok: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StudentRef {
    Id(i64),
    Text(String),
}

/// Accepts `7` as well as `"7"`; form-driven clients send ids as strings.
fn student_id_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match StudentRef::deserialize(deserializer)? {
        StudentRef::Id(id) => Ok(id),
        StudentRef::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid student_id {text:?}"))),
    }
}
