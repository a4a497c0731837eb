use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use chrono::NaiveDate;
use serde_json::Value;

use crate::error::RollcallError;
use crate::types::{AttendanceEntry, AttendanceSubmission};

/// Validated body of `POST /api/attendance`.
pub struct AttendancePayload(pub AttendanceSubmission);

impl<S> FromRequest<S> for AttendancePayload
where
    S: Send + Sync,
{
    type Rejection = RollcallError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| RollcallError::InvalidPayload(rejection.body_text()))?;

        // An empty body is treated like `{}` so it reports the missing fields.
        let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Default::default())
        } else {
            serde_json::from_slice(&body)
                .map_err(|_| RollcallError::InvalidPayload("invalid json".to_string()))?
        };

        parse_submission(value).map(AttendancePayload)
    }
}

/// Presence checks on `course`, `session_date` and `records`, then typed decoding.
///
/// Absent, `null` or empty values are `MissingFields`; present values of the
/// wrong shape are `InvalidPayload`.
fn parse_submission(value: Value) -> Result<AttendanceSubmission, RollcallError> {
    let course = match present(&value, "course") {
        None => return Err(RollcallError::MissingFields),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => {
            return Err(RollcallError::InvalidPayload(
                "course must be a string or number".to_string(),
            ));
        }
    };
    let session_date = match present(&value, "session_date") {
        None => return Err(RollcallError::MissingFields),
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return Err(RollcallError::InvalidPayload(
                "session_date must be YYYY-MM-DD".to_string(),
            ));
        }
    };
    let Some(records) = value.get("records").filter(|r| r.is_array()) else {
        return Err(RollcallError::MissingFields);
    };

    let session_date = NaiveDate::parse_from_str(session_date, "%Y-%m-%d").map_err(|_| {
        RollcallError::InvalidPayload("session_date must be YYYY-MM-DD".to_string())
    })?;
    let records: Vec<AttendanceEntry> = serde_json::from_value(records.clone())
        .map_err(|e| RollcallError::InvalidPayload(format!("invalid records: {e}")))?;

    Ok(AttendanceSubmission {
        course,
        session_date,
        records,
    })
}

fn present<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value
        .get(key)
        .filter(|v| !v.is_null() && v.as_str() != Some(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_complete_submission() {
        let parsed = parse_submission(json!({
            "course": "CS101",
            "session_date": "2024-09-02",
            "records": [
                {"student_id": 1, "status": "Present"},
                {"student_id": 2, "status": "Absent"}
            ]
        }))
        .unwrap();

        assert_eq!(parsed.course, "CS101");
        assert_eq!(
            parsed.session_date,
            NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
        );
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1].status, "Absent");
    }

    #[test]
    fn empty_records_are_allowed() {
        let parsed = parse_submission(json!({
            "course": "CS101",
            "session_date": "2024-09-02",
            "records": []
        }))
        .unwrap();
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn missing_or_empty_course_is_rejected() {
        for body in [
            json!({"session_date": "2024-09-02", "records": []}),
            json!({"course": "", "session_date": "2024-09-02", "records": []}),
            json!({"course": null, "session_date": "2024-09-02", "records": []}),
        ] {
            assert!(matches!(
                parse_submission(body),
                Err(RollcallError::MissingFields)
            ));
        }
    }

    #[test]
    fn missing_session_date_is_rejected() {
        let err = parse_submission(json!({"course": "CS101", "records": []})).unwrap_err();
        assert!(matches!(err, RollcallError::MissingFields));
    }

    #[test]
    fn records_must_be_an_array() {
        for records in [json!(null), json!({"student_id": 1}), json!("Present")] {
            let err = parse_submission(json!({
                "course": "CS101",
                "session_date": "2024-09-02",
                "records": records
            }))
            .unwrap_err();
            assert!(matches!(err, RollcallError::MissingFields));
        }
    }

    #[test]
    fn malformed_date_is_invalid_payload() {
        let err = parse_submission(json!({
            "course": "CS101",
            "session_date": "02/09/2024",
            "records": []
        }))
        .unwrap_err();
        assert!(matches!(err, RollcallError::InvalidPayload(_)));
    }

    #[test]
    fn status_vocabulary_is_not_checked() {
        let parsed = parse_submission(json!({
            "course": "CS101",
            "session_date": "2024-09-02",
            "records": [{"student_id": 42, "status": "Late"}]
        }))
        .unwrap();
        assert_eq!(parsed.records[0].status, "Late");
        assert_eq!(parsed.records[0].student_id, 42);
    }

    #[test]
    fn numeric_course_is_kept_as_text() {
        let parsed = parse_submission(json!({
            "course": 101,
            "session_date": "2024-09-02",
            "records": []
        }))
        .unwrap();
        assert_eq!(parsed.course, "101");
    }

    #[test]
    fn course_of_wrong_shape_is_invalid_payload() {
        let err = parse_submission(json!({
            "course": ["CS101"],
            "session_date": "2024-09-02",
            "records": []
        }))
        .unwrap_err();
        assert!(matches!(err, RollcallError::InvalidPayload(_)));
    }

    #[test]
    fn student_id_may_be_a_numeric_string() {
        let parsed = parse_submission(json!({
            "course": "CS101",
            "session_date": "2024-09-02",
            "records": [
                {"student_id": "1", "status": "Present"},
                {"student_id": " 12 ", "status": "Absent"}
            ]
        }))
        .unwrap();
        assert_eq!(parsed.records[0].student_id, 1);
        assert_eq!(parsed.records[1].student_id, 12);
    }

    #[test]
    fn malformed_entry_is_invalid_payload() {
        let err = parse_submission(json!({
            "course": "CS101",
            "session_date": "2024-09-02",
            "records": [{"student_id": "abc"}]
        }))
        .unwrap_err();
        assert!(matches!(err, RollcallError::InvalidPayload(_)));
    }
}
