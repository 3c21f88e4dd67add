use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NumbersParseError;

// ============================================================================
// Auth Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    pub id_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
}

// ============================================================================
// Game Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Image filename inside the public folder.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// ============================================================================
// Draw Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    pub id: i64,
    pub game_id: i64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub draw_datetime: NaiveDateTime,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDrawRequest {
    pub game_id: i64,
    pub draw_datetime: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// ============================================================================
// Result Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Pending,
    Approved,
    Rejected,
    Published,
    #[serde(other)]
    Unknown,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Pending => "pending",
            ResultStatus::Approved => "approved",
            ResultStatus::Rejected => "rejected",
            ResultStatus::Published => "published",
            ResultStatus::Unknown => "unknown",
        }
    }

    pub fn is_awaiting_review(&self) -> bool {
        matches!(self, ResultStatus::Pending)
    }
}

impl FromStr for ResultStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ResultStatus::Pending),
            "approved" => Ok(ResultStatus::Approved),
            "rejected" => Ok(ResultStatus::Rejected),
            "published" => Ok(ResultStatus::Published),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

impl ReviewDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewDecision::Approved => "approved",
            ReviewDecision::Rejected => "rejected",
        }
    }
}

impl FromStr for ReviewDecision {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approved" => Ok(ReviewDecision::Approved),
            "rejected" => Ok(ReviewDecision::Rejected),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultApproval {
    pub id: i64,
    pub manager_id: i64,
    pub decision: ReviewDecision,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDraw {
    pub id: i64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub draw_datetime: NaiveDateTime,
    pub game_id: i64,
    pub game: Game,
}

/// A result record as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult {
    pub id: i64,
    pub draw_id: i64,
    pub winning_numbers: String,
    #[serde(default)]
    pub machine_numbers: Option<String>,
    #[serde(default)]
    pub share_copy: String,
    #[serde(default)]
    pub share_hashtags: Vec<String>,
    #[serde(default)]
    pub share_targets: Vec<String>,
    pub status: ResultStatus,
    pub verified: bool,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub verified_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub submitted_by_id: Option<i64>,
    #[serde(default)]
    pub approvals: Vec<ResultApproval>,
    pub draw: ResultDraw,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResultRequest {
    pub draw_id: i64,
    pub winning_numbers: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_numbers: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_copy: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub share_hashtags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub share_targets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResultRequest {
    pub decision: ReviewDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// ============================================================================
// Display Types
// ============================================================================

/// One draw's published result, shaped for the result card.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawResult {
    pub id: String,
    pub game_name: String,
    pub draw_date: NaiveDate,
    pub winning_numbers: Vec<u32>,
    pub machine_numbers: Vec<u32>,
    pub is_verified: bool,
    pub verified_at: Option<NaiveDateTime>,
}

impl TryFrom<&ApiResult> for DrawResult {
    type Error = NumbersParseError;

    fn try_from(result: &ApiResult) -> Result<Self, Self::Error> {
        let machine_numbers = result
            .machine_numbers
            .as_deref()
            .map(parse_numbers)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            id: result.id.to_string(),
            game_name: result.draw.game.name.clone(),
            draw_date: result.draw.draw_datetime.date(),
            winning_numbers: parse_numbers(&result.winning_numbers)?,
            machine_numbers,
            is_verified: result.verified,
            verified_at: result.verified_at,
        })
    }
}

/// Parse a stored number sequence such as `"5, 12, 33"` or `"[5 12 33]"`.
///
/// Commas, whitespace and dashes all separate numbers. An empty string is an
/// empty sequence.
pub fn parse_numbers(raw: &str) -> Result<Vec<u32>, NumbersParseError> {
    let trimmed = raw.trim().trim_start_matches('[').trim_end_matches(']');

    trimmed
        .split(|c: char| c == ',' || c == '-' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u32>().map_err(|_| NumbersParseError {
                token: token.to_string(),
                input: raw.to_string(),
            })
        })
        .collect()
}

// ============================================================================
// Timestamps
// ============================================================================

/// Backend timestamps arrive either naive (`2026-01-08T19:00:00`) or with an
/// offset. Offsets are normalized to UTC and dropped.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw))),
            None => Ok(None),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn sample_result_json() -> &'static str {
        r##"{
            "id": 45,
            "draw_id": 7,
            "winning_numbers": "5, 12, 33, 41, 80",
            "machine_numbers": "1,2,3,4,5",
            "share_copy": "Results are out",
            "share_hashtags": ["#rand"],
            "share_targets": ["facebook"],
            "status": "approved",
            "verified": true,
            "verified_at": "2026-01-08T20:15:00Z",
            "submitted_by_id": 3,
            "approvals": [{
                "id": 1,
                "manager_id": 9,
                "decision": "approved",
                "note": null,
                "created_at": "2026-01-08T20:10:00"
            }],
            "draw": {
                "id": 7,
                "draw_datetime": "2026-01-08T19:00:00",
                "game_id": 2,
                "game": {"id": 2, "name": "Star Lotto", "description": null}
            },
            "created_at": "2026-01-08T19:30:00.123456"
        }"##
    }

    #[test]
    fn test_parse_numbers_separators() {
        assert_eq!(parse_numbers("5, 12, 33").unwrap(), vec![5, 12, 33]);
        assert_eq!(parse_numbers("5 12 33").unwrap(), vec![5, 12, 33]);
        assert_eq!(parse_numbers("5-12-33").unwrap(), vec![5, 12, 33]);
        assert_eq!(parse_numbers("[5,12,33]").unwrap(), vec![5, 12, 33]);
        assert!(parse_numbers("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_numbers_rejects_garbage() {
        let err = parse_numbers("5, x, 33").unwrap_err();
        assert_eq!(err.token, "x");
        assert_eq!(err.input, "5, x, 33");
    }

    #[test]
    fn test_google_login_request_body() {
        let request = GoogleLoginRequest {
            id_token: "eyJhbGciOi".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"id_token":"eyJhbGciOi"}"#);
    }

    #[test]
    fn test_auth_token_deserialization() {
        let token: AuthToken =
            serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_result_status_from_str() {
        assert_eq!("pending".parse(), Ok(ResultStatus::Pending));
        assert_eq!("APPROVED".parse(), Ok(ResultStatus::Approved));
        assert_eq!("Rejected".parse(), Ok(ResultStatus::Rejected));
        assert!("invalid".parse::<ResultStatus>().is_err());
    }

    #[test]
    fn test_unknown_status_deserializes() {
        let status: ResultStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, ResultStatus::Unknown);
    }

    #[test]
    fn test_review_decision_serialization() {
        let request = ReviewResultRequest {
            decision: ReviewDecision::Rejected,
            note: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"decision":"rejected"}"#);
    }

    #[test]
    fn test_api_result_deserialization() {
        let result: ApiResult = serde_json::from_str(sample_result_json()).unwrap();
        assert_eq!(result.id, 45);
        assert_eq!(result.status, ResultStatus::Approved);
        assert_eq!(result.draw.game.name, "Star Lotto");
        assert_eq!(result.approvals.len(), 1);
        assert_eq!(result.share_hashtags, vec!["#rand".to_string()]);
        assert_eq!(result.verified_at.unwrap().hour(), 20);
    }

    #[test]
    fn test_draw_result_from_api_result() {
        let result: ApiResult = serde_json::from_str(sample_result_json()).unwrap();
        let draw_result = DrawResult::try_from(&result).unwrap();

        assert_eq!(draw_result.id, "45");
        assert_eq!(draw_result.game_name, "Star Lotto");
        assert_eq!(draw_result.draw_date, NaiveDate::from_ymd_opt(2026, 1, 8).unwrap());
        assert_eq!(draw_result.winning_numbers, vec![5, 12, 33, 41, 80]);
        assert_eq!(draw_result.machine_numbers, vec![1, 2, 3, 4, 5]);
        assert!(draw_result.is_verified);
    }

    #[test]
    fn test_draw_result_without_machine_numbers() {
        let mut result: ApiResult = serde_json::from_str(sample_result_json()).unwrap();
        result.machine_numbers = None;
        let draw_result = DrawResult::try_from(&result).unwrap();
        assert!(draw_result.machine_numbers.is_empty());
    }

    #[test]
    fn test_timestamp_parse_formats() {
        assert!(timestamp::parse("2026-01-08T19:00:00").is_some());
        assert!(timestamp::parse("2026-01-08T19:00:00.5").is_some());
        assert!(timestamp::parse("2026-01-08T19:00").is_some());
        assert!(timestamp::parse("2026-01-08 19:00:00").is_some());
        assert!(timestamp::parse("not a date").is_none());

        let with_offset = timestamp::parse("2026-01-08T21:00:00+02:00").unwrap();
        assert_eq!(with_offset.hour(), 19);
    }

    #[test]
    fn test_create_game_request_skips_empty_fields() {
        let request = CreateGameRequest {
            name: "BINGO4".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"name":"BINGO4"}"#);
    }
}
