use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::Validate;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub price: Number,
    pub start: String,
    pub duration: CourseDuration,
    pub type_id: i64,
}

impl Course {
    pub fn from_input(id: i64, input: CourseInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            start: input.start,
            duration: input.duration,
            type_id: input.type_id,
        }
    }
}

/// Length of a course in whatever unit the client uses: `30`, `1.5` or `"6 weeks"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseDuration {
    Number(Number),
    Text(String),
}

// `price` and `duration` columns carry no declared type, so SQLite keeps
// integers, reals and text exactly as bound. `typeof()` says which one came back.
impl<'r> FromRow<'r, SqliteRow> for Course {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let price_type: String = row.try_get("price_type")?;
        let duration_type: String = row.try_get("duration_type")?;

        let duration = match duration_type.as_str() {
            "integer" | "real" => {
                CourseDuration::Number(decode_number(row, "duration", &duration_type)?)
            }
            _ => CourseDuration::Text(row.try_get("duration")?),
        };

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: decode_number(row, "price", &price_type)?,
            start: row.try_get("start")?,
            duration,
            type_id: row.try_get("type_id")?,
        })
    }
}

fn decode_number(row: &SqliteRow, column: &str, kind: &str) -> Result<Number, sqlx::Error> {
    if kind == "integer" {
        return Ok(Number::from(row.try_get::<i64, _>(column)?));
    }
    let value: f64 = row.try_get(column)?;
    Number::from_f64(value).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: format!("{} is not a finite number", value).into(),
    })
}

/// Body of both create and update: every writable field, replaced together.
/// Decoded from JSON or from a url-encoded form, where every value is text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseInput {
    pub name: String,
    #[serde(deserialize_with = "number_or_numeric_text")]
    pub price: Number,
    pub start: String,
    pub duration: CourseDuration,
    pub type_id: i64,
}

fn number_or_numeric_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Number, D::Error> {
    match CourseDuration::deserialize(deserializer)? {
        CourseDuration::Number(n) => Ok(n),
        CourseDuration::Text(text) => text
            .trim()
            .parse::<Number>()
            .map_err(|_| D::Error::custom(format!("invalid number: {}", text))),
    }
}

impl Validate for CourseInput {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name must not be empty".to_string()));
        }
        if !is_non_negative(&self.price) {
            return Err(AppError::BadRequest(
                "price must be a non-negative number".to_string(),
            ));
        }
        if !is_valid_start(&self.start) {
            return Err(AppError::BadRequest(format!(
                "start is not a valid date or date-time: {}",
                self.start
            )));
        }
        match &self.duration {
            CourseDuration::Number(n) if !is_non_negative(n) => Err(AppError::BadRequest(
                "duration must not be negative".to_string(),
            )),
            CourseDuration::Text(text) if text.trim().is_empty() => Err(AppError::BadRequest(
                "duration must not be empty".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

fn is_non_negative(n: &Number) -> bool {
    n.as_f64().is_some_and(|v| v.is_finite() && v >= 0.0)
}

// Accepts `2024-01-10`, `2024-01-10T09:00:00` and full RFC 3339.
fn is_valid_start(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}
