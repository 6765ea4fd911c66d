//! JSON payloads shared by `--json` output and the MCP tools.
//!
//! Each function turns the engine's sentinels into an [`InputError`] so both
//! front ends report invalid input the same way.

use std::fmt;

use numerology_core::{
    CanonicalNumber, compatibility_report, expression_number, has_insight, insight_for,
    is_master, life_path_number, meaning_for,
};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    MissingDate,
    InvalidDate(String),
    MissingName,
    InvalidName(String),
    NotCanonical(u32),
    OutOfRange(u32, u32),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingDate => write!(f, "please enter a birth date (YYYY-MM-DD)"),
            InputError::InvalidDate(d) => write!(f, "invalid date {d:?}: expected YYYY-MM-DD"),
            InputError::MissingName => write!(f, "please enter a name"),
            InputError::InvalidName(n) => {
                write!(f, "invalid name {n:?}: no Latin or Hangul letters")
            }
            InputError::NotCanonical(n) => {
                write!(f, "{n} is not a canonical number (1-9, 11, 22, 33)")
            }
            InputError::OutOfRange(a, b) => {
                write!(f, "numbers must be between 1 and 33 (got {a} and {b})")
            }
        }
    }
}

impl std::error::Error for InputError {}

pub fn life_path(date: &str) -> Result<Value, InputError> {
    if date.trim().is_empty() {
        return Err(InputError::MissingDate);
    }
    let n = life_path_number(date).ok_or_else(|| InputError::InvalidDate(date.to_string()))?;
    Ok(json!({
        "date": date.trim(),
        "number": n,
        "isMaster": is_master(n),
        "meaning": meaning_for(n),
        "insight": insight_for(n),
    }))
}

pub fn expression(name: &str) -> Result<Value, InputError> {
    let n = match expression_number(name) {
        None => return Err(InputError::MissingName),
        Some(0) => return Err(InputError::InvalidName(name.trim().to_string())),
        Some(n) => n,
    };
    Ok(json!({
        "name": name.trim(),
        "number": n,
        "isMaster": is_master(n),
        "meaning": meaning_for(n),
    }))
}

pub fn meaning(number: u32) -> Result<Value, InputError> {
    let n = CanonicalNumber::new(number).ok_or(InputError::NotCanonical(number))?;
    Ok(json!({
        "number": n,
        "isMaster": n.is_master(),
        "meaning": meaning_for(n.get()),
    }))
}

pub fn insight(number: u32) -> Value {
    json!({
        "number": number,
        "fallback": !has_insight(number),
        "insight": insight_for(number),
    })
}

pub fn compatibility(a: u32, b: u32) -> Result<Value, InputError> {
    let report = compatibility_report(a, b).ok_or(InputError::OutOfRange(a, b))?;
    Ok(json!(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_path_payload() {
        let v = life_path("1990-07-16").unwrap();
        assert_eq!(v["number"], 33);
        assert_eq!(v["isMaster"], true);
        assert_eq!(v["meaning"]["name"], "Master Teacher");
        assert!(v["insight"]["purpose"].is_string());
    }

    #[test]
    fn test_life_path_errors() {
        assert_eq!(life_path(" "), Err(InputError::MissingDate));
        assert_eq!(
            life_path("16/07/1990"),
            Err(InputError::InvalidDate("16/07/1990".to_string()))
        );
    }

    #[test]
    fn test_expression_payload() {
        let v = expression(" john ").unwrap();
        assert_eq!(v["name"], "john");
        assert_eq!(v["number"], 11);
        assert_eq!(v["meaning"]["isMaster"], true);
    }

    #[test]
    fn test_expression_errors() {
        assert_eq!(expression(""), Err(InputError::MissingName));
        assert_eq!(
            expression("42"),
            Err(InputError::InvalidName("42".to_string()))
        );
    }

    #[test]
    fn test_meaning_payload() {
        assert_eq!(meaning(5).unwrap()["meaning"]["color"], "Orange");
        let v = meaning(22).unwrap();
        assert_eq!(v["number"], 22);
        assert_eq!(v["isMaster"], true);
        assert_eq!(meaning(10), Err(InputError::NotCanonical(10)));
    }

    #[test]
    fn test_insight_payload_flags_fallback() {
        assert_eq!(insight(8)["fallback"], false);
        assert_eq!(insight(12)["fallback"], true);
    }

    #[test]
    fn test_compatibility_payload() {
        let v = compatibility(9, 9).unwrap();
        assert_eq!(v["score"], 100);
        assert_eq!(v["tier"], "cosmically_aligned");
        assert_eq!(compatibility(34, 1), Err(InputError::OutOfRange(34, 1)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::OutOfRange(0, 40).to_string(),
            "numbers must be between 1 and 33 (got 0 and 40)"
        );
        assert!(InputError::NotCanonical(10).to_string().contains("11, 22, 33"));
    }
}
