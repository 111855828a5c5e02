//! Employee identifier.
//!
//! Ids are assigned by the database (`SERIAL`), so the key space is exactly
//! the positive half of `i32`. Anything a client sends that does not fit is
//! simply an id no employee has; [`EmployeeId::parse_key`] reports that as
//! `None` instead of an error.

use core::fmt;
use core::num::IntErrorKind;

use serde::{Deserialize, Serialize};

/// Database-assigned employee id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type), sqlx(transparent))]
pub struct EmployeeId(i32);

/// A path segment that is not an integer at all.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot parse `{0}` as an integer id")]
pub struct InvalidKey(pub String);

impl EmployeeId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Interpret a client-supplied key.
    ///
    /// Any integer is a well-formed key. Integers outside the column's range
    /// cannot name a row and come back as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKey`] if `raw` is not an integer.
    ///
    /// ```
    /// use employee_registry_core::EmployeeId;
    ///
    /// assert_eq!(EmployeeId::parse_key("7"), Ok(Some(EmployeeId::new(7))));
    /// assert_eq!(EmployeeId::parse_key("2147483648"), Ok(None));
    /// assert!(EmployeeId::parse_key("abc").is_err());
    /// ```
    pub fn parse_key(raw: &str) -> Result<Option<Self>, InvalidKey> {
        match raw.parse::<i32>() {
            Ok(id) => Ok(Some(Self(id))),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Ok(None)
            }
            Err(_) => Err(InvalidKey(raw.to_owned())),
        }
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id_serializes_as_bare_integer() {
        let id = EmployeeId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: EmployeeId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, EmployeeId::new(7));
    }

    #[test]
    fn test_parse_key_in_range() {
        assert_eq!(EmployeeId::parse_key("1"), Ok(Some(EmployeeId::new(1))));
        assert_eq!(EmployeeId::parse_key("-1"), Ok(Some(EmployeeId::new(-1))));
        assert_eq!(
            EmployeeId::parse_key("2147483647"),
            Ok(Some(EmployeeId::new(i32::MAX)))
        );
    }

    #[test]
    fn test_parse_key_out_of_range_names_nothing() {
        for raw in ["2147483648", "-2147483649", "99999999999999999999999"] {
            assert_eq!(EmployeeId::parse_key(raw), Ok(None), "{raw}");
        }
    }

    #[test]
    fn test_parse_key_rejects_non_integers() {
        for raw in ["abc", "1.5", "", "12abc"] {
            assert_eq!(
                EmployeeId::parse_key(raw),
                Err(InvalidKey(raw.to_string())),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_employee_id_display() {
        assert_eq!(EmployeeId::new(5).to_string(), "5");
    }
}
