//! Load-boundary validation of raw roster records.
//!
//! Raw offerings arrive from the roster service without shape guarantees.
//! These checks catch records that would corrupt the grid downstream:
//! - Blank subject identifiers
//! - Blank course names or code numbers
//! - Non-numeric year levels
//!
//! The load path quarantines invalid records rather than failing the whole
//! load; strict callers can run [`validate_offerings`] up front instead.

use crate::models::RawOffering;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The record has a blank subject identifier.
    MissingSubjectId,
    /// The record has a blank course name.
    MissingCourse,
    /// The record has a blank code number.
    MissingCodeNo,
    /// The year level is not a number.
    InvalidYearLevel,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks a single offering record, returning the first problem found.
pub fn validate_offering(record: &RawOffering) -> Result<(), ValidationError> {
    if record.subject_id.trim().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::MissingSubjectId,
            format!("offering '{}' has a blank subjectId", record.code_no),
        ));
    }
    if record.course.trim().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::MissingCourse,
            format!("offering '{}' has a blank course", record.subject_id),
        ));
    }
    if record.code_no.trim().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::MissingCodeNo,
            format!("offering '{}' has a blank codeNo", record.subject_id),
        ));
    }
    if record.year_level.trim().parse::<u32>().is_err() {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidYearLevel,
            format!(
                "offering '{}' has year level '{}', expected a number",
                record.subject_id, record.year_level
            ),
        ));
    }
    Ok(())
}

/// Validates a full offering list, collecting every detected issue.
///
/// # Returns
/// `Ok(())` if all records pass, `Err(errors)` with one entry per bad record.
pub fn validate_offerings(records: &[RawOffering]) -> ValidationResult {
    let errors: Vec<ValidationError> = records
        .iter()
        .filter_map(|r| validate_offering(r).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_offering() -> RawOffering {
        RawOffering::new("S1", "Calculus", "C-101", "BSIT", "1", "COE")
    }

    #[test]
    fn test_valid_offering() {
        assert!(validate_offering(&sample_offering()).is_ok());
        assert!(validate_offerings(&[sample_offering()]).is_ok());
    }

    #[test]
    fn test_blank_subject_id() {
        let mut rec = sample_offering();
        rec.subject_id = "  ".into();
        let err = validate_offering(&rec).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingSubjectId);
        assert!(err.message.contains("C-101"));
    }

    #[test]
    fn test_blank_course() {
        let mut rec = sample_offering();
        rec.course = String::new();
        let err = validate_offering(&rec).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingCourse);
    }

    #[test]
    fn test_blank_code_no() {
        let mut rec = sample_offering();
        rec.code_no = String::new();
        let err = validate_offering(&rec).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingCodeNo);
    }

    #[test]
    fn test_non_numeric_year_level() {
        let mut rec = sample_offering();
        rec.year_level = "first".into();
        let err = validate_offering(&rec).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidYearLevel);
        assert!(err.message.contains("first"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut bad_id = sample_offering();
        bad_id.subject_id = String::new();
        let mut bad_year = sample_offering();
        bad_year.year_level = "x".into();

        let errors =
            validate_offerings(&[sample_offering(), bad_id, bad_year]).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
