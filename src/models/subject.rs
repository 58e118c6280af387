//! Subject records: raw roster offerings and their normalized forms.
//!
//! The roster service delivers one flat record per (subject, code) pairing.
//! Normalization turns those into curriculum references and a per-subject
//! code summary; see `roster`.

use serde::{Deserialize, Serialize};

/// Identifier of a subject, unique system-wide.
pub type SubjectId = String;

/// One raw subject-offering record as delivered by the roster service.
///
/// Field names follow the service's wire shape. The same subject appears
/// once per code that offers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOffering {
    /// Subject identifier.
    pub subject_id: String,
    /// Subject display title.
    pub subject_title: String,
    /// Section/code number.
    pub code_no: String,
    /// Course (program) name.
    pub course: String,
    /// Year level, as the service sends it (numeric string).
    pub year_level: String,
    /// Department code.
    pub dept: String,
}

impl RawOffering {
    /// Creates a new offering record.
    pub fn new(
        subject_id: impl Into<String>,
        subject_title: impl Into<String>,
        code_no: impl Into<String>,
        course: impl Into<String>,
        year_level: impl Into<String>,
        dept: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            subject_title: subject_title.into(),
            code_no: code_no.into(),
            course: course.into(),
            year_level: year_level.into(),
            dept: dept.into(),
        }
    }
}

/// Reference to a subject inside a cohort's curriculum.
///
/// Identity is `subject_id`; immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRef {
    /// Subject identifier.
    pub subject_id: SubjectId,
    /// Subject display title.
    pub subject_title: String,
    /// Code number under which this cohort takes the subject.
    pub code_no: String,
}

/// One (code, cohort) pairing recorded under a subject summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectCode {
    pub code_no: String,
    pub course: String,
    pub year: String,
    pub dept: String,
}

/// A subject with every code it is offered under, for the summary view.
///
/// The first-seen offering supplies the title; every offering contributes
/// a code entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary {
    pub subject_id: SubjectId,
    pub subject_title: String,
    pub codes: Vec<SubjectCode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offering_wire_shape() {
        let rec = RawOffering::new("S1", "Calculus", "C-101", "BSIT", "1", "COE");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"subjectId\":\"S1\""));
        assert!(json.contains("\"yearLevel\":\"1\""));
        assert!(json.contains("\"codeNo\":\"C-101\""));

        let back: RawOffering = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_subject_ref_wire_shape() {
        let subj = SubjectRef {
            subject_id: "S1".into(),
            subject_title: "Calculus".into(),
            code_no: "C-101".into(),
        };
        let json = serde_json::to_string(&subj).unwrap();
        assert!(json.contains("\"subjectTitle\":\"Calculus\""));
    }
}
