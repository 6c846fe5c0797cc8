//! Response models for the portal queries.

use serde::{Deserialize, Serialize};

/// Student file returned by `my_details`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct StudentFile {
    pub student_no: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub biodata: Biodata,
    #[serde(default)]
    pub current_info: Option<CurrentInfo>,
}

impl StudentFile {
    /// "Surname Other Names", trimmed.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.biodata.surname.trim(), self.biodata.other_names.trim())
            .trim()
            .to_string()
    }

    #[must_use]
    pub fn recent_enrollment(&self) -> Option<&Enrollment> {
        self.current_info
            .as_ref()
            .and_then(|info| info.recent_enrollment.as_ref())
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Biodata {
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub other_names: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CurrentInfo {
    #[serde(default)]
    pub recent_enrollment: Option<Enrollment>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Enrollment {
    pub study_yr: u32,
    pub sem: u32,
}

/// One course unit result from `my_results.student_marks`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CourseMark {
    pub study_yr: u32,
    pub semester: u32,
    pub acc_yr_title: String,
    pub course_unit_code: String,
    pub course_unit_title: String,
    pub final_mark: f64,
    pub grade: String,
    #[serde(rename = "GPA")]
    pub gpa: f64,
    #[serde(rename = "CGPA")]
    pub cgpa: f64,
}

impl CourseMark {
    /// A failed unit has to be retaken.
    #[must_use]
    pub fn is_retake(&self) -> bool {
        self.grade.trim() == "F"
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct StudentMarks {
    #[serde(default)]
    pub student_marks: Vec<CourseMark>,
}
