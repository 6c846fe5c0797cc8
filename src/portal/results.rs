//! Groups course results into semester tables.

use crate::portal::models::CourseMark;
use serde::Serialize;

/// Results of one semester of one academic year.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SemesterResults {
    pub study_yr: u32,
    pub semester: u32,
    pub academic_year: String,
    pub courses: Vec<CourseMark>,
    /// GPA reported on the first course of the semester.
    pub gpa: f64,
    /// CGPA reported on the first course of the semester.
    pub cgpa: f64,
}

impl SemesterResults {
    #[must_use]
    pub fn retakes(&self) -> impl Iterator<Item = &CourseMark> {
        self.courses.iter().filter(|course| course.is_retake())
    }

    /// Heading used by the portal, e.g. `YEAR 1 - SEMESTER 2 - 2023/2024`.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "YEAR {} - SEMESTER {} - {}",
            self.study_yr, self.semester, self.academic_year
        )
    }
}

/// Buckets marks by (study year, semester, academic year), ordered by study
/// year then semester. Courses keep their input order inside a bucket, and
/// buckets that tie on year and semester keep first-seen order.
#[must_use]
pub fn group_by_semester(marks: Vec<CourseMark>) -> Vec<SemesterResults> {
    let mut groups: Vec<SemesterResults> = Vec::new();

    for mark in marks {
        let position = groups.iter().position(|group| {
            group.study_yr == mark.study_yr
                && group.semester == mark.semester
                && group.academic_year == mark.acc_yr_title
        });

        match position {
            Some(index) => groups[index].courses.push(mark),
            None => groups.push(SemesterResults {
                study_yr: mark.study_yr,
                semester: mark.semester,
                academic_year: mark.acc_yr_title.clone(),
                gpa: mark.gpa,
                cgpa: mark.cgpa,
                courses: vec![mark],
            }),
        }
    }

    groups.sort_by_key(|group| (group.study_yr, group.semester));
    groups
}
