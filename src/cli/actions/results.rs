use crate::cli::{actions::connect::logged_in, commands::credentials};
use crate::portal::{
    models::CourseMark,
    operations,
    results::{SemesterResults, group_by_semester},
};
use anyhow::{Result, anyhow};
use serde::Serialize;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub endpoint: String,
    pub credentials: credentials::Options,
}

#[derive(Debug, Serialize)]
struct CourseOutput<'a> {
    #[serde(flatten)]
    mark: &'a CourseMark,
    retake: bool,
}

#[derive(Debug, Serialize)]
struct SemesterOutput<'a> {
    title: String,
    study_yr: u32,
    semester: u32,
    academic_year: &'a str,
    #[serde(rename = "GPA")]
    gpa: f64,
    #[serde(rename = "CGPA")]
    cgpa: f64,
    retakes: Vec<&'a str>,
    courses: Vec<CourseOutput<'a>>,
}

impl<'a> From<&'a SemesterResults> for SemesterOutput<'a> {
    fn from(results: &'a SemesterResults) -> Self {
        Self {
            title: results.title(),
            study_yr: results.study_yr,
            semester: results.semester,
            academic_year: &results.academic_year,
            gpa: results.gpa,
            cgpa: results.cgpa,
            retakes: results
                .retakes()
                .map(|mark| mark.course_unit_code.as_str())
                .collect(),
            courses: results
                .courses
                .iter()
                .map(|mark| CourseOutput {
                    mark,
                    retake: mark.is_retake(),
                })
                .collect(),
        }
    }
}

/// Log in and print course results grouped by semester.
/// # Errors
/// Returns an error if the login or the query fails.
pub async fn execute(args: Args) -> Result<()> {
    let (transport, _) = logged_in(&args.endpoint, &args.credentials).await?;

    let marks = operations::my_results(&transport)
        .await
        .map_err(|err| anyhow!(err.user_message()).context("failed to load results"))?;
    debug!(courses = marks.len(), "results loaded");

    let semesters = group_by_semester(marks);
    let output: Vec<SemesterOutput<'_>> = semesters.iter().map(SemesterOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);

    transport.session().logout();
    Ok(())
}
