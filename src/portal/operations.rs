//! GraphQL documents issued by the student portal and their typed wrappers.

use crate::portal::{
    error::Error,
    graphql::{NoVariables, Operation},
    models::{CourseMark, StudentFile, StudentMarks},
    session::Token,
    student::StudentFileCache,
    transport::Transport,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub const LOGIN: &str = r"mutation studentPortalLogin($userId: String!, $password: String!) {
  studentPortalLogin(user_id: $userId, password: $password) {
    token
  }
}";

pub const LOAD_STUDENT_FILE: &str = r"query loadStudentFile {
  my_details {
    student_no
    photo_url
    biodata {
      surname
      other_names
    }
    current_info {
      recent_enrollment {
        study_yr
        sem
      }
    }
  }
}";

pub const GET_MY_RESULTS: &str = r"query myResults {
  my_results {
    student_marks {
      study_yr
      semester
      acc_yr_title
      course_unit_code
      course_unit_title
      final_mark
      grade
      GPA
      CGPA
    }
  }
}";

// Holds the password only for the lifetime of one request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginVariables<'a> {
    user_id: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginData {
    #[serde(rename = "studentPortalLogin")]
    login: LoginPayload,
}

#[derive(Deserialize)]
struct LoginPayload {
    token: String,
}

#[derive(Deserialize)]
struct MyDetails {
    my_details: StudentFile,
}

#[derive(Deserialize)]
struct MyResults {
    #[serde(default)]
    my_results: Option<StudentMarks>,
}

/// Runs the `studentPortalLogin` mutation and returns the issued token.
/// Does not touch the session; see [`crate::portal::login::login`].
///
/// # Errors
///
/// Passes through transport and GraphQL errors unchanged.
#[instrument(skip(transport, password))]
pub async fn login_mutation(
    transport: &Transport,
    user_id: &str,
    password: &SecretString,
) -> Result<Token, Error> {
    let operation = Operation {
        name: "studentPortalLogin",
        document: LOGIN,
        variables: LoginVariables {
            user_id,
            password: password.expose_secret(),
        },
    };

    let data: LoginData = transport.execute(&operation).await?;
    Ok(Token::new(data.login.token))
}

/// Loads the logged in student's file (`my_details`).
///
/// # Errors
///
/// Passes through transport and GraphQL errors unchanged.
#[instrument(skip(transport))]
pub async fn load_student_file(transport: &Transport) -> Result<StudentFile, Error> {
    let operation = Operation {
        name: "loadStudentFile",
        document: LOAD_STUDENT_FILE,
        variables: NoVariables {},
    };

    let data: MyDetails = transport.execute(&operation).await?;
    Ok(data.my_details)
}

/// Returns the cached student file for the current token, loading it on a miss.
///
/// # Errors
///
/// Passes through transport and GraphQL errors unchanged.
pub async fn load_student_file_cached(
    transport: &Transport,
    cache: &StudentFileCache,
) -> Result<StudentFile, Error> {
    if let Some(file) = cache.get() {
        debug!("student file served from cache");
        return Ok(file);
    }

    // Stamp with the generation seen before the request so a logout while it
    // is in flight leaves nothing behind.
    let generation = transport.session().generation();
    let file = load_student_file(transport).await?;
    cache.insert(generation, file.clone());
    Ok(file)
}

/// Loads the logged in student's course results (`my_results`).
///
/// # Errors
///
/// Passes through transport and GraphQL errors unchanged.
#[instrument(skip(transport))]
pub async fn my_results(transport: &Transport) -> Result<Vec<CourseMark>, Error> {
    let operation = Operation {
        name: "myResults",
        document: GET_MY_RESULTS,
        variables: NoVariables {},
    };

    let data: MyResults = transport.execute(&operation).await?;
    Ok(data
        .my_results
        .map(|results| results.student_marks)
        .unwrap_or_default())
}
