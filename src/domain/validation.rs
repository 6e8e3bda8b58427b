//! Field validators for employee records.
//!
//! Each predicate is pure and deterministic. They are shared by the validating
//! constructor, the setters and the inbound [`EmployeeData`] conversion.
//!
//! [`EmployeeData`]: crate::domain::EmployeeData

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Loose email shape: something, an `@`, something, then any one character.
///
/// The final `.` is a wildcard, not a literal dot.
const EMAIL_PATTERN: &str = r"^.+@.+.$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Returns `true` if `name` is non-empty once surrounding whitespace is
/// trimmed.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Returns `true` if `description` is non-empty once surrounding whitespace is
/// trimmed.
#[must_use]
pub fn is_valid_description(description: &str) -> bool {
    !description.trim().is_empty()
}

/// Returns `true` if a number of job years is present.
///
/// Any value is accepted, negative numbers included.
#[must_use]
pub const fn is_valid_job_years(job_years: Option<i32>) -> bool {
    job_years.is_some()
}

/// Returns `true` if `email` is non-blank and matches `^.+@.+.$`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && EMAIL.is_match(email)
}

/// The fields of an employee record that carry a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The employee's first name.
    FirstName,
    /// The employee's last name.
    LastName,
    /// Free-text job description.
    Description,
    /// Years of experience.
    JobYears,
    /// Contact email address.
    Email,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Description => "description",
            Self::JobYears => "job years",
            Self::Email => "email",
        };
        f.write_str(name)
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Problem {
    /// No value was supplied.
    Missing,
    /// The value is empty or whitespace only.
    Blank,
    /// The value is present but does not have the required shape.
    Malformed,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match self {
            Self::Missing => "value is missing",
            Self::Blank => "value is blank",
            Self::Malformed => "value is malformed",
        };
        f.write_str(reason)
    }
}

/// Error returned when a value fails its field's validator.
///
/// This is the only failure mode of [`EmployeeRecord`]. It signals a caller bug
/// or bad upstream data; retrying with the same value will fail again.
///
/// [`EmployeeRecord`]: crate::EmployeeRecord
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {problem}")]
pub struct InvalidArgument {
    field: Field,
    problem: Problem,
}

impl InvalidArgument {
    /// Creates an error for `field`.
    #[must_use]
    pub const fn new(field: Field, problem: Problem) -> Self {
        Self { field, problem }
    }

    /// The field that was rejected.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Why the field was rejected.
    #[must_use]
    pub const fn problem(&self) -> Problem {
        self.problem
    }
}

pub(crate) fn check_name(field: Field, name: &str) -> Result<(), InvalidArgument> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(rejected(field, Problem::Blank))
    }
}

pub(crate) fn check_description(description: &str) -> Result<(), InvalidArgument> {
    if is_valid_description(description) {
        Ok(())
    } else {
        Err(rejected(Field::Description, Problem::Blank))
    }
}

pub(crate) fn check_job_years(job_years: Option<i32>) -> Result<i32, InvalidArgument> {
    job_years.ok_or_else(|| rejected(Field::JobYears, Problem::Missing))
}

pub(crate) fn check_email(email: &str) -> Result<(), InvalidArgument> {
    if is_valid_email(email) {
        Ok(())
    } else if email.trim().is_empty() {
        Err(rejected(Field::Email, Problem::Blank))
    } else {
        Err(rejected(Field::Email, Problem::Malformed))
    }
}

fn rejected(field: Field, problem: Problem) -> InvalidArgument {
    tracing::debug!(%field, %problem, "rejected employee field");
    InvalidArgument::new(field, problem)
}
