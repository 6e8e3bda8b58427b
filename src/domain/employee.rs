use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    EmployeeData,
    validation::{self, Field, InvalidArgument},
};

/// An employee of the payroll demo.
///
/// Every field except the identifier is validated when the record is built
/// and again whenever it is changed, so a record never holds a partially valid
/// state. The identifier is assigned later by whatever stores the record.
///
/// Equality and hashing take every field into account, the identifier
/// included.
///
/// # Examples
///
/// ```
/// use payroll::EmployeeRecord;
///
/// let mut gandalf =
///     EmployeeRecord::new("Gandalf", "The Grey", "Wizard", 1000, "gandalf123@gmail.com")?;
/// assert_eq!(gandalf.id(), None);
///
/// assert!(gandalf.set_email("@frodo.com").is_err());
/// assert_eq!(gandalf.email(), "gandalf123@gmail.com");
/// # Ok::<(), payroll::InvalidArgument>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "EmployeeData")]
pub struct EmployeeRecord {
    id: Option<i64>,
    first_name: String,
    last_name: String,
    description: String,
    job_years: i32,
    email: String,
}

/// The raw field values of a record, used by [`EmployeeRecord::from_trusted_parts`].
///
/// The default value is the field-less shell: empty strings, zero years and no
/// identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeParts {
    /// Externally assigned identifier.
    pub id: Option<i64>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Job description.
    pub description: String,
    /// Years of experience.
    pub job_years: i32,
    /// Email address.
    pub email: String,
}

impl EmployeeRecord {
    /// Builds a record, validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] for the first field that fails its
    /// validator. No record is produced in that case.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        description: impl Into<String>,
        job_years: i32,
        email: impl Into<String>,
    ) -> Result<Self, InvalidArgument> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let description = description.into();
        let email = email.into();

        validation::check_name(Field::FirstName, &first_name)?;
        validation::check_name(Field::LastName, &last_name)?;
        validation::check_description(&description)?;
        validation::check_email(&email)?;

        Ok(Self {
            id: None,
            first_name,
            last_name,
            description,
            job_years,
            email,
        })
    }

    /// Rebuilds a record from stored values without running any validator.
    ///
    /// Only for rehydrating state that was validated when it was first
    /// written. Hand-written code should use [`EmployeeRecord::new`]; a record
    /// built here may violate the field rules, which
    /// [`EmployeeRecord::validate`] can detect.
    #[doc(hidden)]
    #[must_use]
    pub fn from_trusted_parts(parts: EmployeeParts) -> Self {
        let EmployeeParts {
            id,
            first_name,
            last_name,
            description,
            job_years,
            email,
        } = parts;

        Self {
            id,
            first_name,
            last_name,
            description,
            job_years,
            email,
        }
    }

    /// Re-runs every field validator against the current values.
    ///
    /// Always succeeds for records built with [`EmployeeRecord::new`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] for the first field that fails.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        validation::check_name(Field::FirstName, &self.first_name)?;
        validation::check_name(Field::LastName, &self.last_name)?;
        validation::check_description(&self.description)?;
        validation::check_email(&self.email)
    }

    /// The externally assigned identifier, if any.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// Sets the identifier.
    ///
    /// Identifiers are not validated and may be reassigned.
    pub const fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    /// The first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Replaces the first name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if the name is blank. The current name is
    /// kept.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), InvalidArgument> {
        let first_name = first_name.into();
        validation::check_name(Field::FirstName, &first_name)?;
        self.first_name = first_name;
        Ok(())
    }

    /// The last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Replaces the last name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if the name is blank. The current name is
    /// kept.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), InvalidArgument> {
        let last_name = last_name.into();
        validation::check_name(Field::LastName, &last_name)?;
        self.last_name = last_name;
        Ok(())
    }

    /// The job description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces the job description.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if the description is blank. The current
    /// description is kept.
    pub fn set_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), InvalidArgument> {
        let description = description.into();
        validation::check_description(&description)?;
        self.description = description;
        Ok(())
    }

    /// Years of experience.
    #[must_use]
    pub const fn job_years(&self) -> i32 {
        self.job_years
    }

    /// Replaces the years of experience.
    ///
    /// `None` stands for an absent value and is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `job_years` is `None`. The current value
    /// is kept.
    pub fn set_job_years(&mut self, job_years: impl Into<Option<i32>>) -> Result<(), InvalidArgument> {
        self.job_years = validation::check_job_years(job_years.into())?;
        Ok(())
    }

    /// The email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replaces the email address.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if the address is blank or does not match
    /// the expected shape. The current address is kept.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), InvalidArgument> {
        let email = email.into();
        validation::check_email(&email)?;
        self.email = email;
        Ok(())
    }
}

impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("EmployeeRecord{id=")?;
        match self.id {
            Some(id) => write!(f, "{id}")?,
            None => f.write_str("null")?,
        }
        write!(
            f,
            ", firstName='{}', lastName='{}', description='{}', jobYears='{}', email='{}'}}",
            self.first_name, self.last_name, self.description, self.job_years, self.email
        )
    }
}

impl From<EmployeeRecord> for EmployeeParts {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            description: record.description,
            job_years: record.job_years,
            email: record.email,
        }
    }
}
