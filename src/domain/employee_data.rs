// Inbound shape of an employee record.
//
// Records arriving from outside (JSON, YAML) may leave any field out. They are
// read into `EmployeeData` first and only become an `EmployeeRecord` once every
// field has passed its validator.

use serde::{Deserialize, Serialize};

use super::{
    EmployeeRecord,
    validation::{Field, InvalidArgument, Problem},
};

/// A field-keyed employee record as it arrives from an external source.
///
/// Every field is optional; absent fields are rejected when converting into an
/// [`EmployeeRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeData {
    /// Identifier assigned by a previous save, if any.
    pub id: Option<i64>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Job description.
    pub description: Option<String>,
    /// Years of experience.
    pub job_years: Option<i32>,
    /// Email address.
    pub email: Option<String>,
}

impl TryFrom<EmployeeData> for EmployeeRecord {
    type Error = InvalidArgument;

    fn try_from(data: EmployeeData) -> Result<Self, Self::Error> {
        let mut record = Self::new(
            present(Field::FirstName, data.first_name)?,
            present(Field::LastName, data.last_name)?,
            present(Field::Description, data.description)?,
            super::validation::check_job_years(data.job_years)?,
            present(Field::Email, data.email)?,
        )?;
        record.set_id(data.id);
        Ok(record)
    }
}

impl From<EmployeeRecord> for EmployeeData {
    fn from(record: EmployeeRecord) -> Self {
        let parts = super::EmployeeParts::from(record);
        Self {
            id: parts.id,
            first_name: Some(parts.first_name),
            last_name: Some(parts.last_name),
            description: Some(parts.description),
            job_years: Some(parts.job_years),
            email: Some(parts.email),
        }
    }
}

fn present(field: Field, value: Option<String>) -> Result<String, InvalidArgument> {
    value.ok_or(InvalidArgument::new(field, Problem::Missing))
}
