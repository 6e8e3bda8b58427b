//! Validated employee records
//!
//! An [`EmployeeRecord`] holds a name, a job description, years of experience
//! and an email address, plus an identifier assigned by whatever stores it.
//! Every field is checked when the record is built and whenever it changes.

pub mod domain;
pub use domain::{
    Config, EmployeeData, EmployeeParts, EmployeeRecord, Field, Format, InvalidArgument, Problem,
};
