//! Domain model for the payroll demo.
//!
//! This module contains the employee record, its field validators, the
//! inbound record shape used at deserialization boundaries, and the tool
//! configuration.

mod employee;
pub use employee::{EmployeeParts, EmployeeRecord};

mod employee_data;
pub use employee_data::EmployeeData;

/// Field validators and the validation error.
pub mod validation;
pub use validation::{Field, InvalidArgument, Problem};

/// Configuration for the `payroll` tool.
pub mod config;
pub use config::{Config, Format};
