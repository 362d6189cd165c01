//! Domain model for the company payroll kata.
//!
//! [`Company`] owns an insertion-ordered roster of [`Employee`] records and
//! supports lookup by id, renaming and bulk raises. [`SharedCompany`] wraps a
//! company in a mutex for hosts that share it across threads.

pub mod company;
pub mod employee;
pub mod raise;
pub mod shared;

pub use company::Company;
pub use employee::Employee;
pub use raise::{ParseRaiseFormulaError, RaiseFormula};
pub use shared::{CompanyError, SharedCompany};
