//! Running a generator: validate, render, write, report.
//!
//! [`GeneratorService`] owns the sequencing. Rules live in
//! [`crate::domain`]; I/O lives behind [`ports`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{Filesystem, TemplateAssets, TemplateRenderer};
pub use services::{GeneratorService, NextSteps, WriteSummary};
