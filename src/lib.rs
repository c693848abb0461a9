//! Command-line client for the Amazon Chime SDK Voice API.
//!
//! Each API operation is described once in [`operation::registry`] and
//! executed by the generic [`operation::dispatch`] pipeline.

pub mod aws;
pub mod cli;
pub mod error;
pub mod operation;

pub use error::{Error, Result};
