//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking service including:
//! - Database initialization, migrations and entity models
//! - Bootstrap configuration loading
//! - Phone number validation
//! - Show time formatting

pub mod config;
pub mod db;
pub mod error;
pub mod phone;
pub mod time;

pub use error::{Error, Result};
