//! Utility modules for dd-fetch
//!
//! This module contains helpers organized by functionality:
//! - `files`: Output directory management and JSON writing
//! - `http`: HTTP client construction
//! - `json`: Case-insensitive JSON decoding

pub mod files;
pub mod http;
pub mod json;
