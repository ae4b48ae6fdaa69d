// letterstat/src/lib.rs
//! # Letterstat CLI Application
//!
//! This crate provides the terminal interface for `letterstat-core`: reading
//! and decoding corpus files, printing metric tables and bar charts, and
//! exporting full reports as JSON.

pub mod cli;
pub mod commands;
pub mod input;
pub mod logger;
pub mod ui;

pub use input::{read_text, DecodedText};
