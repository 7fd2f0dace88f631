//! # Address Inspector
//!
//! A terminal tool that reads address lists and reports on them.
//!
//! ## Features
//!
//! - Read semicolon-delimited CSV files with a header row
//! - Read XML files whose root holds `<item city=".." street=".." house=".." floor=".."/>` elements
//! - Report records that occur more than once
//! - Count buildings per city for floors 1 to 5
//!
//! ## Example
//!
//! ```no_run
//! use address_inspector::analysis::{find_duplicates, floor_statistics};
//! use address_inspector::parser::load_file;
//!
//! let dataset = load_file("addresses.xml").expect("Failed to load");
//! print!("{}", find_duplicates(&dataset.records));
//! print!("{}", floor_statistics(&dataset.records));
//! ```

pub mod analysis;
pub mod error;
pub mod model;
pub mod parser;
pub mod ui;
