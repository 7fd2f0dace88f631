use super::Record;
use crate::parser::FileFormat;
use std::path::PathBuf;

/// Records loaded from one file, in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub path: PathBuf,
    pub format: FileFormat,
    pub records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub fn new(path: PathBuf, format: FileFormat, records: Vec<Record>) -> Self {
        Self {
            path,
            format,
            records,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
