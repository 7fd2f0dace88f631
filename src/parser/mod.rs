pub mod csv;
pub mod xml;

pub use crate::error::LoadError;
pub use csv::read_csv;
pub use xml::read_xml;

use crate::model::Dataset;
use std::fmt;
use std::path::Path;

/// Input formats, chosen by file extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xml,
}

impl FileFormat {
    /// Detects the format from the path's extension, ignoring case.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let name = path.as_ref().to_string_lossy().to_lowercase();
        if name.ends_with(".csv") {
            Some(Self::Csv)
        } else if name.ends_with(".xml") {
            Some(Self::Xml)
        } else {
            None
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("CSV"),
            Self::Xml => f.write_str("XML"),
        }
    }
}

/// Loads an address file, dispatching on its extension.
///
/// # Errors
///
/// Returns [`LoadError::UnsupportedFormat`] without touching the file if the
/// extension is neither `.csv` nor `.xml`; otherwise whatever the format's
/// reader returns.
///
/// # Example
///
/// ```no_run
/// use address_inspector::parser::load_file;
///
/// let dataset = load_file("addresses.csv")?;
/// println!("{} records", dataset.len());
/// # Ok::<(), address_inspector::error::LoadError>(())
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    let path_ref = path.as_ref();
    let format = FileFormat::from_path(path_ref).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path_ref.to_path_buf(),
    })?;

    let records = match format {
        FileFormat::Csv => read_csv(path_ref)?,
        FileFormat::Xml => read_xml(path_ref)?,
    };

    Ok(Dataset::new(path_ref.to_path_buf(), format, records))
}
