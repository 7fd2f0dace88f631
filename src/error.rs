//! Error types for Address Inspector.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading an address file.
///
/// Every variant aborts the whole file: the caller gets no records.
/// Problems confined to a single XML `item` are not errors; they are
/// logged and the item is skipped.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the file from disk.
    #[error("не удалось прочитать файл '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV file could not be opened, decoded or parsed.
    #[error("Ошибка при чтении CSV файла '{path}': {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// The XML reader rejected the document.
    #[error("Ошибка при чтении XML файла '{path}': {source}")]
    Xml {
        path: PathBuf,
        source: quick_xml::Error,
    },

    /// The XML document is syntactically valid so far but structurally broken
    /// (no root element, unclosed root, content after the root).
    #[error("Ошибка при чтении XML файла '{path}': {message}")]
    MalformedXml { path: PathBuf, message: String },

    /// The file extension is neither `.csv` nor `.xml`.
    #[error("Ошибка: поддерживаются только файлы CSV и XML ('{path}').")]
    UnsupportedFormat { path: PathBuf },
}
