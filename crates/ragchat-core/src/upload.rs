//! Upload candidates, pre-flight validation, and dropped-path parsing

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::error::{Error, Result};

/// Default upload limit: 10 MiB
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_TEXT: &str = "text/plain";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

/// Document formats accepted by the upload endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
    Doc,
    Docx,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Pdf,
        DocumentKind::Text,
        DocumentKind::Doc,
        DocumentKind::Docx,
    ];

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            MIME_PDF => Some(DocumentKind::Pdf),
            MIME_TEXT => Some(DocumentKind::Text),
            MIME_DOC => Some(DocumentKind::Doc),
            MIME_DOCX => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => MIME_PDF,
            DocumentKind::Text => MIME_TEXT,
            DocumentKind::Doc => MIME_DOC,
            DocumentKind::Docx => MIME_DOCX,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Text => "txt",
            DocumentKind::Doc => "doc",
            DocumentKind::Docx => "docx",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Text => "TXT",
            DocumentKind::Doc => "DOC",
            DocumentKind::Docx => "DOCX",
        }
    }
}

/// Guess a MIME type from the file extension, the way a browser file
/// picker would.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => MIME_PDF,
        Some("txt") | Some("text") => MIME_TEXT,
        Some("doc") => MIME_DOC,
        Some("docx") => MIME_DOCX,
        Some("md") | Some("markdown") => "text/markdown",
        Some("csv") => "text/csv",
        Some("html") | Some("htm") => "text/html",
        Some("json") => "application/json",
        Some("rtf") => "application/rtf",
        Some("odt") => "application/vnd.oasis.opendocument.text",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("zip") => "application/zip",
        _ => MIME_OCTET_STREAM,
    }
}

/// A file selected for upload, resolved from the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    /// File name without directories
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub mime: String,
}

impl FileCandidate {
    /// Stat a path and build a candidate from it
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .map_err(|e| Error::file_unreadable(path, e.to_string()))?;

        if !metadata.is_file() {
            return Err(Error::file_unreadable(path, "not a regular file"));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            mime: mime_for_path(path).to_string(),
        })
    }

    /// Check type first, then size. `max_bytes` is inclusive.
    pub fn validate(&self, max_bytes: u64) -> Result<()> {
        if DocumentKind::from_mime(&self.mime).is_none() {
            return Err(Error::unsupported_type(&self.mime));
        }

        if self.size > max_bytes {
            return Err(Error::file_too_large(
                &self.name,
                max_bytes / (1024 * 1024),
            ));
        }

        Ok(())
    }
}

/// `1.50 MB`
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Human-readable list of accepted formats (`PDF, TXT, DOC, DOCX`)
pub fn supported_formats_label() -> String {
    DocumentKind::ALL
        .iter()
        .map(|k| k.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split pasted or typed text into file paths.
///
/// Terminals deliver a drag-and-drop as pasted text: paths separated by
/// whitespace, with spaces either quoted or backslash-escaped, sometimes
/// as `file://` URLs.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_token = false;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_token = true;
            }
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    paths.push(normalize_dropped_path(&current));
                    current.clear();
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        paths.push(normalize_dropped_path(&current));
    }

    paths.retain(|p| !p.as_os_str().is_empty());
    paths
}

fn normalize_dropped_path(raw: &str) -> PathBuf {
    match raw.strip_prefix("file://") {
        Some(rest) => PathBuf::from(percent_decode_str(rest).decode_utf8_lossy().into_owned()),
        None => PathBuf::from(raw),
    }
}
