//! The CV being checked: pasted text or an uploaded PDF.
//!
//! PDFs are never parsed here. The bytes are checked for the PDF magic and
//! forwarded to the model as inline data.

use base64::Engine as _;
use bytes::Bytes;

use crate::checker::prompts::CV_TEXT_PREFIX;
use crate::errors::AppError;
use crate::llm_client::Part;

pub const PDF_MIME_TYPE: &str = "application/pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";

pub const INVALID_PDF_MESSAGE: &str = "Please upload a valid PDF file.";
pub const MISSING_PDF_MESSAGE: &str = "Please upload a PDF CV.";
pub const MISSING_TEXT_MESSAGE: &str = "Please paste your CV text.";

#[derive(Debug, Clone, PartialEq)]
pub struct CvFile {
    mime_type: String,
    bytes: Bytes,
}

impl CvFile {
    /// Accepts `bytes` only if they are a non-empty PDF.
    ///
    /// A missing or generic MIME type (`application/octet-stream`) is allowed
    /// when the bytes carry the PDF magic; any other declared type is rejected.
    pub fn pdf(mime_type: Option<&str>, bytes: Bytes) -> Result<Self, AppError> {
        if bytes.is_empty() {
            return Err(AppError::Validation(MISSING_PDF_MESSAGE.to_string()));
        }

        let declared = mime_type
            .map(|m| m.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
            .filter(|m| !m.is_empty());
        let declared_ok = match declared.as_deref() {
            None | Some("application/octet-stream") => true,
            Some(m) => m == PDF_MIME_TYPE,
        };

        if !declared_ok || !bytes.starts_with(PDF_MAGIC) {
            return Err(AppError::UnsupportedMediaType(
                INVALID_PDF_MESSAGE.to_string(),
            ));
        }

        Ok(Self {
            mime_type: PDF_MIME_TYPE.to_string(),
            bytes,
        })
    }

    /// Decodes a base64 payload as produced by a browser `FileReader`.
    /// A leading `data:<mime>;base64,` prefix is stripped.
    pub fn from_base64(data: &str, mime_type: Option<&str>) -> Result<Self, AppError> {
        let (url_mime, payload) = split_data_url(data.trim());
        let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.as_bytes())
            .map_err(|_| AppError::UnsupportedMediaType(INVALID_PDF_MESSAGE.to_string()))?;

        Self::pdf(mime_type.or(url_mime), Bytes::from(bytes))
    }
}

#[cfg(test)]
impl CvFile {
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Splits `data:<mime>;base64,<payload>` into its MIME type and payload.
fn split_data_url(data: &str) -> (Option<&str>, &str) {
    let Some(rest) = data.strip_prefix("data:") else {
        return (None, data);
    };
    match rest.split_once(',') {
        Some((header, payload)) => {
            let mime = header.split(';').next().filter(|m| !m.is_empty());
            (mime, payload)
        }
        None => (None, data),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CvInput {
    Text(String),
    File(CvFile),
}

impl CvInput {
    /// Picks the CV source. A file wins over text when both are present.
    pub fn resolve(text: Option<String>, file: Option<CvFile>) -> Result<Self, AppError> {
        if let Some(file) = file {
            return Ok(CvInput::File(file));
        }
        match text {
            Some(text) if !text.trim().is_empty() => Ok(CvInput::Text(text.trim().to_string())),
            _ => Err(AppError::Validation(MISSING_TEXT_MESSAGE.to_string())),
        }
    }

    /// The request part that carries this CV to the model.
    pub fn to_part(&self) -> Part {
        match self {
            CvInput::Text(text) => Part::text(format!("{CV_TEXT_PREFIX}{text}")),
            CvInput::File(file) => Part::inline_data(file.mime_type.clone(), &file.bytes),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CvInput::Text(_) => "text",
            CvInput::File(_) => "pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::InlineData;

    const TINY_PDF: &[u8] = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n1 0 obj\n<<>>\nendobj\n%%EOF";

    fn tiny_pdf_base64() -> String {
        base64::engine::general_purpose::STANDARD.encode(TINY_PDF)
    }

    #[test]
    fn test_pdf_accepts_declared_pdf() {
        let file = CvFile::pdf(Some("application/pdf"), Bytes::from_static(TINY_PDF)).unwrap();
        assert_eq!(file.mime_type(), PDF_MIME_TYPE);
        assert_eq!(file.byte_len(), TINY_PDF.len());
    }

    #[test]
    fn test_pdf_accepts_octet_stream_with_magic() {
        assert!(CvFile::pdf(
            Some("application/octet-stream"),
            Bytes::from_static(TINY_PDF)
        )
        .is_ok());
        assert!(CvFile::pdf(None, Bytes::from_static(TINY_PDF)).is_ok());
    }

    #[test]
    fn test_pdf_rejects_other_mime_type() {
        let err = CvFile::pdf(Some("image/png"), Bytes::from_static(TINY_PDF)).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(m) if m == INVALID_PDF_MESSAGE));
    }

    #[test]
    fn test_pdf_rejects_bytes_without_magic() {
        let err = CvFile::pdf(Some("application/pdf"), Bytes::from_static(b"hello"))
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_pdf_rejects_empty_file() {
        let err = CvFile::pdf(Some("application/pdf"), Bytes::new()).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m == MISSING_PDF_MESSAGE));
    }

    #[test]
    fn test_from_base64_strips_data_url_prefix() {
        let data = format!("data:application/pdf;base64,{}", tiny_pdf_base64());
        let file = CvFile::from_base64(&data, None).unwrap();
        assert_eq!(file.byte_len(), TINY_PDF.len());
    }

    #[test]
    fn test_from_base64_data_url_mime_is_checked() {
        let data = format!("data:text/plain;base64,{}", tiny_pdf_base64());
        assert!(CvFile::from_base64(&data, None).is_err());
    }

    #[test]
    fn test_from_base64_rejects_garbage() {
        let err = CvFile::from_base64("not base64 !!", Some("application/pdf")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_resolve_prefers_file_over_text() {
        let file = CvFile::pdf(None, Bytes::from_static(TINY_PDF)).unwrap();
        let input = CvInput::resolve(Some("pasted".into()), Some(file)).unwrap();
        assert_eq!(input.kind(), "pdf");
    }

    #[test]
    fn test_resolve_blank_text_without_file_fails() {
        let err = CvInput::resolve(Some("  \n".into()), None).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m == MISSING_TEXT_MESSAGE));
        assert!(CvInput::resolve(None, None).is_err());
    }

    #[test]
    fn test_text_part_is_prefixed() {
        let input = CvInput::resolve(Some(" Jane Doe, Go developer ".into()), None).unwrap();
        assert_eq!(input.to_part(), Part::text("CV Text: Jane Doe, Go developer"));
    }

    #[test]
    fn test_file_part_is_inline_base64() {
        let file = CvFile::pdf(Some("application/pdf"), Bytes::from_static(TINY_PDF)).unwrap();
        assert_eq!(
            CvInput::File(file).to_part(),
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: PDF_MIME_TYPE.to_string(),
                    data: tiny_pdf_base64(),
                }
            }
        );
    }
}
