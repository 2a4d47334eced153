//! Input manager for handling uploaded resume files

use crate::error::{MatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;

/// One uploaded file: the name it arrived under plus its raw contents.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

pub struct InputManager {
    cache: HashMap<String, String>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Extract plain text from one uploaded file. Extraction failures come
    /// back as errors; the caller decides whether to drop or surface them.
    pub fn extract_text(&mut self, file: &ResumeFile) -> Result<String> {
        if let Some(cached_text) = self.cache.get(&file.filename) {
            info!("Using cached text for: {}", file.filename);
            return Ok(cached_text.clone());
        }

        let file_type = FileType::from_filename(&file.filename);

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", file.filename);
                PdfExtractor.extract(&file.bytes)?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", file.filename);
                PlainTextExtractor.extract(&file.bytes)?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", file.filename);
                MarkdownExtractor.extract(&file.bytes)?
            }
            FileType::Unknown => {
                return Err(MatcherError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    file.filename
                )));
            }
        };

        self.cache.insert(file.filename.clone(), text.clone());

        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_and_caches_text() {
        let mut manager = InputManager::new();
        let file = ResumeFile::new("resume.txt", b"Jane Doe, Backend Engineer".to_vec());

        let text1 = manager.extract_text(&file).unwrap();
        assert_eq!(manager.cache_size(), 1);

        let text2 = manager.extract_text(&file).unwrap();
        assert_eq!(text1, text2);
        assert_eq!(manager.cache_size(), 1);
    }

    #[test]
    fn test_unsupported_file_type() {
        let mut manager = InputManager::new();
        let file = ResumeFile::new("resume.docx", b"irrelevant".to_vec());

        let result = manager.extract_text(&file);
        assert!(matches!(result, Err(MatcherError::UnsupportedFormat(_))));
    }
}
