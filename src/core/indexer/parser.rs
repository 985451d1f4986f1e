//! Structural parser for heading-delimited note files.
//!
//! A line starting with the heading marker opens a new document; every
//! following non-empty line up to the next heading is its body. Empty
//! lines are dropped from the body without ending it.

use crate::core::error::{Result, TadpoleError};
use crate::core::types::Document;

/// Splits note files into documents
#[derive(Debug, Clone, Copy)]
pub struct NoteParser {
    marker: char,
}

impl Default for NoteParser {
    fn default() -> Self {
        Self::new('*')
    }
}

impl NoteParser {
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    fn is_heading(&self, line: &str) -> bool {
        line.starts_with(self.marker)
    }

    /// Parse one file's text into documents, in file order
    ///
    /// The text must open with a heading. Any line before the first
    /// heading, blank or not, fails with `TadpoleError::Parse` carrying
    /// its 1-based line number. Inside a body only empty lines are
    /// dropped; whitespace-only lines are kept as content.
    pub fn parse_file_content(&self, text: &str, path: &str) -> Result<Vec<Document>> {
        let mut docs = Vec::new();
        let mut current: Option<(Document, Vec<&str>)> = None;

        for (idx, line) in text.lines().enumerate() {
            let line_num = idx + 1;

            if self.is_heading(line) {
                if let Some((doc, body)) = current.take() {
                    docs.push(finish(doc, &body));
                }
                current = Some((
                    Document {
                        title: line.to_string(),
                        content: String::new(),
                        source_path: path.to_string(),
                        start_line: line_num,
                    },
                    Vec::new(),
                ));
                continue;
            }

            match current.as_mut() {
                Some(_) if line.is_empty() => {}
                Some((_, body)) => body.push(line),
                None => {
                    return Err(TadpoleError::Parse {
                        path: path.to_string(),
                        line: line_num,
                        content: line.to_string(),
                    })
                }
            }
        }

        if let Some((doc, body)) = current {
            docs.push(finish(doc, &body));
        }

        Ok(docs)
    }
}

fn finish(mut doc: Document, body: &[&str]) -> Document {
    doc.content = body.join("\n");
    doc
}
