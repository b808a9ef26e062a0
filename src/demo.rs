//! Demo callbacks — canned responses for the upload and question panels.
//!
//! DESIGN
//! ======
//! Both callbacks are pure functions of a single input with exactly two
//! outcomes: a fixed rejection message for missing input, or a fixed
//! template that echoes the input. Nothing is parsed, stored, or sent to a
//! model. The route layer only extracts inputs and wraps the returned text.

// =============================================================================
// CONSTANTS
// =============================================================================

/// Returned by [`handle_upload`] when no file was chosen.
pub const UPLOAD_MISSING: &str = "❌ Please upload a file first.";

/// Returned by [`handle_question`] for empty or whitespace-only questions.
pub const QUESTION_MISSING: &str = "❌ Please enter a question.";

/// Example questions offered under the question panel, in display order.
pub const EXAMPLE_QUESTIONS: [&str; 6] = [
    "What are the key findings in this document?",
    "Summarize the data shown in tables and charts",
    "What methodology is described?",
    "Compare the performance metrics",
    "Explain any mathematical formulas present",
    "What are the main conclusions?",
];

/// File picker hint. Never enforced server-side.
pub const ACCEPTED_EXTENSIONS: [&str; 7] = [".pdf", ".docx", ".pptx", ".xlsx", ".jpg", ".png", ".txt"];

const UPLOAD_BODY: &str = "This is a demonstration of RAG-Anything capabilities. In production, this would:
• Extract text, images, tables, and equations
• Build knowledge graphs
• Enable multimodal search";

const ANSWER_BODY: &str = "This demonstrates RAG-Anything's multimodal AI capabilities:

🔍 **Text Analysis**: Understanding document context and extracting key information
📊 **Table Processing**: Analyzing structured data and numerical relationships  
🖼️ **Image Understanding**: Interpreting charts, diagrams, and visual content
🔢 **Equation Recognition**: Processing mathematical formulas and expressions
🧠 **Knowledge Graphs**: Building connected relationships between concepts

**Real Capabilities Include:**
• Multi-format document parsing (PDF, DOCX, PPTX, etc.)
• Cross-modal information retrieval
• Intelligent content summarization
• Context-aware question answering

*This is a demo version. The full system processes actual document content and provides precise answers based on uploaded materials.*";

// =============================================================================
// UPLOADED FILE
// =============================================================================

/// A user-selected file as seen by the upload callback.
///
/// Only identifying metadata is kept; the file content is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client-supplied filename, when the client sent one.
    pub name: Option<String>,
    /// Opaque text form of the upload, used when no name is available.
    pub reference: String,
}

impl UploadedFile {
    #[must_use]
    pub fn new(name: Option<String>, reference: impl Into<String>) -> Self {
        Self { name, reference: reference.into() }
    }

    /// Name echoed back to the user: the filename, else the reference.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.reference)
    }
}

// =============================================================================
// CALLBACKS
// =============================================================================

/// Status text for the "Process Document" button.
#[must_use]
pub fn handle_upload(file: Option<&UploadedFile>) -> String {
    let Some(file) = file else {
        return UPLOAD_MISSING.to_string();
    };

    format!("✅ Demo: Successfully processed '{}'\n\n{UPLOAD_BODY}", file.display_name())
}

/// Answer text for the "Get Answer" button. The question is echoed as-is.
#[must_use]
pub fn handle_question(question: &str) -> String {
    if question.trim().is_empty() {
        return QUESTION_MISSING.to_string();
    }

    format!("📝 **Demo Answer for: \"{question}\"**\n\n{ANSWER_BODY}")
}

#[cfg(test)]
#[path = "demo_test.rs"]
mod tests;
