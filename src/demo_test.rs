use super::*;

// =============================================================================
// handle_upload
// =============================================================================

#[test]
fn upload_none_is_rejected() {
    assert_eq!(handle_upload(None), "❌ Please upload a file first.");
}

#[test]
fn upload_echoes_display_name() {
    let file = UploadedFile::new(Some("report.pdf".into()), "file");
    let out = handle_upload(Some(&file));
    assert!(out.starts_with("✅ Demo: Successfully processed 'report.pdf'"));
    assert!(out.contains("• Build knowledge graphs"));
}

#[test]
fn upload_falls_back_to_reference_without_name() {
    let file = UploadedFile::new(None, "upload-0");
    assert_eq!(file.display_name(), "upload-0");
    assert!(handle_upload(Some(&file)).contains("'upload-0'"));
}

#[test]
fn upload_keeps_unusual_names_verbatim() {
    for name in ["my report (final).docx", "数据.xlsx", "no_extension", "a'b.txt"] {
        let file = UploadedFile::new(Some(name.into()), "file");
        assert!(handle_upload(Some(&file)).contains(name), "missing {name:?}");
    }
}

#[test]
fn upload_template_has_blank_line_after_header() {
    let file = UploadedFile::new(Some("x.png".into()), "file");
    let out = handle_upload(Some(&file));
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("✅ Demo: Successfully processed 'x.png'"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(out.lines().count(), 6);
}

// =============================================================================
// handle_question
// =============================================================================

#[test]
fn question_empty_is_rejected() {
    assert_eq!(handle_question(""), "❌ Please enter a question.");
}

#[test]
fn question_whitespace_is_rejected() {
    for q in ["   ", "\n", "\t \r\n", "\u{3000}"] {
        assert_eq!(handle_question(q), QUESTION_MISSING, "expected rejection for {q:?}");
    }
}

#[test]
fn question_is_echoed_in_header() {
    let out = handle_question("What are the key findings?");
    assert!(out.contains("Demo Answer for: \"What are the key findings?\""));
    assert!(out.starts_with("📝 **Demo Answer for:"));
}

#[test]
fn question_is_echoed_untrimmed() {
    let out = handle_question("  padded  ");
    assert!(out.contains("Demo Answer for: \"  padded  \""));
}

#[test]
fn answer_ends_with_demo_disclaimer() {
    let out = handle_question("anything");
    assert!(out.ends_with("based on uploaded materials.*"));
    assert!(out.contains("**Real Capabilities Include:**"));
}

#[test]
fn every_example_question_is_answered() {
    for q in EXAMPLE_QUESTIONS {
        assert!(handle_question(q).contains(q));
    }
}

// =============================================================================
// constants
// =============================================================================

#[test]
fn accepted_extensions_are_dotted_lowercase() {
    for ext in ACCEPTED_EXTENSIONS {
        assert!(ext.starts_with('.'));
        assert_eq!(ext, ext.to_ascii_lowercase());
    }
}
