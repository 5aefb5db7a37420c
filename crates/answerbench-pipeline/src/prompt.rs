/// Returned instead of an answer when the referenced document is an image.
pub const IMAGE_NOT_SUPPORTED: &str = "Image files are not supported for text processing.";

/// Extensions (lowercase, without the dot) treated as images.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// `"Context:\n{context}\n\nQuestion: {question}"`, byte for byte.
pub fn assemble_prompt(question: &str, context: &str) -> String {
    format!("Context:\n{context}\n\nQuestion: {question}")
}

/// Whether `reference` ends in one of [`IMAGE_EXTENSIONS`], ignoring case.
pub fn is_image_reference(reference: &str) -> bool {
    let lower = reference.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Context for answering a test case directly from its question.
pub fn question_context(question: &str, extracted_data: Option<&str>) -> String {
    let mut context = format!("Question: {question}\n");
    push_extracted_data(&mut context, extracted_data);
    context
}

/// Context for re-answering a test case from reviewer-edited steps.
pub fn steps_context(test_case: &str, steps: &str, extracted_data: Option<&str>) -> String {
    let mut context = format!("Test Case: {test_case}\nSteps: {steps}\n");
    push_extracted_data(&mut context, extracted_data);
    context
}

fn push_extracted_data(context: &mut String, extracted_data: Option<&str>) {
    if let Some(data) = extracted_data.filter(|d| !d.is_empty()) {
        context.push_str("Extracted Data: ");
        context.push_str(data);
        context.push('\n');
    }
}
