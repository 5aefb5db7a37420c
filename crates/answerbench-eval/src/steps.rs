/// Remove every occurrence of `final_answer` from each step, then trim.
/// An empty `final_answer` returns the steps unchanged.
pub fn strip_final_answer<S: AsRef<str>>(steps: &[S], final_answer: &str) -> Vec<String> {
    if final_answer.is_empty() {
        return steps.iter().map(|s| s.as_ref().to_string()).collect();
    }
    steps
        .iter()
        .map(|s| s.as_ref().replace(final_answer, "").trim().to_string())
        .collect()
}
