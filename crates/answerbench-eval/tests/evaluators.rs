use answerbench_eval::{ContainsEvaluator, Evaluator, ExactMatchEvaluator};

#[tokio::test]
async fn contains_passes_on_substring_ignoring_case() {
    let evaluator = ContainsEvaluator::new();
    let result = evaluator
        .evaluate("The capital is PARIS, France.", "  paris ", "")
        .await
        .unwrap();
    assert!(result.passed);
    assert_eq!(result.score, 1.0);
    assert!(result.reasoning.is_none());
}

#[tokio::test]
async fn contains_fails_when_absent() {
    let evaluator = ContainsEvaluator::new();
    let result = evaluator.evaluate("Lyon", "Paris", "").await.unwrap();
    assert!(!result.passed);
    assert_eq!(result.score, 0.0);
    assert!(result.reasoning.is_some());
}

#[tokio::test]
async fn contains_rejects_empty_reference() {
    let evaluator = ContainsEvaluator::new();
    let result = evaluator.evaluate("anything", "   ", "").await.unwrap();
    assert!(!result.passed);
}

#[tokio::test]
async fn contains_case_sensitive() {
    let evaluator = ContainsEvaluator::case_sensitive();
    assert!(!evaluator.evaluate("PARIS", "Paris", "").await.unwrap().passed);
    assert!(evaluator.evaluate("in Paris", "Paris", "").await.unwrap().passed);
}

#[tokio::test]
async fn exact_match_passes() {
    let evaluator = ExactMatchEvaluator::new();
    let result = evaluator.evaluate("42", "42", "").await.unwrap();
    assert!(result.passed);
}

#[tokio::test]
async fn exact_match_fails_on_superset() {
    let evaluator = ExactMatchEvaluator::new();
    let result = evaluator.evaluate("It is 42", "42", "").await.unwrap();
    assert!(!result.passed);
    assert!(result.reasoning.is_some());
}

#[tokio::test]
async fn exact_match_case_insensitive() {
    let evaluator = ExactMatchEvaluator::case_insensitive();
    assert!(evaluator.evaluate("Hello", "hello", "").await.unwrap().passed);
}

#[tokio::test]
async fn evaluators_are_swappable_behind_trait_object() {
    let evaluators: Vec<Box<dyn Evaluator>> = vec![
        Box::new(ContainsEvaluator::new()),
        Box::new(ExactMatchEvaluator::new()),
    ];
    let mut passed = Vec::new();
    for evaluator in &evaluators {
        passed.push(evaluator.evaluate("answer: 7", "7", "").await.unwrap().passed);
    }
    assert_eq!(passed, vec![true, false]);
}
