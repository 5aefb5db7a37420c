use std::sync::Arc;

use answerbench_blob::InMemoryBlobStore;
use answerbench_core::{AnswerbenchError, ChatResponse, Message};
use answerbench_models::ScriptedChatModel;
use answerbench_pipeline::{
    assemble_prompt, AnswerPipeline, GenerationParams, PromptRequest, IMAGE_NOT_SUPPORTED,
};
use answerbench_tokenizers::{FixedTokenCounter, TiktokenCounter};

fn make_response(text: &str) -> ChatResponse {
    ChatResponse {
        message: Message::ai(text),
        usage: None,
    }
}

struct Harness {
    model: ScriptedChatModel,
    tokenizer: Arc<FixedTokenCounter>,
    blobs: Arc<InMemoryBlobStore>,
    pipeline: AnswerPipeline,
}

fn harness(responses: Vec<&str>, tokens: usize, blobs: InMemoryBlobStore) -> Harness {
    let model = ScriptedChatModel::new(responses.into_iter().map(make_response).collect());
    let tokenizer = Arc::new(FixedTokenCounter::new(tokens));
    let blobs = Arc::new(blobs);
    let pipeline = AnswerPipeline::new(
        Arc::new(model.clone()),
        tokenizer.clone(),
        blobs.clone(),
    );
    Harness {
        model,
        tokenizer,
        blobs,
        pipeline,
    }
}

#[test]
fn prompt_layout_is_byte_exact() {
    assert_eq!(
        assemble_prompt("Is it sunny?", "Weather"),
        "Context:\nWeather\n\nQuestion: Is it sunny?"
    );
}

#[tokio::test]
async fn identical_requests_call_the_model_once() {
    let mut h = harness(vec!["It is sunny."], 10, InMemoryBlobStore::new());
    let request = PromptRequest::new("Is it sunny?", "Weather");

    let first = h.pipeline.generate_answer(&request).await.unwrap();
    let second = h.pipeline.generate_answer(&request).await.unwrap();

    assert_eq!(first, "It is sunny.");
    assert_eq!(second, first);
    assert_eq!(h.model.call_count().await, 1);
}

#[tokio::test]
async fn model_receives_system_instruction_prompt_and_parameters() {
    let mut h = harness(vec!["ok"], 10, InMemoryBlobStore::new());
    let request = PromptRequest::new("Is it sunny?", "Weather")
        .with_temperature(0.9)
        .with_max_tokens(64)
        .with_top_p(0.5);

    h.pipeline.generate_answer(&request).await.unwrap();

    let seen = h.model.requests().await;
    assert_eq!(seen.len(), 1);
    let chat = &seen[0];
    assert_eq!(chat.messages.len(), 2);
    assert!(chat.messages[0].is_system());
    assert_eq!(chat.messages[0].content(), "You are a helpful assistant.");
    assert!(chat.messages[1].is_human());
    assert_eq!(
        chat.messages[1].content(),
        "Context:\nWeather\n\nQuestion: Is it sunny?"
    );
    assert_eq!(chat.temperature, Some(0.9));
    assert_eq!(chat.max_tokens, Some(64));
    assert_eq!(chat.top_p, Some(0.5));
}

#[tokio::test]
async fn default_parameters_are_forwarded() {
    let mut h = harness(vec!["ok"], 10, InMemoryBlobStore::new());
    h.pipeline
        .generate_answer(&PromptRequest::new("q", "c"))
        .await
        .unwrap();

    let defaults = GenerationParams::default();
    let chat = &h.model.requests().await[0];
    assert_eq!(chat.temperature, Some(defaults.temperature));
    assert_eq!(chat.max_tokens, Some(defaults.max_tokens));
    assert_eq!(chat.top_p, Some(defaults.top_p));
    assert_eq!(defaults.temperature, 0.2);
    assert_eq!(defaults.max_tokens, 150);
    assert_eq!(defaults.top_p, 0.3);
}

#[tokio::test]
async fn cache_hit_ignores_generation_parameters() {
    let mut h = harness(vec!["first"], 10, InMemoryBlobStore::new());

    let cold = PromptRequest::new("q", "c").with_temperature(0.0);
    let warm = PromptRequest::new("q", "c").with_temperature(1.0).with_max_tokens(5);

    assert_eq!(h.pipeline.generate_answer(&cold).await.unwrap(), "first");
    assert_eq!(h.pipeline.generate_answer(&warm).await.unwrap(), "first");
    assert_eq!(h.model.call_count().await, 1);
}

#[tokio::test]
async fn answer_is_trimmed_before_caching() {
    let mut h = harness(vec!["  \n Paris \n"], 10, InMemoryBlobStore::new());
    let request = PromptRequest::new("Capital of France?", "");

    let answer = h.pipeline.generate_answer(&request).await.unwrap();
    assert_eq!(answer, "Paris");

    let prompt = assemble_prompt("Capital of France?", "");
    assert_eq!(h.pipeline.cache().get(&prompt).as_deref(), Some("Paris"));
}

#[tokio::test]
async fn token_limit_is_inclusive() {
    let mut h = harness(vec!["fits"], 8192, InMemoryBlobStore::new());
    let answer = h
        .pipeline
        .generate_answer(&PromptRequest::new("q", "c"))
        .await
        .unwrap();
    assert_eq!(answer, "fits");
}

#[tokio::test]
async fn oversized_prompt_is_rejected_before_cache_and_model() {
    let mut h = harness(vec!["never"], 8193, InMemoryBlobStore::new());

    let err = h
        .pipeline
        .generate_answer(&PromptRequest::new("q", "c"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AnswerbenchError::PromptTooLarge {
            tokens: 8193,
            limit: 8192
        }
    ));
    assert_eq!(h.model.call_count().await, 0);
    assert!(h.pipeline.cache().is_empty());
}

#[tokio::test]
async fn oversized_prompt_is_rejected_even_when_cached() {
    let mut h = harness(vec!["cached"], 100, InMemoryBlobStore::new());
    let request = PromptRequest::new("q", "c");
    h.pipeline.generate_answer(&request).await.unwrap();

    let mut tight = h.pipeline.with_token_limit(99);
    let err = tight.generate_answer(&request).await.unwrap_err();
    assert!(matches!(err, AnswerbenchError::PromptTooLarge { .. }));
}

#[tokio::test]
async fn image_documents_short_circuit() {
    for reference in [
        "bucket/figure.png",
        "bucket/PHOTO.JPG",
        "bucket/scan.jpeg",
        "bucket/anim.gif",
    ] {
        let blobs = InMemoryBlobStore::new().with_blob(reference, "binary");
        let mut h = harness(vec!["never"], 10, blobs);
        let request = PromptRequest::new("What is shown?", "ctx").with_document(reference);

        let answer = h.pipeline.generate_answer(&request).await.unwrap();

        assert_eq!(answer, IMAGE_NOT_SUPPORTED, "{reference}");
        assert_eq!(h.blobs.fetches(), 0);
        assert_eq!(h.tokenizer.calls(), 0);
        assert_eq!(h.model.call_count().await, 0);
        assert!(h.pipeline.cache().is_empty());
    }
}

#[tokio::test]
async fn document_text_is_prepended_to_context() {
    let blobs = InMemoryBlobStore::new().with_blob("bench/notes.txt", "The sky is clear.");
    let mut h = harness(vec!["Yes"], 10, blobs);
    let request = PromptRequest::new("Is it sunny?", "Weather").with_document("bench/notes.txt");

    h.pipeline.generate_answer(&request).await.unwrap();

    let chat = &h.model.requests().await[0];
    assert_eq!(
        chat.messages[1].content(),
        "Context:\nThe sky is clear.\nWeather\n\nQuestion: Is it sunny?"
    );
    assert_eq!(h.blobs.fetches(), 1);
}

#[tokio::test]
async fn empty_document_reference_means_no_document() {
    let mut h = harness(vec!["answer"], 10, InMemoryBlobStore::new());
    let request = PromptRequest::new("q", "c").with_document("");

    let answer = h.pipeline.generate_answer(&request).await.unwrap();

    assert_eq!(answer, "answer");
    assert_eq!(h.blobs.fetches(), 0);
    assert_eq!(
        h.model.requests().await[0].messages[1].content(),
        "Context:\nc\n\nQuestion: q"
    );
}

#[tokio::test]
async fn missing_document_is_fetch_error() {
    let mut h = harness(vec!["never"], 10, InMemoryBlobStore::new());
    let request = PromptRequest::new("q", "c").with_document("bench/missing.txt");

    let err = h.pipeline.generate_answer(&request).await.unwrap_err();

    assert!(matches!(err, AnswerbenchError::Fetch(_)));
    assert_eq!(h.tokenizer.calls(), 0);
    assert_eq!(h.model.call_count().await, 0);
    assert!(h.pipeline.cache().is_empty());
}

#[tokio::test]
async fn tokenizer_failure_is_token_count_error() {
    let model = ScriptedChatModel::new(vec![make_response("never")]);
    let mut pipeline = AnswerPipeline::new(
        Arc::new(model.clone()),
        Arc::new(FixedTokenCounter::failing()),
        Arc::new(InMemoryBlobStore::new()),
    );

    let err = pipeline
        .generate_answer(&PromptRequest::new("q", "c"))
        .await
        .unwrap_err();

    assert!(matches!(err, AnswerbenchError::TokenCount(_)));
    assert_eq!(model.call_count().await, 0);
}

#[tokio::test]
async fn model_failure_is_generation_error_and_not_cached() {
    let mut h = harness(vec![], 10, InMemoryBlobStore::new());

    let err = h
        .pipeline
        .generate_answer(&PromptRequest::new("q", "c"))
        .await
        .unwrap_err();

    assert!(matches!(err, AnswerbenchError::Generation(msg) if msg.contains("exhausted")));
    assert!(h.pipeline.cache().is_empty());
}

#[tokio::test]
async fn blank_answer_is_generation_error() {
    let mut h = harness(vec!["   "], 10, InMemoryBlobStore::new());

    let err = h
        .pipeline
        .generate_answer(&PromptRequest::new("q", "c"))
        .await
        .unwrap_err();

    assert!(matches!(err, AnswerbenchError::Generation(_)));
    assert!(h.pipeline.cache().is_empty());
}

#[tokio::test]
async fn evicted_prompts_are_generated_again() {
    let model = ScriptedChatModel::new(vec![
        make_response("a1"),
        make_response("b1"),
        make_response("a2"),
    ]);
    let mut pipeline = AnswerPipeline::new(
        Arc::new(model.clone()),
        Arc::new(FixedTokenCounter::new(1)),
        Arc::new(InMemoryBlobStore::new()),
    )
    .with_cache_capacity(1);

    let a = PromptRequest::new("a", "ctx");
    let b = PromptRequest::new("b", "ctx");

    assert_eq!(pipeline.generate_answer(&a).await.unwrap(), "a1");
    assert_eq!(pipeline.generate_answer(&b).await.unwrap(), "b1");
    assert_eq!(pipeline.generate_answer(&a).await.unwrap(), "a2");
    assert_eq!(model.call_count().await, 3);
    assert_eq!(pipeline.cache().len(), 1);
}

#[tokio::test]
async fn custom_system_prompt_is_used() {
    let model = ScriptedChatModel::new(vec![make_response("ok")]);
    let mut pipeline = AnswerPipeline::new(
        Arc::new(model.clone()),
        Arc::new(FixedTokenCounter::new(1)),
        Arc::new(InMemoryBlobStore::new()),
    )
    .with_system_prompt("Answer tersely.");

    pipeline
        .generate_answer(&PromptRequest::new("q", "c"))
        .await
        .unwrap();

    assert_eq!(model.requests().await[0].messages[0].content(), "Answer tersely.");
}

#[tokio::test]
async fn works_with_real_cl100k_tokenizer() {
    let model = ScriptedChatModel::new(vec![make_response("Sunny.")]);
    let mut pipeline = AnswerPipeline::new(
        Arc::new(model),
        Arc::new(TiktokenCounter::new()),
        Arc::new(InMemoryBlobStore::new()),
    );

    let answer = pipeline
        .generate_answer(&PromptRequest::new("Is it sunny?", "Weather"))
        .await
        .unwrap();
    assert_eq!(answer, "Sunny.");
}

#[tokio::test]
async fn unsupported_encoding_surfaces_as_token_count_error() {
    let model = ScriptedChatModel::new(vec![make_response("never")]);
    let mut pipeline = AnswerPipeline::new(
        Arc::new(model),
        Arc::new(TiktokenCounter::new()),
        Arc::new(InMemoryBlobStore::new()),
    )
    .with_encoding("made_up_base");

    let err = pipeline
        .generate_answer(&PromptRequest::new("q", "c"))
        .await
        .unwrap_err();
    assert!(matches!(err, AnswerbenchError::TokenCount(_)));
}
