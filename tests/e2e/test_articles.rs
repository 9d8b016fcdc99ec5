use crate::helpers::{doubles::FAKE_AUDIO, TestContext, STORAGE_BASE_URL};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;
use test_context::test_context;

// --- Analyze ---

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_analyze_an_article_via_the_delimiter_path(ctx: &mut TestContext) {
    ctx.generation
        .respond_with("**Tech Giant Stumbles** | **Shares plunged twenty percent in morning trading today.**");

    let response = ctx
        .client
        .post(
            "/api/articles/analyze",
            &json!({ "text": "A long pasted article about a tech company..." }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["headline"], "Tech Giant Stumbles");
    assert_eq!(
        body["script"],
        "Shares plunged twenty percent in morning trading today."
    );
    assert_eq!(body["parse_path"], "delimiter");
    // 8 words at 2.5 words/second, floored
    assert_eq!(body["estimated_duration_seconds"], 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_split_only_on_the_first_delimiter(ctx: &mut TestContext) {
    ctx.generation.respond_with("A | B | C");

    let response = ctx
        .client
        .post("/api/articles/analyze", &json!({ "text": "anything" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["headline"], "A");
    assert_eq!(body["script"], "B | C");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_to_line_parsing_without_a_delimiter(ctx: &mut TestContext) {
    ctx.generation
        .respond_with("Markets Rally Hard\nStocks closed higher.\nTraders cheered.");

    let response = ctx
        .client
        .post("/api/articles/analyze", &json!({ "text": "anything" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["headline"], "Markets Rally Hard");
    assert_eq!(body["script"], "Stocks closed higher. Traders cheered.");
    assert_eq!(body["parse_path"], "lines");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_the_raw_text_on_parse_failure(ctx: &mut TestContext) {
    ctx.generation.respond_with("justonelinenodelimiter");

    let response = ctx
        .client
        .post("/api/articles/analyze", &json!({ "text": "anything" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_error_message("justonelinenodelimiter");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_generation_failures(ctx: &mut TestContext) {
    ctx.generation.fail_with("Generation error: model overloaded");

    let response = ctx
        .client
        .post("/api/articles/analyze", &json!({ "text": "anything" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_error_message("model overloaded");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_article_text(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post("/api/articles/analyze", &json!({ "text": "   " }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("cannot be empty");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_oversized_article_text(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/articles/analyze",
            &json!({ "text": "a".repeat(50_001) }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_analyze_requests(ctx: &mut TestContext) {
    ctx.generation.respond_with("Head | Body text here.");

    let (first, second) = futures::future::join(
        ctx.client
            .post("/api/articles/analyze", &json!({ "text": "article one" })),
        ctx.client
            .post("/api/articles/analyze", &json!({ "text": "article two" })),
    )
    .await;

    first.unwrap().assert_status(StatusCode::OK);
    second.unwrap().assert_status(StatusCode::OK);
}

// --- Publish ---

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_publish_an_article(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/articles/publish",
            &json!({
                "headline": "Markets Rally Hard",
                "script": "Stocks closed sharply higher today after rate cut hopes.",
                "category": "Markets",
                "is_breaking": true
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    let body = response.body.as_ref().unwrap();

    assert_eq!(body["headline"], "Markets Rally Hard");
    assert_eq!(body["category"], "Markets");
    assert_eq!(body["is_breaking"], true);
    assert_eq!(body["is_crisis"], false);

    // Public URL follows the storage convention, with the timestamped filename
    let audio_url = body["audio_url"].as_str().unwrap();
    let expected_prefix = format!(
        "{}/storage/v1/object/public/news-audio/news_",
        STORAGE_BASE_URL
    );
    assert!(
        audio_url.starts_with(&expected_prefix),
        "unexpected audio_url: {}",
        audio_url
    );
    assert!(audio_url.ends_with(".mp3"));

    // 9 words at 2.5 words/second, floored
    assert_eq!(body["duration_seconds"], 3);

    // Exactly one upload, with the audio payload and content type
    let uploads = ctx.storage.uploads.read().clone();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].content_type, "audio/mpeg");
    assert_eq!(uploads[0].size, FAKE_AUDIO.len());
    assert!(uploads[0].path.starts_with("news_"));
    assert!(uploads[0].path.ends_with(".mp3"));

    // The row landed in the database
    assert_eq!(ctx.fixtures.count_articles().await.unwrap(), 1);
    let article = ctx.fixtures.latest_article().await.unwrap().unwrap();
    assert_eq!(article.headline, "Markets Rally Hard");
    assert_eq!(
        article.summary,
        "Stocks closed sharply higher today after rate cut hopes."
    );
    assert_eq!(article.audio_url, audio_url);

    // The staged temporary file was removed after upload
    assert!(ctx.staged_audio_files().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_synthesize_the_submitted_script(ctx: &mut TestContext) {
    let script = "Exactly this text goes to the synthesizer.";
    ctx.client
        .post(
            "/api/articles/publish",
            &json!({
                "headline": "Some Headline",
                "script": script,
                "category": "Global"
            }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::CREATED);

    let synthesized = ctx.tts.synthesized.read().clone();
    assert_eq!(synthesized, vec![script.to_string()]);
}

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_not_insert_a_row_when_synthesis_fails(ctx: &mut TestContext) {
    ctx.tts.fail_with("Provider error: voice unavailable");

    let response = ctx
        .client
        .post(
            "/api/articles/publish",
            &json!({
                "headline": "Doomed Headline",
                "script": "This will never be heard.",
                "category": "Politics"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_error_message("voice unavailable");

    assert_eq!(ctx.fixtures.count_articles().await.unwrap(), 0);
    assert!(ctx.storage.uploads.read().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_clean_up_the_staged_file_when_upload_fails(ctx: &mut TestContext) {
    ctx.storage.fail_with("Storage upload error: 403 - bucket not public");

    let response = ctx
        .client
        .post(
            "/api/articles/publish",
            &json!({
                "headline": "Doomed Headline",
                "script": "This audio never makes it to storage.",
                "category": "Technology"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_error_message("bucket not public");

    // No row, and the temp file is gone despite the failure
    assert_eq!(ctx.fixtures.count_articles().await.unwrap(), 0);
    assert!(ctx.staged_audio_files().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_empty_headline(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/articles/publish",
            &json!({
                "headline": "  ",
                "script": "A script.",
                "category": "Sports"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("Headline cannot be empty");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_empty_script(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/articles/publish",
            &json!({
                "headline": "A Headline",
                "script": "",
                "category": "Sports"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("Script cannot be empty");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_unknown_category(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/articles/publish",
            &json!({
                "headline": "A Headline",
                "script": "A script.",
                "category": "Weather"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_oversized_script(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/api/articles/publish",
            &json!({
                "headline": "A Headline",
                "script": "a".repeat(10_001),
                "category": "Global"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}
