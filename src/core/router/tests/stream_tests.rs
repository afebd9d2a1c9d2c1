//! Streaming path tests

use futures::StreamExt;

use super::router_tests::{test_request, MockAdapter};
use crate::core::router::breaker::CircuitState;
use crate::core::router::router::Router;
use crate::core::types::RoutingContext;
use crate::utils::error::GatewayError;

#[tokio::test]
async fn test_stream_yields_chunks_unchanged() {
    let router = Router::default();
    router.register_adapter(MockAdapter::new("openai"));

    let mut request = test_request();
    let mut stream = router
        .stream(&mut request, &RoutingContext::new())
        .await
        .unwrap();

    let mut content = String::new();
    let mut saw_done = false;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.unwrap();
        content.push_str(&chunk.content);
        saw_done = chunk.done;
    }
    assert_eq!(content, "hello");
    assert!(saw_done);
}

#[tokio::test]
async fn test_stream_defaults_model_like_complete() {
    let router = Router::default();
    router.register_adapter(MockAdapter::new("openai"));

    let mut request = test_request();
    router
        .stream(&mut request, &RoutingContext::new())
        .await
        .unwrap();
    assert_eq!(request.model.as_deref(), Some("gpt-4o-mini"));
}

#[tokio::test]
async fn test_stream_bypasses_open_breaker() {
    let router = Router::default();
    let adapter = MockAdapter::failing("openai");
    router.register_adapter(adapter.clone());

    // Open the breaker through the completion path.
    let context = RoutingContext::new();
    for _ in 0..5 {
        let mut request = test_request();
        let _ = router.complete(&mut request, &context).await;
    }
    assert_eq!(
        router.breaker_snapshot("openai").unwrap().state,
        CircuitState::Open
    );

    // Streaming still dispatches normally.
    let mut request = test_request();
    let mut stream = router.stream(&mut request, &context).await.unwrap();
    while let Some(chunk) = stream.next().await {
        chunk.unwrap();
    }
    assert_eq!(adapter.streams(), 1);

    // And the breaker table is untouched in both directions.
    let snapshot = router.breaker_snapshot("openai").unwrap();
    assert_eq!(snapshot.state, CircuitState::Open);
    assert_eq!(snapshot.failures, 5);
}

#[tokio::test]
async fn test_stream_selection_failure_before_any_chunk() {
    let router = Router::default();
    let mut request = test_request();
    let result = router.stream(&mut request, &RoutingContext::new()).await;
    assert!(matches!(
        result.err(),
        Some(GatewayError::NoSuitableAdapter(_))
    ));
}
