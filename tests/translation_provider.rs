//! GoogleTranslator against a local mock provider.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use faq_service::config::TranslationConfig;
use faq_service::translation::{GoogleTranslator, TranslateError, Translator};

mod common;

fn translator_for(addr: std::net::SocketAddr, timeout_secs: u64) -> GoogleTranslator {
    GoogleTranslator::new(&TranslationConfig {
        endpoint: format!("http://{addr}"),
        timeout_secs,
    })
    .unwrap()
}

#[tokio::test]
async fn test_translates_and_sends_query() {
    let seen = Arc::new(std::sync::Mutex::new(String::new()));
    let s = seen.clone();
    let addr = common::start_programmable_backend(move |head| {
        let s = s.clone();
        async move {
            *s.lock().unwrap() = head;
            (200, r#"[[["Bonjour ","Hello ",null,null,10],["le monde","world",null,null,10]],null,"en"]"#.to_string())
        }
    })
    .await;

    let translator = translator_for(addr, 5);
    let text = translator.translate("Hello world", "fr").await.unwrap();
    assert_eq!(text, "Bonjour le monde");

    let head = seen.lock().unwrap().clone();
    let request_line = head.lines().next().unwrap();
    assert!(request_line.starts_with("GET /translate_a/single?"), "{request_line}");
    assert!(request_line.contains("client=gtx"));
    assert!(request_line.contains("tl=fr"));
    assert!(request_line.contains("q=Hello+world"));
}

#[tokio::test]
async fn test_provider_error_status_is_single_attempt() {
    let calls = Arc::new(AtomicU32::new(0));
    let c = calls.clone();
    let addr = common::start_programmable_backend(move |_| {
        let c = c.clone();
        async move {
            c.fetch_add(1, Ordering::SeqCst);
            (503, "{}".to_string())
        }
    })
    .await;

    let translator = translator_for(addr, 5);
    let err = translator.translate("hi", "de").await.unwrap_err();
    assert_eq!(
        err,
        TranslateError::Failed("provider returned status 503 Service Unavailable".into())
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1, "must not retry");
}

#[tokio::test]
async fn test_unexpected_body_shape() {
    let addr = common::start_programmable_backend(|_| async { (200, r#"{"nope":true}"#.to_string()) }).await;

    let err = translator_for(addr, 5).translate("hi", "de").await.unwrap_err();
    assert!(matches!(err, TranslateError::Failed(_)));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let addr = common::start_programmable_backend(|_| async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        (200, "[[]]".to_string())
    })
    .await;

    let err = translator_for(addr, 1).translate("hi", "de").await.unwrap_err();
    assert_eq!(
        err,
        TranslateError::Failed("request timed out after 1 seconds".into())
    );
}

#[tokio::test]
async fn test_unreachable_provider() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = translator_for(addr, 2).translate("hi", "de").await.unwrap_err();
    assert!(matches!(err, TranslateError::Failed(_)));
}

#[tokio::test]
async fn test_checked_translation_rejects_unknown_code() {
    let addr = common::start_programmable_backend(|_| async { (200, "[[]]".to_string()) }).await;

    let err = translator_for(addr, 2)
        .translate_checked("hello", "xx")
        .await
        .unwrap_err();
    assert_eq!(err, TranslateError::UnsupportedLanguage("xx".into()));
}
