mod common;

use rand::Rng;
use short_url::application::services::ShortenerService;
use short_url::domain::code_generator::CodeGenerator;
use short_url::infrastructure::persistence::InMemoryShortUrlRepository;
use std::collections::HashSet;
use std::sync::Arc;

/// Draws from a tiny code space so concurrent requests collide often.
struct NarrowCodeGenerator;

impl CodeGenerator for NarrowCodeGenerator {
    fn generate(&self) -> String {
        format!("code{:02}", rand::rng().random_range(0..64))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_creates_never_share_a_code() {
    let repository = InMemoryShortUrlRepository::new();
    let service = Arc::new(ShortenerService::new(
        Arc::new(repository.clone()),
        Arc::new(NarrowCodeGenerator),
        100,
    ));

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .shorten(Some(format!("https://example.com/{i}")))
                    .await
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        let shortened = handle.await.unwrap().unwrap();
        assert!(shortened.is_created());
        assert!(codes.insert(shortened.into_short_url().short_code));
    }

    assert_eq!(codes.len(), 32);
    assert_eq!(repository.len().await, 32);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_creates_of_same_url_yield_one_mapping() {
    let repository = InMemoryShortUrlRepository::new();
    let state = common::create_default_state(repository.clone());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = state.shortener_service.clone();
            tokio::spawn(async move {
                service
                    .shorten(Some("https://same.example".to_string()))
                    .await
            })
        })
        .collect();

    let mut codes = HashSet::new();
    let mut created = 0;
    for handle in handles {
        let shortened = handle.await.unwrap().unwrap();
        if shortened.is_created() {
            created += 1;
        }
        codes.insert(shortened.into_short_url().short_code);
    }

    assert_eq!(created, 1);
    assert_eq!(codes.len(), 1);
    assert_eq!(repository.len().await, 1);
}
