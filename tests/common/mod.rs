#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use short_url::application::services::{DEFAULT_MAX_ATTEMPTS, ShortenerService};
use short_url::domain::code_generator::CodeGenerator;
use short_url::domain::entities::NewShortUrl;
use short_url::domain::repositories::ShortUrlRepository;
use short_url::infrastructure::persistence::InMemoryShortUrlRepository;
use short_url::routes::app_router;
use short_url::state::AppState;
use short_url::utils::code_generator::RandomCodeGenerator;

/// Hands out a fixed list of codes, repeating the last one forever.
pub struct ScriptedCodeGenerator {
    codes: Vec<String>,
    next: AtomicUsize,
}

impl ScriptedCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

impl CodeGenerator for ScriptedCodeGenerator {
    fn generate(&self) -> String {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.codes[i.min(self.codes.len() - 1)].clone()
    }
}

pub fn create_test_state(
    repository: InMemoryShortUrlRepository,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
) -> AppState {
    let service = ShortenerService::new(Arc::new(repository), generator, max_attempts);
    AppState::new(Arc::new(service))
}

pub fn create_default_state(repository: InMemoryShortUrlRepository) -> AppState {
    create_test_state(
        repository,
        Arc::new(RandomCodeGenerator::default()),
        DEFAULT_MAX_ATTEMPTS,
    )
}

/// Serves the full application router, including path normalization.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new().fallback_service(app_router(state));
    TestServer::new(app).unwrap()
}

pub async fn create_test_mapping(
    repository: &InMemoryShortUrlRepository,
    long_url: &str,
    short_code: &str,
) -> i64 {
    repository
        .insert(NewShortUrl::new(long_url, short_code))
        .await
        .unwrap()
        .id
}
