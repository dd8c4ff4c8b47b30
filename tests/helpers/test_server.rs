// Test Server Helpers
//
// Builds the full application over an in-memory store, either for in-process
// calls through actix_web::test or as a real listener through actix-test.

use actix_web::App;
use gst_ledger::modules::taxes::GstCalculator;
use gst_ledger::startup::{configure_app, Services};
use gst_ledger::storage::{InMemoryStore, Repositories};

pub use actix_test::TestServer;

/// Services over the given store, so tests can seed it directly
pub fn services_over(store: &InMemoryStore) -> Services {
    Services::new(
        Repositories::in_memory(store.clone()),
        GstCalculator::default(),
    )
}

/// Spawn a real HTTP server on a random port
///
/// The server stops when the returned `TestServer` drops.
///
/// # Example
/// ```no_run
/// #[actix_web::test]
/// async fn test_health_endpoint() {
///     let srv = spawn_test_server(InMemoryStore::new());
///     let response = srv.get("/health").send().await.unwrap();
///     assert_eq!(response.status(), 200);
/// }
/// ```
pub fn spawn_test_server(store: InMemoryStore) -> TestServer {
    let services = services_over(&store);

    actix_test::start(move || App::new().configure(|cfg| configure_app(cfg, &services)))
}
