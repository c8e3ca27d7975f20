//! Per-scenario test context.
//!
//! Every scenario gets its own disposable database file, its own listener on
//! an OS-assigned port, and a direct repository handle for storage-level
//! verification. Nothing is shared between scenarios, so a failing scenario
//! cannot leak state into the next one: the database file lives in a temp
//! dir removed on drop, and the runtime tears the server task down with it.

use std::sync::Once;

use actix_web::dev::ServerHandle;
use sea_orm::DbConn;
use tempfile::TempDir;

use api_server::Application;
use api_server::config::AppConfig;
use api_server::telemetry::{TelemetryConfig, init_telemetry};
use quill_core::domain::Post;
use quill_core::ports::PostRepository;
use quill_infra::fixtures;
use quill_infra::{DatabaseConfig, SeaOrmPostRepository, connect, ensure_schema};

static TRACING: Once = Once::new();

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    /// Independent storage handle - verification reads go through this, not
    /// through the API.
    pub posts: SeaOrmPostRepository,
    pub db: DbConn,
    /// The fixture records as persisted, with their assigned ids, in order.
    pub seeded: Vec<Post>,
    server: ServerHandle,
    _data_dir: TempDir,
}

impl TestApp {
    /// Start a scenario context: fresh database, bound listener, seeded
    /// fixtures. Returns once the listener accepts connections and all
    /// seed inserts are durable.
    pub async fn spawn() -> TestApp {
        TRACING.call_once(|| {
            if std::env::var("TEST_LOG").is_ok() {
                init_telemetry(&TelemetryConfig::default());
            }
        });

        let data_dir = TempDir::new().expect("lifecycle: failed to create scenario data dir");
        let db_path = data_dir.path().join("quill-test.db");
        let database = DatabaseConfig::new(format!("sqlite://{}?mode=rwc", db_path.display()));

        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: database.clone(),
        };

        let app = Application::build(&config)
            .await
            .expect("lifecycle: failed to bind the HTTP listener");
        let address = format!("http://127.0.0.1:{}", app.port());
        let server = app.handle();
        tokio::spawn(app.run_until_stopped());

        // Two independent storage connections: one for the repository used
        // in verification reads, one for schema-level operations.
        let db = connect(&database)
            .await
            .expect("lifecycle: failed to connect to the scenario database");
        let posts = SeaOrmPostRepository::new(
            connect(&database)
                .await
                .expect("lifecycle: failed to connect to the scenario database"),
        );

        let mut app = TestApp {
            address,
            client: reqwest::Client::new(),
            posts,
            db,
            seeded: Vec::new(),
            server,
            _data_dir: data_dir,
        };
        app.seed().await;
        app
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Insert the full fixture set, recording the assigned ids. Completes
    /// before the scenario's first request is issued.
    pub async fn seed(&mut self) {
        let drafts = fixtures::seed_posts().expect("lifecycle: fixture data is malformed");

        ensure_schema(&self.db)
            .await
            .expect("lifecycle: failed to create the posts schema");
        self.seeded = self
            .posts
            .insert_many(drafts)
            .await
            .expect("lifecycle: seeding fixtures failed");
    }

    /// Drop all persisted state, then stop the listener and wait until it
    /// is fully closed.
    pub async fn teardown(self) {
        self.posts
            .drop_all()
            .await
            .expect("lifecycle: teardown failed to drop the posts table");
        self.server.stop(true).await;
    }
}
