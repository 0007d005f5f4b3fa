use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use concierge::client::{LoginRedirect, Transport};
use concierge::storage::{MemoryStorage, Storage};
use concierge::{build_app_with, Application};

use crate::helpers::{ScriptedTransport, TRACING};

pub struct TestApp {
    pub app: Application,
    pub storage: Arc<MemoryStorage>,
    pub transport: Arc<ScriptedTransport>,
    pub redirect: Arc<RecordingRedirect>,
}

/// Builds the application over in-memory storage and a scripted transport
pub fn spawn_app() -> TestApp {
    spawn_app_over(Arc::new(MemoryStorage::new()))
}

/// Same, but over storage the test has already seeded (pre-existing session,
/// corrupted blobs, a cart from a "previous run", ...)
pub fn spawn_app_over(storage: Arc<MemoryStorage>) -> TestApp {
    lazy_static::initialize(&TRACING);

    let transport = Arc::new(ScriptedTransport::new());
    let redirect = Arc::new(RecordingRedirect::default());
    let app = build_app_with(
        storage.clone() as Arc<dyn Storage>,
        transport.clone() as Arc<dyn Transport>,
        redirect.clone() as Arc<dyn LoginRedirect>,
    );
    TestApp {
        app,
        storage,
        transport,
        redirect,
    }
}

/// Counts the hard navigations to the login page the pipeline asked for
#[derive(Default)]
pub struct RecordingRedirect {
    count: AtomicUsize,
}

impl RecordingRedirect {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl LoginRedirect for RecordingRedirect {
    fn redirect_to_login(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
