#![allow(dead_code)]
mod app;
mod math;
mod transport;

pub use app::{spawn_app, spawn_app_over, RecordingRedirect, TestApp};
pub use math::assert_on_decimal;
pub use transport::ScriptedTransport;

use lazy_static::lazy_static;

use concierge::telemetry::{generate_subscriber, init_subscriber};

lazy_static! {
    /// To ensure logs are only outputted in tests when required, by default
    /// tests run with no logs being captured
    ///
    /// In order to set logs to be captured during tests run them with:
    /// `TEST_LOG=true cargo test | bunyan`
    pub static ref TRACING: () = {
        let filter = if std::env::var("TEST_LOG").is_ok() {
            "debug"
        } else {
            "off"
        };
        let subscriber = generate_subscriber("test".into(), filter.into());
        init_subscriber(subscriber);
    };
}
