//! Logging setup driven by the deployment environment.

use crate::config::Env;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// - `local` - human-readable output at debug level
/// - `dev`   - JSON output at debug level
/// - `prod`  - JSON output at info level
///
/// `RUST_LOG` overrides the default level when set.
pub fn init(env: Env) {
    let default_level = match env {
        Env::Local | Env::Dev => "debug",
        Env::Prod => "info",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match env {
        Env::Local => tracing_subscriber::fmt().with_env_filter(filter).init(),
        Env::Dev | Env::Prod => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}
