use env_logger::{Builder, Env};

/// Loads `.env` if present and initialises logging at `info` unless
/// `RUST_LOG` says otherwise.
pub fn setup_env() {
    dotenvy::dotenv().ok();
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}
