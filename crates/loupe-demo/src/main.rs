//! loupe demo application
//!
//! A minimal desktop page embedding one `SearchInput`.

mod app;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("loupe=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting loupe demo...");

    dioxus::launch(app::App);
}
