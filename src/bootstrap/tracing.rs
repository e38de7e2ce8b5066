
pub async fn init_tracing(){
    // Log level comes from the RUST_LOG environment variable,
    // defaulting to "info" if not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
