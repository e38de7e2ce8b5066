pub async fn init_env() {
    // A missing .env file is fine, configuration may come from the
    // process environment directly.
    dotenvy::dotenv().ok();
}
