use cinebooker::config::AppConfig;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    cinebooker::rocket(AppConfig::from_env()).launch().await?;
    Ok(())
}
