use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = coursegrab::storage::config::load_config(Path::new(&config_path))?;

    coursegrab::run(config).await?;
    Ok(())
}
