use holocron::server::{
    config::Config, error::Error, model::app::AppState, router::routes, startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;

    let router = routes().with_state(AppState { db });

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    tracing::info!(addr = %config.listen_addr, "Starting server");

    axum::serve(listener, router).await?;

    Ok(())
}
