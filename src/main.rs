use btc_history::app::run;
use btc_history::config::Config;
use btc_history::error::Result;
use btc_history::logging::init;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init();

    let config = Config::from_env()?;

    run(config).await
}
