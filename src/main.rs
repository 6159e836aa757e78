mod cli;
mod config;
mod gateways;
mod rows;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run()
}
