use clap::Parser;
use dotenv::dotenv;
use handler::Cli;

mod handler;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let config = esgster::config::read_config()?;
    handler::handler(args, config)?;
    Ok(())
}
