use clap::Parser;
use fractal_viewer::{PixelsPresenterFactory, RunGuiCommand, ViewerArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ViewerArgs::parse().into_config()?;
    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);

    command.execute()?;

    Ok(())
}
