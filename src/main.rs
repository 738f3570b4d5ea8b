use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use winit::event_loop::EventLoop;

use wind_turbine::app::App;
use wind_turbine::cli::Cli;
use wind_turbine::settings::SpeedSettings;
use wind_turbine::simulation::Simulation;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Speed is loaded before the window exists so the first frame uses it
    let simulation = Simulation::start(
        SpeedSettings::new(cli.settings.clone()),
        cli.tick_period(),
        cli.poll_period(),
        Instant::now(),
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(simulation);

    println!("Wind Turbine - edit {} to change speed (1-10), Escape to quit", cli.settings.display());
    event_loop.run_app(&mut app)?;

    Ok(())
}
