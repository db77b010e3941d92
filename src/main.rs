use std::process::ExitCode;

use client::DemoCore;
use config::DemoConfig;
use log::error;
use scene::Scene;

mod client;
mod config;
mod error;
mod scene;
mod shared;
mod vec2f;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = if cfg!(feature = "debug_output") {
    "debug"
} else {
    "info"
};

/// Builds the scene and window, then runs until the window is closed.
fn run() -> error::Result<()> {
    let config = DemoConfig::default();
    let scene = Scene::spawn(&config, &mut rand::rng());

    let mut core = DemoCore::new(&config, scene)?;
    core.run()
}

fn main() -> ExitCode {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    env_logger::Builder::from_env(env).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why}");
            ExitCode::FAILURE
        }
    }
}
