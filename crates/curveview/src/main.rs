mod cli;
mod commands;
mod curve_file;
mod viewer;

use anyhow::Result;
use winit::dpi::LogicalSize;

use curveview_engine::device::GpuInit;
use curveview_engine::logging::{init_logging, LoggingConfig};
use curveview_engine::window::{Runtime, RuntimeConfig};

use crate::viewer::Viewer;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = cli::parse_args()?;

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..Default::default()
    });

    let defs = curve_file::load_curves(&config.file)?;
    log::info!("loaded {} curves from {}", defs.len(), config.file.display());

    let runtime_config = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(config.width, config.height),
    };
    let viewer = Viewer::new(defs, &config);

    Runtime::run(runtime_config, GpuInit::default(), viewer)
}
