use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};

use crate::config::config::*;
use crate::core::file_manager::FileManager;
use crate::ui::viewer::{CarouselApp, LaunchSettings};

#[derive(Parser, Debug)]
#[command(version, about = "Image carousel with autoplay", long_about = None)]
pub struct Args {
    /// Image files or directories, shown in the given order
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// How many images are visible at once
    #[arg(short = 'n', long, default_value_t = DEFAULT_DISPLAY_NUMBER)]
    display_number: usize,

    /// Seconds between automatic advances
    #[arg(short = 's', long, value_name = "SECS", default_value_t = DEFAULT_STEP_INTERVAL.as_secs_f32())]
    step_interval: f32,
}

impl Args {
    fn launch_settings(&self) -> LaunchSettings {
        let sources = FileManager::collect_sources(&self.paths).unwrap_or_else(|e| {
            log::error!("could not read image paths: {}", e);
            Vec::new()
        });

        LaunchSettings {
            sources,
            display_number: self.display_number,
            // Negative or NaN intervals end up as a configuration error on mount.
            step_interval: Duration::try_from_secs_f32(self.step_interval).unwrap_or(Duration::ZERO),
        }
    }
}

fn init_logger() -> Option<LoggerHandle> {
    match Logger::try_with_env_or_str(LOG_SPEC).and_then(|logger| logger.start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Failed to start logger: {}", e);
            None
        }
    }
}

pub fn run() {
    let args = Args::parse();
    let _logger = init_logger();

    log::info!("Starting {} {}", APP_NAME, APP_VERSION);
    let settings = args.launch_settings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(CarouselApp::new(settings)))),
    );

    if let Err(e) = result {
        log::error!("Failed to start the application: {}", e);

        // release builds exit quietly
        #[cfg(not(debug_assertions))]
        std::process::exit(1);
    }

    log::info!("Shutting down.");
}
