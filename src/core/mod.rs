pub mod carousel_config;
pub mod controller;
pub mod error;
pub mod file_manager;
pub mod image_cache;
pub mod image_format;
pub mod image_loader;
pub mod preload_manager;
pub mod sequence;
pub mod step_timer;
