use std::time::Duration;

pub const APP_NAME: &str = "Carrusel de Imágenes";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_AUTHOR: &str = "thepuag";

pub const WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [400.0, 300.0];

/// Images visible at once when the caller does not say otherwise.
pub const DEFAULT_DISPLAY_NUMBER: usize = 3;
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_secs(3);

/// Hidden entries kept on each side of the visible window so wrapping has no seam.
pub const BORDER: usize = 1;

/// Horizontal offset applied to every layer but the first visible one.
pub const LAYER_OVERLAP: f32 = -50.0;
pub const LAYER_SIZE: [f32; 2] = [240.0, 160.0];

// pink / green
pub const PAUSED_BACKGROUND: [u8; 3] = [255, 192, 203];
pub const PLAYING_BACKGROUND: [u8; 3] = [0, 128, 0];
pub const PLACEHOLDER_FILL: [u8; 3] = [64, 64, 64];

pub const MAX_DECODE_SIZE: (u32, u32) = (1920, 1080);
pub const TEXTURE_CACHE_SIZE: usize = 64;
/// Images decoded ahead on each side beyond the visible window.
pub const PRELOAD_RANGE: usize = 2;
pub const MAX_DECODE_THREADS: usize = 4;

pub const LOG_SPEC: &str = "info, eframe=warn, egui_glow=warn, wgpu_core=error, wgpu_hal=error";
