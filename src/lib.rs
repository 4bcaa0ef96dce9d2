//! Image carousel widget for egui: an autoplaying, pausable window over a list of
//! images drawn as a fanned deck.

pub mod app;
pub mod config;
pub mod core;
pub mod i18n;
pub mod ui;

pub use crate::core::carousel_config::CarouselConfig;
pub use crate::core::controller::CarouselController;
pub use crate::core::error::CarouselError;
pub use crate::core::sequence::{Position, VisibleImage};
pub use crate::core::step_timer::{Clock, SystemClock};
pub use crate::ui::carousel_view::{CarouselCallbacks, CarouselView};
