use std::time::Duration;

use crate::config::config::BORDER;
use crate::core::carousel_config::CarouselConfig;
use crate::core::error::CarouselError;
use crate::core::sequence::{center_shift, working_sequence, Position, SequenceEntry, VisibleImage};
use crate::core::step_timer::{Clock, StepTimer, SystemClock};

/// Index and pause state of one mounted carousel, plus its autoplay timer.
///
/// The controller knows nothing about rendering. The host calls [`tick`] once
/// per frame and reads [`viewing_images`] / [`viewing_index`] to draw.
///
/// [`tick`]: CarouselController::tick
/// [`viewing_images`]: CarouselController::viewing_images
/// [`viewing_index`]: CarouselController::viewing_index
pub struct CarouselController<C: Clock = SystemClock> {
    image_count: usize,
    display_number: usize,
    shift: usize,
    sequence: Vec<SequenceEntry>,
    cursor: usize,
    paused: bool,
    timer: StepTimer,
    clock: C,
}

impl CarouselController<SystemClock> {
    pub fn new(config: CarouselConfig) -> Result<Self, CarouselError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> CarouselController<C> {
    pub fn with_clock(config: CarouselConfig, clock: C) -> Result<Self, CarouselError> {
        config.validate()?;

        let image_count = config.images.len();
        let mut controller = Self {
            image_count,
            display_number: config.display_number,
            shift: center_shift(config.display_number),
            sequence: working_sequence(&config.images, BORDER),
            cursor: image_count,
            paused: false,
            timer: StepTimer::new(config.step_interval),
            clock,
        };
        controller.rearm();

        log::debug!(
            "carousel mounted: {} images, {} visible, step {:?}",
            image_count,
            controller.display_number,
            config.step_interval
        );
        Ok(controller)
    }

    pub fn advance(&mut self) {
        if self.cursor < self.sequence.len() - self.display_number - BORDER {
            self.cursor += 1;
        } else {
            self.cursor = self.cursor + 1 - self.image_count;
        }
        self.rearm();
    }

    pub fn retreat(&mut self) {
        if self.cursor > BORDER {
            self.cursor -= 1;
        } else {
            self.cursor = self.cursor - 1 + self.image_count;
        }
        self.rearm();
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("autoplay {}", if self.paused { "paused" } else { "resumed" });
        self.rearm();
    }

    pub fn set_step_interval(&mut self, step_interval: Duration) -> Result<(), CarouselError> {
        if step_interval.is_zero() {
            return Err(CarouselError::ZeroStepInterval);
        }
        self.timer.set_interval(step_interval);
        self.rearm();
        Ok(())
    }

    /// Polls the autoplay timer. Returns true when it fired and the carousel advanced.
    pub fn tick(&mut self) -> bool {
        if self.timer.fire(self.clock.now()) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn time_until_next_step(&self) -> Option<Duration> {
        self.timer.remaining(self.clock.now())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn step_interval(&self) -> Duration {
        self.timer.interval()
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    pub fn display_number(&self) -> usize {
        self.display_number
    }

    /// Index, in the caller's image list, of the centered image.
    pub fn viewing_index(&self) -> usize {
        (self.cursor + self.shift) % self.image_count
    }

    pub fn viewing_source(&self) -> &str {
        &self.sequence[self.viewing_index()].source
    }

    /// The visible window plus one hidden entry on each side.
    pub fn viewing_images(&self) -> Vec<VisibleImage<'_>> {
        let start = self.cursor - BORDER;
        let end = self.cursor + self.display_number + BORDER;
        let mid = self.shift + BORDER;

        self.sequence
            .iter()
            .enumerate()
            .filter(|(slot, _)| (start..end).contains(slot))
            .enumerate()
            .map(|(i, (_, entry))| VisibleImage {
                source: &entry.source,
                key: entry.key,
                position: if i < mid {
                    Position::Left
                } else if i == mid {
                    Position::Mid
                } else {
                    Position::Right
                },
            })
            .collect()
    }

    // Cursor moves, pause toggles and interval changes all restart the countdown.
    fn rearm(&mut self) {
        if self.paused {
            self.timer.cancel();
        } else {
            self.timer.arm(self.clock.now());
        }
    }
}
