use std::time::Duration;

use crate::config::config::{DEFAULT_DISPLAY_NUMBER, DEFAULT_STEP_INTERVAL};
use crate::core::error::CarouselError;

/// Caller-supplied carousel settings. Fixed for the lifetime of one controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub images: Vec<String>,
    pub display_number: usize,
    pub step_interval: Duration,
}

impl CarouselConfig {
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            display_number: DEFAULT_DISPLAY_NUMBER,
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }

    pub fn with_display_number(mut self, display_number: usize) -> Self {
        self.display_number = display_number;
        self
    }

    pub fn with_step_interval(mut self, step_interval: Duration) -> Self {
        self.step_interval = step_interval;
        self
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.display_number == 0 {
            return Err(CarouselError::ZeroDisplayNumber);
        }
        if self.display_number > self.images.len() {
            return Err(CarouselError::DisplayExceedsImages {
                display: self.display_number,
                images: self.images.len(),
            });
        }
        if self.step_interval.is_zero() {
            return Err(CarouselError::ZeroStepInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_defaults() {
        let config = CarouselConfig::new(["a", "b", "c"]);
        assert_eq!(config.display_number, 3);
        assert_eq!(config.step_interval, Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn more_visible_than_available_is_rejected() {
        let config = CarouselConfig::new(["a", "b", "c"]).with_display_number(5);
        assert_eq!(
            config.validate(),
            Err(CarouselError::DisplayExceedsImages { display: 5, images: 3 })
        );
    }

    #[test]
    fn empty_list_is_rejected_by_default_display_number() {
        let config = CarouselConfig::new(Vec::<String>::new());
        assert!(matches!(
            config.validate(),
            Err(CarouselError::DisplayExceedsImages { display: 3, images: 0 })
        ));
    }

    #[test]
    fn zero_values_are_rejected() {
        let config = CarouselConfig::new(["a"]).with_display_number(0);
        assert_eq!(config.validate(), Err(CarouselError::ZeroDisplayNumber));

        let config = CarouselConfig::new(["a"])
            .with_display_number(1)
            .with_step_interval(Duration::ZERO);
        assert_eq!(config.validate(), Err(CarouselError::ZeroStepInterval));
    }
}
