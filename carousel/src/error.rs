//! Error types for the carousel controller and its timer resource.

use thiserror::Error;

/// Errors raised while building or driving a [`crate::Carousel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A deck needs at least one slide to rotate through.
    #[error("slide deck is empty")]
    EmptyDeck,

    /// Slide ids key the view layer, so they must be unique.
    #[error("duplicate slide id `{0}`")]
    DuplicateSlideId(String),

    /// An autoplay interval of zero would advance on every tick.
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,

    /// Navigation to an index outside `[0, len)`.
    #[error("slide index {index} is out of range for a deck of {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of slides in the deck
        len: usize,
    },
}

/// The host refused to schedule a timer expiry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to schedule autoplay timer: {reason}")]
pub struct SchedulerError {
    /// Host-provided description
    pub reason: String,
}

impl SchedulerError {
    /// Wrap a host error message.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = CarouselError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(
            err.to_string(),
            "slide index 7 is out of range for a deck of 5"
        );
    }

    #[test]
    fn scheduler_error_carries_reason() {
        let err = SchedulerError::new("window unavailable");
        assert!(err.to_string().contains("window unavailable"));
    }
}
