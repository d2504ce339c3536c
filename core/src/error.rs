//! Error types for the landing page state machines.
//!
//! - [`MediaError`] - Video load and playback failures
//! - [`CarouselError`] - Invalid carousel construction
//! - [`ContentError`] - Static content that breaks a widget invariant
//!
//! None of these ever stop the page: media errors mark a hero slot as
//! unusable, content errors are logged at startup.

use thiserror::Error;

// =============================================================================
// Media Errors
// =============================================================================

/// Failures reported by a `<video>` element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// Fetching was aborted (`MEDIA_ERR_ABORTED` or an `abort` event).
    #[error("Media loading aborted")]
    Aborted,

    /// Network error while fetching (`MEDIA_ERR_NETWORK`).
    #[error("Network error while loading media")]
    Network,

    /// The media could not be decoded (`MEDIA_ERR_DECODE`).
    #[error("Media could not be decoded")]
    Decode,

    /// No source was usable (`MEDIA_ERR_SRC_NOT_SUPPORTED`).
    #[error("Media source not supported")]
    SourceNotSupported,

    /// The `play()` promise was rejected (autoplay policy, interrupted load).
    #[error("Playback rejected: {0}")]
    PlayRejected(String),

    /// An error code this crate does not know about.
    #[error("Unknown media error (code {0})")]
    Unknown(u16),
}

impl MediaError {
    /// Map an HTML `MediaError.code` to a variant.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => MediaError::Aborted,
            2 => MediaError::Network,
            3 => MediaError::Decode,
            4 => MediaError::SourceNotSupported,
            other => MediaError::Unknown(other),
        }
    }
}

// =============================================================================
// Carousel Errors
// =============================================================================

/// Errors when building a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A carousel needs at least one slide.
    #[error("Carousel has no slides")]
    Empty,
}

// =============================================================================
// Content Errors
// =============================================================================

/// Static content that would break a widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A list the page cannot render empty.
    #[error("Content section '{0}' is empty")]
    EmptySection(&'static str),

    /// Slide rating outside 1..=5.
    #[error("Slide {id} has rating {rating}, expected 1-5")]
    RatingOutOfRange { id: u32, rating: u8 },

    /// The hero rotation needs exactly three slots.
    #[error("Expected {expected} hero slots, found {found}")]
    HeroSlotCount { expected: usize, found: usize },

    /// Hero slots must be numbered 1, 2, 3 in order.
    #[error("Hero slot at position {position} has ordinal {ordinal}")]
    HeroOrdinal { position: usize, ordinal: u8 },

    /// More than one plan is flagged popular.
    #[error("{0} plans are flagged popular, expected at most one")]
    MultiplePopular(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_error_codes() {
        assert_eq!(MediaError::from_code(1), MediaError::Aborted);
        assert_eq!(MediaError::from_code(2), MediaError::Network);
        assert_eq!(MediaError::from_code(3), MediaError::Decode);
        assert_eq!(MediaError::from_code(4), MediaError::SourceNotSupported);
        assert_eq!(MediaError::from_code(9), MediaError::Unknown(9));
    }

    #[test]
    fn test_error_messages() {
        let err = ContentError::RatingOutOfRange { id: 3, rating: 7 };
        assert_eq!(err.to_string(), "Slide 3 has rating 7, expected 1-5");

        let err = MediaError::PlayRejected("NotAllowedError".to_string());
        assert_eq!(err.to_string(), "Playback rejected: NotAllowedError");
    }
}
