//! Message capacity: a desired size and a hard platform ceiling.
//!
//! Chat platforms reject messages above a fixed number of characters (Discord
//! stops at 2000). Splitting right at the ceiling leaves no room for a prefix
//! such as `Part 2/3`, so callers usually aim lower and keep the ceiling as the
//! absolute limit:
//!
//! ```text
//! desired = 1500   segments are aimed here by the plain strategies
//! max     = 2000   the adaptive strategy packs up to here, never beyond
//! ```
//!
//! All sizes are counted in `char`s.

/// Desired segment size plus hard maximum.
///
/// # Examples
///
/// ```rust
/// use fenced::ChunkCapacity;
///
/// let cap = ChunkCapacity::default();
/// assert_eq!(cap.desired(), 1500);
/// assert_eq!(cap.max(), 2000);
///
/// let cap = ChunkCapacity::new(500).with_max(600).unwrap();
/// assert_eq!(cap.max(), 600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkCapacity {
    desired: usize,
    max: usize,
}

impl ChunkCapacity {
    /// Hard message cap of the chat platform the defaults are tuned for.
    pub const PLATFORM_LIMIT: usize = 2000;

    /// Create a capacity with the same desired and max size.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            desired: size,
            max: size,
        }
    }

    /// The target segment size.
    #[must_use]
    pub const fn desired(&self) -> usize {
        self.desired
    }

    /// The maximum allowed segment size.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Raise the hard maximum above the desired size.
    ///
    /// # Errors
    ///
    /// Returns an error if `max < desired`.
    pub fn with_max(self, max: usize) -> Result<Self, ChunkCapacityError> {
        if max < self.desired {
            Err(ChunkCapacityError::MaxLessThanDesired {
                desired: self.desired,
                max,
            })
        } else {
            Ok(Self { max, ..self })
        }
    }
}

impl Default for ChunkCapacity {
    fn default() -> Self {
        Self {
            desired: 1500,
            max: Self::PLATFORM_LIMIT,
        }
    }
}

/// Error when configuring a capacity.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChunkCapacityError {
    /// Max size must be >= desired size.
    #[error("max ({max}) must be >= desired ({desired})")]
    MaxLessThanDesired {
        /// The desired segment size.
        desired: usize,
        /// The max that was too small.
        max: usize,
    },
}
