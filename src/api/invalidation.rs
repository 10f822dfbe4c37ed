use serde::{Deserialize, Serialize};

/// Reason a redraw was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    /// Viewport moved (fit, pan, zoom).
    Viewport,
    /// Window or plot area resized.
    Layout,
    /// Series added or cleared.
    Series,
    /// Explicit redraw request from the host.
    General,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Viewport => 1 << 0,
            Self::Layout => 1 << 1,
            Self::Series => 1 << 2,
            Self::General => 1 << 3,
        }
    }
}

/// Dirty flag with per-topic detail. A frame is drawn only while non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Invalidation {
    bits: u8,
}

impl Invalidation {
    const ALL_BITS: u8 = InvalidationTopic::Viewport.bit()
        | InvalidationTopic::Layout.bit()
        | InvalidationTopic::Series.bit()
        | InvalidationTopic::General.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    pub fn insert(&mut self, topic: InvalidationTopic) {
        self.bits |= topic.bit();
    }

    #[must_use]
    pub const fn contains(self, topic: InvalidationTopic) -> bool {
        self.bits & topic.bit() != 0
    }

    #[must_use]
    pub const fn is_dirty(self) -> bool {
        self.bits != 0
    }

    /// Returns the pending topics and resets to clean.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
