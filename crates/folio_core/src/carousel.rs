//! Manual-paging carousel with wrap-around.

/// Index over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Creates a carousel on the first slide.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Moves forward, wrapping to the first slide. `None` when empty.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Moves back, wrapping to the last slide. `None` when empty.
    pub fn prev(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }

    /// Current slide.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Slide count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), Some(2));
        assert_eq!(carousel.next(), Some(0));
        assert_eq!(carousel.next(), Some(1));
        assert_eq!(carousel.next(), Some(2));
        assert_eq!(carousel.next(), Some(0));
    }

    #[test]
    fn test_empty_does_nothing() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
        assert!(carousel.is_empty());
    }
}
