//! Scroll reveal scheduling.
//!
//! Marked elements start [`RevealState::Hidden`] and flip to
//! [`RevealState::Revealed`] the first time enough of them is inside the
//! viewport band. The flip is permanent: leaving the viewport does nothing.
//!
//! The host reports intersections in batches ([`IntersectionSample`]); the
//! scheduler decides which elements become visible and the host adapter only
//! applies the CSS class.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::layout::Rect;

/// Identity of a registered element (its registration index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Visibility of a revealable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Not yet scrolled into view.
    #[default]
    Hidden,
    /// Scrolled into view at least once.
    Revealed,
}

impl RevealState {
    /// Returns true once revealed.
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Inset of the detection band relative to the viewport, in percent of the
/// viewport's size along each axis. Negative values shrink the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RootMargin {
    /// Top edge (% of height).
    pub top: f64,
    /// Right edge (% of width).
    pub right: f64,
    /// Bottom edge (% of height).
    pub bottom: f64,
    /// Left edge (% of width).
    pub left: f64,
}

impl RootMargin {
    /// Returns the CSS margin string for an intersection observer.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "{} {} {} {}",
            css_percent(self.top),
            css_percent(self.right),
            css_percent(self.bottom),
            css_percent(self.left)
        )
    }

    /// Applies the margin to a viewport rect.
    #[must_use]
    pub fn apply(&self, viewport: Rect) -> Rect {
        viewport.outset(
            viewport.height * self.top / 100.0,
            viewport.width * self.right / 100.0,
            viewport.height * self.bottom / 100.0,
            viewport.width * self.left / 100.0,
        )
    }
}

fn css_percent(value: f64) -> String {
    if value.abs() < f64::EPSILON {
        "0px".to_owned()
    } else {
        format!("{value}%")
    }
}

/// Observer tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction (0-1) of an element that must be inside the band.
    pub threshold: f64,
    /// Band inset.
    pub root_margin: RootMargin,
    /// CSS selector of revealable elements.
    pub selector: String,
    /// Class applied on reveal.
    pub visible_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.16,
            root_margin: RootMargin {
                bottom: -10.0,
                ..RootMargin::default()
            },
            selector: ".reveal".to_owned(),
            visible_class: "visible".to_owned(),
        }
    }
}

impl RevealConfig {
    /// Checks the threshold range.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidConfig`] if `threshold` is outside `[0, 1]`.
    pub fn validate(&self) -> FolioResult<()> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(FolioError::InvalidConfig(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.threshold
            )))
        }
    }
}

/// One element's intersection in a host batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    /// Element observed.
    pub id: ElementId,
    /// Fraction of the element inside the band (0-1).
    pub ratio: f64,
}

/// Fraction of `element` inside the viewport band.
///
/// Zero-area elements count as fully inside when their origin lies in the band.
#[must_use]
pub fn intersection_ratio(element: Rect, viewport: Rect, margin: RootMargin) -> f64 {
    let band = margin.apply(viewport);
    let area = element.area();
    if area <= 0.0 {
        let (x, y) = (element.x, element.y);
        let inside = x >= band.x && x <= band.right() && y >= band.y && y <= band.bottom();
        return if inside { 1.0 } else { 0.0 };
    }
    element
        .intersection(&band)
        .map_or(0.0, |overlap| (overlap.area() / area).clamp(0.0, 1.0))
}

/// Pure reveal decision. Revealed stays revealed.
#[must_use]
pub fn decide(current: RevealState, ratio: f64, threshold: f64) -> RevealState {
    match current {
        RevealState::Revealed => RevealState::Revealed,
        RevealState::Hidden if ratio >= threshold => RevealState::Revealed,
        RevealState::Hidden => RevealState::Hidden,
    }
}

/// Tracks reveal flags for every registered element.
#[derive(Debug, Clone)]
pub struct RevealScheduler {
    threshold: f64,
    states: HashMap<ElementId, RevealState>,
}

impl RevealScheduler {
    /// Creates a scheduler with no elements.
    #[must_use]
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            states: HashMap::new(),
        }
    }

    /// Starts observing `ids`. Already known ids keep their state.
    pub fn register(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        let before = self.states.len();
        for id in ids {
            self.states.entry(id).or_default();
        }
        tracing::debug!(added = self.states.len() - before, total = self.states.len(), "reveal elements registered");
    }

    /// Applies one intersection report and returns the resulting state.
    ///
    /// Unregistered ids are ignored and reported as hidden.
    pub fn mark_if_intersecting(&mut self, id: ElementId, ratio: f64) -> RevealState {
        let threshold = self.threshold;
        match self.states.get_mut(&id) {
            Some(state) => {
                *state = decide(*state, ratio, threshold);
                *state
            }
            None => RevealState::Hidden,
        }
    }

    /// Applies a host batch. Returns the ids that became visible in it.
    pub fn observe_batch(&mut self, samples: &[IntersectionSample]) -> Vec<ElementId> {
        let mut revealed = Vec::new();
        for sample in samples {
            let was = self.state(sample.id);
            let now = self.mark_if_intersecting(sample.id, sample.ratio);
            if !was.is_revealed() && now.is_revealed() {
                revealed.push(sample.id);
            }
        }
        revealed
    }

    /// Reveals every registered element at once. Returns the ones that changed.
    pub fn reveal_all(&mut self) -> Vec<ElementId> {
        let mut changed: Vec<ElementId> = self
            .states
            .iter_mut()
            .filter(|(_, state)| !state.is_revealed())
            .map(|(id, state)| {
                *state = RevealState::Revealed;
                *id
            })
            .collect();
        changed.sort_unstable();
        changed
    }

    /// Current state of an element (hidden when unknown).
    #[must_use]
    pub fn state(&self, id: ElementId) -> RevealState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of revealed elements.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.states.values().filter(|s| s.is_revealed()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margin_css() {
        assert_eq!(RevealConfig::default().root_margin.to_css(), "0px 0px -10% 0px");
    }

    #[test]
    fn test_decide_is_one_way() {
        assert_eq!(decide(RevealState::Hidden, 0.15, 0.16), RevealState::Hidden);
        assert_eq!(decide(RevealState::Hidden, 0.16, 0.16), RevealState::Revealed);
        assert_eq!(decide(RevealState::Revealed, 0.0, 0.16), RevealState::Revealed);
    }

    #[test]
    fn test_band_excludes_bottom_tenth() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let margin = RevealConfig::default().root_margin;

        // Entirely within the bottom 10% of the viewport: outside the band.
        let low = Rect::new(0.0, 920.0, 100.0, 50.0);
        assert!(intersection_ratio(low, viewport, margin).abs() < f64::EPSILON);

        // Half above the inset edge.
        let straddling = Rect::new(0.0, 850.0, 100.0, 100.0);
        assert!((intersection_ratio(straddling, viewport, margin) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_unregistered_ids_stay_hidden() {
        let mut scheduler = RevealScheduler::new(&RevealConfig::default());
        assert_eq!(scheduler.mark_if_intersecting(ElementId(9), 1.0), RevealState::Hidden);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_reregistration_keeps_state() {
        let mut scheduler = RevealScheduler::new(&RevealConfig::default());
        scheduler.register([ElementId(0), ElementId(1)]);
        scheduler.mark_if_intersecting(ElementId(0), 0.5);

        scheduler.register([ElementId(0), ElementId(1)]);

        assert_eq!(scheduler.len(), 2);
        assert!(scheduler.state(ElementId(0)).is_revealed());
        assert!(!scheduler.state(ElementId(1)).is_revealed());
    }

    #[test]
    fn test_reveal_all() {
        let mut scheduler = RevealScheduler::new(&RevealConfig::default());
        scheduler.register((0..3).map(ElementId));
        scheduler.mark_if_intersecting(ElementId(1), 1.0);

        assert_eq!(scheduler.reveal_all(), vec![ElementId(0), ElementId(2)]);
        assert_eq!(scheduler.revealed_count(), 3);
        assert!(scheduler.reveal_all().is_empty());
    }

    #[test]
    fn test_threshold_validation() {
        let config = RevealConfig {
            threshold: 1.5,
            ..RevealConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
