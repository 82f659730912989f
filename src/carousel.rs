//! Carousel navigation state: a circular active index over the flattened
//! catalog, indicator bucketing, and the drag gesture state machine.

use std::rc::Rc;

use crate::catalog::{Capability, ServiceCatalog};

/// Indicator dots are capped at this count regardless of catalog size.
pub const MAX_INDICATORS: usize = 6;

/// Horizontal distance a drag must cover before it commits a card change.
pub const SWIPE_THRESHOLD_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { start_x: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    catalog: Rc<ServiceCatalog>,
    active_index: usize,
    drag: DragState,
}

impl Carousel {
    /// The catalog must be non-empty; a start index past the end is clamped.
    pub fn new(catalog: Rc<ServiceCatalog>, start_index: usize) -> Self {
        debug_assert!(!catalog.is_empty());
        let active_index = start_index.min(catalog.len().saturating_sub(1));
        Self {
            catalog,
            active_index,
            drag: DragState::Idle,
        }
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_capability(&self) -> Option<&Capability> {
        self.catalog.capability(self.active_index)
    }

    pub fn previous_capability(&self) -> Option<&Capability> {
        let n = self.catalog.len();
        if n == 0 {
            return None;
        }
        self.catalog.capability((self.active_index + n - 1) % n)
    }

    pub fn next_capability(&self) -> Option<&Capability> {
        let n = self.catalog.len();
        if n == 0 {
            return None;
        }
        self.catalog.capability((self.active_index + 1) % n)
    }

    /// Name of the line owning the active card.
    pub fn current_line(&self) -> Option<&str> {
        self.catalog.line_of(self.active_index)
    }

    pub fn next(&mut self) {
        let n = self.catalog.len();
        if n == 0 {
            return;
        }
        self.active_index = (self.active_index + 1) % n;
    }

    pub fn previous(&mut self) {
        let n = self.catalog.len();
        if n == 0 {
            return;
        }
        self.active_index = (self.active_index + n - 1) % n;
    }

    /// Jump to the first capability of the named line. Unknown names are a
    /// silent no-op.
    pub fn jump_to_line(&mut self, name: &str) {
        if let Some(index) = self.catalog.first_index_of_line(name) {
            self.active_index = index;
        }
    }

    pub fn indicator_count(&self) -> usize {
        MAX_INDICATORS.min(self.catalog.len())
    }

    /// Catalog items per indicator bucket, rounded up so the count never
    /// exceeds [`MAX_INDICATORS`]. The last bucket can be smaller when the
    /// catalog size is not a multiple of the bucket size.
    fn indicator_step(&self) -> usize {
        let count = self.indicator_count();
        if count == 0 {
            return 1;
        }
        self.catalog.len().div_ceil(count)
    }

    pub fn active_indicator(&self) -> usize {
        self.active_index / self.indicator_step()
    }

    /// Jump to the first card of an indicator's bucket, clamped so the last
    /// indicator never lands past the end.
    pub fn jump_to_indicator(&mut self, indicator: usize) {
        let n = self.catalog.len();
        if n == 0 {
            return;
        }
        self.active_index = (indicator * self.indicator_step()).min(n - 1);
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn drag_start(&mut self, x: f64) {
        self.drag = DragState::Dragging { start_x: x };
    }

    /// Track pointer movement while dragging. Crossing the swipe threshold
    /// commits a single card change and ends the gesture.
    pub fn drag_move(&mut self, x: f64) {
        if let DragState::Dragging { start_x } = self.drag {
            let delta = x - start_x;
            if delta.abs() > SWIPE_THRESHOLD_PX {
                if delta > 0.0 {
                    self.previous();
                } else {
                    self.next();
                }
                self.drag = DragState::Idle;
            }
        }
    }

    /// End the gesture without committing. Safe to call when idle.
    pub fn drag_end(&mut self) {
        self.drag = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Capability, ServiceLine};

    /// Catalog with `lines` lines of `per_line` capabilities each.
    fn catalog(lines: usize, per_line: usize) -> Rc<ServiceCatalog> {
        let lines = (0..lines)
            .map(|l| {
                ServiceLine::new(
                    format!("Line {}", l + 1),
                    (0..per_line)
                        .map(|c| {
                            let id = (l * per_line + c) as u32;
                            Capability::new(id, format!("Cap {id}"), "x", "desc")
                        })
                        .collect(),
                )
            })
            .collect();
        Rc::new(ServiceCatalog::new(lines))
    }

    #[test]
    fn next_then_previous_restores_every_index() {
        let catalog = catalog(5, 3);
        for start in 0..catalog.len() {
            let mut carousel = Carousel::new(catalog.clone(), start);
            carousel.next();
            carousel.previous();
            assert_eq!(carousel.active_index(), start);
        }
    }

    #[test]
    fn navigation_wraps_at_both_ends() {
        let catalog = catalog(5, 3);
        let mut carousel = Carousel::new(catalog.clone(), 0);
        carousel.previous();
        assert_eq!(carousel.active_index(), 14);
        carousel.next();
        assert_eq!(carousel.active_index(), 0);

        let mut carousel = Carousel::new(catalog, 14);
        carousel.next();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn single_item_catalog_stays_at_zero() {
        let mut carousel = Carousel::new(catalog(1, 1), 0);
        carousel.next();
        assert_eq!(carousel.active_index(), 0);
        carousel.previous();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn jump_to_line_targets_first_capability() {
        let mut carousel = Carousel::new(catalog(5, 3), 7);
        carousel.jump_to_line("Line 4");
        assert_eq!(carousel.active_index(), 9);
        carousel.jump_to_line("Line 1");
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn jump_to_unknown_line_is_a_no_op() {
        let mut carousel = Carousel::new(catalog(5, 3), 7);
        carousel.jump_to_line("No Such Line");
        assert_eq!(carousel.active_index(), 7);
    }

    #[test]
    fn current_line_tracks_active_index() {
        // 15 items in 5 lines of 3; index 7 sits in the third line.
        let mut carousel = Carousel::new(catalog(5, 3), 7);
        assert_eq!(carousel.current_line(), Some("Line 3"));
        carousel.next();
        assert_eq!(carousel.active_index(), 8);
        assert_eq!(carousel.current_line(), Some("Line 3"));
        carousel.next();
        assert_eq!(carousel.active_index(), 9);
        assert_eq!(carousel.current_line(), Some("Line 4"));
    }

    #[test]
    fn indicator_count_is_capped_at_six() {
        assert_eq!(Carousel::new(catalog(5, 3), 0).indicator_count(), 6);
        assert_eq!(Carousel::new(catalog(1, 4), 0).indicator_count(), 4);
    }

    #[test]
    fn indicator_round_trip_with_divisible_catalog() {
        // N=15: step = ceil(15/6) = 3; indicators 0..=4 land on 0,3,6,9,12
        // and read back exactly; indicator 5 clamps to index 14.
        let catalog = catalog(5, 3);
        for i in 0..5 {
            let mut carousel = Carousel::new(catalog.clone(), 0);
            carousel.jump_to_indicator(i);
            assert_eq!(carousel.active_index(), i * 3);
            assert_eq!(carousel.active_indicator(), i);
        }
        let mut carousel = Carousel::new(catalog, 0);
        carousel.jump_to_indicator(5);
        assert_eq!(carousel.active_index(), 14);
        // Clamp case: index 14 / step 3 reads back as indicator 4.
        assert_eq!(carousel.active_indicator(), 4);
    }

    #[test]
    fn indicator_round_trip_with_non_divisible_catalog() {
        // N=16: step = ceil(16/6) = 3; indicators 0..=5 land on 0,3,6,9,12,15
        // and all read back exactly.
        let catalog = catalog(4, 4);
        for i in 0..6 {
            let mut carousel = Carousel::new(catalog.clone(), 0);
            carousel.jump_to_indicator(i);
            assert_eq!(carousel.active_index(), i * 3);
            assert_eq!(carousel.active_indicator(), i);
        }
    }

    #[test]
    fn drag_past_threshold_commits_once_and_ends_gesture() {
        let mut carousel = Carousel::new(catalog(5, 3), 7);
        carousel.drag_start(200.0);
        assert!(carousel.is_dragging());
        carousel.drag_move(350.0);
        assert_eq!(carousel.active_index(), 6);
        assert!(!carousel.is_dragging());
        // Further movement after the commit does nothing.
        carousel.drag_move(600.0);
        assert_eq!(carousel.active_index(), 6);
    }

    #[test]
    fn drag_left_advances_to_next_card() {
        let mut carousel = Carousel::new(catalog(5, 3), 7);
        carousel.drag_start(400.0);
        carousel.drag_move(250.0);
        assert_eq!(carousel.active_index(), 8);
    }

    #[test]
    fn sub_threshold_drag_has_no_side_effects() {
        let mut carousel = Carousel::new(catalog(5, 3), 7);
        carousel.drag_start(200.0);
        carousel.drag_move(260.0);
        carousel.drag_move(150.0);
        carousel.drag_end();
        assert_eq!(carousel.active_index(), 7);
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn moves_without_drag_start_are_ignored() {
        let mut carousel = Carousel::new(catalog(5, 3), 7);
        carousel.drag_move(999.0);
        assert_eq!(carousel.active_index(), 7);
    }

    #[test]
    fn neighbour_capabilities_wrap_around() {
        let catalog = catalog(5, 3);
        let carousel = Carousel::new(catalog, 0);
        assert_eq!(carousel.previous_capability().unwrap().id, 14);
        assert_eq!(carousel.active_capability().unwrap().id, 0);
        assert_eq!(carousel.next_capability().unwrap().id, 1);
    }
}
