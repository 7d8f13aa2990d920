//! Card board - the demo scene
//!
//! A centered drop-target rect plus four draggable cards in a 2x2 grid,
//! mirroring the layout the demo ships with. The board owns the cards and
//! the snap-back scheduler and advances everything one redraw frame per
//! `tick`.

use crate::card::DraggableCard;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use snapcard_animation::{SnapScheduler, DEFAULT_STEP_FRACTION};
use snapcard_core::events::{event_types, Event};
use snapcard_core::geometry::{Offset, Point, Rect, Size};
use thiserror::Error;

new_key_type! {
    pub struct CardId;
}

/// Drop-target side length
pub const TARGET_SIZE: f32 = 80.0;
/// Card side length
pub const CARD_SIZE: f32 = 50.0;
/// Vertical padding around each card row
pub const ROW_PADDING: f32 = 24.0;
/// Horizontal gap between cards in a row
pub const CARD_SPACING: f32 = 48.0;

/// Board-level error conditions
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("no card at index {0}")]
    UnknownCard(usize),
    #[error("event targets unknown widget id {0}")]
    UnknownWidget(u64),
}

/// The demo scene: draggable cards plus a drop-target rect
pub struct CardBoard {
    cards: SlotMap<CardId, DraggableCard>,
    /// Insertion order, used for the stable indices scenarios refer to
    order: Vec<CardId>,
    by_widget: FxHashMap<u64, CardId>,
    scheduler: SnapScheduler,
    drop_target: Rect,
    step_fraction: f32,
    next_widget_id: u64,
}

impl CardBoard {
    /// Create an empty board with the given drop-target bounds.
    pub fn new(drop_target: Rect) -> Self {
        Self {
            cards: SlotMap::with_key(),
            order: Vec::new(),
            by_widget: FxHashMap::default(),
            scheduler: SnapScheduler::new(),
            drop_target,
            step_fraction: DEFAULT_STEP_FRACTION,
            next_widget_id: 1,
        }
    }

    /// Build the demo scene for a viewport: one drop target above a 2x2
    /// grid of cards, the whole column centered.
    pub fn demo(width: f32, height: f32) -> Self {
        let cx = width / 2.0;
        let cy = height / 2.0;

        let row_height = CARD_SIZE + 2.0 * ROW_PADDING;
        let column_height = TARGET_SIZE + 2.0 * row_height;
        let top = cy - column_height / 2.0;

        let target_center = Point::new(cx, top + TARGET_SIZE / 2.0);
        let mut board = Self::new(Rect::from_center(target_center, Size::square(TARGET_SIZE)));

        let dx = (CARD_SIZE + CARD_SPACING) / 2.0;
        let card_size = Size::square(CARD_SIZE);
        for row in 0..2 {
            let row_center_y = top + TARGET_SIZE + row_height * (row as f32 + 0.5);
            for col in 0..2 {
                let x = if col == 0 { cx - dx } else { cx + dx };
                board.add_card(Rect::from_center(Point::new(x, row_center_y), card_size));
            }
        }
        board
    }

    /// Override the snap-back step fraction for all cards on this board.
    pub fn set_step_fraction(&mut self, fraction: f32) {
        self.step_fraction = fraction;
    }

    pub fn step_fraction(&self) -> f32 {
        self.step_fraction
    }

    pub fn drop_target(&self) -> Rect {
        self.drop_target
    }

    /// Add a card at the given rest bounds, returning its id.
    pub fn add_card(&mut self, rest_bounds: Rect) -> CardId {
        let widget_id = self.next_widget_id;
        self.next_widget_id += 1;

        let id = self.cards.insert(DraggableCard::new(widget_id, rest_bounds));
        self.order.push(id);
        self.by_widget.insert(widget_id, id);
        tracing::debug!(widget_id, ?rest_bounds, "card mounted");
        id
    }

    /// Remove a card, discarding any pending snap-back.
    pub fn remove_card(&mut self, id: CardId) -> Option<DraggableCard> {
        let mut card = self.cards.remove(id)?;
        card.discard(&mut self.scheduler);
        self.order.retain(|&c| c != id);
        self.by_widget.remove(&card.widget_id());
        Some(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: CardId) -> Option<&DraggableCard> {
        self.cards.get(id)
    }

    /// Look up a card by its stable insertion-order index.
    pub fn card_at(&self, index: usize) -> Option<&DraggableCard> {
        self.order.get(index).and_then(|&id| self.cards.get(id))
    }

    /// Iterate cards in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = &DraggableCard> {
        self.order.iter().filter_map(|&id| self.cards.get(id))
    }

    /// Apply a drag delta to the card at `index`.
    pub fn drag(&mut self, index: usize, delta_x: f32, delta_y: f32) -> Result<(), BoardError> {
        let id = *self
            .order
            .get(index)
            .ok_or(BoardError::UnknownCard(index))?;
        let card = self
            .cards
            .get_mut(id)
            .ok_or(BoardError::UnknownCard(index))?;
        card.on_drag(Offset::new(delta_x, delta_y), &mut self.scheduler);
        Ok(())
    }

    /// Release the card at `index`, starting its snap-back.
    pub fn release(&mut self, index: usize) -> Result<(), BoardError> {
        let fraction = self.step_fraction;
        let id = *self
            .order
            .get(index)
            .ok_or(BoardError::UnknownCard(index))?;
        let card = self
            .cards
            .get_mut(id)
            .ok_or(BoardError::UnknownCard(index))?;
        card.on_drag_end(&mut self.scheduler, fraction);
        Ok(())
    }

    /// Route a host-toolkit event to the card it targets.
    pub fn handle_event(&mut self, event: &Event) -> Result<(), BoardError> {
        match event.event_type {
            event_types::DRAG | event_types::DRAG_END => {
                let id = *self
                    .by_widget
                    .get(&event.target)
                    .ok_or(BoardError::UnknownWidget(event.target))?;
                let fraction = self.step_fraction;
                if let Some(card) = self.cards.get_mut(id) {
                    card.handle_event(event, &mut self.scheduler, fraction);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Advance one redraw frame. Returns true if any card moved.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for &id in &self.order {
            if let Some(card) = self.cards.get_mut(id) {
                changed |= card.tick(&mut self.scheduler);
            }
        }
        changed
    }

    /// Check if any card still has snap-back frames to consume
    pub fn has_active_cards(&self) -> bool {
        self.scheduler.has_active()
    }

    /// Check if every card is idle at (0,0)
    pub fn all_at_rest(&self) -> bool {
        self.cards.iter().all(|(_, c)| c.is_at_rest())
    }

    /// Check whether the dragged card's center currently lies inside the
    /// drop target.
    pub fn card_over_target(&self, index: usize) -> Result<bool, BoardError> {
        let card = self
            .card_at(index)
            .ok_or(BoardError::UnknownCard(index))?;
        Ok(self.drop_target.contains(card.bounds().center()))
    }

    fn card_at_mut(&mut self, index: usize) -> Result<&mut DraggableCard, BoardError> {
        let id = *self
            .order
            .get(index)
            .ok_or(BoardError::UnknownCard(index))?;
        self.cards
            .get_mut(id)
            .ok_or(BoardError::UnknownCard(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_layout() {
        let board = CardBoard::demo(1280.0, 720.0);
        assert_eq!(board.len(), 4);

        // Drop target is centered horizontally at the top of the column
        let target = board.drop_target();
        assert_eq!(target.center().x, 640.0);
        assert_eq!(target.width, TARGET_SIZE);

        // Cards form a 2x2 grid around the vertical center line
        let left = board.card_at(0).unwrap().rest_bounds().center();
        let right = board.card_at(1).unwrap().rest_bounds().center();
        assert_eq!(right.x - left.x, CARD_SIZE + CARD_SPACING);
        assert_eq!(left.y, right.y);

        let lower = board.card_at(2).unwrap().rest_bounds().center();
        assert_eq!(lower.x, left.x);
        assert_eq!(lower.y - left.y, CARD_SIZE + 2.0 * ROW_PADDING);
    }

    #[test]
    fn test_drag_release_tick_to_rest() {
        let mut board = CardBoard::demo(1280.0, 720.0);
        board.drag(0, 50.0, -10.0).unwrap();
        board.release(0).unwrap();
        assert!(board.has_active_cards());
        assert!(!board.all_at_rest());

        let mut frames = 0;
        while !board.all_at_rest() {
            board.tick();
            frames += 1;
            assert!(frames < 100, "board never settled");
        }
        assert_eq!(board.card_at(0).unwrap().offset(), Offset::ZERO);
        assert!(!board.has_active_cards());
    }

    #[test]
    fn test_unknown_card_index() {
        let mut board = CardBoard::demo(1280.0, 720.0);
        assert!(matches!(
            board.drag(4, 1.0, 1.0),
            Err(BoardError::UnknownCard(4))
        ));
    }

    #[test]
    fn test_event_routing_by_widget_id() {
        let mut board = CardBoard::demo(1280.0, 720.0);
        let widget_id = board.card_at(2).unwrap().widget_id();

        board
            .handle_event(&Event::drag(widget_id, 6.0, 7.0, 16))
            .unwrap();
        assert_eq!(board.card_at(2).unwrap().offset(), Offset::new(6.0, 7.0));

        let err = board.handle_event(&Event::drag(9999, 1.0, 1.0, 16));
        assert!(matches!(err, Err(BoardError::UnknownWidget(9999))));
    }

    #[test]
    fn test_card_over_target() {
        let mut board = CardBoard::demo(1280.0, 720.0);
        assert!(!board.card_over_target(0).unwrap());

        // Drag card 0 so its center lands on the drop target's center
        let card_center = board.card_at(0).unwrap().rest_bounds().center();
        let target_center = board.drop_target().center();
        board
            .drag(
                0,
                target_center.x - card_center.x,
                target_center.y - card_center.y,
            )
            .unwrap();
        assert!(board.card_over_target(0).unwrap());
    }

    #[test]
    fn test_remove_card_discards_snap() {
        let mut board = CardBoard::demo(1280.0, 720.0);
        board.drag(3, 100.0, 100.0).unwrap();
        board.release(3).unwrap();
        assert!(board.has_active_cards());

        let id = board.order[3];
        board.remove_card(id).unwrap();
        assert_eq!(board.len(), 3);
        assert!(!board.has_active_cards());
    }
}
