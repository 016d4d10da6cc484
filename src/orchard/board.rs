//! The shared board and its overlay rules.
//!
//! The board is a sparse map from cell index to [`OrchardCell`]; only cells a
//! card has ever covered are present. Placing a card is a two-step affair:
//! [`Orchard::calc_placement`] projects the six covered cells without
//! touching the board, then [`Orchard::place_card`] checks the projection and
//! commits all six cells or none.

use std::time::Duration;

use im::{OrdMap, Vector};
use thiserror::Error;
use tracing::{debug, info};

use super::cell::{OrchardCell, PlacementDelta};
use crate::cards::{Card, TREES_PER_CARD};
use crate::core::OrchardConfig;
use crate::ports::{NotificationSink, Severity};

/// The six projected cells of one placement, in card-cell order.
pub type Placement = [PlacementDelta; TREES_PER_CARD];

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("The card must lie entirely inside the orchard")]
    OffBoard,

    #[error("A tree with rotten fruit cannot be overlapped by another tree")]
    OverlapsRot,

    #[error("You may produce at most {cap} rotten fruit per game")]
    RotCapExceeded { current: u32, added: u32, cap: u32 },

    #[error("At least one tree on the card must overlap a matching tree already in the orchard")]
    NoOverlap,
}

/// Board state for one game.
#[derive(Clone, Debug)]
pub struct Orchard {
    deck_size: usize,
    rot_cap: u32,
    notice_duration: Duration,
    cells: OrdMap<usize, OrchardCell>,
    placed: Vector<Card>,
    rot_count: u32,
}

impl Orchard {
    /// Create an empty board from the configuration.
    #[must_use]
    pub fn new(config: &OrchardConfig) -> Self {
        Self {
            deck_size: config.deck_size,
            rot_cap: config.rot_cap,
            notice_duration: config.notice_duration,
            cells: OrdMap::new(),
            placed: Vector::new(),
            rot_count: 0,
        }
    }

    /// Clear every cell and the placed-card record.
    pub fn init(&mut self) {
        self.cells.clear();
        self.placed.clear();
        self.rot_count = 0;
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn board_cells(&self) -> usize {
        self.deck_size * self.deck_size
    }

    /// Occupied cells in position order.
    #[must_use]
    pub fn cells(&self) -> &OrdMap<usize, OrchardCell> {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, position: usize) -> Option<&OrchardCell> {
        self.cells.get(&position)
    }

    /// Cards committed this game, oldest first.
    #[must_use]
    pub fn placed(&self) -> &Vector<Card> {
        &self.placed
    }

    /// Rot cells committed this game.
    #[must_use]
    pub fn rot_count(&self) -> u32 {
        self.rot_count
    }

    /// Sum of every cell's score.
    #[must_use]
    pub fn board_score(&self) -> i32 {
        self.cells.values().map(|c| c.score).sum()
    }

    /// Project what placing `card` at its current position and orientation
    /// would do. Never mutates the board.
    #[must_use]
    pub fn calc_placement(&self, card: &Card) -> Placement {
        let footprint = card.footprint(self.deck_size);
        let trees = card.trees();
        std::array::from_fn(|i| {
            let position = footprint[i];
            PlacementDelta::project(position, trees[i], self.cells.get(&position))
        })
    }

    /// Apply the placement rules to a projection, first failure wins.
    pub fn check_placement(&self, deltas: &Placement) -> Result<(), Rejection> {
        // right-edge overflow wraps to the next row; only the bottom edge is hard
        if deltas.iter().any(|d| d.position >= self.board_cells()) {
            return Err(Rejection::OffBoard);
        }

        if deltas.iter().any(PlacementDelta::is_invalid) {
            return Err(Rejection::OverlapsRot);
        }

        let added = deltas.iter().filter(|d| d.is_rot()).count() as u32;
        if self.rot_count + added > self.rot_cap {
            return Err(Rejection::RotCapExceeded {
                current: self.rot_count,
                added,
                cap: self.rot_cap,
            });
        }

        if !deltas.iter().any(|d| d.score >= 1) {
            return Err(Rejection::NoOverlap);
        }

        Ok(())
    }

    /// Like [`check_placement`](Self::check_placement), but reports the
    /// rejection to the player.
    pub fn placable_check(&self, deltas: &Placement, sink: &mut impl NotificationSink) -> bool {
        match self.check_placement(deltas) {
            Ok(()) => true,
            Err(rejection) => {
                debug!(?rejection, "placement rejected");
                sink.notify(&rejection.to_string(), Severity::Error, self.notice_duration);
                false
            }
        }
    }

    /// Try to commit `card`. With `force` the rules are skipped entirely.
    ///
    /// Returns whether the card was committed. A refused card leaves the
    /// board untouched.
    pub fn place_card(&mut self, card: &Card, force: bool, sink: &mut impl NotificationSink) -> bool {
        let deltas = self.calc_placement(card);
        if !force && !self.placable_check(&deltas, sink) {
            return false;
        }

        for delta in &deltas {
            // only reachable with `force` on a rot cell; keep whatever is there
            let Some(kind) = delta.projection.cell_kind() else {
                continue;
            };
            if delta.is_rot() {
                self.rot_count += 1;
            }
            self.cells.insert(
                delta.position,
                OrchardCell {
                    position: delta.position,
                    kind,
                    score: delta.score,
                },
            );
        }
        self.placed.push_back(card.clone());

        info!(
            card = %card.id,
            index = card.definition.index,
            orientation = %card.orientation(),
            position = card.position,
            forced = force,
            "card placed"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{CardDefinition, Orientation, TreeType::*};
    use crate::core::CardId;
    use crate::orchard::cell::{CellKind, Projection, ROT_SCORE};
    use crate::ports::RecordingSink;

    fn card(id: u32, trees: [crate::cards::TreeType; 6], position: usize) -> Card {
        let mut card = Card::new(CardId(id), Arc::new(CardDefinition::new(id, trees)));
        card.position = position;
        card
    }

    fn orchard() -> Orchard {
        Orchard::new(&OrchardConfig::default())
    }

    #[test]
    fn test_forced_seed_on_empty_board() {
        let mut board = orchard();
        let mut sink = RecordingSink::new();
        let seed = card(0, [Apple, Pear, Plum, Apple, Pear, Plum], 5050);

        assert!(board.place_card(&seed, true, &mut sink));

        assert_eq!(board.cells().len(), 6);
        assert_eq!(board.placed().len(), 1);
        assert_eq!(board.board_score(), 0);
        assert_eq!(board.cell(5050).unwrap().kind, CellKind::Tree(Apple));
        assert_eq!(board.cell(5251).unwrap().kind, CellKind::Tree(Plum));
        assert!(sink.notices.is_empty());
    }

    #[test]
    fn test_unforced_on_empty_board_is_rejected() {
        let mut board = orchard();
        let mut sink = RecordingSink::new();
        let lone = card(0, [Apple; 6], 10);

        assert!(!board.place_card(&lone, false, &mut sink));
        assert!(board.cells().is_empty());
        assert_eq!(sink.last().unwrap().message, Rejection::NoOverlap.to_string());
        assert_eq!(sink.last().unwrap().severity, Severity::Error);
        assert_eq!(sink.last().unwrap().duration, Duration::from_secs(3));
    }

    #[test]
    fn test_calc_placement_is_pure() {
        let mut board = orchard();
        let mut sink = RecordingSink::new();
        board.place_card(&card(0, [Apple; 6], 0), true, &mut sink);

        let probe = card(1, [Apple, Pear, Apple, Pear, Apple, Pear], 1);
        let before = board.cells().clone();
        let first = board.calc_placement(&probe);
        let second = board.calc_placement(&probe);

        assert_eq!(first, second);
        assert_eq!(board.cells(), &before);
    }

    #[test]
    fn test_calc_placement_sideways_footprint() {
        let board = orchard();
        let mut probe = card(1, [Apple, Pear, Plum, Apple, Pear, Plum], 200);
        probe.rotate(Some(Orientation::Right));

        let positions: Vec<_> = board.calc_placement(&probe).iter().map(|d| d.position).collect();
        assert_eq!(positions, vec![200, 201, 202, 300, 301, 302]);
    }

    #[test]
    fn test_overlap_scores_and_commits() {
        let mut board = orchard();
        let mut sink = RecordingSink::new();
        board.place_card(&card(0, [Apple; 6], 0), true, &mut sink);

        // shift down one row: cells 100,101,200,201 overlap apples
        let next = card(1, [Apple; 6], 100);
        let deltas = board.calc_placement(&next);
        let gained: i32 = deltas.iter().map(|d| d.diff).sum();
        assert_eq!(gained, 4);

        assert!(board.place_card(&next, false, &mut sink));
        assert_eq!(board.cell(100).unwrap().score, 1);
        assert_eq!(board.cell(300).unwrap().score, 0);
        assert_eq!(board.board_score(), 4);
        assert_eq!(board.placed().len(), 2);
    }

    #[test]
    fn test_overlapping_rot_is_invalid() {
        let mut board = orchard();
        let mut sink = RecordingSink::new();
        board.place_card(&card(0, [Apple; 6], 0), true, &mut sink);
        // pear on apple at 0 and 1 makes rot there
        board.place_card(&card(1, [Pear, Pear, Apple, Apple, Apple, Apple], 0), false, &mut sink);
        assert_eq!(board.rot_count(), 2);
        assert!(board.cell(0).unwrap().is_rot());

        let probe = card(2, [Apple; 6], 0);
        let deltas = board.calc_placement(&probe);
        assert_eq!(deltas[0].projection, Projection::Invalid);
        assert_eq!(board.check_placement(&deltas), Err(Rejection::OverlapsRot));

        let cells = board.cells().clone();
        assert!(!board.place_card(&probe, false, &mut sink));
        assert_eq!(board.cells(), &cells);
    }

    #[test]
    fn test_rot_cap() {
        let mut board = orchard();
        let mut sink = RecordingSink::new();
        board.place_card(&card(0, [Apple; 6], 0), true, &mut sink);

        // three mismatches in one go exceeds the cap of two
        let greedy = card(1, [Pear, Pear, Pear, Apple, Apple, Apple], 0);
        let deltas = board.calc_placement(&greedy);
        assert_eq!(
            board.check_placement(&deltas),
            Err(Rejection::RotCapExceeded { current: 0, added: 3, cap: 2 })
        );

        let one = card(2, [Pear, Apple, Apple, Apple, Apple, Apple], 0);
        assert!(board.place_card(&one, false, &mut sink));
        let two = card(3, [Pear, Apple, Apple, Apple, Apple, Apple], 100);
        assert!(board.place_card(&two, false, &mut sink));
        assert_eq!(board.rot_count(), 2);

        // a single further rot is refused even though the rest matches
        let three = card(4, [Pear, Apple, Apple, Apple, Apple, Apple], 1);
        assert!(!board.place_card(&three, false, &mut sink));
        assert!(sink.last().unwrap().message.contains("at most 2"));
    }

    #[test]
    fn test_rot_cell_score() {
        let mut board = orchard();
        let mut sink = RecordingSink::new();
        board.place_card(&card(0, [Apple; 6], 0), true, &mut sink);
        board.place_card(&card(1, [Apple; 6], 0), false, &mut sink);
        assert_eq!(board.cell(0).unwrap().score, 1);

        let deltas = board.calc_placement(&card(2, [Plum, Apple, Apple, Apple, Apple, Apple], 0));
        assert_eq!(deltas[0].score, ROT_SCORE);
        assert_eq!(deltas[0].diff, ROT_SCORE - 1);
    }

    #[test]
    fn test_init_clears_everything() {
        let mut board = orchard();
        let mut sink = RecordingSink::new();
        board.place_card(&card(0, [Apple; 6], 0), true, &mut sink);
        board.place_card(&card(1, [Pear, Apple, Apple, Apple, Apple, Apple], 0), false, &mut sink);

        board.init();

        assert!(board.cells().is_empty());
        assert!(board.placed().is_empty());
        assert_eq!(board.rot_count(), 0);
    }
}
