//! The game session phase machine.

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::achievement::Achievement;
use super::phase::{HandSlot, Phase};
use super::view::SessionView;
use crate::cards::{Card, CardCatalog, Orientation, TREES_PER_CARD};
use crate::core::{CardId, GameRng, IdAllocator, OrchardConfig, PileShuffler};
use crate::error::{EngineError, EngineResult};
use crate::orchard::{Orchard, Placement};
use crate::ports::{
    AnimationSignal, NoAnimation, NotificationSink, Severity, SilentSink, TransitionStatus,
    TransitionToken,
};

/// A card moved from the pile into a hand slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drawn {
    pub slot: HandSlot,
    pub card: CardId,
}

/// Cards drawn by one `draw` or `complete_transition` call.
pub type DrawnCards = SmallVec<[Drawn; 2]>;

/// One game of Orchard and the collaborators it reports to.
///
/// The session owns its board and all card state. Drivers call the action
/// methods in phase order; each action checks its phase and fails with
/// [`EngineError::PhaseMismatch`] when called out of turn.
///
/// ## Example
///
/// ```
/// use orchard::core::OrchardConfig;
/// use orchard::session::{GameSession, HandSlot, Phase};
///
/// let mut session = GameSession::new(OrchardConfig::default().with_seed(3)).unwrap();
/// session.start_game().unwrap();
/// assert_eq!(session.phase(), Some(Phase::Draw));
///
/// session.draw().unwrap();
/// assert_eq!(session.phase(), Some(Phase::Pick));
///
/// session.pick(HandSlot::Left).unwrap();
/// assert_eq!(session.phase(), Some(Phase::Play));
/// ```
pub struct GameSession<N = SilentSink, A = NoAnimation, R = GameRng> {
    config: OrchardConfig,
    catalog: CardCatalog,
    orchard: Orchard,

    notifier: N,
    animation: A,
    shuffler: R,

    ids: IdAllocator,
    phase: Option<Phase>,
    pile: Vec<Card>,
    hands: [Option<Card>; 2],
    active: Option<HandSlot>,
    pending: Option<(TransitionToken, HandSlot)>,
    next_token: u64,

    total_score: i32,
    transitional_score: i32,
    achievement: Option<Achievement>,
    revision: u64,
}

impl GameSession {
    /// Create a session with silent notices, instant draws, and a seeded
    /// shuffler.
    pub fn new(config: OrchardConfig) -> EngineResult<Self> {
        let shuffler = GameRng::new(config.seed);
        Self::with_ports(config, SilentSink, NoAnimation, shuffler)
    }
}

impl<N, A, R> GameSession<N, A, R>
where
    N: NotificationSink,
    A: AnimationSignal,
    R: PileShuffler,
{
    /// Create a session wired to the given collaborators.
    pub fn with_ports(config: OrchardConfig, notifier: N, animation: A, shuffler: R) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            orchard: Orchard::new(&config),
            catalog: CardCatalog::standard(),
            config,
            notifier,
            animation,
            shuffler,
            ids: IdAllocator::new(),
            phase: None,
            pile: Vec::new(),
            hands: [None, None],
            active: None,
            pending: None,
            next_token: 0,
            total_score: 0,
            transitional_score: 0,
            achievement: None,
            revision: 0,
        })
    }

    // === Observation ===

    #[must_use]
    pub fn config(&self) -> &OrchardConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn orchard(&self) -> &Orchard {
        &self.orchard
    }

    /// Current phase; `None` until the first `start_game`.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    #[must_use]
    pub fn hand(&self, slot: HandSlot) -> Option<&Card> {
        self.hands[slot.index()].as_ref()
    }

    /// Slot holding the picked card.
    #[must_use]
    pub fn active_slot(&self) -> Option<HandSlot> {
        self.active
    }

    /// The picked card.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.active.and_then(|slot| self.hand(slot))
    }

    /// Cards left in the pile.
    #[must_use]
    pub fn pile_len(&self) -> usize {
        self.pile.len()
    }

    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.total_score
    }

    /// Score the active card would add if placed where it is now.
    #[must_use]
    pub fn transitional_score(&self) -> i32 {
        self.transitional_score
    }

    #[must_use]
    pub fn rot_count(&self) -> u32 {
        self.orchard.rot_count()
    }

    /// Tier earned by the last finished game.
    #[must_use]
    pub fn achievement(&self) -> Option<Achievement> {
        self.achievement
    }

    /// Token and target slot of the draw transition being waited on.
    #[must_use]
    pub fn pending_transition(&self) -> Option<(TransitionToken, HandSlot)> {
        self.pending
    }

    /// Bumped on every state change; poll it to know when to re-render.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of everything the presentation layer draws.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            revision: self.revision,
            phase: self.phase,
            left: self.hands[HandSlot::Left.index()].clone(),
            right: self.hands[HandSlot::Right.index()].clone(),
            active: self.active,
            pile_remaining: self.pile.len(),
            cells: self.orchard.cells().clone(),
            total_score: self.total_score,
            transitional_score: self.transitional_score,
            rot_count: self.orchard.rot_count(),
            achievement: self.achievement,
        }
    }

    /// Find a card dealt this game, wherever it is.
    pub fn card(&self, id: CardId) -> EngineResult<&Card> {
        self.pile
            .iter()
            .chain(self.hands.iter().flatten())
            .chain(self.orchard.placed().iter())
            .find(|card| card.id == id)
            .ok_or(EngineError::UnknownCardId(id))
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    // === Actions ===

    /// Deal a fresh game and force the seed card onto the board center.
    ///
    /// Allowed in any phase except `Transition`.
    pub fn start_game(&mut self) -> EngineResult<()> {
        if let Some((token, _)) = self.pending {
            return Err(EngineError::TransitionInFlight(token.0));
        }

        self.total_score = 0;
        self.transitional_score = 0;
        self.achievement = None;
        self.hands = [None, None];
        self.active = None;
        self.orchard.init();

        let mut order: Vec<usize> = (0..self.catalog.len()).collect();
        self.shuffler.shuffle_indices(&mut order);

        let mut pile = Vec::with_capacity(self.config.pile_size);
        for &index in &order[..self.config.pile_size] {
            let definition = self.catalog.get(index as u32)?.clone();
            pile.push(Card::new(self.ids.alloc(), definition));
        }
        self.pile = pile;

        // the seed card comes from the first definition left out of the pile
        let seed_definition = self.catalog.get(order[self.config.pile_size] as u32)?.clone();
        let mut seed = Card::new(self.ids.alloc(), seed_definition);
        seed.rotate(None);
        seed.position = self.config.center();
        let placed = self.orchard.place_card(&seed, true, &mut self.notifier);
        debug_assert!(placed, "forced placement cannot be refused");

        info!(
            seed = self.config.seed,
            pile = self.pile.len(),
            seed_card = seed.definition.index,
            "game started"
        );
        self.set_phase(Phase::Draw, "start_game");
        Ok(())
    }

    /// Fill empty hand slots from the pile, left first.
    ///
    /// Moves to `Pick` once both slots are full or the pile is empty, or to
    /// `Transition` if the animation signal leaves a draw pending.
    pub fn draw(&mut self) -> EngineResult<DrawnCards> {
        self.expect_phase("draw", Phase::Draw)?;
        Ok(self.fill_hands())
    }

    /// Acknowledge the end of a pending draw transition and resume drawing.
    pub fn complete_transition(&mut self, token: TransitionToken) -> EngineResult<DrawnCards> {
        match self.pending {
            Some((pending, _)) if pending == token => {}
            other => {
                return Err(EngineError::StaleTransition {
                    expected: other.map(|(t, _)| t.0),
                    got: token.0,
                })
            }
        }
        self.expect_phase("complete_transition", Phase::Transition)?;

        self.pending = None;
        self.set_phase(Phase::Draw, "complete_transition");
        Ok(self.fill_hands())
    }

    /// Make a hand card active, turned to `Right`.
    pub fn pick(&mut self, slot: HandSlot) -> EngineResult<()> {
        self.expect_phase("pick", Phase::Pick)?;
        let card = self.hands[slot.index()]
            .as_mut()
            .ok_or(EngineError::EmptyHand(slot))?;
        card.rotate(Some(Orientation::Right));

        self.active = Some(slot);
        self.refresh_transitional();
        self.set_phase(Phase::Play, "pick");
        Ok(())
    }

    /// Put the active card back in hand.
    pub fn unpick(&mut self) -> EngineResult<()> {
        self.expect_phase("unpick", Phase::Play)?;
        self.active = None;
        self.transitional_score = 0;
        self.set_phase(Phase::Pick, "unpick");
        Ok(())
    }

    /// Rotate the active card to `target`, or one step clockwise.
    pub fn rotate_active(&mut self, target: Option<Orientation>) -> EngineResult<Orientation> {
        self.expect_phase("rotate_active", Phase::Play)?;
        let orientation = self.active_card_mut()?.rotate(target);
        self.refresh_transitional();
        self.touch();
        Ok(orientation)
    }

    /// Move the active card's top-left corner to `position`.
    ///
    /// Fails if the footprint in the card's current orientation would reach
    /// past the bottom of the board.
    pub fn move_active(&mut self, position: usize) -> EngineResult<()> {
        self.expect_phase("move_active", Phase::Play)?;
        let cells = self.config.board_cells();
        let deck_size = self.config.deck_size;
        let card = self.active_card_mut()?;
        if card.footprint_at(position, deck_size)[TREES_PER_CARD - 1] >= cells {
            return Err(EngineError::PositionOutOfBounds { position, cells });
        }
        card.position = position;
        self.refresh_transitional();
        self.touch();
        Ok(())
    }

    /// Projected board effect of the active card where it is now.
    pub fn preview(&self) -> EngineResult<Placement> {
        self.expect_phase("preview", Phase::Play)?;
        let card = self.active_card().ok_or(EngineError::NoActiveCard)?;
        Ok(self.orchard.calc_placement(card))
    }

    /// Try to commit the active card to the board.
    ///
    /// Returns `Ok(false)` when the rules refuse the placement; the reason has
    /// already gone to the notification sink and nothing else changed.
    pub fn place_card(&mut self) -> EngineResult<bool> {
        self.expect_phase("place_card", Phase::Play)?;
        let slot = self.active.ok_or(EngineError::NoActiveCard)?;
        let card = self.hands[slot.index()]
            .as_ref()
            .ok_or(EngineError::NoActiveCard)?;

        let gain = gain(&self.orchard.calc_placement(card));
        if !self.orchard.place_card(card, false, &mut self.notifier) {
            return Ok(false);
        }

        self.hands[slot.index()] = None;
        self.active = None;
        self.total_score += gain;
        self.transitional_score = 0;

        if self.pile.is_empty() && self.hands.iter().all(Option::is_none) {
            self.finish();
        } else {
            self.set_phase(Phase::Draw, "place_card");
        }
        Ok(true)
    }

    // === Internals ===

    fn expect_phase(&self, action: &'static str, expected: Phase) -> EngineResult<()> {
        if self.phase == Some(expected) {
            Ok(())
        } else {
            Err(EngineError::PhaseMismatch {
                action,
                expected,
                actual: self.phase,
            })
        }
    }

    fn set_phase(&mut self, to: Phase, action: &'static str) {
        debug!(from = ?self.phase, to = %to, action, "phase change");
        self.phase = Some(to);
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn active_card_mut(&mut self) -> EngineResult<&mut Card> {
        let slot = self.active.ok_or(EngineError::NoActiveCard)?;
        self.hands[slot.index()]
            .as_mut()
            .ok_or(EngineError::NoActiveCard)
    }

    fn refresh_transitional(&mut self) {
        self.transitional_score = match self.active_card() {
            Some(card) => gain(&self.orchard.calc_placement(card)),
            None => 0,
        };
    }

    fn fill_hands(&mut self) -> DrawnCards {
        let mut drawn = DrawnCards::new();

        while let Some(slot) = HandSlot::ALL.into_iter().find(|s| self.hands[s.index()].is_none()) {
            let Some(card) = self.pile.pop() else {
                break;
            };
            trace!(card = %card.id, %slot, remaining = self.pile.len(), "draw");
            drawn.push(Drawn { slot, card: card.id });
            self.hands[slot.index()] = Some(card);
            self.touch();

            let token = TransitionToken(self.next_token);
            self.next_token += 1;
            if self.animation.play_draw_transition(slot, token) == TransitionStatus::Pending {
                self.pending = Some((token, slot));
                self.set_phase(Phase::Transition, "draw");
                return drawn;
            }
        }

        self.set_phase(Phase::Pick, "draw");
        drawn
    }

    fn finish(&mut self) {
        let tier = Achievement::for_score(self.total_score);
        self.achievement = Some(tier);
        info!(score = self.total_score, %tier, "game over");
        self.notifier.notify(
            &tier.announcement(self.total_score),
            Severity::Success,
            self.config.notice_duration,
        );
        self.set_phase(Phase::End, "place_card");
    }
}

fn gain(deltas: &Placement) -> i32 {
    deltas.iter().map(|d| d.diff).sum()
}
