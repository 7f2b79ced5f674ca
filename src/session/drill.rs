use rand::rngs::SmallRng;

use crate::engine::EngineError;
use crate::engine::range::LevelRange;
use crate::engine::sampler;
use crate::engine::store::{Entry, EntryId, EntryStore};
use crate::engine::weights::{Feedback, WeightTable};
use crate::session::timeline::Timeline;

/// One drill session: the word list, its weights, the active level range,
/// the bounded history, and the rng, owned together. All state mutation goes
/// through the methods below; the engine pieces never reach the UI mutably.
///
/// Feedback is two-phase. `set_feedback` only records a flag for the entry
/// currently on screen; the flag is committed to the weight table exactly
/// once, by the next navigation away from that entry, and then reset.
pub struct DrillSession {
    store: EntryStore,
    weights: WeightTable,
    range: LevelRange,
    timeline: Timeline,
    pending: Feedback,
    rng: SmallRng,
}

impl DrillSession {
    /// Build a session and show a first random draw.
    pub fn new(store: EntryStore, range: LevelRange, mut rng: SmallRng) -> Result<Self, EngineError> {
        let weights = WeightTable::new(store.len());
        let first = sampler::draw(&store, &weights, range, &mut rng)?;
        let mut timeline = Timeline::default();
        timeline.push(first);
        Ok(Self {
            store,
            weights,
            range,
            timeline,
            pending: Feedback::Neutral,
            rng,
        })
    }

    pub fn current(&self) -> Result<&Entry, EngineError> {
        let id = self.timeline.current().ok_or(EngineError::EmptyTimeline)?;
        Ok(self.store.get(id))
    }

    /// Overwrite the pending flag for the entry on screen. Last write wins;
    /// weights are untouched until the learner navigates away.
    pub fn set_feedback(&mut self, feedback: Feedback) {
        self.pending = feedback;
    }

    pub fn pending_feedback(&self) -> Feedback {
        self.pending
    }

    pub fn range(&self) -> LevelRange {
        self.range
    }

    pub fn set_min_level(&mut self, level: u8) -> Result<(), EngineError> {
        self.range.set_min(level)
    }

    pub fn set_max_level(&mut self, level: u8) -> Result<(), EngineError> {
        self.range.set_max(level)
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The single place a weight changes. `departing` is captured before any
    /// timeline mutation so that after an eviction the bump still lands on
    /// the entry that was actually on screen.
    fn commit_departure(&mut self, departing: EntryId) {
        self.weights.bump(departing, self.pending);
        self.pending = Feedback::Neutral;
    }

    /// Move toward the oldest entry. At the head the cursor stays put, but
    /// leaving still flushes the pending flag.
    pub fn step_backward(&mut self) -> Result<(), EngineError> {
        let departing = self.timeline.current().ok_or(EngineError::EmptyTimeline)?;
        self.timeline.step_back();
        self.commit_departure(departing);
        Ok(())
    }

    /// Move toward the newest entry, drawing a fresh one when already at the
    /// tail. The draw samples the weights before the departing entry's flag
    /// is committed.
    pub fn step_forward(&mut self) -> Result<(), EngineError> {
        let departing = self.timeline.current().ok_or(EngineError::EmptyTimeline)?;
        if !self.timeline.step_forward() {
            let id = sampler::draw(&self.store, &self.weights, self.range, &mut self.rng)?;
            self.timeline.push(id);
        }
        self.commit_departure(departing);
        Ok(())
    }

    pub fn jump_to_first(&mut self) -> Result<(), EngineError> {
        let departing = self.timeline.current().ok_or(EngineError::EmptyTimeline)?;
        self.timeline.jump_to_oldest();
        self.commit_departure(departing);
        Ok(())
    }

    /// Draw and append unconditionally, regardless of where the cursor sits.
    pub fn jump_to_newest(&mut self) -> Result<(), EngineError> {
        let departing = self.timeline.current().ok_or(EngineError::EmptyTimeline)?;
        let id = sampler::draw(&self.store, &self.weights, self.range, &mut self.rng)?;
        self.timeline.push(id);
        self.commit_departure(departing);
        Ok(())
    }
}
