use std::path::Path;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::dataset;
use crate::engine::EngineError;
use crate::engine::range::LevelRange;
use crate::engine::store::EntryStore;
use crate::engine::weights::Feedback;
use crate::session::drill::DrillSession;
use crate::ui::theme::Theme;

pub struct App {
    pub session: DrillSession,
    pub config: Config,
    pub theme: &'static Theme,
    /// Whether pinyin and meanings are visible; navigation hides them again.
    pub reveal: bool,
    /// Transient message for the status line (e.g. a rejected range change).
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, seed: Option<u64>) -> Result<Self> {
        let rows = match &config.dataset {
            Some(path) => dataset::load_from_path(Path::new(path))?,
            None => dataset::load_default()?,
        };
        let store = EntryStore::from_rows(rows)?;
        let range = LevelRange::new(config.min_level, config.max_level)?;

        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let session = DrillSession::new(store, range, rng)?;

        Ok(Self {
            session,
            config,
            theme,
            reveal: false,
            status: None,
            should_quit: false,
        })
    }

    fn after_navigation(&mut self, result: Result<(), EngineError>) {
        self.reveal = false;
        self.status = result.err().map(|err| err.to_string());
    }

    pub fn next_entry(&mut self) {
        let result = self.session.step_forward();
        self.after_navigation(result);
    }

    pub fn prev_entry(&mut self) {
        let result = self.session.step_backward();
        self.after_navigation(result);
    }

    pub fn first_entry(&mut self) {
        let result = self.session.jump_to_first();
        self.after_navigation(result);
    }

    pub fn newest_entry(&mut self) {
        let result = self.session.jump_to_newest();
        self.after_navigation(result);
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal = !self.reveal;
        self.status = None;
    }

    /// Mark the entry on screen as needing more practice; pressing again
    /// clears the mark.
    pub fn toggle_mark_more(&mut self) {
        let next = if self.session.pending_feedback() == Feedback::Increase {
            Feedback::Neutral
        } else {
            Feedback::Increase
        };
        self.session.set_feedback(next);
    }

    pub fn toggle_mark_less(&mut self) {
        let next = if self.session.pending_feedback() == Feedback::Decrease {
            Feedback::Neutral
        } else {
            Feedback::Decrease
        };
        self.session.set_feedback(next);
    }

    pub fn set_max_level(&mut self, level: u8) {
        self.status = self
            .session
            .set_max_level(level)
            .err()
            .map(|err| err.to_string());
    }

    pub fn lower_min_level(&mut self) {
        let min = self.session.range().min();
        self.status = self
            .session
            .set_min_level(min.saturating_sub(1))
            .err()
            .map(|err| err.to_string());
    }

    pub fn raise_min_level(&mut self) {
        let min = self.session.range().min();
        self.status = self
            .session
            .set_min_level(min + 1)
            .err()
            .map(|err| err.to_string());
    }
}
