//! Session controller: owns the current Session, its store and the
//! in-flight draw guard.
//!
//! Every mutation is computed as a new Session, written through the store,
//! and only then swapped in. A failed write leaves the old Session current.

use super::config::GachaConfig;
use super::error::{GachaError, Result};
use super::session::{parse_budget, Phase, Session};
use crate::draw::{Item, RandomSource, WeightTable};
use crate::storage::SessionStore;
use chrono::Utc;
use log::{debug, error, info, warn};
use std::time::{Duration, Instant};

pub struct GachaMachine<S: SessionStore> {
    session: Session,
    store: S,
    table: WeightTable,
    rng: Box<dyn RandomSource>,
    config: GachaConfig,
    spin_started: Option<Instant>,
    recovered_from_corrupt: bool,
}

impl<S: SessionStore> GachaMachine<S> {
    /// Reads the stored Session. Nothing stored gives a fresh Session; an
    /// unreadable record is discarded and also gives a fresh Session.
    pub fn open(
        mut store: S,
        table: WeightTable,
        rng: Box<dyn RandomSource>,
        config: GachaConfig,
    ) -> Result<Self> {
        let mut recovered_from_corrupt = false;
        let session = match store.load() {
            Ok(Some(session)) => {
                info!(
                    "Restored session: {}/{} draws used, {} items",
                    session.used(),
                    session.total_budget(),
                    session.inventory_count()
                );
                session
            }
            Ok(None) => Session::new(),
            Err(GachaError::CorruptPersistedState(reason)) => {
                warn!("Discarding unreadable session record: {reason}");
                store.clear()?;
                recovered_from_corrupt = true;
                Session::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            session,
            store,
            table,
            rng,
            config,
            spin_started: None,
            recovered_from_corrupt,
        })
    }

    pub fn configure(&mut self, budget: i64) -> Result<&Session> {
        let next = self.session.configure(budget, self.config.max_budget)?;
        self.commit(next)?;
        info!("Configured session with {budget} draws");
        Ok(&self.session)
    }

    /// Configures from setup-form text.
    pub fn configure_input(&mut self, input: &str) -> Result<&Session> {
        if self.session.is_configured() {
            return Err(GachaError::AlreadyConfigured);
        }
        let budget = parse_budget(input, self.config.max_budget)?;
        self.configure(budget as i64)
    }

    /// Draws immediately, skipping the suspense delay.
    pub fn draw(&mut self) -> Result<Item> {
        if self.spin_started.is_some() {
            return Err(GachaError::DrawInFlight);
        }
        self.commit_draw()
    }

    /// Starts a suspense draw. The item is committed by `poll_spin` once the
    /// configured delay has passed.
    pub fn begin_spin(&mut self, now: Instant) -> Result<()> {
        if self.spin_started.is_some() {
            return Err(GachaError::DrawInFlight);
        }
        self.check_can_draw()?;
        self.spin_started = Some(now);
        debug!("Spin started");
        Ok(())
    }

    /// Commits the pending draw if its delay has elapsed.
    pub fn poll_spin(&mut self, now: Instant) -> Option<Result<Item>> {
        let started = self.spin_started?;
        if now.saturating_duration_since(started) < self.config.spin_delay {
            return None;
        }
        self.spin_started = None;
        Some(self.commit_draw())
    }

    pub fn is_spinning(&self) -> bool {
        self.spin_started.is_some()
    }

    /// Fraction of the suspense delay elapsed, while a spin is pending.
    pub fn spin_progress(&self, now: Instant) -> Option<f64> {
        let started = self.spin_started?;
        if self.config.spin_delay == Duration::ZERO {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f64();
        Some((elapsed / self.config.spin_delay.as_secs_f64()).min(1.0))
    }

    /// Wipes all progress, including a pending spin.
    pub fn reset(&mut self) -> Result<&Session> {
        if let Err(e) = self.store.clear() {
            error!("Failed to clear stored session: {e}");
            return Err(e);
        }
        self.spin_started = None;
        self.session = Session::reset();
        info!("Session reset");
        Ok(&self.session)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn table(&self) -> &WeightTable {
        &self.table
    }

    pub fn config(&self) -> &GachaConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn spins_left(&self) -> u32 {
        self.session.spins_left()
    }

    pub fn inventory_count(&self) -> usize {
        self.session.inventory_count()
    }

    /// True when the draw action should be enabled.
    pub fn can_draw(&self) -> bool {
        !self.is_spinning() && self.session.can_draw()
    }

    pub fn needs_confirmation(&self, budget: u32) -> bool {
        self.config.needs_confirmation(budget)
    }

    /// True when `open` found an unreadable record and started over.
    pub fn recovered_from_corrupt(&self) -> bool {
        self.recovered_from_corrupt
    }

    fn check_can_draw(&self) -> Result<()> {
        match self.session.phase() {
            Phase::Unconfigured => Err(GachaError::NotConfigured),
            Phase::Exhausted => Err(GachaError::BudgetExhausted {
                budget: self.session.total_budget(),
            }),
            Phase::Ready { .. } => Ok(()),
        }
    }

    fn commit_draw(&mut self) -> Result<Item> {
        let now_ms = Utc::now().timestamp_millis();
        let (next, item) = self
            .session
            .draw(&self.table, self.rng.as_mut(), now_ms)?;
        self.commit(next)?;

        debug!("Drew {} ({})", item.name, item.rarity.name());
        if self.session.is_exhausted() {
            info!(
                "All {} draws used; collection holds {} items",
                self.session.total_budget(),
                self.session.inventory_count()
            );
        }
        Ok(item)
    }

    fn commit(&mut self, next: Session) -> Result<()> {
        if let Err(e) = self.store.save(&next) {
            error!("Failed to save session: {e}");
            return Err(e);
        }
        self.session = next;
        Ok(())
    }
}
