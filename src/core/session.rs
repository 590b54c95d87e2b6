//! Session state machine.
//!
//! A `Session` is a value: `configure` and `draw` never mutate the receiver,
//! they return the next Session. The caller commits it (persists, then swaps)
//! or drops it, so a failed operation can never leave a half-applied state.
//!
//! Invariants held by every constructible Session:
//! - `used <= total_budget`
//! - unconfigured implies `total_budget == 0`, `used == 0` and no items
//! - `inventory.len() == used`
//! - item ids are pairwise distinct
//! - `obtained_at` is non-decreasing along the inventory

use super::constants::MIN_BUDGET;
use super::error::{GachaError, Result};
use crate::draw::{select_item, Item, RandomSource, WeightTable};
use std::collections::HashSet;
use uuid::Uuid;

/// Derived view of where a Session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unconfigured,
    Ready { remaining: u32 },
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    is_configured: bool,
    total_budget: u32,
    used: u32,
    /// Append order: oldest first.
    inventory: Vec<Item>,
}

impl Session {
    /// Fresh, unconfigured Session.
    pub fn new() -> Self {
        Self {
            is_configured: false,
            total_budget: 0,
            used: 0,
            inventory: Vec::new(),
        }
    }

    /// Discards everything and returns a fresh unconfigured Session.
    pub fn reset() -> Self {
        Self::new()
    }

    /// Rebuilds a Session from persisted fields, rejecting anything that
    /// breaks an invariant.
    pub fn restore(
        is_configured: bool,
        total_budget: u32,
        used: u32,
        inventory: Vec<Item>,
    ) -> Result<Self> {
        let corrupt = |msg: String| Err(GachaError::CorruptPersistedState(msg));

        if !is_configured && (total_budget != 0 || used != 0 || !inventory.is_empty()) {
            return corrupt("unconfigured session carries draw data".to_string());
        }
        if is_configured && total_budget == 0 {
            return corrupt("configured session has a zero budget".to_string());
        }
        if used > total_budget {
            return corrupt(format!("{used} draws used of a {total_budget} budget"));
        }
        if inventory.len() != used as usize {
            return corrupt(format!(
                "{} items stored for {used} draws",
                inventory.len()
            ));
        }

        let mut ids = HashSet::with_capacity(inventory.len());
        for item in &inventory {
            if !ids.insert(item.id.as_str()) {
                return corrupt(format!("duplicate item id {}", item.id));
            }
        }
        if inventory
            .windows(2)
            .any(|pair| pair[1].obtained_at < pair[0].obtained_at)
        {
            return corrupt("item timestamps go backwards".to_string());
        }

        Ok(Self {
            is_configured,
            total_budget,
            used,
            inventory,
        })
    }

    /// One-shot configuration.
    ///
    /// Fails with `AlreadyConfigured` on a configured Session, otherwise with
    /// `InvalidBudget` unless `1 <= requested <= max_budget`.
    pub fn configure(&self, requested: i64, max_budget: u32) -> Result<Session> {
        if self.is_configured {
            return Err(GachaError::AlreadyConfigured);
        }
        if requested < MIN_BUDGET as i64 || requested > max_budget as i64 {
            return Err(GachaError::InvalidBudget {
                input: requested.to_string(),
                max: max_budget,
            });
        }

        Ok(Self {
            is_configured: true,
            total_budget: requested as u32,
            used: 0,
            inventory: Vec::new(),
        })
    }

    /// Debits one draw and appends the drawn item.
    ///
    /// `now_ms` is clamped so timestamps never go backwards within a Session.
    /// Callers must serialize draws on a Session; there is no internal locking.
    pub fn draw<R: RandomSource + ?Sized>(
        &self,
        table: &WeightTable,
        rng: &mut R,
        now_ms: i64,
    ) -> Result<(Session, Item)> {
        match self.phase() {
            Phase::Unconfigured => return Err(GachaError::NotConfigured),
            Phase::Exhausted => {
                return Err(GachaError::BudgetExhausted {
                    budget: self.total_budget,
                })
            }
            Phase::Ready { .. } => {}
        }

        let obtained_at = self
            .inventory
            .last()
            .map_or(now_ms, |last| now_ms.max(last.obtained_at));
        let mut item = select_item(table, rng, obtained_at);
        while self.inventory.iter().any(|i| i.id == item.id) {
            item.id = Uuid::new_v4().to_string();
        }

        let mut inventory = Vec::with_capacity(self.inventory.len() + 1);
        inventory.extend_from_slice(&self.inventory);
        inventory.push(item.clone());

        let next = Self {
            is_configured: true,
            total_budget: self.total_budget,
            used: self.used + 1,
            inventory,
        };
        Ok((next, item))
    }

    pub fn phase(&self) -> Phase {
        if !self.is_configured {
            Phase::Unconfigured
        } else if self.used >= self.total_budget {
            Phase::Exhausted
        } else {
            Phase::Ready {
                remaining: self.total_budget - self.used,
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.is_configured
    }

    pub fn total_budget(&self) -> u32 {
        self.total_budget
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    /// Items in draw order, oldest first.
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Items newest first, the order the collection is shown in.
    pub fn newest_first(&self) -> impl Iterator<Item = &Item> {
        self.inventory.iter().rev()
    }

    pub fn spins_left(&self) -> u32 {
        self.total_budget - self.used
    }

    pub fn inventory_count(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase() == Phase::Exhausted
    }

    pub fn can_draw(&self) -> bool {
        matches!(self.phase(), Phase::Ready { .. })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses budget text from the setup form. Only plain whole numbers are
/// accepted; `"12.5"`, `"1e3"` and `"12abc"` are all rejected.
pub fn parse_budget(input: &str, max_budget: u32) -> Result<u32> {
    let trimmed = input.trim();
    let invalid = || GachaError::InvalidBudget {
        input: input.to_string(),
        max: max_budget,
    };

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: u64 = trimmed.parse().map_err(|_| invalid())?;
    if value < MIN_BUDGET as u64 || value > max_budget as u64 {
        return Err(invalid());
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_BUDGET;
    use crate::draw::{Rarity, ScriptedSource};

    fn configured(budget: i64) -> Session {
        Session::new().configure(budget, MAX_BUDGET).unwrap()
    }

    fn draw_once(session: &Session, now_ms: i64) -> (Session, Item) {
        let mut source = ScriptedSource::new(vec![0.5, 0.1]);
        session
            .draw(&WeightTable::reference(), &mut source, now_ms)
            .unwrap()
    }

    #[test]
    fn test_new_session_is_unconfigured() {
        let session = Session::new();
        assert!(!session.is_configured());
        assert_eq!(session.total_budget(), 0);
        assert_eq!(session.used(), 0);
        assert!(session.inventory().is_empty());
        assert_eq!(session.phase(), Phase::Unconfigured);
    }

    #[test]
    fn test_configure_sets_budget() {
        let session = configured(10);
        assert!(session.is_configured());
        assert_eq!(session.total_budget(), 10);
        assert_eq!(session.used(), 0);
        assert!(session.inventory().is_empty());
        assert_eq!(session.phase(), Phase::Ready { remaining: 10 });
    }

    #[test]
    fn test_configure_rejects_out_of_range() {
        for bad in [0, -5, MAX_BUDGET as i64 + 1, i64::MAX] {
            let err = Session::new().configure(bad, MAX_BUDGET).unwrap_err();
            assert!(matches!(err, GachaError::InvalidBudget { .. }), "{bad}");
        }
        assert!(Session::new().configure(MAX_BUDGET as i64, MAX_BUDGET).is_ok());
    }

    #[test]
    fn test_configure_lower_bound_is_min_budget() {
        assert!(Session::new().configure(MIN_BUDGET as i64, MAX_BUDGET).is_ok());
        assert!(Session::new()
            .configure(MIN_BUDGET as i64 - 1, MAX_BUDGET)
            .is_err());
        assert_eq!(parse_budget(&MIN_BUDGET.to_string(), MAX_BUDGET).unwrap(), MIN_BUDGET);
    }

    #[test]
    fn test_configure_twice_fails() {
        let session = configured(3);
        let err = session.configure(5, MAX_BUDGET).unwrap_err();
        assert!(matches!(err, GachaError::AlreadyConfigured));
        assert_eq!(session.total_budget(), 3);
    }

    #[test]
    fn test_draw_requires_configuration() {
        let mut source = ScriptedSource::new(vec![0.0]);
        let err = Session::new()
            .draw(&WeightTable::reference(), &mut source, 0)
            .unwrap_err();
        assert!(matches!(err, GachaError::NotConfigured));
    }

    #[test]
    fn test_draw_debits_and_appends() {
        let session = configured(2);
        let (after, item) = draw_once(&session, 100);
        assert_eq!(after.used(), 1);
        assert_eq!(after.inventory(), &[item.clone()]);
        assert_eq!(item.rarity, Rarity::Rare);
        assert_eq!(item.name, "Silver Ring");
        // Receiver untouched
        assert_eq!(session.used(), 0);
    }

    #[test]
    fn test_draw_until_exhausted() {
        let mut session = configured(3);
        for _ in 0..3 {
            session = draw_once(&session, 0).0;
        }
        assert!(session.is_exhausted());
        assert_eq!(session.spins_left(), 0);

        let before = session.clone();
        let mut source = ScriptedSource::new(vec![0.0]);
        let err = session
            .draw(&WeightTable::reference(), &mut source, 0)
            .unwrap_err();
        assert!(matches!(err, GachaError::BudgetExhausted { budget: 3 }));
        assert_eq!(session, before);
    }

    #[test]
    fn test_timestamps_never_go_backwards() {
        let session = configured(3);
        let (s1, first) = draw_once(&session, 5_000);
        let (_, second) = draw_once(&s1, 4_000);
        assert_eq!(first.obtained_at, 5_000);
        assert_eq!(second.obtained_at, 5_000);
    }

    #[test]
    fn test_newest_first() {
        let mut session = configured(3);
        for t in 1..=3 {
            session = draw_once(&session, t).0;
        }
        let times: Vec<i64> = session.newest_first().map(|i| i.obtained_at).collect();
        assert_eq!(times, vec![3, 2, 1]);
    }

    #[test]
    fn test_reset_returns_fresh_session() {
        let (drawn, _) = draw_once(&configured(4), 0);
        assert!(drawn.is_configured());
        assert_eq!(Session::reset(), Session::new());
    }

    #[test]
    fn test_restore_rejects_broken_invariants() {
        let (drawn, item) = draw_once(&configured(2), 0);
        assert!(Session::restore(true, 2, 1, drawn.inventory().to_vec()).is_ok());

        let cases = vec![
            (false, 2, 0, vec![]),
            (false, 0, 0, vec![item.clone()]),
            (true, 0, 0, vec![]),
            (true, 1, 2, vec![item.clone(), item.clone()]),
            (true, 2, 2, vec![item.clone()]),
            (true, 3, 2, vec![item.clone(), item.clone()]),
        ];
        for (configured, budget, used, inventory) in cases {
            let err = Session::restore(configured, budget, used, inventory).unwrap_err();
            assert!(matches!(err, GachaError::CorruptPersistedState(_)));
        }
    }

    #[test]
    fn test_restore_rejects_backwards_timestamps() {
        let (s1, _) = draw_once(&configured(2), 10);
        let (s2, _) = draw_once(&s1, 20);
        let mut items = s2.inventory().to_vec();
        items.swap(0, 1);
        assert!(Session::restore(true, 2, 2, items).is_err());
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("10", MAX_BUDGET).unwrap(), 10);
        assert_eq!(parse_budget(" 42 ", MAX_BUDGET).unwrap(), 42);
        assert_eq!(parse_budget("9999", MAX_BUDGET).unwrap(), 9999);
        for bad in ["", "0", "-3", "12.5", "1e3", "12abc", "abc", "10000", "+5"] {
            assert!(parse_budget(bad, MAX_BUDGET).is_err(), "{bad:?}");
        }
    }
}
