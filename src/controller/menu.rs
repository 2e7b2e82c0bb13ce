// SPDX-License-Identifier: MPL-2.0
//! Language menu lifecycle: `Closed -> Open -> Closing -> Closed`.
//!
//! Entering `Closing` hands out a [`ClosingTicket`]. The menu only reaches
//! `Closed` when the most recent ticket comes back after its deadline;
//! re-entering `Closing` invalidates every earlier ticket.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
    Closing,
}

/// Handle for one scheduled closing completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosingTicket {
    epoch: u64,
}

/// Result of a closing timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// The menu is now `Closed`.
    Closed,
    /// The ticket was superseded or the menu is no longer closing.
    Stale,
    /// The ticket is current but fired before its deadline; wait this long.
    Early(Duration),
}

#[derive(Debug, Clone)]
pub struct LanguageMenu {
    state: MenuState,
    close_delay: Duration,
    epoch: u64,
    deadline: Option<Instant>,
}

impl LanguageMenu {
    #[must_use]
    pub fn new(close_delay: Duration) -> Self {
        Self {
            state: MenuState::Closed,
            close_delay,
            epoch: 0,
            deadline: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn close_delay(&self) -> Duration {
        self.close_delay
    }

    /// Whether the dropdown is part of the view tree.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state != MenuState::Closed
    }

    /// Whether the dropdown accepts selections.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Activates the menu button. Opens a closed menu; otherwise (re)starts
    /// closing and returns the ticket to schedule.
    pub fn toggle(&mut self, now: Instant) -> Option<ClosingTicket> {
        match self.state {
            MenuState::Closed => {
                self.state = MenuState::Open;
                tracing::debug!("language menu opened");
                None
            }
            MenuState::Open | MenuState::Closing => Some(self.begin_closing(now)),
        }
    }

    /// Starts closing after a selection. No-op unless `Open`.
    pub fn close_after_selection(&mut self, now: Instant) -> Option<ClosingTicket> {
        self.is_interactive().then(|| self.begin_closing(now))
    }

    /// Handles a closing timer firing at `now`.
    pub fn timer_elapsed(&mut self, ticket: ClosingTicket, now: Instant) -> TimerOutcome {
        if self.state != MenuState::Closing || ticket.epoch != self.epoch {
            return TimerOutcome::Stale;
        }

        if let Some(deadline) = self.deadline {
            if now < deadline {
                return TimerOutcome::Early(deadline - now);
            }
        }

        self.state = MenuState::Closed;
        self.deadline = None;
        tracing::debug!("language menu closed");
        TimerOutcome::Closed
    }

    fn begin_closing(&mut self, now: Instant) -> ClosingTicket {
        self.epoch += 1;
        self.state = MenuState::Closing;
        self.deadline = Some(now + self.close_delay);
        tracing::debug!(epoch = self.epoch, "language menu closing");
        ClosingTicket { epoch: self.epoch }
    }
}

impl Default for LanguageMenu {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::config::DEFAULT_MENU_CLOSE_DELAY_MS,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(400);

    #[test]
    fn full_cycle_visits_states_in_order() {
        let mut menu = LanguageMenu::new(DELAY);
        let t0 = Instant::now();
        let mut seen = vec![menu.state()];

        assert!(menu.toggle(t0).is_none());
        seen.push(menu.state());

        let ticket = menu.close_after_selection(t0).expect("open menu closes");
        seen.push(menu.state());

        assert_eq!(menu.timer_elapsed(ticket, t0 + DELAY), TimerOutcome::Closed);
        seen.push(menu.state());

        assert_eq!(
            seen,
            vec![
                MenuState::Closed,
                MenuState::Open,
                MenuState::Closing,
                MenuState::Closed
            ]
        );
    }

    #[test]
    fn timer_before_deadline_does_not_close() {
        let mut menu = LanguageMenu::new(DELAY);
        let t0 = Instant::now();
        menu.toggle(t0);
        let ticket = menu.toggle(t0).expect("closing");

        let early = t0 + Duration::from_millis(100);
        assert_eq!(
            menu.timer_elapsed(ticket, early),
            TimerOutcome::Early(Duration::from_millis(300))
        );
        assert_eq!(menu.state(), MenuState::Closing);
    }

    #[test]
    fn retoggle_while_closing_resets_timer() {
        let mut menu = LanguageMenu::new(DELAY);
        let t0 = Instant::now();
        menu.toggle(t0);
        let first = menu.toggle(t0).expect("closing");

        let t1 = t0 + Duration::from_millis(200);
        let second = menu.toggle(t1).expect("closing again");
        assert_eq!(menu.state(), MenuState::Closing);

        // The first timer is now stale even after its own deadline.
        assert_eq!(menu.timer_elapsed(first, t0 + DELAY), TimerOutcome::Stale);
        assert_eq!(menu.state(), MenuState::Closing);

        assert_eq!(menu.timer_elapsed(second, t1 + DELAY), TimerOutcome::Closed);
    }

    #[test]
    fn stale_timer_after_reopen_does_not_close() {
        let mut menu = LanguageMenu::new(DELAY);
        let t0 = Instant::now();
        menu.toggle(t0);
        let ticket = menu.toggle(t0).expect("closing");
        assert_eq!(menu.timer_elapsed(ticket, t0 + DELAY), TimerOutcome::Closed);

        // Reopen, then let a duplicate delivery of the old ticket arrive.
        menu.toggle(t0 + DELAY);
        assert_eq!(
            menu.timer_elapsed(ticket, t0 + DELAY * 2),
            TimerOutcome::Stale
        );
        assert_eq!(menu.state(), MenuState::Open);
    }

    #[test]
    fn selection_is_ignored_unless_open() {
        let mut menu = LanguageMenu::new(DELAY);
        let t0 = Instant::now();
        assert!(menu.close_after_selection(t0).is_none());
        assert_eq!(menu.state(), MenuState::Closed);

        menu.toggle(t0);
        menu.toggle(t0);
        assert!(menu.close_after_selection(t0).is_none());
        assert_eq!(menu.state(), MenuState::Closing);
    }

    #[test]
    fn visibility_follows_state() {
        let mut menu = LanguageMenu::new(DELAY);
        let t0 = Instant::now();
        assert!(!menu.is_visible());
        menu.toggle(t0);
        assert!(menu.is_visible() && menu.is_interactive());
        menu.toggle(t0);
        assert!(menu.is_visible() && !menu.is_interactive());
    }

    #[test]
    fn zero_delay_closes_immediately() {
        let mut menu = LanguageMenu::new(Duration::ZERO);
        let t0 = Instant::now();
        menu.toggle(t0);
        let ticket = menu.toggle(t0).expect("closing");
        assert_eq!(menu.timer_elapsed(ticket, t0), TimerOutcome::Closed);
    }
}
