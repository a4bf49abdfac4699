//! Panel types and transition control
//!
//! This module defines the three named panels that share the single chat
//! input, and the controller that mediates transitions between them.
//! The controller is a small finite-state machine with a self-clearing
//! lock: a transition request while one is in flight is dropped, never
//! queued.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One of the three named panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Reflection panel
    Spores,
    /// Composition panel (the default)
    Spiral,
    /// Ignition panel
    Throttle,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spores => write!(f, "spores"),
            Self::Spiral => write!(f, "spiral"),
            Self::Throttle => write!(f, "throttle"),
        }
    }
}

impl Panel {
    /// Parse a panel from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use joojit::panel::Panel;
    ///
    /// let panel = Panel::parse_str("spiral").unwrap();
    /// assert_eq!(panel, Panel::Spiral);
    /// ```
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "spores" => Ok(Self::Spores),
            "spiral" => Ok(Self::Spiral),
            "throttle" => Ok(Self::Throttle),
            other => Err(format!("Unknown panel: {}", other)),
        }
    }

    /// Horizontal offset of this panel in viewport-width units
    ///
    /// Matches the fixed offsets the visual layer applies when sliding
    /// the viewport to the target panel.
    pub fn offset_vw(&self) -> i32 {
        match self {
            Self::Spores => 0,
            Self::Spiral => -100,
            Self::Throttle => -200,
        }
    }

    /// Input placeholder shown while this panel is current
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Spores => "reflect...",
            Self::Spiral => "compose...",
            Self::Throttle => "ignite...",
        }
    }
}

/// An applied panel transition
///
/// Returned by [`PanelController::activate`] so the caller can apply the
/// visual offset and re-render the target panel's stored turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The panel that is now current
    pub panel: Panel,
    /// Offset to apply, in viewport-width units
    pub offset_vw: i32,
}

/// Tracks the current panel and mediates transition requests
///
/// Exactly one panel is current at all times. At most one transition is
/// in flight at a time; the lock clears itself after the settle duration
/// elapses on a spawned timer task.
#[derive(Debug)]
pub struct PanelController {
    current: Panel,
    transitioning: Arc<AtomicBool>,
    settle: Duration,
}

impl PanelController {
    /// Create a controller with the given initial panel and settle duration
    pub fn new(initial: Panel, settle: Duration) -> Self {
        Self {
            current: initial,
            transitioning: Arc::new(AtomicBool::new(false)),
            settle,
        }
    }

    /// The currently visible panel
    pub fn current(&self) -> Panel {
        self.current
    }

    /// Whether a transition is currently in flight
    pub fn is_transitioning(&self) -> bool {
        self.transitioning.load(Ordering::SeqCst)
    }

    /// Request a transition to `target`
    ///
    /// Returns the applied [`Transition`] when the request is accepted.
    /// Returns `None` when a transition is already in flight or `target`
    /// is already current; such requests are dropped, not deferred.
    ///
    /// Must be called from within a tokio runtime: the settle timer that
    /// releases the transition lock runs on a spawned task.
    pub fn activate(&mut self, target: Panel) -> Option<Transition> {
        if self.is_transitioning() || target == self.current {
            tracing::debug!("Dropping panel request for {} (busy or current)", target);
            return None;
        }

        self.transitioning.store(true, Ordering::SeqCst);
        self.current = target;
        tracing::info!("Panel transition to {} ({}vw)", target, target.offset_vw());

        let lock = Arc::clone(&self.transitioning);
        let settle = self.settle;
        tokio::spawn(async move {
            tokio::time::sleep(settle).await;
            lock.store(false, Ordering::SeqCst);
        });

        Some(Transition {
            panel: target,
            offset_vw: target.offset_vw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_display() {
        assert_eq!(Panel::Spores.to_string(), "spores");
        assert_eq!(Panel::Spiral.to_string(), "spiral");
        assert_eq!(Panel::Throttle.to_string(), "throttle");
    }

    #[test]
    fn test_panel_parse_str() {
        assert_eq!(Panel::parse_str("spores").unwrap(), Panel::Spores);
        assert_eq!(Panel::parse_str("spiral").unwrap(), Panel::Spiral);
        assert_eq!(Panel::parse_str("throttle").unwrap(), Panel::Throttle);
    }

    #[test]
    fn test_panel_parse_str_case_insensitive() {
        assert_eq!(Panel::parse_str("SPIRAL").unwrap(), Panel::Spiral);
        assert_eq!(Panel::parse_str("Throttle").unwrap(), Panel::Throttle);
    }

    #[test]
    fn test_panel_parse_str_invalid() {
        assert!(Panel::parse_str("vortex").is_err());
        assert!(Panel::parse_str("").is_err());
    }

    #[test]
    fn test_panel_offsets() {
        assert_eq!(Panel::Spores.offset_vw(), 0);
        assert_eq!(Panel::Spiral.offset_vw(), -100);
        assert_eq!(Panel::Throttle.offset_vw(), -200);
    }

    #[test]
    fn test_panel_placeholders() {
        assert_eq!(Panel::Spores.placeholder(), "reflect...");
        assert_eq!(Panel::Spiral.placeholder(), "compose...");
        assert_eq!(Panel::Throttle.placeholder(), "ignite...");
    }

    #[tokio::test]
    async fn test_activate_same_panel_is_noop() {
        let mut controller = PanelController::new(Panel::Spiral, Duration::from_millis(10));
        assert!(controller.activate(Panel::Spiral).is_none());
        assert_eq!(controller.current(), Panel::Spiral);
        assert!(!controller.is_transitioning());
    }

    #[tokio::test]
    async fn test_activate_applies_offset_and_updates_current() {
        let mut controller = PanelController::new(Panel::Spiral, Duration::from_millis(10));
        let transition = controller.activate(Panel::Throttle).expect("transition");
        assert_eq!(transition.panel, Panel::Throttle);
        assert_eq!(transition.offset_vw, -200);
        assert_eq!(controller.current(), Panel::Throttle);
        assert!(controller.is_transitioning());
    }

    #[tokio::test]
    async fn test_activate_during_transition_is_dropped() {
        let mut controller = PanelController::new(Panel::Spiral, Duration::from_millis(50));
        assert!(controller.activate(Panel::Spores).is_some());
        // Second request before the settle elapses is dropped, not deferred.
        assert!(controller.activate(Panel::Throttle).is_none());
        assert_eq!(controller.current(), Panel::Spores);
    }

    #[tokio::test]
    async fn test_transition_lock_clears_after_settle() {
        let mut controller = PanelController::new(Panel::Spiral, Duration::from_millis(20));
        assert!(controller.activate(Panel::Spores).is_some());
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!controller.is_transitioning());
        assert!(controller.activate(Panel::Throttle).is_some());
        assert_eq!(controller.current(), Panel::Throttle);
    }
}
