use crate::motion::ShakeConfig;

use super::policy::{
    InputRules, TextChange, evaluate_text_change, is_backspace_on_empty, proposed_delete,
    proposed_insert,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MaskTicket(u64);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ShakeTicket(u64);

/// Reveal window for the most recently typed password character.
///
/// Only the ticket handed out by the latest `arm` can expire the window.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MaskDelay {
    active: bool,
    generation: u64,
}

impl MaskDelay {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn arm(&mut self) -> MaskTicket {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        MaskTicket(self.generation)
    }

    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.active = false;
    }

    pub fn expire(&mut self, ticket: MaskTicket) -> bool {
        if !self.active || ticket.0 != self.generation {
            return false;
        }
        self.active = false;
        true
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ShakeState {
    generation: u64,
    duration_ms: u64,
    active: bool,
}

impl ShakeState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

/// Widget-owned state: focus, the mask delay flag and the shake animation.
///
/// The code value belongs to the owner. `value` is the owner's last rendered
/// value plus the edits proposed since, so keystrokes that arrive before the
/// next frame build on each other.
#[derive(Clone, Debug, Default)]
pub struct PinSession {
    focused: bool,
    mounted: bool,
    value: String,
    mask: MaskDelay,
    shake: ShakeState,
    shake_config: ShakeConfig,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AcceptedChange {
    pub change: TextChange,
    pub mask_ticket: Option<MaskTicket>,
}

impl PinSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn mask_delay(&self) -> bool {
        self.mask.is_active()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn shake(&self) -> ShakeState {
        self.shake
    }

    /// Returns true when the focus state actually changed.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        let changed = self.focused != focused;
        self.focused = focused;
        changed
    }

    /// Returns true exactly once, on the first render.
    pub fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    /// Adopts the value the owner rendered. Edits proposed before this frame
    /// that the owner did not take are dropped.
    pub fn sync_value(&mut self, rendered: &str) {
        if self.value != rendered {
            self.value.clear();
            self.value.push_str(rendered);
        }
    }

    /// Runs the input policy against the live value and updates the mask
    /// delay. A returned ticket must be expired after the reveal window.
    pub fn text_change(&mut self, raw: &str, rules: InputRules) -> AcceptedChange {
        let change = evaluate_text_change(&self.value, raw, rules);
        let mask_ticket = if change.inserted {
            Some(self.mask.arm())
        } else {
            self.mask.clear();
            None
        };
        self.value.clone_from(&change.code);
        AcceptedChange {
            change,
            mask_ticket,
        }
    }

    /// Appends typed or pasted text. `None` when the field is already full.
    pub fn insert(&mut self, text: &str, rules: InputRules) -> Option<AcceptedChange> {
        let next = proposed_insert(&self.value, text, rules.code_length)?;
        Some(self.text_change(&next, rules))
    }

    /// Removes the last character. `None` when the value is empty.
    pub fn delete_backward(&mut self, rules: InputRules) -> Option<AcceptedChange> {
        let next = proposed_delete(&self.value)?;
        Some(self.text_change(&next, rules))
    }

    pub fn expire_mask(&mut self, ticket: MaskTicket) -> bool {
        self.mask.expire(ticket)
    }

    pub fn cancel_mask(&mut self) {
        self.mask.clear();
    }

    /// Whether a key press asks the owner to handle backspace on an empty code.
    pub fn key_press(&self, key: &str) -> bool {
        is_backspace_on_empty(key, &self.value)
    }

    pub fn set_shake_config(&mut self, config: ShakeConfig) {
        self.shake_config = config;
    }

    /// Starts a shake with the configured duration.
    pub fn begin_default_shake(&mut self) -> ShakeTicket {
        self.begin_shake(u64::from(self.shake_config.duration_ms))
    }

    pub fn begin_shake(&mut self, duration_ms: u64) -> ShakeTicket {
        self.shake.generation = self.shake.generation.wrapping_add(1);
        self.shake.duration_ms = duration_ms.max(1);
        self.shake.active = true;
        ShakeTicket(self.shake.generation)
    }

    pub fn finish_shake(&mut self, ticket: ShakeTicket) -> bool {
        if !self.shake.active || ticket.0 != self.shake.generation {
            return false;
        }
        self.shake.active = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_ticket_cannot_expire_a_newer_window() {
        let mut mask = MaskDelay::default();
        let first = mask.arm();
        let second = mask.arm();
        assert!(!mask.expire(first));
        assert!(mask.is_active());
        assert!(mask.expire(second));
        assert!(!mask.is_active());
    }

    #[test]
    fn clearing_invalidates_pending_ticket() {
        let mut mask = MaskDelay::default();
        let ticket = mask.arm();
        mask.clear();
        let _ = mask.arm();
        assert!(!mask.expire(ticket));
    }

    #[test]
    fn mount_reports_first_render_only() {
        let mut session = PinSession::new();
        assert!(session.mount());
        assert!(!session.mount());
    }

    #[test]
    fn focus_changes_are_reported() {
        let mut session = PinSession::new();
        assert!(session.set_focused(true));
        assert!(!session.set_focused(true));
        assert!(session.focused());
    }

    #[test]
    fn finishing_an_older_shake_keeps_the_new_one_running() {
        let mut session = PinSession::new();
        let first = session.begin_shake(650);
        let second = session.begin_shake(300);
        assert!(!session.finish_shake(first));
        assert!(session.shake().is_active());
        assert_eq!(session.shake().duration_ms(), 300);
        assert!(session.finish_shake(second));
        assert!(!session.shake().is_active());
    }

    #[test]
    fn default_shake_uses_the_configured_duration() {
        let mut session = PinSession::new();
        let _ = session.begin_default_shake();
        assert_eq!(session.shake().duration_ms(), 650);

        session.set_shake_config(ShakeConfig {
            duration_ms: 300,
            ..ShakeConfig::default()
        });
        let _ = session.begin_default_shake();
        assert_eq!(session.shake().duration_ms(), 300);
    }

    #[test]
    fn sync_replaces_unaccepted_edits() {
        let rules = InputRules {
            code_length: 4,
            restrict_to_numbers: false,
            password: false,
        };
        let mut session = PinSession::new();
        session.sync_value("12");
        let _ = session.insert("3", rules);
        assert_eq!(session.value(), "123");

        session.sync_value("12");
        assert_eq!(session.value(), "12");
    }
}
