use super::cells::{CellContent, CellView, CellsInput, Glyph, derive_cells};
use super::options::PinOptions;
use super::policy::InputRules;
use super::session::{AcceptedChange, PinSession};

fn rules(code_length: usize) -> InputRules {
    InputRules {
        code_length,
        restrict_to_numbers: false,
        password: false,
    }
}

fn cells(value: &str, session: &PinSession, options: &PinOptions) -> Vec<CellView> {
    derive_cells(CellsInput {
        value,
        code_length: options.code_length,
        focused: session.focused(),
        mask_delay: session.mask_delay(),
        password: options.password,
        mask: &options.mask,
        placeholder: options.placeholder.as_ref(),
        focus_animation: options.animation_focused.is_some(),
    })
}

fn texts(cells: &[CellView]) -> Vec<String> {
    cells
        .iter()
        .map(|cell| match &cell.content {
            CellContent::Text(text) => text.to_string(),
            _ => String::new(),
        })
        .collect()
}

/// Feeds keystrokes the way the input surface does and records every
/// accepted code plus the fulfillment events. `render` stands for the owner
/// drawing a new frame with the value it took from `on_change_text`.
struct Typist {
    session: PinSession,
    rules: InputRules,
    value: String,
    changes: Vec<String>,
    fulfilled: Vec<String>,
}

impl Typist {
    fn new(rules: InputRules) -> Self {
        Self {
            session: PinSession::new(),
            rules,
            value: String::new(),
            changes: Vec::new(),
            fulfilled: Vec::new(),
        }
    }

    fn render(&mut self) {
        self.session.sync_value(&self.value);
    }

    fn type_text(&mut self, text: &str) {
        let accepted = self.session.insert(text, self.rules);
        self.record(accepted);
    }

    fn backspace(&mut self) -> bool {
        if self.session.key_press("Backspace") {
            return true;
        }
        let accepted = self.session.delete_backward(self.rules);
        self.record(accepted);
        false
    }

    fn propose(&mut self, raw: &str) {
        let accepted = self.session.text_change(raw, self.rules);
        self.record(Some(accepted));
    }

    fn record(&mut self, accepted: Option<AcceptedChange>) {
        let Some(accepted) = accepted else {
            return;
        };
        self.changes.push(accepted.change.code.clone());
        if accepted.change.fulfilled {
            self.fulfilled.push(accepted.change.code.clone());
        }
        self.value = accepted.change.code;
    }
}

#[test]
fn filled_and_current_counts_follow_value_and_focus() {
    let options = PinOptions::default();
    let mut session = PinSession::new();
    session.set_focused(true);

    for value in ["", "1", "12", "123"] {
        let cells = cells(value, &session, &options);
        let filled = cells.iter().filter(|cell| cell.filled).count();
        let current = cells.iter().filter(|cell| cell.current).count();
        assert_eq!(filled, value.len());
        assert_eq!(current, 1);
        assert!(cells[value.len()].current);
    }

    let full = cells("1234", &session, &options);
    assert!(full.iter().all(|cell| cell.filled && !cell.current));

    session.set_focused(false);
    let blurred = cells("12", &session, &options);
    assert!(blurred.iter().all(|cell| !cell.current));
}

#[test]
fn letters_are_dropped_when_restricted_to_numbers() {
    let mut typist = Typist::new(InputRules {
        restrict_to_numbers: true,
        ..rules(6)
    });
    typist.propose("a1b2c3");
    assert_eq!(typist.changes, vec!["123".to_string()]);
    assert!(typist.fulfilled.is_empty());
}

#[test]
fn fulfill_fires_once_on_the_last_character() {
    let mut typist = Typist::new(rules(4));
    for key in ["1", "2", "3"] {
        typist.type_text(key);
        typist.render();
        assert!(typist.fulfilled.is_empty());
    }
    typist.type_text("4");
    assert_eq!(typist.fulfilled, vec!["1234".to_string()]);

    typist.type_text("5");
    assert_eq!(typist.value, "1234");
    assert_eq!(typist.changes.len(), 4);
    assert_eq!(typist.fulfilled.len(), 1);
}

#[test]
fn fulfill_fires_again_after_clearing_and_retyping() {
    let mut typist = Typist::new(rules(4));
    typist.type_text("1234");
    assert!(!typist.backspace());
    assert_eq!(typist.value, "123");
    typist.type_text("9");
    assert_eq!(
        typist.fulfilled,
        vec!["1234".to_string(), "1239".to_string()]
    );
}

#[test]
fn paste_is_truncated_to_code_length() {
    let mut typist = Typist::new(rules(4));
    typist.type_text("123456");
    assert_eq!(typist.value, "1234");
    assert_eq!(typist.fulfilled, vec!["1234".to_string()]);
}

#[test]
fn backspace_on_empty_is_reported_without_a_change() {
    let mut typist = Typist::new(rules(4));
    assert!(typist.backspace());
    assert!(typist.changes.is_empty());

    typist.type_text("1");
    assert!(!typist.backspace());
    assert_eq!(typist.value, "");
    assert!(typist.backspace());
}

#[test]
fn password_reveals_only_the_latest_character_until_expiry() {
    let options = PinOptions {
        password: true,
        ..PinOptions::default()
    };
    let mut session = PinSession::new();
    session.set_focused(true);

    let first = session.text_change("1", options.rules());
    assert!(first.mask_ticket.is_some());
    let second = session.text_change("12", options.rules());
    let ticket = second.mask_ticket.expect("typing arms the mask delay");

    assert_eq!(texts(&cells("12", &session, &options)), ["*", "2", "", ""]);

    assert!(session.expire_mask(ticket));
    assert!(!session.mask_delay());
    assert_eq!(texts(&cells("12", &session, &options)), ["*", "*", "", ""]);
}

#[test]
fn superseded_mask_timer_does_not_hide_the_newest_character() {
    let options = PinOptions {
        password: true,
        ..PinOptions::default()
    };
    let mut session = PinSession::new();
    let stale = session
        .text_change("1", options.rules())
        .mask_ticket
        .expect("first keystroke");
    let _fresh = session.text_change("12", options.rules());

    assert!(!session.expire_mask(stale));
    assert!(session.mask_delay());
}

#[test]
fn deleting_a_character_masks_everything_immediately() {
    let options = PinOptions {
        password: true,
        ..PinOptions::default()
    };
    let mut session = PinSession::new();
    let ticket = session
        .text_change("1", options.rules())
        .mask_ticket
        .expect("keystroke");
    let removal = session.text_change("", options.rules());

    assert!(removal.mask_ticket.is_none());
    assert!(!session.mask_delay());
    assert!(!session.expire_mask(ticket));
}

#[test]
fn shake_leaves_value_focus_and_mask_untouched() {
    let options = PinOptions {
        password: true,
        ..PinOptions::default()
    };
    let mut session = PinSession::new();
    session.set_focused(true);
    let _ = session.text_change("1", options.rules());
    let before = cells("1", &session, &options);

    let ticket = session.begin_shake(650);
    assert!(session.focused());
    assert!(session.mask_delay());
    assert_eq!(cells("1", &session, &options), before);

    assert!(session.finish_shake(ticket));
    assert_eq!(cells("1", &session, &options), before);
}

#[test]
fn cell_derivation_is_idempotent() {
    let options = PinOptions {
        placeholder: Some(Glyph::from("-")),
        ..PinOptions::default()
    };
    let mut session = PinSession::new();
    session.set_focused(true);
    assert_eq!(
        cells("12", &session, &options),
        cells("12", &session, &options)
    );
    assert_eq!(texts(&cells("12", &session, &options)), ["1", "2", "-", "-"]);
}

#[test]
fn keystrokes_before_a_re_render_build_on_each_other() {
    let mut typist = Typist::new(rules(4));
    typist.render();
    typist.type_text("1");
    typist.type_text("2");
    assert_eq!(typist.changes, vec!["1".to_string(), "12".to_string()]);
    assert_eq!(typist.session.value(), "12");
}

#[test]
fn extra_key_after_a_full_code_does_not_fulfill_again_before_a_re_render() {
    let mut typist = Typist::new(rules(4));
    typist.type_text("123");
    typist.render();
    typist.type_text("4");
    typist.type_text("5");
    assert_eq!(typist.changes, vec!["123".to_string(), "1234".to_string()]);
    assert_eq!(typist.fulfilled, vec!["1234".to_string()]);
}

#[test]
fn owner_rejecting_an_edit_restores_the_rendered_value() {
    let mut typist = Typist::new(InputRules {
        password: true,
        ..rules(4)
    });
    typist.type_text("12");
    typist.render();
    typist.type_text("3");
    assert_eq!(typist.session.value(), "123");

    typist.value = "12".to_string();
    typist.render();
    assert_eq!(typist.session.value(), "12");
    typist.type_text("9");
    assert_eq!(typist.value, "129");
}

#[test]
fn mask_delay_follows_the_live_value() {
    let mut session = PinSession::new();
    let password = InputRules {
        password: true,
        ..rules(4)
    };
    session.sync_value("1");
    let typed = session.insert("2", password).expect("room for a digit");
    assert!(typed.mask_ticket.is_some());
    let removed = session.delete_backward(password).expect("value not empty");
    assert!(removed.mask_ticket.is_none());
    assert!(!session.mask_delay());
}
