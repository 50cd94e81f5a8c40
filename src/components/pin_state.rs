use std::time::Duration;

use gpui::{App, Context, FocusHandle, Focusable, Subscription, Task, Window};

use crate::id::PinId;
use crate::motion::ShakeConfig;

use super::policy::{InputRules, TextChange};
use super::session::{AcceptedChange, PinSession, ShakeTicket};

/// Widget state shared between frames, and the owner's imperative handle.
///
/// Create it once with `cx.new(|cx| PinState::new(window, cx))` and pass the
/// entity to `PinInput::new` on every render.
pub struct PinState {
    id: PinId,
    focus_handle: FocusHandle,
    session: PinSession,
    // Dropping either task cancels its pending timer.
    _mask_task: Option<Task<()>>,
    _shake_task: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl PinState {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let subscriptions = vec![
            cx.on_focus(&focus_handle, window, |this, _window, cx| {
                this.set_focused(true, cx);
            }),
            cx.on_blur(&focus_handle, window, |this, _window, cx| {
                this.set_focused(false, cx);
            }),
        ];

        Self {
            id: PinId::from_entity(cx.entity_id()),
            focus_handle,
            session: PinSession::new(),
            _mask_task: None,
            _shake_task: None,
            _subscriptions: subscriptions,
        }
    }

    pub fn with_id(mut self, id: impl Into<PinId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &PinId {
        &self.id
    }

    pub fn session(&self) -> &PinSession {
        &self.session
    }

    pub fn is_focused(&self) -> bool {
        self.session.focused()
    }

    pub fn mask_delay(&self) -> bool {
        self.session.mask_delay()
    }

    pub fn focus(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle, cx);
    }

    pub fn blur(&mut self, window: &mut Window, _cx: &mut Context<Self>) {
        if self.focus_handle.is_focused(window) {
            window.blur();
        }
    }

    /// Plays the shake animation with the duration from the widget's
    /// `MotionConfig`.
    pub fn shake(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let ticket = self.session.begin_default_shake();
        self.schedule_shake_end(ticket, window, cx);
    }

    /// Plays the shake animation on the whole widget. Value, focus and mask
    /// state are left untouched.
    pub fn shake_for(&mut self, duration_ms: u64, window: &mut Window, cx: &mut Context<Self>) {
        let ticket = self.session.begin_shake(duration_ms);
        self.schedule_shake_end(ticket, window, cx);
    }

    fn schedule_shake_end(
        &mut self,
        ticket: ShakeTicket,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let duration = Duration::from_millis(self.session.shake().duration_ms());
        #[cfg(feature = "tracing")]
        tracing::debug!(id = self.id.as_str(), ?duration, "pin shake started");

        let window_handle = window.window_handle();
        self._shake_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(duration).await;
            let finished = this
                .update(cx, |this, cx| {
                    let finished = this.session.finish_shake(ticket);
                    if finished {
                        cx.notify();
                    }
                    finished
                })
                .unwrap_or(false);
            if finished {
                #[cfg(feature = "tracing")]
                tracing::debug!("pin shake finished");
                let _ = window_handle.update(cx, |_, window, _| window.refresh());
            }
        }));
        cx.notify();
    }

    pub(crate) fn mount(&mut self) -> bool {
        self.session.mount()
    }

    /// Called on every render with the owner's value and motion settings.
    pub(crate) fn sync(&mut self, value: &str, shake: ShakeConfig) {
        self.session.sync_value(value);
        self.session.set_shake_config(shake);
    }

    pub(crate) fn insert_text(
        &mut self,
        text: &str,
        rules: InputRules,
        mask_delay: Duration,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Option<TextChange> {
        let accepted = self.session.insert(text, rules)?;
        Some(self.accept(accepted, mask_delay, window, cx))
    }

    pub(crate) fn delete_backward(
        &mut self,
        rules: InputRules,
        mask_delay: Duration,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Option<TextChange> {
        let accepted = self.session.delete_backward(rules)?;
        Some(self.accept(accepted, mask_delay, window, cx))
    }

    /// (Re)starts the mask timer when a password character was typed.
    fn accept(
        &mut self,
        accepted: AcceptedChange,
        mask_delay: Duration,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> TextChange {
        match accepted.mask_ticket {
            Some(ticket) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(id = self.id.as_str(), ?mask_delay, "pin mask delay armed");
                let window_handle = window.window_handle();
                self._mask_task = Some(cx.spawn(async move |this, cx| {
                    cx.background_executor().timer(mask_delay).await;
                    let expired = this
                        .update(cx, |this, cx| {
                            let expired = this.session.expire_mask(ticket);
                            if expired {
                                cx.notify();
                            }
                            expired
                        })
                        .unwrap_or(false);
                    if expired {
                        #[cfg(feature = "tracing")]
                        tracing::trace!("pin mask delay expired");
                        let _ = window_handle.update(cx, |_, window, _| window.refresh());
                    }
                }));
            }
            None => self._mask_task = None,
        }

        cx.notify();
        accepted.change
    }

    fn set_focused(&mut self, focused: bool, cx: &mut Context<Self>) {
        if self.session.set_focused(focused) {
            #[cfg(feature = "tracing")]
            tracing::trace!(id = self.id.as_str(), focused, "pin focus changed");
            cx.notify();
        }
    }
}

impl Focusable for PinState {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
