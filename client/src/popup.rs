/// Visibility of the shared popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupPhase {
    #[default]
    Hidden,
    Shown { identifier: String, pinned: bool },
}

/// Interaction events that drive the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupEvent {
    PinEnter(String),
    PinLeave,
    PinActivate(String),
    MenuActivate(String),
    PopupEnter,
    PopupLeave,
    /// A click the router classified as outside the popup, every pin and the drawer.
    DismissClick,
    /// A hide timer expired. Carries the token it was scheduled with.
    HideElapsed(u64),
}

/// What the caller must do with the single hide timer after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerCommand {
    #[default]
    Keep,
    /// Replace any pending timer with one that reports `HideElapsed(token)`.
    Schedule(u64),
    Cancel,
}

/// Popup state: phase plus the token of the pending hide timer, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupMachine {
    phase: PopupPhase,
    pending_hide: Option<u64>,
    next_token: u64,
}

impl PopupMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn phase(&self) -> &PopupPhase {
        &self.phase
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, PopupPhase::Shown { .. })
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self.phase, PopupPhase::Shown { pinned: true, .. })
    }

    /// Identifier of the location on display; its pin is the active one.
    pub fn active_identifier(&self) -> Option<&str> {
        match &self.phase {
            PopupPhase::Shown { identifier, .. } => Some(identifier.as_str()),
            PopupPhase::Hidden => None,
        }
    }

    #[cfg(test)]
    pub fn hide_pending(&self) -> bool {
        self.pending_hide.is_some()
    }

    pub fn apply(&mut self, event: PopupEvent) -> TimerCommand {
        match event {
            PopupEvent::PinEnter(identifier) => {
                if self.is_pinned() {
                    return TimerCommand::Keep;
                }
                self.open(identifier, false)
            }
            PopupEvent::PinActivate(identifier) | PopupEvent::MenuActivate(identifier) => {
                self.open(identifier, true)
            }
            PopupEvent::PinLeave | PopupEvent::PopupLeave => self.schedule_hide(),
            PopupEvent::PopupEnter => self.cancel_hide(),
            PopupEvent::DismissClick => {
                if !self.is_pinned() {
                    return TimerCommand::Keep;
                }
                self.phase = PopupPhase::Hidden;
                self.cancel_hide()
            }
            PopupEvent::HideElapsed(token) => {
                if self.pending_hide != Some(token) {
                    return TimerCommand::Keep;
                }
                // The timer has already fired; its handle is spent, not cancelled.
                self.pending_hide = None;
                self.phase = PopupPhase::Hidden;
                TimerCommand::Keep
            }
        }
    }

    fn open(&mut self, identifier: String, pinned: bool) -> TimerCommand {
        self.phase = PopupPhase::Shown { identifier, pinned };
        self.cancel_hide()
    }

    fn schedule_hide(&mut self) -> TimerCommand {
        if !matches!(self.phase, PopupPhase::Shown { pinned: false, .. }) {
            return TimerCommand::Keep;
        }
        self.next_token += 1;
        self.pending_hide = Some(self.next_token);
        TimerCommand::Schedule(self.next_token)
    }

    fn cancel_hide(&mut self) -> TimerCommand {
        match self.pending_hide.take() {
            Some(_) => TimerCommand::Cancel,
            None => TimerCommand::Keep,
        }
    }
}
