use leptos::prelude::*;

use crate::hide_timer::{HIDE_DELAY_MS, HideTimer};
use crate::popup::{PopupEvent, PopupMachine, TimerCommand};

/// Owns the popup state machine and its hide timer. Cheap to copy into handlers.
#[derive(Clone, Copy)]
pub struct PopupController {
    machine: RwSignal<PopupMachine>,
    timer: StoredValue<HideTimer, LocalStorage>,
}

impl PopupController {
    pub fn new() -> Self {
        Self {
            machine: RwSignal::new(PopupMachine::new()),
            timer: StoredValue::new_local(HideTimer::default()),
        }
    }

    pub fn dispatch(self, event: PopupEvent) {
        let mut command = TimerCommand::Keep;
        self.machine.update(|machine| command = machine.apply(event));

        match command {
            TimerCommand::Keep => {}
            TimerCommand::Cancel => self.timer.update_value(|timer| timer.cancel()),
            TimerCommand::Schedule(token) => self.timer.update_value(|timer| {
                timer.schedule(HIDE_DELAY_MS, move || {
                    self.dispatch(PopupEvent::HideElapsed(token));
                });
            }),
        }
    }

    pub fn is_visible(self) -> bool {
        self.machine.with(PopupMachine::is_visible)
    }

    pub fn is_active(self, identifier: &str) -> bool {
        self.machine
            .with(|machine| machine.active_identifier() == Some(identifier))
    }

    pub fn active_identifier(self) -> Option<String> {
        self.machine
            .with(|machine| machine.active_identifier().map(str::to_string))
    }

    /// Untracked; the click router reads this outside any reactive scope.
    pub fn is_pinned_untracked(self) -> bool {
        self.machine.with_untracked(PopupMachine::is_pinned)
    }
}

impl Default for PopupController {
    fn default() -> Self {
        Self::new()
    }
}
