use crate::api::ApiError;
use crate::components::layout::flash_toast;
use leptos::*;

/// How long the success toast stays on screen after a submission lands.
pub const SUCCESS_TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
}

impl FormPhase {
    pub fn open(self) -> Self {
        match self {
            FormPhase::Idle => FormPhase::Editing,
            other => other,
        }
    }

    /// Closing is refused while a request is in flight.
    pub fn close(self) -> Self {
        match self {
            FormPhase::Submitting => FormPhase::Submitting,
            _ => FormPhase::Idle,
        }
    }

    pub fn begin_submit(self, valid: bool) -> Self {
        match self {
            FormPhase::Editing if valid => FormPhase::Submitting,
            other => other,
        }
    }

    pub fn finish(self, succeeded: bool) -> Self {
        match (self, succeeded) {
            (FormPhase::Submitting, true) => FormPhase::Idle,
            (FormPhase::Submitting, false) => FormPhase::Editing,
            (other, _) => other,
        }
    }

    pub fn is_open(self) -> bool {
        !matches!(self, FormPhase::Idle)
    }

    pub fn is_submitting(self) -> bool {
        matches!(self, FormPhase::Submitting)
    }
}

/// Signals one request form writes while it submits.
#[derive(Clone, Copy)]
pub struct SubmitSignals {
    pub phase: RwSignal<FormPhase>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub toast: RwSignal<Option<String>>,
    pub reload: RwSignal<u32>,
}

impl SubmitSignals {
    pub fn new() -> Self {
        Self {
            phase: create_rw_signal(FormPhase::Idle),
            form_error: create_rw_signal(None),
            toast: create_rw_signal(None),
            reload: create_rw_signal(0),
        }
    }

    pub fn open(&self) {
        self.form_error.set(None);
        self.phase.update(|p| *p = p.open());
    }

    pub fn close(&self) {
        self.phase.update(|p| *p = p.close());
    }

    /// Moves to `Submitting` and dispatches one request when `payload` is
    /// valid; a validation error stays in the form.
    pub fn dispatch<P: Clone + 'static>(
        &self,
        payload: Result<P, ApiError>,
        action: Action<P, Result<(), ApiError>>,
    ) {
        let before = self.phase.get_untracked();
        let next = before.begin_submit(payload.is_ok());
        self.phase.set(next);
        match payload {
            Ok(payload) if next.is_submitting() && !before.is_submitting() => {
                self.form_error.set(None);
                action.dispatch(payload);
            }
            Ok(_) => {}
            Err(err) => self.form_error.set(Some(err)),
        }
    }

    /// Success closes the form, runs `reset`, flashes `success_message` and
    /// bumps `reload`. Failure keeps the draft and shows the error.
    pub fn settle(
        &self,
        result: Option<Result<(), ApiError>>,
        subject: &str,
        success_message: &'static str,
        reset: impl FnOnce(),
    ) {
        let Some(result) = result else {
            return;
        };
        match result {
            Ok(()) => {
                self.phase.update(|p| *p = p.finish(true));
                reset();
                self.form_error.set(None);
                flash_toast(self.toast, success_message);
                self.reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => {
                log::error!("Error submitting {}: {}", subject, err);
                self.phase.update(|p| *p = p.finish(false));
                self.form_error.set(Some(err));
            }
        }
    }
}

impl Default for SubmitSignals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_draft_stays_in_editing() {
        let phase = FormPhase::Idle.open();
        assert_eq!(phase, FormPhase::Editing);
        assert_eq!(phase.begin_submit(false), FormPhase::Editing);
    }

    #[test]
    fn submission_outcome_decides_next_phase() {
        let submitting = FormPhase::Idle.open().begin_submit(true);
        assert!(submitting.is_submitting());
        assert_eq!(submitting.finish(true), FormPhase::Idle);
        assert_eq!(submitting.finish(false), FormPhase::Editing);
    }

    #[test]
    fn close_is_ignored_while_submitting() {
        assert_eq!(FormPhase::Submitting.close(), FormPhase::Submitting);
        assert_eq!(FormPhase::Editing.close(), FormPhase::Idle);
        assert!(!FormPhase::Editing.close().is_open());
    }

    #[test]
    fn stray_transitions_are_no_ops() {
        assert_eq!(FormPhase::Idle.begin_submit(true), FormPhase::Idle);
        assert_eq!(FormPhase::Editing.finish(true), FormPhase::Editing);
        assert_eq!(FormPhase::Submitting.open(), FormPhase::Submitting);
    }
}
