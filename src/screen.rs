use crate::io::SubmitOutcome;
use crate::model::ScheduledTask;

/// Which view the window shows. Results and errors replace the editor
/// until the user goes back.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Screen {
    #[default]
    Editing,
    Results(Vec<ScheduledTask>),
    Failed(String),
}

impl Screen {
    pub fn from_outcome(outcome: SubmitOutcome) -> Self {
        match outcome {
            Ok(tasks) => Screen::Results(tasks),
            Err(e) => Screen::Failed(e.user_message()),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Screen::Editing)
    }

    /// Discard the submission outcome and return to the editor.
    pub fn back(&mut self) {
        *self = Screen::Editing;
    }
}
