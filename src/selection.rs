//! What the user is looking at: subject, model index, mode, and the short
//! loading pause between picking a subject and seeing it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EduError;
use crate::subject::{SubjectId, MODELS_PER_SUBJECT};

/// Learn or play. Play mode has no behavior of its own yet; it only changes
/// the label shown next to the scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Read descriptions while exploring the model.
    #[default]
    Learn,
    /// Challenge surface (inert).
    Play,
}

impl Mode {
    /// Blurb shown next to the mode switch.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Learn => {
                "Explore and interact with 3D models to understand concepts \
                 better."
            }
            Self::Play => {
                "Test your knowledge with interactive challenges and games."
            }
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Learn => Self::Play,
            Self::Play => Self::Learn,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Learn => "learn",
            Self::Play => "play",
        })
    }
}

/// A subject waiting for the loading delay to run out.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    subject: SubjectId,
    remaining: f32,
}

/// Current subject/model/mode plus the pending subject while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    subject: Option<SubjectId>,
    model_index: usize,
    mode: Mode,
    pending: Option<Pending>,
    loading_delay: f32,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl SelectionState {
    /// Nothing selected; subjects commit `loading_delay` seconds after
    /// being picked.
    #[must_use]
    pub fn new(loading_delay: f32) -> Self {
        Self {
            subject: None,
            model_index: 0,
            mode: Mode::Learn,
            pending: None,
            loading_delay: loading_delay.max(0.0),
        }
    }

    /// Change the loading delay for subsequent picks.
    pub fn set_loading_delay(&mut self, seconds: f32) {
        self.loading_delay = seconds.max(0.0);
    }

    /// Committed subject, if any.
    #[must_use]
    pub fn subject(&self) -> Option<SubjectId> {
        self.subject
    }

    /// Index of the model within the subject, always `< 3`.
    #[must_use]
    pub fn model_index(&self) -> usize {
        self.model_index
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether a picked subject is still waiting out the loading delay.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Pick a subject. It becomes current, at model 0, once
    /// [`tick`](Self::tick) has run down the loading delay; until then the
    /// previous subject and model stay as they are. Picking again while
    /// loading restarts the delay.
    pub fn select_subject(&mut self, subject: SubjectId) {
        log::info!("loading {subject}");
        self.pending = Some(Pending {
            subject,
            remaining: self.loading_delay,
        });
    }

    /// Show `subject` at `model_index` right away, without the loading
    /// delay.
    ///
    /// # Errors
    ///
    /// Returns [`EduError::ModelIndex`] and leaves the state unchanged if
    /// `model_index` is not below 3.
    pub fn open(
        &mut self,
        subject: SubjectId,
        model_index: usize,
    ) -> Result<(), EduError> {
        if model_index >= MODELS_PER_SUBJECT {
            return Err(EduError::ModelIndex(model_index));
        }
        self.subject = Some(subject);
        self.model_index = model_index;
        self.pending = None;
        Ok(())
    }

    /// Advance to the next model, wrapping after the third.
    pub fn next_model(&mut self) {
        self.model_index = (self.model_index + 1) % MODELS_PER_SUBJECT;
        log::info!("model {}", self.model_index);
    }

    /// Set the mode.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::info!("{mode} mode: {}", mode.description());
        }
        self.mode = mode;
    }

    /// Flip between learn and play.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Back to the subject picker.
    pub fn reset(&mut self) {
        self.subject = None;
        self.mode = Mode::Learn;
        self.model_index = 0;
        self.pending = None;
    }

    /// Run the loading timer down by `dt` seconds. Returns `true` when a
    /// pending subject was committed during this call.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        pending.remaining -= dt.max(0.0);
        if pending.remaining > 0.0 {
            return false;
        }
        self.subject = Some(pending.subject);
        self.model_index = 0;
        self.pending = None;
        true
    }
}
