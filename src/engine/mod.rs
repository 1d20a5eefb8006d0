mod input;
mod options;

/// The engine's command vocabulary.
pub mod command;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::Animator;
use crate::error::EduError;
use crate::camera::controller::CameraController;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::scene::{builders, Scene};
use crate::selection::{Mode, SelectionState};
use crate::subject::SubjectId;

/// Shown in place of a fact while the picker is open.
const NO_SUBJECT_FACT: &str = "Select a subject to learn amazing facts!";

/// Which rotation source touched the top-level objects during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationSource {
    /// A drag session was active; auto-rotate was suppressed.
    Drag,
    /// No drag; the idle turntable increment was applied.
    AutoRotate,
    /// No drag and auto-rotate is off.
    None,
}

/// What [`EduEngine::update`] did during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Rotation path taken this frame.
    pub rotation: RotationSource,
    /// Whether a pending subject was committed and the scene rebuilt.
    pub rebuilt: bool,
    /// Number of nodes whose behavior marker ran.
    pub animated: usize,
}

/// Headless core of the viewer.
///
/// Owns the scene, camera, animator, input processor, selection state and
/// options. It never touches the GPU, so the whole interaction model runs
/// under plain `cargo test`; the viewer wraps it with a
/// [`Renderer`](crate::renderer::Renderer).
///
/// # Frame loop
///
/// Feed window events to [`handle_input`](Self::handle_input) or
/// [`handle_key_press`](Self::handle_key_press), then call
/// [`update`](Self::update) once per frame with the elapsed seconds.
///
/// # Scene management
///
/// The scene is rebuilt whenever the committed subject or model index
/// changes; [`EduCommand::Reset`](command::EduCommand::Reset) clears it.
pub struct EduEngine {
    scene: Scene,
    /// Zoom-only camera controller.
    pub camera_controller: CameraController,
    animator: Animator,
    input: InputProcessor,
    selection: SelectionState,
    options: Options,
    auto_rotate: bool,
    /// Drag delta accumulated since the last frame, in pixels.
    pending_drag: Vec2,
    /// (subject, model) the scene currently shows.
    built: Option<(SubjectId, usize)>,
    rng: StdRng,
}

impl EduEngine {
    /// Engine with the given options and an entropy-seeded RNG for the
    /// jittered builders.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_rng(options, StdRng::from_rng(&mut rand::rng()))
    }

    /// Engine whose jittered builders draw from a fixed seed.
    #[must_use]
    pub fn with_seed(options: Options, seed: u64) -> Self {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }

    fn with_rng(options: Options, rng: StdRng) -> Self {
        let mut engine = Self {
            scene: Scene::new(),
            camera_controller: CameraController::new(&options.camera, 1.0),
            animator: Animator::new(),
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            selection: SelectionState::new(
                options.display.loading_delay_ms as f32 / 1000.0,
            ),
            auto_rotate: options.controls.auto_rotate,
            options,
            pending_drag: Vec2::ZERO,
            built: None,
            rng,
        };
        engine.apply_options();
        engine
    }

    /// The scene currently shown.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access (the renderer marks structure as consumed).
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Subject, model and mode.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Committed subject, if any.
    #[must_use]
    pub fn subject(&self) -> Option<SubjectId> {
        self.selection.subject()
    }

    /// Index of the shown model.
    #[must_use]
    pub fn model_index(&self) -> usize {
        self.selection.model_index()
    }

    /// Learn or play.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.selection.mode()
    }

    /// Whether the loading placeholder should show.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.selection.is_loading()
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// Whether idle auto-rotation is on.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Show `subject` at `model_index` immediately, skipping the loading
    /// delay (used for the initial selection from the command line).
    ///
    /// # Errors
    ///
    /// Returns [`EduError::ModelIndex`] if `model_index` is not below 3;
    /// nothing changes in that case.
    pub fn open(
        &mut self,
        subject: SubjectId,
        model_index: usize,
    ) -> Result<(), EduError> {
        self.selection.open(subject, model_index)?;
        let _ = self.sync_scene();
        Ok(())
    }

    /// The "did you know" line for the committed subject, or a prompt to
    /// pick one.
    #[must_use]
    pub fn fact(&self) -> &'static str {
        self.subject().map_or(NO_SUBJECT_FACT, |id| id.subject().fact)
    }

    /// One-line status for the window title: app name, then the picker
    /// prompt, the loading notice, or subject, model and mode.
    #[must_use]
    pub fn caption(&self) -> String {
        const APP: &str = "EduVerse 3D";
        if self.is_loading() {
            return format!("{APP} | Loading 3D scene...");
        }
        let Some(id) = self.subject() else {
            return format!("{APP} | choose a subject (1-6)");
        };
        let subject = id.subject();
        let index = self.model_index();
        let mode = match self.mode() {
            Mode::Learn => "Learning Mode",
            Mode::Play => "Game Mode",
        };
        format!(
            "{APP} | {} | {} ({}/{}) | {mode}",
            subject.name,
            subject.model_label(index).unwrap_or("?"),
            index + 1,
            crate::subject::MODELS_PER_SUBJECT,
        )
    }

    /// Advance one frame by `dt` seconds.
    ///
    /// Commits a pending subject once its loading delay has run out, then
    /// applies exactly one rotation source to the top-level objects (the
    /// accumulated drag while dragging, otherwise the auto-rotate
    /// increment), then runs the animator.
    pub fn update(&mut self, dt: f32) -> FrameReport {
        let committed = self.selection.tick(dt);
        let rebuilt = self.sync_scene();
        if committed && !rebuilt {
            log::debug!("committed selection already shown");
        }

        let rotation = self.apply_rotation();

        self.animator.advance(dt);
        let animated = self.animator.step(&mut self.scene);

        FrameReport {
            rotation,
            rebuilt,
            animated,
        }
    }

    fn apply_rotation(&mut self) -> RotationSource {
        if self.input.is_dragging() || self.pending_drag != Vec2::ZERO {
            let step = std::mem::take(&mut self.pending_drag)
                * self.options.controls.rotate_speed;
            self.rotate_top_level(step.y, step.x);
            RotationSource::Drag
        } else if self.auto_rotate {
            let controls = &self.options.controls;
            let (pitch, yaw) =
                (controls.auto_rotate_pitch, controls.auto_rotate_yaw);
            self.rotate_top_level(pitch, yaw);
            RotationSource::AutoRotate
        } else {
            RotationSource::None
        }
    }

    /// Add `pitch` to rotation.x and `yaw` to rotation.y of every top-level
    /// node.
    fn rotate_top_level(&mut self, pitch: f32, yaw: f32) {
        for node in self.scene.nodes_mut() {
            node.transform.rotation.x += pitch;
            node.transform.rotation.y += yaw;
        }
    }

    /// Rebuild the scene if the committed selection differs from what is
    /// shown. Returns `true` when the scene was rebuilt.
    fn sync_scene(&mut self) -> bool {
        let wanted = self
            .selection
            .subject()
            .map(|subject| (subject, self.selection.model_index()));
        if wanted == self.built {
            return false;
        }
        self.built = wanted;

        match wanted {
            Some((subject, index)) => {
                let _ = builders::populate_subject(
                    &mut self.scene,
                    subject,
                    index,
                    &mut self.rng,
                );
                let label = subject.subject().model_label(index).unwrap_or("?");
                log::info!(
                    "showing {subject} model {index} ({label}): {} meshes",
                    self.scene.primitive_count()
                );
                log::info!("did you know? {}", subject.subject().fact);
            }
            None => self.scene.clear(),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::command::EduCommand;
    use super::*;
    use crate::input::{InputEvent, MouseButton};

    fn engine() -> EduEngine {
        EduEngine::with_seed(Options::default(), 42)
    }

    fn open(engine: &mut EduEngine, subject: SubjectId) {
        engine.execute(EduCommand::SelectSubject(subject));
        let _ = engine.update(0.6);
    }

    fn rotation_y(engine: &EduEngine) -> f32 {
        engine.scene().nodes()[0].transform.rotation.y
    }

    #[test]
    fn starts_on_picker_with_empty_scene() {
        let mut e = engine();
        assert!(e.subject().is_none());
        let report = e.update(0.016);
        assert!(!report.rebuilt);
        assert!(e.scene().is_empty());
    }

    #[test]
    fn scene_appears_after_loading_delay() {
        let mut e = engine();
        e.execute(EduCommand::SelectSubject(SubjectId::Space));
        assert!(e.is_loading());
        assert!(!e.update(0.2).rebuilt);
        assert!(e.scene().is_empty());

        let report = e.update(0.4);
        assert!(report.rebuilt);
        assert!(!e.is_loading());
        assert_eq!(e.subject(), Some(SubjectId::Space));
        assert_eq!(e.scene().len(), 5);
    }

    #[test]
    fn next_model_rebuilds_immediately() {
        let mut e = engine();
        open(&mut e, SubjectId::Math);
        assert_eq!(e.scene().primitive_count(), 3);

        e.execute(EduCommand::NextModel);
        assert!(e.update(0.016).rebuilt);
        assert_eq!(e.model_index(), 1);
        assert_eq!(e.scene().primitive_count(), 11);
    }

    #[test]
    fn auto_rotate_runs_when_idle() {
        let mut e = engine();
        open(&mut e, SubjectId::Math);
        let before = rotation_y(&e);
        let report = e.update(0.016);
        assert_eq!(report.rotation, RotationSource::AutoRotate);
        assert!((rotation_y(&e) - before - 0.005).abs() < 1e-6);
    }

    #[test]
    fn drag_suppresses_auto_rotate() {
        let mut e = engine();
        open(&mut e, SubjectId::Math);
        let _ = e.handle_input(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = e.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let before = rotation_y(&e);

        let idle_drag = e.update(0.016);
        assert_eq!(idle_drag.rotation, RotationSource::Drag);
        assert_eq!(rotation_y(&e), before);

        let _ = e.handle_input(InputEvent::CursorMoved { x: 30.0, y: 0.0 });
        let moved = e.update(0.016);
        assert_eq!(moved.rotation, RotationSource::Drag);
        assert!((rotation_y(&e) - before - 0.3).abs() < 1e-5);
    }

    #[test]
    fn toggling_auto_rotate_off_leaves_objects_still() {
        let mut e = engine();
        open(&mut e, SubjectId::Math);
        e.execute(EduCommand::ToggleAutoRotate);
        let before = rotation_y(&e);
        assert_eq!(e.update(0.016).rotation, RotationSource::None);
        assert_eq!(rotation_y(&e), before);
    }

    #[test]
    fn open_builds_without_delay() {
        let mut e = engine();
        e.open(SubjectId::Geography, 2).unwrap();
        assert!(!e.is_loading());
        assert_eq!(e.scene().primitive_count(), 23);
        assert!(!e.update(0.016).rebuilt);
    }

    #[test]
    fn open_with_bad_model_keeps_picker() {
        let mut e = engine();
        assert!(e.open(SubjectId::Geography, 5).is_err());
        assert!(e.subject().is_none());
        assert!(e.scene().is_empty());
    }

    #[test]
    fn switching_subject_keeps_old_scene_until_commit() {
        let mut e = engine();
        open(&mut e, SubjectId::Math);
        e.execute(EduCommand::NextModel);
        let _ = e.update(0.016);
        let generation = e.scene().generation();

        e.execute(EduCommand::SelectSubject(SubjectId::Physics));
        let report = e.update(0.2);
        assert!(!report.rebuilt);
        assert_eq!(e.scene().generation(), generation);
        assert_eq!(e.model_index(), 1);

        assert!(e.update(0.4).rebuilt);
        assert_eq!(e.subject(), Some(SubjectId::Physics));
        assert_eq!(e.model_index(), 0);
        assert_eq!(e.scene().primitive_count(), 7);
    }

    #[test]
    fn fact_follows_subject() {
        let mut e = engine();
        assert_eq!(e.fact(), NO_SUBJECT_FACT);
        open(&mut e, SubjectId::Physics);
        assert_eq!(e.fact(), "Atoms are 99.9% empty space!");
    }

    #[test]
    fn caption_follows_selection() {
        let mut e = engine();
        assert_eq!(e.caption(), "EduVerse 3D | choose a subject (1-6)");
        e.execute(EduCommand::SelectSubject(SubjectId::Biology));
        assert_eq!(e.caption(), "EduVerse 3D | Loading 3D scene...");
        let _ = e.update(1.0);
        e.execute(EduCommand::NextModel);
        e.execute(EduCommand::SetMode(Mode::Play));
        assert_eq!(
            e.caption(),
            "EduVerse 3D | Biology | Human Heart (2/3) | Game Mode"
        );
    }

    #[test]
    fn reset_clears_scene_and_selection() {
        let mut e = engine();
        open(&mut e, SubjectId::Chemistry);
        e.execute(EduCommand::ToggleMode);
        assert_eq!(e.mode(), Mode::Play);

        e.execute(EduCommand::Reset);
        let _ = e.update(0.016);
        assert!(e.scene().is_empty());
        assert_eq!(e.mode(), Mode::Learn);
        assert!(e.subject().is_none());
    }
}
