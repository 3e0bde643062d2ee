//! Audio cue playback.
//!
//! [`CueBank`] owns one `<audio>` element per [`Cue`], addressed by the
//! enum rather than by string key. Playback is best-effort: a failed
//! `play()` (autoplay policy, missing file, decode error) is logged to
//! the console and otherwise ignored, and never affects other cues.
//!
//! Finish plans are dispatched by [`play_plan`] through the
//! [`CuePlayer`] and [`CueTimer`] seams; the browser implementations
//! are [`CueBank`] and [`BrowserTimer`].

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use oreo_stack::{Cue, CuePlan, CueSources};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

/// Errors that can occur when starting a cue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// The cue's audio element could not be created.
    #[error("no audio loaded for cue {0}")]
    Unavailable(Cue),

    /// The browser refused to start playback.
    #[error("playing cue {cue} failed: {reason}")]
    Rejected {
        /// Cue that failed.
        cue: Cue,
        /// Browser error.
        reason: String,
    },
}

/// Something that can start a cue.
pub trait CuePlayer {
    /// Start playing `cue` now.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if playback could not be started.
    fn play(&self, cue: Cue) -> Result<(), PlaybackError>;

    /// Report a failure from [`play`](Self::play).
    fn report(&self, err: &PlaybackError);
}

/// Runs a task after a delay.
pub trait CueTimer {
    /// Run `task` once, `delay_ms` milliseconds from now.
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Start `cue` on `player`, reporting rather than returning a failure.
pub fn start<P: CuePlayer + ?Sized>(player: &P, cue: Cue) {
    if let Err(err) = player.play(cue) {
        player.report(&err);
    }
}

/// Play a finish plan.
///
/// A celebration plays at once. Each cue of a sequence gets its own
/// timer at its offset, so a failing cue never holds up the next one.
/// The timers are not retained: a second call before the first
/// finishes overlaps with it.
pub fn play_plan<P, T>(player: &Rc<P>, timer: &T, plan: &CuePlan)
where
    P: CuePlayer + 'static,
    T: CueTimer + ?Sized,
{
    match plan {
        CuePlan::Celebration(cue) => start(player.as_ref(), *cue),
        CuePlan::Sequence(cues) => {
            for scheduled in cues.iter().copied() {
                let player = Rc::clone(player);
                timer.after(
                    scheduled.offset_ms,
                    Box::new(move || start(player.as_ref(), scheduled.cue)),
                );
            }
        }
    }
}

/// [`CueTimer`] backed by browser timeouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl CueTimer for BrowserTimer {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            task();
        });
    }
}

/// Loaded audio elements for every cue.
pub struct CueBank {
    /// Indexed by [`Cue::index`]. `None` if the element could not be
    /// created; that cue is silent.
    handles: [Option<HtmlAudioElement>; 4],
}

impl CueBank {
    /// Create an audio element for each cue from `sources`.
    ///
    /// Elements that cannot be created are reported to the console and
    /// left silent.
    #[must_use]
    pub fn load(sources: &CueSources) -> Self {
        let handles = Cue::ALL.map(|cue| {
            match HtmlAudioElement::new_with_src(sources.source(cue)) {
                Ok(audio) => Some(audio),
                Err(err) => {
                    web_sys::console::warn_2(
                        &JsValue::from_str(&format!("failed to load cue {cue}:")),
                        &err,
                    );
                    None
                }
            }
        });
        Self { handles }
    }

    fn handle(&self, cue: Cue) -> Option<&HtmlAudioElement> {
        self.handles.get(cue.index()).and_then(Option::as_ref)
    }

    /// Play the per-press cue for `cue` now.
    pub fn play_now(&self, cue: Cue) {
        start(self, cue);
    }

    /// Play a finish plan on browser timers.
    pub fn play_plan(self: &Rc<Self>, plan: &CuePlan) {
        play_plan(self, &BrowserTimer, plan);
    }
}

impl CuePlayer for CueBank {
    /// Returns once playback is requested; a rejected play promise is
    /// logged when it settles.
    fn play(&self, cue: Cue) -> Result<(), PlaybackError> {
        let audio = self.handle(cue).ok_or(PlaybackError::Unavailable(cue))?;
        let promise = audio.play().map_err(|err| PlaybackError::Rejected {
            cue,
            reason: format!("{err:?}"),
        })?;
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                web_sys::console::error_2(
                    &JsValue::from_str(&format!("Error playing audio ({cue}):")),
                    &err,
                );
            }
        });
        Ok(())
    }

    fn report(&self, err: &PlaybackError) {
        web_sys::console::error_1(&JsValue::from_str(&format!("Error playing audio: {err}")));
    }
}
