//! retouch-session: Edit history and undo state for the image editor.
//!
//! A [`Session`] owns the immutable original image, the current filtered
//! image, and the append-only undo history connecting them. Presentation
//! drives it: every slider event calls [`Session::adjust`] (recomputing
//! from the original), every filter button calls [`Session::apply`]
//! (stacking onto the current result), and the undo/reset/save buttons
//! map to the methods of the same names.
//!
//! Invariants, maintained by every method:
//!
//! - history is non-empty once an image is loaded, and `history[0]` is
//!   the original;
//! - the current image is always the last history entry;
//! - no method mutates state when it returns an error.
//!
//! The session is single-threaded by design: callers must serialize
//! access (a GUI event loop does this naturally). Undone entries are
//! dropped immediately; nothing outside the live history is retained.

use retouch_pipeline::{AdjustParams, DiscreteFilter, RgbImage};

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// An operation other than `load` was attempted before any image
    /// was loaded.
    #[error("no image loaded")]
    NoImageLoaded,

    /// `undo` was called with only the original image in history.
    #[error("nothing to undo")]
    NothingToUndo,

    /// `load` was handed an image with no pixels.
    #[error("image has zero area ({width}x{height})")]
    InvalidImage {
        /// Offending width in pixels.
        width: u32,
        /// Offending height in pixels.
        height: u32,
    },
}

/// One editing session: original image, current image, undo history.
#[derive(Debug, Clone, Default)]
pub struct Session {
    original: Option<RgbImage>,
    history: Vec<RgbImage>,
}

impl Session {
    /// Create an empty session. Only [`Session::load`] is valid until
    /// an image arrives.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an image has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.original.is_some()
    }

    /// Number of history entries (1 right after a load).
    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// The untouched original image, if loaded.
    #[must_use]
    pub fn original(&self) -> Option<&RgbImage> {
        self.original.as_ref()
    }

    /// The current filtered image, if loaded.
    #[must_use]
    pub fn current(&self) -> Option<&RgbImage> {
        self.history.last()
    }

    /// Load an image, replacing any previous session state.
    ///
    /// On success the original, the current image, and the sole history
    /// entry are all `image`. On failure the previous state (if any) is
    /// left intact.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidImage`] if `image` has zero area.
    pub fn load(&mut self, image: RgbImage) -> Result<(), SessionError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SessionError::InvalidImage { width, height });
        }
        self.history = vec![image.clone()];
        self.original = Some(image);
        Ok(())
    }

    /// Append an externally produced image to history and make it
    /// current.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if nothing is loaded.
    pub fn push(&mut self, image: RgbImage) -> Result<(), SessionError> {
        if self.original.is_none() {
            return Err(SessionError::NoImageLoaded);
        }
        self.history.push(image);
        Ok(())
    }

    /// Drop the most recent history entry and make its predecessor
    /// current.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if nothing is loaded,
    /// [`SessionError::NothingToUndo`] when only the original remains.
    /// Presentation may treat the latter as a no-op to match editors
    /// that silently ignore the extra undo.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        if self.original.is_none() {
            return Err(SessionError::NoImageLoaded);
        }
        if self.history.len() <= 1 {
            return Err(SessionError::NothingToUndo);
        }
        self.history.pop();
        Ok(())
    }

    /// Truncate history back to the original image.
    ///
    /// Continuous parameters should revert to [`AdjustParams::default`]
    /// on the presentation side at the same time.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if nothing is loaded.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.original.is_none() {
            return Err(SessionError::NoImageLoaded);
        }
        self.history.truncate(1);
        Ok(())
    }

    /// The current image, for encoding by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if nothing is loaded.
    pub fn save(&self) -> Result<&RgbImage, SessionError> {
        self.history.last().ok_or(SessionError::NoImageLoaded)
    }

    /// Recompute the continuous adjustments from the original image and
    /// push the result.
    ///
    /// Every call pushes exactly one history entry -- including calls
    /// that repeat the previous parameters. Slider drags therefore grow
    /// history by one entry per event, and each tick is individually
    /// undoable. Consecutive entries are deliberately not coalesced.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if nothing is loaded.
    pub fn adjust(&mut self, params: &AdjustParams) -> Result<&RgbImage, SessionError> {
        let original = self.original.as_ref().ok_or(SessionError::NoImageLoaded)?;
        let adjusted = retouch_pipeline::adjust(original, params);
        self.history.push(adjusted);
        self.history.last().ok_or(SessionError::NoImageLoaded)
    }

    /// Apply a one-shot filter to the current image and push the result.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if nothing is loaded.
    pub fn apply(&mut self, filter: DiscreteFilter) -> Result<&RgbImage, SessionError> {
        let current = self.history.last().ok_or(SessionError::NoImageLoaded)?;
        let filtered = retouch_pipeline::apply(current, filter);
        self.history.push(filtered);
        self.history.last().ok_or(SessionError::NoImageLoaded)
    }
}
