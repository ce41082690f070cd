use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::buffer::PixelBuffer;
use crate::foundation::error::{RemaskError, RemaskResult};
use crate::foundation::geom::Selection;
use crate::mask::op::MaskOp;

/// Cloneable cancellation handle for a running [`FrameBatch`].
///
/// Cancelling never interrupts a frame mid-transform; the batch observes
/// the token on its next step and discards everything it produced.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of one [`FrameBatch::step`].
#[derive(Debug, PartialEq)]
pub enum BatchStep {
    /// One more frame done; `fraction` is `i/N` for the just-processed
    /// frame index `i`. The frame itself is readable via
    /// [`FrameBatch::preview`] until the next step.
    Progress { fraction: f64 },
    /// Every frame processed: the full replacement frame sequence,
    /// committed all-or-nothing.
    Done(Vec<PixelBuffer>),
    /// The token fired; all partial results were discarded. Not an error.
    Cancelled,
}

/// Applies one resolved transform to every frame of a sequence, one frame
/// per step, so a host scheduler can repaint progress between steps.
///
/// The processor is single-threaded and cooperative: it owns the frames
/// for the duration of the run and commits the new sequence only on
/// completion, so a cancelled or dropped batch leaves the host's frame set
/// untouched.
pub struct FrameBatch {
    frames: Vec<PixelBuffer>,
    done: Vec<PixelBuffer>,
    selection: Selection,
    op: MaskOp,
    next: usize,
    finished: bool,
    token: CancelToken,
}

impl FrameBatch {
    /// Validates the selection against every frame up front, so a run can
    /// only fail on a genuinely malformed frame sequence.
    pub fn new(frames: Vec<PixelBuffer>, selection: Selection, op: MaskOp) -> RemaskResult<Self> {
        if frames.is_empty() {
            return Err(RemaskError::validation(
                "frame batch needs at least one frame",
            ));
        }
        for (i, frame) in frames.iter().enumerate() {
            selection
                .validate_for(frame.width, frame.height)
                .map_err(|e| RemaskError::validation(format!("frame {i}: {e}")))?;
        }
        let done = Vec::with_capacity(frames.len());
        Ok(Self {
            frames,
            done,
            selection,
            op,
            next: 0,
            finished: false,
            token: CancelToken::new(),
        })
    }

    /// Use an external cancellation token instead of the batch's own.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.token = token;
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn total_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn processed_frames(&self) -> usize {
        self.next
    }

    /// The most recently produced frame, for live preview.
    pub fn preview(&self) -> Option<&PixelBuffer> {
        self.done.last()
    }

    /// Process exactly one frame. Stepping again after `Done` or
    /// `Cancelled` is an error.
    #[tracing::instrument(skip(self), fields(frame = self.next, total = self.frames.len()))]
    pub fn step(&mut self) -> RemaskResult<BatchStep> {
        if self.finished {
            return Err(RemaskError::validation("frame batch already finished"));
        }
        if self.token.is_cancelled() {
            tracing::debug!(processed = self.next, "batch cancelled, discarding results");
            self.finished = true;
            self.done.clear();
            return Ok(BatchStep::Cancelled);
        }

        let i = self.next;
        let mut frame = std::mem::take(&mut self.frames[i]);
        self.op.apply(&mut frame, self.selection)?;
        self.done.push(frame);
        self.next += 1;

        if self.next == self.frames.len() {
            self.finished = true;
            Ok(BatchStep::Done(std::mem::take(&mut self.done)))
        } else {
            Ok(BatchStep::Progress {
                fraction: i as f64 / self.frames.len() as f64,
            })
        }
    }
}

/// Drive a batch to completion, reporting progress through a callback.
///
/// `on_progress(fraction, preview)` fires only when the rounded percentage
/// advances, so hosts repainting an indicator are not flooded on long
/// sequences. Returns `Ok(None)` if the token fired before completion.
pub fn process_frames(
    frames: Vec<PixelBuffer>,
    selection: Selection,
    op: MaskOp,
    token: CancelToken,
    mut on_progress: impl FnMut(f64, &PixelBuffer),
) -> RemaskResult<Option<Vec<PixelBuffer>>> {
    let mut batch = FrameBatch::new(frames, selection, op)?.with_cancel_token(token);
    let mut prev_pct = 0u32;

    loop {
        match batch.step()? {
            BatchStep::Progress { fraction } => {
                let pct = (fraction * 100.0).round() as u32;
                if pct > prev_pct {
                    prev_pct = pct;
                    if let Some(preview) = batch.preview() {
                        on_progress(fraction, preview);
                    }
                }
            }
            BatchStep::Done(frames) => return Ok(Some(frames)),
            BatchStep::Cancelled => return Ok(None),
        }
    }
}
