//! Remask is a reversible pixel-region transform engine for RGBA8 buffers.
//!
//! The engine is a library of deterministic, bijective operations on
//! rectangular regions of row-major RGBA pixel buffers, plus the machinery
//! to compose, replay and batch them:
//!
//! 1. **Transforms**: xor, channel rotation, flips, glass blocks, the Win
//!    scramble, the FL spiral, the Meko cell permutation and the keyed CP
//!    permutation, each paired with an exact inverse ([`MaskOp`]).
//! 2. **Registry**: the closed [`MaskKind`] action set maps stable names to
//!    transforms and their inverses, checked exhaustively at compile time.
//! 3. **History**: an append-only undo/redo log of applied entries
//!    ([`History`]) with availability hooks for UI controls.
//! 4. **Batch**: a cooperative one-frame-per-step processor over frame
//!    sequences ([`FrameBatch`]) with progress reporting and all-or-nothing
//!    commit under cancellation.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Exact round-trips**: for every action `A` with reverse `R`,
//!   `R(A(buffer)) == buffer` byte for byte, over the whole buffer.
//! - **Snapshot before write**: permutation transforms never read from the
//!   region they are rewriting; they copy it first.
//! - **No IO**: media decoding, rendering and prompts are the host's
//!   problem; the engine only sees buffers, selections and codes.
#![forbid(unsafe_code)]

pub mod batch;
pub mod buffer;
mod foundation;
pub mod history;
pub mod mask;

pub use batch::{BatchStep, CancelToken, FrameBatch, process_frames};
pub use buffer::{BYTES_PER_PIXEL, PixelBuffer};
pub use foundation::error::{RemaskError, RemaskResult};
pub use foundation::geom::{Point, Selection};
pub use history::{History, HistoryEntry, HistoryHooks};
pub use mask::Axis;
pub use mask::chain::Chain;
pub use mask::op::MaskOp;
pub use mask::registry::{MaskKind, Resolved};
