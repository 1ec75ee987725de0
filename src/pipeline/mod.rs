//! Pipeline stages for mark-sheet extraction.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap an
//! implementation (say, a different denoise filter) without touching the
//! others.
//!
//! ## Data Flow
//!
//! ```text
//! preprocess ──▶ assemble ──▶ extract ──▶ classify ──▶ split
//!  (image)       (spans)      (text)      (tokens)    (records)
//! ```
//!
//! 1. [`preprocess`] — normalise a page image for OCR: grayscale, contrast,
//!    median denoise, sharpen, in that fixed order
//! 2. [`assemble`]   — join spans into page text and pages into one
//!    document blob, preserving page order
//! 3. [`extract`]    — scan the blob with the prefix-anchored record
//!    grammar, yielding raw (id, name, token) tuples
//! 4. [`classify`]   — layered status rules turn each raw token into a
//!    final status and optional numeric mark
//! 5. [`split`]      — stable partition of classified records into the
//!    four export categories

pub mod assemble;
pub mod classify;
pub mod extract;
pub mod preprocess;
pub mod split;
