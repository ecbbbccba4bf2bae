//! Double-buffered exposure state.
//!
//! Two scalars rotate between frames: `current` is the exposure read (and
//! handed to tone-mapping) this frame, `next` is the value written this frame
//! and read on the following one.
//!
//! # Layout
//!
//! ```text
//! offset 0: current (f32)
//! offset 4: next    (f32)
//! ```
//!
//! No header, no padding. The same 8 bytes can back a GPU storage buffer,
//! which is why the type is [`Pod`].

use bytemuck::{Pod, Zeroable};

use crate::error::{Error, Result};

/// Exposure both fields start from before the first update.
pub const DEFAULT_EXPOSURE: f32 = 1.0;

/// Persisted `(current, next)` exposure pair.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureState {
    /// Exposure used for this frame.
    pub current: f32,
    /// Exposure produced for the following frame.
    pub next: f32,
}

impl Default for ExposureState {
    fn default() -> Self {
        Self::uniform(DEFAULT_EXPOSURE)
    }
}

impl ExposureState {
    /// Size of the persisted layout in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates a state from explicit values.
    #[inline]
    pub const fn new(current: f32, next: f32) -> Self {
        Self { current, next }
    }

    /// Creates a state with both slots set to `exposure`.
    #[inline]
    pub const fn uniform(exposure: f32) -> Self {
        Self::new(exposure, exposure)
    }

    /// Promotes last frame's output to this frame's input.
    #[inline]
    pub fn rotate(&mut self) {
        self.current = self.next;
    }

    /// `[current, next]`.
    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.current, self.next]
    }

    /// Inverse of [`to_array`](Self::to_array).
    #[inline]
    pub fn from_array(values: [f32; 2]) -> Self {
        Self::new(values[0], values[1])
    }

    /// Raw bytes in native endianness.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads state back from its raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(Error::InvalidStateBytes {
                len: bytes.len(),
                expected: Self::SIZE,
            });
        }
        // Source slice may be unaligned.
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// `true` if both slots lie within `[min, max]`.
    #[inline]
    pub fn is_within(&self, min: f32, max: f32) -> bool {
        (min..=max).contains(&self.current) && (min..=max).contains(&self.next)
    }
}
