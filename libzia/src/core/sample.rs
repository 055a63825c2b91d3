//! Sample trait for the signal element widths the transforms accept.
//!
//! Sealed: only `i16` and `i32` implement it, so every kernel is a single
//! generic body instantiated for exactly those two widths.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::SampleWidth;

mod private {
    pub trait Sealed {}

    impl Sealed for i16 {}
    impl Sealed for i32 {}
}

/// Signed integer sample of a signal.
///
/// The float conversions here are the only ones the predictor and the
/// reconstructor use, so both directions round and cast identically.
pub trait Sample:
    private::Sealed + Copy + Debug + PartialEq + Default + Send + Sync + Serialize + DeserializeOwned
{
    /// Width tag written into container headers
    const WIDTH: SampleWidth;

    /// Bytes per sample in raw little-endian form
    const BYTES: usize;

    /// Zero value
    const ZERO: Self;

    /// Exact conversion for i16, nearest-f32 for large i32 values
    fn to_f32(self) -> f32;

    /// Cast an already rounded prediction into the native width.
    /// Saturates out-of-range values and maps NaN to zero (`as` semantics).
    fn from_rounded(v: f32) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Write value to byte slice (little-endian)
    fn write_le(self, buf: &mut [u8]);

    /// Read value from byte slice (little-endian)
    fn read_le(buf: &[u8]) -> Self;
}

macro_rules! impl_sample {
    ($ty:ty, $width:expr) => {
        impl Sample for $ty {
            const WIDTH: SampleWidth = $width;
            const BYTES: usize = std::mem::size_of::<$ty>();
            const ZERO: Self = 0;

            #[inline]
            fn to_f32(self) -> f32 {
                self as f32
            }

            #[inline]
            fn from_rounded(v: f32) -> Self {
                v as $ty
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn write_le(self, buf: &mut [u8]) {
                buf[..Self::BYTES].copy_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn read_le(buf: &[u8]) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                bytes.copy_from_slice(&buf[..Self::BYTES]);
                <$ty>::from_le_bytes(bytes)
            }
        }
    };
}

impl_sample!(i16, SampleWidth::Bits16);
impl_sample!(i32, SampleWidth::Bits32);
