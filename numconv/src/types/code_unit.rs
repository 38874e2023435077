use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// A wide text code unit (`wchar_t` on the platform side).
///
/// Implemented for `u16` and `u32`. Conversion to and from narrow bytes is a
/// plain truncation or zero extension, not an encoding conversion.
pub trait WideUnit: Copy + Default + PartialEq + fmt::Debug + sealed::Sealed {
    const NUL: Self;

    fn from_narrow(unit: u8) -> Self;

    /// Low eight bits of the unit.
    fn to_narrow(self) -> u8;
}

impl sealed::Sealed for u16 {}
impl sealed::Sealed for u32 {}

impl WideUnit for u16 {
    const NUL: Self = 0;

    fn from_narrow(unit: u8) -> Self {
        u16::from(unit)
    }

    fn to_narrow(self) -> u8 {
        self as u8
    }
}

impl WideUnit for u32 {
    const NUL: Self = 0;

    fn from_narrow(unit: u8) -> Self {
        u32::from(unit)
    }

    fn to_narrow(self) -> u8 {
        self as u8
    }
}
