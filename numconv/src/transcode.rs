//! Narrow/wide text conversion by code unit truncation and widening.
//!
//! This is a byte-level reinterpretation, not a Unicode conversion: wide
//! units above 0xFF lose their high bits. The numeric conversions only ever
//! route ASCII digits through here.

use crate::{Result, types::WideUnit};

/// Truncates every wide code unit to its low eight bits.
pub fn wide_to_narrow<W: WideUnit>(wide: &[W]) -> Result<Vec<u8>> {
    let mut narrow = Vec::new();
    narrow.try_reserve(wide.len())?;
    narrow.extend(wide.iter().map(|unit| unit.to_narrow()));
    Ok(narrow)
}

/// Zero-extends every byte into one wide code unit.
pub fn narrow_to_wide<W: WideUnit>(narrow: &[u8]) -> Result<Vec<W>> {
    let mut wide = Vec::new();
    wide.try_reserve(narrow.len())?;
    wide.extend(narrow.iter().copied().map(W::from_narrow));
    Ok(wide)
}

/// The part of a NUL terminated buffer before its first terminator.
pub fn narrow_until_nul(text: &[u8]) -> &[u8] {
    let end = text.iter().position(|&unit| unit == 0).unwrap_or(text.len());
    &text[..end]
}

/// Wide counterpart of [`narrow_until_nul`].
pub fn wide_until_nul<W: WideUnit>(text: &[W]) -> &[W] {
    let end = text
        .iter()
        .position(|&unit| unit == W::NUL)
        .unwrap_or(text.len());
    &text[..end]
}

/// Widens `narrow` into `wide` up to the first NUL of `narrow`.
///
/// `wide` is zeroed first; copying stops at whichever buffer ends first.
/// Returns the number of units copied.
pub(crate) fn widen_into<W: WideUnit>(narrow: &[u8], wide: &mut [W]) -> usize {
    wide.fill(W::NUL);

    let narrow = narrow_until_nul(narrow);
    let mut copied = 0;
    for (dst, &src) in wide.iter_mut().zip(narrow) {
        *dst = W::from_narrow(src);
        copied += 1;
    }
    copied
}
