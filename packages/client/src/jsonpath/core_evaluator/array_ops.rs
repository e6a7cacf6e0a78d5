//! Array index and slice arithmetic
//!
//! Negative indexes count from the end. Slice bounds are clamped to the
//! array, so an out-of-range slice selects fewer elements instead of failing.

/// Resolve a possibly negative index against an array of `len` elements
#[inline]
#[must_use]
pub fn resolve_index(len: usize, index: i64) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let actual = if index < 0 { len + index } else { index };
    if (0..len).contains(&actual) {
        usize::try_from(actual).ok()
    } else {
        None
    }
}

/// Element positions selected by `[start:end:step]`, in selection order
///
/// Missing bounds default by step direction: a positive step walks from the
/// first element through the last, a negative one from the last back to the
/// first. A zero step selects nothing; the parser never produces one.
#[must_use]
pub fn slice_indices(len: usize, start: Option<i64>, end: Option<i64>, step: i64) -> Vec<usize> {
    let Ok(len) = i64::try_from(len) else {
        return Vec::new();
    };
    let normalize = |i: i64| if i < 0 { len + i } else { i };

    let mut indices = Vec::new();
    if step > 0 {
        let lower = start.map_or(0, |s| normalize(s).clamp(0, len));
        let upper = end.map_or(len, |e| normalize(e).clamp(0, len));
        let mut i = lower;
        while i < upper {
            indices.extend(usize::try_from(i).ok());
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    } else if step < 0 {
        let upper = start.map_or(len - 1, |s| normalize(s).clamp(-1, len - 1));
        let lower = end.map_or(-1, |e| normalize(e).clamp(-1, len - 1));
        let mut i = upper;
        while lower < i {
            indices.extend(usize::try_from(i).ok());
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    }
    indices
}
