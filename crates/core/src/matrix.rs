//! In-place helpers for 4x4 affine matrices (column-major `DMat4`).
//!
//! Composition follows the post-multiply convention: every operation applied
//! to `a` acts in `a`'s local frame, so applying parent transforms first and
//! child transforms last maps the child's frame into scene space.

use crate::{DMat4, DVec3};

/// Resets `target` to the identity matrix.
#[inline]
pub fn identity(target: &mut DMat4) -> &mut DMat4 {
    *target = DMat4::IDENTITY;
    target
}

/// Copies `source` into `target`.
#[inline]
pub fn copy<'a>(source: &DMat4, target: &'a mut DMat4) -> &'a mut DMat4 {
    *target = *source;
    target
}

/// `a := a * b`; `b` is applied inside `a`'s current frame.
#[inline]
pub fn multiply<'a>(a: &'a mut DMat4, b: &DMat4) -> &'a mut DMat4 {
    *a = *a * *b;
    a
}

/// Appends a translation by `(x, y, z)` to `matrix`.
pub fn translate(matrix: &mut DMat4, x: f64, y: f64, z: f64) -> &mut DMat4 {
    let t = DMat4::from_translation(DVec3::new(x, y, z));
    multiply(matrix, &t)
}

/// Appends a non-uniform scale by `(x, y, z)` to `matrix`.
pub fn scale(matrix: &mut DMat4, x: f64, y: f64, z: f64) -> &mut DMat4 {
    let s = DMat4::from_scale(DVec3::new(x, y, z));
    multiply(matrix, &s)
}

/// The translation column (elements 12, 13, 14).
#[inline]
pub fn translation(matrix: &DMat4) -> DVec3 {
    matrix.w_axis.truncate()
}
