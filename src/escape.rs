// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time loop at the heart of the renderer.

use num::Complex;

/// Iterate z = z² + z0 from the origin and return the index of the
/// first iteration at which the orbit leaves the circle of radius
/// two, or `cap - 1` if it stays inside for the whole run.  The
/// squared magnitude is compared against 4.0 to skip the square
/// root.
///
/// The loop runs `cap - 1` times, not `cap`: the topmost index is
/// reserved for the no-escape case and is never produced by an
/// explicit escape.  Changing the bound to a full `cap` iterations
/// would shift every boundary pixel's color by one palette slot, so
/// the off-by-one stays.
///
/// The result is always in `[0, cap - 1]`, which makes it directly
/// usable as an index into a palette of `cap` entries.  `cap` must
/// be at least 1.
pub fn escape_time(z0: Complex<f64>, cap: usize) -> usize {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 0..cap - 1 {
        z = z * z + z0;
        if z.norm_sqr() > 4.0 {
            return i;
        }
    }
    cap - 1
}
