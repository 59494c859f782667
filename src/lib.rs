#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot escape-time renderer
//!
//! The Mandelbrot set is drawn by taking each pixel of the output
//! raster, mapping it to a point on the complex plane, and
//! repeatedly squaring-and-adding that point until the running value
//! escapes a circle of radius two around the origin.  The iteration
//! count at escape picks a color out of a precomputed palette;
//! points that never escape within the cap get the last palette
//! slot, which the default palette forces to black so the interior
//! of the set stands out.
//!
//! The library is the whole pipeline: the view bounds and the
//! pixel-to-point mapping live in `planes`, the iteration loop in
//! `escape`, the palette strategies in `palette`, and the `Renderer`
//! composes the three into the one function a display driver needs:
//! pixel coordinates in, color out.

extern crate image;
extern crate itertools;
extern crate num;

pub mod escape;
pub mod palette;
pub mod planes;
pub mod render;

pub use escape::escape_time;
pub use palette::PaletteKind;
pub use planes::ViewBounds;
pub use render::Renderer;
