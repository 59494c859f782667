// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the ViewBounds struct, which describes the rectangle of
//! the complex plane that gets mapped onto the output raster, and
//! the linear interpolation from a pixel coordinate to a point
//! inside that rectangle.

use num::Complex;

/// The rectangular region of the complex plane shown in the output
/// raster.  The real axis runs left to right from `xmin` to `xmax`,
/// the imaginary axis top to bottom from `ymin` to `ymax`.  Built
/// once at startup and never changed afterward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewBounds {
    /// Real part mapped to the left edge of the raster.
    pub xmin: f64,
    /// Real part mapped to the right edge of the raster.
    pub xmax: f64,
    /// Imaginary part mapped to the top edge of the raster.
    pub ymin: f64,
    /// Imaginary part mapped to the bottom edge of the raster.
    pub ymax: f64,
}

impl ViewBounds {
    /// Constructor.  Rejects rectangles whose corners are inverted
    /// or coincident, since the pixel-to-point interpolation below
    /// assumes a region with positive width and height.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<ViewBounds, String> {
        if !(xmin < xmax) {
            return Err("xmin must be strictly less than xmax".to_string());
        }
        if !(ymin < ymax) {
            return Err("ymin must be strictly less than ymax".to_string());
        }
        Ok(ViewBounds {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// Given a pixel coordinate and the raster dimensions, return
    /// the corresponding point on the complex plane by linear
    /// interpolation.  Pixel (0, 0) lands exactly on (xmin, ymin);
    /// the far corner approaches, but does not reach, (xmax, ymax).
    /// Total over every valid raster coordinate, so no bounds
    /// checking is done here.
    pub fn point_at(&self, px: usize, py: usize, width: usize, height: usize) -> Complex<f64> {
        Complex {
            re: self.xmin + ((px as f64) / (width as f64)) * (self.xmax - self.xmin),
            im: self.ymin + ((py as f64) / (height as f64)) * (self.ymax - self.ymin),
        }
    }
}

/// The region from roughly (-2, -1.12i) to (0.47, 1.12i), which
/// frames the whole set with a little margin.
impl Default for ViewBounds {
    fn default() -> ViewBounds {
        ViewBounds {
            xmin: -2.00,
            xmax: 0.47,
            ymin: -1.12,
            ymax: 1.12,
        }
    }
}
