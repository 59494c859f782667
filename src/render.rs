// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Ties the pipeline together.  A Renderer holds the immutable
//! per-run configuration and answers the one question a display
//! driver asks: what color is pixel (x, y)?

use image::Rgba;
use itertools::iproduct;

use escape::escape_time;
use palette::{self, PaletteKind};
use planes::ViewBounds;

/// The per-run rendering context: view bounds, iteration cap, and
/// the palette built from them.  Everything inside is read-only once
/// constructed, so a single Renderer can service concurrent
/// per-pixel calls from any number of threads without
/// synchronization.
#[derive(Debug)]
pub struct Renderer {
    bounds: ViewBounds,
    cap: usize,
    palette: Vec<Rgba<u8>>,
}

impl Renderer {
    /// Constructor.  Builds the palette exactly once; its length is
    /// tied to the iteration cap because the escape loop's result is
    /// used directly as a palette index.  A zero cap or a palette
    /// construction failure is a configuration error reported to the
    /// caller before any rendering can begin.
    pub fn new(bounds: ViewBounds, cap: usize, kind: PaletteKind) -> Result<Renderer, String> {
        if cap == 0 {
            return Err("iteration cap must be at least 1".to_string());
        }
        let palette = palette::build(kind, cap)?;
        Ok(Renderer {
            bounds,
            cap,
            palette,
        })
    }

    /// The driver-facing entry point: map the pixel to its point on
    /// the complex plane, run the escape loop, and look the count up
    /// in the palette.  Pure with respect to the configuration, so
    /// the driver may call it in any order, any number of times per
    /// pixel, from any thread.
    pub fn pixel_color(&self, px: usize, py: usize, width: usize, height: usize) -> Rgba<u8> {
        let z0 = self.bounds.point_at(px, py, width, height);
        self.palette[escape_time(z0, self.cap)]
    }

    /// Fill a whole frame by calling `pixel_color` once per pixel,
    /// returning a row-major RGBA8 buffer suitable for handing to an
    /// image encoder or blitting into a window surface.
    pub fn render_frame(&self, width: usize, height: usize) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(width * height * 4);
        for (py, px) in iproduct!(0..height, 0..width) {
            let color = self.pixel_color(px, py, width, height);
            buffer.extend_from_slice(&color.data);
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_renderer() -> Renderer {
        Renderer::new(ViewBounds::default(), 512, PaletteKind::HueRamp).unwrap()
    }

    #[test]
    fn zero_cap_is_rejected() {
        let r = Renderer::new(ViewBounds::default(), 0, PaletteKind::HueRamp);
        assert!(r.is_err());
    }

    #[test]
    fn resolver_is_idempotent() {
        let r = default_renderer();
        for &(px, py) in &[(0, 0), (512, 512), (1023, 1023), (300, 700)] {
            assert_eq!(
                r.pixel_color(px, py, 1024, 1024),
                r.pixel_color(px, py, 1024, 1024)
            );
        }
    }

    #[test]
    fn corner_pixel_matches_direct_pipeline() {
        let r = default_renderer();
        let bounds = ViewBounds::default();
        // Pixel (0, 0) maps to (-2.00, -1.12i), which escapes fast.
        let z0 = bounds.point_at(0, 0, 1024, 1024);
        let expected = palette::build(PaletteKind::HueRamp, 512).unwrap()[escape_time(z0, 512)];
        assert_eq!(r.pixel_color(0, 0, 1024, 1024), expected);
    }

    #[test]
    fn center_pixel_is_interior_black() {
        // (-0.765, 0.0) sits inside the set, so the hue ramp's black
        // no-escape slot comes back.
        let r = default_renderer();
        assert_eq!(
            r.pixel_color(512, 512, 1024, 1024),
            Rgba {
                data: [0, 0, 0, 0xff]
            }
        );
    }

    #[test]
    fn cap_of_one_paints_everything_with_the_single_entry() {
        let r = Renderer::new(ViewBounds::default(), 1, PaletteKind::Grayscale).unwrap();
        let only = r.pixel_color(0, 0, 16, 16);
        for py in 0..16 {
            for px in 0..16 {
                assert_eq!(r.pixel_color(px, py, 16, 16), only);
            }
        }
    }

    #[test]
    fn frame_buffer_matches_per_pixel_calls() {
        let r = Renderer::new(ViewBounds::default(), 64, PaletteKind::HueRamp).unwrap();
        let frame = r.render_frame(8, 8);
        assert_eq!(frame.len(), 8 * 8 * 4);
        for py in 0..8 {
            for px in 0..8 {
                let offset = (py * 8 + px) * 4;
                let color = r.pixel_color(px, py, 8, 8);
                assert_eq!(&frame[offset..offset + 4], &color.data[..]);
            }
        }
    }
}
