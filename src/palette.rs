// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Palette construction.  A palette is an ordered table with one
//! color per possible escape count, built once before rendering
//! starts and read-only afterward.  Two strategies are provided: a
//! plain grayscale ramp and the default hue-rotating ramp, which
//! sweeps the full hue circle across the index range and paints the
//! final no-escape slot black.

use image::Rgba;

/// Which construction strategy to use when building the palette.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PaletteKind {
    /// All three channels equal to the index modulo 256.
    Grayscale,
    /// Full-saturation hue sweep, with the last entry forced to
    /// black.
    HueRamp,
}

/// Convert an HSV triple to 8-bit RGB channels using the standard
/// sector formula.  Hue is in degrees in [0, 360]; saturation and
/// value are in [0, 1].  Inputs outside those ranges are a
/// configuration error, not something to clamp silently.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Result<(u8, u8, u8), String> {
    if !(0.0..=360.0).contains(&h) {
        return Err(format!("hue {} out of range [0, 360]", h));
    }
    if !(0.0..=1.0).contains(&s) {
        return Err(format!("saturation {} out of range [0, 1]", s));
    }
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("value {} out of range [0, 1]", v));
    }

    let c = v * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    let q = |f: f64| ((f + m) * 255.0).round() as u8;
    Ok((q(r1), q(g1), q(b1)))
}

/// Build a palette of exactly `cap` colors under the given strategy.
/// Entry i is the display color for points escaping at iteration i;
/// the evaluator's no-escape fallback lands on the last entry.  The
/// only failure mode is an out-of-domain HSV conversion, which for a
/// well-formed strategy cannot happen and is surfaced as a fatal
/// configuration error by the caller.
pub fn build(kind: PaletteKind, cap: usize) -> Result<Vec<Rgba<u8>>, String> {
    let mut palette = Vec::with_capacity(cap);
    for i in 0..cap {
        let color = match kind {
            PaletteKind::Grayscale => {
                let luma = (i % 256) as u8;
                Rgba {
                    data: [luma, luma, luma, 0xff],
                }
            }
            PaletteKind::HueRamp => {
                let h = 360.0 * (i as f64) / (cap as f64);
                let v = if i == cap - 1 { 0.0 } else { 1.0 };
                let (r, g, b) = hsv_to_rgb(h, 1.0, v)?;
                Rgba {
                    data: [r, g, b, 0xff],
                }
            }
        };
        palette.push(color);
    }
    Ok(palette)
}
