// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate image;
extern crate mandelview;

use clap::{App, AppSettings, Arg, ArgMatches};
use image::ColorType;
use mandelview::{PaletteKind, Renderer, ViewBounds};
use std::process::exit;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_float(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

const COORDS: &str = "coords";
const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const PALETTE: &str = "palette";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandelview")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot escape-time renderer")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name(COORDS)
                .required(false)
                .max_values(4)
                .validator(|s| validate_float(&s, "Coordinates must be floating point numbers"))
                .help("View bounds as four values: XMIN XMAX YMIN YMAX"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("mandelbrot.png")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1024x1024")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("512")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Iteration cap of the escape-time loop"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .required(false)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .default_value("hue")
                .possible_values(&["hue", "gray"])
                .help("Palette strategy"),
        )
        .get_matches()
}

fn main() {
    let matches = args();

    // Zero coordinates means the default framing of the whole set;
    // anything short of all four leaves the defaults in place.
    let coords: Vec<f64> = matches
        .values_of(COORDS)
        .map(|vs| vs.map(|v| f64::from_str(v).unwrap()).collect())
        .unwrap_or_else(Vec::new);
    let bounds = if coords.len() == 4 {
        match ViewBounds::new(coords[0], coords[1], coords[2], coords[3]) {
            Ok(bounds) => bounds,
            Err(e) => {
                eprintln!("Bad view bounds: {}", e);
                exit(1);
            }
        }
    } else {
        ViewBounds::default()
    };

    let (width, height) =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count");
    let kind = match matches.value_of(PALETTE).unwrap() {
        "gray" => PaletteKind::Grayscale,
        _ => PaletteKind::HueRamp,
    };

    let renderer = match Renderer::new(bounds, iterations, kind) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Configuration failure: {}", e);
            exit(1);
        }
    };

    let frame = renderer.render_frame(width, height);
    if let Err(e) = image::save_buffer(
        matches.value_of(OUTPUT).unwrap(),
        &frame,
        width as u32,
        height as u32,
        ColorType::RGBA(8),
    ) {
        eprintln!("Could not write output image: {}", e);
        exit(1);
    }
}
