// SPDX-License-Identifier: MPL-2.0
//! `extension_icons` produces the square PNG icons a browser extension ships
//! (16, 32, 48 and 128 px).
//!
//! Two independent generators are provided: [`generator`] rasterizes an SVG
//! with resvg, [`drawer`] paints a built-in camera icon with tiny-skia. Both
//! write RGBA PNGs through [`png`] and report per-size [`report::SizeOutcome`]s.

pub mod camera;
pub mod config;
pub mod drawer;
pub mod error;
pub mod generator;
pub mod icon_size;
pub mod pixmap;
pub mod png;
pub mod report;
pub mod svg;
