// SPDX-License-Identifier: MPL-2.0
//! Paints [`Shape`]s onto a tiny-skia pixmap.
//!
//! Anti-aliasing is off: a pixel takes a shape's color when its center lies
//! inside the shape, so flat icon colors stay exact at every size.

use super::layout::{Bounds, Shape};
use image_rs::Rgba;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Transform};

/// Control point distance approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

/// Paints every shape in order onto `pixmap`.
pub fn paint_shapes(pixmap: &mut Pixmap, shapes: &[Shape]) {
    for shape in shapes {
        paint_shape(pixmap, shape);
    }
}

fn paint_shape(pixmap: &mut Pixmap, shape: &Shape) {
    match *shape {
        Shape::Ellipse {
            bounds,
            fill,
            outline,
        } => match outline {
            Some(outline) => {
                fill_ellipse(pixmap, bounds, outline.color);
                // The ring is what the inset fill leaves uncovered.
                if let Some(inner) = bounds.inset(outline.width) {
                    fill_ellipse(pixmap, inner, fill);
                }
            }
            None => fill_ellipse(pixmap, bounds, fill),
        },
        Shape::RoundedRect {
            bounds,
            radius,
            fill,
        } => {
            if let Some(path) = pixel_rect(bounds).and_then(|r| rounded_rect_path(r, radius as f32))
            {
                fill_path(pixmap, &path, fill);
            }
        }
    }
}

fn fill_ellipse(pixmap: &mut Pixmap, bounds: Bounds, color: Rgba<u8>) {
    if let Some(path) = pixel_rect(bounds).and_then(PathBuilder::from_oval) {
        fill_path(pixmap, &path, color);
    }
}

fn fill_path(pixmap: &mut Pixmap, path: &Path, color: Rgba<u8>) {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = false;
    pixmap.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
}

/// Inclusive pixel bounds as the continuous area those pixels cover.
fn pixel_rect(bounds: Bounds) -> Option<Rect> {
    Rect::from_ltrb(
        bounds.left as f32,
        bounds.top as f32,
        (bounds.right + 1) as f32,
        (bounds.bottom + 1) as f32,
    )
}

fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    if r <= 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }
    let k = r * KAPPA;
    let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::layout::Outline;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let c = pixmap
            .pixel(x, y)
            .expect("pixel should be in range")
            .demultiply();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    #[test]
    fn rounded_rect_fills_edges_but_not_corners() {
        let mut pixmap = Pixmap::new(20, 20).expect("pixmap should allocate");
        paint_shapes(
            &mut pixmap,
            &[Shape::RoundedRect {
                bounds: Bounds::from_origin(2, 2, 15, 15),
                radius: 5,
                fill: RED,
            }],
        );

        assert_eq!(pixel(&pixmap, 10, 2), RED.0);
        assert_eq!(pixel(&pixmap, 2, 10), RED.0);
        assert_eq!(pixel(&pixmap, 10, 10), RED.0);
        assert_eq!(pixel(&pixmap, 2, 2)[3], 0);
        assert_eq!(pixel(&pixmap, 17, 17)[3], 0);
    }

    #[test]
    fn outlined_ellipse_has_ring_and_fill() {
        let mut pixmap = Pixmap::new(32, 32).expect("pixmap should allocate");
        paint_shapes(
            &mut pixmap,
            &[Shape::Ellipse {
                bounds: Bounds::around(16, 16, 14),
                fill: RED,
                outline: Some(Outline {
                    color: BLUE,
                    width: 3,
                }),
            }],
        );

        assert_eq!(pixel(&pixmap, 16, 16), RED.0);
        assert_eq!(pixel(&pixmap, 16, 3), BLUE.0);
        assert_eq!(pixel(&pixmap, 0, 0)[3], 0);
    }

    #[test]
    fn single_pixel_shapes_still_paint() {
        let mut pixmap = Pixmap::new(4, 4).expect("pixmap should allocate");
        paint_shapes(
            &mut pixmap,
            &[Shape::RoundedRect {
                bounds: Bounds::from_origin(1, 1, 0, 0),
                radius: 1,
                fill: RED,
            }],
        );

        assert_eq!(pixel(&pixmap, 1, 1), RED.0);
        assert_eq!(pixel(&pixmap, 2, 2)[3], 0);
    }
}
