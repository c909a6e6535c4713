// SPDX-License-Identifier: MPL-2.0
//! Geometry of the procedural camera icon.
//!
//! Every coordinate is defined at the 128 px reference size and scaled with
//! [`IconSize::scale`], so small icons reproduce the floored integer layout
//! exactly. Bounding boxes are inclusive on both ends.

use crate::icon_size::IconSize;
use image_rs::Rgba;

// ==========================================================================
// Palette
// ==========================================================================

pub const BACKGROUND_FILL: Rgba<u8> = Rgba([66, 133, 244, 255]);
pub const BACKGROUND_OUTLINE: Rgba<u8> = Rgba([37, 99, 235, 255]);
pub const BODY_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const INNER_AREA_FILL: Rgba<u8> = Rgba([248, 249, 250, 255]);
pub const LENS_OUTER_FILL: Rgba<u8> = Rgba([95, 99, 104, 255]);
pub const LENS_INNER_FILL: Rgba<u8> = Rgba([32, 33, 36, 255]);
pub const REFLECTION_FILL: Rgba<u8> = Rgba([154, 160, 166, 255]);
pub const FLASH_FILL: Rgba<u8> = Rgba([251, 188, 4, 255]);
pub const VIEWFINDER_FILL: Rgba<u8> = Rgba([52, 168, 83, 255]);

/// Axis-aligned box with inclusive pixel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Bounds {
    /// Box anchored at `(x, y)` reaching `width`/`height` pixels further.
    #[must_use]
    pub fn from_origin(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Square box around a circle.
    #[must_use]
    pub fn around(cx: u32, cy: u32, radius: u32) -> Self {
        Self {
            left: cx.saturating_sub(radius),
            top: cy.saturating_sub(radius),
            right: cx + radius,
            bottom: cy + radius,
        }
    }

    /// Shrinks the box by `amount` on every side, `None` once nothing is left.
    #[must_use]
    pub fn inset(self, amount: u32) -> Option<Self> {
        let left = self.left + amount;
        let top = self.top + amount;
        let right = self.right.checked_sub(amount)?;
        let bottom = self.bottom.checked_sub(amount)?;
        (left <= right && top <= bottom).then_some(Self {
            left,
            top,
            right,
            bottom,
        })
    }
}

/// Ring drawn along the inside edge of an ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub color: Rgba<u8>,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Ellipse {
        bounds: Bounds,
        fill: Rgba<u8>,
        outline: Option<Outline>,
    },
    RoundedRect {
        bounds: Bounds,
        radius: u32,
        fill: Rgba<u8>,
    },
}

impl Shape {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Ellipse { bounds, .. } | Shape::RoundedRect { bounds, .. } => *bounds,
        }
    }

    #[must_use]
    pub fn fill(&self) -> Rgba<u8> {
        match self {
            Shape::Ellipse { fill, .. } | Shape::RoundedRect { fill, .. } => *fill,
        }
    }
}

/// Circle with its center and radius, as the icon describes its round parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub cx: u32,
    pub cy: u32,
    pub radius: u32,
}

impl Circle {
    fn bounds(self) -> Bounds {
        Bounds::around(self.cx, self.cy, self.radius)
    }
}

/// Resolved geometry of every part of the camera icon for one size.
///
/// Optional parts are `None` when they would be too small to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraLayout {
    pub size: IconSize,
    pub background: Circle,
    pub outline_width: u32,
    pub body: Bounds,
    pub body_radius: u32,
    pub inner_area: Bounds,
    pub inner_area_radius: u32,
    pub lens_outer: Circle,
    pub lens_inner: Circle,
    pub reflection: Option<Circle>,
    pub flash: Option<Bounds>,
    pub flash_radius: u32,
    pub viewfinder: Option<Bounds>,
    pub viewfinder_radius: u32,
}

impl CameraLayout {
    /// Computes the layout for `size`.
    #[must_use]
    pub fn for_size(size: IconSize) -> Self {
        let px = size.value();
        let center = size.center();

        let background = Circle {
            cx: center,
            cy: center,
            radius: size.scale(60),
        };

        let body_width = size.scale(64);
        let body_height = size.scale(38);
        let body = Bounds::from_origin(
            (px - body_width) / 2,
            size.scale(45),
            body_width,
            body_height,
        );

        let inner_width = size.scale(58);
        let inner_height = size.scale(32);
        let inner_area = Bounds::from_origin(
            (px - inner_width) / 2,
            size.scale(48),
            inner_width,
            inner_height,
        );

        let lens_outer = Circle {
            cx: center,
            cy: center,
            radius: size.scale(12),
        };
        let lens_inner = Circle {
            radius: size.scale(8),
            ..lens_outer
        };

        let reflection_radius = size.scale(2);
        let reflection_offset = size.scale(2);
        let reflection = (reflection_radius > 0).then_some(Circle {
            cx: center + reflection_offset,
            cy: center - reflection_offset,
            radius: reflection_radius,
        });

        let flash_width = size.scale(8);
        let flash_height = size.scale(6);
        let flash = (flash_width > 2 && flash_height > 2).then(|| {
            Bounds::from_origin(size.scale(78), size.scale(38), flash_width, flash_height)
        });

        let viewfinder_width = size.scale(6);
        let viewfinder_height = size.scale(4);
        let viewfinder = (viewfinder_width > 1 && viewfinder_height > 1).then(|| {
            Bounds::from_origin(
                size.scale(88),
                size.scale(38),
                viewfinder_width,
                viewfinder_height,
            )
        });

        Self {
            size,
            background,
            outline_width: size.scale_min_one(4),
            body,
            body_radius: size.scale_min_one(6),
            inner_area,
            inner_area_radius: size.scale_min_one(4),
            lens_outer,
            lens_inner,
            reflection,
            flash,
            flash_radius: size.scale_min_one(2),
            viewfinder,
            viewfinder_radius: size.scale_min_one(1),
        }
    }

    /// Shapes in paint order, back to front.
    #[must_use]
    pub fn shapes(&self) -> Vec<Shape> {
        let mut shapes = vec![
            Shape::Ellipse {
                bounds: self.background.bounds(),
                fill: BACKGROUND_FILL,
                outline: Some(Outline {
                    color: BACKGROUND_OUTLINE,
                    width: self.outline_width,
                }),
            },
            Shape::RoundedRect {
                bounds: self.body,
                radius: self.body_radius,
                fill: BODY_FILL,
            },
            Shape::RoundedRect {
                bounds: self.inner_area,
                radius: self.inner_area_radius,
                fill: INNER_AREA_FILL,
            },
            Shape::Ellipse {
                bounds: self.lens_outer.bounds(),
                fill: LENS_OUTER_FILL,
                outline: None,
            },
            Shape::Ellipse {
                bounds: self.lens_inner.bounds(),
                fill: LENS_INNER_FILL,
                outline: None,
            },
        ];

        if let Some(reflection) = self.reflection {
            shapes.push(Shape::Ellipse {
                bounds: reflection.bounds(),
                fill: REFLECTION_FILL,
                outline: None,
            });
        }
        if let Some(flash) = self.flash {
            shapes.push(Shape::RoundedRect {
                bounds: flash,
                radius: self.flash_radius,
                fill: FLASH_FILL,
            });
        }
        if let Some(viewfinder) = self.viewfinder {
            shapes.push(Shape::RoundedRect {
                bounds: viewfinder,
                radius: self.viewfinder_radius,
                fill: VIEWFINDER_FILL,
            });
        }

        shapes
    }
}
