// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Rectangle intersection and union queries.
//!
//! The rectangle types themselves live in `sdl3_sys` (they are plain
//! C-layout values, re-exported from this crate's root); the exported
//! geometry functions are forwarded here. The header-inline helpers
//! (`contains_point`, `is_empty`, `to_frect`) are methods on the types.

use std::os::raw::c_int;

use sdl3_sys::{FPoint, FRect, Point, Rect};

use crate::Sdl;

impl Sdl {
    /// Whether two rectangles intersect.
    pub fn has_rect_intersection(&self, a: &Rect, b: &Rect) -> bool {
        unsafe { self.context.api.has_rect_intersection(a, b) }
    }

    /// Returns the intersection of two rectangles, `None` when they
    /// don't intersect.
    pub fn rect_intersection(&self, a: &Rect, b: &Rect) -> Option<Rect> {
        let mut result = Rect::default();
        let intersects = unsafe { self.context.api.get_rect_intersection(a, b, &mut result) };
        intersects.then_some(result)
    }

    /// Returns the smallest rectangle containing both inputs.
    pub fn rect_union(&self, a: &Rect, b: &Rect) -> crate::Result<Rect> {
        let mut result = Rect::default();
        let ok = unsafe { self.context.api.get_rect_union(a, b, &mut result) };
        self.context.check(ok)?;
        Ok(result)
    }

    /// Returns the smallest rectangle enclosing the given points,
    /// optionally clipped, or `None` if no point survives the clip.
    pub fn rect_enclosing_points(&self, points: &[Point], clip: Option<&Rect>) -> Option<Rect> {
        let mut result = Rect::default();
        let clip = clip.map_or(std::ptr::null(), |c| c as *const Rect);
        let any = unsafe {
            self.context.api.get_rect_enclosing_points(
                points.as_ptr(),
                points.len() as c_int,
                clip,
                &mut result,
            )
        };
        any.then_some(result)
    }

    /// Clips the line segment `(x1, y1)`-`(x2, y2)` to `rect` in place,
    /// returning whether any part of it lies inside.
    pub fn rect_and_line_intersection(
        &self,
        rect: &Rect,
        x1: &mut i32,
        y1: &mut i32,
        x2: &mut i32,
        y2: &mut i32,
    ) -> bool {
        unsafe {
            self.context
                .api
                .get_rect_and_line_intersection(rect, x1, y1, x2, y2)
        }
    }

    /// Float variant of [`Sdl::has_rect_intersection`].
    pub fn has_rect_intersection_float(&self, a: &FRect, b: &FRect) -> bool {
        unsafe { self.context.api.has_rect_intersection_float(a, b) }
    }

    /// Float variant of [`Sdl::rect_intersection`].
    pub fn rect_intersection_float(&self, a: &FRect, b: &FRect) -> Option<FRect> {
        let mut result = FRect::default();
        let intersects = unsafe {
            self.context
                .api
                .get_rect_intersection_float(a, b, &mut result)
        };
        intersects.then_some(result)
    }

    /// Float variant of [`Sdl::rect_union`].
    pub fn rect_union_float(&self, a: &FRect, b: &FRect) -> crate::Result<FRect> {
        let mut result = FRect::default();
        let ok = unsafe { self.context.api.get_rect_union_float(a, b, &mut result) };
        self.context.check(ok)?;
        Ok(result)
    }

    /// Float variant of [`Sdl::rect_enclosing_points`].
    pub fn rect_enclosing_points_float(
        &self,
        points: &[FPoint],
        clip: Option<&FRect>,
    ) -> Option<FRect> {
        let mut result = FRect::default();
        let clip = clip.map_or(std::ptr::null(), |c| c as *const FRect);
        let any = unsafe {
            self.context.api.get_rect_enclosing_points_float(
                points.as_ptr(),
                points.len() as c_int,
                clip,
                &mut result,
            )
        };
        any.then_some(result)
    }

    /// Float variant of [`Sdl::rect_and_line_intersection`].
    pub fn rect_and_line_intersection_float(
        &self,
        rect: &FRect,
        x1: &mut f32,
        y1: &mut f32,
        x2: &mut f32,
        y2: &mut f32,
    ) -> bool {
        unsafe {
            self.context
                .api
                .get_rect_and_line_intersection_float(rect, x1, y1, x2, y2)
        }
    }
}

#[cfg(test)]
mod tests {
    use sdl3_sys::{Point, Rect};

    #[test]
    fn point_containment_uses_half_open_bounds() {
        let rect = Rect { x: 10, y: 10, w: 5, h: 5 };
        assert!(rect.contains_point(&Point { x: 10, y: 10 }));
        assert!(rect.contains_point(&Point { x: 14, y: 14 }));
        assert!(!rect.contains_point(&Point { x: 15, y: 10 }));
        assert!(!rect.contains_point(&Point { x: 9, y: 10 }));
    }

    #[test]
    fn empty_rect_has_no_area() {
        assert!(Rect { x: 0, y: 0, w: 0, h: 5 }.is_empty());
        assert!(Rect { x: 0, y: 0, w: -1, h: 5 }.is_empty());
        assert!(!Rect { x: 0, y: 0, w: 1, h: 1 }.is_empty());
    }

    #[test]
    fn rect_to_frect_preserves_fields() {
        let rect = Rect { x: 1, y: 2, w: 3, h: 4 };
        let frect = rect.to_frect();
        assert_eq!((frect.x, frect.y, frect.w, frect.h), (1.0, 2.0, 3.0, 4.0));
    }
}
