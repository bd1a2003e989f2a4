/*
 * Viewport Module
 *
 * Tracks the drawing surface size and the pointer position in screen
 * coordinates (origin top-left, y down). The renderer maps these into
 * nannou's centred, y-up frame; input handlers map the other way.
 */

use nannou::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    // None means no active pointer
    pub pointer: Option<Vec2>,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pointer: None,
        }
    }

    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f(&self) -> f32 {
        self.height as f32
    }

    // Store new dimensions; actors are rebuilt by the caller
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    // Convert a nannou window point (centre origin, y up) to screen space
    pub fn window_to_screen(&self, point: Point2) -> Vec2 {
        vec2(point.x + self.width_f() / 2.0, self.height_f() / 2.0 - point.y)
    }

    // Convert a screen space point to nannou's window coordinates
    pub fn screen_to_window(&self, point: Vec2) -> Point2 {
        pt2(point.x - self.width_f() / 2.0, self.height_f() / 2.0 - point.y)
    }
}

// Round a logical window size to whole pixels
pub fn pixel_size(size: Vec2) -> (u32, u32) {
    (size.x.max(0.0).round() as u32, size.y.max(0.0).round() as u32)
}
