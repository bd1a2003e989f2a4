/*
 * Error Module
 *
 * Errors raised while validating parameters or creating the window.
 * Nothing inside the frame loop returns an error; the tick must never fail.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("parameter `{name}` must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("return divisor must be at least 1.0, got {0}")]
    ReturnDivisor(f32),

    #[error("range `{name}` is empty: {low}..{high}")]
    EmptyRange {
        name: &'static str,
        low: f32,
        high: f32,
    },

    #[error("failed to build window: {0}")]
    Window(String),
}
