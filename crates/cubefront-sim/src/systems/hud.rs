//! HUD system: frame-rate indicator.

use cubefront_core::constants::{FPS_GREEN_ABOVE, FPS_RED_BELOW, FPS_YELLOW_RANGE};
use cubefront_core::enums::Tint;

/// Seconds of frames averaged into one reading.
const FPS_WINDOW_SECS: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct HudState {
    pub fps: u32,
    pub fps_color: Tint,
    frames: u32,
    window_secs: f64,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            fps: 0,
            // The indicator starts green until the first reading.
            fps_color: Tint::Green,
            frames: 0,
            window_secs: 0.0,
        }
    }
}

/// Color for a frame rate, or `None` when the indicator keeps its color.
pub fn fps_color(fps: u32) -> Option<Tint> {
    if fps > FPS_GREEN_ABOVE {
        Some(Tint::Green)
    } else if FPS_YELLOW_RANGE.contains(&fps) {
        Some(Tint::Yellow)
    } else if fps < FPS_RED_BELOW {
        Some(Tint::Red)
    } else {
        None
    }
}

/// Count one frame of `frame_secs` wall time and refresh the reading when
/// the window fills.
pub fn run(hud: &mut HudState, frame_secs: f64) {
    if !frame_secs.is_finite() || frame_secs <= 0.0 {
        return;
    }
    hud.frames += 1;
    hud.window_secs += frame_secs;
    if hud.window_secs >= FPS_WINDOW_SECS {
        hud.fps = (hud.frames as f64 / hud.window_secs).round() as u32;
        hud.frames = 0;
        hud.window_secs = 0.0;
        if let Some(color) = fps_color(hud.fps) {
            hud.fps_color = color;
        }
    }
}
