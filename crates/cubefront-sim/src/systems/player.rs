//! Player system: movement, look and field-of-view stepping.

use cubefront_core::config::GameConfig;
use cubefront_core::constants::*;
use cubefront_core::types::InputState;

use crate::input::Pressed;
use crate::rig::Player;

/// Apply one tick of input to the player.
pub fn run(player: &mut Player, input: &InputState, pressed: Pressed, config: &GameConfig, dt: f32) {
    player.speed = if input.sprint {
        config.player_sprint_speed
    } else {
        config.player_walk_speed
    };

    player.yaw = (player.yaw + input.look_yaw * LOOK_SENSITIVITY).rem_euclid(360.0);
    player.pitch =
        (player.pitch + input.look_pitch * LOOK_SENSITIVITY).clamp(-MAX_PITCH_DEG, MAX_PITCH_DEG);

    let (forward, right) = player.ground_basis();
    let wish = forward * input.move_forward + right * input.move_right;
    // Diagonal input is no faster than straight input.
    let wish = if wish.length_squared() > 1.0 {
        wish.normalize()
    } else {
        wish
    };
    if wish.is_finite() {
        player.position += wish * player.speed * dt;
    }

    if pressed.fov_up {
        step_fov(player, FOV_STEP);
    }
    if pressed.fov_down {
        step_fov(player, -FOV_STEP);
    }
}

/// Step both the resting and the live field of view, keeping them in range.
pub fn step_fov(player: &mut Player, step: f32) {
    player.rest_fov = (player.rest_fov + step).clamp(MIN_FOV, MAX_FOV);
    player.fov = (player.fov + step).clamp(MIN_FOV, MAX_FOV);
}
