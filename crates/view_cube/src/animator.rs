use glam::{Quat, Vec3};
use overlay::{HostCamera, OrbitControls};
use tracing::{debug, warn};

use crate::{
    orientation::{angle_between, rotate_towards},
    region::Region,
};

/// Remaining angle, in radians, below which an animation counts as arrived.
pub const CONVERGENCE_EPSILON: f32 = 1e-5;

/// State of one running animation.
///
/// Orientation and position move on separate tracks so the camera turns and
/// orbits smoothly even when it does not look at the pivot to begin with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Camera distance from `pivot`, fixed for the whole animation.
    pub radius: f32,
    /// Orientation reached so far; starts at the camera's orientation.
    pub current: Quat,
    /// Rotation placing the camera on its orbit: the camera sits at
    /// `pivot + orbit * Z * radius`.
    pub orbit: Quat,
    pub target: Quat,
    pub pivot: Vec3,
}

impl AnimationState {
    fn new(target: Quat, camera: &dyn HostCamera, pivot: Vec3) -> Self {
        let offset = camera.position() - pivot;
        let current = camera.orientation().normalize();
        // Start the orbit in the camera's own frame, turned just enough to
        // point at where the camera actually is.
        let facing = current * Vec3::Z;
        let orbit = match offset.try_normalize() {
            Some(direction) => Quat::from_rotation_arc(facing, direction) * current,
            None => current,
        };
        Self {
            radius: offset.length(),
            current,
            orbit: orbit.normalize(),
            target: target.normalize(),
            pivot,
        }
    }

    /// Larger of the angles left on the orientation and orbit tracks.
    pub fn remaining_angle(&self) -> f32 {
        angle_between(self.current, self.target).max(angle_between(self.orbit, self.target))
    }

    pub fn position(&self) -> Vec3 {
        self.orbit * Vec3::Z * self.radius + self.pivot
    }

    /// Moves both tracks at most `step` radians closer to the target.
    /// Returns whether both arrived.
    fn advance(&mut self, step: f32) -> bool {
        let mut arrived = true;
        for track in [&mut self.current, &mut self.orbit] {
            *track = rotate_towards(*track, self.target, step);
            if angle_between(*track, self.target) <= CONVERGENCE_EPSILON {
                *track = self.target;
            } else {
                arrived = false;
            }
        }
        arrived
    }
}

/// Turns the host camera around a pivot toward a target orientation at a
/// constant angular rate.
///
/// A new request while animating redirects: the animation restarts from the
/// camera's present position and orientation toward the new target.
#[derive(Debug, Clone)]
pub struct OrientationAnimator {
    turn_rate: f32,
    state: Option<AnimationState>,
}

impl OrientationAnimator {
    pub fn new(turn_rate: f32) -> Self {
        warn_if_stalled(turn_rate);
        Self {
            turn_rate,
            state: None,
        }
    }

    /// Radians per second.
    pub fn turn_rate(&self) -> f32 {
        self.turn_rate
    }

    pub fn set_turn_rate(&mut self, turn_rate: f32) {
        warn_if_stalled(turn_rate);
        self.turn_rate = turn_rate;
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    /// Starts animating toward the canonical orientation of `region`.
    pub fn start_to(&mut self, region: Region, camera: &dyn HostCamera, pivot: Vec3) -> Quat {
        let target = region.target_quat();
        debug!(%region, "animating to region");
        self.fly_to(target, camera, pivot);
        target
    }

    /// Starts animating toward an arbitrary `target` orientation.
    pub fn fly_to(&mut self, target: Quat, camera: &dyn HostCamera, pivot: Vec3) {
        let state = AnimationState::new(target, camera, pivot);
        if state.radius <= f32::EPSILON {
            warn!(?pivot, "camera sits on the pivot, only its orientation will animate");
        }
        if self.state.is_some() {
            debug!("redirecting active animation");
        }
        debug!(radius = state.radius, angle = state.remaining_angle(), "animation started");
        self.state = Some(state);
    }

    /// Advances the animation by `delta_seconds` and writes the result to the
    /// camera. Returns whether the animation is still running.
    pub fn tick(
        &mut self,
        delta_seconds: f32,
        camera: &mut dyn HostCamera,
        controls: Option<&mut dyn OrbitControls>,
    ) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        let arrived = state.advance(delta_seconds.max(0.0) * self.turn_rate);

        camera.set_position(state.position());
        camera.set_orientation(state.current);
        camera.update_projection_matrix();
        if let Some(controls) = controls {
            controls.update();
        }

        if arrived {
            debug!("animation finished");
            self.state = None;
        }
        !arrived
    }
}

fn warn_if_stalled(turn_rate: f32) {
    if turn_rate <= 0.0 {
        warn!(turn_rate, "turn rate is not positive, animations will not advance");
    }
}

impl Default for OrientationAnimator {
    fn default() -> Self {
        Self::new(settings::DEFAULT_TURN_RATE)
    }
}
