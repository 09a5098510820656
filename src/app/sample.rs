//! Built-in demo inputs: a robot face with named parts to animate.

use crate::domain::model::AnimationRequest;

pub const SAMPLE_SVG: &str = include_str!("../../assets/sample_robot.svg");

pub const SAMPLE_DESCRIPTION: &str = "A robot-like face (id='Gesicht') with two black eyes (id='Auge-links', 'Auge-rechts'), two pupils (id='Pupille-links', 'Pupille-rechts'), and two antennas (id='Antenne-links', 'Antenne-rechts').";

pub const SAMPLE_ANIMATION: &str = "Bring the robot to life! The long straight line at the top of its face (inside the 'Gesicht' group) should dynamically wave as if the robot is thinking, and then become straight again.";

/// Fills every blank field of `request` with the matching sample text.
pub fn fill_with_sample(request: AnimationRequest) -> AnimationRequest {
    let or_sample = |value: String, sample: &str| {
        if value.trim().is_empty() {
            sample.to_string()
        } else {
            value
        }
    };

    AnimationRequest {
        svg_code: or_sample(request.svg_code, SAMPLE_SVG),
        description: or_sample(request.description, SAMPLE_DESCRIPTION),
        animation_instructions: or_sample(request.animation_instructions, SAMPLE_ANIMATION),
    }
}
