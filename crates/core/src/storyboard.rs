//! Fixed storyboard for the one-minute reveal sequence.

use serde::Serialize;

/// Length of the described video in seconds.
pub const VIDEO_DURATION_SECS: u32 = 60;

/// One moment of the storyboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryboardFrame {
    /// Offset from the start of the video in seconds.
    pub t: f64,
    pub title: String,
    pub description: String,
    /// Camera move for the shot.
    pub camera: String,
    pub elements: Vec<String>,
}

impl StoryboardFrame {
    fn new(t: f64, title: &str, description: &str, camera: &str, elements: &[&str]) -> Self {
        Self {
            t,
            title: title.to_string(),
            description: description.to_string(),
            camera: camera.to_string(),
            elements: elements.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// The five storyboard frames, ordered by `t`.
pub fn storyboard() -> Vec<StoryboardFrame> {
    vec![
        StoryboardFrame::new(
            0.0,
            "Approach",
            "Camera glides over the lunar terminator into darkness.",
            "slow-dolly-in",
            &["stars", "wireframe spheres", "moon horizon"],
        ),
        StoryboardFrame::new(
            10.0,
            "Reveal",
            "Electric-blue glow blooms, outlining the monolith.",
            "tilt-up",
            &["monolith", "glow", "regolith dust"],
        ),
        StoryboardFrame::new(
            25.0,
            "Inscription",
            "Ancient symbols flicker across the obsidian face.",
            "macro-pan",
            &["symbols", "blue runes"],
        ),
        StoryboardFrame::new(
            40.0,
            "Distortion",
            "Subtle lens warps hint at gravitational shear.",
            "orbit",
            &["gravitational ripple", "ionized haze"],
        ),
        StoryboardFrame::new(
            55.0,
            "Contact",
            "Astronaut silhouette reaches out as hum crescendos.",
            "push-in",
            &["astronaut", "ribbon light"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_frames_at_fixed_offsets() {
        let offsets: Vec<f64> = storyboard().iter().map(|f| f.t).collect();
        assert_eq!(offsets, [0.0, 10.0, 25.0, 40.0, 55.0]);
    }

    #[test]
    fn frames_fit_inside_the_video() {
        for frame in storyboard() {
            assert!(frame.t < f64::from(VIDEO_DURATION_SECS));
            assert!(!frame.elements.is_empty());
        }
    }

    #[test]
    fn frame_serializes_all_fields() {
        let json = serde_json::to_value(&storyboard()[1]).unwrap();
        assert_eq!(json["t"], 10.0);
        assert_eq!(json["title"], "Reveal");
        assert_eq!(json["camera"], "tilt-up");
        assert_eq!(json["elements"][0], "monolith");
    }
}
