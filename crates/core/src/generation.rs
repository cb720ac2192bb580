//! Assembly of the full hyper-generate bundle.
//!
//! Every artifact apart from the scene caption and the echoed prompt is
//! fixed content, so the bundle is a pure function of the raw prompt.

use indexmap::IndexMap;
use serde::Serialize;

use crate::audio::{audio_layers, AudioLayer, AUDIO_DURATION_SECS};
use crate::narrative::{ANALYSIS, NARRATION};
use crate::prompt::normalize_prompt;
use crate::scene::build_scene_svg;
use crate::snippets::code_snippets;
use crate::storyboard::{storyboard, StoryboardFrame, VIDEO_DURATION_SECS};

/// Described video: duration, voice-over and shot list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoPlan {
    pub duration_sec: u32,
    pub narration_text: String,
    pub storyboard: Vec<StoryboardFrame>,
}

/// Described soundtrack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioPlan {
    pub duration_sec: u32,
    pub layers: Vec<AudioLayer>,
}

/// Everything generated for one prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationBundle {
    /// The normalized prompt.
    pub prompt: String,
    pub code_snippets: IndexMap<String, String>,
    pub video: VideoPlan,
    pub audio: AudioPlan,
    pub image_svg: String,
    pub text_response: String,
}

/// Normalize `raw_prompt` and build the bundle for it.
pub fn hyper_generate(raw_prompt: &str) -> GenerationBundle {
    let prompt = normalize_prompt(raw_prompt);
    let image_svg = build_scene_svg(&prompt);

    GenerationBundle {
        code_snippets: code_snippets(),
        video: VideoPlan {
            duration_sec: VIDEO_DURATION_SECS,
            narration_text: NARRATION.to_string(),
            storyboard: storyboard(),
        },
        audio: AudioPlan {
            duration_sec: AUDIO_DURATION_SECS,
            layers: audio_layers(),
        },
        image_svg,
        text_response: ANALYSIS.to_string(),
        prompt,
    }
}
