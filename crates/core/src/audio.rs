//! Fixed ambient soundtrack layers.

use serde::Serialize;

/// Length of the described soundtrack in seconds.
pub const AUDIO_DURATION_SECS: u32 = 300;

/// Volume used when a layer does not set one.
pub const DEFAULT_VOLUME: f64 = 0.5;

/// One synthesis layer of the soundtrack.
///
/// Optional parameters serialize as `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioLayer {
    pub name: String,
    /// Synthesis kind (`drone`, `pad`, `noisepad`, `pulse`).
    #[serde(rename = "type")]
    pub kind: String,
    pub waveform: String,
    /// Note frequencies in Hz for sequenced layers.
    pub notes: Option<Vec<f64>>,
    pub base_freq: Option<f64>,
    pub lfo_freq: Option<f64>,
    pub reverb: Option<f64>,
    pub volume: f64,
}

impl AudioLayer {
    fn new(name: &str, kind: &str, waveform: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            waveform: waveform.to_string(),
            notes: None,
            base_freq: None,
            lfo_freq: None,
            reverb: None,
            volume: DEFAULT_VOLUME,
        }
    }
}

/// The four soundtrack layers, bottom of the mix first.
pub fn audio_layers() -> Vec<AudioLayer> {
    vec![
        AudioLayer {
            base_freq: Some(41.2),
            lfo_freq: Some(0.06),
            reverb: Some(0.6),
            volume: 0.35,
            ..AudioLayer::new("Sub Bass Drone", "drone", "sine")
        },
        AudioLayer {
            base_freq: Some(220.0),
            lfo_freq: Some(0.12),
            reverb: Some(0.5),
            volume: 0.25,
            ..AudioLayer::new("Iridescent Ribbon", "pad", "triangle")
        },
        AudioLayer {
            base_freq: Some(0.0),
            lfo_freq: Some(0.2),
            reverb: Some(0.7),
            volume: 0.15,
            ..AudioLayer::new("Grain Hiss", "noisepad", "noise")
        },
        AudioLayer {
            notes: Some(vec![440.0, 554.37, 659.25, 880.0]),
            lfo_freq: Some(0.5),
            reverb: Some(0.3),
            volume: 0.2,
            ..AudioLayer::new("Beacon Pulses", "pulse", "sine")
        },
    ]
}
