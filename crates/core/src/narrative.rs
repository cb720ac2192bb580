//! Narration and analysis text.

/// Voice-over for the storyboard.
pub const NARRATION: &str = concat!(
    "On the dark side of the Moon, beyond the reach of Earth's gaze, a monolith rises from the regolith—",
    "its surface black as void, its edges trembling with a faint electric-blue aura. Symbols, older than language,",
    " coil and awaken across its face. Instruments whisper anomalies: gravity bends by imperceptible degrees,",
    " and the static hum resolves into a pattern. This is not a beacon. It is a key—waiting for the question we have yet to ask.",
);

/// Long-form analysis returned as `text_response`.
pub const ANALYSIS: &str = concat!(
    "The monolith appears to operate as a multi-modal artifact: part gravitational lens, part information lattice. ",
    "The faint electric-blue emission suggests controlled energy leakage—possibly a byproduct of field stabilization. ",
    "The symbols may not be writing in a human sense but a spatial-temporal indexing scheme; think addresses for aligning matter and memory. ",
    "Local perturbations in spacetime hint at a tuned mass effect, allowing the structure to modulate gravity as a carrier wave. ",
    "A plausible function is archival: a vault that stores states—maps, genomes, histories—encoded as resonant patterns in vacuum fluctuations. ",
    "Contact protocols should avoid RF injection and instead vary inertial frames: micro-thrust oscillations or lattice vibrations on contact surfaces. ",
    "If the device is a key, the lock may be planetary: a network expecting the Moon, Earth, and Sun to form precise phase relationships. ",
    "In that alignment, the monolith would not open in place; it would redirect—turning the local curvature into a pointer, and us into the message.",
);
