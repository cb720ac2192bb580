//! Procedural SVG scene: a backlit monolith on a dark plain under a
//! scattered violet starfield, captioned with the prompt.
//!
//! Only the caption depends on the input. Everything else is laid out from
//! fixed constants and closed-form index formulas, so the same caption always
//! renders to byte-identical markup.

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// Canvas width in SVG user units.
pub const CANVAS_WIDTH: u32 = 2400;

/// Canvas height in SVG user units.
pub const CANVAS_HEIGHT: u32 = 1350;

/// Horizontal centre line the monolith, ground and glow are arranged on.
pub const CENTER_X: u32 = CANVAS_WIDTH / 2;

// ---------------------------------------------------------------------------
// Starfield
// ---------------------------------------------------------------------------

/// Number of starfield circles. Indices run `1..=STAR_COUNT`.
pub const STAR_COUNT: u32 = 19;

/// Fill shared by every starfield circle.
pub const STAR_FILL: &str = "#6B21A8";

const STAR_SPACING_X: u32 = 220;
const STAR_STEP_Y: u32 = 97;
const STAR_BASE_RADIUS: u32 = 80;
const STAR_RADIUS_STEP: u32 = 18;
const STAR_RADIUS_CYCLE: u32 = 5;

/// A single starfield circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub cx: u32,
    pub cy: u32,
    pub r: u32,
}

/// Place the star with the given 1-based index.
///
/// `cx` marches right in fixed steps (the last few land past the canvas
/// edge), `cy` wraps modulo the canvas height and the radius cycles through
/// five sizes.
pub fn star(index: u32) -> Star {
    Star {
        cx: index * STAR_SPACING_X,
        cy: (index * STAR_STEP_Y) % CANVAS_HEIGHT,
        r: STAR_BASE_RADIUS + (index % STAR_RADIUS_CYCLE) * STAR_RADIUS_STEP,
    }
}

/// All starfield circles in paint order.
pub fn starfield() -> impl Iterator<Item = Star> {
    (1..=STAR_COUNT).map(star)
}

// ---------------------------------------------------------------------------
// Monolith
// ---------------------------------------------------------------------------

/// One rectangle of the nested monolith stack. `x` is derived from the width
/// so every slab shares [`CENTER_X`].
struct Slab {
    top: u32,
    width: u32,
    height: u32,
    rx: u32,
    fill: &'static str,
    stroke: Option<(&'static str, u32)>,
}

impl Slab {
    fn x(&self) -> u32 {
        CENTER_X - self.width / 2
    }
}

/// Outer to inner.
const MONOLITH: [Slab; 4] = [
    Slab {
        top: 300,
        width: 200,
        height: 700,
        rx: 8,
        fill: "#0F172A",
        stroke: Some(("#1E293B", 3)),
    },
    Slab {
        top: 310,
        width: 180,
        height: 680,
        rx: 6,
        fill: "#111827",
        stroke: None,
    },
    Slab {
        top: 320,
        width: 160,
        height: 660,
        rx: 4,
        fill: "#0B1325",
        stroke: None,
    },
    Slab {
        top: 330,
        width: 144,
        height: 640,
        rx: 3,
        fill: "#0A0F1D",
        stroke: None,
    },
];

// ---------------------------------------------------------------------------
// Ground, glow and caption placement
// ---------------------------------------------------------------------------

const GROUND_CY: u32 = 980;
const HALO_CY: u32 = 620;
const HALO_R: u32 = 420;
const CAPTION_Y: u32 = 1240;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A captioned monolith scene, ready to render as SVG markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneDocument {
    caption: String,
}

impl SceneDocument {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
        }
    }

    pub fn width(&self) -> u32 {
        CANVAS_WIDTH
    }

    pub fn height(&self) -> u32 {
        CANVAS_HEIGHT
    }

    /// Render the scene, back to front.
    pub fn render(&self) -> String {
        let mut lines = vec![format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width(),
            h = self.height(),
        )];

        push_defs(&mut lines);
        lines.push(r#"  <rect width="100%" height="100%" fill="url(#sky)"/>"#.to_string());
        push_starfield(&mut lines);
        push_ground(&mut lines);
        push_monolith(&mut lines);
        push_glow(&mut lines);
        lines.push(format!(
            r##"  <text x="{CENTER_X}" y="{CAPTION_Y}" text-anchor="middle" font-family="Inter, system-ui" font-size="28" fill="#94A3B8" opacity="0.9">{}</text>"##,
            escape_xml(&self.caption)
        ));
        lines.push("</svg>".to_string());

        lines.join("\n")
    }
}

/// Render the scene for a (normalized) prompt.
pub fn build_scene_svg(prompt: &str) -> String {
    SceneDocument::new(prompt).render()
}

fn push_defs(lines: &mut Vec<String>) {
    lines.extend(
        [
            r#"  <defs>"#,
            r#"    <radialGradient id="glow" cx="50%" cy="60%" r="60%">"#,
            r##"      <stop offset="0%" stop-color="#6EE7F9" stop-opacity="0.9"/>"##,
            r##"      <stop offset="40%" stop-color="#2563EB" stop-opacity="0.35"/>"##,
            r##"      <stop offset="100%" stop-color="#0B1020" stop-opacity="0"/>"##,
            r#"    </radialGradient>"#,
            r#"    <linearGradient id="sky" x1="0" x2="0" y1="0" y2="1">"#,
            r##"      <stop offset="0%" stop-color="#070914"/>"##,
            r##"      <stop offset="100%" stop-color="#0B1020"/>"##,
            r#"    </linearGradient>"#,
            r#"    <filter id="blur">"#,
            r#"      <feGaussianBlur in="SourceGraphic" stdDeviation="40"/>"#,
            r#"    </filter>"#,
            r#"  </defs>"#,
        ]
        .map(String::from),
    );
}

fn push_starfield(lines: &mut Vec<String>) {
    lines.push(r#"  <g opacity="0.25">"#.to_string());
    lines.extend(starfield().map(|s| {
        format!(
            r#"    <circle cx="{}" cy="{}" r="{}" fill="{STAR_FILL}" opacity="0.25"/>"#,
            s.cx, s.cy, s.r
        )
    }));
    lines.push("  </g>".to_string());
}

fn push_ground(lines: &mut Vec<String>) {
    lines.push(format!(
        r##"  <ellipse cx="{CENTER_X}" cy="{GROUND_CY}" rx="800" ry="220" fill="#0B1020" opacity="0.9"/>"##
    ));
    lines.push(format!(
        r##"  <ellipse cx="{CENTER_X}" cy="{GROUND_CY}" rx="820" ry="240" fill="#1E293B" opacity="0.35" filter="url(#blur)"/>"##
    ));
}

fn push_monolith(lines: &mut Vec<String>) {
    for slab in &MONOLITH {
        let stroke = slab
            .stroke
            .map(|(color, width)| format!(r#" stroke="{color}" stroke-width="{width}""#))
            .unwrap_or_default();
        lines.push(format!(
            r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{stroke}/>"#,
            slab.x(),
            slab.top,
            slab.width,
            slab.height,
            slab.rx,
            slab.fill,
        ));
    }
}

fn push_glow(lines: &mut Vec<String>) {
    lines.push(format!(
        r#"  <ellipse cx="{CENTER_X}" cy="{GROUND_CY}" rx="520" ry="140" fill="url(#glow)"/>"#
    ));
    lines.push(format!(
        r#"  <circle cx="{CENTER_X}" cy="{HALO_CY}" r="{HALO_R}" fill="url(#glow)"/>"#
    ));
}

/// Make `s` safe as XML text or attribute content.
///
/// Reserved characters become entities. Characters XML 1.0 does not allow
/// at all (C0 controls other than tab, newline and carriage return, plus
/// U+FFFE and U+FFFF) are dropped.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (!c.is_ascii_control() && c != '\u{FFFE}' && c != '\u{FFFF}')
}
