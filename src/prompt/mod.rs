use fs_err as fs;
use std::path::Path;

use crate::color;
use crate::errors::Result;
use crate::mappings::{self, INDUSTRY_OTHER};
use crate::model::BrandState;

const NAME_PLACEHOLDER: &str = "[Markenname]";
const INDUSTRY_FALLBACK: &str = "General Business";

fn preamble() -> &'static [&'static str] {
    &[
        "# Role: Expert Brand Identity Designer",
        "# Task: Create a high-end, vector-based logo.",
        "---",
    ]
}

fn output_parameters() -> &'static [&'static str] {
    &[
        "- Format: Flat Vector Graphic (SVG style)",
        "- Background: Pure White (#FFFFFF) - No shadows, no wall textures, no mockups.",
        "- Detail Level: Medium to Low (Must be scalable to favicon size).",
        "- Composition: Professional, geometrically balanced, centered.",
        "- No photo-realistic rendering. No 3D bevels.",
    ]
}

fn model_flags() -> &'static [&'static str] {
    &[
        "--no realistic photo 3d mockup shadow detail noise text-clutter",
        "--v 6.0 --style raw",
    ]
}

/// A titled block of prompt lines. Empty sections are not rendered.
struct Section {
    title: &'static str,
    lines: Vec<String>,
}

impl Section {
    fn new(title: &'static str) -> Self {
        Self { title, lines: Vec::new() }
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Push `label: value` unless the value is blank.
    fn field(&mut self, label: &str, value: &str) {
        let v = value.trim();
        if !v.is_empty() {
            self.lines.push(format!("{label}: {v}"));
        }
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let t = s.trim();
    (!t.is_empty()).then_some(t)
}

/// Expand each keyword through the design table and join.
fn expand_all(keywords: &[String], sep: &str) -> String {
    keywords
        .iter()
        .filter_map(|k| non_blank(k))
        .map(mappings::expand)
        .collect::<Vec<_>>()
        .join(sep)
}

fn industry(s: &BrandState) -> &str {
    let chosen = if s.meta.industry == INDUSTRY_OTHER {
        &s.meta.industry_other
    } else {
        &s.meta.industry
    };
    non_blank(chosen).unwrap_or(INDUSTRY_FALLBACK)
}

fn color_or_literal(value: &str) -> Option<String> {
    let v = non_blank(value)?;
    Some(color::normalize(v).unwrap_or_else(|| v.to_string()))
}

fn brand_context(s: &BrandState) -> Section {
    let mut sec = Section::new("BRAND CONTEXT");
    let name = non_blank(&s.meta.name).unwrap_or(NAME_PLACEHOLDER);
    sec.push(format!("Name: \"{name}\""));
    if let Some(slogan) = non_blank(&s.meta.slogan) {
        sec.push(format!("Slogan: \"{slogan}\" (Integrate only if legible, otherwise ignore)"));
    }
    sec.push(format!("Industry: {}", industry(s)));
    sec.field("Context", &s.meta.description);

    let audience = [s.audience.kind.as_str(), s.audience.description.as_str()]
        .into_iter()
        .filter_map(non_blank)
        .collect::<Vec<_>>()
        .join(", ");
    sec.field("Target Audience", &audience);
    sec.field("Use Cases", &s.audience.use_cases);
    sec
}

fn design_strategy(s: &BrandState) -> Section {
    let mut sec = Section::new("DESIGN STRATEGY (SEMANTIC TRANSLATION)");
    sec.field("Core Values Visualized", &expand_all(&s.values.values, "; "));
    sec.field("Personality & Vibe", &expand_all(&s.values.personality, "; "));
    sec.field("Core Message", &s.values.message);
    sec.field("Differentiation/USP", &s.competition.differentiation);

    let competitors = [s.competition.competitor1.as_str(), s.competition.competitor2.as_str()]
        .into_iter()
        .filter_map(non_blank)
        .collect::<Vec<_>>()
        .join(", ");
    sec.field("Competitors (stay distinct from)", &competitors);
    sec
}

fn visual_construction(s: &BrandState) -> Section {
    let mut sec = Section::new("VISUAL CONSTRUCTION");
    if let Some(label) = non_blank(&s.style.logo_type) {
        sec.push(format!("Logo Type: {label} -> {}", mappings::logotype_instruction(label)));
    }
    sec.field("Aesthetic Direction", &expand_all(&s.style.adjectives, " + "));
    sec.field("References", &s.style.references);
    if s.story.enabled {
        if let Some(text) = non_blank(&s.story.text) {
            sec.push(format!("Story Inspiration: \"{text}\""));
        }
    }

    let palette: Vec<String> = [("Primary", &s.colors.primary), ("Secondary", &s.colors.secondary)]
        .into_iter()
        .filter_map(|(label, v)| color_or_literal(v).map(|c| format!("{label}: {c}")))
        .collect();
    if !palette.is_empty() {
        sec.push(format!("Color Palette: {}", palette.join(", ")));
        sec.push("Color Usage: Use flat colors, no gradients unless specified futuristic.".into());
    }
    sec.field("Negative Constraint (Avoid)", &s.colors.avoid);

    match (non_blank(&s.typo.style), non_blank(&s.typo.details)) {
        (Some(style), Some(details)) => sec.push(format!("Typography Style: {style} ({details})")),
        (Some(style), None) => sec.push(format!("Typography Style: {style}")),
        (None, Some(details)) => sec.push(format!("Typography Details: {details}")),
        (None, None) => {}
    }
    sec
}

fn closing() -> Section {
    let mut sec = Section::new("OUTPUT PARAMETERS (CRITICAL)");
    sec.lines.extend(output_parameters().iter().map(|l| l.to_string()));
    sec
}

/// Ordered prompt lines for the record.
pub fn prompt_lines(s: &BrandState) -> Vec<String> {
    let sections = [brand_context(s), design_strategy(s), visual_construction(s), closing()];

    let mut lines: Vec<String> = preamble().iter().map(|l| l.to_string()).collect();
    let mut number = 0;
    for sec in sections.into_iter().filter(|sec| !sec.lines.is_empty()) {
        number += 1;
        if number > 1 {
            lines.push(String::new());
        }
        lines.push(format!("## {number}. {}", sec.title));
        lines.extend(sec.lines);
    }
    lines.push(String::new());
    lines.extend(model_flags().iter().map(|l| l.to_string()));
    lines
}

/// The full prompt text for an image-generation model.
pub fn build_prompt(s: &BrandState) -> String {
    prompt_lines(s).join("\n")
}

/// Render the prompt into `path`, returning the bytes written.
pub fn write_to(path: &Path, s: &BrandState) -> Result<usize> {
    let text = build_prompt(s);
    fs::write(path, &text)?;
    Ok(text.len())
}
