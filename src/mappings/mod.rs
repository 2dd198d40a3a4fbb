//! Keyword catalogs offered by the wizard, and the phrases they expand to in
//! the prompt.

/// Style, personality and value keywords → design instruction.
pub const DESIGN_MAPPINGS: &[(&str, &str)] = &[
    // personality and style
    ("minimalistisch", "use negative space, reduce to essential lines, clean geometry, 'less is more' approach"),
    ("elegant", "fine lines, high contrast, sophisticated balance, serif nuances, luxury aesthetic"),
    ("verspielt", "organic shapes, dynamic composition, joyful curves, friendly geometry, approachable"),
    ("futuristisch", "tech-forward, motion lines, cyber-aesthetic, neon-accents, progressive forms"),
    ("vintage", "retro-texture hints, classic badges, timeless typography, heritage feel"),
    ("technisch", "precise grids, nodes, circuit-inspired, architectural lines, structured"),
    ("organisch", "natural flowing lines, leaf/nature motifs, asymmetry, soft edges"),
    ("geometrisch", "sacred geometry, bauhaus influence, mathematical precision, sharp angles"),
    ("präzise", "exact grid alignment, sharp execution, professional engineering look"),
    ("souverän", "bold strokes, stable base, centered composition, authority"),
    ("ikonisch", "memorable silhouette, apple-like simplicity, works at 16x16px"),
    ("zeitlos", "avoid trends, classic proportions, golden ratio construction"),
    ("progressiv", "forward momentum, italicized motion, arrow motifs, upward trends"),
    ("monochrom", "strong black/white balance, stencil capability, high ink density"),
    ("matt", "soft muted finish, sophisticated subtlety"),
    ("hochglänzend", "implies premium finish, liquid surfaces (translated to vector style)"),
    ("modern", "sans-serif priority, current zeitgeist, flat design 2.0"),
    ("freundlich", "approachable, rounded terminals, warm vibe, smiling curves"),
    ("seriös", "structured, stable, trust-inducing, dark blue/grey undertones implication"),
    ("luxuriös", "gold/silver implication, lots of breathing room (whitespace), elite feel"),
    ("bodenständig", "heavy weights, solid foundation, earthy connection"),
    ("kreativ", "unexpected juxtaposition, clever negative space usage, artistic flair"),
    // values
    ("Vertrauen", "shield or pillar motifs, symmetry, stable blue/grey psychology"),
    ("Qualität", "seal-like precision, star motifs, diamond sharpness"),
    ("Innovation", "lightbulb abstraction, spark, upward arrow, rocket abstraction"),
    ("Nachhaltigkeit", "leaf, cycle, earth, infinite loop, green psychology"),
    ("Premium", "crown, diamond, crest, serif typography"),
    ("Mut", "lion, fire, bold thick lines, high impact"),
    ("Transparenz", "overlapping shapes, glass-like opacity (vectorized), open circles"),
    ("Effizienz", "speed lines, checkmarks, direct paths, minimal clutter"),
];

pub const LOGOTYPE_MAPPINGS: &[(&str, &str)] = &[
    ("Wortmarke", "Logotype only. Focus on custom typography, kerning, and unique letter modification. No separate icon."),
    ("Bildmarke", "Logomark only. A standalone symbol or icon without text. Strong visual metaphor."),
    ("Wort-Bild", "Combination Mark. A balanced pairing of a symbol/icon and the brand name typography."),
    ("Emblem", "Emblem style. Text contained inside a shape/badge. Starbucks or crest style."),
    ("Abstrakt", "Abstract mark. Non-literal shape representing the brand feelings through geometry."),
];

pub const LOGOTYPE_FALLBACK: &str = "Logomark and typography balanced.";

/// Industry choice that switches to the free-text override.
pub const INDUSTRY_OTHER: &str = "Sonstige (Freitext)";

pub const INDUSTRIES: &[&str] = &[
    "Software/Tech",
    "Finanzen/Jura",
    "Gesundheit/Medizin",
    "Bio-Lebensmittel",
    "Gastronomie/Hotel",
    "Einzelhandel/E-Commerce",
    "Bildung",
    "Sport/Fitness",
    "Mode/Beauty",
    "Architektur/Bau",
    "Immobilien",
    "Automotive/Mobilität",
    "Kreativ/Agentur",
    "Non-Profit",
    "Medien/Entertainment",
    "Reisen/Tourismus",
    "Industrie/Produktion",
    "Energie/GreenTech",
    "Logistik",
    INDUSTRY_OTHER,
];

pub const AUDIENCE_KINDS: &[&str] = &["B2C", "B2B"];

pub const VALUE_OPTIONS: &[&str] = &[
    "Vertrauen",
    "Qualität",
    "Innovation",
    "Nachhaltigkeit",
    "Premium",
    "Mut",
    "Transparenz",
    "Effizienz",
];

pub const PERSONALITY_OPTIONS: &[&str] = &[
    "modern",
    "freundlich",
    "seriös",
    "verspielt",
    "luxuriös",
    "bodenständig",
    "kreativ",
    "technisch",
];

pub const TYPOGRAPHY_OPTIONS: &[&str] = &["Serifenlos", "Serif", "Tech/Mono", "Handwritten", "Display"];

pub const VALUES_SOFT_LIMIT: usize = 5;

/// Every design keyword, in catalog order. These are the style adjective choices.
pub fn style_adjectives() -> impl Iterator<Item = &'static str> {
    DESIGN_MAPPINGS.iter().map(|(k, _)| *k)
}

pub fn logo_types() -> impl Iterator<Item = &'static str> {
    LOGOTYPE_MAPPINGS.iter().map(|(k, _)| *k)
}

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    let key = key.trim();
    table
        .iter()
        .find(|(k, _)| *k == key)
        .or_else(|| {
            let lower = key.to_lowercase();
            table.iter().find(|(k, _)| k.to_lowercase() == lower)
        })
        .map(|(_, v)| *v)
}

pub fn design_phrase(keyword: &str) -> Option<&'static str> {
    find(DESIGN_MAPPINGS, keyword)
}

/// Mapped phrase, or the keyword itself when the catalog has no entry.
pub fn expand(keyword: &str) -> &str {
    design_phrase(keyword).unwrap_or_else(|| keyword.trim())
}

pub fn logotype_instruction(label: &str) -> &'static str {
    find(LOGOTYPE_MAPPINGS, label).unwrap_or(LOGOTYPE_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keywords_expand() {
        assert_eq!(expand("Mut"), "lion, fire, bold thick lines, high impact");
        assert!(expand("minimalistisch").starts_with("use negative space"));
    }

    #[test]
    fn lookup_falls_back_to_case_insensitive() {
        assert_eq!(design_phrase("MUT"), design_phrase("Mut"));
        assert_eq!(design_phrase("Präzise"), design_phrase("präzise"));
    }

    #[test]
    fn unknown_keywords_pass_through() {
        assert_eq!(expand("  brutalist "), "brutalist");
        assert_eq!(design_phrase("brutalist"), None);
    }

    #[test]
    fn logotype_fallback_for_unlisted_label() {
        assert!(logotype_instruction("Wortmarke").starts_with("Logotype only."));
        assert_eq!(logotype_instruction("Wort-Bild-Marke"), LOGOTYPE_FALLBACK);
    }

    #[test]
    fn option_lists_are_covered_by_the_table() {
        for v in VALUE_OPTIONS.iter().chain(PERSONALITY_OPTIONS) {
            assert!(design_phrase(v).is_some(), "{v}");
        }
        assert_eq!(style_adjectives().count(), DESIGN_MAPPINGS.len());
        assert_eq!(INDUSTRIES.last(), Some(&INDUSTRY_OTHER));
    }
}
