//! Color input normalization and WCAG contrast against a white background.

pub mod names;

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    fn from_u32(v: u32) -> Self {
        Self { r: (v >> 16) as u8, g: (v >> 8) as u8, b: v as u8 }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// sRGB relative luminance (WCAG 2.x).
    pub fn relative_luminance(self) -> f64 {
        fn channel(c: u8) -> f64 {
            let v = c as f64 / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }
}

fn hex6_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#([0-9a-fA-F]{6})$").expect("valid regex"))
}

fn hex3_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#([0-9a-fA-F]{3})$").expect("valid regex"))
}

fn color_fn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(rgba?|hsla?)\(\s*([^()]*?)\s*\)$").expect("valid regex"))
}

fn number(token: &str) -> Option<f64> {
    let v = token.trim().parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}

/// A number or a percentage, scaled so that `100%` equals `full`.
fn scaled(token: &str, full: f64) -> Option<f64> {
    match token.trim().strip_suffix('%') {
        Some(pct) => number(pct).map(|p| p / 100.0 * full),
        None => number(token),
    }
}

fn to_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

/// Split `a, b, c[, alpha]` or `a b c[ / alpha]` into channels and alpha.
fn split_args(body: &str) -> Option<(Vec<&str>, Option<&str>)> {
    let mut parts: Vec<&str>;
    let mut alpha = None;
    if body.contains(',') {
        parts = body.split(',').map(str::trim).collect();
        if parts.len() == 4 {
            alpha = parts.pop();
        }
    } else {
        let main = match body.split_once('/') {
            Some((main, a)) => {
                alpha = Some(a.trim());
                main
            }
            None => body,
        };
        parts = main.split_whitespace().collect();
    }
    (parts.len() == 3 && parts.iter().all(|p| !p.is_empty())).then_some((parts, alpha))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    fn hue(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }
    let h = h.rem_euclid(360.0) / 360.0;
    let (s, l) = (s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
    if s == 0.0 {
        let v = to_channel(l * 255.0);
        return Rgb { r: v, g: v, b: v };
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb {
        r: to_channel(hue(p, q, h + 1.0 / 3.0) * 255.0),
        g: to_channel(hue(p, q, h) * 255.0),
        b: to_channel(hue(p, q, h - 1.0 / 3.0) * 255.0),
    }
}

/// `rgb()`/`rgba()`/`hsl()`/`hsla()` in comma or space syntax. Channels are
/// clamped; anything short of full opacity does not resolve to a hex color.
fn parse_function(s: &str) -> Option<Rgb> {
    let c = color_fn_re().captures(s)?;
    let (args, alpha) = split_args(&c[2])?;
    if let Some(a) = alpha {
        if scaled(a, 1.0)? < 1.0 {
            return None;
        }
    }
    if c[1].to_ascii_lowercase().starts_with("rgb") {
        Some(Rgb {
            r: to_channel(scaled(args[0], 255.0)?),
            g: to_channel(scaled(args[1], 255.0)?),
            b: to_channel(scaled(args[2], 255.0)?),
        })
    } else {
        let h = number(args[0].trim().trim_end_matches("deg"))?;
        let sat = scaled(args[1], 1.0)?;
        let light = scaled(args[2], 1.0)?;
        Some(hsl_to_rgb(h, sat, light))
    }
}

/// Resolve hex-6, hex-3, CSS color functions or a CSS color name.
pub fn parse(input: &str) -> Option<Rgb> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(c) = hex6_re().captures(s) {
        return u32::from_str_radix(&c[1], 16).ok().map(Rgb::from_u32);
    }
    if let Some(c) = hex3_re().captures(s) {
        let doubled: String = c[1].chars().flat_map(|ch| [ch, ch]).collect();
        return u32::from_str_radix(&doubled, 16).ok().map(Rgb::from_u32);
    }
    if let Some(rgb) = parse_function(s) {
        return Some(rgb);
    }
    names::lookup(&s.to_ascii_lowercase()).map(Rgb::from_u32)
}

/// Canonical `#RRGGBB`, or `None` when the input is not a color.
pub fn normalize(input: &str) -> Option<String> {
    parse(input).map(Rgb::to_hex)
}

pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Contrast against white, rounded to two decimals.
pub fn contrast_with_white(input: &str) -> Option<f64> {
    let rgb = parse(input)?;
    let ratio = contrast_ratio(rgb, Rgb::WHITE);
    Some((ratio * 100.0).round() / 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastGrade {
    Aa,
    AaLarge,
    Fail,
}

impl ContrastGrade {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 4.5 {
            ContrastGrade::Aa
        } else if ratio >= 3.0 {
            ContrastGrade::AaLarge
        } else {
            ContrastGrade::Fail
        }
    }
}

impl fmt::Display for ContrastGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContrastGrade::Aa => "AA",
            ContrastGrade::AaLarge => "AA large",
            ContrastGrade::Fail => "fail",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_hex_agree() {
        assert_eq!(normalize("#fff").as_deref(), Some("#FFFFFF"));
        assert_eq!(normalize("#FFFFFF").as_deref(), Some("#FFFFFF"));
        assert_eq!(normalize("  #0f172a ").as_deref(), Some("#0F172A"));
        assert_eq!(normalize("#a1b").as_deref(), Some("#AA11BB"));
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["#0f172a", "#22C55E", "#abc", "RebeccaPurple", "rgb(1, 2, 3)"] {
            let once = normalize(input).unwrap();
            assert_eq!(normalize(&once).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn names_and_functional_notation() {
        assert_eq!(normalize("Navy").as_deref(), Some("#000080"));
        assert_eq!(normalize("rebeccapurple").as_deref(), Some("#663399"));
        assert_eq!(normalize("RGB(255, 0, 128)").as_deref(), Some("#FF0080"));
    }

    #[test]
    fn color_functions_follow_css_parsing() {
        assert_eq!(normalize("rgb(300, 0, 0)").as_deref(), Some("#FF0000"));
        assert_eq!(normalize("rgb(255 0 0)").as_deref(), Some("#FF0000"));
        assert_eq!(normalize("rgba(255,0,0,1)").as_deref(), Some("#FF0000"));
        assert_eq!(normalize("rgb(0 128 255 / 100%)").as_deref(), Some("#0080FF"));
        assert_eq!(normalize("rgb(100%, 0%, 50%)").as_deref(), Some("#FF0080"));
        assert_eq!(normalize("hsl(0, 100%, 50%)").as_deref(), Some("#FF0000"));
        assert_eq!(normalize("hsl(120deg 100% 25%)").as_deref(), Some("#008000"));
        assert_eq!(normalize("HSLA(240, 100%, 50%, 1)").as_deref(), Some("#0000FF"));
        assert_eq!(normalize("hsl(0, 0%, 100%)").as_deref(), Some("#FFFFFF"));
    }

    #[test]
    fn unresolvable_inputs() {
        for input in ["", "   ", "#ffff", "#ggg", "blurple", "transparent", "fff", "rgb(1, 2)", "rgba(0, 0, 0, 0.5)"] {
            assert_eq!(normalize(input), None, "{input:?}");
            assert_eq!(contrast_with_white(input), None, "{input:?}");
        }
    }

    #[test]
    fn contrast_extremes() {
        assert!((contrast_with_white("#000000").unwrap() - 21.0).abs() < 1e-9);
        assert!((contrast_with_white("#FFFFFF").unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(contrast_with_white("white"), Some(1.0));
    }

    #[test]
    fn contrast_rounds_to_two_decimals() {
        // #767676 is the classic lightest grey that still passes AA on white.
        let r = contrast_with_white("#767676").unwrap();
        assert_eq!(r, 4.54);
        assert_eq!(ContrastGrade::from_ratio(r), ContrastGrade::Aa);
    }

    #[test]
    fn grades() {
        assert_eq!(ContrastGrade::from_ratio(4.49), ContrastGrade::AaLarge);
        assert_eq!(ContrastGrade::from_ratio(3.0), ContrastGrade::AaLarge);
        assert_eq!(ContrastGrade::from_ratio(2.99), ContrastGrade::Fail);
        assert_eq!(ContrastGrade::Fail.to_string(), "fail");
    }
}
