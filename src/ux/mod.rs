use colored::Colorize;
use std::io::{self, IsTerminal, Write};

use crate::color::{self, ContrastGrade};
use crate::mappings;
use crate::model::{BrandState, Field};

/// `4.54:1 AA`, colored by grade. Empty when the color does not resolve.
pub fn contrast_badge(ratio: Option<f64>) -> String {
    let Some(r) = ratio else {
        return String::new();
    };
    let grade = ContrastGrade::from_ratio(r);
    let text = format!("{r:.2}:1 {grade}");
    match grade {
        ContrastGrade::Aa => text.green().bold().to_string(),
        ContrastGrade::AaLarge => text.yellow().bold().to_string(),
        ContrastGrade::Fail => text.red().bold().to_string(),
    }
}

/// `[#####-----]` with `fraction` of `width` filled.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn show_state(s: &BrandState) {
    println!("\n=== BRAND RECORD ===");
    let mut group = "";
    for f in Field::ALL {
        let path = f.path();
        let head = path.split('.').next().unwrap_or(path);
        if head != group {
            println!("{}", head.bold());
            group = head;
        }
        let value = s.get(f).to_string();
        let shown = if value.is_empty() { "-".dimmed().to_string() } else { value.clone() };
        let badge = match f {
            Field::Primary | Field::Secondary => contrast_badge(color::contrast_with_white(&value)),
            _ => String::new(),
        };
        println!("  {:<28} {} {}", path, shown, badge);
    }
    println!();
}

/// Write the prompt, framed for reading or as the bare text for pipes.
pub fn write_prompt<W: Write>(out: &mut W, prompt: &str, framed: bool) -> io::Result<()> {
    if framed {
        writeln!(out, "\n{}", "┏━━━━━━━━━━━━━━━━━━━━━━━━━ Prompt ━━━━━━━━━━━━━━━━━━━━━━━━━┓".bold())?;
        writeln!(out, "{}", prompt)?;
        writeln!(out, "{}", "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold())
    } else {
        writeln!(out, "{}", prompt)
    }
}

/// Stdout gets the frame only when it is a terminal.
pub fn print_prompt(prompt: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let framed = stdout.is_terminal();
    write_prompt(&mut stdout.lock(), prompt, framed)
}

pub fn print_contrast(inputs: &[String]) {
    for input in inputs {
        match color::normalize(input) {
            Some(hex) => {
                let badge = contrast_badge(color::contrast_with_white(&hex));
                println!("{:<20} {}  {}", input, hex.bold(), badge);
            }
            None => println!("{:<20} {}", input, "not a color".red()),
        }
    }
}

pub fn print_options() {
    println!("{}", "Industries".bold());
    for (i, o) in mappings::INDUSTRIES.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, o);
    }
    println!("{}", "Audience".bold());
    println!("  {}", mappings::AUDIENCE_KINDS.join(", "));
    println!("{}", "Logo types".bold());
    for (label, inst) in mappings::LOGOTYPE_MAPPINGS {
        println!("  {:<16} {}", label.cyan(), inst);
    }
    println!("{}", "Design keywords".bold());
    for (kw, phrase) in mappings::DESIGN_MAPPINGS {
        println!("  {:<16} {}", kw.cyan(), phrase);
    }
    println!("{}", "Typography".bold());
    println!("  {}", mappings::TYPOGRAPHY_OPTIONS.join(", "));
}

pub fn success(msg: &str) {
    println!("{} {}", "ok".green().bold(), msg);
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg);
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_is_empty_without_ratio() {
        assert_eq!(contrast_badge(None), "");
        assert!(contrast_badge(Some(21.0)).contains("21.00:1 AA"));
        assert!(contrast_badge(Some(1.0)).contains("1.00:1 fail"));
    }

    #[test]
    fn progress_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 7), "[-------]");
        assert_eq!(progress_bar(3.0 / 7.0, 7), "[###----]");
        assert_eq!(progress_bar(1.0, 7), "[#######]");
        assert_eq!(progress_bar(-0.5, 4), "[----]");
        assert_eq!(progress_bar(2.0, 4), "[####]");
    }

    #[test]
    fn piped_prompt_is_the_bare_text() {
        let mut state = BrandState::default();
        state.meta.name = "Acme".into();
        let prompt = crate::build_prompt(&state);

        let mut out = Vec::new();
        write_prompt(&mut out, &prompt, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{prompt}\n"));

        let mut framed = Vec::new();
        write_prompt(&mut framed, &prompt, true).unwrap();
        let framed = String::from_utf8(framed).unwrap();
        assert!(framed.contains("Prompt"));
        assert!(framed.contains(&prompt));
    }
}
