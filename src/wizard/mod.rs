//! The seven-step brand wizard.
//!
//! [`Navigator`] is the step state machine. [`Wizard`] drives it over any
//! line-based input and output, editing the record and handing every change
//! to a [`DebouncedSaver`].

use std::io::{BufRead, Write};
use tracing::debug;

use crate::color;
use crate::errors::Result;
use crate::mappings::{self, INDUSTRY_OTHER, VALUES_SOFT_LIMIT};
use crate::model::{BrandState, Field};
use crate::prompt;
use crate::store::DebouncedSaver;
use crate::ux;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Basics,
    Audience,
    Values,
    Story,
    Style,
    Colors,
    Finish,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Basics,
        Step::Audience,
        Step::Values,
        Step::Story,
        Step::Style,
        Step::Colors,
        Step::Finish,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Step::Basics => "Basics",
            Step::Audience => "Audience",
            Step::Values => "Values",
            Step::Story => "Story",
            Step::Style => "Style",
            Step::Colors => "Colors",
            Step::Finish => "Typography & Finish",
        }
    }
}

/// Step 1 needs a name of at least two characters and an industry.
pub fn can_continue(step: Step, state: &BrandState) -> bool {
    match step {
        Step::Basics => state.meta.name.trim().chars().count() > 1 && !state.meta.industry.trim().is_empty(),
        _ => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Start at a 1-based step number, clamped into range.
    pub fn at(number: usize) -> Self {
        Self { index: number.clamp(1, Step::ALL.len()) - 1 }
    }

    pub fn current(&self) -> Step {
        Step::ALL[self.index]
    }

    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn total(&self) -> usize {
        Step::ALL.len()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == Step::ALL.len()
    }

    pub fn progress(&self) -> f64 {
        self.number() as f64 / self.total() as f64
    }

    pub fn next(&mut self, state: &BrandState) -> bool {
        if self.is_last() || !can_continue(self.current(), state) {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    Keep,
    Clear,
    Value(String),
    Back,
    Quit,
}

fn parse_answer(line: Option<&str>) -> Answer {
    let Some(line) = line else {
        return Answer::Quit;
    };
    match line.trim() {
        "" => Answer::Keep,
        "-" => Answer::Clear,
        ":back" | ":b" => Answer::Back,
        ":quit" | ":q" => Answer::Quit,
        v => Answer::Value(v.to_string()),
    }
}

/// Number from the list, or the literal text.
fn resolve_choice(input: &str, options: &[&str]) -> String {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].to_string(),
        _ => input.to_string(),
    }
}

fn resolve_list(input: &str, options: &[&str]) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| resolve_choice(t, options))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Forward,
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished,
    Quit,
}

/// Return early from a step when an answer navigates away.
macro_rules! ask {
    ($e:expr) => {
        if let Some(nav) = $e? {
            return Ok(nav);
        }
    };
}

pub struct Wizard<'s, R, W> {
    input: R,
    out: W,
    saver: DebouncedSaver<'s>,
    nav: Navigator,
}

impl<'s, R: BufRead, W: Write> Wizard<'s, R, W> {
    pub fn new(input: R, out: W, saver: DebouncedSaver<'s>) -> Self {
        Self { input, out, saver, nav: Navigator::new() }
    }

    pub fn starting_at(mut self, number: usize) -> Self {
        self.nav = Navigator::at(number);
        self
    }

    pub fn run(&mut self, state: &mut BrandState) -> Result<Outcome> {
        writeln!(self.out, "Enter keeps a value, '-' clears it, ':back' returns, ':quit' saves and exits.")?;
        loop {
            let step = self.nav.current();
            writeln!(
                self.out,
                "\n{} Step {}/{}: {}",
                ux::progress_bar(self.nav.progress(), 14),
                self.nav.number(),
                self.nav.total(),
                step.label()
            )?;

            match self.run_step(step, state)? {
                Nav::Forward if self.nav.is_last() => {
                    self.saver.flush();
                    writeln!(self.out, "\n{}", prompt::build_prompt(state))?;
                    return Ok(Outcome::Finished);
                }
                Nav::Forward => {
                    if !self.nav.next(state) {
                        writeln!(self.out, "A brand name (two characters or more) and an industry are required.")?;
                    }
                }
                Nav::Back => {
                    if !self.nav.prev() {
                        writeln!(self.out, "Already at the first step.")?;
                    }
                }
                Nav::Quit => {
                    self.saver.flush();
                    debug!(step = self.nav.number(), "wizard left early");
                    return Ok(Outcome::Quit);
                }
            }
        }
    }

    fn run_step(&mut self, step: Step, s: &mut BrandState) -> Result<Nav> {
        match step {
            Step::Basics => {
                ask!(self.ask_text(s, Field::Name, "Brand name*"));
                ask!(self.ask_choice(s, Field::Industry, "Industry*", mappings::INDUSTRIES));
                if s.meta.industry == INDUSTRY_OTHER {
                    ask!(self.ask_text(s, Field::IndustryOther, "Which industry exactly"));
                }
                ask!(self.ask_text(s, Field::Slogan, "Claim / slogan"));
                ask!(self.ask_text(s, Field::Description, "Short description"));
            }
            Step::Audience => {
                ask!(self.ask_choice(s, Field::AudienceKind, "Audience kind", mappings::AUDIENCE_KINDS));
                ask!(self.ask_text(s, Field::AudienceDescription, "Who are the customers"));
                ask!(self.ask_text(s, Field::UseCases, "Use cases (app, web, print...)"));
                ask!(self.ask_text(s, Field::Competitor1, "Competitor 1"));
                ask!(self.ask_text(s, Field::Competitor2, "Competitor 2"));
                ask!(self.ask_text(s, Field::Differentiation, "How do you differ"));
            }
            Step::Values => {
                ask!(self.ask_list(s, Field::ValueList, "Values", mappings::VALUE_OPTIONS));
                if s.values.values.len() > VALUES_SOFT_LIMIT {
                    writeln!(self.out, "  More than {VALUES_SOFT_LIMIT} values dilutes the mark; consider trimming.")?;
                }
                ask!(self.ask_list(s, Field::Personality, "Personality", mappings::PERSONALITY_OPTIONS));
                ask!(self.ask_text(s, Field::Message, "Core message"));
            }
            Step::Story => {
                ask!(self.ask_flag(s, Field::StoryEnabled, "Use a brand story (y/n)"));
                if s.story.enabled {
                    ask!(self.ask_text(s, Field::StoryText, "Vision or origin of the brand"));
                }
            }
            Step::Style => {
                let types: Vec<&str> = mappings::logo_types().collect();
                ask!(self.ask_choice(s, Field::LogoType, "Logo type", &types));
                let adjectives: Vec<&str> = mappings::style_adjectives().collect();
                ask!(self.ask_list(s, Field::Adjectives, "Visual adjectives", &adjectives));
                ask!(self.ask_text(s, Field::References, "References"));
            }
            Step::Colors => {
                ask!(self.ask_color(s, Field::Primary, "Primary color"));
                ask!(self.ask_color(s, Field::Secondary, "Secondary color"));
                ask!(self.ask_text(s, Field::Avoid, "Colors to avoid"));
            }
            Step::Finish => {
                ask!(self.ask_choice(s, Field::TypoStyle, "Typography", mappings::TYPOGRAPHY_OPTIONS));
                ask!(self.ask_text(s, Field::TypoDetails, "Details (bold, italic...)"));
            }
        }
        Ok(Nav::Forward)
    }

    fn read_answer(&mut self, label: &str, current: &str) -> Result<Answer> {
        write!(self.out, "  {label} [{current}]: ")?;
        self.out.flush()?;
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        Ok(parse_answer((n > 0).then_some(line.as_str())))
    }

    /// Apply an answer with `apply`; navigation answers are passed back.
    fn answer<F>(&mut self, s: &mut BrandState, field: Field, label: &str, apply: F) -> Result<Option<Nav>>
    where
        F: FnOnce(&mut BrandState, String) -> Result<()>,
    {
        let current = s.get(field).to_string();
        match self.read_answer(label, &current)? {
            Answer::Keep => return Ok(None),
            Answer::Clear => s.clear(field),
            Answer::Value(v) => apply(s, v)?,
            Answer::Back => return Ok(Some(Nav::Back)),
            Answer::Quit => return Ok(Some(Nav::Quit)),
        }
        self.saver.schedule(s);
        Ok(None)
    }

    fn ask_text(&mut self, s: &mut BrandState, field: Field, label: &str) -> Result<Option<Nav>> {
        self.answer(s, field, label, |s, v| s.set(field, &v))
    }

    fn ask_flag(&mut self, s: &mut BrandState, field: Field, label: &str) -> Result<Option<Nav>> {
        loop {
            let current = s.get(field).to_string();
            match self.read_answer(label, &current)? {
                Answer::Keep => return Ok(None),
                Answer::Clear => s.clear(field),
                Answer::Value(v) => {
                    if s.set(field, &v).is_err() {
                        writeln!(self.out, "  Please answer y or n.")?;
                        continue;
                    }
                }
                Answer::Back => return Ok(Some(Nav::Back)),
                Answer::Quit => return Ok(Some(Nav::Quit)),
            }
            self.saver.schedule(s);
            return Ok(None);
        }
    }

    fn list_options(&mut self, options: &[&str]) -> Result<()> {
        for (i, o) in options.iter().enumerate() {
            writeln!(self.out, "    {:>2}. {}", i + 1, o)?;
        }
        Ok(())
    }

    fn ask_choice(&mut self, s: &mut BrandState, field: Field, label: &str, options: &[&str]) -> Result<Option<Nav>> {
        self.list_options(options)?;
        self.answer(s, field, label, |s, v| s.set(field, &resolve_choice(&v, options)))
    }

    fn ask_list(&mut self, s: &mut BrandState, field: Field, label: &str, options: &[&str]) -> Result<Option<Nav>> {
        self.list_options(options)?;
        self.answer(s, field, label, |s, v| s.set_list(field, resolve_list(&v, options)))
    }

    /// Stores the normalized hex when the input resolves, else the literal.
    fn ask_color(&mut self, s: &mut BrandState, field: Field, label: &str) -> Result<Option<Nav>> {
        let nav = self.answer(s, field, label, |s, v| {
            let stored = color::normalize(&v).unwrap_or(v);
            s.set(field, &stored)
        })?;
        if nav.is_none() {
            let value = s.get(field).to_string();
            let badge = ux::contrast_badge(color::contrast_with_white(&value));
            if !badge.is_empty() {
                writeln!(self.out, "    contrast on white: {badge}")?;
            }
        }
        Ok(nav)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use std::io::Cursor;
    use std::time::Duration;

    fn run_with(input: &str, state: &mut BrandState, start: usize) -> (Outcome, String, Store) {
        let store = Store::in_memory().unwrap();
        let mut out = Vec::new();
        let outcome = {
            let saver = DebouncedSaver::new(&store, "k", Duration::ZERO);
            let mut w = Wizard::new(Cursor::new(input.to_string()), &mut out, saver).starting_at(start);
            let outcome = w.run(state).unwrap();
            outcome
        };
        (outcome, String::from_utf8(out).unwrap(), store)
    }

    #[test]
    fn navigator_gates_first_step() {
        let mut s = BrandState::default();
        let mut nav = Navigator::new();
        assert!(!nav.prev());
        assert!(!nav.next(&s));

        s.meta.name = "A".into();
        s.meta.industry = "Bildung".into();
        assert!(!nav.next(&s));

        s.meta.name = " Ab ".into();
        assert!(nav.next(&s));
        assert_eq!(nav.current(), Step::Audience);
        assert!(nav.prev());
    }

    #[test]
    fn navigator_bounds_and_progress() {
        let s = BrandState::default();
        let mut nav = Navigator::at(99);
        assert!(nav.is_last());
        assert!(!nav.next(&s));
        assert_eq!(nav.progress(), 1.0);
        assert_eq!(Navigator::at(0).number(), 1);

        nav = Navigator::at(2);
        assert!(nav.next(&s));
        assert_eq!(nav.number(), 3);
    }

    #[test]
    fn answers_and_choices() {
        assert_eq!(parse_answer(None), Answer::Quit);
        assert_eq!(parse_answer(Some("\n")), Answer::Keep);
        assert_eq!(parse_answer(Some(" - \n")), Answer::Clear);
        assert_eq!(parse_answer(Some(":back\n")), Answer::Back);
        assert_eq!(parse_answer(Some("Acme\n")), Answer::Value("Acme".into()));

        let opts = mappings::VALUE_OPTIONS;
        assert_eq!(resolve_choice("2", opts), "Qualität");
        assert_eq!(resolve_choice("99", opts), "99");
        assert_eq!(resolve_list("1, Mut ,,3", opts), vec!["Vertrauen", "Mut", "Innovation"]);
    }

    #[test]
    fn full_run_edits_record_and_prints_prompt() {
        let input = [
            // basics
            "Acme", "1", "", "",
            // audience
            "2", "CTOs", "", "", "", "",
            // values
            "1,Mut", "", "",
            // story
            "n",
            // style
            "1", "", "",
            // colors
            "#fff", "navy", "-",
            // typography
            "Serif", "",
        ]
        .join("\n")
            + "\n";

        let mut s = BrandState::default();
        s.colors.avoid = "pink".into();
        let (outcome, out, store) = run_with(&input, &mut s, 1);

        assert_eq!(outcome, Outcome::Finished);
        assert_eq!(s.meta.name, "Acme");
        assert_eq!(s.meta.industry, "Software/Tech");
        assert_eq!(s.audience.kind, "B2B");
        assert_eq!(s.values.values, vec!["Vertrauen", "Mut"]);
        assert!(!s.story.enabled);
        assert_eq!(s.style.logo_type, "Wortmarke");
        assert_eq!(s.colors.primary, "#FFFFFF");
        assert_eq!(s.colors.secondary, "#000080");
        assert_eq!(s.colors.avoid, "");
        assert_eq!(s.typo.style, "Serif");

        assert!(out.contains("contrast on white:"));
        assert!(out.contains("## 1. BRAND CONTEXT"));
        assert!(out.contains("Target Audience: B2B, CTOs"));
        assert_eq!(store.load_state("k").unwrap(), s);
    }

    #[test]
    fn incomplete_basics_repeat_until_input_ends() {
        let mut s = BrandState::default();
        let (outcome, out, _) = run_with("A\n3\n\n\n", &mut s, 1);
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(s.meta.name, "A");
        assert!(out.contains("are required"));
        assert_eq!(out.matches("Step 1/7").count(), 2);
    }

    #[test]
    fn back_and_quit() {
        let mut s = BrandState::starter();
        let (outcome, out, store) = run_with(":back\nZeta\n:quit\n", &mut s, 2);
        assert_eq!(outcome, Outcome::Quit);
        assert!(out.contains("Step 2/7"));
        assert!(out.contains("Step 1/7"));
        assert_eq!(s.meta.name, "Zeta");
        assert_eq!(store.load_state("k").unwrap().meta.name, "Zeta");
    }

    #[test]
    fn story_text_only_asked_when_enabled() {
        let mut s = BrandState::default();
        let (_, out, _) = run_with("y\nGarage days\n:quit\n", &mut s, 4);
        assert!(s.story.enabled);
        assert_eq!(s.story.text, "Garage days");
        assert!(out.contains("Step 5/7"));
    }

    #[test]
    fn other_industry_asks_for_free_text() {
        let mut s = BrandState::default();
        let (_, _, _) = run_with("Acme\n20\nImkerei\n:quit\n", &mut s, 1);
        assert_eq!(s.meta.industry, INDUSTRY_OTHER);
        assert_eq!(s.meta.industry_other, "Imkerei");
    }
}
