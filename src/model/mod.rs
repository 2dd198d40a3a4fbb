//! The brand-attributes record and field addressing.
//!
//! JSON keys follow the storage layout of earlier exports, so those files
//! import as-is. Every field defaults, so any parsable object yields a
//! complete record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{PromptGenError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub name: String,
    pub slogan: String,
    #[serde(rename = "branche")]
    pub industry: String,
    #[serde(rename = "brancheOther")]
    pub industry_other: String,
    #[serde(rename = "beschreibung")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Audience {
    #[serde(rename = "beschreibung")]
    pub description: String,
    #[serde(rename = "b2")]
    pub kind: String,
    #[serde(rename = "usecases")]
    pub use_cases: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Competition {
    pub competitor1: String,
    pub competitor2: String,
    #[serde(rename = "differenzierung")]
    pub differentiation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Values {
    pub values: Vec<String>,
    #[serde(rename = "persoenlichkeit")]
    pub personality: Vec<String>,
    #[serde(rename = "botschaft")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    pub enabled: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(rename = "logotyp")]
    pub logo_type: String,
    #[serde(rename = "adjektive")]
    pub adjectives: Vec<String>,
    #[serde(rename = "referenzen")]
    pub references: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    #[serde(rename = "verbot")]
    pub avoid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    #[serde(rename = "stil")]
    pub style: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandState {
    pub meta: Meta,
    #[serde(rename = "zielgruppe")]
    pub audience: Audience,
    #[serde(rename = "wettbewerb")]
    pub competition: Competition,
    #[serde(rename = "werte")]
    pub values: Values,
    pub story: Story,
    #[serde(rename = "stil")]
    pub style: Style,
    #[serde(rename = "farben")]
    pub colors: Colors,
    pub typo: Typography,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl BrandState {
    /// The preset a fresh wizard starts from.
    pub fn starter() -> Self {
        Self {
            audience: Audience { kind: "B2C".into(), ..Audience::default() },
            values: Values {
                values: strings(&["Vertrauen", "Qualität"]),
                personality: strings(&["modern", "freundlich"]),
                ..Values::default()
            },
            style: Style {
                logo_type: "Wort-Bild-Marke".into(),
                adjectives: strings(&["minimalistisch", "elegant"]),
                ..Style::default()
            },
            colors: Colors {
                primary: "#0F172A".into(),
                secondary: "#22C55E".into(),
                ..Colors::default()
            },
            typo: Typography { style: "serifenlos modern".into(), ..Typography::default() },
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> FieldValue<'_> {
        use Field::*;
        match field {
            Name => FieldValue::Text(&self.meta.name),
            Slogan => FieldValue::Text(&self.meta.slogan),
            Industry => FieldValue::Text(&self.meta.industry),
            IndustryOther => FieldValue::Text(&self.meta.industry_other),
            Description => FieldValue::Text(&self.meta.description),
            AudienceDescription => FieldValue::Text(&self.audience.description),
            AudienceKind => FieldValue::Text(&self.audience.kind),
            UseCases => FieldValue::Text(&self.audience.use_cases),
            Competitor1 => FieldValue::Text(&self.competition.competitor1),
            Competitor2 => FieldValue::Text(&self.competition.competitor2),
            Differentiation => FieldValue::Text(&self.competition.differentiation),
            ValueList => FieldValue::List(&self.values.values),
            Personality => FieldValue::List(&self.values.personality),
            Message => FieldValue::Text(&self.values.message),
            StoryEnabled => FieldValue::Flag(self.story.enabled),
            StoryText => FieldValue::Text(&self.story.text),
            LogoType => FieldValue::Text(&self.style.logo_type),
            Adjectives => FieldValue::List(&self.style.adjectives),
            References => FieldValue::Text(&self.style.references),
            Primary => FieldValue::Text(&self.colors.primary),
            Secondary => FieldValue::Text(&self.colors.secondary),
            Avoid => FieldValue::Text(&self.colors.avoid),
            TypoStyle => FieldValue::Text(&self.typo.style),
            TypoDetails => FieldValue::Text(&self.typo.details),
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        use Field::*;
        Some(match field {
            Name => &mut self.meta.name,
            Slogan => &mut self.meta.slogan,
            Industry => &mut self.meta.industry,
            IndustryOther => &mut self.meta.industry_other,
            Description => &mut self.meta.description,
            AudienceDescription => &mut self.audience.description,
            AudienceKind => &mut self.audience.kind,
            UseCases => &mut self.audience.use_cases,
            Competitor1 => &mut self.competition.competitor1,
            Competitor2 => &mut self.competition.competitor2,
            Differentiation => &mut self.competition.differentiation,
            Message => &mut self.values.message,
            StoryText => &mut self.story.text,
            LogoType => &mut self.style.logo_type,
            References => &mut self.style.references,
            Primary => &mut self.colors.primary,
            Secondary => &mut self.colors.secondary,
            Avoid => &mut self.colors.avoid,
            TypoStyle => &mut self.typo.style,
            TypoDetails => &mut self.typo.details,
            ValueList | Personality | Adjectives | StoryEnabled => return None,
        })
    }

    fn list_mut(&mut self, field: Field) -> Option<&mut Vec<String>> {
        match field {
            Field::ValueList => Some(&mut self.values.values),
            Field::Personality => Some(&mut self.values.personality),
            Field::Adjectives => Some(&mut self.style.adjectives),
            _ => None,
        }
    }

    /// Assign a scalar field. `story.enabled` takes a yes/no word.
    pub fn set(&mut self, field: Field, value: &str) -> Result<()> {
        if field == Field::StoryEnabled {
            self.story.enabled = parse_flag(value)?;
            return Ok(());
        }
        match self.text_mut(field) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(())
            }
            None => Err(field.kind_error("text")),
        }
    }

    /// Replace a list field; duplicates and blank entries are dropped.
    pub fn set_list<I, S>(&mut self, field: Field, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.list_mut(field).ok_or_else(|| field.kind_error("list"))?;
        list.clear();
        for item in items {
            let item = item.as_ref().trim();
            if !item.is_empty() && !list.iter().any(|x| x == item) {
                list.push(item.to_string());
            }
        }
        Ok(())
    }

    /// Chip toggle: remove the keyword if selected, else append it.
    /// Returns whether the keyword is selected afterwards. A blank keyword
    /// leaves the list unchanged.
    pub fn toggle(&mut self, field: Field, keyword: &str) -> Result<bool> {
        let list = self.list_mut(field).ok_or_else(|| field.kind_error("list"))?;
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(false);
        }
        if let Some(pos) = list.iter().position(|x| x == keyword) {
            list.remove(pos);
            Ok(false)
        } else {
            list.push(keyword.to_string());
            Ok(true)
        }
    }

    pub fn clear(&mut self, field: Field) {
        if field == Field::StoryEnabled {
            self.story.enabled = false;
        } else if let Some(list) = self.list_mut(field) {
            list.clear();
        } else if let Some(slot) = self.text_mut(field) {
            slot.clear();
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" | "ja" => Ok(true),
        "false" | "no" | "n" | "off" | "0" | "nein" => Ok(false),
        other => Err(PromptGenError::InvalidBool(other.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    Flag(bool),
}

impl FieldValue<'_> {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::List(_) => "list",
            FieldValue::Flag(_) => "flag",
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
            FieldValue::Flag(b) => write!(f, "{}", if *b { "yes" } else { "no" }),
        }
    }
}

/// Every editable field, addressed by its dotted JSON path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Slogan,
    Industry,
    IndustryOther,
    Description,
    AudienceDescription,
    AudienceKind,
    UseCases,
    Competitor1,
    Competitor2,
    Differentiation,
    ValueList,
    Personality,
    Message,
    StoryEnabled,
    StoryText,
    LogoType,
    Adjectives,
    References,
    Primary,
    Secondary,
    Avoid,
    TypoStyle,
    TypoDetails,
}

impl Field {
    pub const ALL: [Field; 24] = [
        Field::Name,
        Field::Slogan,
        Field::Industry,
        Field::IndustryOther,
        Field::Description,
        Field::AudienceDescription,
        Field::AudienceKind,
        Field::UseCases,
        Field::Competitor1,
        Field::Competitor2,
        Field::Differentiation,
        Field::ValueList,
        Field::Personality,
        Field::Message,
        Field::StoryEnabled,
        Field::StoryText,
        Field::LogoType,
        Field::Adjectives,
        Field::References,
        Field::Primary,
        Field::Secondary,
        Field::Avoid,
        Field::TypoStyle,
        Field::TypoDetails,
    ];

    pub fn path(self) -> &'static str {
        use Field::*;
        match self {
            Name => "meta.name",
            Slogan => "meta.slogan",
            Industry => "meta.branche",
            IndustryOther => "meta.brancheOther",
            Description => "meta.beschreibung",
            AudienceDescription => "zielgruppe.beschreibung",
            AudienceKind => "zielgruppe.b2",
            UseCases => "zielgruppe.usecases",
            Competitor1 => "wettbewerb.competitor1",
            Competitor2 => "wettbewerb.competitor2",
            Differentiation => "wettbewerb.differenzierung",
            ValueList => "werte.values",
            Personality => "werte.persoenlichkeit",
            Message => "werte.botschaft",
            StoryEnabled => "story.enabled",
            StoryText => "story.text",
            LogoType => "stil.logotyp",
            Adjectives => "stil.adjektive",
            References => "stil.referenzen",
            Primary => "farben.primary",
            Secondary => "farben.secondary",
            Avoid => "farben.verbot",
            TypoStyle => "typo.stil",
            TypoDetails => "typo.details",
        }
    }

    pub fn is_list(self) -> bool {
        matches!(self, Field::ValueList | Field::Personality | Field::Adjectives)
    }

    fn kind_error(self, requested: &'static str) -> PromptGenError {
        let kind = BrandState::default().get(self).kind();
        PromptGenError::FieldKind { field: self.path().to_string(), kind, requested }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Field {
    type Err = PromptGenError;

    /// Accepts the dotted path, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.path().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PromptGenError::UnknownField(wanted.to_string()))
    }
}
