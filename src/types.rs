//! Core types and structures for username-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UsernameForgeError;

/// Themed word-list category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clean,
    Fruit,
    Cat,
    Anime,
    League,
    Genshin,
    Sanrio,
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Clean,
        Category::Fruit,
        Category::Cat,
        Category::Anime,
        Category::League,
        Category::Genshin,
        Category::Sanrio,
        Category::Miscellaneous,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Clean => write!(f, "clean"),
            Category::Fruit => write!(f, "fruit"),
            Category::Cat => write!(f, "cat"),
            Category::Anime => write!(f, "anime"),
            Category::League => write!(f, "league"),
            Category::Genshin => write!(f, "genshin"),
            Category::Sanrio => write!(f, "sanrio"),
            Category::Miscellaneous => write!(f, "miscellaneous"),
        }
    }
}

impl FromStr for Category {
    type Err = UsernameForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clean" => Ok(Category::Clean),
            "fruit" => Ok(Category::Fruit),
            "cat" => Ok(Category::Cat),
            "anime" => Ok(Category::Anime),
            "league" => Ok(Category::League),
            "genshin" => Ok(Category::Genshin),
            "sanrio" => Ok(Category::Sanrio),
            "miscellaneous" | "misc" => Ok(Category::Miscellaneous),
            other => Err(UsernameForgeError::config(format!(
                "unknown category '{}' (expected one of: clean, fruit, cat, anime, league, genshin, sanrio, miscellaneous)",
                other
            ))),
        }
    }
}

/// Username formatting style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    Cute,
    Clean,
    Gamer,
    Professional,
}

impl StylePreset {
    pub const ALL: [StylePreset; 4] = [
        StylePreset::Cute,
        StylePreset::Clean,
        StylePreset::Gamer,
        StylePreset::Professional,
    ];

    /// Formatting recipe for this style. Fixed mapping, never changes at runtime.
    pub fn rule(self) -> StyleRule {
        match self {
            StylePreset::Cute => StyleRule {
                separator: "",
                casing: Casing::Pascal,
                numbers: false,
            },
            StylePreset::Clean => StyleRule {
                separator: "",
                casing: Casing::Camel,
                numbers: false,
            },
            StylePreset::Gamer => StyleRule {
                separator: "_",
                casing: Casing::Upper,
                numbers: true,
            },
            StylePreset::Professional => StyleRule {
                separator: ".",
                casing: Casing::Pascal,
                numbers: false,
            },
        }
    }
}

impl std::fmt::Display for StylePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylePreset::Cute => write!(f, "cute"),
            StylePreset::Clean => write!(f, "clean"),
            StylePreset::Gamer => write!(f, "gamer"),
            StylePreset::Professional => write!(f, "professional"),
        }
    }
}

impl FromStr for StylePreset {
    type Err = UsernameForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cute" => Ok(StylePreset::Cute),
            "clean" => Ok(StylePreset::Clean),
            "gamer" => Ok(StylePreset::Gamer),
            "professional" | "pro" => Ok(StylePreset::Professional),
            other => Err(UsernameForgeError::config(format!(
                "unknown style '{}' (expected one of: cute, clean, gamer, professional)",
                other
            ))),
        }
    }
}

/// Casing transform applied per joined part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    Pascal,
    Camel,
    Upper,
}

/// Formatting recipe: separator character, casing transform, digit suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub separator: &'static str,
    pub casing: Casing,
    pub numbers: bool,
}

/// Configuration for username generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameOptions {
    pub category: Category,
    pub style: StylePreset,
    pub batch_size: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub include_prefix: bool,
    pub include_suffix: bool,
    pub avoid_ambiguous: bool,
    pub keyword: String,
}

impl Default for UsernameOptions {
    fn default() -> Self {
        Self {
            category: Category::Clean,
            style: StylePreset::Cute,
            batch_size: 10,
            min_length: 3,
            max_length: 18,
            include_prefix: false,
            include_suffix: false,
            avoid_ambiguous: true,
            keyword: String::new(),
        }
    }
}

/// A previously generated username kept in the recent-history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub value: String,
    pub timestamp: DateTime<Utc>,
}
