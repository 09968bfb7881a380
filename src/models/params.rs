use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

pub const DEFAULT_MIN_DIMENSION: u32 = 1000;
pub const DEFAULT_CATEGORY: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    All,
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Accepts `h`/`v` shorthand or the full name. Anything else is `All`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Self::Horizontal,
            "v" | "vertical" => Self::Vertical,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[default]
    All,
    Photo,
    Illustration,
    Vector,
}

impl ImageType {
    /// Accepts `p`/`i`/`v` shorthand or the full name. Anything else is `All`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "p" | "photo" => Self::Photo,
            "i" | "illustration" => Self::Illustration,
            "v" | "vector" => Self::Vector,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Photo => "photo",
            Self::Illustration => "illustration",
            Self::Vector => "vector",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Grayscale,
    Transparent,
    Red,
    Orange,
    Yellow,
    Green,
    Turquoise,
    Blue,
    Lilac,
    Pink,
    White,
    Gray,
    Black,
    Brown,
}

impl Color {
    pub const ALL: [Color; 14] = [
        Color::Grayscale,
        Color::Transparent,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Turquoise,
        Color::Blue,
        Color::Lilac,
        Color::Pink,
        Color::White,
        Color::Gray,
        Color::Black,
        Color::Brown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Grayscale => "grayscale",
            Color::Transparent => "transparent",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Turquoise => "turquoise",
            Color::Blue => "blue",
            Color::Lilac => "lilac",
            Color::Pink => "pink",
            Color::White => "white",
            Color::Gray => "gray",
            Color::Black => "black",
            Color::Brown => "brown",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == wanted)
    }
}

/// Ordered, duplicate-free selection of colors from the provider vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Colors(Vec<Color>);

impl Colors {
    /// Splits on commas and keeps only recognised colors, in input order.
    pub fn normalize(raw: &str) -> Self {
        let mut picked = Vec::new();
        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match Color::parse(entry) {
                Some(color) if !picked.contains(&color) => picked.push(color),
                Some(_) => {}
                None => warn!("Dropping unknown color '{}'", entry),
            }
        }
        Self(picked)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }
}

impl fmt::Display for Colors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.0.iter().map(Color::as_str).collect();
        f.write_str(&joined.join(","))
    }
}

/// Free-text answers as typed at the prompt or passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct RawSearchParameters {
    pub orientation: String,
    pub category: String,
    pub min_width: String,
    pub min_height: String,
    pub image_type: String,
    pub colors: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    pub orientation: Orientation,
    pub category: String,
    pub min_width: u32,
    pub min_height: u32,
    pub image_type: ImageType,
    pub colors: Colors,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            orientation: Orientation::All,
            category: DEFAULT_CATEGORY.to_string(),
            min_width: DEFAULT_MIN_DIMENSION,
            min_height: DEFAULT_MIN_DIMENSION,
            image_type: ImageType::All,
            colors: Colors::default(),
        }
    }
}

impl SearchParameters {
    /// Maps raw input onto canonical values. Never fails: unknown values fall
    /// back to the defaults.
    pub fn normalize(raw: &RawSearchParameters) -> Self {
        let category = raw.category.trim();
        Self {
            orientation: Orientation::normalize(&raw.orientation),
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            min_width: parse_dimension("min_width", &raw.min_width),
            min_height: parse_dimension("min_height", &raw.min_height),
            image_type: ImageType::normalize(&raw.image_type),
            colors: Colors::normalize(&raw.colors),
        }
    }
}

fn parse_dimension(field: &str, raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_MIN_DIMENSION;
    }
    match raw.parse::<u32>() {
        Ok(v) if v > 0 => v,
        _ => {
            warn!("Ignoring {} '{}', using {}", field, raw, DEFAULT_MIN_DIMENSION);
            DEFAULT_MIN_DIMENSION
        }
    }
}
