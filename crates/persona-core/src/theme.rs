//! Theme derivation from a DNA profile.
//!
//! Extroversion drives hue (cool blues toward warm oranges), creativity
//! drives saturation and analytical drives brightness. The dominant ancestry
//! rotates the primary hue to produce the accent color.

use crate::color::{Hsv, Rgb};
use crate::models::configuration::{ColorPalette, Configuration, Layout, Typography};
use crate::models::dna::{DnaProfile, PersonalityTraits};

/// Region assumed for accent derivation when no ancestry is reported.
const FALLBACK_REGION: &str = "european";

/// Hue rotation for regions missing from [`ancestry_hue_shift`].
const DEFAULT_HUE_SHIFT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChoice {
    PlayfairDisplay,
    CormorantGaramond,
    Montserrat,
    Inter,
    Nunito,
}

impl FontChoice {
    pub fn name(self) -> &'static str {
        match self {
            Self::PlayfairDisplay => "Playfair Display",
            Self::CormorantGaramond => "Cormorant Garamond",
            Self::Montserrat => "Montserrat",
            Self::Inter => "Inter",
            Self::Nunito => "Nunito",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::PlayfairDisplay => {
                "Bold, expressive serif font reflecting creativity and confidence"
            }
            Self::CormorantGaramond => "Elegant, delicate serif font with artistic sensibility",
            Self::Montserrat => "Clean, strong sans-serif with precise character",
            Self::Inter => "Focused, refined sans-serif designed for clarity",
            Self::Nunito => "Balanced, versatile sans-serif with rounded terminals",
        }
    }

    /// Generic CSS family to fall back on when the face isn't installed.
    pub fn generic_family(self) -> &'static str {
        match self {
            Self::PlayfairDisplay | Self::CormorantGaramond => "serif",
            Self::Montserrat | Self::Inter | Self::Nunito => "sans-serif",
        }
    }

    /// A CSS `font-family` list, e.g. `'Inter', sans-serif`.
    pub fn css_family(self) -> String {
        format!("'{}', {}", self.name(), self.generic_family())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStyle {
    Bold,
    Minimal,
    Balanced,
    Warm,
    Structured,
}

impl LayoutStyle {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "Bold & Dynamic",
            Self::Minimal => "Clean & Minimal",
            Self::Balanced => "Harmonious & Balanced",
            Self::Warm => "Warm & Inviting",
            Self::Structured => "Structured & Organized",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Bold => "Strong visual elements with high contrast and dynamic spacing",
            Self::Minimal => "Elegant minimalism with focused content and precise spacing",
            Self::Balanced => "Well-balanced layout with thoughtful spacing and moderation",
            Self::Warm => "Welcoming layout with soft elements and approachable design",
            Self::Structured => "Structured layout with clear hierarchy and organization",
        }
    }

    /// CSS `display` value for the generated page's layout container.
    pub fn display(self) -> &'static str {
        match self {
            Self::Bold | Self::Warm => "flex",
            Self::Structured => "grid",
            Self::Minimal | Self::Balanced => "block",
        }
    }

    /// CSS `gap` for the layout container.
    pub fn gap(self) -> &'static str {
        match self {
            Self::Bold => "32px",
            Self::Warm => "20px",
            Self::Balanced => "16px",
            Self::Structured => "12px",
            Self::Minimal => "8px",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary: Rgb,
    pub accent: Rgb,
    pub font: FontChoice,
    pub layout: LayoutStyle,
    pub explanation: String,
}

impl Theme {
    /// Express the theme in the fields the document generator understands.
    pub fn to_configuration(&self) -> Configuration {
        Configuration {
            typography: Typography {
                font_family: Some(self.font.css_family()),
            },
            color_palette: ColorPalette {
                text_color: Some(self.accent.to_hex()),
                background_color: Some(self.primary.to_hex()),
            },
            layout: Layout {
                kind: Some(self.layout.display().to_string()),
                gap: Some(self.layout.gap().to_string()),
            },
        }
    }
}

pub fn derive_theme(profile: &DnaProfile) -> Theme {
    let traits = &profile.personality_traits;
    let dominant = profile.dominant_ancestry();

    let primary = primary_color(traits);
    let accent = accent_color(primary, dominant.unwrap_or(FALLBACK_REGION));
    let font = select_font(traits);
    let layout = select_layout(traits);
    let explanation = explain(traits, dominant, primary, font, layout);

    Theme {
        primary,
        accent,
        font,
        layout,
        explanation,
    }
}

pub fn primary_color(traits: &PersonalityTraits) -> Rgb {
    Hsv {
        h: 0.6 - traits.extroversion * 0.4,
        s: 0.5 + traits.creativity * 0.5,
        v: 0.7 + traits.analytical * 0.3,
    }
    .to_rgb()
}

pub fn accent_color(primary: Rgb, region: &str) -> Rgb {
    primary.to_hsv().shift_hue(ancestry_hue_shift(region)).to_rgb()
}

/// How far around the color wheel the accent sits from the primary.
pub fn ancestry_hue_shift(region: &str) -> f64 {
    match region {
        "european" => 0.5,
        "eastern_european" => 0.45,
        "mediterranean" => 0.4,
        "asian" => 0.33,
        "south_asian" => 0.25,
        "african" => 0.15,
        "middle_eastern" => 0.2,
        "native_american" => 0.3,
        "pacific_islander" => 0.35,
        "nordic" => 0.55,
        "central_asian" => 0.28,
        _ => DEFAULT_HUE_SHIFT,
    }
}

pub fn select_font(traits: &PersonalityTraits) -> FontChoice {
    let extrovert = traits.extroversion > 0.6;
    if traits.creativity > 0.6 {
        if extrovert {
            FontChoice::PlayfairDisplay
        } else {
            FontChoice::CormorantGaramond
        }
    } else if traits.analytical > 0.6 {
        if extrovert {
            FontChoice::Montserrat
        } else {
            FontChoice::Inter
        }
    } else {
        FontChoice::Nunito
    }
}

pub fn select_layout(traits: &PersonalityTraits) -> LayoutStyle {
    let PersonalityTraits {
        extroversion,
        risk_taking,
        empathy,
        ..
    } = *traits;

    if extroversion > 0.7 && risk_taking > 0.7 {
        LayoutStyle::Bold
    } else if extroversion < 0.4 && risk_taking < 0.4 {
        LayoutStyle::Minimal
    } else if empathy > 0.7 {
        LayoutStyle::Warm
    } else if risk_taking < 0.4 && extroversion > 0.6 {
        LayoutStyle::Structured
    } else {
        LayoutStyle::Balanced
    }
}

fn explain(
    traits: &PersonalityTraits,
    dominant: Option<&str>,
    primary: Rgb,
    font: FontChoice,
    layout: LayoutStyle,
) -> String {
    let personality = if traits.extroversion > 0.7 {
        "highly extroverted"
    } else if traits.extroversion < 0.3 {
        "more introverted"
    } else {
        "balanced"
    };

    let creativity = if traits.creativity > 0.7 {
        "very creative"
    } else if traits.creativity < 0.3 {
        "practical"
    } else {
        "moderately creative"
    };

    let analytical = if traits.analytical > 0.7 {
        "analytical"
    } else {
        "intuitive"
    };

    let ancestry = title_case(dominant.unwrap_or("mixed"));

    format!(
        "Your theme reflects your {personality} and {creativity} nature, with {ancestry} \
         ancestry influences. The {primary} primary color represents your {personality} \
         tendencies, while the {font} font was selected to complement your {creativity} \
         and {analytical} traits. The {layout} layout style brings everything together \
         in a way that resonates with your unique personality profile.",
        font = font.name(),
        layout = layout.name(),
    )
}

/// `south_asian` → `South Asian`.
fn title_case(region: &str) -> String {
    region
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
