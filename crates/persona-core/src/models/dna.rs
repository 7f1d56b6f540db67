use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Trait value assumed when a DNA file leaves a trait out.
pub const NEUTRAL_TRAIT: f64 = 0.5;

/// A DNA profile as exported by the testing service: personality traits on a
/// 0..1 scale plus ancestry shares by region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DnaProfile {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub personality_traits: PersonalityTraits,
    #[serde(default)]
    pub ancestry: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityTraits {
    pub extroversion: f64,
    pub creativity: f64,
    pub analytical: f64,
    pub risk_taking: f64,
    pub empathy: f64,
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self {
            extroversion: NEUTRAL_TRAIT,
            creativity: NEUTRAL_TRAIT,
            analytical: NEUTRAL_TRAIT,
            risk_taking: NEUTRAL_TRAIT,
            empathy: NEUTRAL_TRAIT,
        }
    }
}

impl DnaProfile {
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The region with the largest share. Ties go to the region that sorts
    /// first. `None` when no ancestry was reported.
    pub fn dominant_ancestry(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (region, share) in &self.ancestry {
            match best {
                Some((_, top)) if *share <= top => {}
                _ => best = Some((region.as_str(), *share)),
            }
        }
        best.map(|(region, _)| region)
    }
}
