// src/recipe/format.rs

//! BeerXML record definitions
//!
//! These mirror the subset of BeerXML 1.0 that kettle reads and writes.
//! Units follow the format: amounts in kilograms (liters for liquid yeast
//! and miscs), volumes in liters, times in minutes, temperatures in °C,
//! colors in SRM.
//!
//! JSON field names are camelCase so the HTTP API speaks the same shape as
//! the recipe forms that produce it.

use serde::{Deserialize, Serialize};

/// Listing entry for one recipe file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// File stem of `<slug>.xml`
    pub slug: String,
    pub name: String,
    #[serde(rename = "type")]
    pub recipe_type: String,
}

/// A complete recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,

    /// Record version as read; always written as 1
    #[serde(default)]
    pub version: u32,

    /// "All Grain", "Extract" or "Partial Mash"
    #[serde(rename = "type", default)]
    pub recipe_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brewer: Option<String>,

    /// Target volume into the fermenter (L)
    #[serde(default)]
    pub batch_size: f64,

    /// Pre-boil volume (L)
    #[serde(default)]
    pub boil_size: f64,

    /// Boil time (min)
    #[serde(default)]
    pub boil_time: f64,

    /// Brewhouse efficiency (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,

    /// Estimated original gravity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og: Option<f64>,

    /// Estimated final gravity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<f64>,

    /// Estimated alcohol by volume (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abv: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibu: Option<f64>,

    /// Estimated color (SRM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,

    #[serde(default)]
    pub fermentables: Vec<Fermentable>,

    #[serde(default)]
    pub hops: Vec<Hop>,

    #[serde(default)]
    pub yeasts: Vec<Yeast>,

    #[serde(default)]
    pub miscs: Vec<Misc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mash: Option<MashProfile>,
}

impl Recipe {
    /// Original gravity for calculations: the recipe estimate, else the
    /// midpoint of the style range
    pub fn effective_og(&self) -> Option<f64> {
        self.og.filter(|og| *og > 0.0).or_else(|| {
            self.style
                .as_ref()
                .and_then(|s| midpoint(s.og_min, s.og_max))
        })
    }

    /// Final gravity for calculations, same fallback as [`Recipe::effective_og`]
    pub fn effective_fg(&self) -> Option<f64> {
        self.fg.filter(|fg| *fg > 0.0).or_else(|| {
            self.style
                .as_ref()
                .and_then(|s| midpoint(s.fg_min, s.fg_max))
        })
    }

    /// Total grain bill (kg)
    pub fn total_fermentables(&self) -> f64 {
        self.fermentables.iter().map(|f| f.amount).sum()
    }
}

fn midpoint(min: f64, max: f64) -> Option<f64> {
    if min > 0.0 && max > 0.0 {
        Some((min + max) / 2.0)
    } else {
        None
    }
}

/// Style guideline the recipe targets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub og_min: f64,
    #[serde(default)]
    pub og_max: f64,
    #[serde(default)]
    pub fg_min: f64,
    #[serde(default)]
    pub fg_max: f64,
    #[serde(default)]
    pub ibu_min: f64,
    #[serde(default)]
    pub ibu_max: f64,
    #[serde(default)]
    pub color_min: f64,
    #[serde(default)]
    pub color_max: f64,
    #[serde(default)]
    pub abv_min: f64,
    #[serde(default)]
    pub abv_max: f64,
}

/// Grain, extract, sugar or adjunct
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fermentable {
    pub name: String,
    /// kg
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub fermentable_type: String,
    /// Yield as percent of dry weight
    #[serde(default)]
    pub yield_percentage: f64,
    /// SRM
    #[serde(default)]
    pub color: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hop {
    pub name: String,
    /// kg
    #[serde(default)]
    pub amount: f64,
    /// "Boil", "Dry Hop", "Mash", "First Wort" or "Aroma"
    #[serde(rename = "use", default)]
    pub hop_use: String,
    /// min
    #[serde(default)]
    pub time: f64,
    /// Alpha acid (%)
    #[serde(default)]
    pub alpha: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Yeast {
    pub name: String,
    /// L for liquid, kg for dry
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub yeast_type: String,
    #[serde(default)]
    pub form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laboratory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

/// Miscellaneous addition (spice, fining, water agent, herb, flavor)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Misc {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "use", default)]
    pub misc_use: String,
    /// min
    #[serde(default)]
    pub time: f64,
    #[serde(rename = "type", default)]
    pub misc_type: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MashStep {
    pub name: String,
    /// "Infusion", "Temperature" or "Decoction"
    #[serde(rename = "type", default)]
    pub step_type: String,
    /// °C
    #[serde(default)]
    pub step_temp: f64,
    /// min
    #[serde(default)]
    pub step_time: f64,
    /// L of water added for infusion steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infuse_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MashProfile {
    pub name: String,
    /// °C
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain_temp: Option<f64>,
    #[serde(default)]
    pub mash_steps: Vec<MashStep>,
}
