// src/label.rs

//! Bottle label rendering
//!
//! A label is a fixed layout: a color band tinted with the beer's
//! approximate color, the recipe name, the style, and a stats line. Output is
//! a standalone SVG document, which browsers display directly and which can
//! be rasterized by any SVG tool.

use crate::recipe::writer::escape_xml;
use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;

/// Language of the label captions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "de" | "german" | "deutsch" => Ok(Language::De),
            other => Err(format!("unsupported label language '{}'", other)),
        }
    }
}

struct Captions {
    abv: &'static str,
    ibu: &'static str,
    color: &'static str,
    batch: &'static str,
    brewed_by: &'static str,
}

impl Language {
    fn captions(self) -> Captions {
        match self {
            Language::En => Captions {
                abv: "ABV",
                ibu: "IBU",
                color: "SRM",
                batch: "Batch",
                brewed_by: "Brewed by",
            },
            Language::De => Captions {
                abv: "Alk.",
                ibu: "IBU",
                color: "Farbe",
                batch: "Sud",
                brewed_by: "Gebraut von",
            },
        }
    }
}

/// Visual settings for a label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelDesign {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub foreground: String,
    /// Band color when the beer color is unknown
    pub accent: String,
    pub font_family: String,
    pub language: Language,
}

impl Default for LabelDesign {
    fn default() -> Self {
        Self {
            width: 360,
            height: 480,
            background: "#fdf6e3".to_string(),
            foreground: "#2b2b2b".to_string(),
            accent: "#c8a165".to_string(),
            font_family: "Georgia, serif".to_string(),
            language: Language::En,
        }
    }
}

/// Text and numbers printed on a label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelContent {
    pub title: String,
    pub subtitle: Option<String>,
    pub abv: Option<f64>,
    pub ibu: Option<f64>,
    /// SRM
    pub color: Option<f64>,
    /// L
    pub batch_size: Option<f64>,
    pub brewer: Option<String>,
}

impl LabelContent {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let subtitle = recipe
            .style
            .as_ref()
            .map(|s| s.name.clone())
            .filter(|s| !s.is_empty())
            .or_else(|| Some(recipe.recipe_type.clone()).filter(|t| !t.is_empty()));

        Self {
            title: recipe.name.clone(),
            subtitle,
            abv: recipe.abv.or_else(|| estimate_abv(recipe)),
            ibu: recipe.ibu,
            color: recipe.color.or_else(|| estimate_color(recipe)),
            batch_size: Some(recipe.batch_size).filter(|b| *b > 0.0),
            brewer: recipe.brewer.clone().filter(|b| !b.is_empty()),
        }
    }
}

/// ABV from estimated gravities, `(OG - FG) * 131.25`
pub fn estimate_abv(recipe: &Recipe) -> Option<f64> {
    let og = recipe.og.filter(|g| *g > 0.0)?;
    let fg = recipe.fg.filter(|g| *g > 0.0)?;
    if og < fg {
        return None;
    }
    Some((og - fg) * 131.25)
}

/// Morey color estimate from the grain bill
pub fn estimate_color(recipe: &Recipe) -> Option<f64> {
    if recipe.batch_size <= 0.0 || recipe.fermentables.is_empty() {
        return None;
    }
    let gallons = recipe.batch_size * 0.264_172;
    let mcu: f64 = recipe
        .fermentables
        .iter()
        .map(|f| f.color * f.amount * 2.204_62)
        .sum::<f64>()
        / gallons;
    if mcu <= 0.0 {
        return None;
    }
    Some(1.4922 * mcu.powf(0.6859))
}

/// Approximate sRGB hex color of a beer with the given SRM
pub fn srm_to_hex(srm: f64) -> String {
    let srm = srm.clamp(0.0, 40.0);
    let r = (255.0 * 0.975_f64.powf(srm)).round() as u8;
    let g = (255.0 * 0.88_f64.powf(srm)).round() as u8;
    let b = (255.0 * 0.7_f64.powf(srm)).round() as u8;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Render a label as an SVG document
pub fn render_svg(content: &LabelContent, design: &LabelDesign) -> String {
    let captions = design.language.captions();
    let width = design.width.max(120);
    let height = design.height.max(160);
    let center = width / 2;
    let band_height = height / 3;
    let band_color = content
        .color
        .map(srm_to_hex)
        .unwrap_or_else(|| design.accent.clone());
    let title_size = if content.title.chars().count() > 18 { 22 } else { 30 };
    let font = escape_xml(&design.font_family);
    let fg = escape_xml(&design.foreground);

    // Writes into a String cannot fail
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )
    .unwrap();
    writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
        escape_xml(&design.background)
    )
    .unwrap();
    writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{width}" height="{band_height}" fill="{}"/>"#,
        escape_xml(&band_color)
    )
    .unwrap();

    let mut y = band_height + 60;
    writeln!(
        svg,
        r#"  <text x="{center}" y="{y}" text-anchor="middle" font-family="{font}" font-size="{title_size}" font-weight="bold" fill="{fg}">{}</text>"#,
        escape_xml(&content.title)
    )
    .unwrap();

    if let Some(subtitle) = &content.subtitle {
        y += 32;
        writeln!(
            svg,
            r#"  <text x="{center}" y="{y}" text-anchor="middle" font-family="{font}" font-size="18" font-style="italic" fill="{fg}">{}</text>"#,
            escape_xml(subtitle)
        )
        .unwrap();
    }

    let mut stats = Vec::new();
    if let Some(abv) = content.abv {
        stats.push(format!("{} {:.1}%", captions.abv, abv));
    }
    if let Some(ibu) = content.ibu {
        stats.push(format!("{} {:.0}", captions.ibu, ibu));
    }
    if let Some(color) = content.color {
        stats.push(format!("{} {:.0}", captions.color, color));
    }
    if !stats.is_empty() {
        y += 48;
        writeln!(
            svg,
            r#"  <text x="{center}" y="{y}" text-anchor="middle" font-family="{font}" font-size="16" fill="{fg}">{}</text>"#,
            escape_xml(&stats.join(" · "))
        )
        .unwrap();
    }

    let mut footer = Vec::new();
    if let Some(brewer) = &content.brewer {
        footer.push(format!("{} {}", captions.brewed_by, brewer));
    }
    if let Some(batch) = content.batch_size {
        footer.push(format!("{} {:.0} L", captions.batch, batch));
    }
    if !footer.is_empty() {
        let footer_y = height - 24;
        writeln!(
            svg,
            r#"  <text x="{center}" y="{footer_y}" text-anchor="middle" font-family="{font}" font-size="12" fill="{fg}">{}</text>"#,
            escape_xml(&footer.join(" · "))
        )
        .unwrap();
    }

    svg.push_str("</svg>\n");
    svg
}
