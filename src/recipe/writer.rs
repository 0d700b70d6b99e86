// src/recipe/writer.rs

//! BeerXML document generation
//!
//! The writer is a pure function from a recipe to text. It does not
//! validate; run [`crate::recipe::validate_recipe`] first.

use crate::recipe::format::{
    Fermentable, Hop, MashProfile, MashStep, Misc, Recipe, Style, Yeast,
};

/// Record version written for every element
const RECORD_VERSION: u32 = 1;

/// Serialize a recipe as a single-recipe BeerXML document
///
/// Element order is fixed. Numbers are written with a fixed number of
/// decimals per field, so parsing the output reproduces the input only to
/// that precision.
pub fn write_recipe(recipe: &Recipe) -> String {
    let mut doc = XmlDoc::default();

    doc.line("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    doc.open("RECIPES");
    doc.open("RECIPE");

    doc.text("NAME", &recipe.name);
    doc.version();
    doc.text("TYPE", &recipe.recipe_type);
    doc.opt_text("BREWER", recipe.brewer.as_deref());
    doc.number("BATCH_SIZE", recipe.batch_size, 2);
    doc.number("BOIL_SIZE", recipe.boil_size, 2);
    doc.number("BOIL_TIME", recipe.boil_time, 0);
    doc.opt_number("EFFICIENCY", recipe.efficiency, 1);
    doc.opt_number("OG", recipe.og, 3);
    doc.opt_number("FG", recipe.fg, 3);
    doc.opt_number("ABV", recipe.abv, 1);
    doc.opt_number("IBU", recipe.ibu, 1);
    doc.opt_number("COLOR", recipe.color, 1);
    doc.opt_text("NOTES", recipe.notes.as_deref());

    if let Some(style) = &recipe.style {
        write_style(&mut doc, style);
    }

    doc.open("FERMENTABLES");
    for fermentable in &recipe.fermentables {
        write_fermentable(&mut doc, fermentable);
    }
    doc.close("FERMENTABLES");

    doc.open("HOPS");
    for hop in &recipe.hops {
        write_hop(&mut doc, hop);
    }
    doc.close("HOPS");

    doc.open("YEASTS");
    for yeast in &recipe.yeasts {
        write_yeast(&mut doc, yeast);
    }
    doc.close("YEASTS");

    doc.open("MISCS");
    for misc in &recipe.miscs {
        write_misc(&mut doc, misc);
    }
    doc.close("MISCS");

    // Water profiles are not modelled
    doc.empty("WATERS");

    if let Some(mash) = &recipe.mash {
        write_mash(&mut doc, mash);
    }

    doc.close("RECIPE");
    doc.close("RECIPES");
    doc.finish()
}

fn write_style(doc: &mut XmlDoc, style: &Style) {
    doc.open("STYLE");
    doc.text("NAME", &style.name);
    doc.opt_text("CATEGORY", style.category.as_deref());
    doc.version();
    doc.number("OG_MIN", style.og_min, 3);
    doc.number("OG_MAX", style.og_max, 3);
    doc.number("FG_MIN", style.fg_min, 3);
    doc.number("FG_MAX", style.fg_max, 3);
    doc.number("IBU_MIN", style.ibu_min, 1);
    doc.number("IBU_MAX", style.ibu_max, 1);
    doc.number("COLOR_MIN", style.color_min, 1);
    doc.number("COLOR_MAX", style.color_max, 1);
    doc.number("ABV_MIN", style.abv_min, 1);
    doc.number("ABV_MAX", style.abv_max, 1);
    doc.close("STYLE");
}

fn write_fermentable(doc: &mut XmlDoc, fermentable: &Fermentable) {
    doc.open("FERMENTABLE");
    doc.text("NAME", &fermentable.name);
    doc.version();
    doc.text("TYPE", &fermentable.fermentable_type);
    doc.number("AMOUNT", fermentable.amount, 3);
    doc.number("YIELD", fermentable.yield_percentage, 1);
    doc.number("COLOR", fermentable.color, 1);
    doc.close("FERMENTABLE");
}

fn write_hop(doc: &mut XmlDoc, hop: &Hop) {
    doc.open("HOP");
    doc.text("NAME", &hop.name);
    doc.version();
    doc.number("ALPHA", hop.alpha, 1);
    doc.number("AMOUNT", hop.amount, 4);
    doc.text("USE", &hop.hop_use);
    doc.number("TIME", hop.time, 0);
    doc.opt_text("FORM", hop.form.as_deref());
    doc.close("HOP");
}

fn write_yeast(doc: &mut XmlDoc, yeast: &Yeast) {
    doc.open("YEAST");
    doc.text("NAME", &yeast.name);
    doc.version();
    doc.text("TYPE", &yeast.yeast_type);
    doc.text("FORM", &yeast.form);
    doc.number("AMOUNT", yeast.amount, 3);
    doc.opt_text("LABORATORY", yeast.laboratory.as_deref());
    doc.opt_text("PRODUCT_ID", yeast.product_id.as_deref());
    doc.close("YEAST");
}

fn write_misc(doc: &mut XmlDoc, misc: &Misc) {
    doc.open("MISC");
    doc.text("NAME", &misc.name);
    doc.version();
    doc.text("TYPE", &misc.misc_type);
    doc.text("USE", &misc.misc_use);
    doc.number("TIME", misc.time, 0);
    doc.number("AMOUNT", misc.amount, 4);
    doc.close("MISC");
}

fn write_mash(doc: &mut XmlDoc, mash: &MashProfile) {
    doc.open("MASH");
    doc.text("NAME", &mash.name);
    doc.version();
    doc.opt_number("GRAIN_TEMP", mash.grain_temp, 1);
    doc.open("MASH_STEPS");
    for step in &mash.mash_steps {
        write_mash_step(doc, step);
    }
    doc.close("MASH_STEPS");
    doc.close("MASH");
}

fn write_mash_step(doc: &mut XmlDoc, step: &MashStep) {
    doc.open("MASH_STEP");
    doc.text("NAME", &step.name);
    doc.version();
    doc.text("TYPE", &step.step_type);
    doc.opt_number("INFUSE_AMOUNT", step.infuse_amount, 2);
    doc.number("STEP_TEMP", step.step_temp, 1);
    doc.number("STEP_TIME", step.step_time, 0);
    doc.close("MASH_STEP");
}

/// Escape the five reserved XML characters
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Indented line-per-tag output buffer
#[derive(Default)]
struct XmlDoc {
    buf: String,
    depth: usize,
}

impl XmlDoc {
    fn line(&mut self, content: &str) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
        self.buf.push_str(content);
        self.buf.push('\n');
    }

    fn open(&mut self, tag: &str) {
        self.line(&format!("<{tag}>"));
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&format!("</{tag}>"));
    }

    fn empty(&mut self, tag: &str) {
        self.line(&format!("<{tag}></{tag}>"));
    }

    fn raw(&mut self, tag: &str, value: &str) {
        self.line(&format!("<{tag}>{value}</{tag}>"));
    }

    fn text(&mut self, tag: &str, value: &str) {
        self.raw(tag, &escape_xml(value));
    }

    fn opt_text(&mut self, tag: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.text(tag, value);
        }
    }

    fn number(&mut self, tag: &str, value: f64, decimals: usize) {
        self.raw(tag, &format_number(value, decimals));
    }

    fn opt_number(&mut self, tag: &str, value: Option<f64>, decimals: usize) {
        if let Some(value) = value {
            self.number(tag, value, decimals);
        }
    }

    fn version(&mut self) {
        self.raw("VERSION", &RECORD_VERSION.to_string());
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn format_number(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{value:.decimals$}");
    // "-0.000" reads back as 0 anyway; keep files tidy
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}
