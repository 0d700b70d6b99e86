// src/recipe/parser.rs

//! BeerXML field extraction
//!
//! Fields are pulled out of raw text by scanning for tags with two
//! case-insensitive patterns (one for opening tags, one for closing tags)
//! and taking the first element with the wanted name. Block boundaries are
//! the only structure understood: a `<NAME>` inside `<HOP>` is told apart
//! from the recipe's own `<NAME>` by cutting the nested blocks out of the
//! recipe text before reading top-level fields.
//!
//! Absent versus empty:
//! - absent numeric tag: `None` for optional fields, `0` for required ones
//! - present numeric tag that is empty or malformed: `0`
//! - absent optional text tag: `None`; present: the decoded text
//! - absent list block: empty vector

use crate::recipe::format::{
    Fermentable, Hop, MashProfile, MashStep, Misc, Recipe, RecipeSummary, Style, Yeast,
};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Blocks nested inside `<RECIPE>` whose fields must not leak into the
/// recipe's top-level fields
const NESTED_BLOCKS: &[&str] = &[
    "STYLE",
    "EQUIPMENT",
    "FERMENTABLES",
    "HOPS",
    "YEASTS",
    "MISCS",
    "WATERS",
    "MASH",
];

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Za-z_][A-Za-z0-9_]*)(?:\s[^>]*)?/?>").expect("open tag pattern")
});

static CLOSE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</([A-Za-z_][A-Za-z0-9_]*)\s*>").expect("close tag pattern")
});

/// Byte ranges of one element: `outer` covers the tags, `inner` the content
#[derive(Debug, Clone)]
struct Element {
    outer: Range<usize>,
    inner: Range<usize>,
}

/// Parse the first `<RECIPE>` in `content`
///
/// Returns `None` when there is no `<RECIPE>` block. Anything else that is
/// missing or malformed falls back to defaults.
pub fn parse_recipe(content: &str) -> Option<Recipe> {
    let block = first_block(content, "RECIPE")?;
    let top = strip_blocks(block, NESTED_BLOCKS);

    Some(Recipe {
        name: required_text(&top, "NAME"),
        version: required_number(&top, "VERSION") as u32,
        recipe_type: required_text(&top, "TYPE"),
        brewer: text(&top, "BREWER"),
        batch_size: required_number(&top, "BATCH_SIZE"),
        boil_size: required_number(&top, "BOIL_SIZE"),
        boil_time: required_number(&top, "BOIL_TIME"),
        efficiency: number(&top, "EFFICIENCY"),
        og: number(&top, "OG"),
        fg: number(&top, "FG"),
        abv: number(&top, "ABV"),
        ibu: number(&top, "IBU"),
        color: number(&top, "COLOR"),
        notes: text(&top, "NOTES"),
        style: first_block(block, "STYLE").map(parse_style),
        fermentables: list(block, "FERMENTABLES", "FERMENTABLE", parse_fermentable),
        hops: list(block, "HOPS", "HOP", parse_hop),
        yeasts: list(block, "YEASTS", "YEAST", parse_yeast),
        miscs: list(block, "MISCS", "MISC", parse_misc),
        mash: first_block(block, "MASH").map(parse_mash),
    })
}

/// Read just enough of a file to list it
///
/// Returns `None` when there is no `<RECIPE>` block or its name is missing
/// or blank, so everything listed can also be loaded.
pub fn parse_summary(slug: &str, content: &str) -> Option<RecipeSummary> {
    let block = first_block(content, "RECIPE")?;
    let top = strip_blocks(block, NESTED_BLOCKS);

    let name = text(&top, "NAME").filter(|n| !n.trim().is_empty())?;
    Some(RecipeSummary {
        slug: slug.to_string(),
        name,
        recipe_type: required_text(&top, "TYPE"),
    })
}

fn parse_style(block: &str) -> Style {
    Style {
        name: required_text(block, "NAME"),
        category: text(block, "CATEGORY"),
        og_min: required_number(block, "OG_MIN"),
        og_max: required_number(block, "OG_MAX"),
        fg_min: required_number(block, "FG_MIN"),
        fg_max: required_number(block, "FG_MAX"),
        ibu_min: required_number(block, "IBU_MIN"),
        ibu_max: required_number(block, "IBU_MAX"),
        color_min: required_number(block, "COLOR_MIN"),
        color_max: required_number(block, "COLOR_MAX"),
        abv_min: required_number(block, "ABV_MIN"),
        abv_max: required_number(block, "ABV_MAX"),
    }
}

fn parse_fermentable(block: &str) -> Fermentable {
    Fermentable {
        name: required_text(block, "NAME"),
        amount: required_number(block, "AMOUNT"),
        fermentable_type: required_text(block, "TYPE"),
        yield_percentage: required_number(block, "YIELD"),
        color: required_number(block, "COLOR"),
    }
}

fn parse_hop(block: &str) -> Hop {
    Hop {
        name: required_text(block, "NAME"),
        amount: required_number(block, "AMOUNT"),
        hop_use: required_text(block, "USE"),
        time: required_number(block, "TIME"),
        alpha: required_number(block, "ALPHA"),
        form: text(block, "FORM"),
    }
}

fn parse_yeast(block: &str) -> Yeast {
    Yeast {
        name: required_text(block, "NAME"),
        amount: required_number(block, "AMOUNT"),
        yeast_type: required_text(block, "TYPE"),
        form: required_text(block, "FORM"),
        laboratory: text(block, "LABORATORY"),
        product_id: text(block, "PRODUCT_ID"),
    }
}

fn parse_misc(block: &str) -> Misc {
    Misc {
        name: required_text(block, "NAME"),
        amount: required_number(block, "AMOUNT"),
        misc_use: required_text(block, "USE"),
        time: required_number(block, "TIME"),
        misc_type: required_text(block, "TYPE"),
    }
}

fn parse_mash(block: &str) -> MashProfile {
    let top = strip_blocks(block, &["MASH_STEPS", "MASH_STEP"]);
    let steps_block = first_block(block, "MASH_STEPS").unwrap_or(block);

    MashProfile {
        name: required_text(&top, "NAME"),
        grain_temp: number(&top, "GRAIN_TEMP"),
        mash_steps: all_blocks(steps_block, "MASH_STEP")
            .into_iter()
            .map(parse_mash_step)
            .collect(),
    }
}

fn parse_mash_step(block: &str) -> MashStep {
    MashStep {
        name: required_text(block, "NAME"),
        step_type: required_text(block, "TYPE"),
        step_temp: required_number(block, "STEP_TEMP"),
        step_time: required_number(block, "STEP_TIME"),
        infuse_amount: number(block, "INFUSE_AMOUNT"),
    }
}

/// Items of a list block, e.g. every `<HOP>` inside `<HOPS>`
fn list<T>(block: &str, container: &str, item: &str, parse: fn(&str) -> T) -> Vec<T> {
    match first_block(block, container) {
        Some(items) => all_blocks(items, item).into_iter().map(parse).collect(),
        None => Vec::new(),
    }
}

/// Decoded text of the first `tag` element, whitespace kept
fn text(block: &str, tag: &str) -> Option<String> {
    first_block(block, tag).map(decode_entities)
}

fn required_text(block: &str, tag: &str) -> String {
    text(block, tag).unwrap_or_default()
}

/// Numeric value of the first `tag` element; present but unparseable is 0
fn number(block: &str, tag: &str) -> Option<f64> {
    first_block(block, tag).map(parse_number)
}

fn required_number(block: &str, tag: &str) -> f64 {
    number(block, tag).unwrap_or(0.0)
}

fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Decode the five predefined XML entities
fn decode_entities(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn first_block<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    next_element(text, tag, 0).map(|el| &text[el.inner])
}

fn all_blocks<'a>(text: &'a str, tag: &str) -> Vec<&'a str> {
    elements(text, tag)
        .into_iter()
        .map(|el| &text[el.inner])
        .collect()
}

/// Copy of `text` with every element of the given tags removed
fn strip_blocks(text: &str, tags: &[&str]) -> String {
    let mut ranges: Vec<Range<usize>> = tags
        .iter()
        .flat_map(|tag| elements(text, tag))
        .map(|el| el.outer)
        .collect();
    ranges.sort_by_key(|r| r.start);

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    for range in ranges {
        // Overlaps only happen for malformed nesting; keep the outer cut
        if range.start < pos {
            continue;
        }
        out.push_str(&text[pos..range.start]);
        pos = range.end;
    }
    out.push_str(&text[pos..]);
    out
}

fn elements(text: &str, tag: &str) -> Vec<Element> {
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(el) = next_element(text, tag, pos) {
        pos = el.outer.end;
        found.push(el);
    }
    found
}

/// First `tag` element starting at or after `pos`
///
/// Self-closing tags are elements with empty content. An opening tag with
/// no matching close ends the scan.
fn next_element(text: &str, tag: &str, pos: usize) -> Option<Element> {
    let mut search = pos;
    while let Some(caps) = OPEN_TAG.captures_at(text, search) {
        let open = caps.get(0)?;
        search = open.end();
        if !caps[1].eq_ignore_ascii_case(tag) {
            continue;
        }

        if open.as_str().ends_with("/>") {
            return Some(Element {
                outer: open.range(),
                inner: open.end()..open.end(),
            });
        }

        let mut close_search = open.end();
        while let Some(close) = CLOSE_TAG.captures_at(text, close_search) {
            let end = close.get(0)?;
            if close[1].eq_ignore_ascii_case(tag) {
                return Some(Element {
                    outer: open.start()..end.end(),
                    inner: open.end()..end.start(),
                });
            }
            close_search = end.end();
        }
        return None;
    }
    None
}
