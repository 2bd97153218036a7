use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid value for `{field}`: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("duplicate hole number {0}")]
    DuplicateHole(u32),

    #[error("no hole panels found")]
    NoHoles,

    #[error("no tee yardages found on any hole")]
    NoTees,

    #[error("invalid selector {0}")]
    InvalidSelector(String),
}

/// CSS selectors for the catalogue markup. Defaults follow the Golfzon
/// course pages.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub listing_card: String,
    pub listing_title: String,
    pub listing_country: String,
    pub next_page: String,
    pub course_name: String,
    pub course_country: String,
    pub summary: String,
    /// One panel per hole. The hole number is read from `hole_attr`, or from
    /// the `hole_label` text when the attribute is absent.
    pub hole_panel: String,
    pub hole_attr: String,
    pub hole_label: String,
    pub hole_par: String,
    pub tee_row: String,
    pub tee_name: String,
    pub tee_distance: String,
    pub tee_elevation: String,
    pub video: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            listing_card: "#search-course-body a[href^='/courses/']".to_string(),
            listing_title: "h4".to_string(),
            listing_country: ".course-country".to_string(),
            next_page: "a[rel='next']".to_string(),
            course_name: "h1".to_string(),
            course_country: ".course-country".to_string(),
            summary: ".span-space--dot".to_string(),
            hole_panel: "div.block".to_string(),
            hole_attr: "data-hole".to_string(),
            hole_label: ".hole-label".to_string(),
            hole_par: "span.gz-text-xsm".to_string(),
            tee_row: "div.flex.items-center.justify-between.border-b".to_string(),
            tee_name: "div.gz-text-md".to_string(),
            tee_distance: "div[class*='w-[78px]']".to_string(),
            tee_elevation: "div[class*='w-[92px]']".to_string(),
            video: "video.video-crop".to_string(),
        }
    }
}

pub(crate) fn compile(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector(format!("{selector:?}: {e:?}")))
}

/// Element text with runs of whitespace collapsed to single spaces.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn first_text(root: ElementRef<'_>, selector: &Selector) -> Option<String> {
    root.select(selector)
        .map(element_text)
        .find(|text| !text.is_empty())
}

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d[\d,]*(?:\.\d+)?").expect("number pattern"));

/// Pulls the first integer out of text such as `"6,200 yd"` or `"PAR 4"`.
/// A fractional value (`"380.9yd"`) is rejected rather than truncated.
pub(crate) fn parse_int(text: &str) -> Option<u32> {
    let found = FIRST_NUMBER.find(text)?.as_str().replace(',', "");
    if found.contains('.') {
        return None;
    }
    found.parse().ok()
}

pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let found = FIRST_NUMBER.find(text)?;
    found.as_str().replace(',', "").parse().ok()
}
