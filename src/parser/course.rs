use log::{debug, trace};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use super::base::{compile, element_text, first_text, parse_float, parse_int, ParseError, Selectors};
use super::listing::ListingEntry;
use crate::model::{Course, Hole};

static SUMMARY_HOLES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*H\b").expect("holes pattern"));
static SUMMARY_PAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bPar\s*(\d+)").expect("par pattern"));
static SUMMARY_YARDAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([\d,]+)\s*yd\b").expect("yardage pattern"));

/// Headline figures from the course summary strip.
#[derive(Debug, Default, PartialEq)]
struct Summary {
    holes: Option<u32>,
    par: Option<u32>,
    yardage: Option<u32>,
}

/// Turns one course detail page into a [`Course`].
///
/// Required data that is missing or malformed yields a [`ParseError`];
/// nothing is defaulted.
pub struct CourseParser {
    name: Selector,
    country: Selector,
    summary: Selector,
    hole_panel: Selector,
    hole_attr: String,
    hole_label: Selector,
    hole_par: Selector,
    tee_row: Selector,
    tee_name: Selector,
    tee_distance: Selector,
    tee_elevation: Selector,
    video: Selector,
}

impl CourseParser {
    pub fn new(selectors: &Selectors) -> Result<Self, ParseError> {
        Ok(Self {
            name: compile(&selectors.course_name)?,
            country: compile(&selectors.course_country)?,
            summary: compile(&selectors.summary)?,
            hole_panel: compile(&selectors.hole_panel)?,
            hole_attr: selectors.hole_attr.clone(),
            hole_label: compile(&selectors.hole_label)?,
            hole_par: compile(&selectors.hole_par)?,
            tee_row: compile(&selectors.tee_row)?,
            tee_name: compile(&selectors.tee_name)?,
            tee_distance: compile(&selectors.tee_distance)?,
            tee_elevation: compile(&selectors.tee_elevation)?,
            video: compile(&selectors.video)?,
        })
    }

    pub fn parse(
        &self,
        html: &str,
        url: &Url,
        listing: Option<&ListingEntry>,
    ) -> Result<Course, ParseError> {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let name = first_text(root, &self.name)
            .or_else(|| listing.and_then(|l| l.name.clone()))
            .ok_or(ParseError::MissingField("name"))?;
        let country = first_text(root, &self.country)
            .or_else(|| listing.and_then(|l| l.country.clone()))
            .ok_or(ParseError::MissingField("country"))?;

        let mut holes = document
            .select(&self.hole_panel)
            .map(|panel| self.parse_hole(panel))
            .collect::<Result<Vec<_>, _>>()?;
        if holes.is_empty() {
            return Err(ParseError::NoHoles);
        }

        holes.sort_by_key(|h| h.number);
        if let Some(pair) = holes.windows(2).find(|w| w[0].number == w[1].number) {
            return Err(ParseError::DuplicateHole(pair[0].number));
        }
        if holes.iter().all(|h| h.tees.is_empty()) {
            return Err(ParseError::NoTees);
        }

        let summary = self.parse_summary(root);
        if let Some(count) = summary.holes {
            if count as usize != holes.len() {
                debug!(
                    "{}: summary lists {} holes but {} panels were found",
                    url,
                    count,
                    holes.len()
                );
            }
        }

        let mut course = Course {
            name,
            country,
            url: url.to_string(),
            par: summary.par,
            yardage: summary.yardage,
            holes,
        };
        course.par = course.par.or_else(|| Some(course.hole_par_total()));
        trace!("Parsed course: {:?}", course);
        Ok(course)
    }

    fn parse_summary(&self, root: ElementRef<'_>) -> Summary {
        let Some(text) = first_text(root, &self.summary) else {
            return Summary::default();
        };
        let capture = |re: &Regex| {
            re.captures(&text)
                .and_then(|c| c.get(1))
                .and_then(|m| parse_int(m.as_str()))
        };

        Summary {
            holes: capture(&SUMMARY_HOLES),
            par: capture(&SUMMARY_PAR),
            yardage: capture(&SUMMARY_YARDAGE),
        }
    }

    fn hole_number(&self, panel: ElementRef<'_>) -> Result<u32, ParseError> {
        let raw = panel
            .value()
            .attr(&self.hole_attr)
            .map(str::to_string)
            .or_else(|| first_text(panel, &self.hole_label))
            .ok_or(ParseError::MissingField("hole number"))?;

        match parse_int(&raw) {
            Some(n) if n >= 1 => Ok(n),
            _ => Err(ParseError::InvalidValue {
                field: "hole number",
                value: raw,
            }),
        }
    }

    fn parse_hole(&self, panel: ElementRef<'_>) -> Result<Hole, ParseError> {
        let number = self.hole_number(panel)?;

        let par_text = first_text(panel, &self.hole_par).ok_or(ParseError::MissingField("par"))?;
        let par = parse_int(&par_text).ok_or(ParseError::InvalidValue {
            field: "par",
            value: par_text,
        })?;

        let mut hole = Hole::new(number, par);

        for row in panel.select(&self.tee_row) {
            let (Some(tee), Some(distance)) = (
                first_text(row, &self.tee_name),
                row.select(&self.tee_distance).next().map(element_text),
            ) else {
                trace!("Hole {}: ignoring row without tee name or distance", number);
                continue;
            };

            let yards = parse_int(&distance).ok_or(ParseError::InvalidValue {
                field: "tee distance",
                value: distance,
            })?;

            if let Some(elevation) = row
                .select(&self.tee_elevation)
                .next()
                .map(element_text)
                .and_then(|text| parse_float(&text))
            {
                hole.elevations.insert(tee.clone(), elevation);
            }
            hole.tees.insert(tee, yards);
        }

        hole.video = panel
            .select(&self.video)
            .next()
            .and_then(|v| v.value().attr("src"))
            .map(str::to_string);

        Ok(hole)
    }
}
