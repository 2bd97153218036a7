use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("cannot read yardage range {0:?}; try 6000-6500, >=6000, <=6500 or 6200")]
    InvalidRange(String),

    #[error("yardage range is inverted: min {min} > max {max}")]
    InvertedRange { min: u32, max: u32 },

    #[error("cannot read hole selection {0:?}; try 1-9 or 1,3,5-7")]
    InvalidHoles(String),
}

/// Inclusive yardage bounds; `None` leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YardageRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl YardageRange {
    pub fn new(min: u32, max: u32) -> Result<Self, QueryError> {
        if min > max {
            return Err(QueryError::InvertedRange { min, max });
        }
        Ok(Self {
            min: Some(min),
            max: Some(max),
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Accepts `6000-6500`, `>=6000`, `<=6500`, `6200`, `6000 6500` or
    /// nothing. Commas are ignored and reversed bounds are swapped.
    pub fn parse(text: &str) -> Result<Self, QueryError> {
        let cleaned = text.trim().replace(',', "");
        if cleaned.is_empty() {
            return Ok(Self::default());
        }
        let invalid = || QueryError::InvalidRange(text.trim().to_string());
        let number = |s: &str| s.trim().parse::<u32>().map_err(|_| invalid());

        if let Some(rest) = cleaned.strip_prefix(">=") {
            return Ok(Self {
                min: Some(number(rest)?),
                max: None,
            });
        }
        if let Some(rest) = cleaned.strip_prefix("<=") {
            return Ok(Self {
                min: None,
                max: Some(number(rest)?),
            });
        }
        if let Some((a, b)) = cleaned.split_once('-') {
            let (a, b) = (number(a)?, number(b)?);
            return Self::new(a.min(b), a.max(b));
        }

        let numbers = cleaned
            .split_whitespace()
            .map(number)
            .collect::<Result<Vec<_>, _>>()?;
        match numbers.as_slice() {
            [exact] => Self::new(*exact, *exact),
            [a, b] => Self::new(*a.min(b), *a.max(b)),
            _ => Err(invalid()),
        }
    }
}

/// Parses hole selections such as `1,3,5-9` into a sorted, deduplicated
/// list. Holes past `total_holes` are dropped; reversed ranges are swapped.
pub fn parse_hole_selection(text: &str, total_holes: Option<u32>) -> Result<Vec<u32>, QueryError> {
    let invalid = || QueryError::InvalidHoles(text.trim().to_string());
    let number = |s: &str| s.trim().parse::<u32>().map_err(|_| invalid());
    let mut holes = BTreeSet::new();

    for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((a, b)) => {
                let (a, b) = (number(a)?, number(b)?);
                (a.min(b), a.max(b))
            }
            None => {
                let h = number(part)?;
                (h, h)
            }
        };
        let end = total_holes.map_or(end, |total| end.min(total));
        holes.extend(start.max(1)..=end);
    }

    Ok(holes.into_iter().collect())
}

/// Filter criteria collected by the shell. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub name: Option<String>,
    pub country: Option<String>,
    pub tee: Option<String>,
    pub yardage: YardageRange,
}

impl Query {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = non_empty(name);
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = non_empty(country);
        self
    }

    pub fn with_tee(mut self, tee: &str) -> Self {
        self.tee = non_empty(tee);
        self
    }

    pub fn with_yardage(mut self, range: YardageRange) -> Self {
        self.yardage = range;
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
