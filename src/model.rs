use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One golf course as scraped from its detail page.
///
/// `holes` is kept sorted by hole number with no duplicates; the parser
/// enforces this before a `Course` ever leaves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub country: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yardage: Option<u32>,
    pub holes: Vec<Hole>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u32,
    pub par: u32,
    /// Tee name as scraped -> yardage.
    pub tees: BTreeMap<String, u32>,
    /// Tee name -> elevation change in yards.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub elevations: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

impl Hole {
    pub fn new(number: u32, par: u32) -> Self {
        Self {
            number,
            par,
            tees: BTreeMap::new(),
            elevations: BTreeMap::new(),
            video: None,
        }
    }

    pub fn with_tee(mut self, name: &str, yardage: u32) -> Self {
        self.tees.insert(name.to_string(), yardage);
        self
    }
}

impl Course {
    /// Resolves a user supplied tee name against the tees this course
    /// actually has. An exact match wins, otherwise the first
    /// case-insensitive match in name order.
    pub fn resolve_tee(&self, tee: &str) -> Option<&str> {
        let tee = tee.trim();
        let mut fallback = None;
        for hole in &self.holes {
            for name in hole.tees.keys() {
                if name == tee {
                    return Some(name.as_str());
                }
                if fallback.is_none() && name.eq_ignore_ascii_case(tee) {
                    fallback = Some(name.as_str());
                }
            }
        }
        fallback
    }

    pub fn hole(&self, number: u32) -> Option<&Hole> {
        self.holes
            .binary_search_by_key(&number, |h| h.number)
            .ok()
            .map(|idx| &self.holes[idx])
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Sum of per-hole pars. Falls back on this when the page had no
    /// headline par.
    pub fn hole_par_total(&self) -> u32 {
        self.holes
            .iter()
            .fold(0, |total: u32, h| total.saturating_add(h.par))
    }
}
