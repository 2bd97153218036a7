use std::collections::BTreeMap;

use super::country::same_country;
use super::query::{Query, QueryError, YardageRange};
use crate::model::{Course, Hole};

/// Total yardage of `tee` over the holes that have it. Holes without the
/// tee are left out rather than counted as zero; a course with no such tee
/// totals 0. Totals saturate at `u32::MAX`.
pub fn total_yardage(course: &Course, tee: &str) -> u32 {
    match course.resolve_tee(tee) {
        Some(resolved) => course
            .holes
            .iter()
            .filter_map(|h| h.tees.get(resolved))
            .fold(0, |total: u32, yards| total.saturating_add(*yards)),
        None => 0,
    }
}

/// Totals for every tee on the course, keyed by tee name as scraped.
pub fn tee_totals(course: &Course) -> BTreeMap<String, u32> {
    sum_tees(course.holes.iter())
}

/// Tee totals restricted to the given hole numbers.
pub fn selected_hole_totals(course: &Course, holes: &[u32]) -> BTreeMap<String, u32> {
    sum_tees(holes.iter().filter_map(|n| course.hole(*n)))
}

fn sum_tees<'a>(holes: impl Iterator<Item = &'a Hole>) -> BTreeMap<String, u32> {
    let mut totals = BTreeMap::new();
    for hole in holes {
        for (tee, yards) in &hole.tees {
            let total: &mut u32 = totals.entry(tee.clone()).or_insert(0);
            *total = total.saturating_add(*yards);
        }
    }
    totals
}

/// One row of a combined search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub course: &'a Course,
    /// The course's own spelling of the requested tee.
    pub tee: Option<&'a str>,
    /// Tee total when a tee was requested, headline yardage otherwise.
    pub yardage: Option<u32>,
}

/// Stateless filters over a borrowed course collection.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    courses: &'a [Course],
}

impl<'a> SearchEngine<'a> {
    pub fn new(courses: &'a [Course]) -> Self {
        Self { courses }
    }

    pub fn by_name(&self, substring: &str) -> Vec<&'a Course> {
        let needle = substring.trim().to_lowercase();
        self.courses
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn by_country(&self, value: &str) -> Vec<&'a Course> {
        self.courses
            .iter()
            .filter(|c| same_country(&c.country, value))
            .collect()
    }

    /// Courses whose `tee` total lies in `[min, max]`. Courses without the
    /// tee never match, even when `min` is 0.
    pub fn by_yardage_range(
        &self,
        tee: &str,
        min: u32,
        max: u32,
    ) -> Result<Vec<&'a Course>, QueryError> {
        let range = YardageRange::new(min, max)?;
        Ok(self
            .courses
            .iter()
            .filter(|c| c.resolve_tee(tee).is_some() && range.contains(total_yardage(c, tee)))
            .collect())
    }

    pub fn total_yardage(&self, course: &Course, tee: &str) -> u32 {
        total_yardage(course, tee)
    }

    pub fn search(&self, query: &Query) -> Vec<SearchHit<'a>> {
        let needle = query.name.as_deref().map(str::to_lowercase);

        self.courses
            .iter()
            .filter(|c| {
                needle
                    .as_deref()
                    .map_or(true, |n| c.name.to_lowercase().contains(n))
            })
            .filter(|c| {
                query
                    .country
                    .as_deref()
                    .map_or(true, |country| same_country(&c.country, country))
            })
            .filter_map(|course| match query.tee.as_deref() {
                Some(tee) => {
                    let resolved = course.resolve_tee(tee)?;
                    let total = total_yardage(course, resolved);
                    query.yardage.contains(total).then_some(SearchHit {
                        course,
                        tee: Some(resolved),
                        yardage: Some(total),
                    })
                }
                None => {
                    let keep = match course.yardage {
                        Some(yards) => query.yardage.contains(yards),
                        None => query.yardage.is_unbounded(),
                    };
                    keep.then_some(SearchHit {
                        course,
                        tee: None,
                        yardage: course.yardage,
                    })
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, country: &str, tee: &str, yards: &[u32]) -> Course {
        Course {
            name: name.to_string(),
            country: country.to_string(),
            url: format!("https://golf.example.com/{}", name.replace(' ', "-")),
            par: Some(72),
            yardage: Some(yards.iter().sum()),
            holes: yards
                .iter()
                .enumerate()
                .map(|(i, y)| Hole::new(i as u32 + 1, 4).with_tee(tee, *y))
                .collect(),
        }
    }

    fn collection() -> Vec<Course> {
        vec![
            course("Pine Valley", "US", "White", &[3000, 3200]),
            course("Sea Breeze", "JP", "White", &[3400, 3400]),
        ]
    }

    fn names(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_scenario_queries() {
        let courses = collection();
        let engine = SearchEngine::new(&courses);

        assert_eq!(names(&engine.by_country("US")), vec!["Pine Valley"]);
        assert_eq!(
            names(&engine.by_yardage_range("White", 6000, 6500).unwrap()),
            vec!["Pine Valley"]
        );
        assert_eq!(names(&engine.by_name("sea")), vec!["Sea Breeze"]);
        assert_eq!(engine.total_yardage(&courses[0], "White"), 6200);
        assert_eq!(engine.total_yardage(&courses[1], "White"), 6800);
    }

    #[test]
    fn test_total_skips_holes_without_tee() {
        let mut course = course("Mixed", "JP", "White", &[300, 400, 500]);
        course.holes[1].tees.clear();
        course.holes[1].tees.insert("Blue".to_string(), 420);

        assert_eq!(total_yardage(&course, "White"), 800);
        assert_eq!(total_yardage(&course, "Blue"), 420);
        assert_eq!(total_yardage(&course, "Gold"), 0);
        assert_eq!(total_yardage(&course, "white"), 800);
    }

    #[test]
    fn test_range_matches_exactly_the_totals_inside() {
        let courses = vec![
            course("A", "JP", "White", &[5999]),
            course("B", "JP", "White", &[6000]),
            course("C", "JP", "White", &[6500]),
            course("D", "JP", "White", &[6501]),
            course("E", "JP", "Blue", &[6200]),
        ];
        let engine = SearchEngine::new(&courses);

        let hits = engine.by_yardage_range("White", 6000, 6500).unwrap();
        assert_eq!(names(&hits), vec!["B", "C"]);

        // a missing tee is not the same as a zero total
        let zero = engine.by_yardage_range("Blue", 0, 0).unwrap();
        assert!(zero.is_empty());

        assert_eq!(
            engine.by_yardage_range("White", 7000, 6000),
            Err(QueryError::InvertedRange {
                min: 7000,
                max: 6000
            })
        );
    }

    #[test]
    fn test_country_codes_and_case() {
        let courses = vec![
            course("Seoul Hills", "South Korea", "White", &[300]),
            course("Tokyo Bay", "japan", "White", &[300]),
        ];
        let engine = SearchEngine::new(&courses);

        assert_eq!(names(&engine.by_country("KOR")), vec!["Seoul Hills"]);
        assert_eq!(names(&engine.by_country("JAPAN")), vec!["Tokyo Bay"]);
        assert!(engine.by_country("Japanese").is_empty());
    }

    #[test]
    fn test_empty_name_matches_all() {
        let courses = collection();
        assert_eq!(SearchEngine::new(&courses).by_name("").len(), 2);
    }

    #[test]
    fn test_tee_totals_and_selected_holes() {
        let mut course = course("Totals", "JP", "White", &[300, 400, 500]);
        course.holes[0].tees.insert("Red".to_string(), 250);

        let totals = tee_totals(&course);
        assert_eq!(totals.get("White"), Some(&1200));
        assert_eq!(totals.get("Red"), Some(&250));

        let front = selected_hole_totals(&course, &[2, 3, 19]);
        assert_eq!(front.get("White"), Some(&900));
        assert!(front.get("Red").is_none());
    }

    #[test]
    fn test_totals_saturate_on_oversized_yardages() {
        let json = r#"{
            "name": "Huge", "country": "JP", "url": "https://golf.example.com/huge",
            "holes": [
                {"number": 1, "par": 4, "tees": {"White": 3000000000}},
                {"number": 2, "par": 4, "tees": {"White": 3000000000}}
            ]
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();

        assert_eq!(total_yardage(&course, "White"), u32::MAX);
        assert_eq!(tee_totals(&course).get("White"), Some(&u32::MAX));
        assert_eq!(
            selected_hole_totals(&course, &[1, 2]).get("White"),
            Some(&u32::MAX)
        );

        let courses = vec![course];
        let engine = SearchEngine::new(&courses);
        assert!(engine.by_yardage_range("White", 0, 10_000).unwrap().is_empty());
    }

    #[test]
    fn test_combined_search() {
        let mut courses = collection();
        courses.push(Course {
            yardage: None,
            ..course("Sea Cliff", "JP", "white", &[3100, 3100])
        });
        let engine = SearchEngine::new(&courses);

        let hits = engine.search(
            &Query::default()
                .with_name("sea")
                .with_tee("White")
                .with_yardage(YardageRange::parse("6000-6500").unwrap()),
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].course.name, "Sea Cliff");
        assert_eq!(hits[0].tee, Some("white"));
        assert_eq!(hits[0].yardage, Some(6200));

        // no tee: the range applies to the headline yardage
        let hits = engine.search(
            &Query::default().with_yardage(YardageRange::parse(">=6500").unwrap()),
        );
        let hit_names: Vec<_> = hits.iter().map(|h| h.course.name.as_str()).collect();
        assert_eq!(hit_names, vec!["Sea Breeze"]);

        // unbounded query keeps courses that have no headline yardage
        let hits = engine.search(&Query::default().with_country("jp"));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].yardage, None);
    }
}
