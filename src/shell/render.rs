use std::fmt::Write;

use crate::model::Course;
use crate::search::{selected_hole_totals, tee_totals, SearchHit};

fn or_dash(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// The result list, numbered from 1 so a row can be picked by index.
pub fn results_table(hits: &[SearchHit<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nResults ({})", hits.len());

    for (idx, hit) in hits.iter().enumerate() {
        let course = hit.course;
        let yardage = match hit.tee {
            Some(tee) => format!("{} {} yd", tee, or_dash(hit.yardage)),
            None => format!("{} yd", or_dash(hit.yardage)),
        };
        let _ = writeln!(
            out,
            "[{}] {} | {} | {} | Par {} | {} holes | {}",
            idx + 1,
            course.name,
            course.country,
            yardage,
            or_dash(course.par),
            course.hole_count(),
            course.url
        );
    }
    out
}

pub fn course_card(course: &Course) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{} ({}) | {} holes | Par {} | {} yds",
        course.name,
        course.country,
        course.hole_count(),
        or_dash(course.par),
        or_dash(course.yardage)
    );
    let _ = writeln!(out, "{}", course.url);

    let totals = tee_totals(course);
    if totals.is_empty() {
        let _ = writeln!(out, "No tee data");
    } else {
        let _ = writeln!(out, "Tee totals (yd):");
        for (tee, total) in &totals {
            let _ = writeln!(out, "  {:<12} {:>6}", tee, total);
        }
    }
    out
}

/// Per-hole par and tee lines for `holes`, then the tee totals over just
/// those holes.
pub fn hole_details(course: &Course, holes: &[u32]) -> String {
    let mut out = String::new();

    for number in holes {
        let Some(hole) = course.hole(*number) else {
            let _ = writeln!(out, "Hole {} not found.", number);
            continue;
        };
        let _ = writeln!(out, "Hole {}: Par {}", hole.number, hole.par);
        for (tee, yards) in &hole.tees {
            match hole.elevations.get(tee) {
                Some(elevation) => {
                    let _ = writeln!(out, "  {}: {} yards (elevation: {})", tee, yards, elevation);
                }
                None => {
                    let _ = writeln!(out, "  {}: {} yards", tee, yards);
                }
            }
        }
        if let Some(video) = &hole.video {
            let _ = writeln!(out, "  video: {}", video);
        }
    }

    let totals = selected_hole_totals(course, holes);
    if totals.is_empty() {
        let _ = writeln!(out, "No tee data for those holes.");
    } else {
        let _ = writeln!(out, "Total yardage by tee for selected holes:");
        for (tee, total) in &totals {
            let _ = writeln!(out, "  {:<12} {:>6}", tee, total);
        }
    }
    out
}
