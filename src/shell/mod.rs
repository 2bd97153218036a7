//! Terminal dashboard over a loaded [`CourseStore`].

mod render;

pub use render::{course_card, hole_details, results_table};

use anyhow::Result;
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;

use crate::search::{parse_hole_selection, Query, SearchEngine, SearchHit, YardageRange};
use crate::storage::CourseStore;

/// Where the shell reads its answers from. `Ok(None)` ends the session.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Prints the result table for a single query.
pub fn print_query<W: Write>(store: &CourseStore, query: &Query, out: &mut W) -> Result<()> {
    let hits = SearchEngine::new(store.courses()).search(query);
    write!(out, "{}", results_table(&hits))?;
    Ok(())
}

pub struct Shell<'a, S, W> {
    store: &'a CourseStore,
    input: S,
    out: W,
}

impl<'a, S: LineSource, W: Write> Shell<'a, S, W> {
    pub fn new(store: &'a CourseStore, input: S, out: W) -> Self {
        Self { store, input, out }
    }

    /// Runs query rounds until the input ends or the user types `q`.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Loaded {} courses. Leave a filter blank to skip it, `q` to quit.",
            self.store.len()
        )?;

        while let Some(query) = self.read_query()? {
            debug!("Running query: {:?}", query);
            let engine = SearchEngine::new(self.store.courses());
            let hits = engine.search(&query);
            write!(self.out, "{}", results_table(&hits))?;

            if hits.is_empty() {
                writeln!(self.out, "No matches found.")?;
                continue;
            }
            if !self.inspect(&hits)? {
                break;
            }
        }

        writeln!(self.out, "Bye.")?;
        Ok(())
    }

    /// `None` when the user quits.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self
            .input
            .read_line(prompt)?
            .map(|line| line.trim().to_string())
            .filter(|line| !line.eq_ignore_ascii_case("q")))
    }

    fn read_query(&mut self) -> Result<Option<Query>> {
        let Some(name) = self.ask("\nCourse name contains: ")? else {
            return Ok(None);
        };
        let Some(country) = self.ask("Country name or 3-letter code: ")? else {
            return Ok(None);
        };

        let tees = self.store.tee_names();
        if !tees.is_empty() {
            writeln!(self.out, "Known tees: {}", tees.join(", "))?;
        }
        let Some(tee) = self.ask("Tee: ")? else {
            return Ok(None);
        };

        let range = loop {
            let Some(text) = self.ask("Yardage range (6000-6500, >=6000, <=6500): ")? else {
                return Ok(None);
            };
            match YardageRange::parse(&text) {
                Ok(range) => break range,
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        };

        Ok(Some(
            Query::default()
                .with_name(&name)
                .with_country(&country)
                .with_tee(&tee)
                .with_yardage(range),
        ))
    }

    /// Lets the user drill into one hit. Returns `false` when the session
    /// should end.
    fn inspect(&mut self, hits: &[SearchHit<'_>]) -> Result<bool> {
        let course = loop {
            let Some(choice) = self.ask("\nSelect a course by number (blank for a new search): ")?
            else {
                return Ok(false);
            };
            if choice.is_empty() {
                return Ok(true);
            }
            match choice.parse::<usize>() {
                Ok(n) if (1..=hits.len()).contains(&n) => break hits[n - 1].course,
                _ => writeln!(self.out, "Pick a number between 1 and {}.", hits.len())?,
            }
        };
        write!(self.out, "{}", course_card(course))?;

        let holes = loop {
            let Some(text) = self.ask("Enter hole numbers (e.g. 1-9, 3,5,7) [1-18]: ")? else {
                return Ok(false);
            };
            let text = if text.is_empty() { "1-18".to_string() } else { text };
            let last_hole = course.holes.last().map(|h| h.number);
            match parse_hole_selection(&text, last_hole) {
                Ok(holes) => break holes,
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        };
        write!(self.out, "{}", hole_details(course, &holes))?;
        Ok(true)
    }
}
