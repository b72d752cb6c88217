use std::ops::Range;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

pub const CORRECT_MARKER: &str = "Your output is CORRECT";
pub const WRONG_MARKER: &str = "Your output is WRONG";

/// A line containing both `====` and `Problem`, in either order.
static PROBLEM_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"====.*Problem|Problem.*====").unwrap());

pub fn is_problem_header(line: &str) -> bool {
    PROBLEM_HEADER.is_match(line)
}

/// Autograder output split into per-problem segments.
#[derive(Debug, Clone)]
pub struct AutogradeReport {
    lines: Vec<String>,
    segments: Vec<Range<usize>>,
    correct: usize,
    wrong: usize,
}

impl AutogradeReport {
    pub fn parse(raw: &str) -> Self {
        let lines: Vec<String> = raw.lines().map(str::to_owned).collect();

        // A segment starts at the beginning of the report and right after
        // every header line.
        let mut boundaries: Vec<usize> = std::iter::once(0)
            .chain(
                lines
                    .iter()
                    .positions(|l| is_problem_header(l))
                    .map(|i| i + 1),
            )
            .collect();
        // A report ending on a header must not grow an empty last segment.
        if boundaries.len() > 1 && boundaries.last() == Some(&lines.len()) {
            boundaries.pop();
        }

        let segments = boundaries
            .iter()
            .copied()
            .zip(
                boundaries
                    .iter()
                    .skip(1)
                    .copied()
                    .chain(std::iter::once(lines.len())),
            )
            .map(|(start, end)| start..end)
            .collect();

        let correct = lines.iter().filter(|l| l.contains(CORRECT_MARKER)).count();
        let wrong = lines.iter().filter(|l| l.contains(WRONG_MARKER)).count();

        AutogradeReport {
            lines,
            segments,
            correct,
            wrong,
        }
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn wrong(&self) -> usize {
        self.wrong
    }

    pub fn total(&self) -> usize {
        self.correct + self.wrong
    }

    pub fn segments(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.segments.iter().map(move |r| &self.lines[r.clone()])
    }

    /// Segments containing at least one wrong answer, in report order.
    pub fn failing_segments(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.segments()
            .filter(|seg| seg.iter().any(|l| l.contains(WRONG_MARKER)))
    }

    /// `<n> correct and <m> wrong, out of <n+m> total`
    pub fn summary(&self) -> String {
        format!(
            "{} correct and {} wrong, out of {} total",
            self.correct,
            self.wrong,
            self.total()
        )
    }
}
