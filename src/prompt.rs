//! Interactive candidate selection.
//!
//! Renders a numbered list of search results and reads the user's choice
//! from standard input. Invalid input re-prompts without bound; closing the
//! input stream aborts cleanly with nothing starred.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::*;

use crate::github::RepoCandidate;

/// Outcome of an interactive selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Zero-based index of the chosen candidate.
    Chosen(usize),
    /// Input stream closed before a valid choice was made.
    Aborted,
}

/// Trait representing a line-based input source (so tests can inject
/// scripted input).
pub trait LineSource {
    /// Read one line of input. `None` means end-of-input.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Real input source that reads lines from stdin.
pub struct StdinLineSource;

impl LineSource for StdinLineSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut line)?;
        if bytes_read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

/// Present the candidates and read a selection from stdin.
pub fn select_candidate(candidates: &[RepoCandidate]) -> Result<Selection> {
    select_candidate_with(&mut io::stdout(), &mut StdinLineSource, candidates)
}

/// Selection loop with injected output and input (for tests).
///
/// `candidates` must be non-empty; the orchestrator handles the empty case
/// before the selector is ever invoked.
pub fn select_candidate_with<W: Write, L: LineSource>(
    out: &mut W,
    lines: &mut L,
    candidates: &[RepoCandidate],
) -> Result<Selection> {
    render_candidates(out, candidates)?;

    loop {
        write!(out, "{} ", format!("Select a repo [1-{}]:", candidates.len()).cyan())?;
        out.flush()?;

        let Some(line) = lines.read_line()? else {
            writeln!(out)?;
            return Ok(Selection::Aborted);
        };

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=candidates.len()).contains(&choice) => {
                return Ok(Selection::Chosen(choice - 1));
            }
            _ => {
                writeln!(
                    out,
                    "{}",
                    format!(
                        "Please enter a number between 1 and {}.",
                        candidates.len()
                    )
                    .yellow()
                )?;
            }
        }
    }
}

/// Render the numbered candidate list with full name, star count, and
/// description.
pub fn render_candidates<W: Write>(
    out: &mut W,
    candidates: &[RepoCandidate],
) -> Result<()> {
    for (idx, candidate) in candidates.iter().enumerate() {
        writeln!(
            out,
            "{} {} {}",
            format!("{}.", idx + 1).cyan().bold(),
            candidate.full_name.bright_white().bold(),
            format!("★ {}", candidate.stargazers_count).yellow()
        )?;
        if let Some(description) = &candidate.description {
            writeln!(out, "   {}", description.dimmed())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    pub struct MockLineSource {
        lines: VecDeque<String>,
    }

    impl MockLineSource {
        pub fn new(lines: Vec<&str>) -> Self {
            Self {
                lines: lines.into_iter().map(String::from).collect(),
            }
        }
    }

    impl LineSource for MockLineSource {
        fn read_line(&mut self) -> Result<Option<String>> {
            Ok(self.lines.pop_front())
        }
    }

    fn candidates(count: usize) -> Vec<RepoCandidate> {
        (1..=count)
            .map(|i| RepoCandidate {
                full_name: format!("owner{}/repo{}", i, i),
                description: Some(format!("Description {}", i)),
                stargazers_count: (i as u64) * 100,
            })
            .collect()
    }

    #[test]
    fn test_select_first_candidate() {
        let mut out = Vec::new();
        let mut lines = MockLineSource::new(vec!["1\n"]);

        let selection =
            select_candidate_with(&mut out, &mut lines, &candidates(3)).unwrap();
        assert_eq!(selection, Selection::Chosen(0));
    }

    #[test]
    fn test_select_last_candidate() {
        let mut out = Vec::new();
        let mut lines = MockLineSource::new(vec!["3\n"]);

        let selection =
            select_candidate_with(&mut out, &mut lines, &candidates(3)).unwrap();
        assert_eq!(selection, Selection::Chosen(2));
    }

    #[test]
    fn test_reprompt_on_out_of_range_input() {
        let mut out = Vec::new();
        let mut lines = MockLineSource::new(vec!["0\n", "7\n", "2\n"]);

        let selection =
            select_candidate_with(&mut out, &mut lines, &candidates(3)).unwrap();
        assert_eq!(selection, Selection::Chosen(1));
    }

    #[test]
    fn test_reprompt_on_non_integer_input() {
        let mut out = Vec::new();
        let mut lines = MockLineSource::new(vec!["abc\n", "\n", "2\n"]);

        let selection =
            select_candidate_with(&mut out, &mut lines, &candidates(2)).unwrap();
        assert_eq!(selection, Selection::Chosen(1));
    }

    #[test]
    fn test_end_of_input_aborts() {
        let mut out = Vec::new();
        let mut lines = MockLineSource::new(vec![]);

        let selection =
            select_candidate_with(&mut out, &mut lines, &candidates(2)).unwrap();
        assert_eq!(selection, Selection::Aborted);
    }

    #[test]
    fn test_render_shows_one_based_indices_and_names() {
        let mut out = Vec::new();
        render_candidates(&mut out, &candidates(2)).unwrap();

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("1."));
        assert!(rendered.contains("2."));
        assert!(rendered.contains("owner1/repo1"));
        assert!(rendered.contains("owner2/repo2"));
        assert!(rendered.contains("Description 1"));
    }
}
