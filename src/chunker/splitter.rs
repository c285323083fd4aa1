use log::trace;
use regex::Regex;

/// Recursive splitter over an ordered list of structural boundary patterns.
///
/// The algorithm works top-down: split the text at the first pattern that
/// occurs in it (each boundary marker stays attached as the prefix of the
/// segment it introduces), then greedily merge consecutive segments while
/// the running character length stays within the budget. A segment that is
/// itself over budget recurses into the *next* pattern in the list; once the
/// list is exhausted the oversized segment is emitted as-is. Always
/// returning chunks outranks strict budget adherence.
///
/// Chunks never overlap: concatenating the output reproduces the input
/// byte for byte.
pub struct Splitter {
    separators: Vec<Regex>,
}

impl Splitter {
    /// Compile the given separator patterns, preserving their order.
    pub fn new(patterns: &[&str]) -> Result<Self, regex::Error> {
        let separators = patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { separators })
    }

    /// Split into pieces of at most `budget` characters where possible.
    ///
    /// Empty input yields a single empty piece so that every document maps
    /// to at least one chunk.
    pub fn split(&self, text: &str, budget: usize) -> Vec<String> {
        if text.is_empty() {
            return vec![String::new()];
        }
        let mut pieces = Vec::new();
        self.split_from(text, 0, budget, &mut pieces);
        pieces
    }

    fn split_from(&self, text: &str, first: usize, budget: usize, out: &mut Vec<String>) {
        // First pattern at or after `first` that occurs in this text; the
        // remainder of the list is reserved for recursion.
        let found = self.separators[first..]
            .iter()
            .position(|separator| separator.is_match(text))
            .map(|offset| first + offset);

        let (segments, next) = match found {
            Some(index) => (
                split_keeping_separator(&self.separators[index], text),
                index + 1,
            ),
            None => (vec![text.to_string()], self.separators.len()),
        };

        let mut current = String::new();
        for segment in segments {
            if segment.len() > budget {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                if next < self.separators.len() {
                    self.split_from(&segment, next, budget, out);
                } else {
                    trace!(
                        "emitting unsplittable segment of {} chars over budget {}",
                        segment.len(),
                        budget
                    );
                    out.push(segment);
                }
                continue;
            }

            if !current.is_empty() && current.len() + segment.len() > budget {
                out.push(std::mem::take(&mut current));
            }
            current.push_str(&segment);
        }

        if !current.is_empty() {
            out.push(current);
        }
    }
}

/// Split `text` at every match of `separator`, keeping each match as the
/// leading text of the segment it opens. Text before the first match forms
/// its own segment.
fn split_keeping_separator(separator: &Regex, text: &str) -> Vec<String> {
    let starts: Vec<usize> = separator.find_iter(text).map(|m| m.start()).collect();
    if starts.is_empty() {
        return vec![text.to_string()];
    }

    let mut segments = Vec::with_capacity(starts.len() + 1);
    if starts[0] > 0 {
        segments.push(text[..starts[0]].to_string());
    }
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        segments.push(text[start..end].to_string());
    }
    segments
}

#[cfg(test)]
mod split_tests {
    use super::*;

    #[test]
    fn separator_stays_with_following_segment() {
        let separator = Regex::new("\nMETHOD ").unwrap();
        let segments = split_keeping_separator(&separator, "head\nMETHOD a.\nMETHOD b.");

        assert_eq!(segments, vec!["head", "\nMETHOD a.", "\nMETHOD b."]);
    }

    #[test]
    fn no_match_returns_whole_text() {
        let separator = Regex::new("\nMETHOD ").unwrap();
        let segments = split_keeping_separator(&separator, "no boundaries here");

        assert_eq!(segments, vec!["no boundaries here"]);
    }

    #[test]
    fn match_at_start_produces_no_empty_lead() {
        let separator = Regex::new("\nMETHOD ").unwrap();
        let segments = split_keeping_separator(&separator, "\nMETHOD only.");

        assert_eq!(segments, vec!["\nMETHOD only."]);
    }
}
