//! Line-oriented sectioning of model replies.
//!
//! A single forward pass over the reply text, no backtracking. The
//! splitter is a heuristic: labels are derived from the matched line
//! text, so formatting variance in the reply can produce labels that
//! differ from the canonical ones callers look up.

use std::collections::HashMap;

/// Phrases that make a line a section header even without a leading
/// heading marker. Matched case-sensitively, as substrings.
const SECTION_MARKERS: [&str; 5] = [
    "Executive Summary",
    "Detailed Analysis",
    "Key Insights",
    "Action Items",
    "Potential Risks",
];

/// Splitter state: between sections, or accumulating lines under a
/// header label.
enum State {
    Outside,
    Inside { label: String, lines: Vec<String> },
}

/// Split a reply into a label -> content mapping.
///
/// Lines before the first header are dropped. A header immediately
/// followed by another header or by end of input produces no entry,
/// so callers must treat absent labels as empty content.
pub fn split_sections(reply: &str) -> HashMap<String, String> {
    let mut sections = HashMap::new();
    let mut state = State::Outside;

    for line in reply.split('\n') {
        if is_header_line(line) {
            let pending = std::mem::replace(
                &mut state,
                State::Inside {
                    label: header_label(line),
                    lines: Vec::new(),
                },
            );
            commit(&mut sections, pending);
        } else if let State::Inside { lines, .. } = &mut state {
            lines.push(line.to_string());
        }
    }

    commit(&mut sections, state);

    sections
}

/// A header line starts with `#` after trimming, or contains one of
/// the marker phrases verbatim.
fn is_header_line(line: &str) -> bool {
    line.trim().starts_with('#')
        || SECTION_MARKERS.iter().any(|marker| line.contains(marker))
}

/// The label is the line trimmed of `#` and spaces at both ends, up
/// to the first colon.
fn header_label(line: &str) -> String {
    let stripped = line.trim_matches(|c| c == '#' || c == ' ');
    stripped.split(':').next().unwrap_or(stripped).to_string()
}

fn commit(sections: &mut HashMap<String, String>, state: State) {
    if let State::Inside { label, lines } = state {
        if !label.is_empty() && !lines.is_empty() {
            sections.insert(label, lines.join("\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(split_sections("").is_empty());
    }

    #[test]
    fn test_text_without_headers_is_dropped() {
        let reply = "Just a plain answer\nacross two lines";
        assert!(split_sections(reply).is_empty());
    }

    #[test]
    fn test_basic_split() {
        let reply = "# Executive Summary\nLine A\nLine B\n# Action Items\nLine C";
        let sections = split_sections(reply);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections["Executive Summary"], "Line A\nLine B");
        assert_eq!(sections["Action Items"], "Line C");
    }

    #[test]
    fn test_marker_phrase_without_heading_marker() {
        let reply = "Executive Summary:\nThe market is growing.";
        let sections = split_sections(reply);
        assert_eq!(sections["Executive Summary"], "The market is growing.");
    }

    #[test]
    fn test_label_stops_at_first_colon() {
        let reply = "## Key Insights: highlights\nInsight one";
        let sections = split_sections(reply);
        assert_eq!(sections["Key Insights"], "Insight one");
    }

    #[test]
    fn test_preamble_is_dropped() {
        let reply = "Here is my analysis.\n\n# Executive Summary\nGrowth is strong.";
        let sections = split_sections(reply);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections["Executive Summary"], "Growth is strong.");
    }

    #[test]
    fn test_trailing_header_without_content_yields_no_entry() {
        let reply = "# Executive Summary\nSome text\n# Action Items";
        let sections = split_sections(reply);
        assert_eq!(sections.len(), 1);
        assert!(!sections.contains_key("Action Items"));
    }

    #[test]
    fn test_back_to_back_headers_drop_the_first() {
        let reply = "# Executive Summary\n# Action Items\nDo the thing";
        let sections = split_sections(reply);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections["Action Items"], "Do the thing");
    }

    #[test]
    fn test_blank_line_counts_as_content() {
        // A buffered blank line is still a buffered line: the section
        // commits with empty content.
        let reply = "# Executive Summary\n\n# Action Items\nDo it";
        let sections = split_sections(reply);
        assert_eq!(sections["Executive Summary"], "");
        assert_eq!(sections["Action Items"], "Do it");
    }

    #[test]
    fn test_content_lines_are_kept_verbatim() {
        let reply = "# Detailed Analysis\n  - indented bullet\n\ttabbed line";
        let sections = split_sections(reply);
        assert_eq!(sections["Detailed Analysis"], "  - indented bullet\n\ttabbed line");
    }
}
