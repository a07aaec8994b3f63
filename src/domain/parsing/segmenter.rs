//! Splitting a day's comment into one fragment per route mention
//!
//! A comment looks like:
//!
//! ```text
//! Armed, Obi (AS); Jedi Mind Tricks * 2 (TA working moves).
//! ```
//!
//! Fragments are separated by runs of `,` `;` `!` or `.` outside of
//! parentheses. The parenthesised clause after a route name carries the
//! per-route detail (who climbed, how it went).
//!
//! # Examples
//!
//! ```
//! use climblog::domain::parsing::segment;
//!
//! let seg = segment("Armed, Obi (AS)");
//! assert_eq!(seg.fragments.len(), 2);
//! assert_eq!(seg.fragments[1].name_approx, "Obi");
//! assert_eq!(seg.fragments[1].remainder, "AS");
//! assert_eq!(seg.reconstruct(), "Armed, Obi (AS)");
//! ```

/// One route mention within a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Byte offset of the first non-blank character in the comment
    pub start: usize,
    /// Byte offset one past the last non-blank character
    pub end: usize,
    /// Verbatim `comment[start..end]`
    pub text: String,
    /// Text before the first `(`, trimmed
    pub name_approx: String,
    /// Text inside the outermost parentheses, trimmed
    pub remainder: String,
    /// Text after the closing parenthesis, trimmed
    pub suffix: String,
    /// Verbatim text between this fragment and the next one (or the end)
    pub separator: String,
}

/// A comment split into fragments, keeping every character of the input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segmentation {
    /// Text before the first fragment (separators and blanks only)
    pub lead: String,
    pub fragments: Vec<Fragment>,
}

impl Segmentation {
    /// Rebuild the original comment from the lead, fragments and separators
    pub fn reconstruct(&self) -> String {
        let mut out = self.lead.clone();
        for fragment in &self.fragments {
            out.push_str(&fragment.text);
            out.push_str(&fragment.separator);
        }
        out
    }
}

/// Split a comment into fragments. Never fails: unbalanced parentheses
/// extend to the end of the comment and blank segments fold into separators.
pub fn segment(comment: &str) -> Segmentation {
    let chars: Vec<(usize, char)> = comment.char_indices().collect();
    let mut bounds: Vec<(usize, usize)> = Vec::new();
    let mut depth = 0usize;
    let mut seg_start = 0;

    for (i, &(pos, ch)) in chars.iter().enumerate() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && is_separator(&chars, i) => {
                bounds.push((seg_start, pos));
                seg_start = pos + ch.len_utf8();
            }
            _ => {}
        }
    }
    bounds.push((seg_start, comment.len()));

    let spans: Vec<(usize, usize)> = bounds
        .into_iter()
        .filter_map(|(start, end)| trim_span(comment, start, end))
        .collect();

    let lead = match spans.first() {
        Some(&(start, _)) => comment[..start].to_string(),
        None => comment.to_string(),
    };

    let fragments = spans
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            let next = spans.get(i + 1).map_or(comment.len(), |&(s, _)| s);
            let text = &comment[start..end];
            let (name_approx, remainder, suffix) = split_detail(text);
            Fragment {
                start,
                end,
                text: text.to_string(),
                name_approx,
                remainder,
                suffix,
                separator: comment[end..next].to_string(),
            }
        })
        .collect();

    Segmentation { lead, fragments }
}

/// `,` `;` `!` always separate; `.` separates unless it sits between digits
/// (grades like 5.10a).
fn is_separator(chars: &[(usize, char)], i: usize) -> bool {
    match chars[i].1 {
        ',' | ';' | '!' => true,
        '.' => {
            let prev_digit = i > 0 && chars[i - 1].1.is_ascii_digit();
            let next_digit = chars.get(i + 1).is_some_and(|(_, c)| c.is_ascii_digit());
            !(prev_digit && next_digit)
        }
        _ => false,
    }
}

/// Shrink a byte span to its non-blank content, or None if it is all blank
fn trim_span(comment: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let slice = &comment[start..end];
    let trimmed = slice.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    let new_start = start + (slice.len() - trimmed.len());
    let new_end = new_start + trimmed.trim_end().len();
    Some((new_start, new_end))
}

/// Split fragment text into (name, parenthesised remainder, suffix)
fn split_detail(text: &str) -> (String, String, String) {
    let Some(open) = text.find('(') else {
        return (text.trim().to_string(), String::new(), String::new());
    };

    let name = text[..open].trim().to_string();
    let mut depth = 0usize;
    let mut close = None;
    for (i, ch) in text[open..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open + i);
                    break;
                }
            }
            _ => {}
        }
    }

    match close {
        Some(close) => (
            name,
            text[open + 1..close].trim().to_string(),
            text[close + 1..].trim().to_string(),
        ),
        // Unterminated: the detail runs to the end of the fragment
        None => (name, text[open + 1..].trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(seg: &Segmentation) -> Vec<&str> {
        seg.fragments.iter().map(|f| f.name_approx.as_str()).collect()
    }

    #[test]
    fn test_simple_list() {
        let seg = segment("Holderness, Idiot, Misdemeanor");
        assert_eq!(names(&seg), vec!["Holderness", "Idiot", "Misdemeanor"]);
        assert!(seg.fragments.iter().all(|f| f.remainder.is_empty()));
    }

    #[test]
    fn test_commas_inside_parentheses_do_not_split() {
        let seg = segment("Centerpiece (AS 2xlead 2h, TA redpoint), Social O (TA,  AS to the top)");
        assert_eq!(names(&seg), vec!["Centerpiece", "Social O"]);
        assert_eq!(seg.fragments[0].remainder, "AS 2xlead 2h, TA redpoint");
        assert_eq!(seg.fragments[1].remainder, "TA,  AS to the top");
    }

    #[test]
    fn test_mixed_separators() {
        let seg = segment("Armed, Obi (AS); Jedi Mind Tricks * 2 (TA working moves).");
        assert_eq!(names(&seg), vec!["Armed", "Obi", "Jedi Mind Tricks * 2"]);
        assert_eq!(seg.fragments[2].remainder, "TA working moves");
        assert_eq!(seg.fragments[2].separator, ".");
    }

    #[test]
    fn test_offsets_point_into_original() {
        let comment = "Armed,  Obi (AS)";
        let seg = segment(comment);
        assert_eq!(seg.fragments[0].start, 0);
        assert_eq!(seg.fragments[1].start, 8);
        assert_eq!(&comment[seg.fragments[1].start..seg.fragments[1].end], "Obi (AS)");
        assert_eq!(seg.fragments[0].separator, ",  ");
    }

    #[test]
    fn test_decimal_grade_is_not_a_separator() {
        let seg = segment("Bolt line 5.8, Centerpiece");
        assert_eq!(names(&seg), vec!["Bolt line 5.8", "Centerpiece"]);
    }

    #[test]
    fn test_separator_runs_and_blank_segments() {
        let seg = segment(",, Armed,, , Obi...");
        assert_eq!(names(&seg), vec!["Armed", "Obi"]);
        assert_eq!(seg.lead, ",, ");
        assert_eq!(seg.fragments[0].separator, ",, , ");
        assert_eq!(seg.fragments[1].separator, "...");
    }

    #[test]
    fn test_unterminated_parenthesis_runs_to_end() {
        let comment = "Armed (AS, TA, Obi";
        let seg = segment(comment);
        assert_eq!(seg.fragments.len(), 1);
        assert_eq!(seg.fragments[0].name_approx, "Armed");
        assert_eq!(seg.fragments[0].remainder, "AS, TA, Obi");
        assert_eq!(seg.reconstruct(), comment);
    }

    #[test]
    fn test_stray_closing_parenthesis() {
        let comment = "Armed) , Obi";
        let seg = segment(comment);
        assert_eq!(names(&seg), vec!["Armed)", "Obi"]);
        assert_eq!(seg.reconstruct(), comment);
    }

    #[test]
    fn test_nested_parentheses() {
        let seg = segment("Weevil (AS (finally) clean), Armed");
        assert_eq!(seg.fragments[0].remainder, "AS (finally) clean");
        assert_eq!(names(&seg), vec!["Weevil", "Armed"]);
    }

    #[test]
    fn test_suffix_after_parenthesis() {
        let seg = segment("Obi (AS) twice");
        assert_eq!(seg.fragments[0].name_approx, "Obi");
        assert_eq!(seg.fragments[0].remainder, "AS");
        assert_eq!(seg.fragments[0].suffix, "twice");
    }

    #[test]
    fn test_parenthesis_only_fragment() {
        let seg = segment("(rained out)");
        assert_eq!(seg.fragments.len(), 1);
        assert_eq!(seg.fragments[0].name_approx, "");
        assert_eq!(seg.fragments[0].remainder, "rained out");
    }

    #[test]
    fn test_empty_and_blank_comments() {
        let seg = segment("");
        assert!(seg.fragments.is_empty());
        assert_eq!(seg.reconstruct(), "");

        let seg = segment("  ,;  ");
        assert!(seg.fragments.is_empty());
        assert_eq!(seg.lead, "  ,;  ");
    }

    #[test]
    fn test_reconstruction_is_exact() {
        let comments = [
            "Holderness, Idiot, Misdemeanor, White Rhino (TA, AS found new beta), Espresso (TA)",
            "  Armed,, Obi *2 (AS)  ",
            "2 runs on Kundalini (so-so. linked to the top on lead from just after crux)",
            "Café (TA) ; Über (AS)!",
            "((((",
            "))), ,",
        ];
        for comment in comments {
            assert_eq!(segment(comment).reconstruct(), comment, "comment: {comment:?}");
        }
    }
}
