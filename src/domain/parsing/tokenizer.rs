//! Turning a fragment's parenthesised detail into climb events
//!
//! The detail is split into clauses on top-level `,` and `;`. Each clause
//! names zero or more climbers and may carry attempt vocabulary:
//!
//! - a multiplier such as `2xlead` or `x3` (repeated attempts),
//! - hang evidence: `hang`, `hangs`, `working`, `fell`, `2h`, `2 hangs`,
//! - clean evidence: `redpoint`, `clean`, `onsight`, `flash`, `sent`,
//! - neutral verbs such as `lead`, `follow`, `toprope`.
//!
//! Words that are none of these stay in the residual comment.

use crate::domain::climber::ClimberRegistry;
use crate::domain::entry::ClimbEvent;
use regex::Regex;
use std::sync::OnceLock;

/// Upper bound for a repetition count; larger numbers are left as text
const MAX_REPS: usize = 20;

const HANG_WORDS: &[&str] = &[
    "hang", "hangs", "hung", "hanging", "working", "worked", "fell", "fall", "falls", "takes",
];
const CLEAN_WORDS: &[&str] = &[
    "redpoint", "redpointed", "rp", "clean", "cleanly", "onsight", "onsighted", "flash",
    "flashed", "sent", "send",
];
const VERB_WORDS: &[&str] = &[
    "lead", "led", "leads", "follow", "followed", "tr", "toprope", "toproped", "second",
    "seconded",
];
/// Words that turn a preceding number into a hang count ("2 hangs")
const COUNT_NOUNS: &[&str] = &["hang", "hangs", "fall", "falls", "takes"];

/// Multiplier forms: `2xlead`, `2x`, `x2`
fn multiplier_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(?:(\d+)x[a-z]*|x(\d+))$").unwrap())
}

/// Compact hang count: `2h`
fn hang_count_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d+)h$").unwrap())
}

/// Result of tokenizing one fragment's detail
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventParse {
    pub events: Vec<ClimbEvent>,
    /// Text not consumed into structure, clauses joined by ", "
    pub comment: String,
    /// Tokens consumed into events, in order of appearance
    pub matched: Vec<String>,
    /// True when a clause was kept verbatim because attribution was unclear
    pub ambiguous: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Unspecified,
    Clean,
    Hung,
}

/// What one clause says, before attribution
#[derive(Debug, Default)]
struct Clause {
    text: String,
    climbers: Vec<String>,
    reps: Option<usize>,
    hang_count: Option<usize>,
    hang: bool,
    clean: bool,
    /// Any attempt vocabulary besides climber names
    has_vocab: bool,
    matched: Vec<String>,
    residual: Vec<String>,
}

impl Clause {
    fn analyze(text: &str, registry: &ClimberRegistry) -> Self {
        let mut clause = Clause {
            text: text.to_string(),
            ..Clause::default()
        };
        let words: Vec<&str> = text.split_whitespace().collect();

        let mut i = 0;
        while i < words.len() {
            let word = words[i];
            let core = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();

            if let Some(code) = registry.recognize(word) {
                if !clause.climbers.iter().any(|c| c == code) {
                    clause.climbers.push(code.to_string());
                }
                clause.matched.push(word.to_string());
            } else if let Some(reps) = parse_multiplier(&core) {
                clause.reps = Some(reps);
                clause.has_vocab = true;
                clause.matched.push(word.to_string());
            } else if let Some(count) = parse_hang_count(&core) {
                clause.add_hang_count(count);
                clause.matched.push(word.to_string());
            } else if let Some(count) = numeric_count(&core, words.get(i + 1)) {
                clause.add_hang_count(count);
                clause.matched.push(word.to_string());
                clause.matched.push(words[i + 1].to_string());
                i += 1;
            } else if HANG_WORDS.contains(&core.as_str()) {
                clause.hang = true;
                clause.has_vocab = true;
                clause.matched.push(word.to_string());
            } else if CLEAN_WORDS.contains(&core.as_str()) {
                clause.clean = true;
                clause.has_vocab = true;
                clause.matched.push(word.to_string());
            } else if VERB_WORDS.contains(&core.as_str()) {
                clause.has_vocab = true;
                clause.matched.push(word.to_string());
            } else {
                clause.residual.push(word.to_string());
            }
            i += 1;
        }

        clause
    }

    fn add_hang_count(&mut self, count: usize) {
        self.has_vocab = true;
        self.hang_count = Some(self.hang_count.unwrap_or(0) + count);
        if count == 0 {
            self.clean = true;
        }
    }

    /// A clause like "TA" that only names climbers
    fn is_climbers_only(&self) -> bool {
        !self.climbers.is_empty() && !self.has_vocab && self.residual.is_empty()
    }

    fn outcome(&self) -> Outcome {
        if self.hang || self.hang_count.is_some_and(|n| n > 0) {
            Outcome::Hung
        } else if self.clean {
            Outcome::Clean
        } else {
            Outcome::Unspecified
        }
    }
}

fn parse_multiplier(core: &str) -> Option<usize> {
    let caps = multiplier_regex().captures(core)?;
    let digits = caps.get(1).or_else(|| caps.get(2))?;
    let reps: usize = digits.as_str().parse().ok()?;
    (1..=MAX_REPS).contains(&reps).then_some(reps)
}

fn parse_hang_count(core: &str) -> Option<usize> {
    let caps = hang_count_regex().captures(core)?;
    caps[1].parse().ok().filter(|n| *n <= MAX_REPS)
}

/// "2 hangs": a bare number followed by a hang noun
fn numeric_count(core: &str, next: Option<&&str>) -> Option<usize> {
    if core.is_empty() || !core.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let next = next?
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if !COUNT_NOUNS.contains(&next.as_str()) {
        return None;
    }
    core.parse().ok().filter(|n| *n <= MAX_REPS)
}

/// Split on `,` and `;` outside of nested parentheses
fn split_clauses(remainder: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (pos, ch) in remainder.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' | ';' if depth == 0 => {
                clauses.push(&remainder[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    clauses.push(&remainder[start..]);

    clauses
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Tokenize a fragment's detail into climb events.
///
/// `roster` receives attribution when no climber is named. This never
/// fails: anything that is not understood is returned as comment text.
pub fn tokenize_events(remainder: &str, roster: &[String], registry: &ClimberRegistry) -> EventParse {
    let mut parse = EventParse::default();
    let mut comment_parts: Vec<String> = Vec::new();
    // Clauses like "TA" waiting to share the next clause's outcome
    let mut pending: Vec<Clause> = Vec::new();

    for text in split_clauses(remainder) {
        let clause = Clause::analyze(text, registry);
        if clause.is_climbers_only() {
            pending.push(clause);
            continue;
        }

        let mut group: Vec<String> = Vec::new();
        for p in &pending {
            for code in &p.climbers {
                if !group.contains(code) {
                    group.push(code.clone());
                }
            }
        }
        for code in &clause.climbers {
            if !group.contains(code) {
                group.push(code.clone());
            }
        }

        if group.is_empty() && !clause.has_vocab {
            // Pure comment, nobody to attribute it to
            comment_parts.push(clause.residual.join(" "));
            continue;
        }

        let named = group.len();
        let attributed: Vec<String> = if group.is_empty() {
            roster.to_vec()
        } else {
            group
        };

        let shared_count = clause.hang_count.is_some_and(|n| n > 0);
        if named > 1 && shared_count {
            // "TA, AS to the top with 2 hangs" or "TA AS 2h": who hung how
            // often is unclear
            parse.ambiguous = true;
            for code in &attributed {
                parse.events.push(ClimbEvent::new(code.clone(), true));
            }
            for p in pending.drain(..) {
                comment_parts.push(p.text);
            }
            comment_parts.push(clause.text);
            continue;
        }

        for p in pending.drain(..) {
            parse.matched.extend(p.matched);
        }
        parse.matched.extend(clause.matched.iter().cloned());

        let outcome = clause.outcome();
        let (reps, hang) = match clause.reps {
            Some(reps) => (reps, outcome != Outcome::Clean),
            None => (1, outcome == Outcome::Hung),
        };
        for code in &attributed {
            for _ in 0..reps {
                parse.events.push(ClimbEvent::new(code.clone(), hang));
            }
        }

        if !clause.residual.is_empty() {
            comment_parts.push(clause.residual.join(" "));
        }
    }

    // Trailing climber-only clauses: plain ascents
    for p in pending.drain(..) {
        for code in &p.climbers {
            parse.events.push(ClimbEvent::new(code.clone(), false));
        }
        parse.matched.extend(p.matched);
    }

    if parse.events.is_empty() && !parse.ambiguous {
        for code in roster {
            parse.events.push(ClimbEvent::new(code.clone(), false));
        }
    }

    parse.comment = comment_parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    tracing::trace!(
        remainder,
        events = parse.events.len(),
        ambiguous = parse.ambiguous,
        "tokenized detail"
    );

    parse
}
