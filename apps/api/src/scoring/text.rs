//! Small text helpers shared by the practical and context scorers.

/// Lowercase alphanumeric words. Dots stay inside words so "M.Tech" survives.
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '.'))
        .map(|w| w.trim_matches('.'))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn contains_any_word(text: &str, vocabulary: &[String]) -> bool {
    let tokens = words(text);
    vocabulary
        .iter()
        .any(|v| tokens.iter().any(|t| t == &v.to_lowercase()))
}

/// Case-insensitive whole-word phrase check: "art" matches "Fine Art" but not
/// "Earth", "data scientist" matches "a Data Scientist role". Blank phrases never
/// match.
pub fn mentions(text: &str, phrase: &str) -> bool {
    contains_sequence(&words(text), &words(phrase))
}

fn contains_sequence<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}

/// Tokens for the yes/no and rank readers. Apostrophes stay so "don't" is one word.
fn answer_tokens(answer: &str) -> Vec<String> {
    answer
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn has_phrase(tokens: &[String], phrases: &[&[&str]]) -> bool {
    phrases.iter().any(|phrase| {
        let phrase: Vec<String> = phrase.iter().map(|w| w.to_string()).collect();
        contains_sequence(tokens, &phrase)
    })
}

/// Reading of a yes/no style free-text answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Positive,
    Negative,
    Neutral,
}

const NEGATIVE_MARKERS: &[&str] = &["no", "not", "never", "don't", "dont", "nope", "unwilling"];
const POSITIVE_MARKERS: &[&str] = &[
    "yes",
    "yeah",
    "sure",
    "definitely",
    "willing",
    "interested",
    "maybe",
    "open",
];
/// Words an answer may open with to read as agreement whatever follows.
const AFFIRMATIVE_OPENERS: &[&str] = &["yes", "yeah", "yep", "sure", "definitely", "absolutely"];
/// Negated phrases that mean agreement.
const AGREEING_NEGATIONS: &[&[&str]] = &[
    &["no", "problem"],
    &["no", "issue"],
    &["no", "issues"],
    &["no", "worries"],
    &["not", "a", "problem"],
    &["not", "an", "issue"],
    &["don't", "mind"],
    &["dont", "mind"],
    &["why", "not"],
];

impl Stance {
    /// An answer opening with "yes" or using a phrase like "no problem" is
    /// positive. Otherwise negatives win over positives so "not interested"
    /// reads as negative.
    pub fn of(answer: &str) -> Self {
        let tokens = answer_tokens(answer);

        let opens_affirmative = tokens
            .first()
            .is_some_and(|t| AFFIRMATIVE_OPENERS.contains(&t.as_str()));
        if opens_affirmative || has_phrase(&tokens, AGREEING_NEGATIONS) {
            return Stance::Positive;
        }

        if tokens.iter().any(|t| NEGATIVE_MARKERS.contains(&t.as_str())) {
            Stance::Negative
        } else if tokens.iter().any(|t| POSITIVE_MARKERS.contains(&t.as_str())) {
            Stance::Positive
        } else {
            Stance::Neutral
        }
    }
}

/// Self-reported class rank band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBand {
    Top,
    Middle,
    Bottom,
    Unknown,
}

const BOTTOM_MARKERS: &[&str] = &["bottom", "below", "last", "lowest"];
const TOP_MARKERS: &[&str] = &["top", "first", "1st", "above", "topper"];
const MIDDLE_MARKERS: &[&str] = &["average", "middle", "mid"];
const RANK_NEGATIONS: &[&str] = &["not", "never", "no"];

impl RankBand {
    /// Word-based, bottom markers first. A negated top answer ("not in the
    /// top") gives no band.
    pub fn of(answer: &str) -> Self {
        let tokens = answer_tokens(answer);
        let has = |markers: &[&str]| tokens.iter().any(|t| markers.contains(&t.as_str()));

        if has(BOTTOM_MARKERS) {
            RankBand::Bottom
        } else if has(TOP_MARKERS) {
            if has(RANK_NEGATIONS) {
                RankBand::Unknown
            } else {
                RankBand::Top
            }
        } else if has(MIDDLE_MARKERS) {
            RankBand::Middle
        } else {
            RankBand::Unknown
        }
    }
}
