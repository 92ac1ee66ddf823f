//! Text analytics for generated stories
//!
//! Lexical counts only: words are whitespace-delimited tokens and sentences
//! are tallies of terminal punctuation, so decimals, abbreviations and
//! ellipses inflate `sentence_count`. `strict_sentence_count` gives a closer
//! estimate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    ActionLevel, Pacing, ReadingDifficulty, StoryAnalytics, StyleProfile,
};

/// Reading speed used for time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Default number of keywords in a story report
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

/// Movement verbs, padded with spaces so they only match whole words
const ACTION_PHRASES: [&str; 3] = [" ran ", " walked ", " moved "];

const STOP_WORDS: [&str; 17] = [
    "that", "with", "have", "this", "will", "they", "from", "been", "said", "each", "which",
    "their", "time", "would", "there", "could", "other",
];

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count of `.`, `!` and `?` characters
pub fn sentence_count(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count()
}

/// Blank-line separators plus one
pub fn paragraph_count(text: &str) -> usize {
    text.matches("\n\n").count() + 1
}

/// Pairs of double quotes; an unpaired final quote is not counted
pub fn dialogue_exchange_count(text: &str) -> usize {
    text.matches('"').count() / 2
}

/// Whole minutes at `WORDS_PER_MINUTE`, never less than one
pub fn estimated_read_minutes(words: usize) -> usize {
    (words / WORDS_PER_MINUTE).max(1)
}

pub fn analyze(story: &str) -> StoryAnalytics {
    let words = word_count(story);
    let sentences = sentence_count(story);

    StoryAnalytics {
        word_count: words,
        sentence_count: sentences,
        paragraph_count: paragraph_count(story),
        avg_sentence_length: words as f64 / sentences.max(1) as f64,
        dialogue_exchange_count: dialogue_exchange_count(story),
        estimated_read_minutes: estimated_read_minutes(words),
    }
}

/// Case-insensitive count of the movement verbs
pub fn action_indicator_count(story: &str) -> usize {
    let lowered = story.to_lowercase();
    ACTION_PHRASES
        .iter()
        .map(|phrase| lowered.matches(phrase).count())
        .sum()
}

pub fn classify_style(story: &str) -> StyleProfile {
    let action_level = match action_indicator_count(story) {
        count if count > 5 => ActionLevel::High,
        count if count > 2 => ActionLevel::Medium,
        _ => ActionLevel::Low,
    };

    // Unguarded ratio: text without terminal punctuation has no measurable pace
    let words = word_count(story);
    let sentences = sentence_count(story);
    let pacing = if sentences > 0 && (words as f64 / sentences as f64) < 15.0 {
        Pacing::Fast
    } else {
        Pacing::Moderate
    };

    StyleProfile {
        dialogue_exchanges: dialogue_exchange_count(story),
        action_level,
        pacing,
    }
}

/// Sentence count that tolerates decimals and ellipses
///
/// A run of terminal punctuation counts once, a `.` between two digits is
/// not a terminator, and a terminator only ends a sentence when followed by
/// whitespace, a closing quote or bracket, or the end of the text.
/// Abbreviations are still counted.
pub fn strict_sentence_count(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let is_terminal = |c: char| matches!(c, '.' | '!' | '?');
    let is_closer = |c: char| matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}');

    let mut count = 0;
    let mut i = 0;
    while i < chars.len() {
        if !is_terminal(chars[i]) {
            i += 1;
            continue;
        }

        let between_digits = chars[i] == '.'
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|c| c.is_ascii_digit());
        if between_digits {
            i += 1;
            continue;
        }

        while i < chars.len() && is_terminal(chars[i]) {
            i += 1;
        }
        while i < chars.len() && is_closer(chars[i]) {
            i += 1;
        }
        if chars.get(i).map_or(true, |c| c.is_whitespace()) {
            count += 1;
        }
    }
    count
}

pub fn reading_difficulty(text: &str) -> ReadingDifficulty {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return ReadingDifficulty::Easy;
    }

    let letters: usize = words.iter().map(|word| word.chars().count()).sum();
    let avg_word_length = letters as f64 / words.len() as f64;
    let avg_sentence_length = words.len() as f64 / sentence_count(text).max(1) as f64;

    if avg_word_length > 5.0 && avg_sentence_length > 20.0 {
        ReadingDifficulty::Advanced
    } else if avg_word_length > 4.0 && avg_sentence_length > 15.0 {
        ReadingDifficulty::Intermediate
    } else {
        ReadingDifficulty::Easy
    }
}

/// Most frequent words of four or more ASCII letters, minus common filler
///
/// Ties keep the order of first appearance.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let words = lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| word.len() >= 4 && word.chars().all(|c| c.is_ascii_alphabetic()))
        .filter(|word| !STOP_WORDS.contains(word));

    for word in words {
        match index.get(word) {
            Some(&position) => order[position].1 += 1,
            None => {
                index.insert(word, order.len());
                order.push((word, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Everything the analytics endpoint reports for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryReport {
    pub analytics: StoryAnalytics,
    pub style: StyleProfile,
    pub strict_sentence_count: usize,
    pub difficulty: ReadingDifficulty,
    pub keywords: Vec<String>,
}

pub fn report(text: &str, keyword_limit: usize) -> StoryReport {
    StoryReport {
        analytics: analyze(text),
        style: classify_style(text),
        strict_sentence_count: strict_sentence_count(text),
        difficulty: reading_difficulty(text),
        keywords: extract_keywords(text, keyword_limit),
    }
}
