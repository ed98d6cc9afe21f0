pub mod tokenizer;

use crate::dict::Dictionary;
use crate::{AnalysisResult, SummaryEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    British,
    American,
}

/// One token equated to one side of one dictionary pair.
struct MatchEvent {
    pair_index: usize,
    side: Side,
}

/// Analyze a body of text against the spelling dictionary.
///
/// Pure function of its two inputs: accepts any string, including the
/// empty string, and always returns a well-formed result. Each token is
/// matched against the pairs in loader order and contributes to at most
/// one pair and one count; the first matching pair wins when a token
/// happens to appear on more than one row.
pub fn analyze(text: &str, dictionary: &Dictionary) -> AnalysisResult {
    let tokens = tokenizer::tokenize(text);
    let pairs = dictionary.pairs();

    let mut british_count = 0usize;
    let mut american_count = 0usize;
    let mut events = Vec::new();

    for token in &tokens {
        for (pair_index, pair) in pairs.iter().enumerate() {
            if *token == pair.british {
                british_count += 1;
                events.push(MatchEvent {
                    pair_index,
                    side: Side::British,
                });
                break;
            } else if *token == pair.american {
                american_count += 1;
                events.push(MatchEvent {
                    pair_index,
                    side: Side::American,
                });
                break;
            }
        }
    }

    let total_found = british_count + american_count;

    let (british_percentage, american_percentage) = if total_found > 0 {
        (
            british_count as f64 / total_found as f64 * 100.0,
            american_count as f64 / total_found as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    AnalysisResult {
        british_count,
        american_count,
        total_found,
        british_percentage,
        american_percentage,
        word_summary: summarize(&events, dictionary),
    }
}

/// Group match events by pair, in first-occurrence order, then rank the
/// groups by total occurrences descending. The sort is stable, so pairs
/// with equal totals keep their first-occurrence relative order.
fn summarize(events: &[MatchEvent], dictionary: &Dictionary) -> Vec<SummaryEntry> {
    let pairs = dictionary.pairs();
    let mut summary: Vec<(usize, SummaryEntry)> = Vec::new();

    for event in events {
        let position = summary.iter().position(|(idx, _)| *idx == event.pair_index);
        let position = position.unwrap_or_else(|| {
            let pair = &pairs[event.pair_index];
            summary.push((
                event.pair_index,
                SummaryEntry {
                    british_spelling: pair.british.clone(),
                    american_spelling: pair.american.clone(),
                    british_count: 0,
                    american_count: 0,
                },
            ));
            summary.len() - 1
        });
        let entry = &mut summary[position].1;

        match event.side {
            Side::British => entry.british_count += 1,
            Side::American => entry.american_count += 1,
        }
    }

    let mut entries: Vec<SummaryEntry> = summary.into_iter().map(|(_, e)| e).collect();
    entries.sort_by(|a, b| b.total().cmp(&a.total()));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::SpellingPair;

    fn dict(pairs: &[(&str, &str)]) -> Dictionary {
        Dictionary::from_pairs(
            pairs
                .iter()
                .map(|(b, a)| SpellingPair {
                    british: b.to_string(),
                    american: a.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_counts_sum_to_total() {
        let d = dict(&[("colour", "color"), ("favourite", "favorite")]);
        let result = analyze("colour color favourite nothing", &d);
        assert_eq!(
            result.total_found,
            result.british_count + result.american_count
        );
        assert_eq!(result.total_found, 3);
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        let d = dict(&[("colour", "color")]);
        let result = analyze("", &d);
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn test_empty_dictionary_is_all_zero() {
        let result = analyze("colour color favourite", &Dictionary::default());
        assert_eq!(result.total_found, 0);
        assert_eq!(result.british_percentage, 0.0);
        assert_eq!(result.american_percentage, 0.0);
        assert!(result.word_summary.is_empty());
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let d = dict(&[("colour", "color")]);
        let result = analyze("colour colour color", &d);
        let sum = result.british_percentage + result.american_percentage;
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((result.british_percentage - 2.0 / 3.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let d = dict(&[("colour", "color")]);
        assert_eq!(analyze("COLOUR", &d), analyze("colour", &d));
    }

    #[test]
    fn test_idempotent() {
        let d = dict(&[("colour", "color"), ("grey", "gray")]);
        let text = "A grey colour; gray color.";
        assert_eq!(analyze(text, &d), analyze(text, &d));
    }

    #[test]
    fn test_first_dictionary_order_match_wins() {
        // Contrived duplicate: the same tokens appear on both rows with the
        // sides swapped. A token must resolve against the first row only.
        let d = dict(&[("colour", "color"), ("color", "colour")]);
        let result = analyze("colour", &d);
        assert_eq!(result.british_count, 1);
        assert_eq!(result.american_count, 0);
        assert_eq!(result.word_summary.len(), 1);
        assert_eq!(result.word_summary[0].british_spelling, "colour");
        assert_eq!(result.word_summary[0].american_spelling, "color");
    }

    #[test]
    fn test_token_matches_at_most_one_pair() {
        let d = dict(&[("grey", "gray"), ("grey", "graye")]);
        let result = analyze("grey grey", &d);
        assert_eq!(result.total_found, 2);
        assert_eq!(result.word_summary.len(), 1);
        assert_eq!(result.word_summary[0].american_spelling, "gray");
    }

    #[test]
    fn test_reference_scenario() {
        let d = dict(&[("colour", "color"), ("favourite", "favorite")]);
        let result = analyze("My favourite colour is the colour of color.", &d);

        assert_eq!(result.british_count, 3);
        assert_eq!(result.american_count, 1);
        assert_eq!(result.total_found, 4);
        assert!((result.british_percentage - 75.0).abs() < 1e-9);
        assert!((result.american_percentage - 25.0).abs() < 1e-9);

        assert_eq!(result.word_summary.len(), 2);
        let first = &result.word_summary[0];
        assert_eq!(first.british_spelling, "colour");
        assert_eq!(first.british_count, 2);
        assert_eq!(first.american_count, 1);
        let second = &result.word_summary[1];
        assert_eq!(second.british_spelling, "favourite");
        assert_eq!(second.british_count, 1);
        assert_eq!(second.american_count, 0);
    }

    #[test]
    fn test_ranking_is_stable_for_equal_totals() {
        let d = dict(&[("colour", "color"), ("grey", "gray"), ("tyre", "tire")]);
        // grey first in the text, all pairs tied at one match each.
        let result = analyze("grey colour tyre", &d);
        let order: Vec<_> = result
            .word_summary
            .iter()
            .map(|e| e.british_spelling.as_str())
            .collect();
        assert_eq!(order, vec!["grey", "colour", "tyre"]);
    }

    #[test]
    fn test_unmatched_tokens_are_discarded() {
        let d = dict(&[("colour", "color")]);
        let result = analyze("nothing here matches at all", &d);
        assert_eq!(result.total_found, 0);
    }
}
