//! Classifier Tests
//!
//! Covers lexicon scoring, word-boundary matching, tie-breaking,
//! and zero-score fallback behavior.

use crate::triage::{
    category_lexicon, priority_lexicon, Category, Classification, Lexicon, Priority,
    TicketClassifier,
};

#[cfg(test)]
mod lexicon_scoring_tests {
    use super::*;

    #[test]
    fn test_labels_always_come_from_the_lexicon() {
        let classifier = TicketClassifier::new();

        let inputs = [
            ("Crash", "It keeps happening"),
            ("Hello", "General question about billing"),
            ("Idea", "Could you add dark mode"),
            ("???", "!!!"),
        ];

        for (title, description) in inputs {
            let result = classifier.classify(title, description);
            assert!(
                category_lexicon().labels().contains(&result.category),
                "unexpected category for {:?}",
                title
            );
            assert!(
                priority_lexicon().labels().contains(&result.priority),
                "unexpected priority for {:?}",
                title
            );
        }
    }

    #[test]
    fn test_crash_in_description_yields_bug() {
        let classifier = TicketClassifier::new();

        let result = classifier.classify("Daily report", "The program will crash");
        assert_eq!(result.category, Category::Bug);
    }

    #[test]
    fn test_neutral_description_yields_query() {
        let classifier = TicketClassifier::new();

        let result = classifier.classify(
            "Observation",
            "The colors look slightly different on the profile page",
        );
        assert_eq!(result.category, Category::Query);
    }

    #[test]
    fn test_word_boundaries_exclude_partial_words() {
        let classifier = TicketClassifier::new();

        // "debugging" and "bugged" must not count toward "bug"
        let (classification, scores) =
            classifier.classify_scored("Strange", "We kept debugging the bugged screen");
        assert_eq!(scores.category.bug, 0);
        assert_eq!(classification.category, Category::Query);
    }

    #[test]
    fn test_repeated_keywords_accumulate() {
        let classifier = TicketClassifier::new();

        let (_, scores) = classifier.classify_scored("Report", "error after error after error");
        assert_eq!(scores.category.bug, 3);
    }

    #[test]
    fn test_multi_word_phrases_score_once_per_occurrence() {
        let classifier = TicketClassifier::new();

        let (classification, scores) =
            classifier.classify_scored("Sync", "The sync is not working and we fear data loss");
        assert_eq!(scores.category.bug, 1);
        assert_eq!(scores.priority.high, 1);
        assert_eq!(classification.category, Category::Bug);
        assert_eq!(classification.priority, Priority::High);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = TicketClassifier::new();

        let result = classifier.classify("SYSTEM", "URGENT CRASH IN PRODUCTION");
        assert_eq!(result.category, Category::Bug);
        assert_eq!(result.priority, Priority::High);
    }
}

#[cfg(test)]
mod label_selection_tests {
    use super::*;

    #[test]
    fn test_category_tie_breaks_to_first_declared() {
        let classifier = TicketClassifier::new();

        // One feature hit ("request") and one bug hit ("error"): bug is declared first
        let result = classifier.classify("Ticket", "We request a fix for the error");
        assert_eq!(result.category, Category::Bug);
    }

    #[test]
    fn test_priority_tie_breaks_to_first_declared() {
        let classifier = TicketClassifier::new();

        // One low hit ("minor") and one high hit ("urgent"): high is declared first
        let result = classifier.classify("Ticket", "Seems minor but the client says urgent");
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn test_higher_score_beats_declaration_order() {
        let classifier = TicketClassifier::new();

        // Two feature hits ("add", "new") against one bug hit ("error")
        let result =
            classifier.classify("Ticket", "Please add the new export, the current error is small");
        assert_eq!(result.category, Category::Feature);
    }

    #[test]
    fn test_all_zero_scores_fall_back() {
        let classifier = TicketClassifier::new();

        let result = classifier.classify("Greetings", "Have a wonderful weekend everyone");
        assert_eq!(
            result,
            Classification {
                category: Category::Query,
                priority: Priority::Medium,
            }
        );
    }
}

#[cfg(test)]
mod custom_lexicon_tests {
    use super::*;

    #[test]
    fn test_custom_lexicons_drive_classification() {
        let categories = Lexicon::new(
            &[
                (Category::Feature, &["wish"][..]),
                (Category::Bug, &["broke"][..]),
            ],
            Category::Feature,
        );
        let priorities = Lexicon::new(&[(Priority::Low, &["someday"][..])], Priority::Low);
        let classifier = TicketClassifier::with_lexicons(categories, priorities);

        let result = classifier.classify("Wish list", "I wish the app had folders someday");
        assert_eq!(result.category, Category::Feature);
        assert_eq!(result.priority, Priority::Low);

        assert_eq!(
            classifier.category_labels(),
            vec![Category::Feature, Category::Bug]
        );
        assert_eq!(classifier.priority_labels(), vec![Priority::Low]);
    }
}
