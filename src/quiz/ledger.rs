use std::collections::HashMap;

/// Per-question record of placed tokens for the active attempt.
///
/// An entry is present iff the user has placed at least one token for that
/// question. Entries survive navigation between questions; only the actions
/// on the active question mutate them.
#[derive(Clone, Debug, Default)]
pub struct AnswerLedger {
    answers: HashMap<usize, Vec<String>>,
}

impl AnswerLedger {
    pub fn get(&self, index: usize) -> Option<&[String]> {
        self.answers.get(&index).map(Vec::as_slice)
    }

    /// Record the placed tokens for a question, replacing any prior entry.
    /// An empty answer is never stored; callers clear instead.
    pub fn set(&mut self, index: usize, tokens: Vec<String>) {
        debug_assert!(!tokens.is_empty(), "empty answers are cleared, not set");
        if tokens.is_empty() {
            return;
        }
        self.answers.insert(index, tokens);
    }

    pub fn clear(&mut self, index: usize) {
        self.answers.remove(&index);
    }

    pub fn clear_all(&mut self) {
        self.answers.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.answers.contains_key(&index)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// True when every question in `0..question_count` has an entry.
    pub fn is_complete(&self, question_count: usize) -> bool {
        (0..question_count).all(|i| self.answers.contains_key(&i))
    }

    /// Questions with no entry yet, ascending.
    pub fn unanswered_indices(&self, question_count: usize) -> Vec<usize> {
        (0..question_count)
            .filter(|i| !self.answers.contains_key(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn set_overwrites_and_clear_removes() {
        let mut ledger = AnswerLedger::default();
        ledger.set(0, answer(&["SELECT", "*"]));
        ledger.set(0, answer(&["SELECT", "name"]));
        assert_eq!(ledger.get(0), Some(answer(&["SELECT", "name"]).as_slice()));

        ledger.clear(0);
        assert_eq!(ledger.get(0), None);
        assert!(!ledger.contains(0));
    }

    #[test]
    fn complete_iff_no_unanswered_indices() {
        let mut ledger = AnswerLedger::default();
        ledger.set(0, answer(&["a"]));
        ledger.set(2, answer(&["b"]));

        assert!(!ledger.is_complete(3));
        assert_eq!(ledger.unanswered_indices(3), vec![1]);

        ledger.set(1, answer(&["c"]));
        assert!(ledger.is_complete(3));
        assert!(ledger.unanswered_indices(3).is_empty());
    }

    #[test]
    fn empty_quiz_set_is_vacuously_complete() {
        let ledger = AnswerLedger::default();
        assert!(ledger.is_complete(0));
        assert!(ledger.unanswered_indices(0).is_empty());
    }

    #[test]
    fn unanswered_indices_are_ascending() {
        let mut ledger = AnswerLedger::default();
        ledger.set(3, answer(&["x"]));
        assert_eq!(ledger.unanswered_indices(5), vec![0, 1, 2, 4]);
    }

    #[test]
    fn clear_all_empties_the_ledger() {
        let mut ledger = AnswerLedger::default();
        ledger.set(0, answer(&["a"]));
        ledger.set(1, answer(&["b"]));
        ledger.clear_all();
        assert_eq!(ledger.answered_count(), 0);
        assert!(!ledger.is_complete(2));
    }
}
