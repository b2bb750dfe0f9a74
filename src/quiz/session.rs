use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::content::types::QuizQuestion;
use crate::quiz::ledger::AnswerLedger;
use crate::quiz::pool::TokenPool;
use crate::quiz::scorer::{self, QuestionResult};

/// Interaction phase of an attempt: building answers, or reviewing the
/// computed results.
#[derive(Clone, Debug)]
pub enum QuizMode {
    Answering,
    Results(Vec<QuestionResult>),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{unanswered} question(s) still unanswered")]
    Incomplete { unanswered: usize },
}

/// State machine for one quiz attempt.
///
/// Owns the question snapshot, the token pool for the question on screen,
/// the per-question answer ledger, and the review-expansion set. All
/// transitions run synchronously on the event loop thread; nothing here
/// survives leaving the quiz screen.
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    pool: TokenPool,
    ledger: AnswerLedger,
    mode: QuizMode,
    expanded_reviews: HashSet<usize>,
    rng: SmallRng,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self::with_rng(questions, SmallRng::from_entropy())
    }

    pub fn with_rng(questions: Vec<QuizQuestion>, rng: SmallRng) -> Self {
        let mut session = Self {
            questions,
            current_index: 0,
            pool: TokenPool::default(),
            ledger: AnswerLedger::default(),
            mode: QuizMode::Answering,
            expanded_reviews: HashSet::new(),
            rng,
        };
        session.load_question_state();
        session
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn available_tokens(&self) -> &[String] {
        self.pool.available()
    }

    pub fn selected_tokens(&self) -> &[String] {
        self.pool.selected()
    }

    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    pub fn mode(&self) -> &QuizMode {
        &self.mode
    }

    pub fn is_answering(&self) -> bool {
        matches!(self.mode, QuizMode::Answering)
    }

    pub fn results(&self) -> Option<&[QuestionResult]> {
        match &self.mode {
            QuizMode::Results(results) => Some(results),
            QuizMode::Answering => None,
        }
    }

    pub fn correct_count(&self) -> Option<usize> {
        self.results().map(scorer::correct_count)
    }

    pub fn answered(&self, index: usize) -> bool {
        self.ledger.contains(index)
    }

    pub fn unanswered_count(&self) -> usize {
        self.ledger.unanswered_indices(self.questions.len()).len()
    }

    /// Place the available token at `index` into the answer and record the
    /// new selection in the ledger.
    pub fn select_token(&mut self, index: usize) {
        if !self.is_answering() {
            return;
        }
        if self.pool.select(index) {
            self.save_answer();
        }
    }

    /// Return the selected token at `index` to the bank. An emptied
    /// selection clears the ledger entry entirely.
    pub fn remove_token(&mut self, index: usize) {
        if !self.is_answering() {
            return;
        }
        if self.pool.remove(index) {
            self.save_answer();
        }
    }

    /// Drop the current question's answer and reshuffle its full bank.
    pub fn reset_question(&mut self) {
        if !self.is_answering() {
            return;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return;
        };
        self.pool.reset(&question.tokens, &mut self.rng);
        self.ledger.clear(self.current_index);
    }

    /// Jump to any question. The target's saved answer (if any) is restored
    /// into the pool; otherwise the bank is freshly reshuffled. Out-of-range
    /// indices are a caller bug and do nothing.
    pub fn go_to(&mut self, index: usize) {
        if !self.is_answering() {
            return;
        }
        debug_assert!(
            index < self.questions.len(),
            "go_to index {index} out of range"
        );
        if index >= self.questions.len() {
            return;
        }
        self.current_index = index;
        self.load_question_state();
    }

    pub fn next(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.go_to(self.current_index + 1);
        }
    }

    pub fn prev(&mut self) {
        if self.current_index > 0 {
            self.go_to(self.current_index - 1);
        }
    }

    /// Whether the submit control is surfaced: last question, every
    /// question answered.
    pub fn can_submit(&self) -> bool {
        let count = self.questions.len();
        self.is_answering()
            && count > 0
            && self.current_index == count - 1
            && self.ledger.is_complete(count)
    }

    /// Score the attempt and enter results mode. Rejected without any state
    /// change while questions remain unanswered.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if !self.is_answering() {
            return Ok(());
        }
        let unanswered = self.ledger.unanswered_indices(self.questions.len()).len();
        if unanswered > 0 {
            return Err(SubmitError::Incomplete { unanswered });
        }
        let results = scorer::score(&self.ledger, &self.questions);
        self.expanded_reviews.clear();
        self.mode = QuizMode::Results(results);
        Ok(())
    }

    /// Throw away the finished attempt: empty ledger, collapsed reviews,
    /// back to question 0 with a fresh shuffle.
    pub fn restart(&mut self) {
        if self.is_answering() {
            return;
        }
        self.ledger.clear_all();
        self.expanded_reviews.clear();
        self.current_index = 0;
        self.mode = QuizMode::Answering;
        self.load_question_state();
    }

    /// Flip one review card's expansion. Cards expand independently; any
    /// number may be open at once.
    pub fn toggle_review(&mut self, index: usize) {
        if self.is_answering() {
            return;
        }
        if !self.expanded_reviews.remove(&index) {
            self.expanded_reviews.insert(index);
        }
    }

    pub fn is_review_expanded(&self, index: usize) -> bool {
        self.expanded_reviews.contains(&index)
    }

    pub fn expanded_reviews(&self) -> &HashSet<usize> {
        &self.expanded_reviews
    }

    fn save_answer(&mut self) {
        if self.pool.selected().is_empty() {
            self.ledger.clear(self.current_index);
        } else {
            self.ledger
                .set(self.current_index, self.pool.selected().to_vec());
        }
    }

    fn load_question_state(&mut self) {
        let Some(question) = self.questions.get(self.current_index) else {
            return;
        };
        match self.ledger.get(self.current_index) {
            Some(saved) => self.pool.restore(&question.tokens, saved, &mut self.rng),
            None => self.pool.reset(&question.tokens, &mut self.rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(title: &str, answer: &[&str]) -> QuizQuestion {
        QuizQuestion {
            id: title.to_string(),
            category: "basic".to_string(),
            sequence: 0,
            title: title.to_string(),
            tokens: answer.iter().map(|t| t.to_string()).collect(),
            answer: answer.iter().map(|t| t.to_string()).collect(),
            schema_hint: None,
        }
    }

    fn session(questions: Vec<QuizQuestion>) -> QuizSession {
        QuizSession::with_rng(questions, SmallRng::seed_from_u64(42))
    }

    /// Place the bank tokens so the current answer spells `target`.
    fn place_answer(s: &mut QuizSession, target: &[&str]) {
        for want in target {
            let index = s
                .available_tokens()
                .iter()
                .position(|t| t == want)
                .expect("token present in bank");
            s.select_token(index);
        }
    }

    #[test]
    fn answers_persist_across_navigation() {
        let mut s = session(vec![
            question("q1", &["SELECT", "*", "FROM", "t"]),
            question("q2", &["SELECT", "name"]),
        ]);

        place_answer(&mut s, &["SELECT", "*"]);
        let placed = s.selected_tokens().to_vec();

        s.next();
        assert_eq!(s.current_index(), 1);
        assert!(s.selected_tokens().is_empty());

        s.prev();
        assert_eq!(s.selected_tokens(), placed.as_slice());
        // Remaining bank is the original minus the placed tokens.
        let mut rest = s.available_tokens().to_vec();
        rest.sort();
        assert_eq!(rest, vec!["FROM".to_string(), "t".to_string()]);
    }

    #[test]
    fn switching_questions_never_mutates_the_ledger() {
        let mut s = session(vec![question("q1", &["a", "b"]), question("q2", &["c"])]);
        place_answer(&mut s, &["a"]);

        s.next();
        s.prev();
        s.go_to(1);
        s.go_to(0);

        assert_eq!(s.ledger().get(0), Some(vec!["a".to_string()].as_slice()));
        assert_eq!(s.ledger().get(1), None);
    }

    #[test]
    fn removing_last_token_clears_the_entry() {
        let mut s = session(vec![question("q1", &["a", "b"])]);
        place_answer(&mut s, &["a"]);
        assert!(s.answered(0));

        s.remove_token(0);
        assert!(!s.answered(0));
        assert_eq!(s.ledger().get(0), None);
    }

    #[test]
    fn submit_control_waits_for_completeness_on_last_question() {
        let mut s = session(vec![
            question("q1", &["SELECT", "*", "FROM", "t"]),
            question("q2", &["SELECT", "name"]),
        ]);

        place_answer(&mut s, &["SELECT", "*", "FROM", "t"]);
        assert!(!s.can_submit(), "q2 unanswered");

        s.next();
        assert!(!s.can_submit(), "still unanswered");
        place_answer(&mut s, &["SELECT", "name"]);
        assert!(s.can_submit());
    }

    #[test]
    fn incomplete_submit_is_rejected_without_state_change() {
        let mut s = session(vec![question("q1", &["a"]), question("q2", &["b"])]);
        place_answer(&mut s, &["a"]);

        let err = s.submit().unwrap_err();
        assert_eq!(err, SubmitError::Incomplete { unanswered: 1 });
        assert!(s.is_answering());
        assert_eq!(s.ledger().get(0), Some(vec!["a".to_string()].as_slice()));
    }

    #[test]
    fn full_attempt_scores_and_reviews() {
        let mut s = session(vec![question("q1", &["a", "b"]), question("q2", &["c"])]);
        place_answer(&mut s, &["a", "b"]);
        s.next();
        place_answer(&mut s, &["c"]);

        s.submit().unwrap();
        assert_eq!(s.correct_count(), Some(2));

        let results = s.results().unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_correct));

        // Cards default to collapsed; toggling one leaves the others alone.
        assert!(!s.is_review_expanded(0));
        assert!(!s.is_review_expanded(1));
        s.toggle_review(0);
        assert!(s.is_review_expanded(0));
        assert!(!s.is_review_expanded(1));
        s.toggle_review(0);
        assert!(!s.is_review_expanded(0));
    }

    #[test]
    fn wrong_order_scores_incorrect() {
        let mut s = session(vec![question("q1", &["A", "B"])]);
        place_answer(&mut s, &["B", "A"]);
        s.submit().unwrap();
        assert_eq!(s.correct_count(), Some(0));
    }

    #[test]
    fn restart_resets_everything() {
        let mut s = session(vec![question("q1", &["a"]), question("q2", &["b"])]);
        place_answer(&mut s, &["a"]);
        s.next();
        place_answer(&mut s, &["b"]);
        s.submit().unwrap();
        s.toggle_review(1);

        s.restart();

        assert!(s.is_answering());
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.ledger().answered_count(), 0);
        assert!(!s.is_review_expanded(1));
        assert_eq!(s.available_tokens().len(), 1);
        assert!(s.selected_tokens().is_empty());
    }

    #[test]
    fn restart_is_a_no_op_while_answering() {
        let mut s = session(vec![question("q1", &["a"])]);
        place_answer(&mut s, &["a"]);
        s.restart();
        assert_eq!(s.ledger().answered_count(), 1);
    }

    #[test]
    fn navigation_clamps_at_the_ends() {
        let mut s = session(vec![question("q1", &["a"]), question("q2", &["b"])]);
        s.prev();
        assert_eq!(s.current_index(), 0);
        s.next();
        s.next();
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn navigation_is_locked_in_results_mode() {
        let mut s = session(vec![question("q1", &["a"])]);
        place_answer(&mut s, &["a"]);
        s.submit().unwrap();

        s.go_to(0);
        s.select_token(0);
        s.reset_question();
        assert!(s.results().is_some());
        assert_eq!(s.ledger().answered_count(), 1);
    }
}
