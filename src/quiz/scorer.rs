use crate::content::types::QuizQuestion;
use crate::quiz::ledger::AnswerLedger;

/// Outcome for a single question, computed at submission time and dropped
/// on restart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionResult {
    pub question_index: usize,
    pub is_correct: bool,
    pub user_answer: Vec<String>,
    pub correct_answer: Vec<String>,
    pub title: String,
}

/// Score every question against its canonical answer: exact, order- and
/// case-sensitive token sequence match, no trimming. An absent ledger entry
/// scores as an empty answer. No partial credit.
pub fn score(ledger: &AnswerLedger, questions: &[QuizQuestion]) -> Vec<QuestionResult> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let user_answer = ledger.get(index).unwrap_or(&[]).to_vec();
            let is_correct = user_answer == question.answer;
            QuestionResult {
                question_index: index,
                is_correct,
                user_answer,
                correct_answer: question.answer.clone(),
                title: question.title.clone(),
            }
        })
        .collect()
}

pub fn correct_count(results: &[QuestionResult]) -> usize {
    results.iter().filter(|r| r.is_correct).count()
}

/// Feedback line shown on the result screen.
pub fn score_message(correct: usize, total: usize) -> &'static str {
    if total > 0 && correct == total {
        "Perfect! Excellent work!"
    } else if correct * 2 >= total {
        "Good job! Keep practicing!"
    } else {
        "keep learning you can do better"
    }
}
