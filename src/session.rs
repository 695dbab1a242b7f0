use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::quiz::Question;

/// Per-question outcome rendered next to each question after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStatus {
    Unanswered,
    Correct,
    Incorrect,
    NoAnswer,
}

/// In-memory state machine for one quiz attempt: the active question set
/// in display order, the user's selection per question, and the statuses
/// and score produced by the last submit. All per-question state is keyed
/// by `Question::id`.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    display_options: HashMap<usize, Vec<String>>,
    selections: HashMap<usize, String>,
    statuses: HashMap<usize, AnswerStatus>,
    score: usize,
}

impl QuizSession {
    /// Takes ownership of the parsed questions, shuffles their order and
    /// each question's option order, and starts with a clean slate.
    pub fn new(questions: Vec<Question>) -> Self {
        let mut session = Self {
            questions,
            display_options: HashMap::new(),
            selections: HashMap::new(),
            statuses: HashMap::new(),
            score: 0,
        };
        session.reset();
        session
    }

    /// Questions in current display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// The question's options in the shuffled order the UI should render.
    pub fn display_options(&self, id: usize) -> &[String] {
        self.display_options
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn selection(&self, id: usize) -> Option<&String> {
        self.selections.get(&id)
    }

    pub fn status(&self, id: usize) -> AnswerStatus {
        self.statuses
            .get(&id)
            .copied()
            .unwrap_or(AnswerStatus::Unanswered)
    }

    /// Stores the user's chosen option for a question, overwriting any
    /// prior choice. The UI only offers options from the question itself,
    /// so no further validation happens here.
    pub fn record_selection(&mut self, id: usize, option: String) {
        self.selections.insert(id, option);
    }

    /// Scores every question against the current selections. A question
    /// with no selection scores as `NoAnswer`; comparison is exact,
    /// case-sensitive string equality. Returns `(score, total)`.
    pub fn submit(&mut self) -> (usize, usize) {
        let mut score = 0;
        for question in &self.questions {
            let status = match self.selections.get(&question.id) {
                None => AnswerStatus::NoAnswer,
                Some(selected) if *selected == question.correct_answer => {
                    score += 1;
                    AnswerStatus::Correct
                }
                Some(_) => AnswerStatus::Incorrect,
            };
            self.statuses.insert(question.id, status);
        }
        self.score = score;
        log::info!("Submitted: {} out of {}", score, self.questions.len());
        (score, self.questions.len())
    }

    /// Reshuffles question and option order and clears all selections,
    /// statuses, and the score. Question content is untouched.
    pub fn reset(&mut self) {
        let mut rng = thread_rng();
        self.questions.shuffle(&mut rng);

        self.display_options.clear();
        for question in &self.questions {
            let mut options = question.options.clone();
            options.shuffle(&mut rng);
            self.display_options.insert(question.id, options);
        }

        self.selections.clear();
        self.statuses.clear();
        for question in &self.questions {
            self.statuses.insert(question.id, AnswerStatus::Unanswered);
        }
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: usize, text: &str, correct: &str, wrong: [&str; 3]) -> Question {
        Question {
            id,
            text: text.to_string(),
            options: vec![
                correct.to_string(),
                wrong[0].to_string(),
                wrong[1].to_string(),
                wrong[2].to_string(),
            ],
            correct_answer: correct.to_string(),
        }
    }

    fn sample_questions() -> Vec<Question> {
        vec![
            question(0, "2+2=?", "4", ["3", "5", "22"]),
            question(1, "Capital of France?", "Paris", ["London", "Rome", "Berlin"]),
            question(2, "Largest planet?", "Jupiter", ["Mars", "Venus", "Saturn"]),
        ]
    }

    fn sorted_ids(session: &QuizSession) -> Vec<usize> {
        let mut ids: Vec<_> = session.questions().iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn load_and_reset_preserve_question_set() {
        let mut session = QuizSession::new(sample_questions());
        assert_eq!(sorted_ids(&session), vec![0, 1, 2]);
        session.reset();
        assert_eq!(sorted_ids(&session), vec![0, 1, 2]);
        assert_eq!(session.total(), 3);
    }

    #[test]
    fn display_options_are_a_permutation() {
        let session = QuizSession::new(sample_questions());
        for q in session.questions() {
            let mut shown: Vec<_> = session.display_options(q.id).to_vec();
            let mut stored = q.options.clone();
            shown.sort();
            stored.sort();
            assert_eq!(shown, stored);
        }
    }

    #[test]
    fn submit_scores_exact_matches_only() {
        let mut session = QuizSession::new(sample_questions());
        session.record_selection(0, "4".to_string());
        session.record_selection(1, "London".to_string());
        // Question 2 left unanswered.

        let (score, total) = session.submit();
        assert_eq!(score, 1);
        assert_eq!(total, 3);
        assert_eq!(session.status(0), AnswerStatus::Correct);
        assert_eq!(session.status(1), AnswerStatus::Incorrect);
        assert_eq!(session.status(2), AnswerStatus::NoAnswer);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn scoring_is_case_sensitive() {
        let mut session = QuizSession::new(sample_questions());
        session.record_selection(1, "paris".to_string());
        let (score, _) = session.submit();
        assert_eq!(score, 0);
        assert_eq!(session.status(1), AnswerStatus::Incorrect);
    }

    #[test]
    fn selection_can_be_overwritten() {
        let mut session = QuizSession::new(sample_questions());
        session.record_selection(0, "3".to_string());
        session.record_selection(0, "4".to_string());
        let (score, _) = session.submit();
        assert_eq!(score, 1);
    }

    #[test]
    fn reset_then_submit_yields_all_no_answer() {
        let mut session = QuizSession::new(sample_questions());
        session.record_selection(0, "4".to_string());
        session.submit();

        session.reset();
        for q in session.questions() {
            assert_eq!(session.status(q.id), AnswerStatus::Unanswered);
            assert!(session.selection(q.id).is_none());
        }

        let (score, total) = session.submit();
        assert_eq!(score, 0);
        assert_eq!(total, 3);
        for q in session.questions() {
            assert_eq!(session.status(q.id), AnswerStatus::NoAnswer);
        }
    }

    #[test]
    fn empty_session_submits_to_zero() {
        let mut session = QuizSession::new(Vec::new());
        assert!(session.is_empty());
        assert_eq!(session.submit(), (0, 0));
    }
}
