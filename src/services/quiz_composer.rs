use std::collections::{HashMap, HashSet};

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::{
        domain::{Passage, Question, Quiz},
        dto::request::CreateQuizRequest,
    },
};

const OPTIONS_PER_QUESTION: usize = 4;

/// Validates and normalizes a teacher-submitted authoring payload into a
/// canonical quiz document. Pure; the caller performs the single atomic write.
pub struct QuizComposer;

impl QuizComposer {
    pub fn compose(request: CreateQuizRequest, owner: &Claims) -> AppResult<Quiz> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(AppError::ValidationError("Quiz title is required".into()));
        }

        if request.questions.is_empty() {
            return Err(AppError::ValidationError(
                "Quiz must contain at least one question".into(),
            ));
        }

        let passages = Self::validate_passages(&request)?;
        let questions = Self::validate_questions(&request, &passages)?;
        Self::validate_passage_grouping(&questions, &passages)?;

        Ok(Quiz::new(
            title,
            owner.subject,
            &owner.sub,
            questions,
            passages,
            request.time_limit,
        ))
    }

    fn validate_passages(request: &CreateQuizRequest) -> AppResult<Vec<Passage>> {
        let mut seen = HashSet::new();
        let mut passages = Vec::with_capacity(request.passages.len());

        for input in &request.passages {
            let id = input.id.trim();
            if id.is_empty() {
                return Err(AppError::ValidationError(
                    "Passage identifier is required".into(),
                ));
            }
            if !seen.insert(id.to_string()) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate passage identifier '{}'",
                    id
                )));
            }
            if input.text.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Passage '{}' has no text",
                    id
                )));
            }
            if input.question_count == 0 {
                return Err(AppError::ValidationError(format!(
                    "Passage '{}' must declare at least one question",
                    id
                )));
            }

            passages.push(Passage {
                id: id.to_string(),
                text: input.text.clone(),
                question_count: input.question_count,
            });
        }

        Ok(passages)
    }

    fn validate_questions(
        request: &CreateQuizRequest,
        passages: &[Passage],
    ) -> AppResult<Vec<Question>> {
        let known_passages: HashSet<&str> = passages.iter().map(|p| p.id.as_str()).collect();
        let mut questions = Vec::with_capacity(request.questions.len());

        for (index, input) in request.questions.iter().enumerate() {
            let position = index + 1;

            if input.question.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Question {} has no text",
                    position
                )));
            }

            if input.options.len() != OPTIONS_PER_QUESTION {
                return Err(AppError::ValidationError(format!(
                    "Question {} must have exactly {} options",
                    position, OPTIONS_PER_QUESTION
                )));
            }
            if input.options.iter().any(|o| o.trim().is_empty()) {
                return Err(AppError::ValidationError(format!(
                    "Question {} has an empty option",
                    position
                )));
            }

            if input.correct_answer < 0 || input.correct_answer >= OPTIONS_PER_QUESTION as i32 {
                return Err(AppError::ValidationError(format!(
                    "Question {} has a correct answer index out of range",
                    position
                )));
            }

            let passage_id = match &input.passage_id {
                Some(id) if !id.trim().is_empty() => {
                    let id = id.trim();
                    if !known_passages.contains(id) {
                        return Err(AppError::ValidationError(format!(
                            "Question {} references unknown passage '{}'",
                            position, id
                        )));
                    }
                    Some(id.to_string())
                }
                _ => None,
            };

            questions.push(Question {
                question: input.question.clone(),
                options: input.options.clone(),
                correct_answer: input.correct_answer as u8,
                passage_id,
            });
        }

        Ok(questions)
    }

    /// Each passage must be referenced by a contiguous block of exactly its
    /// declared number of questions. Checking contiguity explicitly replaces
    /// the order-dependent sequential-consumption protocol.
    fn validate_passage_grouping(questions: &[Question], passages: &[Passage]) -> AppResult<()> {
        let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
        for (index, question) in questions.iter().enumerate() {
            if let Some(id) = &question.passage_id {
                positions.entry(id.as_str()).or_default().push(index);
            }
        }

        for passage in passages {
            let refs = positions.remove(passage.id.as_str()).unwrap_or_default();

            if refs.len() as u32 != passage.question_count {
                return Err(AppError::ValidationError(format!(
                    "Passage '{}' declares {} questions but {} reference it",
                    passage.id,
                    passage.question_count,
                    refs.len()
                )));
            }

            let contiguous = refs.windows(2).all(|pair| pair[1] == pair[0] + 1);
            if !contiguous {
                return Err(AppError::ValidationError(format!(
                    "Questions for passage '{}' must be consecutive",
                    passage.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::dto::request::{PassageInput, QuestionInput},
        test_utils::fixtures::{claims_for, test_teacher},
    };

    fn owner() -> Claims {
        claims_for(&test_teacher())
    }

    fn question(text: &str, correct: i32, passage_id: Option<&str>) -> QuestionInput {
        QuestionInput {
            question: text.to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: correct,
            passage_id: passage_id.map(str::to_string),
        }
    }

    fn passage(id: &str, count: u32) -> PassageInput {
        PassageInput {
            id: id.to_string(),
            text: format!("Reading text for {}", id),
            question_count: count,
        }
    }

    fn request(questions: Vec<QuestionInput>, passages: Vec<PassageInput>) -> CreateQuizRequest {
        CreateQuizRequest {
            title: "Comprehension check".to_string(),
            questions,
            passages,
            time_limit: 20,
        }
    }

    fn assert_rejected_with(request: CreateQuizRequest, needle: &str) {
        match QuizComposer::compose(request, &owner()) {
            Err(AppError::ValidationError(msg)) => {
                assert!(msg.contains(needle), "unexpected message: {}", msg)
            }
            other => panic!("expected validation error, got {:?}", other.map(|q| q.title)),
        }
    }

    #[test]
    fn composes_flat_and_passage_grouped_questions() {
        let owner = owner();
        let quiz = QuizComposer::compose(
            request(
                vec![
                    question("Standalone 1", 0, None),
                    question("Standalone 2", 1, None),
                    question("Grouped 1", 2, Some("p1")),
                    question("Grouped 2", 2, Some("p1")),
                ],
                vec![passage("p1", 2)],
            ),
            &owner,
        )
        .unwrap();

        assert_eq!(quiz.questions.len(), 4);
        assert_eq!(quiz.passages.len(), 1);
        assert_eq!(quiz.subject, owner.subject);
        assert_eq!(quiz.teacher_id, owner.sub);
        assert_eq!(quiz.time_limit, 20);
        assert!(!quiz.share_id.is_empty());
    }

    #[test]
    fn rejects_empty_quiz() {
        assert_rejected_with(request(vec![], vec![]), "at least one question");
    }

    #[test]
    fn rejects_blank_title() {
        let mut req = request(vec![question("Q", 0, None)], vec![]);
        req.title = "   ".to_string();
        assert_rejected_with(req, "title");
    }

    #[test]
    fn rejects_wrong_option_count() {
        let mut q = question("Q", 0, None);
        q.options.pop();
        assert_rejected_with(request(vec![q], vec![]), "exactly 4 options");
    }

    #[test]
    fn rejects_empty_option() {
        let mut q = question("Q", 0, None);
        q.options[2] = "  ".to_string();
        assert_rejected_with(request(vec![q], vec![]), "empty option");
    }

    #[test]
    fn rejects_correct_answer_out_of_range() {
        assert_rejected_with(
            request(vec![question("Q", 4, None)], vec![]),
            "out of range",
        );
        assert_rejected_with(
            request(vec![question("Q", -1, None)], vec![]),
            "out of range",
        );
    }

    #[test]
    fn rejects_passage_count_mismatch() {
        assert_rejected_with(
            request(
                vec![question("Only one", 0, Some("p1"))],
                vec![passage("p1", 2)],
            ),
            "declares 2 questions but 1",
        );
    }

    #[test]
    fn rejects_unknown_passage_reference() {
        assert_rejected_with(
            request(vec![question("Q", 0, Some("ghost"))], vec![]),
            "unknown passage",
        );
    }

    #[test]
    fn rejects_duplicate_passage_identifiers() {
        assert_rejected_with(
            request(
                vec![
                    question("Q1", 0, Some("p1")),
                    question("Q2", 0, Some("p1")),
                ],
                vec![passage("p1", 1), passage("p1", 1)],
            ),
            "Duplicate passage",
        );
    }

    #[test]
    fn rejects_non_consecutive_passage_block() {
        assert_rejected_with(
            request(
                vec![
                    question("Grouped 1", 0, Some("p1")),
                    question("Interloper", 0, None),
                    question("Grouped 2", 0, Some("p1")),
                ],
                vec![passage("p1", 2)],
            ),
            "consecutive",
        );
    }

    #[test]
    fn rejects_passage_declaring_zero_questions() {
        assert_rejected_with(
            request(vec![question("Q", 0, None)], vec![passage("p1", 0)]),
            "at least one question",
        );
    }

    #[test]
    fn share_ids_are_fresh_per_composition() {
        let req = request(vec![question("Q", 0, None)], vec![]);
        let a = QuizComposer::compose(req.clone(), &owner()).unwrap();
        let b = QuizComposer::compose(req, &owner()).unwrap();
        assert_ne!(a.share_id, b.share_id);
    }
}
