use crate::{
    auth::Claims,
    models::domain::{Passage, Question, Quiz, QuizResponse, Subject, Teacher},
};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a standard test teacher
    pub fn test_teacher() -> Teacher {
        Teacher::new("Test Teacher", "teacher@example.com", "$hash", Subject::English)
    }

    /// Claims for a teacher, as issued at login
    pub fn claims_for(teacher: &Teacher) -> Claims {
        Claims::new(teacher, 1)
    }

    pub fn question(text: &str, correct: u8, passage_id: Option<&str>) -> Question {
        Question {
            question: text.to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: correct,
            passage_id: passage_id.map(str::to_string),
        }
    }

    /// A quiz with the given answer key, all questions standalone
    pub fn quiz_with_key(teacher_id: &str, key: &[u8]) -> Quiz {
        let questions = key
            .iter()
            .enumerate()
            .map(|(i, &correct)| question(&format!("Question {}", i + 1), correct, None))
            .collect();
        Quiz::new("Test quiz", Subject::English, teacher_id, questions, vec![], 0)
    }

    /// The end-to-end shape: two standalone questions plus one passage
    /// grouping two questions, key [0, 1, 2, 2]
    pub fn mixed_quiz(teacher_id: &str) -> Quiz {
        Quiz::new(
            "Mixed quiz",
            Subject::English,
            teacher_id,
            vec![
                question("Standalone 1", 0, None),
                question("Standalone 2", 1, None),
                question("Grouped 1", 2, Some("p1")),
                question("Grouped 2", 2, Some("p1")),
            ],
            vec![Passage {
                id: "p1".to_string(),
                text: "A reading passage".to_string(),
                question_count: 2,
            }],
            30,
        )
    }

    pub fn scored_response(
        quiz: &Quiz,
        answers: Vec<i32>,
        score: u32,
        time_spent: u32,
    ) -> QuizResponse {
        let total = quiz.questions.len() as u32;
        QuizResponse::new("Test Student", &quiz.id, answers, score, total, time_spent)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_mixed_quiz_satisfies_passage_invariant() {
        let quiz = mixed_quiz("t-1");

        let grouped = quiz
            .questions
            .iter()
            .filter(|q| q.passage_id.as_deref() == Some("p1"))
            .count();
        assert_eq!(grouped as u32, quiz.passages[0].question_count);
    }

    #[test]
    fn test_fixtures_quiz_with_key() {
        let quiz = quiz_with_key("t-1", &[3, 0]);
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].correct_answer, 3);
    }
}
