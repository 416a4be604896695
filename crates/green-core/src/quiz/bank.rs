//! Multiple-choice questions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Index of the single correct answer.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.answers.iter().position(|answer| answer.is_correct)
    }
}

/// An ordered, validated sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, checking that it is non-empty and that every question
    /// has at least two answers with exactly one marked correct.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidQuestionBank`] describing the first
    /// offending question.
    pub fn new(questions: Vec<Question>) -> Result<Self, CoreError> {
        if questions.is_empty() {
            return Err(CoreError::InvalidQuestionBank(
                "bank has no questions".to_string(),
            ));
        }
        for (index, question) in questions.iter().enumerate() {
            if question.answers.len() < 2 {
                return Err(CoreError::InvalidQuestionBank(format!(
                    "question {index} has fewer than two answers"
                )));
            }
            let correct = question.answers.iter().filter(|a| a.is_correct).count();
            if correct != 1 {
                return Err(CoreError::InvalidQuestionBank(format!(
                    "question {index} has {correct} correct answers, expected exactly one"
                )));
            }
        }
        Ok(Self { questions })
    }

    /// The five green-coding questions of the built-in quiz.
    #[must_use]
    pub fn green_coding() -> Self {
        let questions = GREEN_CODING
            .iter()
            .map(|(prompt, answers)| Question {
                prompt: (*prompt).to_string(),
                answers: answers
                    .iter()
                    .map(|(text, is_correct)| Answer {
                        text: (*text).to_string(),
                        is_correct: *is_correct,
                    })
                    .collect(),
            })
            .collect();
        Self { questions }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

type RawQuestion = (&'static str, [(&'static str, bool); 4]);

const GREEN_CODING: [RawQuestion; 5] = [
    (
        "Quel format d'image est le plus écologique pour le web ?",
        [
            ("PNG non compressé", false),
            ("WebP ou AVIF", true),
            ("JPEG haute qualité", false),
            ("GIF animé", false),
        ],
    ),
    (
        "Quelle est la meilleure pratique pour réduire l'impact écologique d'un site ?",
        [
            ("Utiliser beaucoup d'animations", false),
            ("Minifier et compresser les fichiers CSS/JS", true),
            ("Charger toutes les ressources en même temps", false),
            ("Utiliser des polices personnalisées multiples", false),
        ],
    ),
    (
        "Qu'est-ce que le lazy loading ?",
        [
            ("Charger toutes les images immédiatement", false),
            ("Charger les images uniquement quand elles sont visibles", true),
            ("Désactiver toutes les images", false),
            ("Utiliser des images très lourdes", false),
        ],
    ),
    (
        "Quel impact a un site lourd sur l'environnement ?",
        [
            ("Aucun impact", false),
            ("Consomme plus d'énergie serveur et client", true),
            ("Améliore la performance", false),
            ("Réduit les émissions de CO2", false),
        ],
    ),
    (
        "Quelle technique permet de réduire le nombre de requêtes HTTP ?",
        [
            ("Créer plus de fichiers séparés", false),
            ("Combiner et minifier les fichiers CSS/JS", true),
            ("Charger toutes les bibliothèques", false),
            ("Utiliser beaucoup de CDN différents", false),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str, answers: &[(&str, bool)]) -> Question {
        Question {
            prompt: prompt.to_string(),
            answers: answers
                .iter()
                .map(|(text, is_correct)| Answer {
                    text: (*text).to_string(),
                    is_correct: *is_correct,
                })
                .collect(),
        }
    }

    #[test]
    fn builtin_bank_passes_validation() {
        let bank = QuestionBank::green_coding();
        assert_eq!(bank.len(), 5);
        let questions: Vec<Question> = bank.iter().cloned().collect();
        assert!(QuestionBank::new(questions).is_ok());
    }

    #[test]
    fn builtin_correct_answers_are_second_choice() {
        let bank = QuestionBank::green_coding();
        assert!(bank.iter().all(|q| q.correct_index() == Some(1)));
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert!(matches!(
            QuestionBank::new(Vec::new()),
            Err(CoreError::InvalidQuestionBank(_))
        ));
    }

    #[test]
    fn two_correct_answers_are_rejected() {
        let bad = question("?", &[("a", true), ("b", true)]);
        let err = QuestionBank::new(vec![bad]).unwrap_err();
        assert!(err.to_string().contains("2 correct answers"));
    }

    #[test]
    fn no_correct_answer_is_rejected() {
        let bad = question("?", &[("a", false), ("b", false)]);
        assert!(QuestionBank::new(vec![bad]).is_err());
    }

    #[test]
    fn single_answer_question_is_rejected() {
        let bad = question("?", &[("a", true)]);
        assert!(QuestionBank::new(vec![bad]).is_err());
    }
}
