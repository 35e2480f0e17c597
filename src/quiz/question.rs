use std::fs;
use std::io;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_OPTIONS;
use crate::error::QuizError;

/// One entry of the question file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct one.
    pub answer: usize,
}

/// A question as asked: options in shuffled order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: usize,
}

impl QuestionRecord {
    fn validate(&self, position: usize) -> Result<(), QuizError> {
        if self.options.is_empty() {
            return Err(QuizError::Invalid(format!(
                "question {} has no options",
                position + 1
            )));
        }
        if self.options.len() > MAX_OPTIONS {
            return Err(QuizError::Invalid(format!(
                "question {} has {} options (at most {})",
                position + 1,
                self.options.len(),
                MAX_OPTIONS
            )));
        }
        if self.answer >= self.options.len() {
            return Err(QuizError::Invalid(format!(
                "question {} answer index {} is out of range",
                position + 1,
                self.answer
            )));
        }
        Ok(())
    }

    /// Copy with options shuffled and the answer index following its option.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> PoolQuestion {
        let mut order: Vec<usize> = (0..self.options.len()).collect();
        order.shuffle(rng);
        let answer = order
            .iter()
            .position(|&i| i == self.answer)
            .unwrap_or_default();
        PoolQuestion {
            question: self.question.clone(),
            options: order.iter().map(|&i| self.options[i].clone()).collect(),
            answer,
        }
    }
}

pub fn parse_questions(json: &str, path: &Path) -> Result<Vec<QuestionRecord>, QuizError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(json).map_err(|source| QuizError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if records.is_empty() {
        return Err(QuizError::Invalid("no questions".to_string()));
    }
    for (position, record) in records.iter().enumerate() {
        record.validate(position)?;
    }
    Ok(records)
}

pub fn load_questions(path: &Path) -> Result<Vec<QuestionRecord>, QuizError> {
    let json = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => QuizError::NotFound(path.to_path_buf()),
        _ => QuizError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_questions(&json, path)
}

/// Draws `size` questions with replacement, each with its own option order.
pub fn build_pool<R: Rng + ?Sized>(
    records: &[QuestionRecord],
    size: usize,
    rng: &mut R,
) -> Vec<PoolQuestion> {
    let mut pool = Vec::with_capacity(if records.is_empty() { 0 } else { size });
    for _ in 0..size {
        match records.choose(rng) {
            Some(record) => pool.push(record.shuffled(rng)),
            None => break,
        }
    }
    pool
}
