//! Hand-written port doubles shared by the use case tests.

use crate::ports::question_gateway::QuestionGateway;
use crate::ports::question_repository::QuestionRepository;
use crate::ports::quiz_repository::QuizRepository;
use crate::ports::repository_error::RepositoryError;
use async_trait::async_trait;
use quizhive_domain::{
    NewQuiz, Question, QuestionDraft, QuestionId, QuestionWrapper, Quiz, QuizId, QuizResponse,
    Upstream,
};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

pub(crate) fn ids(raw: &[i64]) -> Vec<QuestionId> {
    raw.iter().copied().map(QuestionId::new).collect()
}

/// A "math" question whose right answer "B" is option2.
pub(crate) fn math_draft(n: usize) -> QuestionDraft {
    QuestionDraft::new("math", format!("Question {}", n), ["A", "B", "C", "D"], "B")
}

// ==================== Question Repository ====================

pub(crate) struct MemoryQuestions {
    rows: Mutex<BTreeMap<QuestionId, Question>>,
    next_id: Mutex<i64>,
    fail_writes: AtomicBool,
}

impl MemoryQuestions {
    pub(crate) fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: Mutex::new(1),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub(crate) fn insert_draft(&self, draft: QuestionDraft) -> Question {
        let mut next = self.next_id.lock().unwrap();
        let question = draft.with_id(QuestionId::new(*next));
        *next += 1;
        self.rows.lock().unwrap().insert(question.id, question.clone());
        question
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub(crate) fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::QueryFailed("disk full".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MemoryQuestions {
    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.len() as u64)
    }

    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Question>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|q| q.category() == category)
            .cloned()
            .collect())
    }

    async fn find_by_ids(&self, ids: &[QuestionId]) -> Result<Vec<Question>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(ids.iter().filter_map(|id| rows.get(id).cloned()).collect())
    }

    async fn insert(&self, draft: &QuestionDraft) -> Result<Question, RepositoryError> {
        self.check_writable()?;
        Ok(self.insert_draft(draft.clone()))
    }

    async fn update(
        &self,
        id: QuestionId,
        draft: &QuestionDraft,
    ) -> Result<Option<Question>, RepositoryError> {
        self.check_writable()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) => {
                *row = draft.clone().with_id(id);
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        self.check_writable()?;
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    // Deterministic: first `limit` ids of the category
    async fn random_ids(
        &self,
        category: &str,
        limit: u32,
    ) -> Result<Vec<QuestionId>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|q| q.category() == category)
            .take(limit as usize)
            .map(|q| q.id)
            .collect())
    }
}

// ==================== Quiz Repository ====================

pub(crate) struct MemoryQuizzes {
    rows: Mutex<Vec<Quiz>>,
    fail_writes: AtomicBool,
}

impl MemoryQuizzes {
    pub(crate) fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub(crate) fn seed(&self, title: &str, question_ids: Vec<QuestionId>) -> Quiz {
        let mut rows = self.rows.lock().unwrap();
        let id = QuizId::new(rows.len() as i64 + 1);
        let quiz = Quiz {
            id,
            title: title.to_string(),
            question_ids,
            created_at: chrono::Utc::now(),
        };
        rows.push(quiz.clone());
        quiz
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub(crate) fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl QuizRepository for MemoryQuizzes {
    async fn insert(&self, quiz: &NewQuiz) -> Result<Quiz, RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("database locked".to_string()));
        }
        Ok(self.seed(&quiz.title, quiz.question_ids.clone()))
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().find(|q| q.id == id).cloned())
    }
}

// ==================== Question Gateway ====================

/// Gateway double answering either live or degraded, without a network.
pub(crate) struct ScriptedGateway {
    degraded: bool,
    sample: Option<Vec<QuestionId>>,
    score: u32,
    delay: Option<Duration>,
    score_calls: AtomicUsize,
}

impl ScriptedGateway {
    pub(crate) fn live() -> Self {
        Self {
            degraded: false,
            sample: None,
            score: 0,
            delay: None,
            score_calls: AtomicUsize::new(0),
        }
    }

    /// Answers the way the placeholder fallback does.
    pub(crate) fn degraded() -> Self {
        Self {
            degraded: true,
            ..Self::live()
        }
    }

    pub(crate) fn with_sample(mut self, ids: Vec<QuestionId>) -> Self {
        self.sample = Some(ids);
        self
    }

    pub(crate) fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn score_calls(&self) -> usize {
        self.score_calls.load(Ordering::SeqCst)
    }

    async fn answer<T>(&self, live: T, degraded: T) -> Upstream<T> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.degraded {
            Upstream::Degraded(degraded)
        } else {
            Upstream::Live(live)
        }
    }
}

#[async_trait]
impl QuestionGateway for ScriptedGateway {
    async fn sample_random(&self, _category: &str, count: u32) -> Upstream<Vec<QuestionId>> {
        let placeholder = (1..=count as i64).map(QuestionId::new).collect();
        let live = self.sample.clone().unwrap_or_default();
        self.answer(live, placeholder).await
    }

    async fn expand(&self, ids: &[QuestionId]) -> Upstream<Vec<QuestionWrapper>> {
        let live = ids
            .iter()
            .map(|id| QuestionWrapper {
                id: *id,
                title: format!("Question {}", id),
                option1: "A".to_string(),
                option2: "B".to_string(),
                option3: "C".to_string(),
                option4: "D".to_string(),
            })
            .collect();
        let placeholder = ids.iter().copied().map(QuestionWrapper::unavailable).collect();
        self.answer(live, placeholder).await
    }

    async fn score(&self, _responses: &[QuizResponse]) -> Upstream<u32> {
        self.score_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(self.score, 0).await
    }
}
