//! SQLite quiz store.

use super::database::SqliteDatabase;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quizhive_application::{QuizRepository, RepositoryError};
use quizhive_domain::{NewQuiz, QuestionId, Quiz, QuizId};
use rusqlite::{OptionalExtension, params};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS quiz (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS quiz_question (
    quiz_id     INTEGER NOT NULL REFERENCES quiz (id),
    position    INTEGER NOT NULL,
    question_id INTEGER NOT NULL,
    PRIMARY KEY (quiz_id, position)
);
";

/// [`QuizRepository`] storing the question list as ordered rows.
///
/// `quiz_question.position` keeps presentation order; the same question id
/// may appear at several positions. Question ids are plain integers: the
/// question bank lives in another service's database.
#[derive(Clone)]
pub struct SqliteQuizRepository {
    db: SqliteDatabase,
}

impl SqliteQuizRepository {
    /// Wrap `db`, creating the schema if needed.
    pub fn new(db: SqliteDatabase) -> Result<Self, RepositoryError> {
        db.migrate(SCHEMA)?;
        Ok(Self { db })
    }
}

#[async_trait]
impl QuizRepository for SqliteQuizRepository {
    async fn insert(&self, quiz: &NewQuiz) -> Result<Quiz, RepositoryError> {
        let quiz = quiz.clone();
        let created_at = Utc::now();
        self.db
            .run(move |conn| {
                let tx = conn.transaction()?;
                tx.execute(
                    "INSERT INTO quiz (title, created_at) VALUES (?1, ?2)",
                    params![quiz.title, created_at.to_rfc3339()],
                )?;
                let id = tx.last_insert_rowid();
                {
                    let mut stmt = tx.prepare(
                        "INSERT INTO quiz_question (quiz_id, position, question_id)
                         VALUES (?1, ?2, ?3)",
                    )?;
                    for (position, question_id) in quiz.question_ids.iter().enumerate() {
                        stmt.execute(params![id, position as i64, question_id.value()])?;
                    }
                }
                tx.commit()?;
                Ok(Quiz {
                    id: QuizId::new(id),
                    title: quiz.title,
                    question_ids: quiz.question_ids,
                    created_at,
                })
            })
            .await
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, RepositoryError> {
        let row: Option<(String, String)> = self
            .db
            .run(move |conn| {
                conn.query_row(
                    "SELECT title, created_at FROM quiz WHERE id = ?1",
                    [id.value()],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()
            })
            .await?;

        let Some((title, created_at)) = row else {
            return Ok(None);
        };
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| RepositoryError::Corrupt(format!("quiz {} created_at: {}", id, e)))?
            .with_timezone(&Utc);

        let question_ids = self
            .db
            .run(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT question_id FROM quiz_question WHERE quiz_id = ?1 ORDER BY position",
                )?;
                let rows = stmt.query_map([id.value()], |row| {
                    row.get::<_, i64>(0).map(QuestionId::new)
                })?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            })
            .await?;

        Ok(Some(Quiz {
            id,
            title,
            question_ids,
            created_at,
        }))
    }
}
