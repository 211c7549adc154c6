//! SQLite question bank.

use super::database::SqliteDatabase;
use async_trait::async_trait;
use quizhive_application::{QuestionRepository, RepositoryError};
use quizhive_domain::{Question, QuestionDraft, QuestionId};
use rusqlite::{Row, params, params_from_iter};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS question (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    category       TEXT NOT NULL,
    question_title TEXT NOT NULL,
    option1        TEXT NOT NULL,
    option2        TEXT NOT NULL,
    option3        TEXT NOT NULL,
    option4        TEXT NOT NULL,
    right_answer   TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_question_category ON question (category);
";

/// Ids bound per `IN (...)` lookup; stays below SQLite's variable limit.
const IDS_PER_QUERY: usize = 500;

const COLUMNS: &str =
    "id, category, question_title, option1, option2, option3, option4, right_answer";

fn map_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    let draft = QuestionDraft {
        category: row.get(1)?,
        title: row.get(2)?,
        option1: row.get(3)?,
        option2: row.get(4)?,
        option3: row.get(5)?,
        option4: row.get(6)?,
        right_answer: row.get(7)?,
    };
    Ok(draft.with_id(QuestionId::new(row.get(0)?)))
}

/// [`QuestionRepository`] backed by a `question` table.
///
/// Random sampling happens in SQL (`ORDER BY RANDOM() LIMIT n`), which picks
/// distinct rows uniformly without loading the category into memory.
#[derive(Clone)]
pub struct SqliteQuestionRepository {
    db: SqliteDatabase,
}

impl SqliteQuestionRepository {
    /// Wrap `db`, creating the schema if needed.
    pub fn new(db: SqliteDatabase) -> Result<Self, RepositoryError> {
        db.migrate(SCHEMA)?;
        Ok(Self { db })
    }
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn count(&self) -> Result<u64, RepositoryError> {
        let n: i64 = self
            .db
            .run(|conn| conn.query_row("SELECT COUNT(*) FROM question", [], |row| row.get(0)))
            .await?;
        Ok(n.max(0) as u64)
    }

    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError> {
        self.db
            .run(|conn| {
                let mut stmt =
                    conn.prepare(&format!("SELECT {} FROM question ORDER BY id", COLUMNS))?;
                let rows = stmt.query_map([], map_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            })
            .await
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Question>, RepositoryError> {
        let category = category.to_string();
        self.db
            .run(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM question WHERE category = ?1 ORDER BY id",
                    COLUMNS
                ))?;
                let rows = stmt.query_map([category], map_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            })
            .await
    }

    async fn find_by_ids(&self, ids: &[QuestionId]) -> Result<Vec<Question>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().map(QuestionId::value).collect();
        self.db
            .run(move |conn| {
                let mut found = Vec::new();
                for chunk in raw.chunks(IDS_PER_QUERY) {
                    let placeholders = vec!["?"; chunk.len()].join(", ");
                    let mut stmt = conn.prepare_cached(&format!(
                        "SELECT {} FROM question WHERE id IN ({})",
                        COLUMNS, placeholders
                    ))?;
                    let rows = stmt.query_map(params_from_iter(chunk.iter()), map_row)?;
                    for row in rows {
                        found.push(row?);
                    }
                }
                Ok(found)
            })
            .await
    }

    async fn insert(&self, draft: &QuestionDraft) -> Result<Question, RepositoryError> {
        let draft = draft.clone();
        self.db
            .run(move |conn| {
                conn.execute(
                    "INSERT INTO question
                        (category, question_title, option1, option2, option3, option4, right_answer)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    params![
                        draft.category,
                        draft.title,
                        draft.option1,
                        draft.option2,
                        draft.option3,
                        draft.option4,
                        draft.right_answer
                    ],
                )?;
                let id = QuestionId::new(conn.last_insert_rowid());
                Ok(draft.with_id(id))
            })
            .await
    }

    async fn update(
        &self,
        id: QuestionId,
        draft: &QuestionDraft,
    ) -> Result<Option<Question>, RepositoryError> {
        let draft = draft.clone();
        self.db
            .run(move |conn| {
                let changed = conn.execute(
                    "UPDATE question
                     SET category = ?1, question_title = ?2, option1 = ?3, option2 = ?4,
                         option3 = ?5, option4 = ?6, right_answer = ?7
                     WHERE id = ?8",
                    params![
                        draft.category,
                        draft.title,
                        draft.option1,
                        draft.option2,
                        draft.option3,
                        draft.option4,
                        draft.right_answer,
                        id.value()
                    ],
                )?;
                Ok((changed > 0).then(|| draft.with_id(id)))
            })
            .await
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        self.db
            .run(move |conn| {
                let changed = conn.execute("DELETE FROM question WHERE id = ?1", [id.value()])?;
                Ok(changed > 0)
            })
            .await
    }

    async fn random_ids(
        &self,
        category: &str,
        limit: u32,
    ) -> Result<Vec<QuestionId>, RepositoryError> {
        let category = category.to_string();
        self.db
            .run(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id FROM question WHERE category = ?1 ORDER BY RANDOM() LIMIT ?2",
                )?;
                let rows = stmt.query_map(params![category, limit], |row| {
                    row.get::<_, i64>(0).map(QuestionId::new)
                })?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            })
            .await
    }
}
