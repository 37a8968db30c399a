//! PostgreSQL Repository Implementation

use kernel::id::{TodoId, UserId};
use sqlx::PgPool;

use crate::domain::entities::Todo;
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::TodoText;
use crate::error::{TodoError, TodoResult};

/// PostgreSQL-backed todo repository
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TodoRepository for PgTodoRepository {
    async fn create(&self, user_id: UserId, text: &TodoText) -> TodoResult<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (user_id, todo_text)
            VALUES ($1, $2)
            ON CONFLICT (user_id, todo_text) DO NOTHING
            RETURNING id, user_id, todo_text, completed
            "#,
        )
        .bind(user_id.get())
        .bind(text.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoRow::into_todo))
    }

    async fn list_by_user(&self, user_id: UserId) -> TodoResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, user_id, todo_text, completed
            FROM todos
            WHERE user_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(user_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoResult<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, user_id, todo_text, completed FROM todos WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoRow::into_todo))
    }

    async fn rename(&self, id: TodoId, text: &TodoText) -> TodoResult<bool> {
        let updated = sqlx::query("UPDATE todos SET todo_text = $2 WHERE id = $1")
            .bind(id.get())
            .bind(text.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    TodoError::DuplicateRename
                }
                _ => TodoError::Database(e),
            })?
            .rows_affected();

        Ok(updated > 0)
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> TodoResult<bool> {
        let updated = sqlx::query("UPDATE todos SET completed = $2 WHERE id = $1")
            .bind(id.get())
            .bind(completed)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, id: TodoId) -> TodoResult<bool> {
        let deleted = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i64,
    user_id: i64,
    todo_text: String,
    completed: bool,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        Todo {
            id: TodoId::new(self.id),
            user_id: UserId::new(self.user_id),
            text: TodoText::from_db(self.todo_text),
            completed: self.completed,
        }
    }
}
