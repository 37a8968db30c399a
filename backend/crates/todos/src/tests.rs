//! Unit tests for Todos crate

#[cfg(test)]
mod error_tests {
    use crate::error::{TodoAction, TodoError};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let cases = [
            (TodoError::MalformedBody, StatusCode::BAD_REQUEST),
            (TodoError::MissingTodo, StatusCode::BAD_REQUEST),
            (TodoError::DuplicateTodo, StatusCode::BAD_REQUEST),
            (TodoError::DuplicateRename, StatusCode::BAD_REQUEST),
            (TodoError::ConflictingUpdate, StatusCode::BAD_REQUEST),
            (TodoError::NotSignedIn, StatusCode::UNAUTHORIZED),
            (TodoError::NotOwner(TodoAction::See), StatusCode::FORBIDDEN),
            (TodoError::NotFound, StatusCode::NOT_FOUND),
            (
                TodoError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_not_owner_message_names_action() {
        assert_eq!(
            TodoError::NotOwner(TodoAction::Update).to_string(),
            "Be logged in or You cannot update todo of others."
        );
        assert_eq!(
            TodoError::NotOwner(TodoAction::Delete).to_string(),
            "Be logged in or You cannot delete todo of others."
        );
    }

    #[test]
    fn test_internal_details_hidden() {
        let app_error = TodoError::Internal("pool timed out".to_string()).to_app_error();
        assert!(!app_error.message().contains("pool timed out"));
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::id::{TodoId, UserId};
    use kernel::session::Session;
    use uuid::Uuid;

    use crate::application::{
        CreateTodoInput, CreateTodoUseCase, DeleteTodoUseCase, GetTodoUseCase, ListTodosUseCase,
        UpdateTodoInput, UpdateTodoUseCase,
    };
    use crate::domain::entities::Todo;
    use crate::error::{TodoAction, TodoError};
    use crate::infra::memory::InMemoryTodoRepository;

    fn signed_in(user: i64) -> Session {
        Session::Authenticated {
            session_id: Uuid::new_v4(),
            user_id: UserId::new(user),
        }
    }

    async fn create(
        repo: &Arc<InMemoryTodoRepository>,
        session: Session,
        text: &str,
    ) -> Result<Todo, TodoError> {
        CreateTodoUseCase::new(repo.clone())
            .execute(
                session,
                CreateTodoInput {
                    todo: Some(text.to_string()),
                },
            )
            .await
    }

    async fn update(
        repo: &Arc<InMemoryTodoRepository>,
        id: TodoId,
        session: Session,
        todo: Option<&str>,
        completed: Option<bool>,
    ) -> Result<(), TodoError> {
        UpdateTodoUseCase::new(repo.clone())
            .execute(
                id,
                session,
                UpdateTodoInput {
                    todo: todo.map(str::to_string),
                    completed,
                },
            )
            .await
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let alice = signed_in(1);

        create(&repo, alice, "buy milk").await.unwrap();
        create(&repo, alice, "walk dog").await.unwrap();
        create(&repo, signed_in(2), "not mine").await.unwrap();

        let output = ListTodosUseCase::new(repo.clone())
            .execute(alice)
            .await
            .unwrap();
        assert_eq!(output.user_id, UserId::new(1));
        let texts: Vec<&str> = output.todos.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["walk dog", "buy milk"]);
        assert!(output.todos.iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn test_list_requires_session() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let result = ListTodosUseCase::new(repo).execute(Session::Anonymous).await;
        assert!(matches!(result, Err(TodoError::NotSignedIn)));
    }

    #[tokio::test]
    async fn test_create_checks_text_before_session() {
        let repo = Arc::new(InMemoryTodoRepository::new());

        let missing = CreateTodoUseCase::new(repo.clone())
            .execute(Session::Anonymous, CreateTodoInput { todo: None })
            .await;
        assert!(matches!(missing, Err(TodoError::MissingTodo)));

        let empty = create(&repo, Session::Anonymous, "").await;
        assert!(matches!(empty, Err(TodoError::MissingTodo)));

        let anonymous = create(&repo, Session::Anonymous, "buy milk").await;
        assert!(matches!(anonymous, Err(TodoError::NotSignedIn)));
    }

    #[tokio::test]
    async fn test_duplicate_text_is_per_user() {
        let repo = Arc::new(InMemoryTodoRepository::new());

        create(&repo, signed_in(1), "buy milk").await.unwrap();
        assert!(matches!(
            create(&repo, signed_in(1), "buy milk").await,
            Err(TodoError::DuplicateTodo)
        ));
        // Case and whitespace are significant
        assert!(create(&repo, signed_in(1), "Buy milk").await.is_ok());
        assert!(create(&repo, signed_in(1), "buy milk ").await.is_ok());
        // Another user may reuse the text
        assert!(create(&repo, signed_in(2), "buy milk").await.is_ok());
    }

    #[tokio::test]
    async fn test_ownership_check() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let todo = create(&repo, signed_in(1), "buy milk").await.unwrap();
        let get = GetTodoUseCase::new(repo.clone());

        assert_eq!(get.execute(todo.id, signed_in(1)).await.unwrap(), todo);
        assert!(matches!(
            get.execute(todo.id, signed_in(2)).await,
            Err(TodoError::NotOwner(TodoAction::See))
        ));
        assert!(matches!(
            get.execute(todo.id, Session::Anonymous).await,
            Err(TodoError::NotOwner(TodoAction::See))
        ));
        assert!(matches!(
            get.execute(TodoId::new(999), signed_in(1)).await,
            Err(TodoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_rename_and_complete() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let alice = signed_in(1);
        let todo = create(&repo, alice, "buy milk").await.unwrap();

        update(&repo, todo.id, alice, Some("buy oat milk"), None)
            .await
            .unwrap();
        update(&repo, todo.id, alice, None, Some(true)).await.unwrap();

        let stored = GetTodoUseCase::new(repo.clone())
            .execute(todo.id, alice)
            .await
            .unwrap();
        assert_eq!(stored.text.as_str(), "buy oat milk");
        assert!(stored.completed);

        update(&repo, todo.id, alice, None, Some(false)).await.unwrap();
        let stored = GetTodoUseCase::new(repo.clone())
            .execute(todo.id, alice)
            .await
            .unwrap();
        assert!(!stored.completed);
    }

    #[tokio::test]
    async fn test_update_rejections() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let alice = signed_in(1);
        let first = create(&repo, alice, "buy milk").await.unwrap();
        create(&repo, alice, "walk dog").await.unwrap();

        assert!(matches!(
            update(&repo, first.id, alice, Some("x"), Some(false)).await,
            Err(TodoError::ConflictingUpdate)
        ));
        assert!(matches!(
            update(&repo, first.id, alice, Some("walk dog"), None).await,
            Err(TodoError::DuplicateRename)
        ));
        assert!(matches!(
            update(&repo, first.id, alice, Some(""), None).await,
            Err(TodoError::InvalidInput(_))
        ));
        // Ownership is checked before the body is interpreted
        assert!(matches!(
            update(&repo, first.id, signed_in(2), Some("x"), Some(true)).await,
            Err(TodoError::NotOwner(TodoAction::Update))
        ));
    }

    #[tokio::test]
    async fn test_update_noops() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let alice = signed_in(1);
        let todo = create(&repo, alice, "buy milk").await.unwrap();

        update(&repo, todo.id, alice, None, None).await.unwrap();
        update(&repo, todo.id, alice, Some("buy milk"), None)
            .await
            .unwrap();

        let stored = GetTodoUseCase::new(repo.clone())
            .execute(todo.id, alice)
            .await
            .unwrap();
        assert_eq!(stored, todo);
    }

    #[tokio::test]
    async fn test_delete_is_not_idempotent() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let alice = signed_in(1);
        let todo = create(&repo, alice, "buy milk").await.unwrap();
        let delete = DeleteTodoUseCase::new(repo.clone());

        assert!(matches!(
            delete.execute(todo.id, signed_in(2)).await,
            Err(TodoError::NotOwner(TodoAction::Delete))
        ));
        delete.execute(todo.id, alice).await.unwrap();
        assert!(matches!(
            delete.execute(todo.id, alice).await,
            Err(TodoError::NotFound)
        ));

        // Text is free again after deletion
        assert!(create(&repo, alice, "buy milk").await.is_ok());
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use kernel::id::UserId;
    use kernel::session::Session;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::infra::memory::InMemoryTodoRepository;
    use crate::presentation::router::todos_router_generic;

    const TEST_USER: &str = "x-test-user";

    /// Stands in for the auth middleware: the header names the user
    async fn test_session(mut request: Request<Body>, next: Next) -> Response {
        let user_id = request
            .headers()
            .get(TEST_USER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok());

        if let Some(user_id) = user_id {
            request.extensions_mut().insert(Session::Authenticated {
                session_id: Uuid::new_v4(),
                user_id: UserId::new(user_id),
            });
        }

        next.run(request).await
    }

    fn app() -> Router {
        Router::new()
            .nest(
                "/api",
                todos_router_generic(Arc::new(InMemoryTodoRepository::new())),
            )
            .layer(middleware::from_fn(test_session))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<&str>,
        user: Option<i64>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header(TEST_USER, user.to_string());
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    #[tokio::test]
    async fn test_todo_lifecycle() {
        let app = app();

        let (status, body) = send(&app, "POST", "/api/todos", Some(r#"{"todo":"buy milk"}"#), Some(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": "Successfully posted data.", "status_code": 200})
        );

        let (status, body) = send(&app, "GET", "/api/todos", None, Some(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], "Successfully got all todos.");
        assert_eq!(body["userid"], 1);
        assert_eq!(
            body["todos"],
            json!([{"id": 1, "todo": "buy milk", "completed": false}])
        );

        let (status, body) = send(&app, "PUT", "/api/todos/1", Some(r#"{"completed":true}"#), Some(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], "Successfully updated the todo data.");

        let (status, body) = send(&app, "GET", "/api/todos/1", None, Some(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": "Successfully got required todo.",
                "id": 1,
                "todo": "buy milk",
                "completed": true,
                "status_code": 200
            })
        );

        let (status, body) = send(&app, "DELETE", "/api/todos/1", None, Some(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], "Successfully deleted the todo.");

        let (status, body) = send(&app, "DELETE", "/api/todos/1", None, Some(1)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Such id of todo does not exist.");
        assert_eq!(body["status_code"], 404);
    }

    #[tokio::test]
    async fn test_anonymous_collection_access() {
        let app = app();

        let (status, body) = send(&app, "GET", "/api/todos", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({"error": "Be logged in to use this route.", "status_code": 401})
        );

        // Missing text wins over missing session
        let (status, body) = send(&app, "POST", "/api/todos", Some("{}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please provide a todo.");
    }

    #[tokio::test]
    async fn test_foreign_todo_is_forbidden() {
        let app = app();
        send(&app, "POST", "/api/todos", Some(r#"{"todo":"mine"}"#), Some(1)).await;

        let (status, body) = send(&app, "GET", "/api/todos/1", None, Some(2)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Be logged in or You cannot see todo of others.");

        let (status, body) = send(&app, "PUT", "/api/todos/1", Some(r#"{"todo":"x"}"#), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Be logged in or You cannot update todo of others.");

        let (status, body) = send(&app, "DELETE", "/api/todos/1", None, Some(2)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Be logged in or You cannot delete todo of others.");

        // Owner still sees it unchanged
        let (_, body) = send(&app, "GET", "/api/todos/1", None, Some(1)).await;
        assert_eq!(body["todo"], "mine");
    }

    #[tokio::test]
    async fn test_bad_requests() {
        let app = app();
        send(&app, "POST", "/api/todos", Some(r#"{"todo":"a"}"#), Some(1)).await;
        send(&app, "POST", "/api/todos", Some(r#"{"todo":"b"}"#), Some(1)).await;

        let (status, body) = send(&app, "POST", "/api/todos", Some(r#"{"todo":"a"}"#), Some(1)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Such todo of yours already exists.");

        let (status, body) = send(&app, "PUT", "/api/todos/1", Some(r#"{"todo":"b"}"#), Some(1)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "You are trying to update the todo value to be an already existing todo."
        );

        let (status, body) = send(
            &app,
            "PUT",
            "/api/todos/1",
            Some(r#"{"todo":"c","completed":true}"#),
            Some(1),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "You cannot update and mark as complete at the same time."
        );

        // "Yes" is not a boolean
        let (status, body) = send(&app, "PUT", "/api/todos/1", Some(r#"{"completed":"Yes"}"#), Some(1)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Invalid request body.", "status_code": 400})
        );

        let (status, body) = send(&app, "POST", "/api/todos", Some("not json"), Some(1)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body.");

        let (_, body) = send(&app, "GET", "/api/todos/1", None, Some(1)).await;
        assert_eq!(body["completed"], false);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let app = app();
        let (status, body) = send(&app, "GET", "/api/todos/abc", None, Some(1)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Such id of todo does not exist.");
    }
}
