//! Domain Entities

use kernel::id::{TodoId, UserId};
use kernel::session::Session;

use crate::domain::value_objects::TodoText;

/// Todo entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    /// Owning user
    pub user_id: UserId,
    pub text: TodoText,
    pub completed: bool,
}

impl Todo {
    /// The one ownership predicate for get, update and delete
    pub fn is_owned_by(&self, session: &Session) -> bool {
        session.user_id() == Some(self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_of(user: i64) -> Todo {
        Todo {
            id: TodoId::new(1),
            user_id: UserId::new(user),
            text: TodoText::new("buy milk").unwrap(),
            completed: false,
        }
    }

    #[test]
    fn test_owner() {
        let session = Session::Authenticated {
            session_id: uuid::Uuid::new_v4(),
            user_id: UserId::new(7),
        };
        assert!(todo_of(7).is_owned_by(&session));
        assert!(!todo_of(8).is_owned_by(&session));
    }

    #[test]
    fn test_anonymous_owns_nothing() {
        assert!(!todo_of(7).is_owned_by(&Session::Anonymous));
    }
}
