use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::{Deserialize, Serialize};

#[allow(dead_code)]
#[derive(Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub is_admin: Option<bool>,
}

/// Transport shape for a user; never includes the password hash.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub is_admin: bool,
    pub created_at: Option<NaiveDateTime>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_omits_password_hash() {
        let user = User {
            id: 1,
            email: "leia@rebellion.org".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            is_admin: false,
            created_at: None,
        };
        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["email"], "leia@rebellion.org");
        assert!(value.get("password_hash").is_none());
    }
}
