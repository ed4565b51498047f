use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::{AsChangeset, Selectable};
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::characters)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = crate::schema::characters)]
pub struct NewCharacter {
    pub name: String,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
}

// Use AsChangeset to update only provided fields; None fields are skipped
#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = crate::schema::characters)]
#[diesel(treat_none_as_null = false)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
}
