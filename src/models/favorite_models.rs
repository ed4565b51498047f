use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use serde::Serialize;

#[allow(dead_code)]
#[derive(Queryable)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub added_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::favorites)]
pub struct NewFavorite {
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

impl NewFavorite {
    pub fn character(user_id: i32, character_id: i32) -> Self {
        NewFavorite {
            user_id,
            character_id: Some(character_id),
            planet_id: None,
        }
    }

    pub fn planet(user_id: i32, planet_id: i32) -> Self {
        NewFavorite {
            user_id,
            character_id: None,
            planet_id: Some(planet_id),
        }
    }
}

/// A favorite points at exactly one of the two target tables.
#[derive(Serialize, Debug, PartialEq, Clone, Copy)]
#[serde(untagged)]
pub enum FavoriteTarget {
    Character { character_id: i32 },
    Planet { planet_id: i32 },
}

#[derive(Serialize)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    #[serde(flatten)]
    pub target: FavoriteTarget,
}

impl TryFrom<Favorite> for FavoriteResponse {
    type Error = String;

    fn try_from(row: Favorite) -> Result<Self, Self::Error> {
        let target = match (row.character_id, row.planet_id) {
            (Some(character_id), None) => FavoriteTarget::Character { character_id },
            (None, Some(planet_id)) => FavoriteTarget::Planet { planet_id },
            _ => {
                return Err(format!(
                    "favorite {} must reference exactly one of character or planet",
                    row.id
                ))
            }
        };
        Ok(FavoriteResponse {
            id: row.id,
            user_id: row.user_id,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(character_id: Option<i32>, planet_id: Option<i32>) -> Favorite {
        Favorite {
            id: 7,
            user_id: 1,
            character_id,
            planet_id,
            added_at: None,
        }
    }

    #[test]
    fn planet_row_converts() {
        let resp = FavoriteResponse::try_from(row(None, Some(5))).unwrap();
        assert_eq!(resp.target, FavoriteTarget::Planet { planet_id: 5 });
    }

    #[test]
    fn character_row_converts() {
        let resp = FavoriteResponse::try_from(row(Some(3), None)).unwrap();
        assert_eq!(resp.target, FavoriteTarget::Character { character_id: 3 });
    }

    #[test]
    fn both_targets_rejected() {
        assert!(FavoriteResponse::try_from(row(Some(3), Some(5))).is_err());
    }

    #[test]
    fn no_target_rejected() {
        assert!(FavoriteResponse::try_from(row(None, None)).is_err());
    }

    #[test]
    fn serializes_only_the_set_reference() {
        let resp = FavoriteResponse::try_from(row(None, Some(5))).unwrap();
        let value = serde_json::to_value(resp).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 7, "user_id": 1, "planet_id": 5 })
        );
    }
}
