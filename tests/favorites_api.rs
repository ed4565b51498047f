//! End-to-end checks against a real Postgres database.
//!
//! Set `TEST_DATABASE_URL` to a throwaway database to run these; without
//! it the test is a no-op. Tables are created on the fly and truncated
//! at the start, so every run begins from an empty store.

use actix_web::{http::StatusCode, test, web, App};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use serde_json::{json, Value};

use starbase::db::DbPool;
use starbase::models::character_models::{Character, NewCharacter};
use starbase::models::planet_models::{NewPlanet, Planet};
use starbase::models::user_models::{NewUser, User};
use starbase::routes;
use starbase::utils::token_utils::generate_jwt;

const SECRET: &[u8] = b"integration-secret";

fn test_pool() -> Option<DbPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let manager = ConnectionManager::<PgConnection>::new(url);
    Some(
        r2d2::Pool::builder()
            .max_size(2)
            .build(manager)
            .expect("Failed to connect to TEST_DATABASE_URL"),
    )
}

fn reset_schema(conn: &mut PgConnection) {
    conn.batch_execute(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            email VARCHAR(120) NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP
        );
        CREATE TABLE IF NOT EXISTS characters (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            species VARCHAR(50),
            gender VARCHAR(20),
            birth_year VARCHAR(20),
            created_at TIMESTAMP
        );
        CREATE TABLE IF NOT EXISTS planets (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            climate VARCHAR(50),
            terrain VARCHAR(50),
            population BIGINT,
            created_at TIMESTAMP
        );
        CREATE TABLE IF NOT EXISTS favorites (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users (id),
            character_id INTEGER REFERENCES characters (id),
            planet_id INTEGER REFERENCES planets (id),
            added_at TIMESTAMP,
            UNIQUE (user_id, character_id),
            UNIQUE (user_id, planet_id)
        );
        TRUNCATE favorites, users, characters, planets RESTART IDENTITY CASCADE;
        "#,
    )
    .expect("Failed to prepare test schema");
}

fn seed_user(conn: &mut PgConnection, user_email: &str, admin: bool) -> User {
    diesel::insert_into(starbase::schema::users::table)
        .values(&NewUser {
            email: user_email.to_string(),
            password_hash: "unused".to_string(),
            is_admin: admin,
        })
        .get_result(conn)
        .expect("Failed to seed user")
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn favorites_crud_roundtrip() {
    let Some(pool) = test_pool() else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let mut conn = pool.get().expect("Failed to get test connection");
    reset_schema(&mut conn);

    let user = seed_user(&mut conn, "luke@rebellion.org", false);
    let admin = seed_user(&mut conn, "mon.mothma@rebellion.org", true);

    let planet: Planet = diesel::insert_into(starbase::schema::planets::table)
        .values(&NewPlanet {
            name: "Dagobah".to_string(),
            climate: Some("murky".to_string()),
            terrain: Some("swamp".to_string()),
            population: None,
        })
        .get_result(&mut conn)
        .expect("Failed to seed planet");

    let character: Character = diesel::insert_into(starbase::schema::characters::table)
        .values(&NewCharacter {
            name: "Yoda".to_string(),
            species: None,
            gender: None,
            birth_year: Some("896BBY".to_string()),
        })
        .get_result(&mut conn)
        .expect("Failed to seed character");
    drop(conn);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(SECRET.to_vec()))
            .configure(routes::configure),
    )
    .await;

    let token = generate_jwt(user.id, SECRET);

    // Misses on the read surface carry the original messages.
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/people/9999").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Personaje not found");

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/planets/9999").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Planeta not found");

    // An existing user with nothing favorited gets an empty list, not a 404.
    let req = test::TestRequest::get()
        .uri("/users/favorites")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));

    // Add then list: the favorite shows up with its planet reference.
    let req = test::TestRequest::post()
        .uri(&format!("/favorite/planet/{}", planet.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Favorite planet added");

    let req = test::TestRequest::post()
        .uri(&format!("/favorite/planet/{}", planet.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get()
        .uri("/users/favorites")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let list = body.as_array().expect("favorites list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["user_id"], user.id);
    assert_eq!(list[0]["planet_id"], planet.id);
    assert!(list[0].get("character_id").is_none());

    // Remove, then the list is empty again.
    let req = test::TestRequest::delete()
        .uri(&format!("/favorite/planet/{}", planet.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Favorite planet deleted");

    let req = test::TestRequest::get()
        .uri("/users/favorites")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));

    // Removing again distinguishes a missing favorite from a missing user.
    let req = test::TestRequest::delete()
        .uri(&format!("/favorite/planet/{}", planet.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Favorite planet not found");

    let req = test::TestRequest::delete()
        .uri(&format!("/favorite/people/{}", character.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Favorite person not found");

    // A token for a user that no longer exists resolves before any row work.
    let ghost_token = generate_jwt(999_999, SECRET);
    for req in [
        test::TestRequest::get().uri("/users/favorites"),
        test::TestRequest::post().uri(&format!("/favorite/planet/{}", planet.id)),
        test::TestRequest::delete().uri(&format!("/favorite/people/{}", character.id)),
    ] {
        let resp =
            test::call_service(&app, req.insert_header(bearer(&ghost_token)).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User not found");
    }

    // Character favorites work symmetrically.
    let req = test::TestRequest::post()
        .uri(&format!("/favorite/people/{}", character.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Favorite person added");

    let req = test::TestRequest::get()
        .uri("/users/favorites")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["character_id"], character.id);

    // Favoriting a planet that does not exist hits the FK, not a 500.
    let req = test::TestRequest::post()
        .uri("/favorite/planet/999999")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Planeta not found");

    // Admin create: second user with the same email is a conflict.
    let admin_token = generate_jwt(admin.id, SECRET);
    let req = test::TestRequest::post()
        .uri("/admin/users")
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "email": "wedge@rebellion.org", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/admin/users")
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "email": "wedge@rebellion.org", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
