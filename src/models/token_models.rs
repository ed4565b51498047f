#[derive(serde::Serialize, serde::Deserialize, Clone)]
pub struct Claims {
    pub sub: i32, // user ID
    pub exp: i64, // expiration timestamp
}
