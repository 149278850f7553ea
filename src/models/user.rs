use crate::domain::user::{Email, Username};
use anyhow::Context;
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHasher, Version};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub user_id: Uuid,
    pub username: String,
}

impl TryFrom<NewUserData> for NewUser {
    type Error = String;

    fn try_from(data: NewUserData) -> Result<NewUser, Self::Error> {
        prepare_new_user(data)
    }
}

impl NewUser {
    pub async fn store(self, pool: &PgPool) -> Result<Self, anyhow::Error> {
        sqlx::query(
            r#"
              INSERT INTO users (
                email,
                password_hash,
                user_id,
                username
              )
              VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&self.email)
        .bind(&self.password_hash)
        .bind(self.user_id)
        .bind(&self.username)
        .execute(pool)
        .await
        .context("Failed to store new user.")?;

        Ok(self)
    }
}

#[derive(Deserialize, Debug)]
pub struct NewUserData {
    pub email: String,
    pub username: String,
    pub password: Secret<String>,
}

fn prepare_new_user(data: NewUserData) -> Result<NewUser, String> {
    let user_id = Uuid::new_v4();
    let email = Email::parse(data.email)?.as_ref().to_string();
    let username = Username::parse(data.username)?.as_ref().to_string();
    let salt = SaltString::generate(&mut rand::thread_rng());
    let password_hash = Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).unwrap(),
    )
    .hash_password(data.password.expose_secret().as_bytes(), &salt)
    .unwrap()
    .to_string();

    Ok(NewUser {
        email,
        password_hash,
        user_id,
        username,
    })
}
