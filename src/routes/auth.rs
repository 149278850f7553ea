use crate::authentication::{
    AuthError, Credentials, Principal, issue_token, validate_credentials,
};
use crate::configuration::AuthSettings;
use crate::utils::{e500, error_chain_fmt};
use actix_web::error::InternalError;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, post, web};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Deserialize, Debug)]
pub struct AuthParams {
    username: String,
    password: Secret<String>,
}

#[derive(Serialize)]
pub struct AuthSuccess {
    pub token: String,
    pub user: Principal,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthRejection {
    pub status: u16,
    pub error: String,
}

impl AuthRejection {
    fn unauthorized() -> Self {
        Self {
            status: 401,
            error: "Unauthorized".to_string(),
        }
    }
}

#[post("/auth")]
#[tracing::instrument(
    skip(params, pool, auth_settings),
    fields(username=tracing::field::Empty, user_id=tracing::field::Empty)
)]
pub async fn post(
    params: web::Json<AuthParams>,
    pool: web::Data<PgPool>,
    auth_settings: web::Data<AuthSettings>,
) -> Result<HttpResponse, actix_web::Error> {
    let credentials = Credentials {
        username: params.0.username,
        password: params.0.password,
    };
    tracing::Span::current().record("username", tracing::field::display(&credentials.username));
    match validate_credentials(credentials, &pool).await {
        Ok(principal) => {
            tracing::Span::current().record("user_id", tracing::field::display(&principal.user_id));
            let token = issue_token(&principal, &auth_settings).map_err(e500)?;
            Ok(HttpResponse::Ok()
                .content_type(ContentType::json())
                .json(AuthSuccess {
                    token,
                    user: principal,
                }))
        }
        Err(e) => match e {
            AuthError::InvalidCredentials(_) => Err(unauthorized(e)),
            AuthError::UnexpectedError(_) => Err(e500(AuthUserError::UnexpectedError(e.into()))),
        },
    }
}

fn unauthorized(e: AuthError) -> actix_web::Error {
    let response = HttpResponse::Unauthorized()
        .content_type(ContentType::json())
        .json(AuthRejection::unauthorized());
    InternalError::from_response(AuthUserError::AuthError(e.into()), response).into()
}

#[derive(thiserror::Error)]
pub enum AuthUserError {
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for AuthUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
