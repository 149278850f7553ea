use crate::configuration::{AuthSettings, DatabaseSettings, Settings};
use crate::routes::{auth, health_check, index};
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&configuration.database);
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let host_origin_url = format!("{}:{}", configuration.application.host, port);
        let server = run(
            listener,
            connection_pool,
            configuration.auth,
            host_origin_url,
            configuration.hosts.client,
        )
        .await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(configuration.connect_options())
}

async fn run(
    listener: TcpListener,
    db_pool: PgPool,
    auth_settings: AuthSettings,
    host_origin_url: String,
    client_url: String,
) -> Result<Server, anyhow::Error> {
    let db_pool = Data::new(db_pool);
    let auth_settings = Data::new(auth_settings);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(client_url.as_str())
            .allowed_origin(host_origin_url.as_str())
            .allowed_methods(vec!["GET", "POST", "OPTIONS", "HEAD"])
            .allowed_headers(&[
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CONTENT_TYPE,
            ])
            .block_on_origin_mismatch(true)
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .service(index::get)
            .service(health_check::get)
            .service(auth::post)
            .app_data(db_pool.clone())
            .app_data(auth_settings.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
