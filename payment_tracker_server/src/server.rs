use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::info;
use payment_tracker_engine::{NoopPaymentAuthority, OrderFlowApi, OrderStoreDatabase, SqliteDatabase};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{
        admin_page,
        health,
        AdminOrdersRoute,
        ApprovePaymentRoute,
        CompletePaymentRoute,
        CreateOrderRoute,
        VerifyTransactionRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let mut db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("🗃️ Database schema is ready at {}", db.url());
    let srv = create_server_instance(config, db.clone())?;
    let result = srv.await.map_err(|e| ServerError::Unspecified(e.to_string()));
    db.close().await?;
    info!("🗃️ Database connection closed");
    result
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let orders_api = OrderFlowApi::new(db.clone(), NoopPaymentAuthority);
        let api_scope = web::scope("/api")
            .service(CreateOrderRoute::<SqliteDatabase, NoopPaymentAuthority>::new())
            .service(ApprovePaymentRoute::<SqliteDatabase, NoopPaymentAuthority>::new())
            .service(CompletePaymentRoute::<SqliteDatabase, NoopPaymentAuthority>::new())
            .service(AdminOrdersRoute::<SqliteDatabase, NoopPaymentAuthority>::new())
            .service(VerifyTransactionRoute::<SqliteDatabase, NoopPaymentAuthority>::new());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("pts::access_log"))
            .app_data(web::Data::new(orders_api))
            .service(health)
            .service(admin_page)
            .service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
