use std::time::Duration;

use actix_cors::Cors;
use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::info;
use matrimony_nexus_engine::{
    BiodataApi,
    ContactRequestApi,
    FavoriteApi,
    PaymentApi,
    SqliteDatabase,
    StatsApi,
    SuccessStoryApi,
    UserApi,
};
use stripe_tools::{StripeApi, StripeConfig};

use crate::{
    auth::TokenIssuer,
    config::ServerConfig,
    errors::ServerError,
    routes::{
        create_payment_intent,
        home,
        issue_jwt,
        AddFavoriteRoute,
        AdminCheckRoute,
        ApproveContactRequestRoute,
        ApprovePremiumRoute,
        BiodataByIdRoute,
        BiodatasRoute,
        ContactRequestsForEmailRoute,
        ContactRequestsRoute,
        CreateBiodataRoute,
        CreateContactRequestRoute,
        CreateSuccessStoryRoute,
        DashboardChartRoute,
        DashboardStatsRoute,
        DeleteBiodataRoute,
        DeleteContactRequestRoute,
        FavoritesForUserRoute,
        FavoritesRoute,
        MakeAdminRoute,
        MakePremiumRoute,
        PaymentsForEmailRoute,
        PendingPremiumRoute,
        PremiumRequestRoute,
        RecordPaymentRoute,
        RegisterUserRoute,
        RemoveFavoriteRoute,
        SuccessStoriesRoute,
        UpdateBiodataRoute,
        UsersRoute,
        UserStatusRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    matrimony_nexus_engine::sqlite::db::create_database_if_missing(&config.database_url)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("🗃️ Database ready at {}", config.database_url);
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let stripe_api = StripeApi::new(StripeConfig::new_from_env_or_default())
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = HttpServer::new(move || {
        let user_api = UserApi::new(db.clone());
        let biodata_api = BiodataApi::new(db.clone());
        let contact_request_api = ContactRequestApi::new(db.clone());
        let favorite_api = FavoriteApi::new(db.clone());
        let payment_api = PaymentApi::new(db.clone());
        let stats_api = StatsApi::new(db.clone());
        let success_story_api = SuccessStoryApi::new(db.clone());
        let jwt_signer = TokenIssuer::new(&config.auth);
        let cors = config.cors_origins.iter().fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));
        let cors = cors
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("mns::access_log"))
            .wrap(cors)
            .app_data(web::Data::new(user_api))
            .app_data(web::Data::new(biodata_api))
            .app_data(web::Data::new(contact_request_api))
            .app_data(web::Data::new(favorite_api))
            .app_data(web::Data::new(payment_api))
            .app_data(web::Data::new(stats_api))
            .app_data(web::Data::new(success_story_api))
            .app_data(web::Data::new(jwt_signer))
            .app_data(web::Data::new(stripe_api.clone()))
            .service(home)
            .service(issue_jwt)
            .service(create_payment_intent)
            // Static /users paths must land before the parameterised ones.
            .service(PendingPremiumRoute::<SqliteDatabase>::new())
            .service(PremiumRequestRoute::<SqliteDatabase>::new())
            .service(AdminCheckRoute::<SqliteDatabase>::new())
            .service(MakeAdminRoute::<SqliteDatabase>::new())
            .service(MakePremiumRoute::<SqliteDatabase>::new())
            .service(ApprovePremiumRoute::<SqliteDatabase>::new())
            .service(ContactRequestsRoute::<SqliteDatabase>::new())
            .service(ContactRequestsForEmailRoute::<SqliteDatabase>::new())
            .service(CreateContactRequestRoute::<SqliteDatabase>::new())
            .service(ApproveContactRequestRoute::<SqliteDatabase>::new())
            .service(DeleteContactRequestRoute::<SqliteDatabase>::new())
            .service(UsersRoute::<SqliteDatabase>::new())
            .service(RegisterUserRoute::<SqliteDatabase>::new())
            .service(UserStatusRoute::<SqliteDatabase>::new())
            .service(BiodatasRoute::<SqliteDatabase>::new())
            .service(CreateBiodataRoute::<SqliteDatabase>::new())
            .service(BiodataByIdRoute::<SqliteDatabase>::new())
            .service(UpdateBiodataRoute::<SqliteDatabase>::new())
            .service(DeleteBiodataRoute::<SqliteDatabase>::new())
            .service(FavoritesRoute::<SqliteDatabase>::new())
            .service(AddFavoriteRoute::<SqliteDatabase>::new())
            .service(FavoritesForUserRoute::<SqliteDatabase>::new())
            .service(RemoveFavoriteRoute::<SqliteDatabase>::new())
            .service(PaymentsForEmailRoute::<SqliteDatabase>::new())
            .service(RecordPaymentRoute::<SqliteDatabase>::new())
            .service(DashboardStatsRoute::<SqliteDatabase>::new())
            .service(DashboardChartRoute::<SqliteDatabase>::new())
            .service(SuccessStoriesRoute::<SqliteDatabase>::new())
            .service(CreateSuccessStoryRoute::<SqliteDatabase>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
