use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use dragro_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::{AssistantClient, StripeService, WeatherClient},
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::*,
    swagger::swagger_config,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration file");

    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    let stripe_service = StripeService::new(config.stripe.clone());
    let weather_client = WeatherClient::new(config.weather.clone());
    let assistant_client = AssistantClient::new(config.assistant.clone());

    let usage_service = UsageService::new(pool.clone());
    let user_service = UserService::new(pool.clone(), usage_service.clone());
    let auth_service = AuthService::new(pool.clone(), jwt_service.clone());
    let plan_service = PlanService::new(pool.clone(), stripe_service.clone());
    let assistant_service = AssistantService::new(
        pool.clone(),
        assistant_client,
        user_service.clone(),
        usage_service.clone(),
    );
    let learning_service =
        LearningService::new(pool.clone(), user_service.clone(), usage_service.clone());
    let calendar_service = CalendarService::new(pool.clone(), usage_service.clone());
    let farm_service = FarmService::new(pool.clone());
    let weather_service = WeatherService::new(weather_client, farm_service.clone());
    let store_service = StoreService::new(pool.clone(), user_service.clone());
    let notification_service = NotificationService::new(pool.clone());

    // Hourly inactivity sweep (3+ days quiet, at most one nudge per day)
    {
        let sweep_service = notification_service.clone();
        tokio::spawn(async move {
            loop {
                match sweep_service.run_inactivity_sweep().await {
                    Ok(sent) if sent > 0 => {
                        log::info!("Inactivity sweep sent {} notifications", sent)
                    }
                    Ok(_) => {}
                    Err(e) => log::error!("Inactivity sweep failed: {:?}", e),
                }
                tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
            }
        });
    }

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(plan_service.clone()))
            .app_data(web::Data::new(assistant_service.clone()))
            .app_data(web::Data::new(learning_service.clone()))
            .app_data(web::Data::new(calendar_service.clone()))
            .app_data(web::Data::new(farm_service.clone()))
            .app_data(web::Data::new(weather_service.clone()))
            .app_data(web::Data::new(store_service.clone()))
            .app_data(web::Data::new(notification_service.clone()))
            .app_data(web::Data::new(stripe_service.clone()))
            .configure(swagger_config)
            .configure(handlers::webhook_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::auth_config)
                    .configure(handlers::user_config)
                    .configure(handlers::plans_config)
                    .configure(handlers::chat_config)
                    .configure(handlers::learning_config)
                    .configure(handlers::calendar_config)
                    .configure(handlers::farm_config)
                    .configure(handlers::weather_config)
                    .configure(handlers::store_config)
                    .configure(handlers::notifications_config)
                    .configure(handlers::admin_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
