use std::sync::Arc;

use poem::endpoint::StaticFilesEndpoint;
use poem::listener::TcpListener;
use poem::{EndpointExt, Route, Server};
use poem_openapi::OpenApiService;

use alibi_backend::api::{
    AlibiApi, ArtifactApi, EmotionalEvaluationApi, FaceAnalysisApi, HealthApi, RequestLogger,
    UserApi,
};
use alibi_backend::app_data::AppData;
use alibi_backend::config::{self, Settings, database};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = config::init_logging() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let settings = Settings::from_env();

    // Connect to database and bring the schema up to date
    let db = database::connect(&settings)
        .await
        .expect("Failed to connect to database");

    database::migrate(&db)
        .await
        .expect("Failed to run migrations");

    // Build the stores once and share them across the API structs
    let app_data = Arc::new(AppData::init(db));

    let api_service = OpenApiService::new(
        (
            HealthApi,
            UserApi::new(Arc::clone(&app_data)),
            AlibiApi::new(Arc::clone(&app_data)),
            EmotionalEvaluationApi::new(Arc::clone(&app_data)),
            FaceAnalysisApi::new(Arc::clone(&app_data)),
            ArtifactApi::new(settings.public_dir().to_path_buf()),
        ),
        "Alibi Backend API",
        "1.0.0",
    )
    .server(format!("http://localhost:{}/api", settings.port()));

    let ui = api_service.swagger_ui();

    // Compose routes: API under /api, Swagger UI under /swagger, static
    // assets (including generated artifacts) from the public directory
    let app = Route::new()
        .nest("/api", api_service.with(RequestLogger))
        .nest("/swagger", ui)
        .nest(
            "/",
            StaticFilesEndpoint::new(settings.public_dir()).index_file("index.html"),
        );

    tracing::info!("Starting server on http://{}", settings.bind_addr());
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger",
        settings.port()
    );

    Server::new(TcpListener::bind(settings.bind_addr()))
        .run(app)
        .await
}
