pub mod inference;
pub mod models;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use log::{error, info, warn};

use inference::ModelPipeline;
use models::{ApiError, PredictionResponse, TrafficData, Welcome};

const DEFAULT_MODEL_PATH: &str = "traffic_model.onnx";
const MODEL_NOT_LOADED: &str = "Model not loaded. Please check API server logs.";

struct AppState {
    /// Loaded once at startup; `None` when the artifact is missing, in
    /// which case every predict call degrades to the error branch.
    model: Option<ModelPipeline>,
}

async fn index() -> impl Responder {
    HttpResponse::Ok().json(Welcome {
        message: "Welcome to the Traffic Prediction API.",
    })
}

async fn model_info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(inference::model_info(state.model.is_some()))
}

/// Predict the hourly traffic volume for one record.
///
/// Replies 200 for both outcomes: `{"predicted_traffic_volume": <int>}` on
/// success, `{"error": "<message>"}` when no model is loaded or the
/// pipeline fails. Callers treat any non-2xx as a transport failure.
async fn predict(state: web::Data<AppState>, data: web::Json<TrafficData>) -> impl Responder {
    let Some(model) = state.model.as_ref() else {
        return HttpResponse::Ok().json(ApiError::new(MODEL_NOT_LOADED));
    };

    let features = data.to_feature_vector();

    match model.predict(&features) {
        Ok(volume) => {
            info!("predicted traffic volume: {} vehicles/hour", volume as i64);
            HttpResponse::Ok().json(PredictionResponse {
                predicted_traffic_volume: volume as i64,
            })
        }
        Err(e) => {
            error!("prediction failed: {e}");
            HttpResponse::Ok().json(ApiError::new(format!(
                "An error occurred during prediction: {e}"
            )))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    let model_path = std::env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());
    let model = match ModelPipeline::load(&model_path) {
        Ok(model) => {
            info!("✅ model pipeline loaded from '{model_path}'");
            Some(model)
        }
        Err(e) => {
            warn!("model file '{model_path}' could not be loaded: {e}");
            warn!("predictions will return an error until a trained pipeline is exported");
            None
        }
    };

    let state = web::Data::new(AppState { model });

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let workers = std::env::var("WORKERS")
        .ok()
        .and_then(|w| w.parse().ok())
        .unwrap_or_else(num_cpus::get);

    let bind_address = format!("{host}:{port}");
    info!("🚀 Traffic Prediction API listening on http://{bind_address}");

    HttpServer::new(move || {
        // The form page runs on its own origin.
        let cors = Cors::default()
            .allowed_origin("http://localhost:8501")
            .allowed_origin("http://127.0.0.1:8501")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(16 * 1024))
            .route("/", web::get().to(index))
            .route("/model-info", web::get().to(model_info))
            .route("/predict", web::post().to(predict))
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(ApiError::new("Endpoint not found"))
            }))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await
}
