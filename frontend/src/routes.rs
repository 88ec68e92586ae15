use actix_files::NamedFile;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::{error, info};

use crate::client::ApiClient;
use crate::features::{DAY_NAMES, HOLIDAY_OPTIONS, WEATHER_OPTIONS};
use crate::types::{FormInput, PredictOutcome};

#[get("/")]
pub async fn index(req: HttpRequest) -> impl Responder {
    match NamedFile::open_async("./static/index.html").await {
        Ok(file) => file.into_response(&req),
        Err(_) => HttpResponse::InternalServerError().body("form page missing"),
    }
}

/// The fixed option sets; the page populates its selects from here.
#[get("/options")]
pub async fn options() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "holiday": HOLIDAY_OPTIONS,
        "weather": WEATHER_OPTIONS,
        "days": DAY_NAMES,
    }))
}

/// Build the ten-field record from the raw control values and forward it
/// to the prediction API. Transport failures come back in the same
/// `{"error": ...}` shape the API itself uses.
#[post("/predict")]
pub async fn predict(client: web::Data<ApiClient>, input: web::Json<FormInput>) -> impl Responder {
    let record = input.into_inner().into_record();
    info!(
        "forwarding record: {} K, hour {}, rush hour {}",
        record.temp, record.hour, record.is_rush_hour
    );

    match client.predict(&record).await {
        Ok(outcome) => {
            if let PredictOutcome::Volume {
                predicted_traffic_volume,
            } = &outcome
            {
                info!("predicted {predicted_traffic_volume} vehicles/hour");
            }
            HttpResponse::Ok().json(outcome)
        }
        Err(e) => {
            error!("prediction round trip failed: {e}");
            HttpResponse::Ok().json(PredictOutcome::Error {
                error: e.to_string(),
            })
        }
    }
}
