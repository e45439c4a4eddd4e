use actix_cors::Cors;
use actix_multipart::{Field, Multipart};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, post, web};
use futures_util::TryStreamExt;
use log::{debug, error, info, warn};

use crate::formats::{self, SubtitleFormat};
use crate::model::TranscriptionResult;

#[get("/api/v1/health")]
pub async fn health_check() -> impl Responder {
    debug!("Health check endpoint called");
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Subtitle conversion service is running"
    }))
}

#[get("/api/v1/formats")]
pub async fn list_formats() -> impl Responder {
    let formats: Vec<&str> = SubtitleFormat::ALL.iter().map(|f| f.extension()).collect();
    HttpResponse::Ok().json(serde_json::json!({ "formats": formats }))
}

#[post("/api/v1/convert")]
pub async fn convert_upload(mut payload: Multipart) -> impl Responder {
    debug!("Conversion request received");

    let mut transcript_data: Option<Vec<u8>> = None;
    let mut format = SubtitleFormat::Srt;

    // Process multipart fields
    while let Some(field) = payload.try_next().await.unwrap_or(None) {
        match field.name() {
            Some("transcript") => match read_field_data(field).await {
                Ok(data) => {
                    debug!("Transcript data received: {} bytes", data.len());
                    transcript_data = Some(data);
                }
                Err(e) => {
                    error!("Failed to read transcript data: {e}");
                    return HttpResponse::BadRequest().json(serde_json::json!({
                        "error": "Failed to read transcript data"
                    }));
                }
            },
            Some("format") => {
                if let Ok(field_data) = read_field_data(field).await {
                    if let Ok(text) = String::from_utf8(field_data) {
                        match text.parse::<SubtitleFormat>() {
                            Ok(parsed) => {
                                format = parsed;
                                debug!("Output format set to: {format}");
                            }
                            Err(e) => {
                                warn!("Rejected conversion request: {e}");
                                return HttpResponse::BadRequest()
                                    .json(serde_json::json!({ "error": e }));
                            }
                        }
                    }
                }
            }
            _ => continue,
        }
    }

    let transcript_bytes = match transcript_data {
        Some(data) => data,
        None => {
            warn!("No transcript file provided in conversion request");
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "No transcript file provided"
            }));
        }
    };

    let result: TranscriptionResult = match serde_json::from_slice(&transcript_bytes) {
        Ok(result) => result,
        Err(e) => {
            error!("Failed to parse transcript JSON: {e}");
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Invalid transcript JSON: {}", e)
            }));
        }
    };

    info!(
        "Converting transcript: {} segments, language {}, format {format}",
        result.segments.len(),
        result.language
    );

    match formats::render(&result, format) {
        Ok(document) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(document),
        Err(e) => {
            error!("Conversion failed: {e}");
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Conversion failed: {}", e)
            }))
        }
    }
}

async fn read_field_data(mut field: Field) -> Result<Vec<u8>, actix_web::Error> {
    let mut data = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        data.extend_from_slice(&chunk);
    }
    debug!("Read field data: {} bytes", data.len());
    Ok(data)
}

pub async fn run_server(host: String, port: u16) -> std::io::Result<()> {
    info!("Starting subtitle conversion service");
    info!("Starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(50 * 1024 * 1024)) // 50MB
            .app_data(
                actix_multipart::form::MultipartFormConfig::default()
                    .total_limit(100 * 1024 * 1024), // 100MB
            )
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(health_check)
            .service(list_formats)
            .service(convert_upload)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
