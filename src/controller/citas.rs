use actix_web::dev::HttpServiceFactory;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use serde::{Deserialize, Serialize};

use thiserror::Error;

use crate::domain::{Cita, CitaForm, NewCita};
use crate::repo::CitaRepo;
use crate::store::Store;

/// Body of a successful creation
#[derive(Debug, Serialize)]
struct CitaCreated {
    message: &'static str,
    id: i64,
    cita: Cita,
}

/// Create endpoint for new appointments
#[tracing::instrument(name = "Schedule a new appointment", skip(store, body))]
async fn create(store: web::Data<Store>, body: web::Bytes) -> Result<HttpResponse, CitaError> {
    // Read the first JSON value of the raw body, whatever the declared content type.
    // Anything after that value is ignored.
    let form = CitaForm::deserialize(&mut serde_json::Deserializer::from_slice(&body))?;
    let new_cita: NewCita = form.try_into().map_err(CitaError::ValidationError)?;

    let id = CitaRepo::insert(store.pool(), &new_cita)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save appointment: {}", e);
            CitaError::StoreError(e)
        })?;

    let cita = new_cita.with_id(id);
    tracing::info!(id, "Appointment scheduled");
    tracing::info!("{}", cita.confirmation_notice());

    Ok(HttpResponse::Ok().json(CitaCreated {
        message: "Cita agendada con éxito",
        id,
        cita,
    }))
}

async fn method_not_allowed() -> Result<HttpResponse, CitaError> {
    Err(CitaError::MethodNotAllowed)
}

#[derive(Debug, Error)]
pub enum CitaError {
    #[error("Error al decodificar JSON: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("{0}")]
    ValidationError(String),

    // Never expose the driver error to the client
    #[error("Error interno del servidor al guardar la cita")]
    StoreError(#[from] crate::error::Error),

    #[error("Método no permitido")]
    MethodNotAllowed,
}

impl ResponseError for CitaError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::DecodeError(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

/// Appointment API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/api/cita").service(
        web::resource("")
            .route(web::post().to(create))
            .default_service(web::to(method_not_allowed)),
    )
}
