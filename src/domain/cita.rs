use serde::{Deserialize, Deserializer, Serialize};

use super::FechaCita;

/// Message returned when any of the mandatory fields is missing
pub const MISSING_FIELDS: &str = "Faltan campos obligatorios (Nombres, Apellidos, Fecha de Cita)";

/// JSON deserialization wrapper for incoming appointment requests.
///
/// Absent or `null` text fields decode as empty strings and a client-supplied `id` is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CitaForm {
    #[serde(deserialize_with = "string_or_null")]
    pub tramite: String,
    #[serde(deserialize_with = "string_or_null")]
    pub institucion: String,
    #[serde(deserialize_with = "string_or_null")]
    pub nombres: String,
    #[serde(deserialize_with = "string_or_null")]
    pub apellidos: String,
    #[serde(deserialize_with = "string_or_null")]
    pub telefono: String,
    #[serde(deserialize_with = "string_or_null")]
    pub correo_electronico: String,
    #[serde(deserialize_with = "string_or_null")]
    pub cedula: String,
    #[serde(deserialize_with = "string_or_null")]
    pub direccion: String,
    pub fecha_cita: Option<FechaCita>,
}

fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// New appointment request, ready to be inserted
#[derive(Debug, Clone)]
pub struct NewCita {
    pub tramite: String,
    pub institucion: String,
    pub nombres: String,
    pub apellidos: String,
    pub telefono: String,
    pub correo_electronico: String,
    pub cedula: String,
    pub direccion: String,
    pub fecha_cita: FechaCita,
}

impl TryFrom<CitaForm> for NewCita {
    type Error = String;

    // Only names, surnames and the date are mandatory here, even though every column is NOT NULL
    fn try_from(form: CitaForm) -> Result<Self, Self::Error> {
        let fecha_cita = match form.fecha_cita {
            Some(fecha)
                if !fecha.is_zero() && !form.nombres.is_empty() && !form.apellidos.is_empty() =>
            {
                fecha
            }
            _ => return Err(MISSING_FIELDS.into()),
        };

        Ok(Self {
            tramite: form.tramite,
            institucion: form.institucion,
            nombres: form.nombres,
            apellidos: form.apellidos,
            telefono: form.telefono,
            correo_electronico: form.correo_electronico,
            cedula: form.cedula,
            direccion: form.direccion,
            fecha_cita,
        })
    }
}

impl NewCita {
    /// Attach the store-assigned id
    pub fn with_id(self, id: i64) -> Cita {
        Cita {
            id,
            tramite: self.tramite,
            institucion: self.institucion,
            nombres: self.nombres,
            apellidos: self.apellidos,
            telefono: self.telefono,
            correo_electronico: self.correo_electronico,
            cedula: self.cedula,
            direccion: self.direccion,
            fecha_cita: self.fecha_cita,
        }
    }
}

/// Stored appointment record
#[derive(Debug, Clone, Serialize)]
pub struct Cita {
    /// Store-assigned id
    pub id: i64,
    pub tramite: String,
    pub institucion: String,
    pub nombres: String,
    pub apellidos: String,
    pub telefono: String,
    pub correo_electronico: String,
    pub cedula: String,
    pub direccion: String,
    pub fecha_cita: FechaCita,
}

impl Cita {
    /// Plain-text notice listing every field of a newly scheduled appointment
    pub fn confirmation_notice(&self) -> String {
        format!(
            "Nueva cita agendada (#{}):\n\
             Trámite: {}\n\
             Institución: {}\n\
             Nombres: {}\n\
             Apellidos: {}\n\
             Teléfono: {}\n\
             Correo electrónico: {}\n\
             Cédula: {}\n\
             Dirección: {}\n\
             Fecha: {}",
            self.id,
            self.tramite,
            self.institucion,
            self.nombres,
            self.apellidos,
            self.telefono,
            self.correo_electronico,
            self.cedula,
            self.direccion,
            self.fecha_cita,
        )
    }
}
