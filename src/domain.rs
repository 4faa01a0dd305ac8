mod cita;
mod fecha_cita;

pub use cita::{Cita, CitaForm, NewCita, MISSING_FIELDS};
pub use fecha_cita::FechaCita;
