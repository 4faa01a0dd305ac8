/// Appointment creation endpoint
pub mod citas;
