mod citas;

pub use citas::CitaRepo;
