use sqlx::SqliteExecutor;

use crate::domain::NewCita;
use crate::error::{Error, Result};

/// Repository for interfacing with the `citas` table
pub struct CitaRepo;

impl CitaRepo {
    #[tracing::instrument(name = "Create the citas table", skip(executor))]
    pub async fn create_table<'con>(executor: impl SqliteExecutor<'con>) -> sqlx::Result<()> {
        sqlx::query(
            "create table if not exists citas (
                id integer primary key autoincrement,
                tramite text not null,
                institucion text not null,
                nombres text not null,
                apellidos text not null,
                telefono text not null,
                correo_electronico text not null,
                cedula text not null,
                direccion text not null,
                fecha_cita text not null
            )",
        )
        .execute(executor)
        .await?;

        Ok(())
    }

    #[tracing::instrument(name = "Insert appointment", skip(executor, cita))]
    pub async fn insert<'con>(executor: impl SqliteExecutor<'con>, cita: &NewCita) -> Result<i64> {
        let result = sqlx::query(
            "insert into citas(
                tramite, institucion, nombres, apellidos, telefono,
                correo_electronico, cedula, direccion, fecha_cita
            ) values (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(cita.tramite.as_str())
        .bind(cita.institucion.as_str())
        .bind(cita.nombres.as_str())
        .bind(cita.apellidos.as_str())
        .bind(cita.telefono.as_str())
        .bind(cita.correo_electronico.as_str())
        .bind(cita.cedula.as_str())
        .bind(cita.direccion.as_str())
        .bind(cita.fecha_cita.to_string())
        .execute(executor)
        .await
        .map_err(Error::InsertFailed)?;

        if result.rows_affected() != 1 {
            return Err(Error::MissingInsertId);
        }

        Ok(result.last_insert_rowid())
    }
}
