use std::net::TcpListener;
use std::path::PathBuf;

use reqwest::{Client, Method, Response};

use serde::Serialize;

use tempfile::TempDir;

use citas::app;
use citas::store::Store;

pub const INDEX_HTML: &str = "<!doctype html><title>Agendar cita</title><h1>Agendar cita</h1>";

#[derive(Debug, Default, Serialize)]
pub struct CitaPayload {
    pub tramite: Option<String>,
    pub institucion: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub telefono: Option<String>,
    pub correo_electronico: Option<String>,
    pub cedula: Option<String>,
    pub direccion: Option<String>,
    pub fecha_cita: Option<String>,
}

impl CitaPayload {
    /// A fully populated, valid appointment request
    pub fn valid() -> Self {
        use fake::faker::internet::en::SafeEmail;
        use fake::faker::name::en::{FirstName, LastName};
        use fake::Fake;

        Self {
            tramite: Some("Renovación de pasaporte".into()),
            institucion: Some("Dirección General de Pasaportes".into()),
            nombres: Some(FirstName().fake()),
            apellidos: Some(LastName().fake()),
            telefono: Some("809-555-0101".into()),
            correo_electronico: Some(SafeEmail().fake()),
            cedula: Some("001-0000000-1".into()),
            direccion: Some("Av. Independencia 12".into()),
            fecha_cita: Some("2025-06-15T09:30:00-05:00".into()),
        }
    }
}

pub struct TestApp {
    addr: String,

    pub client: Client,
    pub store: Store,
    pub static_dir: PathBuf,
    // Removed, with the database and static files, when the app is dropped
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");

        let static_dir = dir.path().join("public");
        std::fs::create_dir(&static_dir).expect("Failed to create static directory");
        std::fs::write(static_dir.join("index.html"), INDEX_HTML)
            .expect("Failed to write index.html");

        let store = Store::open(dir.path().join("citas.db"))
            .await
            .expect("Failed to open appointment store");

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let server = app::run(listener, store.clone(), static_dir.clone())
            .expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        let client = Client::new();

        Self {
            addr,
            client,
            store,
            static_dir,
            _dir: dir,
        }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn cita_create(&self, payload: &CitaPayload) -> reqwest::Result<Response> {
        self.request(Method::POST, "api/cita")
            .json(payload)
            .send()
            .await
    }

    pub async fn cita_create_raw(&self, body: &'static str) -> reqwest::Result<Response> {
        self.request(Method::POST, "api/cita")
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
    }

    pub async fn cita_count(&self) -> i64 {
        sqlx::query_scalar("select count(*) from citas")
            .fetch_one(self.store.pool())
            .await
            .expect("Failed to count appointments")
    }
}
