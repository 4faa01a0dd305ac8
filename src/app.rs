use std::net::TcpListener;
use std::path::PathBuf;

use actix_files::Files;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::controller::citas;
use crate::store::Store;

/// Run the application on a specified TCP listener, serving front-end files from `static_dir`
pub fn run(listener: TcpListener, store: Store, static_dir: PathBuf) -> anyhow::Result<Server> {
    // Wrap application data
    let store = web::Data::new(store);

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(store.clone())
            .service(citas::scope())
            // Registered last so it only sees what the API did not match
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
