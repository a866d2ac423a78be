use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;

mod pages;
mod routes;
mod tests;

use crate::routes::routes;
use errors::ErrorResponse;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::new_pool();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .data(pool.clone())
            .configure(routes)
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
            }))
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}
