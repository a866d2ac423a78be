use actix_web::web;

pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/polls").route("", web::get().to(questions::index)));
}
