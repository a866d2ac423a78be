use actix_web::{
    web::{block, Data},
    HttpResponse, Result,
};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

use crate::pages;

pub async fn index(pool: Data<PgPool>) -> Result<HttpResponse, Error> {
    let conn = get_conn(&pool)?;

    let res = block(move || Question::get_published(&conn)).await?;
    let questions = res?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::index(&questions)))
}
