#[cfg(test)]
pub mod tests {
    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{body::MessageBody, dev::ServiceResponse, error::Error, test, App};
    use chrono::{Duration, Utc};
    use diesel::PgConnection;

    use db::models::Question;

    use crate::routes::routes;

    pub async fn get_service(
    ) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
        test::init_service(App::new().data(db::new_pool()).configure(routes)).await
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get(route: &str) -> (u16, String) {
        let app = get_service().await;
        let req = test::TestRequest::get().uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let body = String::from_utf8(body.to_vec())
            .unwrap_or_else(|_| panic!("Could not convert Bytes -> String. status: {}", status));

        (status, body)
    }

    /// Insert a question published the given number of days offset to now,
    /// negative for questions in the past, positive for questions yet to
    /// be published.
    pub fn create_question(conn: &PgConnection, question_text: &str, days: i64) -> Question {
        let pub_date = Utc::now() + Duration::days(days);
        Question::create(conn, question_text.to_string(), pub_date).unwrap()
    }
}
