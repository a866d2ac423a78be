use chrono::{Duration, Utc};
use diesel::{self, ExpressionMethods, RunQueryDsl};
use dotenv::dotenv;

use db::{get_conn, new_pool, schema::questions};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let conn = get_conn(&pool).unwrap();

    for (question_text, days_ago) in &[
        ("What's your favourite editor?", 20i64),
        ("Tabs or spaces?", 5),
        ("How do you deploy to production?", 1),
        ("Which database do you reach for first?", 0),
    ] {
        diesel::insert_into(questions::table)
            .values((
                questions::dsl::question_text.eq(*question_text),
                questions::dsl::pub_date.eq(Utc::now() - Duration::days(*days_ago)),
            ))
            .execute(&conn)
            .unwrap();
    }
}
