use chrono::{DateTime, Duration, Utc};
use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions::{self, table};

#[derive(Debug, Deserialize, Identifiable, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// Questions that have reached their publication date, newest first.
    pub fn get_published(conn: &PgConnection) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{pub_date, questions as questions_table};

        let published = questions_table
            .filter(pub_date.le(Utc::now()))
            .order(pub_date.desc())
            .load::<Question>(conn)?;

        Ok(published)
    }

    /// True when pub_date falls within the trailing 24 hour window ending
    /// now. Future publication dates never count as recent.
    pub fn was_published_recently(&self) -> bool {
        let now = Utc::now();
        self.pub_date <= now && self.pub_date > now - Duration::days(1)
    }
}
