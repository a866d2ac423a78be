table! {
    questions (id) {
        id -> Int4,
        question_text -> Varchar,
        pub_date -> Timestamptz,
    }
}
