use db::models::Question;

/// Render the index page listing published questions, newest first. The
/// caller is responsible for the ordering of `questions`.
pub fn index(questions: &[Question]) -> String {
    let body = if questions.is_empty() {
        "<p>No polls are available.</p>".to_string()
    } else {
        let items = questions
            .iter()
            .map(|question| format!("<li>{}</li>", escape(&question.question_text)))
            .collect::<String>();
        format!("<ul>{}</ul>", items)
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Polls</title></head>\n<body>\n{}\n</body>\n</html>\n",
        body
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
