//! Server-side HTML for the form and results pages.

use crate::package::StudyPackage;

const STYLE: &str = "body{font-family:sans-serif;max-width:820px;margin:2em auto;padding:0 1em;color:#222}\
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:4px 10px;text-align:left}\
label{display:block;margin-top:.8em}textarea{width:100%}.answer{color:#2a7a2a}";

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        html_escape(title),
        STYLE,
        body
    )
}

/// Input form posting to `/generate`.
pub fn render_index(subjects: &[&str]) -> String {
    let options: String = subjects
        .iter()
        .map(|s| format!("<option value=\"{}\"></option>", html_escape(s)))
        .collect();

    let body = format!(
        "<h1>Study Planner</h1>\n\
         <form method=\"post\" action=\"/generate\">\n\
         <label>Subject <input name=\"subject\" list=\"subjects\" value=\"General\"></label>\n\
         <datalist id=\"subjects\">{}</datalist>\n\
         <label>Total study hours <input name=\"hours\" type=\"number\" value=\"3\"></label>\n\
         <label>Quiz difficulty <select name=\"difficulty\">\
         <option value=\"\">any</option><option value=\"easy\">easy</option>\
         <option value=\"medium\">medium</option><option value=\"hard\">hard</option>\
         </select></label>\n\
         <label>Notes to summarize <textarea name=\"sample_text\" rows=\"8\"></textarea></label>\n\
         <p><button type=\"submit\">Generate</button></p>\n\
         </form>",
        options
    );
    page("Study Planner", &body)
}

/// Results page for one generated package.
pub fn render_results(package: &StudyPackage) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<h1>Study plan: {}</h1>\n<p>{} hours total.</p>\n",
        html_escape(&package.subject),
        package.hours
    ));

    body.push_str("<h2>Schedule</h2>\n<table>\n<tr><th>Day</th><th>Hours</th><th>Focus</th></tr>\n");
    for session in &package.plan {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            html_escape(&session.day_label),
            session.hours,
            html_escape(&session.focus)
        ));
    }
    body.push_str("</table>\n");
    body.push_str(&format!(
        "<form method=\"get\" action=\"/download_schedule\">\
         <input type=\"hidden\" name=\"subject\" value=\"{}\">\
         <input type=\"hidden\" name=\"hours\" value=\"{}\">\
         <button type=\"submit\">Download CSV</button></form>\n",
        html_escape(&package.subject),
        package.hours
    ));

    body.push_str("<h2>Quiz</h2>\n<ol>\n");
    for question in &package.quiz {
        let options: String = question
            .options
            .iter()
            .map(|o| format!("<li>{}</li>", html_escape(o)))
            .collect();
        body.push_str(&format!(
            "<li><p>{} <small>({})</small></p><ul>{}</ul>\
             <details><summary>Answer</summary><span class=\"answer\">{}</span></details></li>\n",
            html_escape(&question.text),
            question.difficulty,
            options,
            html_escape(&question.correct_answer)
        ));
    }
    body.push_str("</ol>\n");

    body.push_str(&format!(
        "<h2>Summary</h2>\n<p>{}</p>\n",
        html_escape(&package.summary)
    ));

    body.push_str("<h2>Study tips</h2>\n<ul>\n");
    for tip in &package.tips {
        body.push_str(&format!("<li>{}</li>\n", html_escape(tip)));
    }
    body.push_str("</ul>\n");
    if !package.keywords.is_empty() {
        body.push_str(&format!(
            "<p>Keywords: {}</p>\n",
            html_escape(&package.keywords.join(", "))
        ));
    }

    body.push_str("<p><a href=\"/\">Plan another subject</a></p>");
    page(&format!("Study plan: {}", package.subject), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyplan_core::{Difficulty, Question, ScheduleSession};

    #[test]
    fn test_escape() {
        assert_eq!(
            html_escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_results_escape_user_input() {
        let package = StudyPackage {
            subject: "<script>".into(),
            hours: 1,
            plan: vec![ScheduleSession {
                day_label: "Day 1".into(),
                hours: 1,
                focus: "<script> - topic 1".into(),
            }],
            quiz: vec![Question::new("Q?", ["a", "b", "c", "d"], "a", Difficulty::Easy)],
            summary: "x < y".into(),
            keywords: vec!["script".into()],
            tips: vec!["Review the keyword: 'script' daily for 10 minutes.".into()],
        };
        let html = render_results(&package);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt; - topic 1"));
        assert!(html.contains("x &lt; y"));
        assert!(html.contains("(easy)"));
    }

    #[test]
    fn test_index_lists_subjects() {
        let html = render_index(&["math", "cs"]);
        assert!(html.contains("<option value=\"math\"></option>"));
        assert!(html.contains("action=\"/generate\""));
    }
}
