//! HTML rendering for the book form and results.

use crate::NO_CUSTOM_STYLE;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;
use storyloom_core::{IllustratedBook, IllustratedChapter};

const TITLE: &str = "Storyloom Book Generator";

const STYLE: &str = "body{font-family:Georgia,serif;max-width:52rem;margin:2rem auto;padding:0 1rem;line-height:1.55}\
form{display:grid;gap:.8rem;padding:1rem;border:1px solid #ccc;border-radius:6px}\
textarea{min-height:12rem}\
figure{margin:1rem 0}img{max-width:100%}\
.error{color:#a40000}\
button[disabled]{opacity:.6}";

const BUSY_SCRIPT: &str = "document.querySelector('form').addEventListener('submit',function(e){\
var b=e.target.querySelector('button');b.disabled=true;b.textContent='Generating your book...';});";

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn option(value: &str) -> String {
    format!(
        "<option value=\"{}\">{}</option>",
        encode_double_quoted_attribute(value),
        encode_text(value)
    )
}

fn paragraphs(out: &mut String, text: &str) {
    for block in text.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
        let _ = writeln!(
            out,
            "<p>{}</p>",
            encode_text(block).replace('\n', "<br>\n")
        );
    }
}

/// The book form: reference upload, description, genre and style dropdowns.
pub fn render_form(genres: &[String], custom_styles: &[String]) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{TITLE}</h1>");
    body.push_str("<form method=\"post\" action=\"/books\" enctype=\"multipart/form-data\">\n");
    body.push_str(
        "<label>Upload Reference Photo <input type=\"file\" name=\"reference\" \
         accept=\".png,.jpg,.jpeg,image/png,image/jpeg\"></label>\n",
    );
    body.push_str(
        "<label>Describe Your Book Concept<br>\
         <textarea name=\"description\" required></textarea></label>\n",
    );

    body.push_str("<label>Select Book Genre <select name=\"genre\">");
    for genre in genres {
        body.push_str(&option(genre));
    }
    body.push_str("</select></label>\n");

    body.push_str("<label>Select Art Style (Optional) <select name=\"custom_style\">");
    body.push_str(&option(NO_CUSTOM_STYLE));
    for style in custom_styles {
        body.push_str(&option(style));
    }
    body.push_str("</select></label>\n");

    body.push_str("<button type=\"submit\">Generate Book</button>\n</form>\n");
    let _ = writeln!(body, "<script>{BUSY_SCRIPT}</script>");
    page(&body)
}

fn render_chapter(out: &mut String, chapter: &IllustratedChapter) {
    let number = chapter.number();
    let _ = writeln!(out, "<section class=\"chapter\">\n<h3>Chapter {number}</h3>");
    paragraphs(out, chapter.text());

    match (chapter.illustration(), chapter.illustration_error()) {
        (Some(image), _) => {
            let _ = writeln!(
                out,
                "<figure><img src=\"{}\" alt=\"Chapter {number} Illustration\">\
                 <figcaption>Chapter {number} Illustration</figcaption></figure>",
                encode_double_quoted_attribute(&image.data_uri())
            );
        }
        (None, Some(error)) => {
            let _ = writeln!(
                out,
                "<p class=\"error\">Illustration unavailable: {}</p>",
                encode_text(error)
            );
        }
        (None, None) => {}
    }
    out.push_str("</section>\n");
}

/// A finished book: narrative, then each chapter with its illustration.
pub fn render_book(book: &IllustratedBook) -> String {
    let mut body = String::new();
    body.push_str("<h1>Your Generated Book</h1>\n<h2>Book Narrative</h2>\n");
    paragraphs(&mut body, book.narrative());

    body.push_str("<h2>Chapters</h2>\n");
    for chapter in book.chapters() {
        render_chapter(&mut body, chapter);
    }
    body.push_str("<p><a href=\"/\">Generate another book</a></p>\n");
    page(&body)
}

/// An error page.
pub fn render_error(message: &str) -> String {
    let body = format!(
        "<h1>Book generation failed</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back</a></p>\n",
        encode_text(message)
    );
    page(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyloom_core::Illustration;

    #[test]
    fn form_lists_none_before_custom_styles_and_escapes_names() {
        let html = render_form(
            &["scifi".to_string()],
            &["manga".to_string(), "<b>bold</b>".to_string()],
        );
        let none = html.find("<option value=\"None\">").unwrap();
        let manga = html.find("<option value=\"manga\">").unwrap();
        assert!(none < manga);
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn book_pairs_images_and_failures_by_chapter() {
        let book = IllustratedBook::new(
            "Outline & plan",
            "Ink wash",
            vec![
                IllustratedChapter::illustrated(1, "First", Illustration::png(vec![1, 2], "p")),
                IllustratedChapter::failed(2, "Second", "backend down"),
            ],
        );
        let html = render_book(&book);

        assert!(html.contains("<p>Outline &amp; plan</p>"));
        assert!(html.contains("<h3>Chapter 1</h3>"));
        assert!(html.contains("src=\"data:image/png;base64,AQI=\""));
        assert!(html.contains("Illustration unavailable: backend down"));
        assert_eq!(html.matches("<img").count(), 1);
    }
}
