use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>iCal filter proxy</title>
</head>
<body>
  <h1>iCal filter proxy</h1>
  <p>
    Append a percent-encoded calendar URL to this address and subscribe to the
    result. Every event whose <code>SUMMARY</code> ends with <code>FALSE</code>
    is removed from the feed, everything else is passed through unchanged.
  </p>
  <pre>GET /https%3A%2F%2Fcalendar.example.com%2Fexport.ics</pre>
</body>
</html>
"#;

// static landing page for GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
