//! Integration tests for the HTTP API.
//!
//! The router is driven fully in-process via `tower::ServiceExt::oneshot` —
//! no sockets, no external fixtures. The PDF used for happy-path tests is
//! generated at runtime with its xref offsets computed while writing, so the
//! fixture is valid by construction.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, Response, StatusCode};
use http_body_util::BodyExt;
use pdf_text_api::{api::create_router, ServerConfig};
use tower::ServiceExt;

// ── Test helpers ─────────────────────────────────────────────────────────────

const BOUNDARY: &str = "pdf-text-api-test-boundary";

fn router() -> axum::Router {
    create_router(ServerConfig::default())
}

fn router_without_tables() -> axum::Router {
    create_router(
        ServerConfig::builder()
            .extract_tables(false)
            .build()
            .unwrap(),
    )
}

/// Build a `POST /extract-text` request with one multipart field.
///
/// `filename: None` produces a plain (non-file) form field, which is how a
/// form without a file input arrives on the wire.
fn upload_request(field: &str, filename: Option<&str>, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    match filename {
        Some(name) => body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{name}\"\r\n\
                 Content-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        ),
        None => body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{field}\"\r\n\r\n").as_bytes(),
        ),
    }
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/extract-text")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: Response<Body>) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Generate a minimal one-text-line-per-page PDF.
///
/// Object layout: catalog (1), page tree (2), Helvetica font (3), then a
/// page/content-stream pair per page. Offsets are recorded while the buffer
/// is written, so the xref table is always consistent with the bytes.
fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let n = pages.len();
    let kids: String = (0..n)
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{kids}] /Count {n} >>"),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    for (i, text) in pages.iter().enumerate() {
        let content_obj = 5 + 2 * i;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {content_obj} 0 R >>"
        ));
        let escaped = text
            .replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)");
        let stream = format!("BT /F1 12 Tf 72 720 Td ({escaped}) Tj ET");
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for off in &offsets {
        out.extend_from_slice(format!("{off:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    out
}

// ── General endpoints ────────────────────────────────────────────────────────

#[tokio::test]
async fn home_returns_welcome() {
    let resp = router().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["status"], "success");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("PDF Text Extraction API"));
}

#[tokio::test]
async fn health_reports_healthy() {
    let resp = router().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "PDF Text Extraction API");
}

#[tokio::test]
async fn swagger_ui_is_served() {
    let resp = router().oneshot(get("/swagger")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("swagger-ui"));
    assert!(html.contains("/static/swagger.json"));
}

#[tokio::test]
async fn openapi_schema_is_valid_json() {
    let resp = router().oneshot(get("/static/swagger.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert!(json["paths"]["/extract-text"]["post"].is_object());
    assert_eq!(json["info"]["title"], "PDF Text Extraction API");
}

// ── Validation failures ──────────────────────────────────────────────────────

#[tokio::test]
async fn missing_file_field_is_400() {
    // A form with only a non-file field.
    let req = upload_request("comment", None, b"hello");
    let resp = router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "No file provided");
}

#[tokio::test]
async fn empty_filename_is_400() {
    let req = upload_request("file", Some(""), b"%PDF-1.4");
    let resp = router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "No file selected");
}

#[tokio::test]
async fn non_pdf_extension_is_400() {
    let req = upload_request("file", Some("notes.txt"), b"%PDF-1.4");
    let resp = router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "File must be a PDF");
}

// ── Extraction failures ──────────────────────────────────────────────────────

#[tokio::test]
async fn corrupt_pdf_is_500_with_sanitized_error() {
    let req = upload_request("file", Some("broken.pdf"), b"%PDF-1.4 then garbage");
    let resp = router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(resp).await;
    let error = json["error"].as_str().unwrap();
    assert!(!error.is_empty());
    // Internal parser detail must not reach the client.
    assert_eq!(error, "Failed to extract text from PDF");
}

#[tokio::test]
async fn renamed_non_pdf_is_500() {
    // Right extension, wrong bytes: fails the magic check server-side.
    let req = upload_request("file", Some("fake.pdf"), b"PK\x03\x04 actually a zip");
    let resp = router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(resp).await["error"].is_string());
}

// ── Successful extraction ────────────────────────────────────────────────────

#[tokio::test]
async fn single_page_hello_world() {
    let pdf = build_pdf(&["Hello World"]);
    let req = upload_request("file", Some("hello.pdf"), &pdf);
    let resp = router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let text = json["text"].as_str().unwrap();
    assert!(text.ends_with('\n'), "one trailing newline per page: {text:?}");
    assert_eq!(text.trim(), "Hello World");
    // Default config runs table detection; a prose-only page yields an
    // empty (but present) array.
    assert!(json["tables"].is_array());
}

#[tokio::test]
async fn multi_page_text_preserves_page_order() {
    let pdf = build_pdf(&["alpha", "bravo", "charlie"]);
    let req = upload_request("file", Some("phonetic.pdf"), &pdf);
    let resp = router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let text = json["text"].as_str().unwrap();
    assert!(text.ends_with('\n'));

    let segments: Vec<&str> = text.split_terminator('\n').map(str::trim).collect();
    assert_eq!(segments, vec!["alpha", "bravo", "charlie"]);
}

#[tokio::test]
async fn extraction_is_deterministic() {
    let pdf = build_pdf(&["repeatable content"]);

    let mut texts = Vec::new();
    for _ in 0..2 {
        let req = upload_request("file", Some("again.pdf"), &pdf);
        let resp = router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        texts.push(body_json(resp).await["text"].as_str().unwrap().to_string());
    }
    assert_eq!(texts[0], texts[1]);
}

#[tokio::test]
async fn tables_key_is_omitted_when_disabled() {
    let pdf = build_pdf(&["Hello World"]);
    let req = upload_request("file", Some("hello.pdf"), &pdf);
    let resp = router_without_tables().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert!(json["text"].is_string());
    assert!(json.get("tables").is_none());
}
