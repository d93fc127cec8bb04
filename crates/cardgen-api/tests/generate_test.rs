//! Router-level integration tests for card generation and preview lookup.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use http_body_util::BodyExt;
use image::{ImageFormat, Rgb, RgbImage};
use serde_json::{json, Value};
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use cardgen_api::setup::routes::setup_routes;
use cardgen_api::state::AppState;
use cardgen_api::store::PreviewStore;
use cardgen_api::services::PhotoFetcher;
use cardgen_core::Config;
use cardgen_processing::CardComposer;

fn test_config() -> Config {
    Config {
        server_port: 8080,
        cors_origins: vec!["*".to_string()],
        public_base_url: "http://localhost:8080".to_string(),
        preview_ttl_secs: 3600,
        preview_sweep_interval_secs: 300,
        fetch_timeout_secs: 5,
        environment: "test".to_string(),
    }
}

fn test_app() -> axum::Router {
    let config = test_config();
    let previews = PreviewStore::new(Duration::from_secs(config.preview_ttl_secs));
    let sweeper = previews.spawn_sweeper(Duration::from_secs(config.preview_sweep_interval_secs));
    let photos = PhotoFetcher::new(Duration::from_secs(config.fetch_timeout_secs)).unwrap();

    let state = Arc::new(AppState {
        config: config.clone(),
        composer: CardComposer::new(),
        previews,
        photos,
        sweeper,
    });
    setup_routes(&config, state).unwrap()
}

async fn post_generate(app: &axum::Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-license")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn inline_png_base64() -> String {
    let img = RgbImage::from_pixel(64, 48, Rgb([30, 90, 170]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    BASE64.encode(buffer)
}

#[tokio::test]
async fn test_generate_without_photo_succeeds() {
    let app = test_app();
    let (status, body) = post_generate(
        &app,
        json!({
            "name": "Jane Doe",
            "address": "1 very long street address that exceeds the wrap threshold, City, Country"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["stats"]["dimensions"], "2400x1440");
    assert_eq!(body["stats"]["format"], "PNG");
    assert!(body["stats"]["size_bytes"].as_u64().unwrap() > 0);
    assert!(body["previewUrl"].as_str().unwrap().contains("/preview/"));

    // The payload is a decodable PNG of the advertised size
    let png = BASE64
        .decode(body["imageBase64"].as_str().unwrap())
        .unwrap();
    assert_eq!(png.len() as u64, body["stats"]["size_bytes"].as_u64().unwrap());
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn test_generate_with_inline_photo_succeeds() {
    let app = test_app();
    let (status, body) = post_generate(
        &app,
        json!({
            "name": "Jane Doe",
            "originalImage": format!("data:image/png;base64,{}", inline_png_base64())
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

fn inline_jpeg_base64_with_orientation_6() -> String {
    use img_parts::ImageEXIF;

    // Landscape source tagged orientation 6; decoding must turn it portrait.
    let img = RgbImage::from_pixel(64, 48, Rgb([200, 30, 30]));
    let mut jpeg_buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut jpeg_buf), ImageFormat::Jpeg)
        .unwrap();

    let field = exif::Field {
        tag: exif::Tag::Orientation,
        ifd_num: exif::In::PRIMARY,
        value: exif::Value::Short(vec![6]),
    };
    let mut writer = exif::experimental::Writer::new();
    writer.push_field(&field);
    let mut exif_buf = Cursor::new(Vec::new());
    writer.write(&mut exif_buf, false).unwrap();

    let mut jpeg = img_parts::jpeg::Jpeg::from_bytes(jpeg_buf.into()).unwrap();
    jpeg.set_exif(Some(exif_buf.into_inner().into()));
    BASE64.encode(jpeg.encoder().bytes())
}

#[tokio::test]
async fn test_inline_photo_with_orientation_6_renders_rotated() {
    let app = test_app();
    let (status, body) = post_generate(
        &app,
        json!({
            "name": "Jane Doe",
            "originalImage": inline_jpeg_base64_with_orientation_6()
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let png = BASE64.decode(body["imageBase64"].as_str().unwrap()).unwrap();
    let canvas = image::load_from_memory(&png).unwrap().to_rgb8();

    // Find the red photo blob in the right panel. Its bounding box must be
    // taller than wide: the landscape source was rotated before placement.
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (u32::MAX, 0u32, u32::MAX, 0u32);
    for (x, y, p) in canvas.enumerate_pixels() {
        if x >= 1200 && p.0[0] > 150 && p.0[1] < 90 && p.0[2] < 90 {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }
    assert!(max_x > min_x, "no photo pixels found in the photo panel");
    let (w, h) = (max_x - min_x + 1, max_y - min_y + 1);
    assert!(h > w, "photo not rotated: bounding box {w}x{h}");
}

#[tokio::test]
async fn test_generate_with_unreachable_remote_still_succeeds() {
    let app = test_app();
    // Nothing listens on the discard port; acquisition fails fast and the
    // composite degrades to the drawn error placeholder.
    let (status, body) = post_generate(
        &app,
        json!({
            "name": "Jane Doe",
            "originalImageUrl": "http://127.0.0.1:9/photo.jpg"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["stats"]["dimensions"], "2400x1440");
}

#[tokio::test]
async fn test_alias_fields_are_accepted() {
    let app = test_app();
    let (status, body) = post_generate(
        &app,
        json!({
            "name": "Jane Doe",
            "birthDate": "1990-01-01",
            "deliveryDate": "2020-06-01"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_preview_roundtrip_and_expiry_miss() {
    let app = test_app();
    let (_, body) = post_generate(&app, json!({"name": "Jane Doe"})).await;

    let preview_url = body["previewUrl"].as_str().unwrap();
    let path = &preview_url[preview_url.find("/preview/").unwrap()..];

    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(html.to_vec()).unwrap();
    assert!(html.contains("data:image/png;base64,"));

    // Never-issued identifier is a plain miss
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/preview/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}
