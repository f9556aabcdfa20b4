use imagelab_core::{allowed_file, parse_generate_response, GenerateResponse};

#[test]
fn decodes_full_success_body() {
    let response = parse_generate_response(
        r#"{"uploadedUrl": "/static/uploads/cat.png", "imageUrl": "/out/123.png"}"#,
    )
    .expect("valid body");
    assert_eq!(response.uploaded_url.as_deref(), Some("/static/uploads/cat.png"));
    assert_eq!(response.image_url.as_deref(), Some("/out/123.png"));
    assert!(response.has_image());
}

#[test]
fn empty_object_means_no_image() {
    let response = parse_generate_response("{}").expect("valid body");
    assert_eq!(response, GenerateResponse::default());
    assert!(!response.has_image());
}

#[test]
fn null_and_blank_image_url_mean_no_image() {
    let response = parse_generate_response(r#"{"imageUrl": null}"#).expect("valid body");
    assert!(!response.has_image());

    let response = parse_generate_response(r#"{"imageUrl": ""}"#).expect("valid body");
    assert!(!response.has_image());
}

#[test]
fn unknown_fields_are_ignored() {
    let response = parse_generate_response(
        r#"{"imageUrl": "/out/9.png", "model": "dall-e", "elapsedMs": 1200}"#,
    )
    .expect("valid body");
    assert_eq!(response.image_url.as_deref(), Some("/out/9.png"));
}

#[test]
fn non_json_body_is_an_error() {
    let err = parse_generate_response("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));

    assert!(parse_generate_response("").is_err());
}

#[test]
fn extension_whitelist_is_case_insensitive() {
    assert!(allowed_file("cat.png"));
    assert!(allowed_file("cat.PNG"));
    assert!(allowed_file("archive.tar.webp"));

    assert!(!allowed_file("cat"));
    assert!(!allowed_file("cat.txt"));
    assert!(!allowed_file("cat."));
}
