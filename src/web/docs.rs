//! Interactive documentation pages backed by `/openapi.json`

use axum::response::Html;

use crate::{OPENAPI_URL, core::openapi::API_TITLE};

const SWAGGER_UI_CDN: &str = "https://cdn.jsdelivr.net/npm/swagger-ui-dist@5";
const REDOC_CDN: &str = "https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js";

pub fn swagger_ui_page(openapi_url: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{title} - Swagger UI</title>
<link type="text/css" rel="stylesheet" href="{SWAGGER_UI_CDN}/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="{SWAGGER_UI_CDN}/swagger-ui-bundle.js"></script>
<script>
const ui = SwaggerUIBundle({{
    url: '{openapi_url}',
    dom_id: '#swagger-ui',
    layout: 'BaseLayout',
    deepLinking: true,
    showExtensions: true,
    showCommonExtensions: true,
    presets: [
        SwaggerUIBundle.presets.apis,
        SwaggerUIBundle.SwaggerUIStandalonePreset
    ],
}})
</script>
</body>
</html>"#
    )
}

pub fn redoc_page(openapi_url: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{title} - ReDoc</title>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
  body {{
    margin: 0;
    padding: 0;
  }}
</style>
</head>
<body>
<redoc spec-url="{openapi_url}"></redoc>
<script src="{REDOC_CDN}"></script>
</body>
</html>"#
    )
}

#[axum_macros::debug_handler]
pub async fn swagger_ui_handler() -> Html<String> {
    Html(swagger_ui_page(OPENAPI_URL, API_TITLE))
}

#[axum_macros::debug_handler]
pub async fn redoc_handler() -> Html<String> {
    Html(redoc_page(OPENAPI_URL, API_TITLE))
}
