//! OpenAPI document assembled from handler annotations, and the HTML viewer page.

use crate::handlers;
use crate::model::{Purpose, PurposeCreate, PurposeUpdate};
use crate::response::{IndexBody, MessageBody};
use axum::{response::Html, Json};
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api/openapi.json";
pub const DOCS_PATH: &str = "/api/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Purpose Management API",
        version = "1.0.0",
        description = "API for managing privacy-related Purpose entities used to capture reasons for storing sensitive data",
        contact(email = "admin@example.com"),
        license(name = "MIT")
    ),
    paths(
        handlers::index::index,
        handlers::purpose::create,
        handlers::purpose::list,
        handlers::purpose::read,
        handlers::purpose::update,
        handlers::purpose::delete,
    ),
    components(schemas(Purpose, PurposeCreate, PurposeUpdate, MessageBody, IndexBody)),
    tags(
        (name = "root", description = "API information"),
        (name = "purposes", description = "Reasons for retaining sensitive data")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

const DOCS_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Purpose Management API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

pub async fn docs_page() -> Html<&'static str> {
    Html(DOCS_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["openapi"].as_str().unwrap().starts_with("3.1"));
        assert_eq!(doc["info"]["title"], "Purpose Management API");
        assert_eq!(doc["info"]["version"], "1.0.0");
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/"));
        assert!(paths["/purposes"].get("get").is_some());
        assert!(paths["/purposes"].get("post").is_some());
        for method in ["get", "put", "delete"] {
            assert!(paths["/purposes/{id}"].get(method).is_some(), "missing {}", method);
        }
    }

    #[test]
    fn schemas_are_registered() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = doc["components"]["schemas"].as_object().unwrap();
        for name in ["Purpose", "PurposeCreate", "PurposeUpdate", "MessageBody"] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
        assert_eq!(schemas["PurposeCreate"]["additionalProperties"], false);
        assert_eq!(schemas["PurposeCreate"]["required"], serde_json::json!(["name"]));
    }

    #[test]
    fn docs_page_points_at_document() {
        assert!(DOCS_HTML.contains(OPENAPI_PATH));
    }
}
