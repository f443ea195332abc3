use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};

#[derive(Debug)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Every book endpoint, in the order they are advertised.
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: "/books",
        description: "Get all books",
    },
    Endpoint {
        method: "GET",
        path: "/books/:id",
        description: "Get a specific book",
    },
    Endpoint {
        method: "POST",
        path: "/books",
        description: "Create a new book",
    },
    Endpoint {
        method: "PUT",
        path: "/books/:id",
        description: "Update a book",
    },
    Endpoint {
        method: "DELETE",
        path: "/books/:id",
        description: "Delete a book",
    },
];

#[derive(Debug, Serialize)]
pub struct DescribeApiResponse {
    message: &'static str,
    #[serde(serialize_with = "serialize_endpoints")]
    endpoints: &'static [Endpoint],
}

/// Serializes as `{"GET /books": "Get all books", ...}` keeping the declaration order.
fn serialize_endpoints<S: Serializer>(
    endpoints: &&'static [Endpoint],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(endpoints.iter().map(|endpoint| {
        (
            format!("{} {}", endpoint.method, endpoint.path),
            endpoint.description,
        )
    }))
}

impl IntoResponse for DescribeApiResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn describe_api() -> DescribeApiResponse {
    DescribeApiResponse {
        message: "Welcome to the Books API",
        endpoints: ENDPOINTS,
    }
}
