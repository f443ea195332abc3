//! Manual smoke test against a running server.
//!
//! Calls every endpoint once, in order, printing the status and body of each response.
//! Nothing is asserted and failures never stop the run.

use anyhow::Context;
use clap::Parser;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(author, about, version)]
struct CliArgs {
    /// Base URL of the running server.
    #[clap(long, env = "BOOKS_API_URL", default_value = "http://localhost:3000")]
    base_url: String,
}

/// Response body, decoded as JSON when possible.
enum Body {
    Json(Value),
    Text(String),
}

struct Smoke {
    client: Client,
    base_url: String,
}

impl Smoke {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Body)> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        let mut request = self
            .client
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read response body")?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::Text(text),
        };

        Ok((status, body))
    }

    /// Performs one request and prints its outcome. Returns the decoded body, if any.
    async fn scenario(&self, method: Method, path: &str, body: Option<Value>) -> Option<Value> {
        match self.request(method, path, body).await {
            Ok((status, body)) => {
                println!("Status: {}", status.as_u16());

                match body {
                    Body::Json(value) => {
                        let pretty =
                            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
                        println!("Response: {pretty}");

                        Some(value)
                    }
                    Body::Text(text) => {
                        println!("Response: {text}");

                        None
                    }
                }
            }
            Err(err) => {
                eprintln!("Error: {err:#}");

                None
            }
        }
    }

    async fn get_all_books(&self) {
        println!("\n1. Testing GET /books - Get all books");
        self.scenario(Method::GET, "/books", None).await;
    }

    async fn get_book_by_id(&self) {
        println!("\n2. Testing GET /books/1 - Get book by ID");
        self.scenario(Method::GET, "/books/1", None).await;
    }

    async fn create_book(&self) -> Option<u64> {
        println!("\n3. Testing POST /books - Create new book");

        let body = json!({
            "title": "Pride and Prejudice",
            "author": "Jane Austen",
        });

        self.scenario(Method::POST, "/books", Some(body))
            .await
            .and_then(|value| value["data"]["id"].as_u64())
    }

    async fn update_book(&self, id: u64) {
        println!("\n4. Testing PUT /books/{id} - Update book");

        let body = json!({
            "title": "Updated Pride and Prejudice",
            "author": "Jane Austen (Updated)",
        });

        self.scenario(Method::PUT, &format!("/books/{id}"), Some(body))
            .await;
    }

    async fn delete_book(&self, id: u64) {
        println!("\n5. Testing DELETE /books/{id} - Delete book");
        self.scenario(Method::DELETE, &format!("/books/{id}"), None)
            .await;
    }

    async fn error_handling(&self) {
        println!("\n6. Testing Error Handling");

        println!("\n   Testing GET /books/999 - Non-existent book");
        self.scenario(Method::GET, "/books/999", None).await;

        println!("\n   Testing POST /books - Missing required fields");
        let body = json!({ "title": "Incomplete Book" });
        self.scenario(Method::POST, "/books", Some(body)).await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli_args = CliArgs::parse();

    let smoke = Smoke {
        client: Client::new(),
        base_url: cli_args.base_url,
    };

    println!("Starting Books API smoke test");
    println!("Make sure the server is running on {}", smoke.base_url);

    smoke.get_all_books().await;
    smoke.get_book_by_id().await;

    if let Some(id) = smoke.create_book().await {
        smoke.update_book(id).await;
        smoke.delete_book(id).await;
    }

    smoke.error_handling().await;

    println!("\nAll scenarios completed");

    Ok(())
}
