//! Reset client for the Librarium test environment.
//!
//! Posts the standard seed (one user, one book) to a running server's
//! `/reset` endpoint, putting it into a known state for test runs.

use serde_json::json;

const HOST: &str = "localhost";
const PORT: u16 = 23242;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let url = format!("http://{HOST}:{PORT}/reset");

    let seed = json!({
        "users": [{ "id": 1, "name": "Test User" }],
        "books": [{ "id": 1, "title": "Test Book" }],
    });

    let response = reqwest::Client::new().post(&url).json(&seed).send().await?;
    let status = response.status();
    let body: serde_json::Value = response.json().await?;

    println!("{status} {body}");

    Ok(())
}
