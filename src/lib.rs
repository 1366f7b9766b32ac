use std::time::Duration;

/// Endpoint the tester probes when nothing else is configured.
pub const DEFAULT_URL: &str = "http://localhost:5000";

/// Substring the response body must contain for the check to pass.
pub const EXPECTED_BODY: &str = "Hello from your containerized Flask app!";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, clap::Parser)]
pub struct Args {
    // TO PROBE ANOTHER DEPLOYMENT, SET --url OR TARGET_URL
    #[arg(long, default_value = DEFAULT_URL, env = "TARGET_URL")]
    pub url: String,
}

/// Outcome of a single probe against the target app.
#[derive(Debug)]
pub enum Check {
    Passed { status: u16, body: String },
    UnexpectedStatus(u16),
    ContentMismatch { body: String },
    ConnectionFailed { detail: String },
    TimedOut,
    RequestError { detail: String },
}

/// Issues one GET to `url` and classifies the result.
///
/// Exactly one attempt, no retries. A non-200 status short-circuits
/// before the body is read. `Passed` carries the body trimmed for
/// display; `ContentMismatch` carries it untouched.
pub async fn check_app(url: &str, timeout: Duration) -> Check {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => return Check::RequestError { detail: e.to_string() },
    };

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) if e.is_timeout() => return Check::TimedOut,
        Err(e) if e.is_connect() => return Check::ConnectionFailed { detail: e.to_string() },
        Err(e) => return Check::RequestError { detail: e.to_string() },
    };

    let status = response.status().as_u16();
    if status != 200 {
        return Check::UnexpectedStatus(status);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) if e.is_timeout() => return Check::TimedOut,
        Err(e) => return Check::RequestError { detail: e.to_string() },
    };

    if body.contains(EXPECTED_BODY) {
        Check::Passed {
            status,
            body: body.trim().to_string(),
        }
    } else {
        Check::ContentMismatch { body }
    }
}

/// Runs the smoke test against `url`, printing one diagnostic line per
/// check, and returns whether everything passed.
pub async fn run_test(url: &str) -> bool {
    println!("🧪 Testing app at {url}");

    match check_app(url, REQUEST_TIMEOUT).await {
        Check::Passed { status, body } => {
            println!("✅ Status Code: {status}");
            println!("✅ Response Content: {body}");
            true
        }
        Check::UnexpectedStatus(status) => {
            println!("❌ Status Code: {status}");
            false
        }
        Check::ContentMismatch { body } => {
            println!("✅ Status Code: 200");
            println!("❌ Unexpected response: {body}");
            false
        }
        Check::ConnectionFailed { .. } => {
            println!("❌ Connection failed to {url}");
            false
        }
        Check::TimedOut => {
            println!("❌ Request timeout to {url}");
            false
        }
        Check::RequestError { detail } => {
            println!("❌ Error: {detail}");
            false
        }
    }
}
