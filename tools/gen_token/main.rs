//! Mint an HS256 bearer token for manual testing against grcd.
//!
//! Reads SECRET_KEY from the environment (the same secret grcd verifies
//! against) and prints a token valid for 24 hours.

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: usize,
}

fn main() {
    let secret = match std::env::var("SECRET_KEY") {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            eprintln!("SECRET_KEY environment variable not set");
            std::process::exit(1);
        }
    };

    let claims = Claims {
        sub: "test_user".to_string(),
        exp: (chrono::Utc::now().timestamp() + 24 * 3600) as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("token encoding cannot fail with an HS256 key");

    println!("Bearer {}", token);
}
