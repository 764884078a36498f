//! Centralized configuration (environment variables + defaults).

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// Address the API server binds to.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}

/// Lower bound for entity name lengths (characters).
pub fn min_text_length() -> usize {
    match std::env::var("MIN_TEXT_LENGTH") {
        Ok(v) => v
            .parse::<usize>()
            .expect("MIN_TEXT_LENGTH must be a valid usize")
            .max(1),
        Err(_) => 3,
    }
}

/// Upper bound for entity name lengths (characters).
pub fn max_text_length() -> usize {
    match std::env::var("MAX_TEXT_LENGTH") {
        Ok(v) => v
            .parse::<usize>()
            .expect("MAX_TEXT_LENGTH must be a valid usize")
            .max(1),
        Err(_) => 255,
    }
}
