//! API utilities for frontend-backend communication

/// Порт backend по умолчанию (см. `[server] port` в config.toml)
const BACKEND_PORT: u16 = 3000;

/// Порт `trunk serve` из Trunk.toml
const DEV_SERVER_PORT: &str = "8080";

/// Get the base URL for API requests
///
/// Под `trunk serve` запросы идут на backend (порт 3000) того же хоста.
/// Если страницу отдаёт сам backend, используется её origin.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = location.port().unwrap_or_default();
    build_api_base(&protocol, &hostname, &port)
}

fn build_api_base(protocol: &str, hostname: &str, page_port: &str) -> String {
    if page_port == DEV_SERVER_PORT {
        format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
    } else if page_port.is_empty() {
        format!("{}//{}", protocol, hostname)
    } else {
        format!("{}//{}:{}", protocol, hostname, page_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_api_base() {
        assert_eq!(
            build_api_base("http:", "localhost", "8080"),
            "http://localhost:3000"
        );
        assert_eq!(
            build_api_base("https:", "chat.example.com", "3000"),
            "https://chat.example.com:3000"
        );
        assert_eq!(
            build_api_base("https:", "chat.example.com", ""),
            "https://chat.example.com"
        );
    }
}
