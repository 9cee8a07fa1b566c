/// Decides whether a browser `Origin` may call the API with credentials.
///
/// Allowed are the configured origins, any `http://*.localhost[:port]` origin used by
/// tenant subdomains in development, and the `https://dineflowfrontend*.vercel.app`
/// preview deployments.
pub fn is_allowed_origin(origin: &str, allowed: &[String]) -> bool {
    let origin = origin.trim_end_matches('/');
    if allowed.iter().any(|a| a == origin) {
        return true;
    }

    if let Some(host) = origin.strip_prefix("http://") {
        let name = host.split(':').next().unwrap_or_default();
        let port_ok = host
            .split_once(':')
            .is_none_or(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()));
        if name.ends_with(".localhost") && name.len() > ".localhost".len() && port_ok {
            return true;
        }
    }

    if let Some(host) = origin.strip_prefix("https://") {
        if let Some(prefix) = host.strip_suffix(".vercel.app") {
            return prefix.starts_with("dineflowfrontend")
                && prefix
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-');
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Vec<String> {
        vec!["http://localhost:3000".to_string()]
    }

    #[test]
    fn allows_configured_origins() {
        assert!(is_allowed_origin("http://localhost:3000", &configured()));
        assert!(!is_allowed_origin("http://localhost:4000", &configured()));
    }

    #[test]
    fn allows_localhost_subdomains() {
        assert!(is_allowed_origin("http://pizzeria.localhost:3000", &configured()));
        assert!(is_allowed_origin("http://pizzeria.localhost", &configured()));
        assert!(!is_allowed_origin("http://pizzeria.localhost.evil.com", &configured()));
        assert!(!is_allowed_origin("https://pizzeria.localhost:3000", &configured()));
    }

    #[test]
    fn allows_frontend_preview_deployments() {
        assert!(is_allowed_origin("https://dineflowfrontend.vercel.app", &configured()));
        assert!(is_allowed_origin(
            "https://dineflowfrontend-git-main-team.vercel.app",
            &configured()
        ));
        assert!(!is_allowed_origin("https://other.vercel.app", &configured()));
    }
}
