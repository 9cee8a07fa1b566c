//! Company slugs and tenant URLs.

/// Hosts whose first label never names a tenant.
const RESERVED_SUBDOMAINS: &[&str] = &["www", "api"];

/// Derives a company slug from an email address.
///
/// Takes the local part, lowercases it and strips everything outside `[a-z0-9]`.
/// Returns `None` when nothing is left.
pub fn slug_from_email(email: &str) -> Option<String> {
    let local = email.split('@').next().unwrap_or_default();
    let slug: String = local
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    (!slug.is_empty()).then_some(slug)
}

/// Extracts the tenant slug from a `Host` header.
///
/// The slug is the first label of a dotted host, ignoring any port, unless that label
/// is `www` or `api`.
pub fn slug_from_host(host: &str) -> Option<String> {
    let host = host.trim().split(':').next().unwrap_or_default();
    if !host.contains('.') {
        return None;
    }

    let label = host.split('.').next()?.to_lowercase();
    if label.is_empty() || RESERVED_SUBDOMAINS.contains(&label.as_str()) {
        return None;
    }

    Some(label)
}

/// Builds the URL of a company's tenant frontend, `{scheme}://{slug}.{base}`.
///
/// `base` is taken from the configured frontend URL, else the request `Origin`, else
/// the `Host` header. Its scheme and any leading `www.` are stripped; the scheme of the
/// source is kept and defaults to `https`.
pub fn company_url(
    slug: &str,
    frontend_url: Option<&str>,
    origin: Option<&str>,
    host: Option<&str>,
) -> String {
    let source = frontend_url
        .or(origin)
        .or(host)
        .unwrap_or("localhost:3000")
        .trim()
        .trim_end_matches('/');

    let (scheme, rest) = match source.split_once("://") {
        Some((scheme, rest)) => (scheme, rest),
        None if source.starts_with("localhost") => ("http", source),
        None => ("https", source),
    };
    let base = rest.split('/').next().unwrap_or(rest);
    let base = base.strip_prefix("www.").unwrap_or(base);

    format!("{}://{}.{}", scheme, slug, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_email_local_part() {
        assert_eq!(slug_from_email("John.Doe+1@example.com").as_deref(), Some("johndoe1"));
        assert_eq!(slug_from_email("._-@example.com"), None);
    }

    #[test]
    fn reads_subdomain_from_host() {
        assert_eq!(slug_from_host("pizzeria.dineflow.app").as_deref(), Some("pizzeria"));
        assert_eq!(slug_from_host("pizzeria.localhost:3000").as_deref(), Some("pizzeria"));
        assert_eq!(slug_from_host("www.dineflow.app"), None);
        assert_eq!(slug_from_host("api.dineflow.app"), None);
        assert_eq!(slug_from_host("localhost:5000"), None);
    }

    #[test]
    fn builds_company_url_from_first_available_source() {
        assert_eq!(
            company_url("joe", Some("https://www.dineflow.app"), None, None),
            "https://joe.dineflow.app"
        );
        assert_eq!(
            company_url("joe", None, Some("http://localhost:3000"), Some("api.dineflow.app")),
            "http://joe.localhost:3000"
        );
        assert_eq!(
            company_url("joe", None, None, Some("dineflow.app")),
            "https://joe.dineflow.app"
        );
    }
}
