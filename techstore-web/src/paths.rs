//! URLs for files served from `static/`, honoring the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/shop` when the storefront
//! is hosted under a subdirectory). Without it every path is root-anchored.

const PUBLIC_URL: Option<&str> = option_env!("PUBLIC_URL");

/// Payment method logos shown in the footer, in display order.
pub const PAYMENT_LOGOS: [(&str, &str); 2] = [("Visa", "visa.svg"), ("Mastercard", "mastercard.svg")];

#[must_use]
pub fn static_asset(file: &str) -> String {
    join_base(PUBLIC_URL.unwrap_or(""), file)
}

/// Router basename, or `None` to serve from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalized_base(PUBLIC_URL.unwrap_or(""))
}

fn join_base(base: &str, file: &str) -> String {
    let file = file.trim_start_matches('/');
    normalized_base(base).map_or_else(|| format!("/{file}"), |base| format!("{base}/{file}"))
}

fn normalized_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_anchored_without_base() {
        assert_eq!(join_base("", "visa.svg"), "/visa.svg");
        assert_eq!(join_base("", "/mastercard.svg"), "/mastercard.svg");
        assert_eq!(normalized_base(""), None);
    }

    #[test]
    fn build_base_matches_router_base() {
        let base = PUBLIC_URL.unwrap_or("");
        assert_eq!(router_base(), normalized_base(base));
        assert_eq!(static_asset("visa.svg"), join_base(base, "visa.svg"));
    }

    #[test]
    fn base_path_is_prefixed_once() {
        assert_eq!(join_base("/shop", "visa.svg"), "/shop/visa.svg");
        assert_eq!(join_base("/shop/", "/visa.svg"), "/shop/visa.svg");
        assert_eq!(normalized_base(" /shop/ "), Some("/shop".to_string()));
        assert_eq!(normalized_base("/"), None);
    }
}
