use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Show every showroom transition while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Prefix for site-relative media paths, set at build time when the page is
/// served from a sub-path or a CDN.
pub fn asset_base() -> &'static str {
    option_env!("NUNES_ASSET_BASE").unwrap_or("")
}

pub fn asset_url(source: &str) -> String {
    resolve_asset(asset_base(), source)
}

fn resolve_asset(base: &str, source: &str) -> String {
    if source.starts_with("http://") || source.starts_with("https://") {
        return source.to_string();
    }
    format!("{}{}", base.trim_end_matches('/'), source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_get_the_base() {
        assert_eq!(resolve_asset("https://cdn.example.com/", "/carrossel/img1.png"),
            "https://cdn.example.com/carrossel/img1.png");
        assert_eq!(resolve_asset("", "/carrossel/img1.png"), "/carrossel/img1.png");
    }

    #[test]
    fn absolute_urls_are_untouched() {
        assert_eq!(resolve_asset("/base", "https://img.example.com/a.png"),
            "https://img.example.com/a.png");
    }
}
