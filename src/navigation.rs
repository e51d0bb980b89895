use serde::Serialize;

use crate::config::Config;
use crate::routes::Route;

/// One entry in the rendered navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub label: &'static str,
    pub href: String,
}

/// The navigation view: the ordered list of links the frontend renders,
/// derived from the route table.
///
/// Draft routes are excluded from the production view but remain
/// resolvable at their paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    links: Vec<NavLink>,
}

impl Navigation {
    /// Production navigation: non-draft routes only, relative hrefs.
    pub fn production() -> Self {
        Self::build(false, None)
    }

    /// Preview navigation: all routes, draft ones included.
    pub fn preview() -> Self {
        Self::build(true, None)
    }

    /// Navigation honoring the loaded configuration: draft visibility and
    /// an optional base URL for absolute hrefs.
    pub fn from_config(config: &Config) -> Self {
        Self::build(config.show_draft_routes, config.base_url.as_deref())
    }

    fn build(include_drafts: bool, base_url: Option<&str>) -> Self {
        let links = Route::ALL
            .into_iter()
            .filter(|route| include_drafts || !route.is_draft())
            .map(|route| NavLink {
                name: route.name(),
                label: label(route),
                // Config normalizes base_url to have no trailing slash,
                // so joining with the route path never yields "//".
                href: match base_url {
                    Some(base) => format!("{base}{}", route.path()),
                    None => route.path().to_string(),
                },
            })
            .collect();

        Navigation { links }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

fn label(route: Route) -> &'static str {
    match route {
        Route::Home => "Home",
        Route::Send => "Send",
        Route::Faucet => "Faucet",
        Route::Transfers => "Transfers",
    }
}
