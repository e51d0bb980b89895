// Route path constants - single source of truth for all app paths

use serde::Serialize;

pub const HOME: &str = "/";
pub const SEND: &str = "/send";
pub const FAUCET: &str = "/faucet";
pub const TRANSFERS: &str = "/transfers";

/// The closed set of top-level application routes.
///
/// Adding a page to the app means adding a variant here; everything that
/// consumes the route table (navigation, the manifest binary) picks it up
/// from `Route::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Send,
    Faucet,
    Transfers,
}

/// Static metadata for a single route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// URL path, always starting with `/`, unique per route.
    pub path: &'static str,
    /// Draft routes are still resolvable but hidden from production
    /// navigation.
    pub draft: bool,
}

impl Route {
    /// All routes, in the order they appear in navigation.
    pub const ALL: [Route; 4] = [Route::Home, Route::Send, Route::Faucet, Route::Transfers];

    /// Metadata for this route. Infallible: the table is exhaustively
    /// known at compile time.
    pub const fn entry(self) -> RouteEntry {
        match self {
            Route::Home => RouteEntry {
                path: HOME,
                draft: false,
            },
            Route::Send => RouteEntry {
                path: SEND,
                draft: false,
            },
            Route::Faucet => RouteEntry {
                path: FAUCET,
                draft: false,
            },
            Route::Transfers => RouteEntry {
                path: TRANSFERS,
                draft: true,
            },
        }
    }

    pub const fn path(self) -> &'static str {
        self.entry().path
    }

    pub const fn is_draft(self) -> bool {
        self.entry().draft
    }

    /// Symbolic name of the route, as used in the navigation manifest.
    pub const fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Send => "send",
            Route::Faucet => "faucet",
            Route::Transfers => "transfers",
        }
    }
}
