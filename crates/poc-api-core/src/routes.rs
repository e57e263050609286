//! Static catalog of the routes the service exposes.
//!
//! The HTTP router registers exactly these paths, and the CLI prints the
//! catalog for discovery.

use serde::Serialize;

/// A named query parameter accepted by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryParam {
    pub name: &'static str,
    pub required: bool,
}

/// Description of one GET route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteSpec {
    pub method: &'static str,
    pub path: &'static str,
    pub params: &'static [QueryParam],
    pub content_type: &'static str,
    pub summary: &'static str,
}

pub const HELLO: &str = "/api/hello";
pub const HEALTH: &str = "/api/health";
pub const USERS: &str = "/api/users";
pub const ADMIN_ENV: &str = "/api/admin/env";
pub const GREET: &str = "/api/greet";
pub const PING: &str = "/api/ping";
pub const PUBLIC: &str = "/api/public";

const TEXT: &str = "text/plain";

static ROUTES: &[RouteSpec] = &[
    RouteSpec {
        method: "GET",
        path: HELLO,
        params: &[QueryParam { name: "name", required: false }],
        content_type: TEXT,
        summary: "Greets the given name, or the world",
    },
    RouteSpec {
        method: "GET",
        path: HEALTH,
        params: &[],
        content_type: TEXT,
        summary: "Liveness probe",
    },
    RouteSpec {
        method: "GET",
        path: USERS,
        params: &[QueryParam { name: "id", required: true }],
        content_type: TEXT,
        summary: "SQL injection: raw id concatenated into a query string",
    },
    RouteSpec {
        method: "GET",
        path: ADMIN_ENV,
        params: &[],
        content_type: "application/json",
        summary: "Information disclosure: full process environment",
    },
    RouteSpec {
        method: "GET",
        path: GREET,
        params: &[QueryParam { name: "username", required: true }],
        content_type: "text/html",
        summary: "Reflected XSS: raw username embedded in HTML",
    },
    RouteSpec {
        method: "GET",
        path: PING,
        params: &[QueryParam { name: "host", required: true }],
        content_type: TEXT,
        summary: "Command injection: raw host passed to the shell",
    },
    RouteSpec {
        method: "GET",
        path: PUBLIC,
        params: &[],
        content_type: TEXT,
        summary: "Missing hardening: no security response headers",
    },
];

/// All routes, in registration order.
pub fn catalog() -> &'static [RouteSpec] {
    ROUTES
}

/// Looks up the route registered at `path`.
pub fn find(path: &str) -> Option<&'static RouteSpec> {
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_are_unique_and_under_api() {
        let mut seen = HashSet::new();
        for route in catalog() {
            assert!(route.path.starts_with("/api/"), "{}", route.path);
            assert!(seen.insert(route.path), "duplicate route {}", route.path);
            assert_eq!(route.method, "GET");
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn find_reports_required_params() {
        let users = find(USERS).unwrap();
        assert_eq!(users.params, &[QueryParam { name: "id", required: true }]);
        assert!(!find(HELLO).unwrap().params[0].required);
        assert!(find("/api/unknown").is_none());
    }
}
