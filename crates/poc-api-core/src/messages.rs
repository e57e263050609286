//! Response text for the string-building endpoints.
//!
//! Every function here concatenates its input verbatim. Nothing is escaped,
//! quoted or validated: the SQL and HTML outputs exist to demonstrate
//! injection patterns and must keep doing so.

/// Subject used by the greeting when no name is given.
pub const DEFAULT_SUBJECT: &str = "World";

/// Body of the liveness probe.
pub const HEALTH_OK: &str = "OK";

/// Body of the public information endpoint.
pub const PUBLIC_INFORMATION: &str = "Public information";

/// Fixed prefix of the simulated users query.
pub const USERS_QUERY_PREFIX: &str = "Simulated query: SELECT * FROM users WHERE id = ";

/// `Hello, {name}!`, falling back to [`DEFAULT_SUBJECT`] when the name is
/// absent or empty.
pub fn hello(name: Option<&str>) -> String {
    let subject = match name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_SUBJECT,
    };
    format!("Hello, {}!", subject)
}

/// Builds the simulated users query with `id` spliced in raw.
pub fn users_query(id: &str) -> String {
    format!("{}{}", USERS_QUERY_PREFIX, id)
}

/// Builds the welcome HTML fragment with `username` spliced in raw.
pub fn welcome_fragment(username: &str) -> String {
    format!("<h1>Welcome, {}!</h1>", username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hello_defaults_to_world() {
        assert_eq!(hello(None), "Hello, World!");
        assert_eq!(hello(Some("")), "Hello, World!");
    }

    #[test]
    fn hello_keeps_whitespace_names() {
        // Only the empty string falls back; blank names are used as given.
        assert_eq!(hello(Some(" ")), "Hello,  !");
    }

    #[test]
    fn users_query_keeps_injection_payload() {
        assert_eq!(
            users_query("1 OR 1=1; DROP TABLE users--"),
            "Simulated query: SELECT * FROM users WHERE id = 1 OR 1=1; DROP TABLE users--"
        );
    }

    #[test]
    fn welcome_fragment_does_not_escape_markup() {
        assert_eq!(
            welcome_fragment("<script>alert(1)</script>"),
            "<h1>Welcome, <script>alert(1)</script>!</h1>"
        );
    }

    proptest! {
        #[test]
        fn hello_is_verbatim(name in ".+") {
            prop_assert_eq!(hello(Some(&name)), format!("Hello, {}!", name));
        }

        #[test]
        fn users_query_is_verbatim(id in ".*") {
            let query = users_query(&id);
            prop_assert!(query.starts_with(USERS_QUERY_PREFIX));
            prop_assert_eq!(&query[USERS_QUERY_PREFIX.len()..], id.as_str());
        }

        #[test]
        fn welcome_fragment_is_verbatim(username in ".*") {
            prop_assert_eq!(
                welcome_fragment(&username),
                format!("<h1>Welcome, {}!</h1>", username)
            );
        }
    }
}
