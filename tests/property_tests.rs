//! Property tests for the credential codec algebra and the reconciliation
//! decision policy.
//!
//! These validate the invariants the filter is built on: prefix add/strip
//! are inverse, normalization is idempotent, scrubbing never leaks a
//! recognized carrier, and the decision policy is a total function of which
//! carriers are present.

use http::header::{AUTHORIZATION, COOKIE};
use http::Request;
use proptest::prelude::*;

use auth_relay::{AuthRelay, Config, EncodedCredential, LogLevel, Reconciliation};

// Strategy: opaque credential-looking text (credentials are never validated
// as base64, only relocated)
fn arb_encoded_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9+/]{1,24}(=|==)?").unwrap()
}

// Strategy: query parameter values that survive a URL round-trip
fn arb_param_value() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap()
}

fn quiet_relay() -> AuthRelay {
    let config = Config {
        log_level: LogLevel::None,
        ..Config::default()
    };
    AuthRelay::new(config, "proptest")
}

proptest! {
    /// Property: prefix add and strip are inverse.
    ///
    /// For all (username, password) pairs, including empty passwords and
    /// values containing `:`, re-normalizing the wire form recovers the
    /// canonical encoding.
    #[test]
    fn proptest_prefix_round_trip(username in ".*", password in ".*") {
        let encoded = EncodedCredential::encode(&username, &password);
        let round_tripped = EncodedCredential::normalize(&encoded.with_prefix());

        prop_assert_eq!(round_tripped, encoded);
    }

    /// Property: normalization is idempotent for any number of stacked
    /// prefixes.
    #[test]
    fn proptest_normalize_idempotent(prefixes in 0usize..4, raw in arb_encoded_text()) {
        let input = format!("{}{raw}", "Basic ".repeat(prefixes));

        let once = EncodedCredential::normalize(&input);
        let twice = EncodedCredential::normalize(once.as_str());

        prop_assert_eq!(once, twice);
    }

    /// Property: no canonical form ever retains a scheme prefix.
    #[test]
    fn proptest_canonical_form_is_prefix_free(prefixes in 0usize..4, raw in ".*") {
        let input = format!("{}{raw}", "Basic ".repeat(prefixes));
        let canonical = EncodedCredential::normalize(&input);

        prop_assert!(!canonical.as_str().starts_with("Basic "));
    }

    /// Property: encoding is deterministic and injective on the visible
    /// `username:password` payload.
    #[test]
    fn proptest_encode_deterministic(username in ".*", password in ".*") {
        let first = EncodedCredential::encode(&username, &password);
        let second = EncodedCredential::encode(&username, &password);

        prop_assert_eq!(first, second);
    }

    /// Property: whatever branch the filter takes, no recognized credential
    /// parameter survives in the request, and unrelated parameters do.
    #[test]
    fn proptest_scrubbing_never_leaks_query_credentials(
        username in arb_param_value(),
        password in arb_param_value(),
        authorization in arb_encoded_text(),
        unrelated in arb_param_value(),
    ) {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("username", &username);
        serializer.append_pair("password", &password);
        serializer.append_pair("authorization", &authorization);
        serializer.append_pair("page", &unrelated);
        let query = serializer.finish();

        let mut request = Request::builder()
            .uri(format!("http://localhost/data?{query}"))
            .body(())
            .unwrap();

        let _outcome = quiet_relay().reconcile(&mut request);

        let remaining: Vec<(String, String)> = form_urlencoded::parse(
            request.uri().query().unwrap_or("").as_bytes(),
        )
        .into_owned()
        .collect();

        let credentials_stripped = remaining.iter().all(|(k, _)| {
            k != "username" && k != "password" && k != "authorization"
        });
        prop_assert!(credentials_stripped);
        prop_assert!(remaining.contains(&("page".to_string(), unrelated)));
    }

    /// Property: the decision policy is exactly the documented function of
    /// carrier presence.
    ///
    /// Enumerates the carrier matrix (header present, authorization param
    /// present, username/password present, cookie present/matching) and
    /// checks the terminal outcome and the promoted header for every
    /// combination.
    #[test]
    fn proptest_decision_policy_matches_carrier_matrix(
        has_header in any::<bool>(),
        has_authorization_param in any::<bool>(),
        has_user_pass_params in any::<bool>(),
        has_cookie in any::<bool>(),
        cookie_matches_query in any::<bool>(),
    ) {
        const HEADER_VALUE: &str = "Basic aGVhZGVyOnZhbHVl";
        const STALE_COOKIE: &str = "c3RhbGU6Y29va2ll";

        let query_credential = if has_authorization_param {
            EncodedCredential::normalize("cXVlcnk6Y3JlZA==")
        } else if has_user_pass_params {
            EncodedCredential::encode("testusername", "testpassword")
        } else {
            EncodedCredential::normalize("")
        };

        let cookie_value = if !has_cookie {
            None
        } else if cookie_matches_query && !query_credential.is_empty() {
            Some(query_credential.as_str().to_string())
        } else {
            Some(STALE_COOKIE.to_string())
        };

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if has_authorization_param {
            serializer.append_pair("authorization", "cXVlcnk6Y3JlZA==");
        }
        if has_user_pass_params {
            serializer.append_pair("username", "testusername");
            serializer.append_pair("password", "testpassword");
        }
        let query = serializer.finish();
        let uri = if query.is_empty() {
            "http://localhost/".to_string()
        } else {
            format!("http://localhost/?{query}")
        };

        let mut builder = Request::builder().uri(uri);
        if has_header {
            builder = builder.header(AUTHORIZATION, HEADER_VALUE);
        }
        if let Some(value) = &cookie_value {
            builder = builder.header(COOKIE, format!("traefik-authhack={value}"));
        }
        let mut request = builder.body(()).unwrap();

        let outcome = quiet_relay().reconcile(&mut request);

        // The scrubbing obligations hold on every branch
        prop_assert_eq!(request.uri().query(), None);
        prop_assert!(request.headers().get(COOKIE).is_none());

        let cookie_credential = cookie_value.unwrap_or_default();
        if has_header {
            prop_assert!(matches!(outcome, Reconciliation::Forward));
            prop_assert_eq!(request.headers()[AUTHORIZATION].to_str().unwrap(), HEADER_VALUE);
        } else if !query_credential.is_empty()
            && query_credential.as_str() != cookie_credential
        {
            let Reconciliation::Redirect(redirect) = outcome else {
                return Err(TestCaseError::fail("fresh query credential must redirect"));
            };
            let set_cookie = redirect.set_cookie().to_str().unwrap().to_string();
            let cookie_prefix_matches =
                set_cookie.starts_with(&format!("traefik-authhack={}; ", query_credential.as_str()));
            prop_assert!(cookie_prefix_matches);
        } else if !cookie_credential.is_empty() {
            prop_assert!(matches!(outcome, Reconciliation::Forward));
            prop_assert_eq!(
                request.headers()[AUTHORIZATION].to_str().unwrap(),
                format!("Basic {cookie_credential}")
            );
        } else {
            prop_assert!(matches!(outcome, Reconciliation::Forward));
            prop_assert!(request.headers().get(AUTHORIZATION).is_none());
        }
    }
}
