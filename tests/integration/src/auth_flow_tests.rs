//! End-to-End Layered Forwarding Tests
//!
//! This test suite validates the call chain the library exists for:
//! 1. A transport client returns an outcome over its own declared error set
//! 2. The service layer forwards it into the domain error set
//! 3. Callers branch on expected-error identity, never on message text

use crate::test_utils::{
    init_tracing, EmailNotConfirmed, InvalidCredentials, SignInErrors, TransportErrors,
    Unauthorized, ValidationError,
};
use outcome_core::{ErrorValue, Forward, Outcome};
use std::sync::Arc;

const VALID_PASSWORD: &str = "hunter2";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Credentials {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    token: String,
}

/// Stand-in for the transport client: produces outcomes over the transport
/// error set. Unconfirmed accounts are rejected server-side as a validation
/// failure on the email field.
fn transport_sign_in(creds: &Credentials) -> Outcome<String, TransportErrors> {
    if !creds.email.contains('@') || creds.email.ends_with("@unconfirmed.test") {
        return Outcome::failure(ValidationError {
            field: "email".to_string(),
        });
    }
    if creds.password != VALID_PASSWORD {
        return Outcome::failure(Unauthorized);
    }
    Outcome::success(format!("token-for-{}", creds.email))
}

/// Service layer: re-declares the transport outcome over the domain set.
fn sign_in(creds: &Credentials) -> Outcome<Session, SignInErrors> {
    tracing::info!(email = %creds.email, "signing in");
    transport_sign_in(creds).forward(
        Forward::new()
            .on_success(|token| Session { token })
            .on_failure(|err| match err.downcast::<Unauthorized>() {
                Ok(_) => InvalidCredentials.into(),
                Err(other) => match other.downcast::<ValidationError>() {
                    Ok(_) => EmailNotConfirmed.into(),
                    Err(other) => other,
                },
            }),
    )
}

fn parse_fixture(fixture: &str) -> anyhow::Result<Vec<Credentials>> {
    fixture
        .lines()
        .map(|line| {
            let (email, password) = line
                .split_once(':')
                .ok_or_else(|| anyhow::anyhow!("malformed fixture line: {line}"))?;
            Ok(Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
        })
        .collect()
}

#[test]
fn test_sign_in_success_round_trip() {
    init_tracing();

    let creds = Credentials {
        email: "alice@example.test".to_string(),
        password: VALID_PASSWORD.to_string(),
    };
    let outcome = sign_in(&creds);
    outcome.ensure_success();
    assert_eq!(outcome.value().token, "token-for-alice@example.test");

    // chained map keeps the declared set
    let greeting: Outcome<String, SignInErrors> =
        outcome.map(|session| format!("welcome, {}", session.token));
    assert_eq!(*greeting.value(), "welcome, token-for-alice@example.test");
}

#[test]
fn test_wrong_password_surfaces_as_invalid_credentials() {
    init_tracing();

    let creds = Credentials {
        email: "alice@example.test".to_string(),
        password: "wrong".to_string(),
    };
    let outcome = sign_in(&creds);
    assert!(outcome.is_failed());
    assert!(outcome.has_single_error::<InvalidCredentials>());
    assert!(!outcome.has_error::<EmailNotConfirmed>());
    // the transport variant never crosses the service boundary
    assert!(!outcome.has_error::<Unauthorized>());
}

#[test]
fn test_unconfirmed_email_surfaces_as_email_not_confirmed() {
    init_tracing();

    let creds = Credentials {
        email: "bob@unconfirmed.test".to_string(),
        password: VALID_PASSWORD.to_string(),
    };
    let outcome = sign_in(&creds);
    assert!(outcome.has_single_error::<EmailNotConfirmed>());
    assert_eq!(
        outcome.find_error::<EmailNotConfirmed>(),
        Some(&EmailNotConfirmed)
    );
}

#[test]
fn test_fixture_batch_branches_on_variant_identity() -> anyhow::Result<()> {
    init_tracing();

    let batch = parse_fixture(
        "alice@example.test:hunter2\n\
         bob@unconfirmed.test:hunter2\n\
         mallory@example.test:guess",
    )?;
    let outcomes: Vec<Outcome<Session, SignInErrors>> =
        batch.iter().map(sign_in).collect();

    assert!(outcomes[0].is_successful());
    assert!(outcomes[1].has_error::<EmailNotConfirmed>());
    assert!(outcomes[2].has_error::<InvalidCredentials>());
    Ok(())
}

#[test]
fn test_bulk_validation_preserves_error_order() {
    init_tracing();

    // a form validator accumulating several expected errors at once
    let outcome: Outcome<(), TransportErrors> = Outcome::failures(vec![
        ErrorValue::new(ValidationError {
            field: "email".to_string(),
        }),
        ErrorValue::new(Unauthorized),
        ErrorValue::new(ValidationError {
            field: "password".to_string(),
        }),
    ]);

    let fields: Vec<&str> = outcome
        .find_errors::<ValidationError>()
        .into_iter()
        .map(|err| err.field.as_str())
        .collect();
    assert_eq!(fields, ["email", "password"]);
    assert!(outcome.has_error::<Unauthorized>());
    assert!(!outcome.has_single_error::<Unauthorized>());
}

#[test]
fn test_outcome_is_shared_across_threads_without_copying() {
    init_tracing();

    let outcome: Arc<Outcome<Session, SignInErrors>> = Arc::new(sign_in(&Credentials {
        email: "mallory@example.test".to_string(),
        password: "guess".to_string(),
    }));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let shared = Arc::clone(&outcome);
            scope.spawn(move || {
                assert!(shared.is_failed());
                assert!(shared.has_single_error::<InvalidCredentials>());
            });
        }
    });
}
