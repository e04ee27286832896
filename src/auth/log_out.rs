//! Log-out route handler that ends the session, invalidates the auth cookie and redirects users.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    auth::{cookie::get_token_from_cookies, invalidate_auth_cookie},
    endpoints,
    session::SessionStore,
};

/// Discard the session's expense list, invalidate the auth cookie and redirect the client to
/// the log-in page.
///
/// Logging out without a valid cookie still clears the cookie.
pub async fn get_log_out(State(sessions): State<SessionStore>, jar: PrivateCookieJar) -> Response {
    if let Ok(token) = get_token_from_cookies(&jar) {
        if let Err(error) = sessions.end(&token.session_id) {
            tracing::error!("Could not end session {}: {error}", token.session_id);
        }
    }

    let jar = invalidate_auth_cookie(jar);

    (jar, Redirect::to(endpoints::LOG_IN_VIEW)).into_response()
}

#[cfg(test)]
mod log_out_tests {
    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode, header::SET_COOKIE},
    };
    use axum_extra::extract::{
        PrivateCookieJar,
        cookie::{Cookie, Key},
    };
    use sha2::{Digest, Sha512};
    use time::{Duration, OffsetDateTime};

    use crate::{
        auth::{COOKIE_TOKEN, DEFAULT_COOKIE_DURATION, log_out::get_log_out, set_auth_cookie},
        endpoints,
        expense::UserId,
        session::SessionStore,
    };

    fn get_jar() -> PrivateCookieJar {
        let key = Key::from(&Sha512::digest("42"));
        PrivateCookieJar::new(key)
    }

    #[tokio::test]
    async fn log_out_ends_session_and_invalidates_cookie() {
        let sessions = SessionStore::new();
        let session_id = sessions.start(DEFAULT_COOKIE_DURATION).unwrap();
        let jar = set_auth_cookie(
            get_jar(),
            UserId::new("user-1"),
            session_id,
            DEFAULT_COOKIE_DURATION,
        )
        .unwrap();

        let response = get_log_out(State(sessions.clone()), jar).await;

        assert_redirect(&response, endpoints::LOG_IN_VIEW);
        assert_cookie_expired(&response);
        assert_eq!(sessions.len().unwrap(), 0);
    }

    #[tokio::test]
    async fn log_out_without_cookie_still_redirects() {
        let response = get_log_out(State(SessionStore::new()), get_jar()).await;

        assert_redirect(&response, endpoints::LOG_IN_VIEW);
        assert_cookie_expired(&response);
    }

    #[track_caller]
    fn assert_redirect(response: &Response<Body>, want_location: &str) {
        let redirect_location = response.headers().get("location").unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(redirect_location, want_location);
    }

    #[track_caller]
    fn assert_cookie_expired(response: &Response<Body>) {
        let mut found = false;

        for cookie_header in response.headers().get_all(SET_COOKIE) {
            let cookie_string = cookie_header.to_str().unwrap();
            let cookie = Cookie::parse(cookie_string).unwrap();

            if cookie.name() != COOKIE_TOKEN {
                continue;
            }

            found = true;
            assert_eq!(cookie.expires_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
            assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        }

        assert!(found, "no {COOKIE_TOKEN} cookie was set");
    }
}
