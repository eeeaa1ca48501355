pub mod password;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use storage::{Database, models::User, repository::session::SessionRepository};
use uuid::Uuid;

use crate::error::WebError;

/// Name of the httpOnly cookie carrying the session token.
pub const SESSION_COOKIE: &str = "liftbook_session";

/// The authenticated caller, resolved from the session cookie against the
/// session table. This extractor is the only identity source in the request
/// path; handlers never read credentials themselves.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<Database> for CurrentUser {
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, db: &Database) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
            .ok_or(WebError::Unauthorized)?;

        let user = SessionRepository::new(db.pool())
            .find_user_by_token(token)
            .await?
            .ok_or(WebError::Unauthorized)?;

        Ok(CurrentUser(user))
    }
}

/// Build the login cookie. Expiry is enforced server-side on the session
/// row, so the cookie itself carries no max-age.
pub fn session_cookie(token: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie used to clear the session on logout. Attributes must match the
/// login cookie for browsers to drop it.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, header::COOKIE};

    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let token = Uuid::new_v4();
        let cookie = session_cookie(token);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), token.to_string());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_removal_cookie_matches_login_cookie() {
        let cookie = removal_cookie();

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_token_parses_from_cookie_header() {
        let token = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            format!("{SESSION_COOKIE}={token}").parse().unwrap(),
        );

        let jar = CookieJar::from_headers(&headers);
        let parsed = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

        assert_eq!(parsed, Some(token));
    }

    #[test]
    fn test_garbage_cookie_value_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            format!("{SESSION_COOKIE}=not-a-token").parse().unwrap(),
        );

        let jar = CookieJar::from_headers(&headers);
        let parsed = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

        assert_eq!(parsed, None);
    }
}
