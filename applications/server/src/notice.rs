//! Single-use notices (flash messages)
//!
//! A redirect stores the notice in a cookie; the page rendered after it reads
//! the cookie, shows the text and expires the cookie in the same response, so
//! every notice is displayed exactly once.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::convert::Infallible;

pub const NOTICE_COOKIE: &str = "roster_notice";

fn notice_cookie(value: &str) -> Cookie<'static> {
    Cookie::build((NOTICE_COOKIE, value.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Notice left by the previous response, if any
#[derive(Debug, Clone, Default)]
pub struct Notice {
    message: Option<String>,
    jar: CookieJar,
}

impl Notice {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn from_jar(jar: CookieJar) -> Self {
        let message = jar
            .get(NOTICE_COOKIE)
            .map(|c| c.value_trimmed().to_string())
            .filter(|v| !v.is_empty());

        Self { message, jar }
    }

    /// Jar that expires the notice cookie if the request carried one
    fn consume(self) -> CookieJar {
        self.jar.remove(notice_cookie(""))
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Notice
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_jar(CookieJar::from_headers(&parts.headers)))
    }
}

/// `303 See Other` carrying a notice for the next page
#[derive(Debug)]
pub struct NoticeRedirect {
    location: &'static str,
    message: &'static str,
}

impl NoticeRedirect {
    pub fn new(location: &'static str, message: &'static str) -> Self {
        Self { location, message }
    }
}

impl IntoResponse for NoticeRedirect {
    fn into_response(self) -> Response {
        let jar = CookieJar::new().add(notice_cookie(self.message));
        (jar, Redirect::to(self.location)).into_response()
    }
}

/// Rendered HTML page that consumes the pending notice
#[derive(Debug)]
pub struct Page {
    notice: Notice,
    html: String,
}

impl Page {
    pub fn new(notice: Notice, html: String) -> Self {
        Self { notice, html }
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        (self.notice.consume(), Html(self.html)).into_response()
    }
}
