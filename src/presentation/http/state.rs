use crate::application::services::ApplicationServices;
use cookie::{Cookie, SameSite, time};
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub session_cookie: SessionCookie,
}

/// Attributes of the cookie carrying the signed session value.
#[derive(Clone, Debug)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
    pub ttl: Duration,
}

impl SessionCookie {
    pub fn issue(&self, value: &str) -> Cookie<'static> {
        let max_age = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let mut cookie = self.base(value.to_owned());
        cookie.set_max_age(time::Duration::seconds(max_age));
        cookie
    }

    pub fn clear(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.make_removal();
        cookie
    }

    fn base(&self, value: String) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .build()
    }
}
