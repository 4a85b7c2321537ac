use crate::application::{
    dto::{IssuedSession, SessionSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::SessionCodec,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use cookie::{Cookie, CookieJar, Key};

/// Name the signature is bound to; independent of the cookie name on the wire.
const SIGNED_NAME: &str = "session";
const MIN_SECRET_LEN: usize = 32;

/// Stateless session values: `base64url(login|expires_unix)` signed with the
/// `cookie` crate's HMAC-SHA256 signed jar.
#[derive(Clone)]
pub struct SignedSessionCodec {
    key: Key,
    ttl: Duration,
}

impl SignedSessionCodec {
    pub fn new(secret: &[u8], ttl: Duration) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "session secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        Ok(Self {
            key: Key::derive_from(secret),
            ttl,
        })
    }
}

fn rejected() -> ApplicationError {
    ApplicationError::unauthorized("invalid session")
}

impl SessionCodec for SignedSessionCodec {
    fn issue(&self, login: &str, now: DateTime<Utc>) -> ApplicationResult<IssuedSession> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("session lifetime out of range"))?;
        let payload = URL_SAFE_NO_PAD.encode(format!("{login}|{}", expires_at.timestamp()));

        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key)
            .add(Cookie::new(SIGNED_NAME, payload));
        let value = jar
            .get(SIGNED_NAME)
            .map(|signed| signed.value().to_owned())
            .ok_or_else(|| ApplicationError::infrastructure("session signing failed"))?;

        Ok(IssuedSession { value, expires_at })
    }

    fn decode(&self, value: &str, now: DateTime<Utc>) -> ApplicationResult<SessionSubject> {
        let mut jar = CookieJar::new();
        jar.add_original(Cookie::new(SIGNED_NAME, value.to_owned()));
        let verified = jar.signed(&self.key).get(SIGNED_NAME).ok_or_else(rejected)?;

        let payload = URL_SAFE_NO_PAD
            .decode(verified.value())
            .map_err(|_| rejected())?;
        let payload = String::from_utf8(payload).map_err(|_| rejected())?;
        let (login, expires) = payload.rsplit_once('|').ok_or_else(rejected)?;
        let expires_at = expires
            .parse::<i64>()
            .ok()
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
            .ok_or_else(rejected)?;

        if expires_at <= now {
            return Err(ApplicationError::unauthorized("session expired"));
        }

        Ok(SessionSubject {
            login: login.to_owned(),
            expires_at,
        })
    }
}
