use crate::domain::errors::{DomainError, DomainResult};
use std::{future::Future, time::Duration};

const CNT_USER_LOGIN: &str = "users_login_key";
const CNT_ADVERT_OWNER: &str = "adverts_user_id_fkey";
const CNT_DETAIL_ADVERT: &str = "adverts_details_advert_id_fkey";
const CNT_DETAIL_LANGUAGE: &str = "adverts_details_advert_language_key";
const CNT_ADVERT_VIEWS_CHECK: &str = "adverts_views_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_LOGIN => DomainError::Conflict("user already exists".into()),
                    CNT_ADVERT_OWNER => DomainError::NotFound("advert owner not found".into()),
                    CNT_DETAIL_ADVERT => DomainError::NotFound("advert not found".into()),
                    CNT_DETAIL_LANGUAGE => {
                        DomainError::Conflict("duplicate advert translation".into())
                    }
                    CNT_ADVERT_VIEWS_CHECK => {
                        DomainError::Validation("views cannot be negative".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    "57014" => {
                        return DomainError::Cancelled("statement cancelled".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => {
            DomainError::Cancelled("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Run a store operation under a deadline. Elapsed deadlines drop the
/// in-flight query and surface as `Cancelled`.
pub async fn with_deadline<T, F>(limit: Duration, operation: &'static str, fut: F) -> DomainResult<T>
where
    F: Future<Output = DomainResult<T>>,
{
    tokio::time::timeout(limit, fut).await.map_err(|_| {
        tracing::warn!(operation, timeout = ?limit, "store operation timed out");
        DomainError::Cancelled(format!("{operation} timed out"))
    })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deadline_turns_into_cancelled() {
        let result: DomainResult<()> = with_deadline(Duration::from_millis(5), "slow", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(DomainError::Cancelled(_))));
    }

    #[tokio::test]
    async fn deadline_passes_results_through() {
        let result = with_deadline(Duration::from_secs(1), "fast", async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn pool_timeouts_are_cancellations() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Cancelled(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence(_)
        ));
    }
}
