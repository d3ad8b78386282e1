use anyhow::Result;
use async_trait::async_trait;
use signup_form::{Record, Submitter};
use signup_types::FormVariant;
use tracing::info;

/// Default collaborator: records the registration in the log and succeeds.
/// Password fields are never logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubmitter;

#[async_trait]
impl Submitter for LoggingSubmitter {
    async fn submit(&self, record: &Record) -> Result<()> {
        info!(
            first_name = record.first_name(),
            last_name = record.last_name(),
            email = record.email(),
            variant = %record.variant(),
            "user registration data"
        );
        if record.variant() == FormVariant::Extended {
            info!(
                gender = record.gender(),
                prefecture = record.prefecture(),
                hobbies = ?record.hobbies(),
                "user profile data"
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "logging"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_form::{FieldId, FieldValue};

    #[tokio::test]
    async fn always_succeeds() {
        let record = Record::new(FormVariant::Extended)
            .with(FieldId::Hobbies, FieldValue::tags(["music"]))
            .unwrap();
        assert!(LoggingSubmitter.submit(&record).await.is_ok());
    }
}
