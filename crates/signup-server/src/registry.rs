// File: src/registry.rs
// Purpose: In-memory registry of mounted form instances

use crate::error::AppError;
use chrono::{DateTime, Utc};
use signup_form::{FormState, FormVariant};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

struct Slot {
    form: FormState,
    mounted_at: DateTime<Utc>,
}

/// Mounted forms keyed by id.
///
/// Each handler holds the lock for one transition only. A submit releases it
/// while the submitter runs (see [`FormState::begin_submit`]).
#[derive(Clone)]
pub struct FormRegistry {
    slots: Arc<RwLock<HashMap<Uuid, Slot>>>,
    capacity: usize,
}

impl FormRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    /// Mount a fresh form, evicting the oldest idle ones beyond capacity
    pub async fn mount(&self, variant: FormVariant) -> (Uuid, FormState) {
        let id = Uuid::new_v4();
        let form = FormState::new(variant);

        let mut slots = self.slots.write().await;
        while slots.len() >= self.capacity {
            let oldest = slots
                .iter()
                .filter(|(_, slot)| !slot.form.is_submitting())
                .min_by_key(|(_, slot)| slot.mounted_at)
                .map(|(id, _)| *id);
            let Some(evicted) = oldest else { break };
            slots.remove(&evicted);
            debug!(form = %evicted, "evicted oldest form");
        }

        slots.insert(
            id,
            Slot {
                form: form.clone(),
                mounted_at: Utc::now(),
            },
        );
        info!(form = %id, %variant, open = slots.len(), "form mounted");
        (id, form)
    }

    /// Run one transition against a mounted form
    pub async fn update<T, F>(&self, id: Uuid, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut FormState) -> Result<T, AppError>,
    {
        let mut slots = self.slots.write().await;
        let slot = slots.get_mut(&id).ok_or(AppError::UnknownForm(id))?;
        f(&mut slot.form)
    }

    /// Copy of the form's current state
    pub async fn snapshot(&self, id: Uuid) -> Result<FormState, AppError> {
        let slots = self.slots.read().await;
        slots
            .get(&id)
            .map(|slot| slot.form.clone())
            .ok_or(AppError::UnknownForm(id))
    }

    /// Discard a form (the user navigated away from it)
    pub async fn remove(&self, id: Uuid) -> Option<FormState> {
        let removed = self.slots.write().await.remove(&id).map(|slot| slot.form);
        if removed.is_some() {
            debug!(form = %id, "form discarded");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_form::{FieldId, FieldValue};

    #[tokio::test]
    async fn mount_update_remove() {
        let registry = FormRegistry::new(8);
        let (id, form) = registry.mount(FormVariant::Basic).await;
        assert!(!form.is_dirty());

        registry
            .update(id, |form| {
                form.change(FieldId::FirstName, FieldValue::text("Taro"))?;
                Ok(())
            })
            .await
            .unwrap();
        assert!(registry.snapshot(id).await.unwrap().is_dirty());

        assert!(registry.remove(id).await.is_some());
        assert!(matches!(
            registry.snapshot(id).await,
            Err(AppError::UnknownForm(missing)) if missing == id
        ));
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn evicts_oldest_beyond_capacity() {
        let registry = FormRegistry::new(2);
        let (first, _) = registry.mount(FormVariant::Basic).await;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let (second, _) = registry.mount(FormVariant::Basic).await;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let (third, _) = registry.mount(FormVariant::Basic).await;

        assert_eq!(registry.len().await, 2);
        assert!(registry.snapshot(first).await.is_err());
        assert!(registry.snapshot(second).await.is_ok());
        assert!(registry.snapshot(third).await.is_ok());
    }

    #[tokio::test]
    async fn never_evicts_a_form_mid_submit() {
        let registry = FormRegistry::new(1);
        let (busy, _) = registry.mount(FormVariant::Basic).await;
        registry
            .update(busy, |form| {
                for (field, value) in [
                    (FieldId::FirstName, "Taro"),
                    (FieldId::LastName, "Yamada"),
                    (FieldId::Email, "taro@example.jp"),
                    (FieldId::Password, "Abcdef12"),
                    (FieldId::ConfirmPassword, "Abcdef12"),
                ] {
                    form.change(field, FieldValue::text(value))?;
                }
                form.begin_submit();
                Ok(())
            })
            .await
            .unwrap();

        let (fresh, _) = registry.mount(FormVariant::Basic).await;
        assert!(registry.snapshot(busy).await.unwrap().is_submitting());
        assert!(registry.snapshot(fresh).await.is_ok());
    }
}
