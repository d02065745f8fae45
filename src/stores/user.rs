// ABOUTME: User profile store: single local user with goal and bodyweight history
// ABOUTME: Persisted under its own partition so profile resets leave training data intact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use liftlog_core::models::{generate_id, Goal, User, UserPatch, WeightEntry};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{keys, StorageGateway};

/// Persisted shape of the user partition
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<User>,
    is_onboarded: bool,
}

/// Owns the local user profile
pub struct UserStore {
    storage: Arc<dyn StorageGateway>,
    user: Option<User>,
    onboarded: bool,
}

impl UserStore {
    /// Hydrate from the user partition, or start without a profile
    #[must_use]
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        let document = match storage.read(keys::USER) {
            Ok(Some(json)) => match serde_json::from_str::<UserDocument>(&json) {
                Ok(document) => Some(document),
                Err(err) => {
                    warn!(error = %err, "user partition unreadable, starting without a profile");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "user partition read failed, starting without a profile");
                None
            }
        };

        match document {
            Some(document) => Self {
                storage,
                user: document.user,
                onboarded: document.is_onboarded,
            },
            None => Self {
                storage,
                user: None,
                onboarded: false,
            },
        }
    }

    fn persist(&self) {
        let document = UserDocument {
            user: self.user.clone(),
            is_onboarded: self.onboarded,
        };
        match serde_json::to_string(&document) {
            Ok(json) => {
                if let Err(err) = self.storage.write(keys::USER, &json) {
                    warn!(error = %err, "failed to persist user partition");
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize user partition"),
        }
    }

    /// The profile, if one has been created
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True once onboarding has completed
    #[must_use]
    pub fn is_onboarded(&self) -> bool {
        self.onboarded
    }

    /// Create the profile and seed the bodyweight history
    pub fn create_user(
        &mut self,
        name: impl Into<String>,
        weight: f64,
        height: f64,
        goal: Goal,
        birth_date: Option<NaiveDate>,
    ) {
        let now = Utc::now();
        self.user = Some(User {
            id: generate_id(),
            name: name.into(),
            weight,
            height,
            birth_date,
            goal,
            created_at: now,
            weight_history: vec![WeightEntry { date: now, weight }],
        });
        self.onboarded = true;
        self.persist();
    }

    /// Merge `patch` into the profile; no-op without a profile
    pub fn update_user(&mut self, patch: UserPatch) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        user.apply(patch);
        self.persist();
    }

    /// Record a bodyweight measurement and update the current weight
    pub fn add_weight_entry(&mut self, weight: f64) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        user.weight = weight;
        user.weight_history.push(WeightEntry {
            date: Utc::now(),
            weight,
        });
        self.persist();
    }

    /// Remove the measurement taken at exactly `date`
    pub fn delete_weight_entry(&mut self, date: DateTime<Utc>) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        user.weight_history.retain(|e| e.date != date);
        self.persist();
    }

    /// Flip the onboarding flag
    pub fn set_onboarded(&mut self, value: bool) {
        self.onboarded = value;
        self.persist();
    }

    /// Drop the profile and clear the partition
    pub fn reset(&mut self) {
        self.user = None;
        self.onboarded = false;
        if let Err(err) = self.storage.clear(keys::USER) {
            warn!(error = %err, "failed to clear user partition");
        }
    }
}
