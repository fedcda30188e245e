#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};

use fieldlog_core::error::CoreError;
use fieldlog_core::models::answer::Draft;
use fieldlog_core::models::participant::{IdSource, ParticipantId};
use fieldlog_storage::error::StorageError;
use fieldlog_storage::memory::MemoryStore;
use fieldlog_storage::store::{BoxFuture, KeyValueStore};
use fieldlog_survey::questionnaires::{baseline, daily};

pub fn baseline_draft() -> Draft {
    Draft::new()
        .with(baseline::field::AGE_RANGE, "26-35")
        .with(baseline::field::SEX, "Female")
        .with(baseline::field::MOSQUITO_ATTRACTION, "Often")
        .with(baseline::field::SKIN_TYPE, "Normal")
}

/// Passes validation; `got_bitten_treated = "No"`, nothing scented.
pub fn daily_draft() -> Draft {
    use daily::field;
    Draft::new()
        .with(field::DATE, "2025-06-03")
        .with(field::ENVIRONMENT, "Park/Open Field")
        .with(field::ALCOHOL_DRINKS, "0")
        .with(field::METABOLISM_FOODS, "None")
        .with(field::SCENTED_PRODUCTS, "No")
        .with(field::TIME_APPLIED, "18:45")
        .with(field::BODY_AREA, "Full Leg (1 side)")
        .with(field::AMOUNT_APPLIED, "2")
        .with(field::CLOTHING, "Fully Exposed (no clothing)")
        .with(field::EXPOSURE_START, "19:00")
        .with(field::GOT_BITTEN_TREATED, "No")
        .with(field::TOTAL_BITES_ALL, "3")
        .with(field::TOTAL_BITES_UNTREATED, "3")
        .with(field::REAPPLIED_PRODUCTS, "No")
        .with(field::EASE_OF_APPLICATION, "5")
        .with(field::TEXTURE_FEEL, "4")
        .with(field::SCENT_SATISFACTION, "3")
        .with(field::GREASY_STICKY, "1")
        .with(field::PROTECTION_SATISFACTION, "5")
        .with(field::PURCHASE_INTENT, "5")
}

pub fn ts(s: &str) -> jiff::Timestamp {
    s.parse().unwrap()
}

pub fn pid(s: &str) -> ParticipantId {
    ParticipantId::parse(s).unwrap()
}

/// Hands out the same id every time.
pub struct FixedId(pub &'static str);

impl IdSource for FixedId {
    fn next_id(&self) -> Result<ParticipantId, CoreError> {
        ParticipantId::parse(self.0)
    }
}

/// A store whose writes never resolve while `stall` is set.
#[derive(Debug, Default)]
pub struct StalledStore {
    pub inner: MemoryStore,
    stall: AtomicBool,
}

impl StalledStore {
    pub fn stall(&self, stall: bool) {
        self.stall.store(stall, Ordering::SeqCst);
    }
}

impl KeyValueStore for StalledStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>> {
        self.inner.get(key)
    }

    fn set<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), StorageError>> {
        if self.stall.load(Ordering::SeqCst) {
            return Box::pin(std::future::pending());
        }
        self.inner.set(key, value)
    }
}
