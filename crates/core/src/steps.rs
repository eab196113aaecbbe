//! Step slots: the six fixed positions that hold a project's step outputs.
//!
//! The slot set is closed. [`StepSlot`] enumerates it, [`StepSlots`] is the
//! full record stored per project, and [`StepPatch`] is the sparse set of
//! writes carried by a partial update. Unknown keys never survive
//! [`StepPatch::normalize`], so nothing outside `step0`..`step5` can reach
//! storage.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Slot identifiers
// ---------------------------------------------------------------------------

/// One of the six named step positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepSlot {
    Step0,
    Step1,
    Step2,
    Step3,
    Step4,
    Step5,
}

/// Number of step slots per project.
pub const STEP_COUNT: usize = 6;

/// Highest valid `last_step` value.
pub const MAX_LAST_STEP: i64 = STEP_COUNT as i64 - 1;

impl StepSlot {
    /// All slots in step order.
    pub const ALL: [StepSlot; STEP_COUNT] = [
        Self::Step0,
        Self::Step1,
        Self::Step2,
        Self::Step3,
        Self::Step4,
        Self::Step5,
    ];

    /// Slot name as used in payloads and as the storage column name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Step0 => "step0",
            Self::Step1 => "step1",
            Self::Step2 => "step2",
            Self::Step3 => "step3",
            Self::Step4 => "step4",
            Self::Step5 => "step5",
        }
    }

    /// Parse a slot name. Exact match only.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

// ---------------------------------------------------------------------------
// Full slot record
// ---------------------------------------------------------------------------

/// The six step outputs of a project. `None` means the slot is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSlots {
    pub step0: Option<String>,
    pub step1: Option<String>,
    pub step2: Option<String>,
    pub step3: Option<String>,
    pub step4: Option<String>,
    pub step5: Option<String>,
}

impl StepSlots {
    pub fn get(&self, slot: StepSlot) -> Option<&str> {
        self.slot_ref(slot).as_deref()
    }

    pub fn set(&mut self, slot: StepSlot, value: Option<String>) {
        *self.slot_mut(slot) = value;
    }

    /// Merge a patch into a copy of this record.
    ///
    /// Slots named in the patch are replaced (a `None` value clears the
    /// slot); every other slot is carried over unchanged. This is the
    /// reference semantics of the persisted merge in
    /// `dcx_db::repositories::ProjectRepo::update`, which must leave a stored
    /// row equal to `stored.apply(patch)`.
    pub fn apply(&self, patch: &StepPatch) -> StepSlots {
        let mut merged = self.clone();
        for (slot, value) in patch.iter() {
            merged.set(slot, value.map(str::to_owned));
        }
        merged
    }

    fn slot_ref(&self, slot: StepSlot) -> &Option<String> {
        match slot {
            StepSlot::Step0 => &self.step0,
            StepSlot::Step1 => &self.step1,
            StepSlot::Step2 => &self.step2,
            StepSlot::Step3 => &self.step3,
            StepSlot::Step4 => &self.step4,
            StepSlot::Step5 => &self.step5,
        }
    }

    fn slot_mut(&mut self, slot: StepSlot) -> &mut Option<String> {
        match slot {
            StepSlot::Step0 => &mut self.step0,
            StepSlot::Step1 => &mut self.step1,
            StepSlot::Step2 => &mut self.step2,
            StepSlot::Step3 => &mut self.step3,
            StepSlot::Step4 => &mut self.step4,
            StepSlot::Step5 => &mut self.step5,
        }
    }
}

// ---------------------------------------------------------------------------
// Sparse patch
// ---------------------------------------------------------------------------

/// A sparse set of slot writes.
///
/// A slot mapped to `None` is an explicit clear, which is distinct from the
/// slot being absent from the patch (left untouched).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, Option<String>>")]
pub struct StepPatch {
    writes: BTreeMap<StepSlot, Option<String>>,
}

impl StepPatch {
    /// Keep only the entries whose key is a valid slot name.
    ///
    /// Other keys are dropped silently; values pass through unchanged.
    pub fn normalize(raw: HashMap<String, Option<String>>) -> Self {
        raw.into_iter()
            .filter_map(|(key, value)| StepSlot::from_name(&key).map(|slot| (slot, value)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// `Some(value)` if the patch names `slot`, `None` if it leaves it alone.
    pub fn get(&self, slot: StepSlot) -> Option<Option<&str>> {
        self.writes.get(&slot).map(Option::as_deref)
    }

    /// Writes in step order.
    pub fn iter(&self) -> impl Iterator<Item = (StepSlot, Option<&str>)> + '_ {
        self.writes
            .iter()
            .map(|(slot, value)| (*slot, value.as_deref()))
    }
}

impl From<HashMap<String, Option<String>>> for StepPatch {
    fn from(raw: HashMap<String, Option<String>>) -> Self {
        Self::normalize(raw)
    }
}

impl FromIterator<(StepSlot, Option<String>)> for StepPatch {
    fn from_iter<I: IntoIterator<Item = (StepSlot, Option<String>)>>(iter: I) -> Self {
        Self {
            writes: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
