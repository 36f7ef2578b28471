// ABOUTME: Domain newtypes shared across modules.
// ABOUTME: Currently the validated slot name.

mod slot_name;

pub use slot_name::{PRODUCTION_SLOT, SlotName, SlotNameError};
