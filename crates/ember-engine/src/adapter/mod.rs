//! Adapter selection.
//!
//! Picks a single GPU adapter out of whatever the graphics runtime enumerates,
//! using a fixed preference order over device type and backend. Selection is a
//! pure function; enumeration and device creation live in `device`.

mod preference;
mod select;

pub use preference::{
    AdapterPreference, BROWSER_DEVICE_TYPES, DEFAULT_DEVICE_TYPES, platform_backends,
    platform_device_types,
};
pub use select::{AdapterCandidate, AdapterDescriptor, select_adapter};
