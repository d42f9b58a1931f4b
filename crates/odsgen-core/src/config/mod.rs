//! The `office:settings` tree
//!
//! ```text
//! config-item-set ─┬─ config-item
//!                  ├─ config-item-set
//!                  ├─ config-item-map-indexed ── config-item-map-entry*
//!                  └─ config-item-map-named ──── config-item-map-entry*
//! ```
//!
//! Every node writes itself with `append_xml`.

mod block;
mod element;
mod item;
mod item_set;
mod map_entry;
mod map_indexed;
mod map_named;

pub use block::ConfigBlock;
pub use element::ConfigElement;
pub use item::{ConfigElementType, ConfigItem};
pub use item_set::ConfigItemSet;
pub use map_entry::{
    ConfigItemMapEntry, ConfigItemMapEntrySequence, ConfigItemMapEntrySet,
    ConfigItemMapEntrySingleton,
};
pub use map_indexed::ConfigItemMapIndexed;
pub use map_named::ConfigItemMapNamed;
