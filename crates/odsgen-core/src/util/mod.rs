//! Containers used to collect styles, tables and settings before writing

mod container;
mod multi_container;
mod unique_list;

pub use container::{Container, Mode};
pub use multi_container::{Destination, MultiContainer};
pub use unique_list::{NamedObject, UniqueList};
