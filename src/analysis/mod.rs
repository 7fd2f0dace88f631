//! Aggregations over a loaded record list.
//!
//! Both passes only read the records, so they can run in any order; the
//! reports are printed duplicates first.

pub mod duplicates;
pub mod floors;

pub use duplicates::{find_duplicates, Duplicate, DuplicateReport};
pub use floors::{floor_statistics, qualifying_floor, CityFloors, FloorReport};
