//! Query handlers.

mod list_picking_slips;

pub use list_picking_slips::{ListPickingSlipsHandler, ListPickingSlipsQuery, PickingSlipList};
