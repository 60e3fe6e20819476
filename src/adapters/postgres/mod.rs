//! PostgreSQL adapters - database implementations for reader ports.

mod picking_slip_reader;

pub use picking_slip_reader::PostgresPickingSlipReader;
