//! Session state: the records being edited, both language axes, the current mode.

pub mod state;
