//! Usage notes and examples

pub mod rig_file;
