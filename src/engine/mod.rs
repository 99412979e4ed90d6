pub mod json_reader;
pub mod profile;
pub mod rig;
