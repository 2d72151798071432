pub mod contracts;
pub mod interfaces;
pub mod status;
