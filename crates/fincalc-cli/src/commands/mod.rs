pub mod budget;
pub mod format;
pub mod inflation;
pub mod sip;
pub mod tax;
