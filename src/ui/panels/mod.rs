// ShowBill - ui/panels/mod.rs

pub mod details;
pub mod episodes;
pub mod footer;
pub mod hero;
