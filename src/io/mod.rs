pub mod bundle;
pub mod excel_read;
