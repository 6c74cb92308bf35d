mod table;
pub use table::TableShow;
