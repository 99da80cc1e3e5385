pub mod filter_popup;
pub mod location_row;
pub mod sidebar;
