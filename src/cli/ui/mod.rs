pub mod countdown;
pub mod table;
pub mod test_mode;
