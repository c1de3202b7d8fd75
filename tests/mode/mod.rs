pub mod test_mode;
