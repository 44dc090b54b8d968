pub mod testing;
pub mod transcript;
