pub mod storage;
pub mod store_io;
