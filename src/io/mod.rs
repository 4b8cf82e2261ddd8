pub mod admission;
pub mod config;
pub mod csv_io;
pub mod raw_file;
