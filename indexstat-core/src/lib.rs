pub mod cli;
pub mod conf;
pub mod logging;
pub mod partitions;
pub mod records;
pub mod stats;
