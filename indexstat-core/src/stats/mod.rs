mod histogram;
mod report;


pub use histogram::*;
pub use report::*;
