pub mod completion;
pub mod restart;
