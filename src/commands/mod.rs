pub mod compare;

pub use compare::CompareCommand;
