pub mod permutation;
pub mod runner;
pub mod seed;
pub mod theory;
pub mod trial;
pub mod writer;
