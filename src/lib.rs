pub mod cubes;
mod lists;
mod numbers;
mod strings;

pub use cubes::{cubes_list, CubesResult};
