mod cubes;
mod lists;
mod numbers;
mod strings;

use cubes::cubes_list;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    numbers::main();
    strings::main();
    lists::main();

    // use the function
    println!("{}", cubes_list(-2.0, None));
    println!("{}", cubes_list(2.4, None));
    println!("{}", cubes_list(4.0, Some(12.0)));
    println!("{}", cubes_list(12.0, Some(4.0)));
    println!("{}", cubes_list(12.0, None));
}
