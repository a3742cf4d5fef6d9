// Pattern 2: Bridge - shapes and drawing colors varying independently.

use design_patterns::bridge;
use design_patterns::logging;

fn main() {
    logging::init("warn");

    println!("Pattern 2: Bridge");
    println!("=================\n");

    println!("=== Circles and Rectangles in Every Color ===");
    bridge::demo();
}
