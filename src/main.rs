//! CoffeeConnect main entrypoint.

use coffeeconnect::run;
use coffeeconnect::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
