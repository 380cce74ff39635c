//! Pattern 2: Birds
//! Example: Violation - a fly() contract penguins cannot honor
//!
//! Run with: cargo run --example p2_bird_violation

use thiserror::Error;

#[derive(Error, Debug)]
#[error("{0} cannot fly")]
struct FlightError(String);

// Every bird is forced to promise fly(), so the honest implementation for
// a penguin is an error - and every caller inherits that failure mode.
trait Bird {
    fn name(&self) -> &str;
    fn fly(&self) -> Result<(), FlightError>;
    fn make_sound(&self);
}

struct Eagle;

impl Bird for Eagle {
    fn name(&self) -> &str {
        "Eagle"
    }

    fn fly(&self) -> Result<(), FlightError> {
        println!("Eagle soars high above the mountains");
        Ok(())
    }

    fn make_sound(&self) {
        println!("Eagle lets out a piercing cry");
    }
}

struct Penguin;

impl Bird for Penguin {
    fn name(&self) -> &str {
        "Penguin"
    }

    fn fly(&self) -> Result<(), FlightError> {
        Err(FlightError(self.name().to_string()))
    }

    fn make_sound(&self) {
        println!("Penguin makes penguin noises");
    }
}

impl Penguin {
    fn swim(&self) {
        println!("Penguin glides playfully underwater");
    }
}

// Looks total, fails for some inputs at runtime.
fn make_bird_fly(bird: &dyn Bird) {
    match bird.fly() {
        Ok(()) => {}
        Err(e) => println!("Error: {e}"),
    }
}

fn main() {
    // Usage: Substituting a penguin turns a working call into an error.
    println!("=== LSP Violation: Flightless Flyer ===\n");

    let eagle = Eagle;
    let penguin = Penguin;

    make_bird_fly(&eagle);
    make_bird_fly(&penguin);

    println!();
    penguin.swim();

    println!("\n=== Key Points ===");
    println!("- The trait promises more than every implementor can deliver");
    println!("- The failure is only discovered at runtime");
    println!("- See p2_bird_usage for the capability-trait version");
}
