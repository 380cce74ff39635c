//! Pattern 2: Birds
//! Example: Refactored - animals implement only what they can do
//!
//! Run with: cargo run --example p2_bird_usage

use liskov_substitution::bird::{
    make_animal_sound, make_it_fly, Animal, Duck, Eagle, Flyable, Penguin, Swimmable,
};

fn main() {
    // Usage: Capabilities are separate traits, checked at compile time.
    println!("--- Every animal can make a sound ---");
    make_animal_sound(&Eagle);
    make_animal_sound(&Penguin);
    make_animal_sound(&Duck);

    println!("\n--- Only flyers can fly ---");
    make_it_fly(&Eagle);
    make_it_fly(&Duck);
    // make_it_fly(&Penguin); // does not compile: Penguin is not Flyable

    println!("\n--- Type-specific abilities ---");
    Penguin.swim();
    Duck.fly();
    Duck.swim();

    // Group animals by what they can actually do
    let all_animals: Vec<Box<dyn Animal>> = vec![Box::new(Eagle), Box::new(Penguin), Box::new(Duck)];
    let flyers: Vec<Box<dyn Flyable>> = vec![Box::new(Eagle), Box::new(Duck)];
    let swimmers: Vec<Box<dyn Swimmable>> = vec![Box::new(Penguin), Box::new(Duck)];

    println!("\n--- All animals ---");
    for animal in &all_animals {
        println!("{}:", animal.name());
        animal.make_sound();
    }

    println!("\n--- Flyers ---");
    for flyer in &flyers {
        flyer.fly();
    }

    println!("\n--- Swimmers ---");
    for swimmer in &swimmers {
        swimmer.swim();
    }
}
