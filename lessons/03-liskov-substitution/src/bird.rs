//! Capability traits instead of a fat bird contract.

pub trait Animal {
    fn name(&self) -> &str;
    fn make_sound(&self);
}

pub trait Flyable {
    fn fly(&self);
}

pub trait Swimmable {
    fn swim(&self);
}

pub struct Eagle;

impl Animal for Eagle {
    fn name(&self) -> &str {
        "Eagle"
    }

    fn make_sound(&self) {
        println!("{} lets out a piercing cry", self.name());
    }
}

impl Flyable for Eagle {
    fn fly(&self) {
        println!("Eagle soars high above the mountains");
    }
}

pub struct Penguin;

impl Animal for Penguin {
    fn name(&self) -> &str {
        "Penguin"
    }

    fn make_sound(&self) {
        println!("{} makes penguin noises", self.name());
    }
}

impl Swimmable for Penguin {
    fn swim(&self) {
        println!("Penguin glides playfully underwater");
    }
}

pub struct Duck;

impl Animal for Duck {
    fn name(&self) -> &str {
        "Duck"
    }

    fn make_sound(&self) {
        println!("{} quacks", self.name());
    }
}

impl Flyable for Duck {
    fn fly(&self) {
        println!("Duck flies over the pond");
    }
}

impl Swimmable for Duck {
    fn swim(&self) {
        println!("Duck paddles on the surface");
    }
}

pub fn make_animal_sound(animal: &dyn Animal) {
    animal.make_sound();
}

pub fn make_it_fly(flyer: &impl Flyable) {
    flyer.fly();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_animals_have_names() {
        let animals: Vec<Box<dyn Animal>> = vec![Box::new(Eagle), Box::new(Penguin), Box::new(Duck)];
        let names: Vec<&str> = animals.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Eagle", "Penguin", "Duck"]);
    }

    #[test]
    fn test_capability_groups_compile() {
        // The point of the design is what the compiler accepts: only types
        // implementing the capability can join these collections.
        let flyers: Vec<Box<dyn Flyable>> = vec![Box::new(Eagle), Box::new(Duck)];
        let swimmers: Vec<Box<dyn Swimmable>> = vec![Box::new(Penguin), Box::new(Duck)];
        assert_eq!(flyers.len(), 2);
        assert_eq!(swimmers.len(), 2);
    }
}
