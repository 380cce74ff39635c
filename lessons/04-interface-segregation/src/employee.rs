//! One trait per workplace role.

pub trait Work {
    fn work(&self);
}

pub trait Eat {
    fn eat(&self);
}

pub trait Manage {
    fn manage_team(&self);
    fn fire_employee(&self, id: &str);
    fn approve_vacation(&self, id: &str);
}

pub struct RegularEmployee;

impl Work for RegularEmployee {
    fn work(&self) {
        println!("Doing my job");
    }
}

impl Eat for RegularEmployee {
    fn eat(&self) {
        println!("Going to lunch");
    }
}

pub struct Manager;

impl Work for Manager {
    fn work(&self) {
        println!("Planning the team's work");
    }
}

impl Eat for Manager {
    fn eat(&self) {
        println!("Going to lunch");
    }
}

impl Manage for Manager {
    fn manage_team(&self) {
        println!("Managing the team");
    }

    fn fire_employee(&self, id: &str) {
        println!("Letting employee {id} go");
    }

    fn approve_vacation(&self, id: &str) {
        println!("Approving vacation for {id}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everyone_works_and_eats() {
        fn lunch_break(person: &(impl Work + Eat)) {
            person.work();
            person.eat();
        }
        lunch_break(&RegularEmployee);
        lunch_break(&Manager);
    }

    #[test]
    fn test_only_managers_manage() {
        // RegularEmployee has no Manage impl, so this collection can only
        // ever hold managers.
        let managers: Vec<Box<dyn Manage>> = vec![Box::new(Manager)];
        for manager in &managers {
            manager.approve_vacation("456");
        }
    }
}
