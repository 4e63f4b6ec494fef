// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::person::Person;

pub fn person(name: &str, surname: &str) -> Person {
    Person::new(name.to_string(), surname.to_string())
}

pub fn person_mario_rossi() -> Person {
    person("Mario", "Rossi")
}

pub fn person_giovanni_rossi() -> Person {
    person("Giovanni", "Rossi")
}

pub fn person_roberto_rossi() -> Person {
    person("Roberto", "Rossi")
}

pub fn person_marco_rossi() -> Person {
    person("Marco", "Rossi")
}

pub fn person_ugo_rossi() -> Person {
    person("Ugo", "Rossi")
}

pub fn person_marco_bianchi() -> Person {
    person("Marco", "Bianchi")
}

pub fn person_manuel_bianchi() -> Person {
    person("Manuel", "Bianchi")
}

pub fn person_francesca_bianchi() -> Person {
    person("Francesca", "Bianchi")
}

/// Five Rossi followed by three Bianchi, in a fixed order.
///
/// The canonical data set for capped surname grouping: a cap of two splits
/// the Rossi run into 2 + 2 + 1 and the Bianchi run into 2 + 1, with the
/// surname boundary forcing a flush even though the cap was not reached.
pub fn two_families() -> Vec<Person> {
    vec![
        person_mario_rossi(),
        person_giovanni_rossi(),
        person_roberto_rossi(),
        person_marco_rossi(),
        person_ugo_rossi(),
        person_marco_bianchi(),
        person_manuel_bianchi(),
        person_francesca_bianchi(),
    ]
}
