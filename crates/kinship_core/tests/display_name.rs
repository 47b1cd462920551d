use kinship_core::{is_right_to_left, resolve_display_name, Person};

#[test]
fn first_and_last_name_join_with_space() {
    let mut person = Person::new("xyz");
    person.first_name = Some("Ali".to_string());
    person.last_name = Some("Raza".to_string());
    assert_eq!(resolve_display_name(Some(&person)), "Ali Raza");
}

#[test]
fn single_name_part_stands_alone() {
    let mut person = Person::new("xyz");
    person.last_name = Some("Raza".to_string());
    assert_eq!(resolve_display_name(Some(&person)), "Raza");
}

#[test]
fn id_is_the_last_resort() {
    let person = Person::new("xyz");
    assert_eq!(resolve_display_name(Some(&person)), "xyz");
}

#[test]
fn absent_person_is_unknown() {
    assert_eq!(resolve_display_name(None), "Unknown");
}

#[test]
fn display_name_beats_everything() {
    let mut person = Person::new("xyz");
    person.first_name = Some("Ali".to_string());
    person.last_name = Some("Raza".to_string());
    person.display_name = Some("Ali Raza علی رضا".to_string());
    let resolved = resolve_display_name(Some(&person));
    assert_eq!(resolved, "Ali Raza علی رضا");
    assert!(is_right_to_left(&resolved));
}

#[test]
fn latin_only_names_are_left_to_right() {
    let mut person = Person::new("xyz");
    person.first_name = Some("Ali".to_string());
    assert!(!is_right_to_left(&resolve_display_name(Some(&person))));
}
