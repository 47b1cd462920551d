use kinship_core::{
    children_of, children_of_couple, compare_by_sibling_order, normalize, shared_parent_count,
    siblings_of, spouses_of, FamilyTree, Person,
};

/// P1 married to S1 and S2; C1 is a child of P1+S1, C2 of P1+S2.
fn two_marriage_family() -> FamilyTree {
    let mut tree = FamilyTree::new("p1");

    let mut p1 = Person::new("p1");
    p1.spouse_ids = vec!["s1".to_string(), "s2".to_string()];
    tree.insert(p1);
    tree.insert(Person::new("s1"));
    tree.insert(Person::new("s2"));

    let mut c1 = Person::new("c1");
    c1.parent_ids = vec!["p1".to_string(), "s1".to_string()];
    c1.order_id = Some(1);
    tree.insert(c1);

    let mut c2 = Person::new("c2");
    c2.parent_ids = vec!["p1".to_string(), "s2".to_string()];
    c2.order_id = Some(2);
    tree.insert(c2);

    normalize(tree).tree
}

fn ids(persons: &[&Person]) -> Vec<String> {
    persons.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn couple_children_are_disambiguated_per_marriage() {
    let tree = two_marriage_family();

    assert_eq!(ids(&children_of_couple(&tree, "p1", "s1")), vec!["c1"]);
    assert_eq!(ids(&children_of_couple(&tree, "p1", "s2")), vec!["c2"]);
}

#[test]
fn children_of_unions_across_all_spouses() {
    let tree = two_marriage_family();
    let p1 = tree.person("p1").expect("p1 should exist");

    assert_eq!(ids(&children_of(&tree, p1)), vec!["c1", "c2"]);
}

#[test]
fn spouses_follow_recorded_order() {
    let tree = two_marriage_family();
    let p1 = tree.person("p1").expect("p1 should exist");

    assert_eq!(ids(&spouses_of(&tree, p1)), vec!["s1", "s2"]);
}

#[test]
fn half_siblings_count_as_siblings() {
    let tree = two_marriage_family();
    let c1 = tree.person("c1").expect("c1 should exist");

    // c1 and c2 share only p1, yet siblings_of reports them together.
    let siblings = siblings_of(&tree, c1);
    assert_eq!(ids(&siblings), vec!["c2"]);
    let c2 = tree.person("c2").expect("c2 should exist");
    assert_eq!(shared_parent_count(c1, c2), 1);
}

#[test]
fn person_is_never_their_own_sibling() {
    let tree = two_marriage_family();
    let c1 = tree.person("c1").expect("c1 should exist");
    assert!(!ids(&siblings_of(&tree, c1)).contains(&"c1".to_string()));
}

#[test]
fn queries_are_empty_for_person_with_no_relationships() {
    let tree = two_marriage_family();
    let loner = Person::new("loner");

    assert!(spouses_of(&tree, &loner).is_empty());
    assert!(children_of(&tree, &loner).is_empty());
    assert!(siblings_of(&tree, &loner).is_empty());
    assert!(children_of_couple(&tree, "loner", "also-absent").is_empty());
}

#[test]
fn sibling_sort_puts_missing_birth_order_last() {
    let mut tree = FamilyTree::new("father");
    tree.insert(Person::new("father"));

    let mut second = Person::new("second");
    second.parent_ids = vec!["father".to_string()];
    second.order_id = Some(2);
    second.display_name = Some("Aaa".to_string());
    tree.insert(second);

    let mut first = Person::new("first");
    first.parent_ids = vec!["father".to_string()];
    first.order_id = Some(1);
    first.display_name = Some("Zzz".to_string());
    tree.insert(first);

    let mut unranked = Person::new("unranked");
    unranked.parent_ids = vec!["father".to_string()];
    unranked.display_name = Some("Aaa".to_string());
    tree.insert(unranked);

    let tree = normalize(tree).tree;
    let father = tree.person("father").expect("father should exist");
    let order: Vec<String> = children_of(&tree, father)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(order, vec!["first", "second", "unranked"]);
}

#[test]
fn name_breaks_ties_case_insensitively() {
    let mut a = Person::new("a");
    a.display_name = Some("zuhair".to_string());
    let mut b = Person::new("b");
    b.display_name = Some("Abbas".to_string());

    assert_eq!(
        compare_by_sibling_order(&b, &a),
        std::cmp::Ordering::Less
    );
}
