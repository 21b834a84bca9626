//! Speaker roster grouping tests.

use podium::models::speaker::{Speaker, by_row};

fn speaker(id: i64, username: &str, first_name: &str, last_name: &str) -> Speaker {
    Speaker {
        id,
        username: username.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

#[test]
fn rows_hold_four_with_a_short_tail() {
    let rows = by_row((0..10).collect::<Vec<_>>(), 4);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].len(), 4);
    assert_eq!(rows[1].len(), 4);
    assert_eq!(rows[2].len(), 2);
}

#[test]
fn exact_multiple_fills_every_row() {
    let rows = by_row((0..8).collect::<Vec<_>>(), 4);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.len() == 4));
}

#[test]
fn empty_input_produces_no_rows() {
    let rows = by_row(Vec::<i64>::new(), 4);
    assert!(rows.is_empty());
}

#[test]
fn input_order_is_preserved_across_rows() {
    let items: Vec<i64> = (0..11).collect();
    let rows = by_row(items.clone(), 4);
    let flattened: Vec<i64> = rows.into_iter().flatten().collect();
    assert_eq!(flattened, items);
}

#[test]
fn speakers_group_like_any_other_sequence() {
    let speakers = vec![
        speaker(1, "ada", "Ada", "Admin"),
        speaker(2, "bob", "Bob", "Builder"),
        speaker(3, "cara", "Cara", "Coder"),
        speaker(4, "dan", "Dan", "Dev"),
        speaker(5, "eve", "Eve", "Eng"),
    ];
    let rows = by_row(speakers, 4);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 4);
    assert_eq!(rows[1].len(), 1);
    assert_eq!(rows[1][0].full_name(), "Eve Eng");
}

#[test]
fn full_name_falls_back_to_username() {
    let s = speaker(9, "ghost", "", "");
    assert_eq!(s.full_name(), "ghost");
    let s = speaker(10, "solo", "Solo", "");
    assert_eq!(s.full_name(), "Solo");
}
