//! End-to-end runs over small hand-built maps.

use gamestate::core::{GameError, GameMap, StateRef, Value, ValueStore};
use gamestate::engine::{RunConfig, Runner};
use std::sync::mpsc::{self, Receiver, Sender};

/// Five states that report their number on `tx` and return it.
fn numbered_states(map: &mut GameMap, tx: &Sender<i64>) -> Vec<StateRef> {
    (1..=5)
        .map(|n| {
            let tx = tx.clone();
            map.new_state(move |_: &mut ValueStore| {
                tx.send(n).unwrap();
                Value::Int(n)
            })
        })
        .collect()
}

fn visited(rx: &Receiver<i64>) -> Vec<i64> {
    rx.try_iter().collect()
}

#[test]
fn default_transitions_follow_chain() {
    let (tx, rx) = mpsc::channel();
    let mut map = GameMap::new();
    let s = numbered_states(&mut map, &tx);

    map.transition(s[0], s[2]).unwrap();
    map.transition(s[2], s[3]).unwrap();
    map.transition(s[3], s[1]).unwrap();
    map.transition(s[1], s[4]).unwrap();

    let result = map.run_game(s[0], s[4]).unwrap();

    assert_eq!(result, Value::Int(5));
    assert_eq!(visited(&rx), vec![1, 3, 4, 2, 5]);
}

#[test]
fn conditional_transitions_follow_chain() {
    let (tx, rx) = mpsc::channel();
    let mut map = GameMap::new();
    let s = numbered_states(&mut map, &tx);

    map.transition_on(s[0], s[2], 1).unwrap();
    map.transition_on(s[2], s[3], 3).unwrap();
    map.transition_on(s[3], s[1], 4).unwrap();
    map.transition_on(s[1], s[4], 2).unwrap();

    let result = map.run_game(s[0], s[4]).unwrap();

    assert_eq!(result, Value::Int(5));
    assert_eq!(visited(&rx), vec![1, 3, 4, 2, 5]);
}

#[test]
fn store_accumulates_across_states() {
    let mut map = GameMap::new();
    map.set_value("total", 0);

    let states: Vec<StateRef> = (1..=5)
        .map(|n| {
            map.new_state(move |store: &mut ValueStore| {
                store.set(format!("number{n}"), n);
                let total = store.get("total").and_then(Value::as_int).unwrap_or(0);
                store.set("total", total + n);
                Value::Int(n)
            })
        })
        .collect();

    map.transition(states[0], states[2]).unwrap();
    map.transition(states[2], states[3]).unwrap();
    map.transition(states[3], states[1]).unwrap();
    map.transition(states[1], states[4]).unwrap();

    assert_eq!(map.run_game(states[0], states[4]).unwrap(), Value::Int(5));
    assert_eq!(map.get_value("total"), Some(&Value::Int(15)));
    for n in 1..=5 {
        assert_eq!(
            map.get_value(&format!("number{n}")),
            Some(&Value::Int(n)),
            "number{n} should be stored"
        );
    }

    map.delete_value("total");
    assert!(map.get_value("total").is_none());
}

#[test]
fn four_state_accumulation_totals_ten() {
    let mut map = GameMap::new();
    map.set_value("total", 0);

    let states: Vec<StateRef> = (1..=4)
        .map(|n| {
            map.new_state(move |store: &mut ValueStore| {
                let total = store.get("total").and_then(Value::as_int).unwrap_or(0);
                store.set("total", total + n);
                Value::Unit
            })
        })
        .collect();
    for pair in states.windows(2) {
        map.transition(pair[0], pair[1]).unwrap();
    }

    map.run_game_to_end(states[0]).unwrap();
    assert_eq!(map.get_value("total"), Some(&Value::Int(10)));
}

#[test]
fn external_value_selects_ending() {
    let mut map = GameMap::new();
    let start = map.new_state(|_: &mut ValueStore| Value::Int(0));
    let middle = map.new_state(|store: &mut ValueStore| {
        store.get("ending").cloned().unwrap_or(Value::Int(0))
    });
    let end1 = map.new_state(|_: &mut ValueStore| Value::Int(-1));
    let end2 = map.new_state(|_: &mut ValueStore| Value::Int(-2));
    let end3 = map.new_state(|_: &mut ValueStore| Value::Int(-3));

    map.transition(start, middle).unwrap();
    map.transition_on(middle, end1, 1).unwrap();
    map.transition_on(middle, end2, 2).unwrap();
    map.transition_on(middle, end3, 3).unwrap();

    for (ending, expected) in [(1, -1), (2, -2), (3, -3)] {
        map.set_value("ending", ending);
        assert_eq!(map.run_game_to_end(start).unwrap(), Value::Int(expected));
    }
}

#[test]
fn missing_ending_stops_at_middle() {
    let mut map = GameMap::new();
    let start = map.new_state(|_: &mut ValueStore| Value::Int(0));
    let middle = map.new_state(|store: &mut ValueStore| {
        store.get("ending").cloned().unwrap_or(Value::Int(0))
    });
    let end1 = map.new_state(|_: &mut ValueStore| Value::Int(-1));
    map.transition(start, middle).unwrap();
    map.transition_on(middle, end1, 1).unwrap();

    assert_eq!(map.run_game_to_end(start).unwrap(), Value::Int(0));

    let result = map.run_game(start, end1);
    assert!(matches!(
        result,
        Err(GameError::NoTransitionFound { from, .. }) if from == middle.id()
    ));
}

#[test]
fn end_state_is_a_sink() {
    let (tx, rx) = mpsc::channel();
    let mut map = GameMap::new();
    let s = numbered_states(&mut map, &tx);

    // The end state has outgoing transitions that must not be followed.
    map.transition(s[0], s[1]).unwrap();
    map.transition(s[1], s[2]).unwrap();
    map.transition(s[2], s[0]).unwrap();

    let result = map.run_game(s[0], s[1]).unwrap();

    assert_eq!(result, Value::Int(2));
    assert_eq!(visited(&rx), vec![1, 2]);
}

#[test]
fn target_run_never_executes_beyond_end() {
    let (tx, rx) = mpsc::channel();
    let mut map = GameMap::new();
    let s = numbered_states(&mut map, &tx);
    for pair in s.windows(2) {
        map.transition(pair[0], pair[1]).unwrap();
    }

    let runner = Runner::new(RunConfig::builder().record_history(true).build());
    let outcome = runner.run_to_target(&mut map, s[0], s[2]).unwrap();

    assert_eq!(outcome.result, Value::Int(3));
    assert_eq!(outcome.steps, 3);
    assert_eq!(visited(&rx), vec![1, 2, 3]);

    let history = outcome.history.unwrap();
    assert_eq!(history.path(), vec![s[0].id(), s[1].id(), s[2].id()]);
}

#[test]
fn maps_do_not_share_values() {
    let mut first = GameMap::new();
    let mut second = GameMap::new();

    let writer = first.new_state(|store: &mut ValueStore| {
        store.set("shared", "first");
        Value::Unit
    });
    let reader = second.new_state(|store: &mut ValueStore| {
        Value::Bool(store.contains("shared"))
    });

    first.run_game_to_end(writer).unwrap();

    assert_eq!(second.run_game_to_end(reader).unwrap(), Value::Bool(false));
    assert_eq!(
        first.get_value("shared").and_then(Value::as_str),
        Some("first")
    );
}

#[test]
fn string_outputs_drive_branching() {
    let mut map = GameMap::new();
    let door = map.new_state(|store: &mut ValueStore| {
        if store.get("has_key") == Some(&Value::Bool(true)) {
            Value::from("open")
        } else {
            Value::from("locked")
        }
    });
    let inside = map.new_state(|_: &mut ValueStore| Value::from("inside"));
    let outside = map.new_state(|_: &mut ValueStore| Value::from("outside"));

    map.transition_on(door, inside, "open").unwrap();
    map.transition(door, outside).unwrap();

    assert_eq!(map.run_game_to_end(door).unwrap(), Value::from("outside"));

    map.set_value("has_key", true);
    assert_eq!(map.run_game_to_end(door).unwrap(), Value::from("inside"));
}
