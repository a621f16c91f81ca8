//! Multiple Endings
//!
//! This demo builds a small branching story and runs it to completion once
//! per ending.
//!
//! Key concepts:
//! - Conditional transitions keyed on action output
//! - States communicating through the shared value store
//! - Runs that end wherever no transition matches
//!
//! Run with: cargo run --example multiple_endings

use gamestate::core::{GameError, GameMap, Value, ValueStore};
use gamestate::engine::{RunConfig, Runner};

fn main() -> Result<(), GameError> {
    println!("=== Multiple Endings Example ===\n");

    let mut map = GameMap::new();

    let start = map.new_state(|store: &mut ValueStore| {
        println!("You wake up at a crossroads.");
        store.set("visits", 0);
        Value::Unit
    });
    let crossroads = map.new_state(|store: &mut ValueStore| {
        let visits = store.get("visits").and_then(Value::as_int).unwrap_or(0);
        store.set("visits", visits + 1);
        store.get("path").cloned().unwrap_or_default()
    });
    let forest = map.new_state(|_: &mut ValueStore| {
        println!("You wander into the forest and are never seen again.");
        Value::from("lost")
    });
    let village = map.new_state(|_: &mut ValueStore| {
        println!("You reach the village and settle down.");
        Value::from("home")
    });
    let mountain = map.new_state(|_: &mut ValueStore| {
        println!("You climb the mountain and see the whole world.");
        Value::from("summit")
    });

    map.transition(start, crossroads)?;
    map.transition_on(crossroads, forest, "left")?;
    map.transition_on(crossroads, village, "straight")?;
    map.transition_on(crossroads, mountain, "right")?;

    let runner = Runner::new(RunConfig::builder().record_history(true).build());

    for path in ["left", "straight", "right", "back"] {
        map.set_value("path", path);
        let outcome = runner.run_to_completion(&mut map, start)?;
        let visited = outcome
            .history
            .map(|h| h.path().len())
            .unwrap_or_default();

        println!(
            "path {:?}: ending {} after {} steps ({} states visited)\n",
            path, outcome.result, outcome.steps, visited
        );
    }

    println!("=== Example Complete ===");
    Ok(())
}
