//! Given steps for message board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a board seeded with the sample messages")]
fn seeded_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.store.reset_to_seed()).wrap_err("seed board for scenario")
}

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.store.delete_all_messages()).wrap_err("clear board for scenario")
}
