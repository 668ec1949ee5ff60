use crate::RequestGeneration;

use googletest::assert_that;
use googletest::prelude::*;

#[test]
fn given_single_ticket_when_applied_then_accepted() {
    let generation = RequestGeneration::new();
    let ticket = generation.begin();

    assert_that!(generation.try_apply(ticket), eq(true));
}

#[test]
fn given_newer_ticket_applied_when_older_finishes_then_rejected() {
    let generation = RequestGeneration::new();
    let older = generation.begin();
    let newer = generation.begin();

    assert_that!(generation.try_apply(newer), eq(true));
    assert_that!(generation.try_apply(older), eq(false));
    assert!(newer > older);
}

#[test]
fn given_newer_ticket_in_flight_when_older_finishes_then_still_applied() {
    let generation = RequestGeneration::new();
    let older = generation.begin();
    let newer = generation.begin();

    assert_that!(generation.try_apply(older), eq(true));
    assert_that!(generation.try_apply(newer), eq(true));
}

#[test]
fn given_ticket_already_applied_when_applied_again_then_rejected() {
    let generation = RequestGeneration::new();
    let ticket = generation.begin();

    assert_that!(generation.try_apply(ticket), eq(true));
    assert_that!(generation.try_apply(ticket), eq(false));
}
