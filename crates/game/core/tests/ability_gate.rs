mod common;

use common::{Fixture, SequenceRng};
use rogue_core::{
    Ability, ActionCategory, CardinalDirection, HitCommand, MoveCommand, PcgRng, Position,
    RestCommand, StatusEffect, StatusKind, evaluate_ability, raw, turn,
};

#[test]
fn paralysis_lets_a_move_through_about_a_third_of_the_time() {
    let mut fixture = Fixture::open(8, 8).with_rng(PcgRng::new(0xC0FFEE));
    let player = fixture.add_player(Position::new(3, 3), 10);
    let mut ctx = fixture.ctx();

    let trials = 10_000;
    let mut acted = 0;
    for _ in 0..trials {
        ctx.add_status(player, StatusEffect::new(StatusKind::Paralysis, 1_000));
        let ability = evaluate_ability(&mut ctx, player, ActionCategory::Move);
        if ability.can_act {
            acted += 1;
        } else {
            assert_eq!(ability, Ability::NEGATED);
        }
    }

    let rate = f64::from(acted) / f64::from(trials);
    assert!((0.30..=0.36).contains(&rate), "move success rate {rate}");
}

#[test]
fn overcoming_paralysis_wears_it_down() {
    // chance(33) passes on 0, then the shortening roll of 1..=2 reads 1 -> 2.
    let mut fixture = Fixture::open(8, 8).with_rng(SequenceRng::new([0, 1]));
    let player = fixture.add_player(Position::new(3, 3), 10);
    let mut ctx = fixture.ctx();

    ctx.add_status(player, StatusEffect::new(StatusKind::Paralysis, 2));
    let ability = evaluate_ability(&mut ctx, player, ActionCategory::Act);
    assert_eq!(ability, Ability::ALLOWED);
    assert!(!ctx.has_status(player, StatusKind::Paralysis));
    drop(ctx);
    assert!(fixture.logged("You are no longer paralyzed."));
}

#[test]
fn fighting_through_paralysis_still_answers_to_sleep() {
    let mut fixture = Fixture::open(8, 8).with_rng(SequenceRng::constant(0));
    let player = fixture.add_player(Position::new(3, 3), 10);
    let mut ctx = fixture.ctx();

    ctx.add_status(player, StatusEffect::new(StatusKind::Paralysis, 10));
    ctx.add_status(player, StatusEffect::new(StatusKind::Sleep, 10));
    let ability = evaluate_ability(&mut ctx, player, ActionCategory::Act);

    assert_eq!(ability, Ability::NEGATED);
    assert_eq!(
        ctx.status(player, StatusKind::Paralysis).map(|effect| effect.time_left),
        Some(9)
    );
    drop(ctx);
    assert!(fixture.logged("You fight through the paralysis."));
    assert!(fixture.logged("You are fast asleep."));
}

#[test]
fn fear_blocks_attacks_without_spending_the_turn() {
    let mut fixture = Fixture::open(8, 8);
    let player = fixture.add_player(Position::new(3, 3), 10);
    let rat = fixture.add_monster("rat", Position::new(4, 3), 5);

    fixture
        .ctx()
        .add_status(player, StatusEffect::new(StatusKind::Fear, 5));
    let consumed = turn(&mut HitCommand::at(player, rat), &mut fixture.ctx()).unwrap();

    assert!(!consumed);
    assert_eq!(fixture.actor(rat).hp, 5);
    assert!(fixture.logged("You are too afraid to attack."));
    // No upkeep ran, so the fear did not tick.
    assert_eq!(
        fixture.actor(player).statuses.get(StatusKind::Fear).map(|e| e.time_left),
        Some(5)
    );

    let moved = turn(
        &mut MoveCommand::new(player, CardinalDirection::North),
        &mut fixture.ctx(),
    )
    .unwrap();
    assert!(moved);
    assert_eq!(fixture.actor(player).position, Some(Position::new(3, 2)));
}

#[test]
fn hard_blocks_come_before_soft_negation() {
    let mut fixture = Fixture::open(8, 8);
    let player = fixture.add_player(Position::new(3, 3), 10);
    let mut ctx = fixture.ctx();
    ctx.add_status(player, StatusEffect::new(StatusKind::Sleep, 5));
    ctx.add_status(player, StatusEffect::new(StatusKind::Root, 5));

    assert_eq!(
        evaluate_ability(&mut ctx, player, ActionCategory::Move),
        Ability::BLOCKED
    );
    assert_eq!(
        evaluate_ability(&mut ctx, player, ActionCategory::Act),
        Ability::NEGATED
    );
}

#[test]
fn levitation_blocks_moving_and_hitting_but_not_resting() {
    let mut fixture = Fixture::open(8, 8);
    let player = fixture.add_player(Position::new(3, 3), 10);
    let mut ctx = fixture.ctx();
    ctx.add_status(player, StatusEffect::new(StatusKind::Levitation, 5));

    assert_eq!(evaluate_ability(&mut ctx, player, ActionCategory::Move), Ability::BLOCKED);
    assert_eq!(evaluate_ability(&mut ctx, player, ActionCategory::Hit), Ability::BLOCKED);
    assert!(turn(&mut RestCommand::new(player), &mut ctx).unwrap());
}

#[test]
fn sleeping_actor_loses_the_turn_and_still_ticks() {
    let mut fixture = Fixture::open(8, 8);
    let player = fixture.add_player(Position::new(3, 3), 10);
    fixture
        .ctx()
        .add_status(player, StatusEffect::new(StatusKind::Sleep, 3));

    let consumed = turn(
        &mut MoveCommand::new(player, CardinalDirection::East),
        &mut fixture.ctx(),
    )
    .unwrap();

    assert!(consumed);
    assert_eq!(fixture.actor(player).position, Some(Position::new(3, 3)));
    assert_eq!(
        fixture.actor(player).statuses.get(StatusKind::Sleep).map(|e| e.time_left),
        Some(2)
    );
    assert!(fixture.logged("You are fast asleep."));
}

#[test]
fn slow_negates_on_a_coin_flip() {
    let mut fixture = Fixture::open(8, 8).with_rng(SequenceRng::constant(0));
    let player = fixture.add_player(Position::new(3, 3), 10);
    let mut ctx = fixture.ctx();
    ctx.add_status(player, StatusEffect::new(StatusKind::Slow, 5));
    assert_eq!(evaluate_ability(&mut ctx, player, ActionCategory::Move), Ability::NEGATED);

    let mut fixture = Fixture::open(8, 8).with_rng(SequenceRng::constant(99));
    let player = fixture.add_player(Position::new(3, 3), 10);
    let mut ctx = fixture.ctx();
    ctx.add_status(player, StatusEffect::new(StatusKind::Slow, 5));
    assert_eq!(evaluate_ability(&mut ctx, player, ActionCategory::Move), Ability::ALLOWED);
}

#[test]
fn moving_can_break_a_freeze() {
    let mut fixture = Fixture::open(8, 8).with_rng(SequenceRng::constant(0));
    let player = fixture.add_player(Position::new(3, 3), 10);
    let mut ctx = fixture.ctx();
    ctx.add_status(player, StatusEffect::new(StatusKind::Freeze, 5));

    assert_eq!(evaluate_ability(&mut ctx, player, ActionCategory::Hit), Ability::NEGATED);
    assert!(ctx.has_status(player, StatusKind::Freeze));

    assert_eq!(evaluate_ability(&mut ctx, player, ActionCategory::Move), Ability::ALLOWED);
    assert!(!ctx.has_status(player, StatusKind::Freeze));
    drop(ctx);
    assert!(fixture.logged("You break free of the ice."));
}

#[test]
fn failing_to_break_a_freeze_negates_the_move() {
    let mut fixture = Fixture::open(8, 8).with_rng(SequenceRng::constant(99));
    let player = fixture.add_player(Position::new(3, 3), 10);
    let mut ctx = fixture.ctx();
    ctx.add_status(player, StatusEffect::new(StatusKind::Freeze, 5));

    assert_eq!(evaluate_ability(&mut ctx, player, ActionCategory::Move), Ability::NEGATED);
    assert!(ctx.has_status(player, StatusKind::Freeze));
}

#[test]
fn thirst_and_hunger_only_gate_the_player() {
    let mut fixture = Fixture::open(8, 8).with_rng(SequenceRng::constant(0));
    let player = fixture.add_player(Position::new(3, 3), 10);
    let rat = fixture.add_monster("rat", Position::new(5, 5), 5);
    let threshold = fixture.config.thirst_threshold;
    fixture.actor_mut(player).thirst = threshold;
    fixture.actor_mut(rat).thirst = threshold;

    let mut ctx = fixture.ctx();
    assert_eq!(evaluate_ability(&mut ctx, player, ActionCategory::Act), Ability::NEGATED);
    assert_eq!(evaluate_ability(&mut ctx, rat, ActionCategory::Act), Ability::ALLOWED);
    drop(ctx);
    assert!(fixture.logged("You are too thirsty to act."));

    let hunger_threshold = fixture.config.hunger_threshold;
    fixture.actor_mut(player).thirst = 0;
    fixture.actor_mut(player).hunger = hunger_threshold;
    let mut ctx = fixture.ctx();
    assert_eq!(evaluate_ability(&mut ctx, player, ActionCategory::Move), Ability::NEGATED);
    drop(ctx);
    assert!(fixture.logged("You are too weak from hunger."));
}

#[test]
fn confusion_can_send_a_move_astray() {
    // chance(50) passes on 0, then index 3 of the direction table is West.
    let mut fixture = Fixture::open(8, 8).with_rng(SequenceRng::new([0, 3]));
    let player = fixture.add_player(Position::new(3, 3), 10);
    fixture
        .ctx()
        .add_status(player, StatusEffect::new(StatusKind::Confusion, 5));

    let moved = raw(
        &mut MoveCommand::new(player, CardinalDirection::East),
        &mut fixture.ctx(),
    )
    .unwrap();
    assert!(moved);
    assert_eq!(fixture.actor(player).position, Some(Position::new(2, 3)));
    assert!(fixture.logged("You stumble around in confusion."));
}
