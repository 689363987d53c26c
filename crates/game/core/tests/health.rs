mod common;

use common::{Fixture, SequenceRng};
use rogue_core::{
    CardinalDirection, GameEvent, GameOutcome, HitCommand, Item, Position, WorldOracle, turn,
};

#[test]
fn heal_never_exceeds_max_hp() {
    let mut fixture = Fixture::open(6, 6);
    let player = fixture.add_player(Position::new(2, 2), 10);
    fixture.actor_mut(player).hp = 7;

    assert_eq!(fixture.ctx().heal(player, 5), 3);
    assert_eq!(fixture.actor(player).hp, 10);
    assert_eq!(fixture.ctx().heal(player, 5), 0);
}

#[test]
fn damage_can_overshoot_below_zero() {
    let mut fixture = Fixture::open(6, 6).with_rng(SequenceRng::constant(99));
    fixture.add_player(Position::new(0, 0), 10);
    let rat = fixture.add_monster("rat", Position::new(2, 2), 3);

    let report = fixture.ctx().damage(rat, 7, None).unwrap();
    assert_eq!(report.hp_before, 3);
    assert_eq!(report.hp_after, -4);
    assert!(report.killed);
    assert!(fixture.ctx().damage(rat, 1, None).is_none(), "the dead take no damage");
}

#[test]
fn killing_a_monster_credits_the_player_and_leaves_a_corpse() {
    // Rolls: hit damage 1..=3 reads 99 -> 1 + 99 % 3 = 1; loot chance 99 fails.
    let mut fixture = Fixture::open(6, 6).with_rng(SequenceRng::constant(99));
    let player = fixture.add_player(Position::new(2, 2), 10);
    let rat = fixture.add_monster("rat", Position::new(3, 2), 1);

    let consumed = turn(
        &mut HitCommand::new(player, CardinalDirection::East),
        &mut fixture.ctx(),
    )
    .unwrap();

    assert!(consumed);
    assert!(!fixture.state.entities.is_alive(rat));
    assert!(!fixture.state.turn.contains(rat));
    assert_eq!(fixture.world.corpse_at(Position::new(3, 2)), Some(rat));
    assert_eq!(fixture.state.kills, 1);
    assert_eq!(fixture.actor(player).kills, 1);
    assert!(fixture.logged("You hit the rat."));
    assert!(fixture.logged("You kill the rat!"));
    assert_eq!(
        fixture.state.drain_events(),
        vec![GameEvent::Died {
            actor: rat,
            killer: Some(player)
        }]
    );
}

#[test]
fn corpses_spill_onto_the_nearest_ring() {
    let mut fixture = Fixture::rows(&["#####", "#~~.#", "#~~~#", "#####"])
        .with_rng(SequenceRng::constant(99));
    fixture.add_player(Position::new(3, 1), 10);
    let eel = fixture.add_monster("eel", Position::new(2, 2), 1);

    fixture.ctx().damage(eel, 5, None);
    assert!(!fixture.world.has_corpse(Position::new(2, 2)));
    assert_eq!(fixture.world.corpse_at(Position::new(3, 1)), Some(eel));
}

#[test]
fn loot_drops_on_the_corpse() {
    // Loot chance passes on 0 and the weighted pick lands on the first entry.
    let mut fixture = Fixture::open(6, 6).with_rng(SequenceRng::constant(0));
    fixture.add_player(Position::new(0, 0), 10);
    let rat = fixture.add_monster("rat", Position::new(3, 3), 2);
    fixture.actor_mut(rat).inventory.push(Item::Waterskin { hydration: 10 });

    fixture.ctx().damage(rat, 2, None);
    let items = fixture.world.items_at(Position::new(3, 3));
    assert_eq!(
        items,
        &[
            Item::Waterskin { hydration: 10 },
            Item::Ration { nutrition: 200 }
        ]
    );
    assert!(fixture.logged("The rat dies."));
}

#[test]
fn the_player_dying_ends_the_game() {
    let mut fixture = Fixture::open(6, 6).with_rng(SequenceRng::constant(0));
    let player = fixture.add_player(Position::new(1, 1), 3);
    let ogre = fixture.add_monster("ogre", Position::new(2, 1), 20);

    fixture.ctx().damage(player, 9, Some(ogre));

    assert_eq!(
        fixture.state.outcome,
        Some(GameOutcome::PlayerDied { killer: Some(ogre) })
    );
    assert!(fixture.state.is_over());
    assert!(fixture.logged("You die..."));
    assert_eq!(fixture.actor(ogre).kills, 1);
    assert_eq!(fixture.state.kills, 0);
}

#[test]
fn damage_resets_recovery_on_both_sides() {
    let mut fixture = Fixture::open(6, 6);
    let player = fixture.add_player(Position::new(1, 1), 10);
    let rat = fixture.add_monster("rat", Position::new(2, 1), 10);
    fixture.actor_mut(player).recovery_timer = 6;
    fixture.actor_mut(rat).recovery_timer = 4;

    fixture.ctx().damage(rat, 1, Some(player));
    assert_eq!(fixture.actor(player).recovery_timer, 0);
    assert_eq!(fixture.actor(rat).recovery_timer, 0);
}

#[test]
fn injured_actors_recover_after_the_interval() {
    let mut fixture = Fixture::open(6, 6);
    let player = fixture.add_player(Position::new(1, 1), 10);
    fixture.actor_mut(player).hp = 5;
    let interval = fixture.config.recovery_interval;

    for _ in 0..interval - 1 {
        fixture.ctx().run_upkeep(player);
    }
    assert_eq!(fixture.actor(player).hp, 5);
    fixture.ctx().run_upkeep(player);
    assert_eq!(fixture.actor(player).hp, 6);
    assert_eq!(fixture.actor(player).hunger, interval);
}

#[test]
fn damage_report_aggregates_one_turn() {
    let mut fixture = Fixture::open(6, 6);
    let player = fixture.add_player(Position::new(1, 1), 20);
    let rat = fixture.add_monster("rat", Position::new(2, 1), 10);

    {
        let mut ctx = fixture.ctx();
        ctx.damage(rat, 2, Some(player));
        ctx.damage(rat, 3, Some(player));
        ctx.damage(player, 4, Some(rat));
        ctx.damage(player, 1, None);
        ctx.flush_damage_report();
        ctx.flush_damage_report();
    }

    let texts: Vec<&str> = fixture.log.iter().map(|entry| entry.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "You take 5 damage, a solid hit.",
            "You deal 5 damage to the rat, a grievous wound.",
        ]
    );
    assert!(fixture.state.ledger.is_empty());
}
