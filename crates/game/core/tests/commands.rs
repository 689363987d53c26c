mod common;

use common::{Fixture, SequenceRng};
use rogue_core::{
    ActorTemplate, BuffCommand, CardinalDirection, CellKind, Command, CommandError, CommandExt,
    ConsumeCommand, ConsumeSource, Cost, DigCommand, DoorCommand, EntityId, GameConfig, GameEvent,
    HitCommand, Item, MoveCommand, MultiplyCommand, PickupCommand, Position, RestCommand,
    StatusEffect, StatusKind, SummonCommand, Target, TeleportCommand, WorldOracle, raw, turn,
};

#[test]
fn bumping_a_wall_keeps_the_turn() {
    let mut fixture = Fixture::rows(&["#####", "#...#", "#####"]);
    let player = fixture.add_player(Position::new(1, 1), 10);

    let consumed = turn(
        &mut MoveCommand::new(player, CardinalDirection::West),
        &mut fixture.ctx(),
    )
    .unwrap();
    assert!(!consumed);
    assert_eq!(fixture.actor(player).position, Some(Position::new(1, 1)));
    assert_eq!(fixture.actor(player).hunger, 0, "no upkeep for a free action");
    assert!(fixture.logged("Something solid is in the way."));

    let consumed = turn(
        &mut MoveCommand::new(player, CardinalDirection::East),
        &mut fixture.ctx(),
    )
    .unwrap();
    assert!(consumed);
    assert_eq!(fixture.actor(player).position, Some(Position::new(2, 1)));
    assert_eq!(fixture.actor(player).hunger, 1);
    assert_eq!(fixture.actor(player).ticks_since_move, 1);
}

#[test]
fn moving_into_an_actor_is_refused() {
    let mut fixture = Fixture::open(5, 5);
    let player = fixture.add_player(Position::new(1, 1), 10);
    fixture.add_monster("rat", Position::new(2, 1), 5);

    let moved = raw(
        &mut MoveCommand::new(player, CardinalDirection::East),
        &mut fixture.ctx(),
    )
    .unwrap();
    assert!(!moved);
    assert!(fixture.logged("Someone is in the way."));
}

#[test]
fn unaimed_commands_are_caller_errors() {
    let mut fixture = Fixture::open(5, 5);
    let player = fixture.add_player(Position::new(1, 1), 10);

    let result = turn(&mut MoveCommand::unaimed(player), &mut fixture.ctx());
    assert_eq!(result, Err(CommandError::MissingDirection { command: "move" }));

    let mut aimed = MoveCommand::unaimed(player);
    aimed.set_direction(CardinalDirection::South);
    assert_eq!(turn(&mut aimed, &mut fixture.ctx()), Ok(true));
}

#[test]
fn dead_actors_cannot_take_turns() {
    let mut fixture = Fixture::open(5, 5);
    fixture.add_player(Position::new(0, 0), 10);
    let rat = fixture.add_monster("rat", Position::new(3, 3), 2);
    fixture.ctx().damage(rat, 5, None);

    let result = turn(&mut RestCommand::new(rat), &mut fixture.ctx());
    assert_eq!(result, Err(CommandError::ActorNotFound(rat)));
}

#[test]
fn melee_damage_never_drops_below_one() {
    let mut fixture = Fixture::open(5, 5).with_rng(SequenceRng::constant(0));
    let player = fixture.add_player(Position::new(1, 1), 10);
    let golem = fixture.add_monster("golem", Position::new(2, 1), 10);
    fixture.actor_mut(golem).defense_modifier = 5;

    raw(
        &mut HitCommand::new(player, CardinalDirection::East),
        &mut fixture.ctx(),
    )
    .unwrap();
    assert_eq!(fixture.actor(golem).hp, 9);

    let swung = raw(
        &mut HitCommand::new(player, CardinalDirection::South),
        &mut fixture.ctx(),
    )
    .unwrap();
    assert!(!swung);
    assert!(fixture.logged("You swing at empty air."));
}

#[test]
fn targeted_hits_only_reach_neighbours() {
    let mut fixture = Fixture::open(6, 6).with_rng(SequenceRng::constant(0));
    let player = fixture.add_player(Position::new(1, 1), 10);
    let rat = fixture.add_monster("rat", Position::new(4, 1), 5);

    let swung = raw(&mut HitCommand::at(player, rat), &mut fixture.ctx()).unwrap();
    assert!(!swung);
    assert_eq!(fixture.actor(rat).hp, 5);
    assert!(fixture.logged("You swing at empty air."));

    let mut at_cell = HitCommand::at(player, rat);
    at_cell.set_target(Target::Cell(Position::new(4, 1)));
    assert!(!raw(&mut at_cell, &mut fixture.ctx()).unwrap());

    fixture.state.entities.relocate(rat, Position::new(2, 2));
    assert!(raw(&mut HitCommand::at(player, rat), &mut fixture.ctx()).unwrap());
    assert_eq!(fixture.actor(rat).hp, 4);
}

#[test]
fn digging_depends_on_the_roll() {
    let rows = ["#...", "%..."];

    let mut fixture = Fixture::rows(&rows).with_rng(SequenceRng::constant(0));
    let player = fixture.add_player(Position::new(1, 1), 10);
    let dug = raw(
        &mut DigCommand::new(player, CardinalDirection::West),
        &mut fixture.ctx(),
    )
    .unwrap();
    assert!(dug);
    assert_eq!(fixture.world.cell(Position::new(0, 1)), Some(CellKind::Floor));
    assert!(fixture.logged("You dig through the rock."));

    // 30% base plus 3 strength at 5% each is 45%; a roll of 99 misses.
    let mut fixture = Fixture::rows(&rows).with_rng(SequenceRng::constant(99));
    let player = fixture.add_player(Position::new(1, 1), 10);
    let spent = raw(
        &mut DigCommand::new(player, CardinalDirection::West),
        &mut fixture.ctx(),
    )
    .unwrap();
    assert!(spent);
    assert_eq!(fixture.world.cell(Position::new(0, 1)), Some(CellKind::Rock));
    assert!(fixture.logged("You chip at the rock."));

    let refused = raw(
        &mut DigCommand::new(player, CardinalDirection::NorthWest),
        &mut fixture.ctx(),
    )
    .unwrap();
    assert!(!refused);
    assert!(fixture.logged("That cannot be dug."));
}

#[test]
fn doors_toggle_unless_blocked() {
    let mut fixture = Fixture::rows(&["#.+.#"]);
    let player = fixture.add_player(Position::new(1, 0), 10);
    let door = Position::new(2, 0);

    assert!(raw(&mut DoorCommand::new(player, CardinalDirection::East), &mut fixture.ctx()).unwrap());
    assert_eq!(fixture.world.cell(door), Some(CellKind::DoorOpen));

    let rat = fixture.add_monster("rat", door, 3);
    assert!(!raw(&mut DoorCommand::new(player, CardinalDirection::East), &mut fixture.ctx()).unwrap());
    assert!(fixture.logged("Something blocks the door."));

    fixture.state.entities.relocate(rat, Position::new(3, 0));
    let mut aimed = DoorCommand::new(player, CardinalDirection::West);
    aimed.set_target(Target::Cell(door));
    assert!(raw(&mut aimed, &mut fixture.ctx()).unwrap());
    assert_eq!(fixture.world.cell(door), Some(CellKind::DoorClosed));

    assert!(!raw(&mut DoorCommand::new(player, CardinalDirection::West), &mut fixture.ctx()).unwrap());
    assert!(fixture.logged("There is no door there."));
}

#[test]
fn teleport_lands_on_a_free_cell() {
    let mut fixture = Fixture::open(6, 6);
    let player = fixture.add_player(Position::new(2, 2), 10);

    assert!(raw(&mut TeleportCommand::new(player), &mut fixture.ctx()).unwrap());
    let landed = fixture.actor(player).position.unwrap();
    assert_ne!(landed, Position::new(2, 2));
    assert!(fixture.logged("You vanish!"));
    assert_eq!(
        fixture.state.drain_events(),
        vec![GameEvent::Teleported {
            actor: player,
            from: Position::new(2, 2),
            to: landed,
        }]
    );
}

#[test]
fn teleport_with_nowhere_to_go_still_spends_the_turn() {
    let mut fixture = Fixture::open(1, 1);
    let player = fixture.add_player(Position::new(0, 0), 10);

    assert!(raw(&mut TeleportCommand::new(player), &mut fixture.ctx()).unwrap());
    assert_eq!(fixture.actor(player).position, Some(Position::new(0, 0)));
    assert!(fixture.logged("You flicker briefly."));

    let mut aimed = TeleportCommand::new(player);
    aimed.set_target(Target::Cell(Position::new(0, 0)));
    assert!(!raw(&mut aimed, &mut fixture.ctx()).unwrap());
}

#[test]
fn multiplying_copies_the_body_but_not_the_baggage() {
    let mut fixture = Fixture::open(6, 6);
    let player = fixture.add_player(Position::new(0, 0), 10);
    let slime = fixture.add_monster("slime", Position::new(3, 3), 6);
    fixture.actor_mut(slime).hp = 4;
    fixture.actor_mut(slime).inventory.push(Item::Ration { nutrition: 50 });
    fixture
        .ctx()
        .add_status(slime, StatusEffect::with_magnitude(StatusKind::AttackUp, 10, 2));

    assert!(raw(&mut MultiplyCommand::new(slime), &mut fixture.ctx()).unwrap());
    assert!(fixture.logged("The slime splits!"));

    let events = fixture.state.drain_events();
    let [GameEvent::Spawned { actor: child, parent }] = events.as_slice() else {
        panic!("expected one spawn, got {events:?}");
    };
    assert_eq!(*parent, Some(slime));
    let child = fixture.actor(*child);
    assert_eq!(child.name, "slime");
    assert_eq!(child.hp, 4);
    assert!(child.statuses.is_empty());
    assert_eq!(child.damage_deal_modifier, 0);
    assert!(child.inventory.is_empty());
    assert!(child.position.unwrap().is_adjacent(Position::new(3, 3)));
    assert!(fixture.state.turn.contains(child.id));

    assert!(!raw(&mut MultiplyCommand::new(player), &mut fixture.ctx()).unwrap());
}

#[test]
fn summons_fill_the_aimed_cell_first() {
    let mut fixture = Fixture::open(8, 8);
    let player = fixture.add_player(Position::new(1, 1), 10);
    let queued_before = fixture.state.turn.len();

    let mut summon = SummonCommand::new(player, ActorTemplate::new("rat", 4), 2);
    summon.set_target(Target::Cell(Position::new(4, 4)));
    assert!(raw(&mut summon, &mut fixture.ctx()).unwrap());

    assert!(fixture.state.entities.actor_at(Position::new(4, 4)).is_some());
    assert_eq!(fixture.state.turn.len(), queued_before + 2);
    assert!(fixture.logged("2 rats appear out of thin air!"));
}

#[test]
fn picking_up_respects_pack_capacity() {
    let config = GameConfig {
        inventory_capacity: 1,
        ..GameConfig::default()
    };
    let mut fixture = Fixture::open(4, 4).with_config(config);
    let player = fixture.add_player(Position::new(1, 1), 10);
    fixture.world.place_item(Position::new(1, 1), Item::Ration { nutrition: 100 });
    fixture.world.place_item(Position::new(1, 1), Item::Waterskin { hydration: 40 });

    assert!(raw(&mut PickupCommand::new(player), &mut fixture.ctx()).unwrap());
    assert_eq!(fixture.actor(player).inventory.len(), 1);
    assert!(!raw(&mut PickupCommand::new(player), &mut fixture.ctx()).unwrap());
    assert!(fixture.logged("Your pack is full."));
    assert_eq!(fixture.world.items_at(Position::new(1, 1)).len(), 1);
}

#[test]
fn consuming_items_applies_their_effects() {
    let mut fixture = Fixture::open(4, 4);
    let player = fixture.add_player(Position::new(1, 1), 10);
    {
        let actor = fixture.actor_mut(player);
        actor.hunger = 150;
        actor.thirst = 100;
        actor.inventory = vec![
            Item::Ration { nutrition: 100 },
            Item::Waterskin { hydration: 40 },
            Item::Potion {
                status: StatusKind::Levitation,
                duration: 5,
            },
        ];
    }
    fixture
        .ctx()
        .add_status(player, StatusEffect::new(StatusKind::Burn, 6));

    let mut eat = ConsumeCommand::new(player, ConsumeSource::Slot(0));
    assert!(raw(&mut eat, &mut fixture.ctx()).unwrap());
    assert_eq!(fixture.actor(player).hunger, 50);

    assert!(raw(&mut eat, &mut fixture.ctx()).unwrap());
    assert_eq!(fixture.actor(player).thirst, 60);
    assert!(!fixture.actor(player).has_status(StatusKind::Burn));

    assert!(raw(&mut eat, &mut fixture.ctx()).unwrap());
    assert!(fixture.actor(player).has_status(StatusKind::Levitation));
    assert!(!fixture.actor(player).has_status(StatusKind::Regeneration));

    assert!(!raw(&mut eat, &mut fixture.ctx()).unwrap());
    assert!(fixture.logged("You have nothing like that."));
}

#[test]
fn eating_a_corpse_removes_it() {
    let mut fixture = Fixture::open(4, 4);
    let player = fixture.add_player(Position::new(2, 2), 10);
    fixture.actor_mut(player).hunger = 200;
    fixture.world.place_corpse(Position::new(2, 2), EntityId(9));

    let mut devour = ConsumeCommand::new(player, ConsumeSource::Corpse);
    assert!(raw(&mut devour, &mut fixture.ctx()).unwrap());
    assert_eq!(fixture.actor(player).hunger, 200 - fixture.config.corpse_nutrition);
    assert!(!fixture.world.has_corpse(Position::new(2, 2)));
    assert!(fixture.logged("You devour the corpse."));

    assert!(!raw(&mut devour, &mut fixture.ctx()).unwrap());
    assert!(fixture.logged("There is no corpse here."));
}

#[test]
fn an_unpayable_cost_wastes_the_turn() {
    let mut fixture = Fixture::open(5, 5);
    let player = fixture.add_player(Position::new(1, 1), 5);

    let mut lunge = MoveCommand::new(player, CardinalDirection::East).with_cost(Cost::Health(5));
    assert!(turn(&mut lunge, &mut fixture.ctx()).unwrap());
    assert_eq!(fixture.actor(player).position, Some(Position::new(1, 1)));
    assert_eq!(fixture.actor(player).hp, 5);
    assert_eq!(fixture.actor(player).hunger, 1, "upkeep still ran");
    assert!(fixture.logged("You lack the strength to do that."));

    lunge.set_cost(Cost::Health(2));
    assert!(turn(&mut lunge, &mut fixture.ctx()).unwrap());
    assert_eq!(fixture.actor(player).position, Some(Position::new(2, 1)));
    assert_eq!(fixture.actor(player).hp, 3);
}

#[test]
fn hunger_costs_stop_short_of_starvation() {
    let mut fixture = Fixture::open(5, 5);
    let player = fixture.add_player(Position::new(1, 1), 5);
    let threshold = fixture.config.hunger_threshold;
    fixture.actor_mut(player).hunger = threshold - 10;

    let mut ritual = BuffCommand::new(player, StatusKind::Regeneration, 5).with_cost(Cost::Hunger(10));
    assert!(turn(&mut ritual, &mut fixture.ctx()).unwrap());
    assert!(!fixture.actor(player).has_status(StatusKind::Regeneration));

    let mut ritual = ritual.into_inner().with_cost(Cost::Hunger(5));
    assert!(turn(&mut ritual, &mut fixture.ctx()).unwrap());
    assert!(fixture.actor(player).has_status(StatusKind::Regeneration));
}

#[test]
fn dead_actors_leave_the_rotation() {
    let mut fixture = Fixture::open(6, 6);
    let player = fixture.add_player(Position::new(0, 0), 10);
    let rat = fixture.add_monster("rat", Position::new(3, 3), 2);
    let bat = fixture.add_monster("bat", Position::new(4, 4), 2);

    assert_eq!(fixture.state.turn.current_actor(), Ok(player));
    assert_eq!(fixture.state.turn.advance(), Ok(rat));

    fixture.ctx().damage(rat, 9, Some(player));
    assert_eq!(fixture.state.turn.current_actor(), Ok(bat));
    assert_eq!(fixture.state.turn.advance(), Ok(player));
    assert_eq!(fixture.state.turn.len(), 2);
}
