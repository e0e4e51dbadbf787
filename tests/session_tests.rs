//! Integration tests driving whole sessions on the terminal framebuffer.

use std::rc::Rc;

use tui_starship::core::{
    Debris, DebrisExit, Frames, GameConfig, Playfield, Projectile, ProjectileExit, Routine,
    Session, Step, TickContext, World,
};
use tui_starship::term::FrameBuffer;
use tui_starship::types::{Controls, Direction, STAR_SYMBOLS};

const SHIP: &str = "  .  \n .'. \n |o| \n/|o|\\\n|_|_|";

fn frames() -> Frames {
    Frames::from_texts(&[SHIP, SHIP], &["#", "##\n##", "###\n###\n###"]).unwrap()
}

fn session(seed: u64) -> (Session, FrameBuffer) {
    let fb = FrameBuffer::new(80, 24);
    let session = Session::new((24, 80), frames(), GameConfig::default(), seed);
    (session, fb)
}

#[test]
fn test_debris_population_holds_at_every_tick() {
    for seed in [1, 7, 1234] {
        let (mut session, mut fb) = session(seed);
        assert_eq!(session.debris_population(), 6);

        for tick in 0..300 {
            let controls = Controls::new(-1, if tick % 40 < 20 { 1 } else { -1 }, tick % 3 == 0);
            session.tick(&mut fb, controls);
            assert_eq!(session.debris_population(), 6, "seed {seed}, tick {tick}");
        }
    }
}

#[test]
fn test_ship_stays_inside_border_under_diagonal_input() {
    for direction in [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ] {
        let (mut session, mut fb) = session(3);
        let (ship_rows, ship_columns) = session.ship().unwrap().frame_size();

        for _ in 0..120 {
            session.tick(&mut fb, Controls::from_direction(direction, false));
            let (row, column) = session.ship().unwrap().position();
            assert!(row >= 1.0 && row <= (24 - ship_rows - 1) as f64, "{direction:?}: row {row}");
            assert!(
                column >= 1.0 && column <= (80 - ship_columns - 1) as f64,
                "{direction:?}: column {column}"
            );
        }
    }
}

#[test]
fn test_stars_light_up_inside_the_sky() {
    let (mut session, mut fb) = session(11);
    for _ in 0..12 {
        session.tick(&mut fb, Controls::NEUTRAL);
    }

    let lines = fb.lines();
    let mut lit = 0;
    for (row, line) in lines.iter().enumerate() {
        for (column, ch) in line.chars().enumerate() {
            if !STAR_SYMBOLS.contains(ch) {
                continue;
            }
            // The ship frame uses '.' too; only count cells outside its box.
            let (ship_row, ship_column) = session.ship().unwrap().position();
            let in_ship = (row as f64) >= ship_row
                && (row as f64) < ship_row + 5.0
                && (column as f64) >= ship_column
                && (column as f64) < ship_column + 5.0;
            if in_ship {
                continue;
            }
            assert!((2..=22).contains(&row), "star on row {row}");
            assert!((2..=78).contains(&column), "star on column {column}");
            lit += 1;
        }
    }
    assert!(lit > 0, "no star visible after the longest start offset");
}

#[test]
fn test_firing_beeps_and_leaves_a_trail() {
    let (mut session, mut fb) = session(5);
    let report = session.tick(&mut fb, Controls::new(0, 0, true));
    assert_eq!(report.spawned, 1);
    assert_eq!(session.projectiles(), 1);

    // Charge tick beeps once.
    session.tick(&mut fb, Controls::NEUTRAL);
    assert!(fb.take_bell());
    assert!(!fb.take_bell());

    // Flash, then the first flight step: 9.0 - 0.3 still rounds to row 9.
    session.tick(&mut fb, Controls::NEUTRAL);
    session.tick(&mut fb, Controls::NEUTRAL);
    assert_eq!(session.projectiles(), 1);
    assert_eq!(session.ship().unwrap().position(), (9.0, 37.0));
    assert_eq!(fb.lines()[9].chars().nth(39), Some('|'));
}

#[test]
fn test_same_seed_same_screen() {
    let (mut a, mut fa) = session(99);
    let (mut b, mut fbb) = session(99);
    for tick in 0..80 {
        let controls = Controls::new(0, if tick < 40 { 1 } else { -1 }, tick % 5 == 0);
        a.tick(&mut fa, controls);
        b.tick(&mut fbb, controls);
    }
    assert_eq!(fa.lines(), fbb.lines());
}

#[test]
fn test_reset_restores_a_fresh_session() {
    let (mut session, mut fb) = session(8);
    for _ in 0..30 {
        session.tick(&mut fb, Controls::new(1, 1, true));
    }
    session.reset(8);
    assert_eq!(session.world().tick(), 0);
    assert_eq!(session.projectiles(), 0);
    assert_eq!(session.debris_population(), 6);
    assert_eq!(session.ship().unwrap().position(), (9.0, 37.0));
}

fn step_debris(world: &mut World, fb: &mut FrameBuffer, debris: &mut Debris) -> Step {
    let mut spawned = Vec::new();
    let mut ctx = TickContext::new(fb, world, &mut spawned);
    debris.step(&mut ctx)
}

#[test]
fn test_hit_just_before_exit_destroys_debris() {
    // One-row debris falling two rows per tick leaves a 6-row field on its
    // fourth step: rows 0, 2, 4, then 6.
    let field = Playfield::new(6, 20);
    let mut fb = FrameBuffer::new(20, 6);
    let mut world = World::new(field, frames(), GameConfig::default(), 1);
    let mut debris = Debris::new(Rc::from("###"), 5, 2.0, field);

    assert_eq!(step_debris(&mut world, &mut fb, &mut debris), Step::Yield);
    assert_eq!(step_debris(&mut world, &mut fb, &mut debris), Step::Yield);
    assert_eq!(step_debris(&mut world, &mut fb, &mut debris), Step::Yield);
    assert_eq!(debris.row(), 4.0);

    // Same tick, after the debris: a fresh shot lands inside its box.
    let mut shot = Projectile::new(4.0, 6.0, -0.3, 0.0);
    let mut spawned = Vec::new();
    let step = shot.step(&mut TickContext::new(&mut fb, &mut world, &mut spawned));
    assert_eq!(step, Step::Done);
    let id = debris.obstacle().unwrap();
    assert_eq!(shot.exit(), Some(ProjectileExit::Hit(id)));

    // Next tick it would have left the field; the hit wins.
    assert_eq!(step_debris(&mut world, &mut fb, &mut debris), Step::Done);
    assert_eq!(debris.exit(), Some(DebrisExit::Destroyed));
    assert!(world.obstacles.is_empty());
    assert!(world.collisions.is_empty());
    assert_eq!(fb.lines()[4], " ".repeat(20));
}
