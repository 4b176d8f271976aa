use armada::{Command, GameStats, GameStatus, Session};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn run(input: &str) -> (String, Option<GameStats>) {
    let mut out = Vec::new();
    let session = Session::new(input.as_bytes(), &mut out, SmallRng::seed_from_u64(3));
    let stats = session.run().expect("session");
    (String::from_utf8(out).expect("utf8"), stats)
}

const FLEET: &str = "\
galeao 0 0 n
submarino 1 1 n
barca 0 3 n
barca 9 0 x
fragata 0 4 e
nau 2 9 n
nau 4 0 n
caravela 2 3 e
caravela 4 5 n
caravela 8 0 e
barca 9 9 n
barca 7 7 n
barca 9 4 n
barca 4 7 n
";

const SALVOS: &str = "\
rajada 0 0 0 1 0 2
rajada 1 1 2 1 0 4
rajada 0 5 0 6 0 7
rajada 2 9 3 9 4 9
rajada 4 0 5 0 6 0
rajada 2 3 2 4 4 5
rajada 5 5 8 0 8 1
rajada 9 9 7 7 9 4
rajada 4 7 4 7 20 20
";

#[test]
fn parses_commands_in_both_languages() {
    assert_eq!(Command::parse("nova"), Command::NewFleet);
    assert_eq!(Command::parse("RANDOM"), Command::RandomFleet);
    assert_eq!(Command::parse("rajada"), Command::Salvo);
    assert_eq!(Command::parse("desisto"), Command::Quit);
    assert_eq!(Command::parse("fogo"), Command::Unknown("fogo".into()));
}

#[test]
fn quit_right_away() {
    let (out, stats) = run("desisto\n");
    assert_eq!(out, "Fair winds!\n");
    assert!(stats.is_none());
}

#[test]
fn full_game_from_typed_fleet() {
    let (out, stats) = run(&format!("nova\n{}{}", FLEET, SALVOS));

    assert!(out.contains("Unknown ship!"));
    assert!(out.contains("Could not place Barge n (0, 3): ship is too close to another ship"));
    assert!(out.contains("Invalid bearing!"));
    assert!(out.contains("11 ships added successfully!"));
    assert_eq!(out.matches("You sank a ").count(), 11);
    assert!(out.contains("You sank a Galleon!"));
    assert!(out.contains("Hits: 3 Invalid: 0 Repeated: 0 Remaining: 11 ships."));
    assert!(out.contains("Hits: 25 Invalid: 1 Repeated: 1 Remaining: 0 ships."));
    assert!(out.contains("All ships sunk. The fleet is lost!"));
    assert!(out.ends_with("Fair winds!\n"));

    let stats = stats.expect("stats");
    assert_eq!(stats.shots, 25);
    assert_eq!(stats.hits, 25);
    assert_eq!(stats.sunk_ships, 11);
    assert_eq!(stats.remaining_ships, 0);
    assert_eq!(stats.status, GameStatus::Over);
}

#[test]
fn random_fleet_then_status() {
    let (out, stats) = run("aleatoria estado desisto");
    assert!(out.contains("11 ships placed at random!"));
    assert!(out.contains("Fleet: 11 ships"));
    assert!(out.contains("Afloat: 11"));
    let stats = stats.expect("stats");
    assert_eq!(stats.status, GameStatus::Idle);
    assert_eq!(stats.remaining_ships, 11);
}

#[test]
fn commands_need_a_fleet_first() {
    let (out, stats) = run("estado\nfogo\nrajada\n");
    assert_eq!(out.matches("No fleet yet.").count(), 2);
    assert!(out.contains("Unknown command: fogo"));
    assert!(out.ends_with("Fair winds!\n"));
    assert!(stats.is_none());
}

#[test]
fn input_ending_mid_fleet_quits() {
    let (out, stats) = run("nova\ngaleao 0 0 n\nbarca 9");
    assert!(!out.contains("ships added successfully"));
    assert!(out.ends_with("Fair winds!\n"));
    assert!(stats.is_none());
}

#[test]
fn huge_coordinates_are_rejected_not_fatal() {
    let (out, stats) = run("nova\ncaravela 2147483647 0 n\ndesisto\n");
    assert!(out.contains("Could not place Caravel n (2147483647, 0): ship placement is out of bounds"));
    assert!(out.ends_with("Fair winds!\n"));
    assert!(stats.is_none());
}

#[test]
fn malformed_ship_line_is_dropped_whole() {
    let (out, stats) = run(&format!("nova\nbarca 1 x n\n{}desisto\n", FLEET));
    assert!(out.contains("Invalid coordinate: x"));
    assert_eq!(out.matches("Unknown ship!").count(), 1);
    assert!(out.contains("11 ships added successfully!"));
    assert_eq!(stats.expect("stats").remaining_ships, 11);
}
