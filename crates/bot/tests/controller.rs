use dungeon_bot::{BotConfig, PlayerBot, TracingReporter};
use game_core::{
    CellType, Direction, LevelView, Location, MessageReporter, PassController, PlayerController,
    Turn,
};

fn level(rows: &[&str]) -> LevelView {
    LevelView::from_ascii(rows.iter().copied()).expect("fixture should parse")
}

/// Drives a bot through a corridor the host reveals cell by cell.
///
/// Explored cells must only accumulate, the frontier must only shrink, and
/// the exit, once seen, must stay put.
#[test]
fn memory_is_monotonic_within_a_run() {
    let turns = [
        level(&["#####", "S@???", "#####"]),
        level(&["#####", "?.@??", "#####"]),
        level(&["#####", "??.@E", "#####"]),
        level(&["#####", "???.@", "#####"]),
    ];
    let mut bot = PlayerBot::new(BotConfig::default());
    let mut messages: Vec<String> = Vec::new();

    let mut explored = 0;
    let mut frontier = usize::MAX;
    for level in &turns {
        bot.make_turn(level, &mut messages).expect("modeled terrain");
        let memory = bot.memory().expect("memory after a turn");

        assert!(memory.explored().len() >= explored);
        assert!(memory.frontier().len() <= frontier);
        explored = memory.explored().len();
        frontier = memory.frontier().len();
    }

    let memory = bot.memory().expect("memory after a turn");
    assert_eq!(memory.known_exit(), Some(Location::new(4, 1)));
    assert_eq!(explored, 5);
    assert_eq!(frontier, 0);
    assert_eq!(messages.len(), turns.len());
}

#[test]
fn bot_walks_the_corridor_toward_the_unknown() {
    let mut bot = PlayerBot::new(BotConfig::default());
    let mut messages: Vec<String> = Vec::new();

    let turn = bot
        .make_turn(&level(&["#####", "S@.??", "#####"]), &mut messages)
        .expect("modeled terrain");

    assert_eq!(turn, Turn::Step(Direction::East));
    assert_eq!(messages, ["step east (explore)"]);
}

/// Standing on the start cell again means a new run: nothing from the old
/// run survives.
#[test]
fn returning_to_start_resets_memory() {
    let mut bot = PlayerBot::new(BotConfig::default());
    let mut reporter = TracingReporter::default();

    bot.make_turn(&level(&["S@..E"]), &mut reporter).expect("modeled terrain");
    assert_eq!(bot.memory().and_then(|m| m.known_exit()), Some(Location::new(4, 0)));

    let mut restart = level(&["@????"]);
    assert!(restart.field.set(Location::ORIGIN, CellType::PlayerStart));
    bot.make_turn(&restart, &mut reporter).expect("modeled terrain");

    let memory = bot.memory().expect("memory after a turn");
    assert_eq!(memory.known_exit(), None);
    assert_eq!(memory.explored().len(), 1);
    assert_eq!(memory.frontier().len(), 4);
}

#[test]
fn controllers_are_interchangeable() {
    let level = level(&["#####", "#@.E#", "#####"]);
    let mut reporter = TracingReporter::new("test");

    fn run<C: PlayerController>(
        controller: &mut C,
        level: &LevelView,
        reporter: &mut dyn MessageReporter,
    ) -> Turn {
        controller.make_turn(level, reporter).expect("controller should decide")
    }

    assert_eq!(run(&mut PassController, &level, &mut reporter), Turn::Pass);
    assert_eq!(
        run(&mut PlayerBot::default(), &level, &mut reporter),
        Turn::Step(Direction::East)
    );
}
