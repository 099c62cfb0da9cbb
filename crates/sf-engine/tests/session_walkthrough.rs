//! End-to-end session tests
//!
//! Drives a machine through deposit, rounds and quit using only the public
//! API, the same way the interactive shell does.

use sf_engine::{
    BetLimits, Grid, PayTable, RoundOutcome, SessionState, SlotConfig, SlotError, SlotMachine,
    SymbolSet, evaluate, parse_bet, parse_deposit, parse_lines, render_grid,
};

const SEED: u64 = 0x5107;

fn symbol_id(set: &SymbolSet, name: &str) -> u32 {
    set.by_name(name).map(|s| s.id).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════════
// PAYOUT
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_line_independence_walkthrough() {
    let set = SymbolSet::standard();
    let (a, b, c, d) = (
        symbol_id(&set, "A"),
        symbol_id(&set, "B"),
        symbol_id(&set, "C"),
        symbol_id(&set, "D"),
    );
    let grid = Grid::from_rows(&[vec![a, a, a], vec![b, c, b], vec![d, d, d]]).unwrap();

    assert_eq!(evaluate(&grid, 3, 2, &set), (14, vec![1, 3]));
    assert_eq!(evaluate(&grid, 1, 2, &set), (10, vec![1]));
    assert_eq!(evaluate(&grid, 2, 2, &set), (10, vec![1]));

    let rendered = render_grid(&grid, &set);
    assert_eq!(rendered.lines().count(), 3);
    assert_eq!(rendered.lines().nth(1), Some("B | C | B"));
}

#[test]
fn test_alternate_symbol_table() {
    // Same grid, different values: payouts follow the table passed in
    let mut set = SymbolSet::standard();
    for symbol in &mut set.symbols {
        symbol.value = 1;
    }
    let a = symbol_id(&set, "A");
    let grid = Grid::from_rows(&[vec![a, a, a]]).unwrap();

    let eval = PayTable::new(set).evaluate(&grid, 1, 7);
    assert_eq!(eval.total_win, 7);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SESSION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_full_session_from_raw_input() {
    let limits = BetLimits::default();
    let mut machine = SlotMachine::seeded(SlotConfig::default(), SEED).unwrap();

    // Rejected deposits never reach the machine
    for raw in ["0", "-5", "abc"] {
        assert!(parse_deposit(raw).is_err());
    }
    let deposit = parse_deposit("1").unwrap();
    machine.deposit(deposit).unwrap();
    assert_eq!(machine.balance(), 1);

    // 2 lines × 3 > 1: aborted, no effect
    let bet = machine
        .bet(parse_lines("2", &limits).unwrap(), parse_bet("3", &limits).unwrap())
        .unwrap();
    let outcome = machine.play_round(bet).unwrap();
    assert!(matches!(outcome, RoundOutcome::InsufficientFunds { .. }));
    assert_eq!(outcome.net_change(), 0);
    assert_eq!(machine.balance(), 1);

    // 1 line × 1 is affordable
    let bet = machine.bet(1, 1).unwrap();
    let outcome = machine.play_round(bet).unwrap();
    let spin = outcome.spin().expect("affordable bet resolves");
    assert_eq!(spin.grid.rows(), 3);
    assert_eq!(spin.grid.cols(), 3);
    assert_eq!(machine.balance(), 1 - 1 + spin.winnings());
    assert_eq!(outcome.net_change(), spin.winnings() as i64 - 1);

    let final_balance = machine.quit().unwrap();
    assert_eq!(final_balance, machine.balance());
    assert_eq!(machine.state(), SessionState::Ended);

    let stats = machine.stats();
    assert_eq!(stats.total_spins, 1);
    assert_eq!(stats.aborted_spins, 1);
}

#[test]
fn test_long_session_accounting() {
    let mut machine = SlotMachine::seeded(SlotConfig::default(), SEED).unwrap();
    machine.deposit(5_000).unwrap();

    let mut expected = 5_000i64;
    for _ in 0..1_000 {
        let bet = machine.bet(3, 1).unwrap();
        expected += machine.play_round(bet).unwrap().net_change();
    }

    assert_eq!(machine.balance() as i64, expected);
    let stats = machine.stats();
    assert_eq!(stats.total_spins, 1_000);
    assert_eq!(stats.total_bet, 3_000);
    assert_eq!(stats.wins + stats.losses, 1_000);
    assert_eq!(
        machine.balance() as i64,
        5_000 - stats.total_bet as i64 + stats.total_win as i64
    );
}

#[test]
fn test_unplayable_layout_is_rejected_up_front() {
    let mut config = SlotConfig::default();
    config.grid.rows = 21; // standard bag holds 20 symbols
    config.limits.max_lines = 3;

    assert!(matches!(
        SlotMachine::seeded(config, SEED),
        Err(SlotError::InvalidConfiguration(_))
    ));
}
