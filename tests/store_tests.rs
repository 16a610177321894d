//! Result store integration tests: lookup, export, snapshots.

use capture_solver::canon::Canonicalizer;
use capture_solver::core::{Board, Stone, Topology};
use capture_solver::error::StoreError;
use capture_solver::solver::{
    Hint, MoveOutcome, Solver, SolverConfig, TableEntry, TerminationPolicy, TranspositionTable,
    Verdict, VerdictRecord,
};
use capture_solver::store::{ResultStore, HEADER};

fn solved(size: &str, policy: TerminationPolicy) -> ResultStore {
    let topology: Topology = size.parse().unwrap();
    let mut solver = Solver::new(SolverConfig::new(topology).with_policy(policy)).unwrap();
    solver.solve_empty(Stone::Black).unwrap();
    solver.into_store()
}

fn csv(store: &ResultStore) -> String {
    let mut out = Vec::new();
    store.write_csv(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_lookup_reports_moves_in_caller_frame() {
    let store = solved("4", TerminationPolicy::FirstCapture);
    let topology = store.config().topology;

    let left = Board::parse(topology, "1,0,0,0").unwrap();
    let right = Board::parse(topology, "0,0,0,1").unwrap();
    let a = store.lookup(&left, Stone::White).unwrap();
    let b = store.lookup(&right, Stone::White).unwrap();

    assert_eq!(a.verdict, b.verdict);
    let mirrored: Vec<usize> = a.moves.iter().rev().map(|&p| 3 - p).collect();
    assert_eq!(b.moves.to_vec(), mirrored);

    let hints_a = Hint::codes(&store.hints(&left, Stone::White).unwrap());
    let hints_b = Hint::codes(&store.hints(&right, Stone::White).unwrap());
    assert_eq!(hints_a.chars().rev().collect::<String>(), hints_b);
}

#[test]
fn test_lookup_rejects_foreign_boards() {
    let store = solved("3", TerminationPolicy::FirstCapture);
    let other = Board::empty(Topology::strip(5).unwrap());
    assert!(store.lookup(&other, Stone::Black).is_none());
    assert!(store.lookup(&Board::empty(Topology::strip(3).unwrap()), Stone::Empty).is_none());
}

#[test]
fn test_table_stats_add_up() {
    let store = solved("2", TerminationPolicy::NoLegalMoveLoses);
    let stats = store.stats();
    assert_eq!(stats.entries, store.len());
    assert_eq!(stats.wins + stats.losses + stats.draws, stats.entries);
    assert_eq!(stats.draws, 3);
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
fn test_two_cell_export() {
    let store = solved("2", TerminationPolicy::FirstCapture);
    assert_eq!(
        csv(&store),
        "BoardStr,Player,Winner,Hints\n\
         \"0,1\",-1,-1,gx\n\
         \"0,0\",1,-1,rr\n"
    );
}

#[test]
fn test_export_is_reproducible() {
    for policy in [TerminationPolicy::FirstCapture, TerminationPolicy::NoLegalMoveLoses] {
        let a = csv(&solved("2x3", policy));
        let b = csv(&solved("2x3", policy));
        assert_eq!(a, b);
        assert!(a.starts_with(HEADER));
    }
}

#[test]
fn test_rows_follow_verdicts() {
    let store = solved("3", TerminationPolicy::NoLegalMoveLoses);
    for row in store.rows() {
        assert!(row.board_str.split(',').count() == 3);
        assert!(matches!(row.player, 1 | -1));
        assert!(matches!(row.winner, 1 | -1 | 0));
        assert_eq!(row.hints.len(), 3);
        if row.winner == row.player {
            assert!(row.hints.contains('g'));
        }
    }
}

// =============================================================================
// Snapshot Tests
// =============================================================================

#[test]
fn test_snapshot_through_file() {
    let store = solved("2x2", TerminationPolicy::FirstCapture);
    let path = std::env::temp_dir().join(format!("capture-solver-{}.bin", std::process::id()));

    store.save(std::fs::File::create(&path).unwrap()).unwrap();
    let loaded = ResultStore::load(std::fs::File::open(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(csv(&loaded), csv(&store));
    let empty = Board::empty(loaded.config().topology);
    let record = loaded.lookup(&empty, Stone::Black).unwrap();
    assert_eq!(Some(record), store.lookup(&empty, Stone::Black));
}

#[test]
fn test_garbage_snapshot_is_rejected() {
    let bytes = [0xFFu8; 7];
    assert!(matches!(
        ResultStore::load(&bytes[..]),
        Err(StoreError::Encoding(_))
    ));
}

#[test]
fn test_loss_record_keeps_every_move() {
    let store = solved("2", TerminationPolicy::FirstCapture);
    let empty = Board::empty(store.config().topology);
    let record = store.lookup(&empty, Stone::Black).unwrap();
    assert_eq!(record.verdict, Verdict::Loss);
    assert_eq!(record.moves.as_slice(), &[0, 1]);
}

// =============================================================================
// Untrusted Snapshot Tests
// =============================================================================

fn entries(store: &ResultStore) -> Vec<TableEntry> {
    store.table().iter().cloned().collect()
}

/// Bytes laid out the way `ResultStore::save` lays them out.
fn snapshot_bytes(config: &SolverConfig, entries: &[TableEntry]) -> Vec<u8> {
    bincode::serialize(&(config, entries)).unwrap()
}

fn assert_invalid_entry(config: &SolverConfig, entries: Vec<TableEntry>) {
    let bytes = snapshot_bytes(config, &entries);
    assert!(matches!(
        ResultStore::load(bytes.as_slice()),
        Err(StoreError::InvalidEntry { .. })
    ));
    let table = TranspositionTable::from(entries);
    assert!(matches!(
        ResultStore::from_table(config.clone(), table),
        Err(StoreError::InvalidEntry { .. })
    ));
}

#[test]
fn test_off_board_outcome_is_rejected() {
    let store = solved("3", TerminationPolicy::FirstCapture);
    let mut entries = entries(&store);
    let root = entries
        .iter_mut()
        .find(|e| e.key.cells().iter().all(|&c| c == Stone::Empty))
        .unwrap();
    root.record.outcomes.push(MoveOutcome {
        position: 7,
        verdict: Verdict::Win,
    });
    assert_invalid_entry(store.config(), entries);
}

#[test]
fn test_unevaluated_optimal_move_is_rejected() {
    let store = solved("3", TerminationPolicy::FirstCapture);
    let mut entries = entries(&store);
    let entry = entries.iter_mut().find(|e| !e.record.outcomes.is_empty()).unwrap();
    entry.record.outcomes.clear();
    assert_invalid_entry(store.config(), entries);
}

#[test]
fn test_key_without_player_is_rejected() {
    let store = solved("3", TerminationPolicy::FirstCapture);
    let config = store.config().clone();
    let canon = Canonicalizer::new(config.topology, config.zobrist_seed);
    let (key, _) = canon.key(&Board::empty(config.topology), Stone::Empty);

    let mut entries = entries(&store);
    entries.push(TableEntry {
        key,
        record: VerdictRecord::no_moves(),
    });
    assert_invalid_entry(&config, entries);
}

#[test]
fn test_non_canonical_key_is_rejected() {
    let store = solved("3", TerminationPolicy::FirstCapture);
    let config = store.config().clone();
    let canon = Canonicalizer::new(config.topology, config.zobrist_seed);
    // [1,-1,0] reduces to its mirror [0,-1,1].
    let board = Board::parse(config.topology, "1,-1,0").unwrap();
    let key = canon.key_of_canonical(&board, Stone::Black);

    assert_invalid_entry(
        &config,
        vec![TableEntry {
            key,
            record: VerdictRecord::no_moves(),
        }],
    );
}

#[test]
fn test_foreign_seed_table_is_rekeyed() {
    let store = solved("3", TerminationPolicy::FirstCapture);
    let reseeded = store.config().clone().with_seed(99);
    let empty = Board::empty(reseeded.topology);

    // Fingerprints written under one seed, config claiming another.
    let bytes = snapshot_bytes(&reseeded, &entries(&store));
    let loaded = ResultStore::load(bytes.as_slice()).unwrap();
    assert_eq!(loaded.config().zobrist_seed, 99);
    assert_eq!(
        loaded.lookup(&empty, Stone::Black),
        store.lookup(&empty, Stone::Black)
    );

    let mut out = Vec::new();
    loaded.save(&mut out).unwrap();
    let reloaded = ResultStore::load(out.as_slice()).unwrap();
    assert_eq!(
        Hint::codes(&reloaded.hints(&empty, Stone::Black).unwrap()),
        "rgr"
    );
}
