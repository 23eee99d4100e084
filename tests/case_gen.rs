use std::fs;

use rand::SeedableRng;
use rand::rngs::StdRng;

use karma_cfg::case_gen::{FileNumberAllocator, generate_cases};
use karma_cfg::cfg_read::read_cfg;
use karma_cfg::randomize::ALLOWED_TYPES;

const BASE_DECK: &str = "\
TITLE  demo core
   CFG  7
     1 4 2
     5 1
     2
% end of cfg
FOOTER
";

#[test]
fn cases_land_in_numbered_directories() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut rng = StdRng::seed_from_u64(7);

    let outputs = generate_cases(BASE_DECK, 3, tmp.path(), &mut rng).expect("generate");
    assert_eq!(outputs.len(), 3);

    for (i, out) in outputs.iter().enumerate() {
        let expected_dir = tmp.path().join(format!("case_{:03}", i + 1));
        assert_eq!(out.case_dir, expected_dir);
        assert!(expected_dir.join("KARMA_FULL.CFG").is_file());
        assert!(expected_dir.join("KARMA_FULL.IN").is_file());
    }
}

#[test]
fn generated_decks_hold_valid_randomized_maps() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut rng = StdRng::seed_from_u64(99);

    let outputs = generate_cases(BASE_DECK, 2, tmp.path(), &mut rng).expect("generate");

    for out in &outputs {
        // Randomization only draws from the palette and never rewrites the
        // pin itself; in the expanded map the octant's first cell occupies
        // the center offset.
        for row in &out.eighth {
            for v in row {
                assert!(ALLOWED_TYPES.contains(v), "cell {v} outside palette");
            }
        }
        assert_eq!(out.full.center_pin(), out.eighth[0][0]);

        // The written deck reparses to the same full map.
        let deck = fs::read_to_string(out.case_dir.join("KARMA_FULL.IN")).expect("read deck");
        let (declared, rows) = read_cfg(&deck).expect("reparse");
        assert_eq!(declared as usize, out.full.size());
        assert_eq!(rows, out.full.rows());
    }
}

#[test]
fn same_seed_reproduces_the_same_cases() {
    let tmp_a = tempfile::tempdir().expect("tempdir");
    let tmp_b = tempfile::tempdir().expect("tempdir");

    let a = generate_cases(BASE_DECK, 2, tmp_a.path(), &mut StdRng::seed_from_u64(17))
        .expect("generate a");
    let b = generate_cases(BASE_DECK, 2, tmp_b.path(), &mut StdRng::seed_from_u64(17))
        .expect("generate b");

    for (ca, cb) in a.iter().zip(&b) {
        assert_eq!(ca.eighth, cb.eighth);
        assert_eq!(ca.full, cb.full);
    }
}

#[test]
fn malformed_deck_yields_no_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut rng = StdRng::seed_from_u64(1);

    let broken = "TITLE broken\n   CFG  7\n 1 4\n"; // no % terminator
    let err = generate_cases(broken, 2, tmp.path(), &mut rng).unwrap_err();
    eprintln!("expected failure: {err}");

    let leftovers: Vec<_> = fs::read_dir(tmp.path())
        .expect("read_dir")
        .filter_map(Result::ok)
        .collect();
    assert!(leftovers.is_empty(), "no case output may exist");
}

#[test]
fn allocator_skips_existing_numbered_decks() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(tmp.path().join("KARMA_00001.IN"), "x").expect("seed file");
    fs::write(tmp.path().join("KARMA_00007.IN"), "x").expect("seed file");
    fs::write(tmp.path().join("KARMA_junk.IN"), "x").expect("seed file");
    fs::write(tmp.path().join("notes.txt"), "x").expect("seed file");

    let mut allocator = FileNumberAllocator::scan(tmp.path()).expect("scan");
    let first = allocator.next_path();
    let second = allocator.next_path();

    assert_eq!(first, tmp.path().join("KARMA_00008.IN"));
    assert_eq!(second, tmp.path().join("KARMA_00009.IN"));
    assert!(!first.exists());
    assert!(!second.exists());
}

#[test]
fn allocator_starts_at_one_in_an_empty_directory() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut allocator = FileNumberAllocator::scan(tmp.path()).expect("scan");
    assert_eq!(allocator.next_path(), tmp.path().join("KARMA_00001.IN"));
}
