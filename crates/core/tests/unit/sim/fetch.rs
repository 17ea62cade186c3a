//! Fetch unit tests.

use rvpipe_core::core::TickResult;
use rvpipe_core::sim::FetchUnit;
use rvpipe_core::soc::SparseRam;

#[test]
fn bundles_predict_straight_line() {
    let mut ram = SparseRam::new();
    ram.load_words(0x40, &[0x1111_1111]);

    let fetch = FetchUnit::new(0x40);
    let bundle = fetch.bundle(&ram);

    assert_eq!(bundle.inst, 0x1111_1111);
    assert_eq!(bundle.pc, 0x40);
    assert_eq!(bundle.pred_next_pc, 0x44);
}

#[test]
fn pc_advances_by_four_normally() {
    let mut fetch = FetchUnit::new(0);
    let redirected = fetch.advance(&TickResult::default());
    assert!(!redirected);
    assert_eq!(fetch.pc, 4);
}

#[test]
fn stall_freezes_the_pc() {
    let mut fetch = FetchUnit::new(8);
    let result = TickResult {
        stall: true,
        ..TickResult::default()
    };
    let _ = fetch.advance(&result);
    assert_eq!(fetch.pc, 8);
}

#[test]
fn redirect_overrides_everything() {
    let mut fetch = FetchUnit::new(8);
    let result = TickResult {
        stall: true,
        redirect: Some(0x100),
        ..TickResult::default()
    };
    let redirected = fetch.advance(&result);
    assert!(redirected);
    assert_eq!(fetch.pc, 0x100);
}
