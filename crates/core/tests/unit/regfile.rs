//! Register file tests.

use rvpipe_core::core::regfile::RegFile;

#[test]
fn registers_reset_to_zero() {
    let regs = RegFile::new();
    for idx in 0..32 {
        assert_eq!(regs.read(idx), 0);
    }
}

#[test]
fn writes_persist() {
    let mut regs = RegFile::new();
    regs.write(7, 0xDEAD_BEEF);
    assert_eq!(regs.read(7), 0xDEAD_BEEF);
}

#[test]
fn x0_is_hardwired_to_zero() {
    let mut regs = RegFile::new();
    regs.write(0, 0xFFFF_FFFF);
    assert_eq!(regs.read(0), 0);
}

#[test]
fn out_of_range_reads_are_zero() {
    let regs = RegFile::new();
    assert_eq!(regs.read(32), 0);
}
