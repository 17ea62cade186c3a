//! ALU operation tests.

use rstest::rstest;
use rvpipe_core::core::pipeline::signals::AluOp;
use rvpipe_core::core::units::Alu;

#[rstest]
#[case(AluOp::Add, 10, 20, 30)]
#[case(AluOp::Add, u32::MAX, 1, 0)]
#[case(AluOp::Sub, 20, 30, (-10i32) as u32)]
#[case(AluOp::Sub, 0, 1, u32::MAX)]
fn arithmetic(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[rstest]
#[case(AluOp::Or, 0xF0F0_F0F0, 0x0F0F_0F0F, 0xFFFF_FFFF)]
#[case(AluOp::And, 0xF0F0_F0F0, 0x0F0F_0F0F, 0)]
#[case(AluOp::And, 0xFF00, 0x0FF0, 0x0F00)]
#[case(AluOp::Xor, 0xAAAA_AAAA, 0xFFFF_FFFF, 0x5555_5555)]
fn logic(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[rstest]
#[case(AluOp::Slt, (-1i32) as u32, 1, 1)]
#[case(AluOp::Slt, 1, (-1i32) as u32, 0)]
#[case(AluOp::Slt, 5, 5, 0)]
#[case(AluOp::Sltu, (-1i32) as u32, 1, 0)]
#[case(AluOp::Sltu, 1, (-1i32) as u32, 1)]
fn comparisons(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[rstest]
#[case(AluOp::Sll, 0xF, 2, 0x3C)]
#[case(AluOp::Srl, 0xF0, 4, 0xF)]
#[case(AluOp::Srl, 0xFFFF_FFF0, 2, 0x3FFF_FFFC)]
#[case(AluOp::Sra, 0xFFFF_FFF0, 2, 0xFFFF_FFFC)]
#[case(AluOp::Sra, 0x7FFF_FFFF, 1, 0x3FFF_FFFF)]
fn shifts(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[test]
fn shift_amount_uses_only_five_bits() {
    // b = 33 shifts by 1.
    assert_eq!(Alu::execute(AluOp::Sll, 1, 33), 2);
    assert_eq!(Alu::execute(AluOp::Srl, 4, 33), 2);
}

#[test]
fn nop_drives_zero() {
    assert_eq!(Alu::execute(AluOp::Nop, 0xDEAD, 0xBEEF), 0);
}
