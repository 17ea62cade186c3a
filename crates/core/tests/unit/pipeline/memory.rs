//! Memory stage tests.

use rvpipe_core::core::Core;
use rvpipe_core::core::pipeline::latches::ExMem;
use rvpipe_core::core::pipeline::signals::{MemCtrl, MemOp, MemWidth};
use rvpipe_core::core::pipeline::stages::memory::mem_stage;
use rvpipe_core::soc::{DataPort, SparseRam};

fn load_packet(addr: u32, width: MemWidth, unsigned: bool) -> ExMem {
    ExMem {
        alu: addr,
        store_data: 0,
        mem: MemCtrl {
            op: MemOp::Load,
            width,
            unsigned,
            rd: 5,
        },
    }
}

#[test]
fn alu_packets_pass_their_result_through() {
    let mut core = Core::new();
    let mut ram = SparseRam::new();
    let packet = ExMem {
        alu: 0xCAFE,
        store_data: 0,
        mem: MemCtrl {
            rd: 3,
            ..MemCtrl::default()
        },
    };
    mem_stage(&mut core, packet, &mut ram);

    assert_eq!(core.mem_wb.value, 0xCAFE);
    assert_eq!(core.mem_wb.mem.rd, 3);
    assert_eq!(core.bypass.mem_wb, 0xCAFE);
}

#[test]
fn word_load_round_trips() {
    let mut core = Core::new();
    let mut ram = SparseRam::new();
    ram.write(0x100, MemWidth::Word, 0xDEAD_BEEF);

    mem_stage(
        &mut core,
        load_packet(0x100, MemWidth::Word, false),
        &mut ram,
    );
    assert_eq!(core.mem_wb.value, 0xDEAD_BEEF);
}

#[test]
fn signed_byte_load_extends() {
    let mut core = Core::new();
    let mut ram = SparseRam::new();
    ram.write(0x10, MemWidth::Byte, 0x80);

    mem_stage(&mut core, load_packet(0x10, MemWidth::Byte, false), &mut ram);
    assert_eq!(core.mem_wb.value, 0xFFFF_FF80);
}

#[test]
fn unsigned_byte_load_does_not_extend() {
    let mut core = Core::new();
    let mut ram = SparseRam::new();
    ram.write(0x10, MemWidth::Byte, 0x80);

    mem_stage(&mut core, load_packet(0x10, MemWidth::Byte, true), &mut ram);
    assert_eq!(core.mem_wb.value, 0x80);
}

#[test]
fn halfword_sign_extension() {
    let mut core = Core::new();
    let mut ram = SparseRam::new();
    ram.write(0x20, MemWidth::Half, 0x8001);

    mem_stage(&mut core, load_packet(0x20, MemWidth::Half, false), &mut ram);
    assert_eq!(core.mem_wb.value, 0xFFFF_8001);

    mem_stage(&mut core, load_packet(0x20, MemWidth::Half, true), &mut ram);
    assert_eq!(core.mem_wb.value, 0x8001);
}

#[test]
fn store_writes_through_and_passes_the_address_down() {
    let mut core = Core::new();
    let mut ram = SparseRam::new();
    let packet = ExMem {
        alu: 0x40,
        store_data: 0x1122_3344,
        mem: MemCtrl {
            op: MemOp::Store,
            width: MemWidth::Word,
            unsigned: false,
            rd: 0,
        },
    };
    mem_stage(&mut core, packet, &mut ram);

    assert_eq!(ram.read(0x40, MemWidth::Word), 0x1122_3344);
    assert_eq!(core.mem_wb.value, 0x40);
}

#[test]
fn narrow_store_leaves_neighbors_alone() {
    let mut core = Core::new();
    let mut ram = SparseRam::new();
    ram.write(0x40, MemWidth::Word, 0xFFFF_FFFF);

    let packet = ExMem {
        alu: 0x41,
        store_data: 0xAB,
        mem: MemCtrl {
            op: MemOp::Store,
            width: MemWidth::Byte,
            unsigned: false,
            rd: 0,
        },
    };
    mem_stage(&mut core, packet, &mut ram);

    assert_eq!(ram.read(0x40, MemWidth::Word), 0xFFFF_ABFF);
}

#[test]
fn unaligned_addresses_pass_through_unmodified() {
    let mut core = Core::new();
    let mut ram = SparseRam::new();

    let packet = ExMem {
        alu: 0x101,
        store_data: 0xAABB_CCDD,
        mem: MemCtrl {
            op: MemOp::Store,
            width: MemWidth::Word,
            unsigned: false,
            rd: 0,
        },
    };
    mem_stage(&mut core, packet, &mut ram);

    mem_stage(
        &mut core,
        load_packet(0x101, MemWidth::Word, false),
        &mut ram,
    );
    assert_eq!(core.mem_wb.value, 0xAABB_CCDD);
}

#[test]
fn bubble_refreshes_the_bypass() {
    let mut core = Core::new();
    let mut ram = SparseRam::new();
    core.bypass.mem_wb = 0x5555;

    mem_stage(&mut core, ExMem::default(), &mut ram);
    assert_eq!(core.bypass.mem_wb, 0);
}
