//! Addressing mode tests driven through real instructions.
//!
//! Covers zero-page wraparound, indexed page crossing and both indirect
//! modes, using LDA/LDX as the probe.

use sim6502::ProcessorState;

fn setup_cpu(program: &[u8]) -> ProcessorState {
    let mut cpu = ProcessorState::new();
    cpu.load(0x8000, program);
    cpu.pc = 0x8000;
    cpu
}

#[test]
fn test_zero_page_x_wraps_within_page_zero() {
    // LDA $FF,X with X=2 reads $0001, not $0101
    let mut cpu = setup_cpu(&[0xB5, 0xFF]);
    cpu.memory.write(0x0001, 0x11);
    cpu.memory.write(0x0101, 0x99);
    cpu.x = 0x02;

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a, 0x11);
    assert_eq!(cycles, 4);
}

#[test]
fn test_zero_page_y_wraps_within_page_zero() {
    // LDX $F0,Y with Y=$20 reads $0010
    let mut cpu = setup_cpu(&[0xB6, 0xF0]);
    cpu.memory.write(0x0010, 0x5A);
    cpu.y = 0x20;

    cpu.step().unwrap();

    assert_eq!(cpu.x, 0x5A);
}

#[test]
fn test_absolute_x_page_cross_costs_one_cycle() {
    let mut cpu = setup_cpu(&[0xBD, 0xFF, 0x20, 0xBD, 0x00, 0x20]);
    cpu.memory.write(0x2100, 0x01);
    cpu.memory.write(0x2001, 0x02);
    cpu.x = 0x01;

    assert_eq!(cpu.step().unwrap(), 5);
    assert_eq!(cpu.a, 0x01);

    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.a, 0x02);
}

#[test]
fn test_absolute_x_wraps_at_top_of_memory() {
    let mut cpu = setup_cpu(&[0xBD, 0xFF, 0xFF]);
    cpu.memory.write(0x0000, 0x77);
    cpu.x = 0x01;

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a, 0x77);
    assert_eq!(cycles, 5);
}

#[test]
fn test_stores_never_pay_page_cross() {
    // STA $20FF,X is 5 cycles either way
    let mut cpu = setup_cpu(&[0x9D, 0xFF, 0x20]);
    cpu.a = 0x42;
    cpu.x = 0x01;

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x2100), 0x42);
    assert_eq!(cycles, 5);
}

#[test]
fn test_indexed_indirect_pointer_wraps() {
    // LDA ($FE,X) with X=1: pointer at $FF, high byte from $00
    let mut cpu = setup_cpu(&[0xA1, 0xFE]);
    cpu.memory.write(0x00FF, 0x34);
    cpu.memory.write(0x0000, 0x12);
    cpu.memory.write(0x1234, 0xAB);
    cpu.x = 0x01;

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a, 0xAB);
    assert_eq!(cycles, 6);
}

#[test]
fn test_indexed_indirect_index_wraps() {
    // ($80,X) with X=$90 -> pointer at $10
    let mut cpu = setup_cpu(&[0xA1, 0x80]);
    cpu.memory.write(0x0010, 0x00);
    cpu.memory.write(0x0011, 0x40);
    cpu.memory.write(0x4000, 0x5C);
    cpu.x = 0x90;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x5C);
}

#[test]
fn test_indirect_indexed_no_page_cross() {
    let mut cpu = setup_cpu(&[0xB1, 0x40]);
    cpu.memory.write(0x0040, 0x00);
    cpu.memory.write(0x0041, 0x30);
    cpu.memory.write(0x3005, 0x66);
    cpu.y = 0x05;

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a, 0x66);
    assert_eq!(cycles, 5);
}

#[test]
fn test_indirect_indexed_page_cross() {
    let mut cpu = setup_cpu(&[0xB1, 0x40]);
    cpu.memory.write(0x0040, 0xFF);
    cpu.memory.write(0x0041, 0x30);
    cpu.memory.write(0x3100, 0x67);
    cpu.y = 0x01;

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a, 0x67);
    assert_eq!(cycles, 6);
}

#[test]
fn test_indirect_indexed_pointer_bytes_are_sequential() {
    // Pointer at $FF takes its high byte from $0100
    let mut cpu = setup_cpu(&[0xB1, 0xFF]);
    cpu.memory.write(0x00FF, 0x00);
    cpu.memory.write(0x0100, 0x50);
    cpu.memory.write(0x0000, 0x60);
    cpu.memory.write(0x5000, 0x01);
    cpu.memory.write(0x6000, 0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x01);
}
