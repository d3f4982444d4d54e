//! Tests for INC, DEC, INX, INY, DEX and DEY.

use sim6502::{ProcessorState, Status};

fn setup_cpu(program: &[u8]) -> ProcessorState {
    let mut cpu = ProcessorState::new();
    cpu.load(0x8000, program);
    cpu.pc = 0x8000;
    cpu
}

#[test]
fn test_inc_zero_page() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]);
    cpu.memory.write(0x0010, 0x7F);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x0010), 0x80);
    assert!(cpu.flag(Status::NEGATIVE));
    assert_eq!(cycles, 5);
}

#[test]
fn test_inc_wraps_and_leaves_carry() {
    let mut cpu = setup_cpu(&[0xEE, 0x00, 0x20]);
    cpu.memory.write(0x2000, 0xFF);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x2000), 0x00);
    assert!(cpu.flag(Status::ZERO));
    assert!(!cpu.flag(Status::CARRY));
    assert_eq!(cycles, 6);
}

#[test]
fn test_dec_absolute_x() {
    let mut cpu = setup_cpu(&[0xDE, 0x00, 0x20]);
    cpu.memory.write(0x2005, 0x01);
    cpu.x = 0x05;

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x2005), 0x00);
    assert!(cpu.flag(Status::ZERO));
    assert_eq!(cycles, 7);
}

#[test]
fn test_dec_wraps_to_ff() {
    let mut cpu = setup_cpu(&[0xC6, 0x10]);
    cpu.set_flag(Status::CARRY, true);

    cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x0010), 0xFF);
    assert!(cpu.flag(Status::NEGATIVE));
    assert!(cpu.flag(Status::CARRY));
}

#[test]
fn test_register_increments() {
    // INX; INY
    let mut cpu = setup_cpu(&[0xE8, 0xC8]);
    cpu.x = 0xFF;
    cpu.y = 0x10;

    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.x, 0x00);
    assert!(cpu.flag(Status::ZERO));

    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.y, 0x11);
    assert!(!cpu.flag(Status::ZERO));
}

#[test]
fn test_register_decrements() {
    // DEX; DEY
    let mut cpu = setup_cpu(&[0xCA, 0x88]);
    cpu.x = 0x00;
    cpu.y = 0x01;

    cpu.step().unwrap();
    assert_eq!(cpu.x, 0xFF);
    assert!(cpu.flag(Status::NEGATIVE));

    cpu.step().unwrap();
    assert_eq!(cpu.y, 0x00);
    assert!(cpu.flag(Status::ZERO));
    assert!(!cpu.flag(Status::NEGATIVE));
}
