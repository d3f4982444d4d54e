//! Tests for PHA, PHP, PLA and PLP, and stack pointer wraparound.

use sim6502::{ProcessorState, Status};

fn setup_cpu(program: &[u8]) -> ProcessorState {
    let mut cpu = ProcessorState::new();
    cpu.load(0x8000, program);
    cpu.pc = 0x8000;
    cpu
}

#[test]
fn test_pha_writes_then_decrements() {
    let mut cpu = setup_cpu(&[0x48]);
    cpu.a = 0x42;

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x01FF), 0x42);
    assert_eq!(cpu.sp, 0xFE);
    assert_eq!(cycles, 3);
}

#[test]
fn test_pla_restores_and_sets_flags() {
    // PHA; LDA #$00; PLA
    let mut cpu = setup_cpu(&[0x48, 0xA9, 0x00, 0x68]);
    cpu.a = 0x80;

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert!(cpu.flag(Status::ZERO));
    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a, 0x80);
    assert_eq!(cpu.sp, 0xFF);
    assert!(cpu.flag(Status::NEGATIVE));
    assert!(!cpu.flag(Status::ZERO));
    assert_eq!(cycles, 4);
}

#[test]
fn test_256_pushes_wrap_stack_pointer() {
    let program = [0x48; 256];
    let mut cpu = setup_cpu(&program);

    for i in 0..=255u8 {
        cpu.a = i;
        cpu.step().unwrap();
    }

    assert_eq!(cpu.sp, 0xFF);
    assert_eq!(cpu.memory.read(0x0100), 0xFF);
    assert_eq!(cpu.memory.read(0x01FF), 0x00);
}

#[test]
fn test_pull_wraps_from_empty_stack() {
    // PLA with SP=$FF reads $0100
    let mut cpu = setup_cpu(&[0x68]);
    cpu.memory.write(0x0100, 0x7E);

    cpu.step().unwrap();

    assert_eq!(cpu.sp, 0x00);
    assert_eq!(cpu.a, 0x7E);
}

#[test]
fn test_php_pushes_break_and_bit5() {
    let mut cpu = setup_cpu(&[0x08]);
    cpu.set_flag(Status::CARRY, true);
    cpu.set_flag(Status::NEGATIVE, true);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x01FF), 0b1011_0001);
    assert!(!cpu.flag(Status::BREAK));
    assert_eq!(cycles, 3);
}

#[test]
fn test_plp_ignores_break_forces_bit5() {
    let mut cpu = setup_cpu(&[0x28]);
    cpu.sp = 0xFE;
    cpu.memory.write(0x01FF, 0b1101_1011);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.status(), 0b1110_1011);
    assert!(!cpu.flag(Status::BREAK));
    assert!(cpu.flag(Status::UNUSED));
    assert!(cpu.flag(Status::DECIMAL));
    assert_eq!(cycles, 4);
}

#[test]
fn test_php_plp_round_trip() {
    // SEC; SED; PHP; CLC; CLD; PLP
    let mut cpu = setup_cpu(&[0x38, 0xF8, 0x08, 0x18, 0xD8, 0x28]);

    for _ in 0..6 {
        cpu.step().unwrap();
    }

    assert!(cpu.flag(Status::CARRY));
    assert!(cpu.flag(Status::DECIMAL));
    assert_eq!(cpu.sp, 0xFF);
}
