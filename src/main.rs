use silica::*;

use std::env;
use std::fs;
use std::io;
use std::process;

fn pc<'a>(c: &'a Context<'a>) -> &'a Module<'a> {
    let m = c.module("pc");

    let value = m.reg(32);
    value.default_value(0x10000000u32);
    value.drive_next(m.mux(
        m.input("write_enable", 1),
        m.input("write_data", 32),
        value.value,
    ));
    m.output("value", value.value);

    m
}

fn sequencer<'a>(c: &'a Context<'a>) -> &'a Module<'a> {
    let m = c.module("sequencer");

    const NUM_STATES: u32 = 4;
    const STATE_INSTRUCTION_FETCH: u32 = 0;
    const STATE_DECODE: u32 = 1;
    const STATE_EXECUTE_MEM: u32 = 2;
    const STATE_WRITEBACK: u32 = 3;

    let state = m.reg(NUM_STATES);
    state.default_value(1u32 << STATE_INSTRUCTION_FETCH);

    let b = Bindings::new(m);
    b.set("next_state", state.value);

    let transitions = [
        (
            STATE_INSTRUCTION_FETCH,
            "instruction_fetch_ready",
            STATE_DECODE,
        ),
        (STATE_DECODE, "decode_ready", STATE_EXECUTE_MEM),
        (STATE_EXECUTE_MEM, "execute_mem_ready", STATE_WRITEBACK),
        (STATE_WRITEBACK, "writeback_ready", STATE_INSTRUCTION_FETCH),
    ];
    for &(from, ready, to) in transitions.iter() {
        b.enter_scope(state.value.bit(from) & m.input(ready, 1));
        b.set("next_state", m.lit(1u32 << to, NUM_STATES));
        b.exit_scope();
    }
    state.drive_next(b.get("next_state"));

    m.output(
        "instruction_fetch_enable",
        state.value.bit(STATE_INSTRUCTION_FETCH),
    );
    m.output("decode_enable", state.value.bit(STATE_DECODE));
    m.output("execute_mem_enable", state.value.bit(STATE_EXECUTE_MEM));
    m.output("writeback_enable", state.value.bit(STATE_WRITEBACK));

    m
}

fn led_interface<'a>(c: &'a Context<'a>) -> &'a Module<'a> {
    let m = c.module("led_interface");

    let leds = m.reg(3);
    leds.drive_next(m.mux(
        m.input("write_req", 1) & m.input("byte_enable", 1),
        m.input("write_data", 3),
        leds.value,
    ));

    let read_data_valid = m.reg(1);
    read_data_valid.drive_next(m.input("read_req", 1));

    m.output("read_data", leds.value);
    m.output("read_data_valid", read_data_valid.value);

    m.output("leds", leds.value);

    m
}

fn main() -> io::Result<()> {
    let output_file_name = match env::args().nth(1) {
        Some(arg) => arg,
        _ => {
            eprintln!("Usage: silica <output-file>");
            process::exit(1);
        }
    };

    let c = Context::new();

    let modules = [pc(&c), sequencer(&c), led_interface(&c)];

    // Generate into a buffer first so a failing module never leaves a partial file behind
    let mut buffer = Vec::new();
    system_verilog::generate_all(&modules, &mut buffer)?;

    fs::write(output_file_name, buffer)
}
