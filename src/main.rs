use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use nes6502::{Cartridge, Cpu, CpuConfig, NromBus, OpcodePolicy};

/// Run an NROM cartridge on the 6502 core and dump the final registers.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// iNES image to load
    rom: PathBuf,

    /// Maximum number of instructions to execute
    #[arg(long, default_value_t = 1_000)]
    steps: usize,

    /// What to do with undocumented opcodes: strict or permissive
    #[arg(long, default_value_t = OpcodePolicy::Permissive)]
    policy: OpcodePolicy,

    /// Start address overriding the RESET vector, e.g. $C000 or 0xC000
    #[arg(long, value_parser = parse_addr)]
    start: Option<u16>,
}

fn parse_addr(s: &str) -> Result<u16, String> {
    let digits = s
        .strip_prefix('$')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid address {s:?}: {e}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cart = Cartridge::from_ines_file(&args.rom)
        .with_context(|| format!("loading {}", args.rom.display()))?;
    info!(
        "mapper {} prg {} KiB chr {} KiB{} mirroring {:?}",
        cart.mapper_id(),
        cart.prg_rom_len() / 1024,
        cart.chr_len() / 1024,
        if cart.chr_is_ram() { " (ram)" } else { "" },
        cart.mirroring(),
    );

    let mut bus = NromBus::new(cart).context("building NROM bus")?;
    let mut cpu = Cpu::with_config(CpuConfig::default().with_opcode_policy(args.policy));
    cpu.reset(&mut bus).context("reset")?;
    if let Some(start) = args.start {
        cpu.set_pc(start);
    }

    let mut executed = 0usize;
    while executed < args.steps {
        if let Err(e) = cpu.step(&mut bus) {
            error!("stopped after {executed} steps: {e}");
            break;
        }
        executed += 1;
    }

    info!(
        "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} PC:{:04X} CYC:{}",
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.status(),
        cpu.sp(),
        cpu.pc(),
        cpu.cycles(),
    );
    Ok(())
}
