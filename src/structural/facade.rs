// Facade: one simple entry point over a set of subsystem types.

use std::io::Write;

use crate::error::Result;

// Subsystems

pub struct Cpu;

impl Cpu {
    pub fn freeze(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Freezing CPU...")?;
        Ok(())
    }

    pub fn jump(&self, position: u64, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Jumping to position {}...", position)?;
        Ok(())
    }

    pub fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Executing instructions...")?;
        Ok(())
    }
}

pub struct Memory;

impl Memory {
    pub fn load(&self, position: u64, data: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Loading data '{}' at position {}...", data, position)?;
        Ok(())
    }
}

pub struct HardDrive;

impl HardDrive {
    pub fn read(&self, lba: u64, size: usize, out: &mut dyn Write) -> Result<String> {
        writeln!(out, "Reading {} bytes from LBA {}...", size, lba)?;
        Ok("data".to_string())
    }
}

pub const BOOT_ADDRESS: u64 = 0;
pub const BOOT_SECTOR_SIZE: usize = 1024;

/// Boots the machine without exposing the subsystem choreography.
pub struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    hard_drive: HardDrive,
}

impl ComputerFacade {
    pub fn new() -> Self {
        Self {
            cpu: Cpu,
            memory: Memory,
            hard_drive: HardDrive,
        }
    }

    pub fn start(&self, out: &mut dyn Write) -> Result<()> {
        self.cpu.freeze(out)?;
        let data = self.hard_drive.read(BOOT_ADDRESS, BOOT_SECTOR_SIZE, out)?;
        self.memory.load(BOOT_ADDRESS, &data, out)?;
        self.cpu.jump(BOOT_ADDRESS, out)?;
        self.cpu.execute(out)?;
        Ok(())
    }
}

impl Default for ComputerFacade {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let computer = ComputerFacade::new();
    computer.start(out)
}
