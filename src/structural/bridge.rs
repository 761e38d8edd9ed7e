// Bridge: keep an abstraction (remote controls) and its implementation
// (devices) in separate hierarchies that vary independently.

use std::io::Write;

use crate::dispatch::Placeholder;
use crate::error::Result;

// ============================================================================
// Implementation side
// ============================================================================

pub trait Device {
    fn name(&self) -> &'static str;
    fn turn_on(&self, out: &mut dyn Write) -> Result<()>;
    fn turn_off(&self, out: &mut dyn Write) -> Result<()>;
    fn set_volume(&self, volume: u8, out: &mut dyn Write) -> Result<()>;
}

pub struct Tv;

impl Device for Tv {
    fn name(&self) -> &'static str {
        "TV"
    }

    fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "TV is turned on")?;
        Ok(())
    }

    fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "TV is turned off")?;
        Ok(())
    }

    fn set_volume(&self, volume: u8, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "TV volume set to {}", volume)?;
        Ok(())
    }
}

pub struct Radio;

impl Device for Radio {
    fn name(&self) -> &'static str {
        "Radio"
    }

    fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Radio is turned on")?;
        Ok(())
    }

    fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Radio is turned off")?;
        Ok(())
    }

    fn set_volume(&self, volume: u8, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Radio volume set to {}", volume)?;
        Ok(())
    }
}

impl Device for Placeholder {
    fn name(&self) -> &'static str {
        "Device"
    }

    fn turn_on(&self, _out: &mut dyn Write) -> Result<()> {
        Placeholder::fail("Device", "turn_on")
    }

    fn turn_off(&self, _out: &mut dyn Write) -> Result<()> {
        Placeholder::fail("Device", "turn_off")
    }

    fn set_volume(&self, _volume: u8, _out: &mut dyn Write) -> Result<()> {
        Placeholder::fail("Device", "set_volume")
    }
}

// ============================================================================
// Abstraction side
// ============================================================================

pub struct RemoteControl {
    device: Box<dyn Device>,
}

impl RemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &dyn Device {
        self.device.as_ref()
    }

    pub fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
        self.device.turn_on(out)
    }

    pub fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
        self.device.turn_off(out)
    }
}

/// Refined abstraction: everything a basic remote does, plus mute.
pub struct AdvancedRemoteControl {
    remote: RemoteControl,
}

impl AdvancedRemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self {
            remote: RemoteControl::new(device),
        }
    }

    pub fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
        self.remote.turn_on(out)
    }

    pub fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
        self.remote.turn_off(out)
    }

    pub fn mute(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(device = self.remote.device().name(), "muting");
        self.remote.device().set_volume(0, out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let remote_control = RemoteControl::new(Box::new(Tv));
    remote_control.turn_on(out)?;
    remote_control.turn_off(out)?;

    let advanced_remote_control = AdvancedRemoteControl::new(Box::new(Radio));
    advanced_remote_control.turn_on(out)?;
    advanced_remote_control.mute(out)?;
    advanced_remote_control.turn_off(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    #[test]
    fn test_advanced_remote_mutes_any_device() {
        let mut out: Vec<u8> = Vec::new();
        AdvancedRemoteControl::new(Box::new(Tv)).mute(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "TV volume set to 0\n");
    }

    #[test]
    fn test_remote_over_placeholder_device_fails() {
        let remote = RemoteControl::new(Box::new(Placeholder));
        let mut out: Vec<u8> = Vec::new();

        let err = remote.turn_on(&mut out).unwrap_err();
        assert!(matches!(
            err,
            PatternError::UnimplementedOperation {
                role: "Device",
                operation: "turn_on"
            }
        ));

        let err = remote.turn_off(&mut out).unwrap_err();
        assert!(matches!(
            err,
            PatternError::UnimplementedOperation {
                role: "Device",
                operation: "turn_off"
            }
        ));

        let err = AdvancedRemoteControl::new(Box::new(Placeholder))
            .mute(&mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            PatternError::UnimplementedOperation {
                operation: "set_volume",
                ..
            }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_transcript() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "TV is turned on\n\
             TV is turned off\n\
             Radio is turned on\n\
             Radio volume set to 0\n\
             Radio is turned off\n"
        );
    }
}
