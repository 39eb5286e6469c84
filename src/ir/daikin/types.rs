use std::str::FromStr;

use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Power {
    Off,
    On,
}

impl Power {
    pub const fn code(self) -> u8 {
        match self {
            Power::Off => 0b0000,
            Power::On => 0b0001,
        }
    }
}

impl Default for Power {
    fn default() -> Self {
        Power::Off
    }
}

#[derive(Error, Debug)]
#[error("Invalid power setting")]
pub struct InvalidPower;

impl FromStr for Power {
    type Err = InvalidPower;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Power::Off),
            "on" => Ok(Power::On),
            _ => Err(InvalidPower),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumIter)]
pub enum Mode {
    Auto,
    Dry,
    Cold,
    Warm,
    Fan,
}

impl Mode {
    pub const fn code(self) -> u8 {
        match self {
            Mode::Auto => 0b0000,
            Mode::Dry => 0b0010,
            Mode::Cold => 0b0011,
            Mode::Warm => 0b0100,
            Mode::Fan => 0b0110,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Auto
    }
}

#[derive(Error, Debug)]
#[error("Invalid mode")]
pub struct InvalidMode;

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Mode::Auto),
            "dry" => Ok(Mode::Dry),
            "cold" => Ok(Mode::Cold),
            "warm" => Ok(Mode::Warm),
            "fan" => Ok(Mode::Fan),
            _ => Err(InvalidMode),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumIter)]
pub enum FanSpeed {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Auto,
    Silent,
}

impl FanSpeed {
    pub const fn code(self) -> u8 {
        match self {
            FanSpeed::Level1 => 0b0011,
            FanSpeed::Level2 => 0b0100,
            FanSpeed::Level3 => 0b0101,
            FanSpeed::Level4 => 0b0110,
            FanSpeed::Level5 => 0b0111,
            FanSpeed::Auto => 0b1010,
            FanSpeed::Silent => 0b1011,
        }
    }
}

impl Default for FanSpeed {
    fn default() -> Self {
        FanSpeed::Auto
    }
}

#[derive(Error, Debug)]
#[error("Invalid fan speed")]
pub struct InvalidFanSpeed;

impl FromStr for FanSpeed {
    type Err = InvalidFanSpeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" => Ok(FanSpeed::Level1),
            "2" => Ok(FanSpeed::Level2),
            "3" => Ok(FanSpeed::Level3),
            "4" => Ok(FanSpeed::Level4),
            "5" => Ok(FanSpeed::Level5),
            "auto" => Ok(FanSpeed::Auto),
            "silent" => Ok(FanSpeed::Silent),
            _ => Err(InvalidFanSpeed),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Swing {
    Off,
    On,
}

impl Swing {
    pub const fn code(self) -> u8 {
        match self {
            Swing::Off => 0x0,
            Swing::On => 0xF,
        }
    }
}

impl Default for Swing {
    fn default() -> Self {
        Swing::On
    }
}

#[derive(Error, Debug)]
#[error("Invalid swing setting")]
pub struct InvalidSwing;

impl FromStr for Swing {
    type Err = InvalidSwing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Swing::Off),
            "on" => Ok(Swing::On),
            _ => Err(InvalidSwing),
        }
    }
}

/// Which of the two exclusive timers `hour` applies to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TimerMode {
    None,
    Off,
    On,
}

impl Default for TimerMode {
    fn default() -> Self {
        TimerMode::None
    }
}

#[derive(Error, Debug)]
#[error("Invalid timer mode")]
pub struct InvalidTimerMode;

impl FromStr for TimerMode {
    type Err = InvalidTimerMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(TimerMode::None),
            "off" => Ok(TimerMode::Off),
            "on" => Ok(TimerMode::On),
            _ => Err(InvalidTimerMode),
        }
    }
}
