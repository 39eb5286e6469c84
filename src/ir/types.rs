use itertools::Itertools;
use std::fmt;
use thiserror::Error;

/// One pulse or space of the transmitted signal, tagged with its role in the
/// frame layout. `micros` is the duration handed to the IR blaster.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum IrToken {
    /// Pulse opening a frame.
    LeaderPulse,
    LeaderSpace,
    /// Separator pulse in front of every data bit.
    BitPulse,
    ZeroSpace,
    OneSpace,
    /// Pulse closing a frame, with no trailing space.
    StopPulse,
    /// Space between two consecutive frames.
    FrameGap,
    /// One value of the legacy handshake sent once before the first frame.
    Handshake(u32),
}

impl IrToken {
    pub const fn micros(self) -> u32 {
        match self {
            IrToken::LeaderPulse | IrToken::StopPulse => 3450,
            IrToken::LeaderSpace => 1750,
            IrToken::BitPulse => 430,
            IrToken::ZeroSpace => 420,
            IrToken::OneSpace => 1300,
            IrToken::FrameGap => 35_000,
            IrToken::Handshake(us) => us,
        }
    }
}

#[derive(Debug, Clone, PartialOrd, PartialEq, Eq)]
pub struct IrSequence(pub Vec<IrToken>);

impl IrSequence {
    pub fn into_inner(self) -> Vec<IrToken> {
        self.0
    }
}

impl AsRef<[IrToken]> for IrSequence {
    fn as_ref(&self) -> &[IrToken] {
        &self.0
    }
}

/// The byte frames of one message, in transmission order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IrFrames(pub Vec<Vec<u8>>);

impl AsRef<[Vec<u8>]> for IrFrames {
    fn as_ref(&self) -> &[Vec<u8>] {
        &self.0
    }
}

impl fmt::Display for IrFrames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|frame| frame.iter().map(|b| format!("0x{:02X}", b)).join(", "))
                .join(" / ")
        )
    }
}

/// 8-bit additive checksum: every byte of the frame except the last, summed
/// mod 256. The last byte is the checksum slot itself.
pub fn checksum(frame: &[u8]) -> u8 {
    match frame.split_last() {
        Some((_, data)) => data.iter().fold(0u8, |sum, b| sum.wrapping_add(*b)),
        None => 0,
    }
}

#[derive(Error, Debug, Clone)]
pub enum IrEncodeError {
    #[error("Cannot encode empty frame")]
    EmptyFrame,
}

pub trait IrFormat {
    fn encode<T: AsRef<[Vec<u8>]>>(frames: T) -> Result<IrSequence, IrEncodeError>;
}
