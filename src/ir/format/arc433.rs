use crate::ir::types::{checksum, IrEncodeError, IrFormat, IrSequence, IrToken};

/// Pulse-distance scheme of the Daikin ARC4xx remotes: a legacy handshake,
/// then three frames whose bytes go out low bit first.
pub struct Arc433 {}

lazy_static! {
    /// Five shrinking pulses interleaved with five growing spaces, left over
    /// from the remote's original low-bitrate handshake, then a long settle
    /// gap before the first real frame.
    static ref HANDSHAKE: Vec<IrToken> = [
        550, 320, 525, 335, 505, 355, 485, 375, 465, 395, 445, 25_375
    ]
    .iter()
    .map(|&us| IrToken::Handshake(us))
    .collect();
}

impl IrFormat for Arc433 {
    fn encode<T: AsRef<[Vec<u8>]>>(frames: T) -> Result<IrSequence, IrEncodeError> {
        let frames = frames.as_ref();
        let mut tokens = HANDSHAKE.clone();

        for (i, frame) in frames.iter().enumerate() {
            if frame.is_empty() {
                return Err(IrEncodeError::EmptyFrame);
            }

            tokens.push(IrToken::LeaderPulse);
            tokens.push(IrToken::LeaderSpace);

            for byte in &frame[..frame.len() - 1] {
                push_bits(&mut tokens, *byte);
            }
            // the checksum slot goes out recomputed, whatever the caller
            // left in it
            push_bits(&mut tokens, checksum(frame));

            tokens.push(IrToken::StopPulse);
            if i + 1 < frames.len() {
                tokens.push(IrToken::FrameGap);
            }
        }

        trace!(
            "encoded {} frames into {} timing tokens",
            frames.len(),
            tokens.len()
        );
        Ok(IrSequence(tokens))
    }
}

// receivers reassemble bytes low bit first, so bit 0 leads on the wire
fn push_bits(tokens: &mut Vec<IrToken>, byte: u8) {
    let mut bits = byte;
    for _ in 0..8 {
        tokens.push(IrToken::BitPulse);
        tokens.push(if bits & 1 == 0 {
            IrToken::ZeroSpace
        } else {
            IrToken::OneSpace
        });
        bits >>= 1;
    }
}
