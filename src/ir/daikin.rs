pub mod types;

use crate::ir::daikin::types::{FanSpeed, Mode, Power, Swing, TimerMode};
use crate::ir::types::{checksum, IrFrames};

pub const FRAME_ONE: [u8; 8] = [0x11, 0xDA, 0x27, 0x00, 0xC5, 0x00, 0x00, 0xD7];
pub const FRAME_TWO: [u8; 8] = [0x11, 0xDA, 0x27, 0x00, 0x42, 0x00, 0x00, 0x54];

// Byte 5 holds mode/power/timer flags, byte 6 the temperature, byte 8
// fan/swing, bytes 10-12 the timer delay, byte 13 powerful, byte 18 the
// checksum. Everything else is fixed.
const FRAME_THREE_BASE: [u8; 19] = [
    0x11, 0xDA, 0x27, 0x00, 0x00, 0x08, 0x19, 0x00, 0xAF, 0x00, 0x00, 0x06, 0x60, 0x00, 0x00,
    0xC0, 0x00, 0x00, 0x26,
];

/// One remote-control key press. The whole unit state is retransmitted on
/// every press, so a command carries every setting, not a delta.
#[derive(Debug, Clone, PartialEq)]
pub struct DaikinCommand {
    pub power: Power,
    pub mode: Mode,
    /// Target °C in cold/warm mode, offset from the automatic setpoint in
    /// auto/dry mode, ignored in fan mode.
    pub temperature: i8,
    pub fan_speed: FanSpeed,
    pub swing: Swing,
    pub powerful: bool,
    pub timer_mode: TimerMode,
    /// Hours until the timer fires, meaningful only when `timer_mode` is
    /// not `None`.
    pub hour: f64,
}

impl Default for DaikinCommand {
    fn default() -> Self {
        DaikinCommand {
            power: Power::default(),
            mode: Mode::default(),
            temperature: 25,
            fan_speed: FanSpeed::default(),
            swing: Swing::default(),
            powerful: false,
            timer_mode: TimerMode::default(),
            hour: 0.0,
        }
    }
}

impl DaikinCommand {
    pub fn on_timer(&self) -> f64 {
        if self.timer_mode == TimerMode::On {
            self.hour
        } else {
            0.0
        }
    }

    pub fn off_timer(&self) -> f64 {
        if self.timer_mode == TimerMode::Off {
            self.hour
        } else {
            0.0
        }
    }

    /// Derives the three frames of the message. The first two are constant;
    /// the third carries the command with its checksum in the last byte.
    pub fn frames(&self) -> IrFrames {
        let mut third = FRAME_THREE_BASE.to_vec();

        third[5] |= self.power.code();
        third[5] = (self.mode.code() << 4) | (third[5] & 0x0F);

        third[6] = match self.mode {
            // sign bit clear, 5-bit value, shifted past the half-degree bit
            Mode::Cold | Mode::Warm => (((self.temperature as i32) & 0x1F) << 1) as u8,
            Mode::Auto | Mode::Dry => {
                let mut offset = self.temperature as i32;
                if offset < 0 {
                    // the stock remote sends the one's complement of the
                    // magnitude, not a two's-complement negative
                    offset = !(-offset);
                }
                (0x20 | (offset & 0x03)) as u8
            }
            Mode::Fan => 25 << 1,
        };

        third[8] = (self.fan_speed.code() << 4) | (third[8] & 0x0F);
        third[8] = self.swing.code() | (third[8] & 0xF0);

        let on_timer = self.on_timer();
        if on_timer > 0.0 {
            third[5] |= 1 << 1;
            let (low, high) = time_to_bytes(on_timer, 3);
            third[10] = low;
            third[11] = high;
            // bytes 11-12 hold the timers-disabled flag bits; 10 and 11
            // were just overwritten so only 12 needs clearing
            third[12] = 0;
        }
        let off_timer = self.off_timer();
        if off_timer > 0.0 {
            third[5] |= 1 << 2;
            let (low, high) = time_to_bytes(off_timer, 7);
            third[11] = low;
            third[12] = high;
        }

        third[13] = if self.powerful { 1 } else { 0 };

        let last = third.len() - 1;
        third[last] = checksum(&third);

        IrFrames(vec![FRAME_ONE.to_vec(), FRAME_TWO.to_vec(), third])
    }
}

/// Packs a delay in hours into the two timer bytes. The delay becomes whole
/// minutes, any bits above the low byte fold back in with an OR, and the
/// result splits at `split_bits` into (low, high).
fn time_to_bytes(hour: f64, split_bits: u32) -> (u8, u8) {
    let minutes = (hour.round() as u32) * 60;
    let folded = (minutes & 0xFF) | (minutes >> 8);
    (
        (folded & ((1 << split_bits) - 1)) as u8,
        (folded >> split_bits) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    fn command() -> DaikinCommand {
        DaikinCommand {
            power: Power::On,
            mode: Mode::Auto,
            temperature: 20,
            fan_speed: FanSpeed::Auto,
            swing: Swing::On,
            powerful: false,
            timer_mode: TimerMode::None,
            hour: 0.0,
        }
    }

    fn third_frame(command: &DaikinCommand) -> Vec<u8> {
        command.frames().0[2].clone()
    }

    #[test]
    fn first_two_frames_are_constant() {
        for command in [
            command(),
            DaikinCommand {
                power: Power::Off,
                mode: Mode::Warm,
                temperature: -3,
                fan_speed: FanSpeed::Silent,
                swing: Swing::Off,
                powerful: true,
                timer_mode: TimerMode::Off,
                hour: 9.0,
            },
        ] {
            let frames = command.frames();
            assert_eq!(frames.0[0], FRAME_ONE.to_vec());
            assert_eq!(frames.0[1], FRAME_TWO.to_vec());
        }
    }

    #[test]
    fn sample_command_third_frame() {
        assert_eq!(
            third_frame(&command()),
            vec![
                0x11, 0xDA, 0x27, 0x00, 0x00, 0x09, 0x20, 0x00, 0xAF, 0x00, 0x00, 0x06, 0x60,
                0x00, 0x00, 0xC0, 0x00, 0x00, 0x10
            ]
        );
    }

    #[rstest]
    #[case(Mode::Cold, 26, 0x34)]
    #[case(Mode::Warm, 18, 0x24)]
    #[case(Mode::Warm, 10, 0x14)]
    #[case(Mode::Fan, 3, 0x32)]
    #[case(Mode::Fan, -100, 0x32)]
    #[case(Mode::Auto, 0, 0x20)]
    #[case(Mode::Auto, 2, 0x22)]
    // negative offsets go out one's-complemented, so -1 encodes like +2
    // and -2 like +1; kept as the stock remote sends it
    #[case(Mode::Dry, -1, 0x22)]
    #[case(Mode::Auto, -2, 0x21)]
    #[case(Mode::Auto, -3, 0x20)]
    fn temperature_encoding(#[case] mode: Mode, #[case] temperature: i8, #[case] expected: u8) {
        let frame = third_frame(&DaikinCommand {
            mode,
            temperature,
            ..command()
        });
        assert_eq!(frame[6], expected);
    }

    #[test]
    fn out_of_range_temperature_truncates() {
        // 5-bit window: 40 wraps to 8
        let frame = third_frame(&DaikinCommand {
            mode: Mode::Cold,
            temperature: 40,
            ..command()
        });
        assert_eq!(frame[6], (40 & 0x1F) << 1);
    }

    #[test]
    fn power_and_mode_share_byte_five() {
        let frame = third_frame(&DaikinCommand {
            power: Power::Off,
            mode: Mode::Warm,
            ..command()
        });
        assert_eq!(frame[5], 0x48);
        let frame = third_frame(&DaikinCommand {
            power: Power::On,
            mode: Mode::Cold,
            ..command()
        });
        assert_eq!(frame[5], 0x39);
    }

    #[rstest]
    #[case(FanSpeed::Auto, Swing::On, 0xAF)]
    #[case(FanSpeed::Auto, Swing::Off, 0xA0)]
    #[case(FanSpeed::Level1, Swing::On, 0x3F)]
    #[case(FanSpeed::Silent, Swing::Off, 0xB0)]
    fn fan_and_swing_share_byte_eight(
        #[case] fan_speed: FanSpeed,
        #[case] swing: Swing,
        #[case] expected: u8,
    ) {
        let frame = third_frame(&DaikinCommand {
            fan_speed,
            swing,
            ..command()
        });
        assert_eq!(frame[8], expected);
    }

    #[test]
    fn powerful_sets_byte_thirteen() {
        assert_eq!(third_frame(&command())[13], 0);
        let frame = third_frame(&DaikinCommand {
            powerful: true,
            ..command()
        });
        assert_eq!(frame[13], 1);
    }

    #[test]
    fn no_timer_keeps_disabled_flag_bytes() {
        let frame = third_frame(&command());
        assert_eq!(frame[5] & 0b0110, 0);
        assert_eq!(&frame[10..13], &[0x00, 0x06, 0x60]);
    }

    #[test]
    fn on_timer_packs_split_three() {
        let frame = third_frame(&DaikinCommand {
            timer_mode: TimerMode::On,
            hour: 1.0,
            ..command()
        });
        assert_eq!(frame[5] & 0b0110, 0b0010);
        assert_eq!(&frame[10..13], &[4, 7, 0]);
    }

    #[test]
    fn off_timer_packs_split_seven() {
        // 10.5h rounds to 11h = 660 minutes = 0x294, folded to 0x96
        let frame = third_frame(&DaikinCommand {
            timer_mode: TimerMode::Off,
            hour: 10.5,
            ..command()
        });
        assert_eq!(frame[5] & 0b0110, 0b0100);
        assert_eq!(&frame[10..13], &[0x00, 22, 1]);
    }

    #[test]
    fn checksum_closes_every_frame() {
        for mode in Mode::iter() {
            for fan_speed in FanSpeed::iter() {
                let frame = third_frame(&DaikinCommand {
                    mode,
                    fan_speed,
                    ..command()
                });
                let sum: u32 = frame[..18].iter().map(|&b| u32::from(b)).sum();
                assert_eq!(u32::from(frame[18]), sum % 256);
            }
        }
    }

    #[test]
    fn time_to_bytes_folds_high_minutes() {
        assert_eq!(time_to_bytes(1.0, 3), (4, 7));
        // 5h = 300 minutes = 0x12C, folded to 0x2D
        assert_eq!(time_to_bytes(5.0, 3), (5, 5));
        assert_eq!(time_to_bytes(11.0, 7), (22, 1));
        // fractional hours round to the nearest whole hour first
        assert_eq!(time_to_bytes(0.6, 3), time_to_bytes(1.0, 3));
    }

    #[test]
    fn timer_accessors_are_exclusive() {
        let on = DaikinCommand {
            timer_mode: TimerMode::On,
            hour: 2.0,
            ..command()
        };
        assert_eq!(on.on_timer(), 2.0);
        assert_eq!(on.off_timer(), 0.0);
        let none = command();
        assert_eq!(none.on_timer(), 0.0);
        assert_eq!(none.off_timer(), 0.0);
    }
}
