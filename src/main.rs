extern crate pretty_env_logger;
#[macro_use]
extern crate log;

use color_eyre::eyre::WrapErr;
use daikin_lirc::ir::daikin::types::{FanSpeed, Mode, Power, Swing, TimerMode};
use daikin_lirc::ir::daikin::DaikinCommand;
use daikin_lirc::ir::format::Arc433;
use daikin_lirc::ir::types::IrFormat;
use daikin_lirc::lirc;
use std::fs;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
struct Opt {
    /// Leave the unit powered off
    #[structopt(short, long)]
    unpowered: bool,

    /// Operation mode (auto, dry, cold, warm, fan)
    #[structopt(short, long, default_value = "auto")]
    mode: Mode,

    /// Target temperature in °C, or the offset from the automatic setpoint
    /// in auto and dry modes
    #[structopt(short, long, default_value = "25", allow_hyphen_values = true)]
    temperature: i8,

    /// Fan speed (1-5, auto, silent)
    #[structopt(short, long, default_value = "auto")]
    fan_speed: FanSpeed,

    /// Disable the swing louver
    #[structopt(short, long)]
    no_swing: bool,

    /// Powerful mode
    #[structopt(short, long)]
    powerful: bool,

    /// Timer to arm (none, on, off)
    #[structopt(long, default_value = "none")]
    timer: TimerMode,

    /// Hours until the armed timer fires
    #[structopt(long, default_value = "0")]
    hour: f64,

    /// Write the config to a file instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;

    let opt = Opt::from_args();
    debug!("opts: {:?}", opt);

    let command = DaikinCommand {
        power: if opt.unpowered { Power::Off } else { Power::On },
        mode: opt.mode,
        temperature: opt.temperature,
        fan_speed: opt.fan_speed,
        swing: if opt.no_swing { Swing::Off } else { Swing::On },
        powerful: opt.powerful,
        timer_mode: opt.timer,
        hour: opt.hour,
    };

    let frames = command.frames();
    debug!("frames: {}", frames);

    let sequence = Arc433::encode(&frames).wrap_err("Could not encode frames")?;
    let config = lirc::config(&sequence);

    match opt.output {
        Some(path) => {
            fs::write(&path, &config)
                .wrap_err_with(|| format!("Could not write {}", path.display()))?;
            println!("Wrote LIRC config to {}", path.display());
        }
        None => println!("{}", config),
    }

    Ok(())
}
