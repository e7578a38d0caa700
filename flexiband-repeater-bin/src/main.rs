mod att;
mod info;
mod power;
mod vga;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, eyre};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Open one specific repeater, chosen by serial number
    #[arg(short = 'd', long)]
    serial: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Att(att::Cmd),
    Vga(vga::Cmd),
    Power(power::Cmd),
    Info(info::Cmd),
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    if let Commands::Info(c) = args.command {
        return c.cmd(args.serial).await;
    }

    let repeater = if let Some(serial) = args.serial.as_ref() {
        let devices = flexiband_repeater::list_repeater_devices()
            .wrap_err("Couldn't list repeater devices")?;
        let mut chosen = None;
        for dev in devices {
            if let Some(s) = dev.serial() {
                if s == serial.as_str() {
                    chosen = Some(dev);
                    break;
                }
            }
        }
        let Some(chosen) = chosen else {
            return Err(eyre!("Couldn't locate repeater serial {}", serial));
        };
        chosen.open().wrap_err("Couldn't open selected repeater")?
    } else {
        flexiband_repeater::open_repeater().wrap_err("Failed to open repeater")?
    };

    match args.command {
        Commands::Info(_) => unreachable!("Should've executed the Info command earlier"),
        Commands::Att(c) => c.cmd(repeater).await,
        Commands::Vga(c) => c.cmd(repeater).await,
        Commands::Power(c) => c.cmd(repeater).await,
    }
}
