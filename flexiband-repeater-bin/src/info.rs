use clap::Args;
use color_eyre::eyre::Context;
use flexiband_repeater::list_repeater_devices;

/// Show the FPGA design info of each attached repeater.
#[derive(Args, Debug)]
pub struct Cmd {}

impl Cmd {
    pub async fn cmd(&self, filter_serial: Option<String>) -> color_eyre::Result<()> {
        let mut found_repeater = false;
        for dev in list_repeater_devices().wrap_err("Couldn't enumerate repeater devices")? {
            let serial = dev
                .serial()
                .map(|s| s.to_owned())
                .unwrap_or_else(|| String::from("Unknown"));

            if let Some(s) = filter_serial.as_ref() {
                if s != &serial {
                    continue;
                }
            }
            found_repeater = true;

            let repeater = match dev.open() {
                Ok(r) => r,
                Err(e) => {
                    println!("Couldn't open repeater, serial {serial}: {e}");
                    continue;
                }
            };

            println!();
            println!("Found repeater, USB serial {serial}");

            let info = repeater.info();
            match info.fpga_build_number().await {
                Ok(build) => println!("  Build number: {build}"),
                Err(e) => println!("  Build number: failed to retrieve ({e})"),
            }
            match info.fpga_git_hash().await {
                Ok(hash) => println!("  Git hash: {hash:08x}"),
                Err(e) => println!("  Git hash: failed to retrieve ({e})"),
            }
            match info.fpga_build_timestamp().await {
                Ok(ts) => println!("  Build time: {ts} (seconds since 2000-01-01)"),
                Err(e) => println!("  Build time: failed to retrieve ({e})"),
            }
        }

        if !found_repeater {
            if let Some(serial) = filter_serial {
                println!("Unable to locate repeater with serial number {serial}");
            } else {
                println!("Couldn't find any Flexiband repeaters");
            }
        }
        Ok(())
    }
}
