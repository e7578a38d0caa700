use clap::{Args, ValueEnum};
use color_eyre::eyre::Context;
use flexiband_repeater::Repeater;

/// Control the repeater state.
#[derive(Args, Debug)]
pub struct Cmd {
    /// Set the state of the repeater (on/off)
    #[arg(long, value_enum)]
    state: State,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum State {
    On,
    Off,
}

impl Cmd {
    pub async fn cmd(&self, repeater: Repeater) -> color_eyre::Result<()> {
        match self.state {
            State::On => {
                repeater
                    .power_on()
                    .await
                    .wrap_err("Failed powering up the upconverter")?;
                println!("Upconverter powered up and started");
            }
            State::Off => {
                repeater
                    .power_off()
                    .await
                    .wrap_err("Failed powering down the upconverter")?;
                println!("Upconverter stopped and powered down");
            }
        }
        Ok(())
    }
}
