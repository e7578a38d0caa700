use clap::Args;
use color_eyre::eyre::Context;
use flexiband_repeater::{OutputChannel, Repeater};

/// Set the upconverter output attenuation.
///
/// The attenuation value for both output channels has to be between 0 and
/// 47 dB.
#[derive(Args, Debug)]
pub struct Cmd {
    /// Attenuation value for output channel 0 (0-47).
    #[arg(value_parser = clap::value_parser!(u8).range(0..=47))]
    att1: u8,

    /// Attenuation value for output channel 1 (0-47). If not specified,
    /// att1 will be used.
    #[arg(value_parser = clap::value_parser!(u8).range(0..=47))]
    att2: Option<u8>,
}

impl Cmd {
    pub async fn cmd(&self, repeater: Repeater) -> color_eyre::Result<()> {
        let att2 = self.att2.unwrap_or(self.att1);

        repeater
            .set_output_attenuation(OutputChannel::Ch0, self.att1)
            .await
            .wrap_err("Failed setting output channel 0 attenuation")?;
        println!("Set output 0 to {} dB", self.att1);

        repeater
            .set_output_attenuation(OutputChannel::Ch1, att2)
            .await
            .wrap_err("Failed setting output channel 1 attenuation")?;
        println!("Set output 1 to {} dB", att2);

        Ok(())
    }
}
