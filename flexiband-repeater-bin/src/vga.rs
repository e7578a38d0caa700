use clap::Args;
use color_eyre::eyre::Context;
use flexiband_repeater::{Repeater, RfSlot};

/// Set the VGA gain of the RF tuners.
///
/// The gain code for both RF slots has to be between 70 and 210.
#[derive(Args, Debug)]
pub struct Cmd {
    /// Amplifier value for RF slot 0 (70-210).
    #[arg(value_parser = clap::value_parser!(u8).range(70..=210))]
    amp1: u8,

    /// Amplifier value for RF slot 1 (70-210). If not specified, amp1
    /// will be used.
    #[arg(value_parser = clap::value_parser!(u8).range(70..=210))]
    amp2: Option<u8>,
}

impl Cmd {
    pub async fn cmd(&self, repeater: Repeater) -> color_eyre::Result<()> {
        let amp2 = self.amp2.unwrap_or(self.amp1);

        repeater
            .set_vga_gain(RfSlot::Slot0, self.amp1)
            .await
            .wrap_err("Failed setting RF slot 0 VGA gain")?;
        println!("Set RF slot 0 to {}", self.amp1);

        repeater
            .set_vga_gain(RfSlot::Slot1, amp2)
            .await
            .wrap_err("Failed setting RF slot 1 VGA gain")?;
        println!("Set RF slot 1 to {}", amp2);

        Ok(())
    }
}
